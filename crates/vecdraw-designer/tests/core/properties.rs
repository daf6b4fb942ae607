use proptest::prelude::*;
use vecdraw_designer::serialization::parse_record;
use vecdraw_designer::{DesignerShape, Point, Shape, ShapeType};

fn shape_type() -> impl Strategy<Value = ShapeType> {
    prop_oneof![
        Just(ShapeType::Line),
        Just(ShapeType::Rectangle),
        Just(ShapeType::Ellipse),
    ]
}

fn any_point() -> impl Strategy<Value = Point> {
    (any::<i32>(), any::<i32>()).prop_map(|(x, y)| Point::new(x, y))
}

fn point() -> impl Strategy<Value = Point> {
    (-10_000i32..10_000, -10_000i32..10_000).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn translate_lands_center_on_target(kind in shape_type(), a in point(), b in point(), target in point()) {
        let mut shape = Shape::from_corners(kind, a, b);
        let (first, second) = shape.corners();
        shape.translate(target);
        prop_assert_eq!(shape.center(), target);
        let (moved_first, moved_second) = shape.corners();
        prop_assert_eq!(moved_first.delta_to(&moved_second), first.delta_to(&second));
    }

    #[test]
    fn record_reload_preserves_corners(kind in shape_type(), a in point(), b in point()) {
        let shape = Shape::from_corners(kind, a, b);
        let loaded = parse_record(&shape.serialize(), 1).unwrap();
        prop_assert_eq!(loaded.corners(), (a, b));
        prop_assert_eq!(loaded.shape_type(), kind);
    }

    #[test]
    fn center_is_contained_by_closed_shapes(a in point(), half_w in -500i32..500, half_h in -500i32..500) {
        // Even extents keep the integer center on the exact centroid.
        let b = Point::new(a.x + 2 * half_w, a.y + 2 * half_h);
        for kind in [ShapeType::Rectangle, ShapeType::Ellipse] {
            let shape = Shape::from_corners(kind, a, b);
            prop_assert!(shape.hit_test(shape.center()));
        }
    }

    #[test]
    fn geometry_is_total_over_the_coordinate_range(
        kind in shape_type(),
        a in any_point(),
        b in any_point(),
        probe in any_point(),
        target in any_point(),
    ) {
        let mut shape = Shape::from_corners(kind, a, b);
        let _ = shape.hit_test(probe);
        let _ = shape.bounds();
        shape.translate(target);
        let _ = shape.center();
        let _ = shape.hit_test(probe);
    }
}
