use vecdraw_designer::{
    Color, DesignEllipse, DesignLine, DesignRectangle, DesignerShape, Point, Shape, ShapeType,
};

#[test]
fn test_line_hits_on_segment_only() {
    let line = DesignLine::new(Point::new(0, 0), Point::new(10, 0));
    assert!(line.hit_test(Point::new(5, 0)));
    assert!(line.hit_test(Point::new(5, 4)));
    assert!(!line.hit_test(Point::new(5, 5)));
    // Points on the infinite extension are not hits.
    assert!(!line.hit_test(Point::new(100, 0)));
    assert!(!line.hit_test(Point::new(-20, 0)));
}

#[test]
fn test_zero_length_line_hit_test() {
    let dot = DesignLine::new(Point::new(3, 3), Point::new(3, 3));
    assert!(dot.hit_test(Point::new(3, 3)));
    assert!(dot.hit_test(Point::new(6, 6)));
    assert!(!dot.hit_test(Point::new(3, 9)));
}

#[test]
fn test_rectangle_contains_edges() {
    let rect = DesignRectangle::new(0, 0, 10, 20);
    assert!(rect.hit_test(Point::new(0, 0)));
    assert!(rect.hit_test(Point::new(10, 20)));
    assert!(rect.hit_test(Point::new(5, 20)));
    assert!(!rect.hit_test(Point::new(11, 5)));
    assert!(!rect.hit_test(Point::new(5, -1)));
}

#[test]
fn test_ellipse_contains() {
    let ellipse = DesignEllipse::new(0, 0, 20, 10);
    assert!(ellipse.hit_test(Point::new(10, 5)));
    assert!(ellipse.hit_test(Point::new(0, 5)));
    assert!(ellipse.hit_test(Point::new(10, 0)));
    assert!(!ellipse.hit_test(Point::new(1, 1)));
    assert!(!ellipse.hit_test(Point::new(21, 5)));
}

#[test]
fn test_centers_use_integer_division() {
    let line = DesignLine::new(Point::new(0, 0), Point::new(5, 3));
    assert_eq!(line.center(), Point::new(2, 1));
    let rect = DesignRectangle::new(1, 1, 5, 5);
    assert_eq!(rect.center(), Point::new(3, 3));
}

#[test]
fn test_translate_moves_center_exactly() {
    let mut shapes = vec![
        Shape::from_corners(ShapeType::Line, Point::new(0, 0), Point::new(5, 3)),
        Shape::from_corners(ShapeType::Rectangle, Point::new(9, 9), Point::new(0, 0)),
        Shape::from_corners(ShapeType::Ellipse, Point::new(-3, 4), Point::new(8, 17)),
    ];
    for shape in &mut shapes {
        let (a, b) = shape.corners();
        let size = a.delta_to(&b);
        shape.translate(Point::new(-40, 77));
        assert_eq!(shape.center(), Point::new(-40, 77));
        let (a, b) = shape.corners();
        assert_eq!(a.delta_to(&b), size);
    }
}

#[test]
fn test_line_record_format() {
    let line: Shape = DesignLine::new(Point::new(0, 0), Point::new(10, 0)).into();
    assert_eq!(line.serialize(), "Linea,0,0,10,0");
    assert_eq!(line.color(), Color::WHITE);
}
