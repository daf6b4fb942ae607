use vecdraw_core::{Error, LoadPolicy, RecordError};
use vecdraw_designer::serialization::{self, from_text, to_text};
use vecdraw_designer::{Canvas, DesignerShape, Point, ShapeType};

#[test]
fn test_line_round_trip() {
    let mut canvas = Canvas::new();
    canvas.add_line(Point::new(0, 0), Point::new(10, 0));
    let text = to_text(canvas.shapes());
    assert_eq!(text, "Linea,0,0,10,0\n");

    let report = from_text(&text, LoadPolicy::Strict).unwrap();
    assert_eq!(
        report.shapes[0].corners(),
        (Point::new(0, 0), Point::new(10, 0))
    );
}

#[test]
fn test_rectangle_round_trip() {
    let mut canvas = Canvas::new();
    canvas.add_rectangle(Point::new(0, 0), Point::new(10, 20));
    let text = to_text(canvas.shapes());
    assert_eq!(text, "Rectangulo,0,0,10,20\n");

    let report = from_text(&text, LoadPolicy::Strict).unwrap();
    assert_eq!(report.shapes[0].shape_type(), ShapeType::Rectangle);
    assert_eq!(
        report.shapes[0].corners(),
        (Point::new(0, 0), Point::new(10, 20))
    );
}

#[test]
fn test_empty_file_loads_empty_drawing() {
    let report = from_text("", LoadPolicy::Strict).unwrap();
    assert!(report.shapes.is_empty());
    assert!(report.is_clean());

    let report = from_text("\n  \n", LoadPolicy::Strict).unwrap();
    assert!(report.shapes.is_empty());
}

#[test]
fn test_strict_reports_line_number() {
    let err = from_text("Elipse,0,0,4,4\nLinea,1,2,3,four\n", LoadPolicy::Strict).unwrap_err();
    assert!(err.is_malformed_record());
    assert_eq!(
        err.to_string(),
        "Malformed record at line 2: field 4 is not an integer: 'four'"
    );
    assert!(matches!(
        err,
        Error::MalformedRecord {
            line: 2,
            reason: RecordError::InvalidNumber { field: 4, .. }
        }
    ));
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drawing.vdr");

    let mut canvas = Canvas::new();
    canvas.add_line(Point::new(-3, 4), Point::new(7, -8));
    canvas.add_rectangle(Point::new(50, 50), Point::new(40, 30));
    canvas.add_ellipse(Point::new(1, 1), Point::new(2, 2));

    serialization::save_to_file(&path, canvas.shapes()).unwrap();
    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        on_disk,
        "Linea,-3,4,7,-8\nRectangulo,50,50,-10,-20\nElipse,1,1,1,1\n"
    );

    let report = serialization::load_from_file(&path, LoadPolicy::Strict).unwrap();
    assert_eq!(report.shapes, canvas.shapes());
}

#[test]
fn test_load_missing_file_has_context() {
    let dir = tempfile::tempdir().unwrap();
    let err = serialization::load_from_file(dir.path().join("nope.vdr"), LoadPolicy::Strict)
        .unwrap_err();
    assert!(err.to_string().starts_with("Failed to read drawing file"));
}
