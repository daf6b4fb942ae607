use vecdraw_designer::{
    Color, DesignerShape, DesignerState, DrawingMode, PointerButton, Point, RenderSurface, Pen,
    ShapeBox, ShapeType,
};

#[derive(Default)]
struct Recorder {
    colors: Vec<Color>,
}

impl RenderSurface for Recorder {
    fn stroke_line(&mut self, _from: Point, _to: Point, pen: Pen) {
        self.colors.push(pen.color);
    }

    fn stroke_rectangle(&mut self, _rect: ShapeBox, pen: Pen) {
        self.colors.push(pen.color);
    }

    fn stroke_ellipse(&mut self, _rect: ShapeBox, pen: Pen) {
        self.colors.push(pen.color);
    }
}

fn drag(state: &mut DesignerState, from: Point, to: Point) -> Option<usize> {
    state.pointer_pressed(from, PointerButton::Primary);
    state.pointer_moved(to);
    state.pointer_released(to, PointerButton::Primary)
}

#[test]
fn test_draw_each_shape_type() {
    let mut state = DesignerState::new();
    state.set_mode(DrawingMode::Draw);

    for kind in ShapeType::ALL {
        state.set_shape_type(kind);
        drag(&mut state, Point::new(0, 0), Point::new(10, 20));
    }

    let records: Vec<String> = state.canvas.shapes().iter().map(|s| s.serialize()).collect();
    assert_eq!(
        records,
        vec!["Linea,0,0,10,20", "Rectangulo,0,0,10,20", "Elipse,0,0,10,20"]
    );
    assert_eq!(state.display_name(), "Untitled*");
}

#[test]
fn test_select_then_switch_mode_resets_highlight() {
    let mut state = DesignerState::new();
    state.canvas.add_rectangle(Point::new(0, 0), Point::new(10, 10));
    state.set_mode(DrawingMode::Select);
    state.pointer_pressed(Point::new(5, 5), PointerButton::Primary);

    let mut before = Recorder::default();
    state.render(&mut before);
    assert_eq!(before.colors, vec![Color::YELLOW]);

    state.set_mode(DrawingMode::Erase);
    let mut after = Recorder::default();
    state.render(&mut after);
    assert_eq!(after.colors, vec![Color::WHITE]);
    assert!(!state.is_moving());
}

#[test]
fn test_preview_rendered_on_top() {
    let mut state = DesignerState::new();
    state.canvas.add_line(Point::new(0, 0), Point::new(5, 5));
    state.set_mode(DrawingMode::Draw);
    state.set_shape_type(ShapeType::Ellipse);
    state.pointer_pressed(Point::new(1, 1), PointerButton::Primary);
    state.pointer_moved(Point::new(9, 9));

    let mut recorder = Recorder::default();
    state.render(&mut recorder);
    assert_eq!(recorder.colors.len(), 2);
    assert_eq!(state.canvas.len(), 1);
}

#[test]
fn test_switching_mode_cancels_draw_gesture() {
    let mut state = DesignerState::new();
    state.set_mode(DrawingMode::Draw);
    state.pointer_pressed(Point::new(1, 1), PointerButton::Primary);
    assert!(state.is_drawing());
    state.set_mode(DrawingMode::Select);
    assert!(!state.is_drawing());
    assert_eq!(
        state.pointer_released(Point::new(4, 4), PointerButton::Primary),
        None
    );
    assert!(state.canvas.is_empty());
}

#[test]
fn test_clear_and_new_design() {
    let mut state = DesignerState::new();
    state.canvas.add_line(Point::new(0, 0), Point::new(5, 5));
    state.clear_canvas();
    assert!(state.canvas.is_empty());
    assert!(state.is_modified);

    state.new_design();
    assert!(!state.is_modified);
    assert_eq!(state.display_name(), "Untitled");
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sketch.vdr");

    let mut state = DesignerState::new();
    state.canvas.add_line(Point::new(0, 0), Point::new(10, 0));
    state.canvas.add_rectangle(Point::new(0, 0), Point::new(10, 20));
    state.canvas.set_selected(1).unwrap();
    state.save_to_file(&path).unwrap();
    assert_eq!(state.display_name(), "sketch.vdr");

    let mut loaded = DesignerState::new();
    let report = loaded.load_from_file(&path).unwrap();
    assert!(report.is_clean());
    assert_eq!(loaded.canvas.len(), 2);
    assert_eq!(
        loaded.canvas.shapes()[1].corners(),
        (Point::new(0, 0), Point::new(10, 20))
    );
    assert_eq!(loaded.canvas.shapes()[1].color(), Color::WHITE);
    assert_eq!(loaded.canvas.selected_index(), None);
    assert_eq!(loaded.design_name, "sketch");
}

#[test]
fn test_failed_load_keeps_canvas() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.vdr");
    std::fs::write(&path, "Linea,0,0,1,1\nCirculo,1,2,3\n").unwrap();

    let mut state = DesignerState::new();
    state.canvas.add_ellipse(Point::new(0, 0), Point::new(4, 4));
    assert!(state.load_from_file(&path).is_err());
    assert_eq!(state.canvas.len(), 1);
    assert_eq!(state.current_file_path, None);

    assert!(state.load_from_file(dir.path().join("missing.vdr")).is_err());
    assert_eq!(state.canvas.len(), 1);
}

#[test]
fn test_skip_invalid_policy_loads_remaining_shapes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.vdr");
    std::fs::write(&path, "Linea,0,0,1,1\nCirculo,1,2,3\nElipse,0,0,4,4\n").unwrap();

    let mut state = DesignerState::new();
    state.load_policy = vecdraw_designer::LoadPolicy::SkipInvalid;
    let report = state.load_from_file(&path).unwrap();
    assert_eq!(state.canvas.len(), 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line, 2);
}
