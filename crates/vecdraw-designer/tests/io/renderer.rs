use image::Rgb;
use vecdraw_designer::{render_canvas, Canvas, Color, PixmapSurface, Point};
use vecdraw_settings::Config;

fn small_config() -> Config {
    let mut config = Config::default();
    config.canvas.width = 60;
    config.canvas.height = 40;
    config.canvas.background_color = Color::BLACK;
    config
}

#[test]
fn test_render_canvas_dimensions_and_background() {
    let image = render_canvas(&Canvas::new(), &small_config());
    assert_eq!(image.dimensions(), (60, 40));
    assert_eq!(image.get_pixel(30, 20), &Rgb([0, 0, 0]));
}

#[test]
fn test_selected_shape_rendered_in_highlight() {
    let mut canvas = Canvas::new();
    canvas.add_line(Point::new(0, 10), Point::new(60, 10));
    canvas.add_line(Point::new(0, 30), Point::new(60, 30));
    canvas.set_selected(1).unwrap();

    let mut surface = PixmapSurface::new(60, 40, Color::BLACK).unwrap();
    canvas.render(&mut surface);

    // Stroke width 2 centered on the line covers the row below it fully.
    assert_eq!(surface.pixel(30, 10), Some(Color::WHITE));
    assert_eq!(surface.pixel(30, 30), Some(Color::YELLOW));
    assert_eq!(surface.pixel(30, 20), Some(Color::BLACK));
}

#[test]
fn test_save_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");

    let mut canvas = Canvas::new();
    canvas.add_ellipse(Point::new(5, 5), Point::new(55, 35));
    let mut surface = PixmapSurface::new(60, 40, Color::BLACK).unwrap();
    canvas.render(&mut surface);
    surface.save_png(&path).unwrap();

    let reloaded = image::open(&path).unwrap().to_rgb8();
    assert_eq!(reloaded.dimensions(), (60, 40));
}
