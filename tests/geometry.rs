use std::time::Instant;

use pickitup::{
    common::*,
    config::{Conf, Size},
    demos::Geometry,
    event::{App, Context, Event, EventData, Game},
    graphics::{DrawCommand, DrawCommandData, Graphics},
    headless,
    keyboard::Key,
    math::Transform,
    shapes::{Circle, Line, Rectangle, Triangle},
};

fn drawn() -> Vec<DrawCommand> {
    let mut ctx = Context::new(&Conf::default());
    let mut game = Geometry::init(&mut ctx).unwrap();
    let mut gfx = Graphics::new();
    game.draw(&mut gfx, &ctx).unwrap();
    gfx.commands().to_vec()
}

fn close(a: &Transform, b: &Transform) -> bool {
    (a.0 - b.0).iter().all(|v| v.abs() < 1e-5)
}

#[test]
fn clears_once_with_white() {
    let clears: Vec<_> = drawn()
        .into_iter()
        .filter(|c| c.data == DrawCommandData::Clear)
        .collect();
    assert_eq!(clears.len(), 1);
    assert_eq!(clears[0].colour, WHITE);
}

#[test]
fn draws_two_blue_rectangles() {
    let rects: Vec<_> = drawn()
        .into_iter()
        .filter_map(|c| match c.data {
            DrawCommandData::Rect(rect) => Some((rect, c.colour, c.transform)),
            _ => None,
        })
        .collect();
    assert_eq!(rects.len(), 2);

    assert_eq!(rects[0].0, Rectangle::new((100, 100), (32, 32)));
    assert_eq!(rects[0].1, BLUE);
    assert_eq!(rects[0].2, Transform::identity());

    assert_eq!(rects[1].0, Rectangle::new((400, 300), (32, 32)));
    assert_eq!(rects[1].1, BLUE);
    assert!(close(&rects[1].2, &rotate(45)));
}

#[test]
fn draws_one_green_circle() {
    let circles: Vec<_> = drawn()
        .into_iter()
        .filter_map(|c| match c.data {
            DrawCommandData::Circle(circle) => Some((circle, c.colour)),
            _ => None,
        })
        .collect();
    assert_eq!(circles, vec![(Circle::new((400, 300), 100.0), GREEN)]);
}

#[test]
fn draws_one_red_line() {
    let lines: Vec<_> = drawn()
        .into_iter()
        .filter_map(|c| match c.data {
            DrawCommandData::Line { line, thickness } => Some((line, thickness, c.colour)),
            _ => None,
        })
        .collect();
    assert_eq!(lines, vec![(Line::new((50, 80), (600, 450)), 2.0, RED)]);
}

#[test]
fn draws_one_shrunk_rotated_triangle() {
    let triangles: Vec<_> = drawn()
        .into_iter()
        .filter_map(|c| match c.data {
            DrawCommandData::Triangle(tri) => Some((tri, c.colour, c.transform)),
            _ => None,
        })
        .collect();
    assert_eq!(triangles.len(), 1);
    let (tri, colour, transform) = &triangles[0];
    assert_eq!(*tri, Triangle::new((500, 50), (450, 100), (650, 150)));
    assert_eq!(*colour, RED);
    assert!(close(transform, &matmul(rotate(45), scale(0.5, 0.5))));
    assert!(close(transform, &(rotate(45) * scale(0.5, 0.5))));
}

#[test]
fn draws_in_script_order() {
    let kinds: Vec<_> = drawn()
        .iter()
        .map(|c| match c.data {
            DrawCommandData::Clear => "clear",
            DrawCommandData::Rect(_) => "rect",
            DrawCommandData::Circle(_) => "circ",
            DrawCommandData::Line { .. } => "line",
            DrawCommandData::Triangle(_) => "triangle",
            DrawCommandData::Sprite { .. } => "sprite",
        })
        .collect();
    assert_eq!(kinds, ["clear", "rect", "circ", "line", "triangle", "rect"]);
}

#[test]
fn other_callbacks_do_nothing() {
    let mut ctx = Context::new(&Conf::default());
    let mut game = Geometry::init(&mut ctx).unwrap();
    game.update(&mut ctx).unwrap();
    game.load(&mut ctx).unwrap();
    for data in [
        EventData::Key {
            key: Key::Space,
            pressed: true,
        },
        EventData::MouseLeft,
        EventData::Text { text: "hi".into() },
    ] {
        game.event(&Event::new(data), &mut ctx).unwrap();
    }
    assert!(!ctx.exit_requested());
    assert!(ctx.resources().is_empty());
}

#[test]
fn runtime_frame_keeps_only_the_white_clear() {
    let mut app = App::<Geometry>::new(&Conf::default()).unwrap();
    let mut gfx = Graphics::new();
    app.frame(Instant::now(), &mut gfx).unwrap();
    assert_eq!(gfx.commands().len(), 6);
    assert_eq!(gfx.in_paint_order()[0].colour, WHITE);
}

#[test]
fn renders_the_expected_pixels() {
    let canvas = headless::render_frames::<Geometry>(&Conf::default(), 1).unwrap();
    assert_eq!(canvas.size(), Size::new(800, 600).as_vec2());

    // background
    assert_eq!(canvas.pixel(10, 10), WHITE);
    // plain square
    assert_eq!(canvas.pixel(101, 101), BLUE);
    assert_eq!(canvas.pixel(133, 101), WHITE);
    // the line
    assert_eq!(canvas.pixel(300, 248), RED);
    // circle
    assert_eq!(canvas.pixel(400, 250), GREEN);
    assert_eq!(canvas.pixel(400, 405), WHITE);
    // rotated square: its tip sticks out below the unrotated square's corner
    assert_eq!(canvas.pixel(416, 336), BLUE);
    // while the unrotated square's corner stays green
    assert_eq!(canvas.pixel(430, 330), GREEN);
    // shrunk triangle around its centroid
    assert_eq!(canvas.pixel(533, 100), RED);
    assert_eq!(canvas.pixel(640, 145), WHITE);
}
