//! The drawing facade: every frame, a game records what it wants drawn into a [Graphics], and a
//! renderer (see [render_2d]) turns the recorded commands into pixels.
//!
//! ```
//! use pickitup::{common::*, graphics::{Graphics, Style}};
//!
//! let mut gfx = Graphics::new();
//! gfx.clear(WHITE);
//! gfx.rect(((100, 100), (32, 32)), BLUE);
//! gfx.triangle([(0, 0), (10, 0), (0, 10)], Style::new().colour(RED).transform(rotate(45)));
//! assert_eq!(gfx.commands().len(), 3);
//! ```

use std::ops::Add;

use crate::{
    anim::Animation,
    colour::Colour,
    math::{Fl, IntoFl, Transform, Vec2},
    shapes::{Circle, Line, Rectangle, Triangle},
};

/// Software rasterizer for recorded frames
pub mod render_2d;
mod texture;

pub use render_2d::Canvas;
pub use texture::Texture;

/// Optional arguments shared by every draw call
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    /// Fill colour for shapes, tint for sprites; shapes default to red, sprites to no tint
    pub colour: Option<Colour>,
    /// Applied relative to the center of whatever is drawn
    pub transform: Transform,
    /// Draw height, higher values paint later
    pub z: i32,
}

impl Style {
    /// Default style: no colour override, identity transform, height 0
    pub fn new() -> Self {
        Self::default()
    }
    /// Set the colour
    pub fn colour(mut self, colour: impl Into<Colour>) -> Self {
        self.colour = Some(colour.into());
        self
    }
    /// Set the transform
    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
    /// Set the draw height
    pub fn z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }
}

impl From<Colour> for Style {
    fn from(colour: Colour) -> Self {
        Style::new().colour(colour)
    }
}

impl From<Transform> for Style {
    fn from(transform: Transform) -> Self {
        Style::new().transform(transform)
    }
}

impl From<(Colour, Transform)> for Style {
    fn from((colour, transform): (Colour, Transform)) -> Self {
        Style::new().colour(colour).transform(transform)
    }
}

/// `RED + rotate(45)` is a red style with that transform
impl Add<Transform> for Colour {
    type Output = Style;

    fn add(self, transform: Transform) -> Style {
        Style::from((self, transform))
    }
}

/// Where a sprite goes: at a point in its natural size, or stretched over a rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Top-left corner, natural size
    At(Vec2),
    /// Stretched to fill the rectangle
    Fill(Rectangle),
}

impl Placement {
    /// The destination rectangle for something of the given natural size
    pub fn rect_for(self, natural_size: Vec2) -> Rectangle {
        match self {
            Placement::At(pos) => Rectangle { pos, size: natural_size },
            Placement::Fill(rect) => rect,
        }
    }
}

impl From<Vec2> for Placement {
    fn from(pos: Vec2) -> Self {
        Placement::At(pos)
    }
}

impl<T: IntoFl, U: IntoFl> From<(T, U)> for Placement {
    fn from(pos: (T, U)) -> Self {
        Placement::At(pos.into())
    }
}

impl From<Rectangle> for Placement {
    fn from(rect: Rectangle) -> Self {
        Placement::Fill(rect)
    }
}

/// What a [DrawCommand] draws
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommandData {
    /// Fill the whole target
    Clear,
    /// A filled rectangle
    Rect(Rectangle),
    /// A filled circle
    Circle(Circle),
    /// A line of some thickness
    Line {
        /// End points
        line: Line,
        /// Width, in pixels
        thickness: Fl,
    },
    /// A filled triangle
    Triangle(Triangle),
    /// (Part of) a texture, stretched over `dest`
    Sprite {
        /// The image
        texture: Texture,
        /// Where it goes
        dest: Rectangle,
        /// Which part of the texture, in texture pixels
        source: Rectangle,
    },
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// The transform as given, before pivoting around the shape's center
    pub transform: Transform,
    /// Fill colour or tint
    pub colour: Colour,
    /// Draw height
    pub z: i32,
    /// The shape
    pub data: DrawCommandData,
}

impl DrawCommand {
    /// The point the transform pivots around
    pub fn center(&self) -> Vec2 {
        match &self.data {
            DrawCommandData::Clear => Vec2::zero(),
            DrawCommandData::Rect(rect) => rect.center(),
            DrawCommandData::Circle(circle) => circle.center(),
            DrawCommandData::Line { line, .. } => line.center(),
            DrawCommandData::Triangle(tri) => tri.center(),
            DrawCommandData::Sprite { dest, .. } => dest.center(),
        }
    }

    /// The transform applied to the shape's own coordinates
    pub fn local_transform(&self) -> Transform {
        self.transform.about(self.center())
    }
}

/// Records one frame's worth of draw calls
#[derive(Debug, Default)]
pub struct Graphics {
    commands: Vec<DrawCommand>,
    view: Option<Rectangle>,
}

impl Graphics {
    /// An empty frame with the default (identity) view
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, style: Style, default_colour: Colour, data: DrawCommandData) {
        self.commands.push(DrawCommand {
            transform: style.transform,
            colour: style.colour.unwrap_or(default_colour),
            z: style.z,
            data,
        });
    }

    /// Fill the whole target with `colour`, discarding everything drawn so far this frame
    pub fn clear(&mut self, colour: Colour) {
        if !self.commands.is_empty() {
            log::trace!("clear discards {} draw commands", self.commands.len());
        }
        self.commands.clear();
        self.commands.push(DrawCommand {
            transform: Transform::identity(),
            colour,
            z: i32::MIN,
            data: DrawCommandData::Clear,
        });
    }

    /// Draw a filled rectangle, given as `(top_left, size)`
    pub fn rect(&mut self, rect: impl Into<Rectangle>, style: impl Into<Style>) {
        self.push(style.into(), Colour::RED, DrawCommandData::Rect(rect.into()));
    }

    /// Draw a filled circle
    pub fn circ(&mut self, center: impl Into<Vec2>, radius: impl IntoFl, style: impl Into<Style>) {
        self.push(
            style.into(),
            Colour::RED,
            DrawCommandData::Circle(Circle::new(center, radius)),
        );
    }

    /// Draw a line between two end points
    pub fn line(&mut self, line: impl Into<Line>, thickness: impl IntoFl, style: impl Into<Style>) {
        self.push(
            style.into(),
            Colour::RED,
            DrawCommandData::Line {
                line: line.into(),
                thickness: thickness.into_fl(),
            },
        );
    }

    /// Draw a filled triangle
    pub fn triangle(&mut self, triangle: impl Into<Triangle>, style: impl Into<Style>) {
        self.push(
            style.into(),
            Colour::RED,
            DrawCommandData::Triangle(triangle.into()),
        );
    }

    /// Draw a whole texture
    pub fn sprite(&mut self, texture: &Texture, placement: impl Into<Placement>, style: impl Into<Style>) {
        let size = texture.size();
        self.push(
            style.into(),
            Colour::WHITE,
            DrawCommandData::Sprite {
                texture: texture.clone(),
                dest: placement.into().rect_for(size),
                source: Rectangle::new(Vec2::zero(), size),
            },
        );
    }

    /// Draw the current frame of an animation
    pub fn anim(&mut self, anim: &Animation, placement: impl Into<Placement>, style: impl Into<Style>) {
        self.push(
            style.into(),
            Colour::WHITE,
            DrawCommandData::Sprite {
                texture: anim.texture().clone(),
                dest: placement.into().rect_for(anim.frame_size()),
                source: anim.source_rect(),
            },
        );
    }

    /// Show only `view` (in world coordinates), stretched over the whole target
    pub fn set_view(&mut self, view: Rectangle) {
        self.view = Some(view);
    }

    /// The current view, if one was set
    pub fn view(&self) -> Option<Rectangle> {
        self.view
    }

    /// Maps world coordinates onto a target of the given size
    pub fn view_transform(&self, target_size: Vec2) -> Transform {
        match self.view {
            Some(view) if view.size.x() != 0.0 && view.size.y() != 0.0 => {
                let scale = target_size / view.size;
                Transform::scale(scale.x(), scale.y()) * Transform::translate(-view.pos)
            }
            _ => Transform::identity(),
        }
    }

    /// Convert a point on a target of the given size back into world coordinates
    pub fn screen_to_world(&self, point: Vec2, target_size: Vec2) -> Vec2 {
        self.view_transform(target_size)
            .inverse()
            .map(|inv| inv * point)
            .unwrap_or(point)
    }

    /// Everything recorded so far, in call order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Everything recorded so far, lowest `z` first; the clear paints before anything else
    pub fn in_paint_order(&self) -> Vec<&DrawCommand> {
        let mut sorted: Vec<_> = self.commands.iter().collect();
        sorted.sort_by_key(|cmd| cmd.z);
        sorted
    }

    /// Drop everything recorded, ready for the next frame; the view is kept
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::*;

    #[test]
    fn shapes_default_to_red_and_sprites_to_no_tint() {
        let mut gfx = Graphics::new();
        gfx.circ((1, 1), 1, Style::new());
        gfx.sprite(&Texture::new_fill(4, 2, WHITE), (10, 10), Style::new());
        assert_eq!(gfx.commands()[0].colour, RED);
        assert_eq!(gfx.commands()[1].colour, WHITE);
        let DrawCommandData::Sprite { dest, source, .. } = &gfx.commands()[1].data else {
            panic!("expected a sprite");
        };
        assert_eq!(*dest, Rectangle::new((10, 10), (4, 2)));
        assert_eq!(*source, Rectangle::new((0, 0), (4, 2)));
    }

    #[test]
    fn colour_plus_transform_is_a_style() {
        let style = BLUE + rotate(45);
        assert_eq!(style.colour, Some(BLUE));
        assert_eq!(style.transform, rotate(45));
        assert_eq!(style.z, 0);
    }

    #[test]
    fn clear_discards_earlier_commands() {
        let mut gfx = Graphics::new();
        gfx.clear(BLACK);
        gfx.rect(((0, 0), (1, 1)), BLUE);
        gfx.clear(WHITE);
        assert_eq!(gfx.commands().len(), 1);
        assert_eq!(gfx.commands()[0].data, DrawCommandData::Clear);
        assert_eq!(gfx.commands()[0].colour, WHITE);
    }

    #[test]
    fn paint_order_sorts_by_height_and_keeps_call_order() {
        let mut gfx = Graphics::new();
        gfx.rect(((0, 0), (1, 1)), Style::new().z(10));
        gfx.line(((0, 0), (1, 1)), 1, Style::new().z(5));
        gfx.clear(WHITE);
        gfx.circ((0, 0), 1, Style::new().z(3));
        gfx.triangle([(0, 0), (1, 0), (0, 1)], Style::new().z(-2));
        gfx.rect(((2, 2), (1, 1)), Style::new().z(3));

        let order: Vec<_> = gfx.in_paint_order().iter().map(|c| c.data.clone()).collect();
        assert!(matches!(order[0], DrawCommandData::Clear));
        assert!(matches!(order[1], DrawCommandData::Triangle(_)));
        assert!(matches!(order[2], DrawCommandData::Circle(_)));
        assert!(matches!(order[3], DrawCommandData::Rect(_)));
    }

    #[test]
    fn transforms_pivot_around_the_shape_center() {
        let mut gfx = Graphics::new();
        gfx.rect(((400, 300), (32, 32)), rotate(45));
        let cmd = &gfx.commands()[0];
        assert_eq!(cmd.transform, rotate(45));
        let center = Vec2::new(416, 316);
        assert!((cmd.local_transform() * center - center).length() < 1e-3);
    }

    #[test]
    fn view_maps_world_onto_the_target() {
        let mut gfx = Graphics::new();
        let target = Vec2::new(800, 600);
        assert_eq!(gfx.view_transform(target), Transform::identity());

        gfx.set_view(Rectangle::new((100, 100), (400, 300)));
        let screen = gfx.view_transform(target) * Vec2::new(300, 250);
        assert!((screen - Vec2::new(400, 300)).length() < 1e-3);
        let world = gfx.screen_to_world(Vec2::new(800, 600), target);
        assert!((world - Vec2::new(500, 400)).length() < 1e-3);

        gfx.reset();
        assert!(gfx.commands().is_empty());
        assert!(gfx.view().is_some());
    }
}
