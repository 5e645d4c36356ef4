use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::{
    colour::Colour,
    math::{Fl, Transform, Vec2},
    shapes::{Rectangle, Triangle},
    Error, Result,
};

use super::{DrawCommand, DrawCommandData, Graphics, Texture};

/// Triangles smaller than this (in square pixels) are skipped
const DEGENERATE_AREA: Fl = 1e-6;

/// An RGBA pixel buffer that frames are rendered into
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// A transparent black canvas of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }
    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }
    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }
    /// Size in pixels
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }
    /// Colour of a single pixel
    pub fn pixel(&self, x: u32, y: u32) -> Colour {
        Colour::from_rgba8(self.image.get_pixel(x, y).0)
    }
    /// Change the size, dropping the current contents
    pub fn resize(&mut self, width: u32, height: u32) {
        if (width, height) != self.image.dimensions() {
            self.image = RgbaImage::new(width, height);
        }
    }
    /// The pixels as an image
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }
    /// Take the pixels out as an image
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
    /// Save the current contents as a PNG
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(Error::from)?;
        log::info!("saved {}x{} frame to {}", self.width(), self.height(), path.display());
        Ok(())
    }
    /// Overwrite every pixel
    pub fn fill(&mut self, colour: Colour) {
        let c = Rgba(colour.to_rgba8());
        for px in self.image.pixels_mut() {
            *px = c;
        }
    }

    fn blend(&mut self, x: u32, y: u32, src: Colour) {
        if src.a <= 0.0 {
            return;
        }
        let px = self.image.get_pixel_mut(x, y);
        if src.a >= 1.0 {
            *px = Rgba(src.to_rgba8());
            return;
        }
        let dst = Colour::from_rgba8(px.0);
        let out_a = src.a + dst.a * (1.0 - src.a);
        let mix = |s: f32, d: f32| (s * src.a + d * dst.a * (1.0 - src.a)) / out_a;
        *px = Rgba(Colour::new(mix(src.r, dst.r), mix(src.g, dst.g), mix(src.b, dst.b), out_a).to_rgba8());
    }

    fn fill_triangle(&mut self, tri: &[Vertex2d; 3], colour: Colour, texture: Option<&Texture>) {
        let [a, b, c] = tri.map(|v| v.position);
        let area = edge(a, b, c);
        if area.abs() < DEGENERATE_AREA {
            return;
        }

        let (w, h) = (self.width() as Fl, self.height() as Fl);
        let min_x = a.x().min(b.x()).min(c.x()).floor().max(0.0);
        let min_y = a.y().min(b.y()).min(c.y()).floor().max(0.0);
        let max_x = a.x().max(b.x()).max(c.x()).ceil().min(w);
        let max_y = a.y().max(b.y()).max(c.y()).ceil().min(h);
        if min_x >= max_x || min_y >= max_y {
            return;
        }

        for y in min_y as u32..max_y as u32 {
            for x in min_x as u32..max_x as u32 {
                let p = Vec2::new(x as Fl + 0.5, y as Fl + 0.5);
                let w0 = edge(b, c, p) / area;
                let w1 = edge(c, a, p) / area;
                let w2 = edge(a, b, p) / area;
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }
                let src = match texture {
                    Some(texture) => {
                        let uv = tri[0].uv * w0 + tri[1].uv * w1 + tri[2].uv * w2;
                        texture
                            .sample(uv.x().floor() as i64, uv.y().floor() as i64)
                            .multiply(colour)
                    }
                    None => colour,
                };
                self.blend(x, y, src);
            }
        }
    }
}

/// Twice the signed area of `a, b, p`
#[inline(always)]
fn edge(a: Vec2, b: Vec2, p: Vec2) -> Fl {
    (b.x() - a.x()) * (p.y() - a.y()) - (b.y() - a.y()) * (p.x() - a.x())
}

/// A transformed vertex, `uv` in texture pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Vertex2d {
    pub position: Vec2,
    pub uv: Vec2,
}

/// Everything needed to rasterize one draw command
#[derive(Debug)]
pub(crate) struct DrawCall<'a> {
    pub triangles: Vec<[Vertex2d; 3]>,
    pub colour: Colour,
    pub texture: Option<&'a Texture>,
}

/// Turn a shape command into screen-space triangles; `None` for a clear
pub(crate) fn tessellate<'a>(command: &'a DrawCommand, view: &Transform) -> Option<DrawCall<'a>> {
    let transform = *view * command.local_transform();
    let solid = |tris: Vec<[Vec2; 3]>| {
        tris.into_iter()
            .map(|tri| {
                tri.map(|p| Vertex2d {
                    position: &transform * p,
                    uv: Vec2::zero(),
                })
            })
            .collect::<Vec<_>>()
    };
    let (triangles, texture) = match &command.data {
        DrawCommandData::Clear => return None,
        DrawCommandData::Rect(rect) => (solid(rect.tessellate()), None),
        DrawCommandData::Circle(circle) => (solid(circle.tessellate()), None),
        DrawCommandData::Line { line, thickness } => (solid(line.tessellate(*thickness)), None),
        DrawCommandData::Triangle(Triangle { a, b, c }) => (solid(vec![[*a, *b, *c]]), None),
        DrawCommandData::Sprite {
            texture,
            dest,
            source,
        } => (sprite_triangles(&transform, dest, source), Some(texture)),
    };
    Some(DrawCall {
        triangles,
        colour: command.colour,
        texture,
    })
}

fn sprite_triangles(transform: &Transform, dest: &Rectangle, source: &Rectangle) -> Vec<[Vertex2d; 3]> {
    let [p0, p1, p2, p3] = dest.corners();
    let [u0, u1, u2, u3] = source.corners();
    let v = |p: Vec2, uv: Vec2| Vertex2d {
        position: transform * p,
        uv,
    };
    let (v0, v1, v2, v3) = (v(p0, u0), v(p1, u1), v(p2, u2), v(p3, u3));
    vec![[v0, v1, v2], [v0, v2, v3]]
}

/// Paint everything recorded in `gfx` onto `canvas`
pub fn render(gfx: &Graphics, canvas: &mut Canvas) {
    let view = gfx.view_transform(canvas.size());
    for command in gfx.in_paint_order() {
        if let DrawCommandData::Clear = command.data {
            canvas.fill(command.colour);
            continue;
        }
        if let Some(call) = tessellate(command, &view) {
            for tri in &call.triangles {
                canvas.fill_triangle(tri, call.colour, call.texture);
            }
        }
    }
}

/// Copy the canvas into a window surface buffer of `0x00RRGGBB` words
pub fn write_xrgb(canvas: &Canvas, buffer: &mut [u32]) {
    for (px, out) in canvas.image.pixels().zip(buffer.iter_mut()) {
        let [r, g, b, _] = px.0;
        *out = u32::from_be_bytes([0, r, g, b]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::*;
    use crate::graphics::Style;

    fn rendered(gfx: &Graphics, w: u32, h: u32) -> Canvas {
        let mut canvas = Canvas::new(w, h);
        render(gfx, &mut canvas);
        canvas
    }

    #[test]
    fn clear_fills_everything() {
        let mut gfx = Graphics::new();
        gfx.clear(GREEN);
        let canvas = rendered(&gfx, 4, 3);
        assert!(canvas.as_image().pixels().all(|p| p.0 == [0, 255, 0, 255]));
    }

    #[test]
    fn rectangles_cover_exactly_their_pixels() {
        let mut gfx = Graphics::new();
        gfx.clear(WHITE);
        gfx.rect(((2, 2), (4, 3)), BLUE);
        let canvas = rendered(&gfx, 10, 10);
        assert_eq!(canvas.pixel(2, 2), BLUE);
        assert_eq!(canvas.pixel(5, 4), BLUE);
        assert_eq!(canvas.pixel(6, 4), WHITE);
        assert_eq!(canvas.pixel(5, 5), WHITE);
        assert_eq!(canvas.pixel(1, 2), WHITE);
    }

    #[test]
    fn shapes_off_canvas_are_clipped() {
        let mut gfx = Graphics::new();
        gfx.clear(BLACK);
        gfx.circ((-50, -50), 20, RED);
        gfx.rect(((8, 8), (100, 100)), RED);
        let canvas = rendered(&gfx, 10, 10);
        assert_eq!(canvas.pixel(0, 0), BLACK);
        assert_eq!(canvas.pixel(9, 9), RED);
    }

    #[test]
    fn higher_z_paints_on_top() {
        let mut gfx = Graphics::new();
        gfx.rect(((0, 0), (4, 4)), Style::new().colour(RED).z(1));
        gfx.rect(((0, 0), (4, 4)), Style::new().colour(BLUE));
        let canvas = rendered(&gfx, 4, 4);
        assert_eq!(canvas.pixel(1, 1), RED);
    }

    #[test]
    fn translucent_colours_blend() {
        let mut gfx = Graphics::new();
        gfx.clear(WHITE);
        gfx.rect(((0, 0), (2, 2)), BLACK.with_alpha(0.5));
        let canvas = rendered(&gfx, 2, 2);
        assert_eq!(canvas.as_image().get_pixel(0, 0).0, [128, 128, 128, 255]);
    }

    #[test]
    fn rotation_turns_squares_into_diamonds() {
        let mut gfx = Graphics::new();
        gfx.clear(WHITE);
        gfx.rect(((10, 10), (20, 20)), Style::new().colour(BLUE).transform(rotate(45)));
        let canvas = rendered(&gfx, 40, 40);
        // the diamond's tips stick out past the original square
        assert_eq!(canvas.pixel(20, 6), BLUE);
        assert_eq!(canvas.pixel(6, 20), BLUE);
        // and its sides cut off the square's corners
        assert_eq!(canvas.pixel(11, 11), WHITE);
    }

    #[test]
    fn sprites_sample_their_source_region() {
        // left half red, right half blue
        let tex = Texture::new_from_data(2, 1, &[255, 0, 0, 255, 0, 0, 255, 255]).unwrap();
        let mut gfx = Graphics::new();
        gfx.clear(WHITE);
        gfx.sprite(&tex, Rectangle::new((0, 0), (4, 2)), Style::new());
        let canvas = rendered(&gfx, 4, 2);
        assert_eq!(canvas.pixel(0, 1), RED);
        assert_eq!(canvas.pixel(3, 0), BLUE);
    }

    #[test]
    fn view_scales_the_world() {
        let mut gfx = Graphics::new();
        gfx.set_view(Rectangle::new((0, 0), (5, 5)));
        gfx.clear(WHITE);
        gfx.rect(((0, 0), (1, 1)), RED);
        let canvas = rendered(&gfx, 10, 10);
        assert_eq!(canvas.pixel(1, 1), RED);
        assert_eq!(canvas.pixel(2, 2), WHITE);
    }

    #[test]
    fn surface_words_drop_alpha() {
        let mut canvas = Canvas::new(2, 1);
        canvas.fill(ORANGE);
        let mut buffer = [0u32; 2];
        write_xrgb(&canvas, &mut buffer);
        assert_eq!(buffer, [0x00ff8000, 0x00ff8000]);
    }
}
