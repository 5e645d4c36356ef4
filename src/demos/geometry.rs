//! Draw some multi-coloured geometry to the screen.

use crate::{
    common::*,
    event::{Context, Event, Game},
    graphics::Graphics,
};

/// A few static shapes, some of them transformed
#[derive(Debug, Default)]
pub struct Geometry;

impl Game for Geometry {
    fn init(_ctx: &mut Context) -> anyhow::Result<Self> {
        Ok(Geometry)
    }

    fn update(&mut self, _ctx: &mut Context) -> anyhow::Result<()> {
        Ok(())
    }

    fn draw(&mut self, gfx: &mut Graphics, _ctx: &Context) -> anyhow::Result<()> {
        // Remove any artifacts from the previous frame
        gfx.clear(WHITE);
        // Blue square, top-left corner at (100, 100), 32 wide and high
        gfx.rect(((100, 100), (32, 32)), BLUE);
        // Green circle around (400, 300) with a radius of 100
        gfx.circ((400, 300), 100.0, GREEN);
        // Red line, 2 pixels thick
        gfx.line(((50, 80), (600, 450)), 2.0, RED);
        // Red triangle, rotated by 45 degrees and shrunk to half its size
        gfx.triangle(
            [(500, 50), (450, 100), (650, 150)],
            RED + matmul(rotate(45), scale(0.5, 0.5)),
        );
        // Blue square rotated by 45 degrees
        gfx.rect(((400, 300), (32, 32)), BLUE + rotate(45));
        Ok(())
    }

    fn event(&mut self, _event: &Event, _ctx: &mut Context) -> anyhow::Result<()> {
        Ok(())
    }
}
