//! Coloured boxes drifting around the screen. Space or a left click shuffles them.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    colour::Colour,
    common::*,
    event::{Context, Event, EventData, Game},
    graphics::{Graphics, Style},
    keyboard::Key,
    math::{Fl, Vec2},
    mouse::MouseButton,
    shapes::Rectangle,
};

const BOX_COUNT: usize = 12;
const SEED: u64 = 0x5eed;
const PALETTE: [Colour; 8] = [RED, GREEN, BLUE, YELLOW, CYAN, MAGENTA, ORANGE, PURPLE];
/// Pixels per update
const MAX_SPEED: Fl = 4.0;

#[derive(Debug, Clone, PartialEq)]
struct Bouncer {
    rect: Rectangle,
    velocity: Vec2,
    colour: Colour,
}

impl Bouncer {
    fn step(&mut self, bounds: Vec2) {
        self.rect.pos = self.rect.pos + self.velocity;
        let max = bounds - self.rect.size;
        if self.rect.pos.x() < 0.0 {
            self.rect.pos.x = 0.0;
            self.velocity.x = self.velocity.x.abs();
        } else if self.rect.pos.x() > max.x() {
            self.rect.pos.x = max.x().max(0.0);
            self.velocity.x = -self.velocity.x.abs();
        }
        if self.rect.pos.y() < 0.0 {
            self.rect.pos.y = 0.0;
            self.velocity.y = self.velocity.y.abs();
        } else if self.rect.pos.y() > max.y() {
            self.rect.pos.y = max.y().max(0.0);
            self.velocity.y = -self.velocity.y.abs();
        }
    }
}

/// A seeded set of bouncing boxes
#[derive(Debug)]
pub struct Boxes {
    rng: StdRng,
    boxes: Vec<Bouncer>,
}

impl Boxes {
    /// Same seed, same boxes
    pub fn with_seed(seed: u64, bounds: Vec2) -> Self {
        let mut boxes = Self {
            rng: StdRng::seed_from_u64(seed),
            boxes: Vec::with_capacity(BOX_COUNT),
        };
        boxes.shuffle(bounds);
        boxes
    }

    /// Throw every box somewhere new
    pub fn shuffle(&mut self, bounds: Vec2) {
        let rng = &mut self.rng;
        self.boxes = (0..BOX_COUNT)
            .map(|i| {
                let size = Vec2::new(rng.gen_range(16.0..64.0), rng.gen_range(16.0..64.0));
                let room = bounds - size;
                let pos = Vec2::new(
                    rng.gen_range(0.0..=room.x().max(0.0)),
                    rng.gen_range(0.0..=room.y().max(0.0)),
                );
                Bouncer {
                    rect: Rectangle::new(pos, size),
                    velocity: Vec2::new(
                        rng.gen_range(-MAX_SPEED..=MAX_SPEED),
                        rng.gen_range(-MAX_SPEED..=MAX_SPEED),
                    ),
                    colour: PALETTE[i % PALETTE.len()],
                }
            })
            .collect();
        log::debug!("shuffled {} boxes", self.boxes.len());
    }

    /// Where the boxes currently are
    pub fn rects(&self) -> impl Iterator<Item = Rectangle> + '_ {
        self.boxes.iter().map(|b| b.rect)
    }
}

impl Game for Boxes {
    fn init(ctx: &mut Context) -> anyhow::Result<Self> {
        Ok(Self::with_seed(SEED, ctx.target_size()))
    }

    fn update(&mut self, ctx: &mut Context) -> anyhow::Result<()> {
        let bounds = ctx.target_size();
        for b in &mut self.boxes {
            b.step(bounds);
        }
        Ok(())
    }

    fn draw(&mut self, gfx: &mut Graphics, _ctx: &Context) -> anyhow::Result<()> {
        gfx.clear(INDIGO);
        for (z, b) in self.boxes.iter().enumerate() {
            gfx.rect(b.rect, Style::new().colour(b.colour).z(z as i32));
        }
        Ok(())
    }

    fn event(&mut self, event: &Event, ctx: &mut Context) -> anyhow::Result<()> {
        let reshuffle = matches!(
            event.data,
            EventData::Key {
                key: Key::Space,
                pressed: true
            } | EventData::MouseButton {
                button: MouseButton::Left,
                pressed: true
            }
        );
        if reshuffle {
            self.shuffle(ctx.target_size());
        }
        Ok(())
    }
}
