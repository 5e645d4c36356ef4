use std::time::{Duration, Instant};

use crate::{
    config::Conf,
    event::{App, Game},
    graphics::{render_2d, Canvas, Graphics},
};

/// Run `G` without a window for `frames` frames and return the last one
///
/// Frames are spaced one update period apart, so every frame after the first runs exactly one update.
/// A game that changes its update rate gets the new spacing from the next frame on.
pub fn render_frames<G: Game>(conf: &Conf, frames: u32) -> anyhow::Result<Canvas> {
    let mut app = App::<G>::new(conf)?;
    let mut gfx = Graphics::new();
    let mut canvas = Canvas::new(conf.size.width, conf.size.height);
    let mut now = Instant::now();

    for i in 0..frames.max(1) {
        app.frame(now, &mut gfx)?;
        if app.exit_requested() {
            log::debug!("game asked to exit after {} frames", i + 1);
            break;
        }
        let period = Duration::from_secs_f64(app.context().update_rate() / 1000.0);
        now = match now.checked_add(period) {
            Some(next) => next,
            None => {
                log::debug!("update period of {period:?} runs past the clock, stopping after {} frames", i + 1);
                break;
            }
        };
    }
    render_2d::render(&gfx, &mut canvas);
    Ok(canvas)
}
