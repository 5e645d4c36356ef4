use crate::{graphics::Texture, math::Vec2, shapes::Rectangle, Error, Result};

/// A sprite-strip animation: `nframes` equally wide frames laid out left to right
#[derive(Debug, Clone)]
pub struct Animation {
    texture: Texture,
    nframes: usize,
    /// Seconds for one full cycle
    duration: f64,
    current_t: f64,
    played: bool,
    frame_size: Vec2,
}

impl Animation {
    /// Split `texture` into `nframes` frames played over `duration` seconds
    pub fn new(texture: Texture, nframes: usize, duration: f64) -> Result<Self> {
        if nframes == 0 {
            return Err(Error::InvalidAnimation("an animation needs at least one frame".into()));
        }
        if !(duration > 0.0) {
            return Err(Error::InvalidAnimation(format!(
                "duration must be positive, got {duration}"
            )));
        }
        let size = texture.size();
        let frame_size = Vec2::new(size.x() / nframes as crate::math::Fl, size.y());
        Ok(Self {
            texture,
            nframes,
            duration,
            current_t: 0.0,
            played: false,
            frame_size,
        })
    }

    /// Advance the clock by one update step, in milliseconds
    pub fn update(&mut self, step_ms: f64) {
        self.current_t += step_ms / 1000.0;
        if self.current_t >= self.duration {
            self.current_t %= self.duration;
        }
        if self.nth() == self.nframes - 1 {
            self.played = true;
        }
    }

    /// Index of the frame currently shown
    pub fn nth(&self) -> usize {
        let step = (self.current_t / self.duration * self.nframes as f64).floor() as usize;
        (step.min(self.nframes - 1) + 1) % self.nframes
    }

    /// Whether the last frame has been reached since the animation (re)started
    pub fn played(&self) -> bool {
        self.played
    }

    /// Restart from the beginning
    pub fn play(&mut self) {
        self.played = false;
        self.current_t = 0.0;
    }

    /// Change the length of one cycle, in seconds
    pub fn set_duration(&mut self, duration: f64) -> Result<()> {
        if !(duration > 0.0) {
            return Err(Error::InvalidAnimation(format!(
                "duration must be positive, got {duration}"
            )));
        }
        self.duration = duration;
        self.current_t %= duration;
        Ok(())
    }

    /// Length of one cycle, in seconds
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Size of a single frame
    pub fn frame_size(&self) -> Vec2 {
        self.frame_size
    }

    /// Region of the texture holding the current frame
    pub fn source_rect(&self) -> Rectangle {
        Rectangle::new(
            Vec2::new(self.frame_size.x() * self.nth() as crate::math::Fl, 0),
            self.frame_size,
        )
    }

    /// The whole sprite strip
    pub fn texture(&self) -> &Texture {
        &self.texture
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Colour;

    fn strip(nframes: usize, duration: f64) -> Animation {
        Animation::new(Texture::new_fill(8 * nframes as u32, 8, Colour::WHITE), nframes, duration).unwrap()
    }

    #[test]
    fn frames_are_cut_from_a_horizontal_strip() {
        let anim = strip(4, 1.0);
        assert_eq!(anim.frame_size(), Vec2::new(8, 8));
        // the clock starts just inside the first frame, so frame 1 shows first
        assert_eq!(anim.nth(), 1);
        assert_eq!(anim.source_rect(), Rectangle::new((8, 0), (8, 8)));
    }

    #[test]
    fn clock_wraps_and_marks_played() {
        let mut anim = strip(4, 1.0);
        anim.update(500.0);
        assert_eq!(anim.nth(), 3);
        assert!(anim.played());
        anim.update(600.0);
        assert_eq!(anim.nth(), 1);
        anim.play();
        assert!(!anim.played());
    }

    #[test]
    fn rejects_impossible_parameters() {
        let tex = Texture::new_fill(8, 8, Colour::WHITE);
        assert!(Animation::new(tex.clone(), 0, 1.0).is_err());
        assert!(Animation::new(tex.clone(), 2, 0.0).is_err());
        assert!(strip(2, 1.0).set_duration(-1.0).is_err());
    }

    #[test]
    fn shrinking_the_duration_keeps_the_clock_inside_one_cycle() {
        let mut anim = strip(2, 1.0);
        anim.update(900.0);
        anim.set_duration(1e-300).unwrap();
        assert!(anim.nth() < 2);
        assert_eq!(anim.source_rect().size, Vec2::new(8, 8));
        anim.update(16.0);
        assert!(anim.nth() < 2);

        let mut anim = strip(4, 1.0);
        anim.update(600.0);
        anim.set_duration(0.5).unwrap();
        // 0.6s wraps to 0.1s of a 0.5s cycle
        assert_eq!(anim.nth(), 1);
    }
}
