use std::{collections::HashMap, path::Path};

use crate::{anim::Animation, graphics::Texture, Error, Result};

/// Named sprites and animations, declared during `init` and looked up while drawing
#[derive(Debug, Default)]
pub struct Resources {
    sprites: HashMap<String, Texture>,
    anims: HashMap<String, Animation>,
}

impl Resources {
    /// An empty set of resources
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an image from disk and store it under `name`
    pub fn load_sprite(&mut self, name: impl Into<String>, path: impl AsRef<Path>) -> Result<()> {
        let texture = Texture::new(path)?;
        self.insert_sprite(name, texture);
        Ok(())
    }

    /// Store an existing texture under `name`, replacing any previous sprite of that name
    pub fn insert_sprite(&mut self, name: impl Into<String>, texture: Texture) {
        let name = name.into();
        if self.sprites.insert(name.clone(), texture).is_some() {
            log::warn!("sprite {name:?} was declared twice, keeping the latest");
        }
    }

    /// Load a sprite strip from disk and store it as an animation under `name`
    pub fn load_anim(
        &mut self,
        name: impl Into<String>,
        path: impl AsRef<Path>,
        nframes: usize,
        duration: f64,
    ) -> Result<()> {
        let anim = Animation::new(Texture::new(path)?, nframes, duration)?;
        self.insert_anim(name, anim);
        Ok(())
    }

    /// Store an existing animation under `name`, replacing any previous animation of that name
    pub fn insert_anim(&mut self, name: impl Into<String>, anim: Animation) {
        let name = name.into();
        if self.anims.insert(name.clone(), anim).is_some() {
            log::warn!("animation {name:?} was declared twice, keeping the latest");
        }
    }

    /// Look up a sprite
    pub fn sprite(&self, name: &str) -> Result<&Texture> {
        self.sprites.get(name).ok_or_else(|| Error::MissingResource {
            kind: "sprite",
            name: name.to_owned(),
        })
    }

    /// Look up an animation
    pub fn anim(&self, name: &str) -> Result<&Animation> {
        self.anims.get(name).ok_or_else(|| Error::MissingResource {
            kind: "animation",
            name: name.to_owned(),
        })
    }

    /// Look up an animation for modification
    pub fn anim_mut(&mut self, name: &str) -> Result<&mut Animation> {
        self.anims.get_mut(name).ok_or_else(|| Error::MissingResource {
            kind: "animation",
            name: name.to_owned(),
        })
    }

    /// Change how long one cycle of a named animation takes
    pub fn set_anim_duration(&mut self, name: &str, duration: f64) -> Result<()> {
        self.anim_mut(name)?.set_duration(duration)
    }

    /// Advance every animation by one update step, in milliseconds
    pub fn update_anims(&mut self, step_ms: f64) {
        for anim in self.anims.values_mut() {
            anim.update(step_ms);
        }
    }

    /// Number of sprites and animations loaded
    pub fn len(&self) -> usize {
        self.sprites.len() + self.anims.len()
    }

    /// Whether nothing has been loaded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Colour;

    #[test]
    fn missing_names_are_lookup_errors() {
        let res = Resources::new();
        let err = res.sprite("player").unwrap_err();
        assert_eq!(err.to_string(), "sprite \"player\" does not exist");
        assert!(matches!(
            res.anim("walk"),
            Err(Error::MissingResource { kind: "animation", .. })
        ));
    }

    #[test]
    fn animations_advance_together() {
        let mut res = Resources::new();
        let strip = Texture::new_fill(16, 8, Colour::WHITE);
        res.insert_anim("blink", Animation::new(strip, 2, 1.0).unwrap());
        res.insert_sprite("dot", Texture::new_fill(1, 1, Colour::RED));
        assert_eq!(res.len(), 2);

        res.update_anims(600.0);
        assert_eq!(res.anim("blink").unwrap().nth(), 0);
        res.set_anim_duration("blink", 2.0).unwrap();
        assert_eq!(res.anim("blink").unwrap().duration(), 2.0);
        assert!(res.set_anim_duration("nope", 2.0).is_err());
    }
}
