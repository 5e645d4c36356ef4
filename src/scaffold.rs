use std::{fs, path::Path};

use crate::{Error, Result};

const MAIN_RS: &str = r#"use pickitup::prelude::*;

struct MyGame {
    spin: f32,
}

impl Game for MyGame {
    fn init(_ctx: &mut Context) -> anyhow::Result<Self> {
        Ok(MyGame { spin: 0.0 })
    }

    fn load(&mut self, _ctx: &mut Context) -> anyhow::Result<()> {
        Ok(())
    }

    fn update(&mut self, _ctx: &mut Context) -> anyhow::Result<()> {
        self.spin = (self.spin + 1.0) % 360.0;
        Ok(())
    }

    fn draw(&mut self, gfx: &mut Graphics, _ctx: &Context) -> anyhow::Result<()> {
        gfx.clear(WHITE);
        gfx.rect(((384, 284), (32, 32)), BLUE + rotate(self.spin));
        Ok(())
    }

    fn event(&mut self, _event: &Event, _ctx: &mut Context) -> anyhow::Result<()> {
        Ok(())
    }
}

pickitup::main!(MyGame);
"#;

const GITIGNORE: &str = "/target\n*.png\n";

fn cargo_toml(name: &str) -> String {
    format!(
        r#"[package]
name = "{name}"
version = "0.1.0"
edition = "2021"

[dependencies]
anyhow = "1"
pickitup = "{}"
"#,
        env!("CARGO_PKG_VERSION")
    )
}

fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })
}

/// Create a new game project in `project`, which must not exist yet
///
/// Writes a Cargo manifest, a `src/main.rs` with every callback stubbed out, and a `.gitignore`.
pub fn init_project(project: &Path) -> Result<()> {
    if project.exists() {
        return Err(Error::ProjectExists(project.to_owned()));
    }
    let name = project
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.replace(|c: char| !c.is_ascii_alphanumeric() && c != '_', "-"))
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "my-game".to_string());

    log::info!("initializing {name} in {}", project.display());
    let src = project.join("src");
    fs::create_dir_all(&src).map_err(|source| Error::Io {
        path: src.clone(),
        source,
    })?;
    write(&project.join("Cargo.toml"), &cargo_toml(&name))?;
    write(&src.join("main.rs"), MAIN_RS)?;
    write(&project.join(".gitignore"), GITIGNORE)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_names_the_project() {
        let toml = cargo_toml("space-game");
        assert!(toml.contains("name = \"space-game\""));
        assert!(toml.contains(concat!("pickitup = \"", env!("CARGO_PKG_VERSION"), "\"")));
    }

    #[test]
    fn template_has_every_callback() {
        for callback in ["fn init", "fn load", "fn update", "fn draw", "fn event"] {
            assert!(MAIN_RS.contains(callback), "{callback}");
        }
    }
}
