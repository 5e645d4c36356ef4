use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pickitup::{
    config::{Conf, Size},
    demos::{Boxes, Geometry},
    headless,
    logging::init_logging,
    scaffold,
};

/// pickitup - a tiny 2D game framework
#[derive(Parser)]
#[command(name = "pickitup", version)]
#[command(about = "Run, render and create pickitup games")]
struct Cli {
    /// Log filter, in `RUST_LOG` syntax
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a demo in a window
    Run {
        /// Which demo
        #[arg(value_enum, default_value_t = Demo::Geometry)]
        demo: Demo,
        /// Window size, WIDTHxHEIGHT
        #[arg(long, default_value = "800x600")]
        size: Size,
        /// Milliseconds between updates
        #[arg(long)]
        update_rate: Option<f64>,
    },

    /// Render a demo without a window and save the last frame as a PNG
    Render {
        /// Which demo
        #[arg(value_enum, default_value_t = Demo::Geometry)]
        demo: Demo,
        /// Image size, WIDTHxHEIGHT
        #[arg(long, default_value = "800x600")]
        size: Size,
        /// How many frames to run before saving
        #[arg(long, default_value_t = 1)]
        frames: u32,
        /// Where to save the frame
        #[arg(short, long, default_value = "frame.png")]
        output: PathBuf,
    },

    /// Create a new game project
    Init {
        /// Directory to create
        project: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Demo {
    Geometry,
    Boxes,
}

#[cfg(feature = "window")]
fn run_windowed(demo: Demo, conf: Conf) -> Result<()> {
    match demo {
        Demo::Geometry => pickitup::window::run::<Geometry>(conf),
        Demo::Boxes => pickitup::window::run::<Boxes>(conf),
    }
}

#[cfg(not(feature = "window"))]
fn run_windowed(demo: Demo, conf: Conf) -> Result<()> {
    anyhow::bail!(
        "can't open a window for {demo:?} at {}: built without the `window` feature, try `pickitup render`",
        conf.size
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref());

    match cli.command {
        Commands::Run {
            demo,
            size,
            update_rate,
        } => {
            let mut conf = Conf {
                size,
                ..Conf::default()
            };
            if let Some(rate) = update_rate {
                conf.update_rate_ms = rate;
            }
            run_windowed(demo, conf)
        }
        Commands::Render {
            demo,
            size,
            frames,
            output,
        } => {
            let conf = Conf {
                size,
                ..Conf::default()
            };
            let canvas = match demo {
                Demo::Geometry => headless::render_frames::<Geometry>(&conf, frames),
                Demo::Boxes => headless::render_frames::<Boxes>(&conf, frames),
            }?;
            canvas
                .save_png(&output)
                .with_context(|| format!("Failed to save {}", output.display()))
        }
        Commands::Init { project } => {
            scaffold::init_project(&project)?;
            println!("Initialized. To run: `cd {} && cargo run`", project.display());
            Ok(())
        }
    }
}
