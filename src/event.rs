use std::time::{Duration, Instant};

use anyhow::Context as _;

use crate::{
    colour::Colour,
    config::Conf,
    graphics::Graphics,
    input::InputState,
    keyboard::Key,
    math::{Transform, Vec2},
    mouse::MouseButton,
    resources::Resources,
};

#[derive(Debug, Clone, PartialEq)]
/// Data for an event
pub enum EventData {
    /// A key pressed/released event
    Key {
        /// The key
        key: Key,
        /// Whether it was pressed (true) or released (false)
        pressed: bool,
    },
    /// The user entered some text, might coincide with the key event
    Text {
        /// The text that has been typed
        text: String,
    },
    /// A mouse moved event
    MouseMoved {
        /// Where the pointer is, in world coordinates once handled by [App]
        position: Vec2,
    },
    /// The pointer entered the window
    MouseEntered,
    /// The pointer left the window
    MouseLeft,
    /// The mouse wheel (or a touchpad) scrolled
    MouseWheel {
        /// Scroll amount, in lines
        delta: Vec2,
    },
    /// A mouse click event
    MouseButton {
        /// The mouse button
        button: MouseButton,
        /// Whether it's currently pressed
        pressed: bool,
    },
    /// The window went in or out of focus
    FocusChange {
        /// Is the window currently focused
        focused: bool,
    },
    /// The window changed size
    Resized {
        /// New size, in pixels
        size: Vec2,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// An event that has occurred, usually from user input
pub struct Event {
    /// The time the event was created
    pub timestamp: Instant,
    /// The data associated with the event
    pub data: EventData,
}

impl Event {
    /// An event happening now
    pub fn new(data: EventData) -> Self {
        Self {
            timestamp: Instant::now(),
            data,
        }
    }
}

/// A game: the callbacks the runtime drives
///
/// Every callback but `init` defaults to doing nothing.
pub trait Game: Sized {
    /// Build the game state; runs once, before the window opens. Declare resources here.
    fn init(ctx: &mut Context) -> anyhow::Result<Self>;

    /// Runs once, right before the first update
    fn load(&mut self, _ctx: &mut Context) -> anyhow::Result<()> {
        Ok(())
    }

    /// Runs at the fixed update rate
    fn update(&mut self, _ctx: &mut Context) -> anyhow::Result<()> {
        Ok(())
    }

    /// Runs once per frame, after the frame has been cleared
    fn draw(&mut self, _gfx: &mut Graphics, _ctx: &Context) -> anyhow::Result<()> {
        Ok(())
    }

    /// Runs for every input event
    fn event(&mut self, _event: &Event, _ctx: &mut Context) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Everything a game can see and change about the runtime
#[derive(Debug)]
pub struct Context {
    update_rate_ms: f64,
    input: InputState,
    resources: Resources,
    exit_requested: bool,
    frame_count: u64,
}

impl Context {
    /// A fresh context for the given configuration
    pub fn new(conf: &Conf) -> Self {
        let mut ctx = Self {
            update_rate_ms: Conf::default().update_rate_ms,
            input: InputState::new(conf.size.as_vec2()),
            resources: Resources::new(),
            exit_requested: false,
            frame_count: 0,
        };
        ctx.set_update_rate(conf.update_rate_ms);
        ctx
    }

    /// Milliseconds between two updates
    pub fn update_rate(&self) -> f64 {
        self.update_rate_ms
    }

    /// Change how often `update` runs; rates that aren't a positive, representable duration are ignored
    pub fn set_update_rate(&mut self, ms: f64) {
        if ms > 0.0 && period_from_ms(ms).is_some() {
            self.update_rate_ms = ms;
        } else {
            log::warn!("ignoring update rate of {ms}ms");
        }
    }

    /// Keyboard, mouse and window state
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Loaded sprites and animations
    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    /// Loaded sprites and animations, for declaring new ones
    pub fn resources_mut(&mut self) -> &mut Resources {
        &mut self.resources
    }

    /// Ask the runtime to stop after the current frame
    pub fn exit(&mut self) {
        self.exit_requested = true;
    }

    /// Whether [Context::exit] was called
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Size of what is being drawn to, in pixels
    pub fn target_size(&self) -> Vec2 {
        self.input.window_size()
    }

    /// Number of frames drawn so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// `ms` milliseconds as a [Duration], if it is one
fn period_from_ms(ms: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(ms / 1000.0).ok()
}

/// The update clock: runs at most one update per frame, at a fixed period
#[derive(Debug, Clone)]
pub struct FixedStep {
    period: Duration,
    last: Option<Instant>,
}

impl FixedStep {
    /// A clock with the given period in milliseconds
    pub fn new(period_ms: f64) -> Self {
        Self {
            period: period_from_ms(period_ms).unwrap_or(Duration::MAX),
            last: None,
        }
    }

    /// The current period
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Change the period, keeping the clock's position
    pub fn set_period(&mut self, period_ms: f64) {
        self.period = period_from_ms(period_ms).unwrap_or(Duration::MAX);
    }

    /// Whether an update is due at `now`; if so, the clock moves forward by exactly one period
    ///
    /// The first call only starts the clock.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.last {
            None => {
                self.last = Some(now);
                false
            }
            Some(last) if now.saturating_duration_since(last) >= self.period => {
                self.last = Some(last + self.period);
                true
            }
            Some(_) => false,
        }
    }
}

/// The window-independent runtime: owns the game and drives its callbacks
#[derive(Debug)]
pub struct App<G: Game> {
    game: G,
    ctx: Context,
    step: FixedStep,
    loaded: bool,
    clear_colour: Colour,
    view: Transform,
}

impl<G: Game> App<G> {
    /// Build the game by running its `init`
    pub fn new(conf: &Conf) -> anyhow::Result<Self> {
        let mut ctx = Context::new(conf);
        let game = G::init(&mut ctx).context("in init function")?;
        log::debug!(
            "game initialized with {} resources, updating every {:.2}ms",
            ctx.resources.len(),
            ctx.update_rate_ms
        );
        Ok(Self {
            game,
            step: FixedStep::new(ctx.update_rate_ms),
            ctx,
            loaded: false,
            clear_colour: conf.clear_colour,
            view: Transform::identity(),
        })
    }

    /// The game
    pub fn game(&self) -> &G {
        &self.game
    }

    /// The game, mutably
    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    /// The game's context
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// The game's context, mutably
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }

    /// Whether the game asked to stop
    pub fn exit_requested(&self) -> bool {
        self.ctx.exit_requested
    }

    /// Feed an input event to the input state, then to the game
    ///
    /// Pointer positions arrive in window pixels and are handed on in world coordinates.
    pub fn handle_event(&mut self, mut event: Event) -> anyhow::Result<()> {
        if let EventData::MouseMoved { position } = &mut event.data {
            if let Some(inverse) = self.view.inverse() {
                *position = inverse * *position;
            }
        }
        self.ctx.input.process_event(&event);
        self.game
            .event(&event, &mut self.ctx)
            .context("in event function")
    }

    /// Run one frame at time `now`: load if needed, update if due, then record a fresh frame into `gfx`
    ///
    /// Returns whether `update` ran.
    pub fn frame(&mut self, now: Instant, gfx: &mut Graphics) -> anyhow::Result<bool> {
        if !self.loaded {
            self.game
                .load(&mut self.ctx)
                .context("in load function")?;
            self.loaded = true;
        }

        self.step.set_period(self.ctx.update_rate_ms);
        let updated = self.step.tick(now);
        if updated {
            self.ctx.resources.update_anims(self.ctx.update_rate_ms);
            self.game
                .update(&mut self.ctx)
                .context("in update function")?;
        }

        gfx.clear(self.clear_colour);
        self.game.draw(gfx, &self.ctx).context("in draw function")?;
        self.view = gfx.view_transform(self.ctx.target_size());

        self.ctx.input.end_frame();
        self.ctx.frame_count += 1;
        Ok(updated)
    }
}
