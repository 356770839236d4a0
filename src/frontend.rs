//! Boundary to the host page
//!
//! The core never touches the canvas, the DOM or the audio element directly.
//! Everything it needs from the outside world goes through the [`Frontend`]
//! trait: fire-and-forget sprite blits, HUD setters, button enablement and
//! the gem pickup cue. The frontend is a pure observer - it renders what the
//! session tells it and is never consulted for game decisions.

use std::fmt;

use crate::sim::GemColor;

/// Sprite identifiers the core asks the frontend to blit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    Bug,
    Player,
    Gem(GemColor),
}

impl SpriteId {
    /// Asset path for the frontend's image cache
    pub fn asset_path(&self) -> &'static str {
        match self {
            SpriteId::Bug => "images/enemy-bug.png",
            SpriteId::Player => "images/char-cat-girl.png",
            SpriteId::Gem(GemColor::Blue) => "images/GemBlue.png",
            SpriteId::Gem(GemColor::Green) => "images/GemGreen.png",
            SpriteId::Gem(GemColor::Orange) => "images/GemOrange.png",
        }
    }
}

/// A directional move, one grid step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a raw arrow-key code to a direction
    ///
    /// Unknown codes are a collaborator fault, not a crash: the caller logs
    /// and drops them.
    pub fn from_key_code(code: u32) -> Result<Self, Fault> {
        match code {
            37 => Ok(Direction::Left),
            38 => Ok(Direction::Up),
            39 => Ok(Direction::Right),
            40 => Ok(Direction::Down),
            other => Err(Fault::InvalidDirection(other)),
        }
    }
}

/// Non-fatal collaborator faults
///
/// All failures are local: they are logged and skipped, never surfaced to
/// the player beyond the designed game-over outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Key code outside the four arrow keys
    InvalidDirection(u32),
    /// The frontend has no image handle for a sprite
    AssetMissing(SpriteId),
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::InvalidDirection(code) => write!(f, "unrecognized key code {code}"),
            Fault::AssetMissing(sprite) => {
                write!(f, "missing sprite asset {}", sprite.asset_path())
            }
        }
    }
}

impl std::error::Error for Fault {}

/// Everything the core consumes from its excluded collaborators: the
/// rendering surface, the HUD widgets, the two control buttons and the
/// audio element.
pub trait Frontend {
    /// Blit a sprite at (x, y), optionally scaled to `size`
    ///
    /// A missing image handle comes back as [`Fault::AssetMissing`]; the
    /// core logs it and moves on.
    fn draw_sprite(
        &mut self,
        sprite: SpriteId,
        x: f32,
        y: f32,
        size: Option<(f32, f32)>,
    ) -> Result<(), Fault>;

    fn set_score(&mut self, score: u32);
    fn set_timer(&mut self, seconds: u32);
    fn set_high_score(&mut self, score: u32);
    fn set_new_high_score_visible(&mut self, visible: bool);

    /// Show all life indicators (session start)
    fn show_all_lives(&mut self);
    /// Hide the most recently visible life indicator (one hit)
    fn hide_one_life(&mut self);

    fn set_start_enabled(&mut self, enabled: bool);
    fn set_pause_enabled(&mut self, enabled: bool);
    fn set_start_label(&mut self, label: &str);
    fn set_pause_label(&mut self, label: &str);

    /// Dim the canvas while paused
    fn set_dimmed(&mut self, dimmed: bool);

    /// Fire-and-forget pickup sound
    fn play_gem_cue(&mut self);
}

/// A frontend that swallows everything. Handy for headless runs and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullFrontend;

impl Frontend for NullFrontend {
    fn draw_sprite(
        &mut self,
        _sprite: SpriteId,
        _x: f32,
        _y: f32,
        _size: Option<(f32, f32)>,
    ) -> Result<(), Fault> {
        Ok(())
    }

    fn set_score(&mut self, _score: u32) {}
    fn set_timer(&mut self, _seconds: u32) {}
    fn set_high_score(&mut self, _score: u32) {}
    fn set_new_high_score_visible(&mut self, _visible: bool) {}
    fn show_all_lives(&mut self) {}
    fn hide_one_life(&mut self) {}
    fn set_start_enabled(&mut self, _enabled: bool) {}
    fn set_pause_enabled(&mut self, _enabled: bool) {}
    fn set_start_label(&mut self, _label: &str) {}
    fn set_pause_label(&mut self, _label: &str) {}
    fn set_dimmed(&mut self, _dimmed: bool) {}
    fn play_gem_cue(&mut self) {}
}
