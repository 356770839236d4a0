//! Lane Dash - a lane-crossing arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, session state machine)
//! - `frontend`: Boundary to the host page (sprite blits, HUD widgets, audio)
//! - `config`: Data-driven session knobs

pub mod config;
pub mod frontend;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use frontend::{Direction, Fault, Frontend, NullFrontend, SpriteId};
pub use sim::{OverReason, Session, SessionPhase};

/// Game geometry constants
pub mod consts {
    /// Canvas width in pixels (5 columns of 101 px)
    pub const CANVAS_WIDTH: f32 = 505.0;
    /// Height of one map row (grass/water/road block)
    pub const BLOCK_HEIGHT: f32 = 80.0;

    /// Player horizontal step per key press
    pub const STEP_X: f32 = 95.0;
    /// Player vertical step per key press
    pub const STEP_Y: f32 = 80.0;

    /// The three road lanes bugs travel in (y coordinates)
    pub const LANE_YS: [f32; 3] = [65.0, 145.0, 225.0];

    /// Bug hitbox dimensions
    pub const BUG_WIDTH: f32 = 101.0;
    pub const BUG_HEIGHT: f32 = 70.0;
    /// The drawn bug starts this far down inside its sprite tile
    pub const BUG_SLIDE_Y: f32 = 75.0;
    /// Transparent margin on each horizontal side of the bug sprite
    pub const BUG_SIDE_INSET: f32 = 20.0;
    /// Extra shrink applied to the bug hitbox, making hits more forgiving
    pub const BUG_HIT_TOLERANCE: f32 = 10.0;
    /// Bug speeds are drawn uniformly from this table (px/s)
    pub const BUG_SPEEDS: [f32; 3] = [80.0, 100.0, 120.0];
    /// Bugs per session
    pub const MAX_BUGS: usize = 3;

    /// Player spawn point (also the reset point after a hit)
    pub const PLAYER_START_X: f32 = 200.0;
    pub const PLAYER_START_Y: f32 = 400.0;
    /// Player hitbox dimensions
    pub const PLAYER_WIDTH: f32 = 75.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    /// The drawn player starts this far right inside its sprite tile
    pub const PLAYER_SLIDE_X: f32 = 15.0;
    /// The drawn player starts this far down inside its sprite tile
    pub const PLAYER_SLIDE_Y: f32 = 60.0;
    /// Default lives per session
    pub const MAX_LIVES: u32 = 5;

    /// Gems sit on a 5-column grid, one column per 101 px
    pub const GEM_WIDTH: f32 = 101.0;
    pub const GEM_COLUMNS: u32 = 5;
    /// The three row y coordinates gems can occupy
    pub const GEM_LANE_YS: [f32; 3] = [105.0, 190.0, 270.0];
    /// Gem hitbox vertical extent relative to its position
    pub const GEM_HIT_TOP: f32 = 40.0;
    pub const GEM_HIT_BOTTOM: f32 = 80.0;
    /// Gems render at a fixed size distinct from their logical hitbox
    pub const GEM_RENDER_SIZE: (f32, f32) = (100.0, 100.0);
    /// Points per gem
    pub const GEM_REWARD: u32 = 5;
    /// Gems per batch
    pub const MAX_GEMS: usize = 3;

    /// Countdown ceiling for one session (seconds)
    pub const ROUND_SECONDS: u32 = 30;
}
