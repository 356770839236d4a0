//! Entity state and per-tick update rules
//!
//! Three entity kinds: bugs crossing the road lanes, the player, and the
//! gem batch. Pause and game-over gating happens in the session; entities
//! only know how to move themselves.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::SessionRng;
use crate::consts::*;
use crate::frontend::Direction;

/// Pick one of the three road lanes
fn random_lane_y(rng: &mut SessionRng) -> f32 {
    LANE_YS[rng.below(LANE_YS.len() as u32) as usize]
}

/// A road-crossing obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bug {
    pub pos: Vec2,
    /// Horizontal speed in px/s
    pub speed: f32,
}

impl Bug {
    /// Spawn at the left edge in a random lane with a speed from the table
    ///
    /// `speeds` must be non-empty; [`crate::config::GameConfig::validate`]
    /// rejects an empty table before it gets here.
    pub fn spawn(rng: &mut SessionRng, speeds: &[f32]) -> Self {
        Self {
            pos: Vec2::new(0.0, random_lane_y(rng)),
            speed: *rng.pick(speeds),
        }
    }

    /// Move right by `speed * dt`; wrap to the left edge in a fresh random
    /// lane when the right edge of the canvas is reached.
    pub fn advance(&mut self, dt: f32, rng: &mut SessionRng) {
        self.pos.x += self.speed * dt;
        if self.pos.x >= CANVAS_WIDTH {
            self.pos.x = 0.0;
            self.pos.y = random_lane_y(rng);
        }
    }
}

/// The player sprite
///
/// Created once per process; `reset` puts it back to the spawn point with
/// full lives and zero score at each session start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub max_lives: u32,
    pub lives: u32,
    pub score: u32,
}

impl Player {
    pub fn new(max_lives: u32) -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            max_lives,
            lives: max_lives,
            score: 0,
        }
    }

    pub fn reset(&mut self) {
        self.pos = Vec2::new(PLAYER_START_X, PLAYER_START_Y);
        self.lives = self.max_lives;
        self.score = 0;
    }

    /// Take one grid step in `direction`, staying inside the canvas.
    ///
    /// The clamp policy is asymmetric on purpose: moving up past the top
    /// lane or sideways past an edge rejects the move, while moving down
    /// past the spawn row clamps to the spawn row.
    pub fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Up => {
                let candidate = self.pos.y - STEP_Y;
                self.pos.y = if candidate > BLOCK_HEIGHT {
                    candidate
                } else {
                    BLOCK_HEIGHT
                };
            }
            Direction::Down => {
                let candidate = self.pos.y + STEP_Y;
                self.pos.y = if candidate <= PLAYER_START_Y {
                    candidate
                } else {
                    PLAYER_START_Y
                };
            }
            Direction::Left => {
                let candidate = self.pos.x - STEP_X;
                if candidate >= 0.0 {
                    self.pos.x = candidate;
                }
            }
            Direction::Right => {
                let candidate = self.pos.x + STEP_X;
                if candidate + PLAYER_SLIDE_X + PLAYER_WIDTH <= CANVAS_WIDTH {
                    self.pos.x = candidate;
                }
            }
        }
    }
}

/// Gem colors (one sprite variant each)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GemColor {
    Blue,
    Green,
    Orange,
}

impl GemColor {
    pub const ALL: [GemColor; 3] = [GemColor::Blue, GemColor::Green, GemColor::Orange];
}

/// A bonus collectible on the 3-lane x 5-column grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gem {
    pub pos: Vec2,
    pub color: GemColor,
    pub visible: bool,
}

impl Gem {
    /// Spawn on a random grid cell with a random color, visible
    pub fn spawn(rng: &mut SessionRng) -> Self {
        let mut gem = Self {
            pos: Vec2::ZERO,
            color: GemColor::Blue,
            visible: true,
        };
        gem.randomize(rng);
        gem
    }

    /// Reassign position, color and visibility
    fn randomize(&mut self, rng: &mut SessionRng) {
        let column = rng.below(GEM_COLUMNS) as f32;
        self.pos = Vec2::new(
            column * GEM_WIDTH,
            GEM_LANE_YS[rng.below(GEM_LANE_YS.len() as u32) as usize],
        );
        self.color = *rng.pick(&GemColor::ALL);
        self.visible = true;
    }
}

/// All-or-nothing batch respawn
///
/// Iff every gem has been taken, the whole batch gets fresh positions and
/// colors and reappears. Partial exhaustion is a deliberate no-op: gems
/// never respawn individually.
pub fn refresh_if_exhausted(gems: &mut [Gem], rng: &mut SessionRng) {
    if gems.iter().any(|g| g.visible) {
        return;
    }
    for gem in gems.iter_mut() {
        gem.randomize(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bug_wraps_to_left_edge_in_a_lane() {
        let mut rng = SessionRng::new(3);
        let mut bug = Bug::spawn(&mut rng, &BUG_SPEEDS);
        bug.pos.x = CANVAS_WIDTH - 1.0;
        bug.advance(1.0, &mut rng);
        assert_eq!(bug.pos.x, 0.0);
        assert!(LANE_YS.contains(&bug.pos.y));
    }

    #[test]
    fn test_bug_advances_by_speed_times_dt() {
        let mut rng = SessionRng::new(3);
        let mut bug = Bug {
            pos: Vec2::new(10.0, 65.0),
            speed: 100.0,
        };
        bug.advance(0.5, &mut rng);
        assert_eq!(bug.pos, Vec2::new(60.0, 65.0));
    }

    #[test]
    fn test_bug_spawns_at_left_edge() {
        let mut rng = SessionRng::new(8);
        for _ in 0..20 {
            let bug = Bug::spawn(&mut rng, &BUG_SPEEDS);
            assert_eq!(bug.pos.x, 0.0);
            assert!(LANE_YS.contains(&bug.pos.y));
            assert!(BUG_SPEEDS.contains(&bug.speed));
        }
    }

    #[test]
    fn test_player_up_clamps_to_top_lane() {
        let mut player = Player::new(5);
        for _ in 0..10 {
            player.step(Direction::Up);
        }
        assert_eq!(player.pos.y, BLOCK_HEIGHT);
    }

    #[test]
    fn test_player_down_clamps_to_spawn_row() {
        let mut player = Player::new(5);
        player.step(Direction::Down);
        assert_eq!(player.pos.y, PLAYER_START_Y);
    }

    #[test]
    fn test_player_rejects_out_of_bounds_sideways() {
        let mut player = Player::new(5);
        // Two steps left land at x=10; a third would go negative
        player.step(Direction::Left);
        player.step(Direction::Left);
        assert_eq!(player.pos.x, 10.0);
        player.step(Direction::Left);
        assert_eq!(player.pos.x, 10.0);

        // From x=10, right steps stop where the visible sprite would leave
        // the canvas
        for _ in 0..10 {
            player.step(Direction::Right);
        }
        assert_eq!(player.pos.x, 390.0);
    }

    #[test]
    fn test_gem_refresh_is_all_or_nothing() {
        let mut rng = SessionRng::new(11);
        let mut gems: Vec<Gem> = (0..3).map(|_| Gem::spawn(&mut rng)).collect();

        // Two of three taken: nothing changes
        gems[0].visible = false;
        gems[1].visible = false;
        let before: Vec<(Vec2, bool)> = gems.iter().map(|g| (g.pos, g.visible)).collect();
        refresh_if_exhausted(&mut gems, &mut rng);
        let after: Vec<(Vec2, bool)> = gems.iter().map(|g| (g.pos, g.visible)).collect();
        assert_eq!(before, after);

        // All three taken: the whole batch reappears on the grid
        gems[2].visible = false;
        refresh_if_exhausted(&mut gems, &mut rng);
        for gem in &gems {
            assert!(gem.visible);
            assert!(GEM_LANE_YS.contains(&gem.pos.y));
            let column = gem.pos.x / GEM_WIDTH;
            assert_eq!(column.fract(), 0.0);
            assert!((column as u32) < GEM_COLUMNS);
        }
    }

    proptest! {
        #[test]
        fn prop_player_stays_in_bounds(moves in proptest::collection::vec(0u8..4, 0..64)) {
            let mut player = Player::new(5);
            for m in moves {
                let direction = match m {
                    0 => Direction::Up,
                    1 => Direction::Down,
                    2 => Direction::Left,
                    _ => Direction::Right,
                };
                player.step(direction);
                prop_assert!(player.pos.x >= 0.0);
                prop_assert!(player.pos.x + PLAYER_SLIDE_X + PLAYER_WIDTH <= CANVAS_WIDTH);
                prop_assert!(player.pos.y >= BLOCK_HEIGHT);
                prop_assert!(player.pos.y <= PLAYER_START_Y);
            }
        }

        #[test]
        fn prop_bug_x_stays_in_canvas(start_x in 0.0f32..505.0, dt in 0.0f32..0.1) {
            let mut rng = SessionRng::new(5);
            let mut bug = Bug {
                pos: Vec2::new(start_x, 65.0),
                speed: 120.0,
            };
            bug.advance(dt, &mut rng);
            prop_assert!(bug.pos.x >= 0.0 && bug.pos.x < CANVAS_WIDTH);
        }
    }
}
