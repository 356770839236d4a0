//! Session state machine and lifecycle
//!
//! One `Session` owns everything a play-through needs: the entity batches,
//! the countdown, the phase and the process-lifetime high score. The state
//! machine is the single source of truth; the frontend only ever receives
//! writes (labels, enablement, HUD values) and is never read back.

use glam::Vec2;

use super::collision::{self, HitBox};
use super::entity::{refresh_if_exhausted, Bug, Gem, Player};
use super::rng::SessionRng;
use crate::config::GameConfig;
use crate::consts::*;
use crate::frontend::{Direction, Frontend, SpriteId};

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverReason {
    TimeExpired,
    LivesExhausted,
}

/// Global session mode
///
/// `Idle` is the state before the first start press; it behaves as paused.
/// `Over` implies both paused and game-over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Running,
    Paused,
    Over(OverReason),
}

/// One complete play-through from start/restart to a terminal Over state
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    rng: SessionRng,
    pub phase: SessionPhase,
    /// Seconds remaining in the countdown
    pub timer: u32,
    /// Best score seen this process; monotonically non-decreasing
    pub high_score: u32,
    pub player: Player,
    pub bugs: Vec<Bug>,
    pub gems: Vec<Gem>,
    /// Which of the two strings the start/restart button currently shows
    start_label_shows_start: bool,
}

impl Session {
    /// Build an idle session; nothing moves until [`Session::start`]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let player = Player::new(config.max_lives);
        let timer = config.round_seconds;
        Self {
            config,
            rng: SessionRng::new(seed),
            phase: SessionPhase::Idle,
            timer,
            high_score: 0,
            player,
            bugs: Vec::new(),
            gems: Vec::new(),
            start_label_shows_start: true,
        }
    }

    /// True in every phase where entities must not move
    pub fn is_paused(&self) -> bool {
        !matches!(self.phase, SessionPhase::Running)
    }

    /// True once a terminal state is reached, until the next start
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, SessionPhase::Over(_))
    }

    /// Start or restart a session
    ///
    /// Clears every flag, resets the countdown, rebuilds the bug and gem
    /// batches from scratch, resets the player and flips the external
    /// controls. In-flight state is overwritten, not cancelled.
    pub fn start<F: Frontend + ?Sized>(&mut self, frontend: &mut F) {
        self.timer = self.config.round_seconds;
        self.phase = SessionPhase::Running;
        frontend.set_timer(self.timer);

        self.bugs.clear();
        self.gems.clear();
        for _ in 0..self.config.bug_count {
            self.bugs.push(Bug::spawn(&mut self.rng, &self.config.bug_speeds));
        }
        for _ in 0..self.config.gem_count {
            self.gems.push(Gem::spawn(&mut self.rng));
        }

        self.player.reset();
        frontend.show_all_lives();
        frontend.set_score(self.player.score);

        frontend.set_pause_enabled(true);
        frontend.set_start_enabled(false);
        frontend.set_pause_label("Pause");
        frontend.set_dimmed(false);
        frontend.set_new_high_score_visible(false);

        // The label flips between its two strings on each successive press
        self.start_label_shows_start = !self.start_label_shows_start;
        frontend.set_start_label(if self.start_label_shows_start {
            "Start"
        } else {
            "Restart"
        });

        log::info!(
            "session started: {} lives, {} seconds",
            self.player.lives,
            self.timer
        );
    }

    /// Flip between Running and Paused; no-op in Idle and Over
    pub fn toggle_pause<F: Frontend + ?Sized>(&mut self, frontend: &mut F) {
        match self.phase {
            SessionPhase::Running => {
                self.phase = SessionPhase::Paused;
                frontend.set_dimmed(true);
                frontend.set_pause_label("Play");
            }
            SessionPhase::Paused => {
                self.phase = SessionPhase::Running;
                frontend.set_dimmed(false);
                frontend.set_pause_label("Pause");
            }
            SessionPhase::Idle | SessionPhase::Over(_) => {}
        }
    }

    /// Frame tick: advance every entity, then run the player's sweeps
    ///
    /// Ordering is load-bearing: all bugs move and the gem batch refreshes
    /// before any collision check reads their positions. Never interleave.
    pub fn advance<F: Frontend + ?Sized>(&mut self, dt: f32, frontend: &mut F) {
        if self.is_paused() {
            return;
        }

        for bug in &mut self.bugs {
            bug.advance(dt, &mut self.rng);
        }
        refresh_if_exhausted(&mut self.gems, &mut self.rng);

        // Both sweeps read the same rectangle, computed before either runs:
        // a gem overlapped at the pre-collision position is still collected
        // in the tick a bug hit resets the player
        let player_box = HitBox::player(self.player.pos);
        self.sweep_bugs(&player_box, frontend);
        self.sweep_gems(&player_box, frontend);
    }

    /// 1 Hz countdown, driven independently of the frame loop
    pub fn countdown_tick<F: Frontend + ?Sized>(&mut self, frontend: &mut F) {
        if self.is_paused() {
            return;
        }
        self.timer = self.timer.saturating_sub(1);
        frontend.set_timer(self.timer);
        if self.timer == 0 {
            self.player.pos = Vec2::new(PLAYER_START_X, PLAYER_START_Y);
            self.end_session(OverReason::TimeExpired, frontend);
        }
    }

    /// Apply one directional key; ignored unless Running
    pub fn handle_input(&mut self, direction: Direction) {
        if self.is_paused() {
            return;
        }
        self.player.step(direction);
    }

    /// Apply a raw key code; unknown codes are logged and dropped
    pub fn handle_key_code(&mut self, code: u32) {
        match Direction::from_key_code(code) {
            Ok(direction) => self.handle_input(direction),
            Err(fault) => log::debug!("input ignored: {fault}"),
        }
    }

    /// Draw one frame
    ///
    /// Bugs and gems stop rendering at game-over; the player does not.
    /// That asymmetry is part of the game's look and is kept.
    pub fn draw<F: Frontend + ?Sized>(&self, frontend: &mut F) {
        if !self.is_game_over() {
            for bug in &self.bugs {
                blit(frontend, SpriteId::Bug, bug.pos, None);
            }
            for gem in self.gems.iter().filter(|g| g.visible) {
                blit(frontend, SpriteId::Gem(gem.color), gem.pos, Some(GEM_RENDER_SIZE));
            }
        }
        blit(frontend, SpriteId::Player, self.player.pos, None);
    }

    /// Check the player against every bug; the first hit wins the tick
    fn sweep_bugs<F: Frontend + ?Sized>(&mut self, player_box: &HitBox, frontend: &mut F) {
        let hit = self
            .bugs
            .iter()
            .any(|bug| collision::player_hits_bug(player_box, &HitBox::bug(bug.pos)));
        if hit {
            // At most one life lost per tick, however many bugs overlap
            self.on_bug_collision(frontend);
        }
    }

    /// Collision response: reset position, burn a life, maybe end the run
    fn on_bug_collision<F: Frontend + ?Sized>(&mut self, frontend: &mut F) {
        self.player.pos = Vec2::new(PLAYER_START_X, PLAYER_START_Y);
        self.player.lives = self.player.lives.saturating_sub(1);
        frontend.hide_one_life();
        log::debug!("bug collision, {} lives left", self.player.lives);

        if self.player.lives == 0 {
            self.end_session(OverReason::LivesExhausted, frontend);
        }
    }

    /// Collect every visible gem the player overlaps; no early break
    fn sweep_gems<F: Frontend + ?Sized>(&mut self, player_box: &HitBox, frontend: &mut F) {
        for gem in &mut self.gems {
            if gem.visible && collision::player_hits_gem(player_box, &HitBox::gem(gem.pos)) {
                self.player.score += self.config.gem_reward;
                gem.visible = false;
                frontend.set_score(self.player.score);
                frontend.play_gem_cue();
            }
        }
    }

    fn end_session<F: Frontend + ?Sized>(&mut self, reason: OverReason, frontend: &mut F) {
        self.phase = SessionPhase::Over(reason);
        frontend.set_start_enabled(true);
        frontend.set_pause_enabled(false);
        log::info!("session over ({reason:?}), score {}", self.player.score);

        if self.player.score > self.high_score {
            self.high_score = self.player.score;
            frontend.set_high_score(self.high_score);
            frontend.set_new_high_score_visible(true);
        }
    }
}

/// Fire-and-forget blit; a missing asset is the frontend's fault and is
/// logged and skipped, never fatal to game state
fn blit<F: Frontend + ?Sized>(frontend: &mut F, sprite: SpriteId, pos: Vec2, size: Option<(f32, f32)>) {
    if let Err(fault) = frontend.draw_sprite(sprite, pos.x, pos.y, size) {
        log::warn!("sprite skipped: {fault}");
    }
}
