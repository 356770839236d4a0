//! Lane Dash entry point
//!
//! Headless demo run: drives one session at 60 fps with a scripted player
//! and logs every frontend write. The real game embeds the library behind a
//! canvas/DOM frontend; this binary exists to watch the core play out.

use std::time::{SystemTime, UNIX_EPOCH};

use lane_dash::{Direction, Fault, Frontend, GameConfig, Session, SpriteId};

/// Frontend that narrates the HUD through the logger
#[derive(Default)]
struct ConsoleFrontend {
    lives_visible: u32,
}

impl Frontend for ConsoleFrontend {
    fn draw_sprite(
        &mut self,
        sprite: SpriteId,
        x: f32,
        y: f32,
        _size: Option<(f32, f32)>,
    ) -> Result<(), Fault> {
        log::trace!("blit {} at ({x:.0},{y:.0})", sprite.asset_path());
        Ok(())
    }

    fn set_score(&mut self, score: u32) {
        log::info!("score: {score}");
    }

    fn set_timer(&mut self, seconds: u32) {
        log::debug!("timer: {seconds}");
    }

    fn set_high_score(&mut self, score: u32) {
        log::info!("high score: {score}");
    }

    fn set_new_high_score_visible(&mut self, visible: bool) {
        if visible {
            log::info!("new high score!");
        }
    }

    fn show_all_lives(&mut self) {
        self.lives_visible = 5;
    }

    fn hide_one_life(&mut self) {
        self.lives_visible = self.lives_visible.saturating_sub(1);
        log::info!("ouch - {} hearts left", self.lives_visible);
    }

    fn set_start_enabled(&mut self, enabled: bool) {
        log::debug!("start button enabled: {enabled}");
    }

    fn set_pause_enabled(&mut self, enabled: bool) {
        log::debug!("pause button enabled: {enabled}");
    }

    fn set_start_label(&mut self, label: &str) {
        log::debug!("start button label: {label}");
    }

    fn set_pause_label(&mut self, label: &str) {
        log::debug!("pause button label: {label}");
    }

    fn set_dimmed(&mut self, dimmed: bool) {
        log::debug!("canvas dimmed: {dimmed}");
    }

    fn play_gem_cue(&mut self) {
        log::info!("*ding*");
    }
}

/// Scripted input: keep marching up toward the water, drift sideways,
/// fall back down after a few rows (arrow-key codes, as the page sends them)
fn scripted_key(frame: u64) -> Option<u32> {
    if frame % 30 != 0 {
        return None;
    }
    Some(match (frame / 30) % 8 {
        0 | 1 | 2 => 38, // up
        3 => 37,         // left
        4 => 39,         // right
        5 | 6 => 40,     // down
        _ => 39,
    })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("seed {seed}");

    let mut frontend = ConsoleFrontend::default();
    let mut session = Session::new(GameConfig::default(), seed);
    session.start(&mut frontend);

    const FPS: u64 = 60;
    let dt = 1.0 / FPS as f32;
    let mut frame: u64 = 0;

    while !session.is_game_over() {
        if let Some(code) = scripted_key(frame) {
            session.handle_key_code(code);
        }
        session.advance(dt, &mut frontend);
        session.draw(&mut frontend);
        if frame % FPS == FPS - 1 {
            session.countdown_tick(&mut frontend);
        }
        frame += 1;
    }

    log::info!(
        "run finished after {}s: score {}, high score {}",
        frame / FPS,
        session.player.score,
        session.high_score
    );
}
