//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (entities live in fixed `Vec`s)
//! - No rendering or platform dependencies beyond the `Frontend` trait

pub mod collision;
pub mod entity;
pub mod rng;
pub mod session;

pub use collision::HitBox;
pub use entity::{Bug, Gem, GemColor, Player};
pub use rng::SessionRng;
pub use session::{OverReason, Session, SessionPhase};
