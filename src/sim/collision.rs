//! Axis-aligned hitboxes and overlap tests
//!
//! Each sprite tile is bigger than the drawn image, so hitboxes are inset
//! from the entity position. The bug test additionally shrinks the box by a
//! 10 px tolerance, making hits slightly more forgiving than geometric
//! overlap; gems use exact extents. The edge comparisons are intentionally
//! uneven between the two tests and must stay that way.

use glam::Vec2;

use crate::consts::*;

/// An axis-aligned collision rectangle in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl HitBox {
    /// Player hitbox: the drawn sprite is inset 15 px right and 60 px down
    /// inside its tile
    pub fn player(pos: Vec2) -> Self {
        Self {
            left: pos.x + PLAYER_SLIDE_X,
            right: pos.x + PLAYER_SLIDE_X + PLAYER_WIDTH,
            top: pos.y + PLAYER_SLIDE_Y,
            bottom: pos.y + PLAYER_SLIDE_Y + PLAYER_HEIGHT,
        }
    }

    /// Bug hitbox: 75 px down inside the tile, 20 px trimmed off each side
    pub fn bug(pos: Vec2) -> Self {
        Self {
            left: pos.x + BUG_SIDE_INSET,
            right: pos.x + BUG_WIDTH - BUG_SIDE_INSET,
            top: pos.y + BUG_SLIDE_Y,
            bottom: pos.y + BUG_SLIDE_Y + BUG_HEIGHT,
        }
    }

    /// Gem hitbox: full column width, vertical band 40..80 px into the tile
    pub fn gem(pos: Vec2) -> Self {
        Self {
            left: pos.x,
            right: pos.x + GEM_WIDTH,
            top: pos.y + GEM_HIT_TOP,
            bottom: pos.y + GEM_HIT_BOTTOM,
        }
    }
}

/// Player-vs-bug overlap with the 10 px tolerance shrink
///
/// Horizontal separation uses strict comparisons (touching counts as a hit)
/// while vertical separation is inclusive (touching does not). Kept exactly
/// as the game behaves.
pub fn player_hits_bug(player: &HitBox, bug: &HitBox) -> bool {
    !(player.left > bug.right - BUG_HIT_TOLERANCE
        || player.right < bug.left + BUG_HIT_TOLERANCE
        || player.top >= bug.bottom - BUG_HIT_TOLERANCE
        || player.bottom <= bug.top + BUG_HIT_TOLERANCE)
}

/// Player-vs-gem overlap: exact extents, touching edges count on all sides
pub fn player_hits_gem(player: &HitBox, gem: &HitBox) -> bool {
    !(player.left > gem.right
        || player.right < gem.left
        || player.top > gem.bottom
        || player.bottom < gem.top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_overlapping_bug_hits() {
        // Player and bug on the same tile position clearly overlap
        let player = HitBox::player(Vec2::new(200.0, 145.0));
        let bug = HitBox::bug(Vec2::new(200.0, 145.0));
        assert!(player_hits_bug(&player, &bug));
    }

    #[test]
    fn test_bug_in_adjacent_lane_misses() {
        let player = HitBox::player(Vec2::new(200.0, 145.0));
        let bug = HitBox::bug(Vec2::new(200.0, 225.0));
        assert!(!player_hits_bug(&player, &bug));
    }

    #[test]
    fn test_bug_tolerance_forgives_shallow_overlap() {
        let player = HitBox::player(Vec2::new(200.0, 145.0));
        // Bug whose trimmed right edge overlaps the player's left edge by
        // less than the tolerance: forgiven
        let shallow = HitBox::bug(Vec2::new(player.left - BUG_WIDTH + BUG_SIDE_INSET + 5.0, 145.0));
        assert!(!player_hits_bug(&player, &shallow));

        // Past the tolerance the hit registers
        let deep = HitBox::bug(Vec2::new(player.left - BUG_WIDTH + BUG_SIDE_INSET + 15.0, 145.0));
        assert!(player_hits_bug(&player, &deep));
    }

    #[test]
    fn test_vertical_touch_at_tolerance_is_a_miss() {
        let player = HitBox::player(Vec2::new(200.0, 200.0));
        // Place the bug so player.bottom == bug.top + tolerance exactly;
        // the inclusive vertical comparison treats that as separated
        let bug_y = player.bottom - BUG_SLIDE_Y - BUG_HIT_TOLERANCE;
        let bug = HitBox::bug(Vec2::new(200.0, bug_y));
        assert_eq!(player.bottom, bug.top + BUG_HIT_TOLERANCE);
        assert!(!player_hits_bug(&player, &bug));
    }

    #[test]
    fn test_gem_overlap_has_no_tolerance() {
        let player = HitBox::player(Vec2::new(200.0, 400.0));
        // Touching edges count as a hit for gems
        let gem_y = player.top - GEM_HIT_BOTTOM;
        let gem = HitBox::gem(Vec2::new(200.0, gem_y));
        assert_eq!(player.top, gem.bottom);
        assert!(player_hits_gem(&player, &gem));

        // One pixel apart misses
        let gem = HitBox::gem(Vec2::new(200.0, gem_y - 1.0));
        assert!(!player_hits_gem(&player, &gem));
    }

    #[test]
    fn test_gem_in_another_column_misses() {
        let player = HitBox::player(Vec2::new(0.0, 400.0));
        let gem = HitBox::gem(Vec2::new(404.0, 360.0));
        assert!(!player_hits_gem(&player, &gem));
    }
}
