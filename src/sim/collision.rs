//! Collision detection between the player and obstacles
//!
//! Plain axis-aligned boxes. Both boxes are shrunk by a fixed inset first so
//! that grazing a corner does not end the run.

use glam::Vec2;

use super::state::Obstacle;
use crate::tuning::Inset;

/// Axis-aligned rectangle in field units (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    /// Shrink every edge inward by the inset
    pub fn inset(&self, inset: Inset) -> Self {
        let d = Vec2::new(inset.x, inset.y);
        Self {
            min: self.min + d,
            max: self.max - d,
        }
    }

    /// Strict overlap on both axes (touching edges do not count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Check a single player/obstacle pair with the forgiving insets applied
pub fn player_hits(
    player: &Rect,
    obstacle: &Rect,
    player_inset: Inset,
    obstacle_inset: Inset,
) -> bool {
    player
        .inset(player_inset)
        .overlaps(&obstacle.inset(obstacle_inset))
}

/// First obstacle (in active-set order) the player overlaps
pub fn first_collision(
    player: &Rect,
    obstacles: &[Obstacle],
    player_inset: Inset,
    obstacle_inset: Inset,
) -> Option<u32> {
    obstacles
        .iter()
        .find(|o| player_hits(player, &o.bounds(), player_inset, obstacle_inset))
        .map(|o| o.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{ObstacleKind, Player};
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    fn insets() -> (Inset, Inset) {
        let t = Tuning::default();
        (t.player_inset, t.obstacle_inset)
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_xywh(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        let c = Rect::from_xywh(9.9, 9.9, 10.0, 10.0);
        assert!(a.overlaps(&c));
    }

    #[test]
    fn test_inset_forgives_grazing() {
        let (pi, oi) = insets();
        let player = Rect::from_xywh(50.0, 153.0, 44.0, 47.0);
        // Raw boxes overlap by 5 units horizontally
        let obstacle = Rect::from_xywh(89.0, 150.0, 25.0, 50.0);
        assert!(player.overlaps(&obstacle));
        assert!(!player_hits(&player, &obstacle, pi, oi));
    }

    #[test]
    fn test_standing_player_clears_high_flyer() {
        let (pi, oi) = insets();
        let player = Player::default().bounds(0.0, 100.0);
        let mut flyer = Obstacle::new(1, ObstacleKind::PterodactylHigh, PLAYER_X);
        assert!(!player_hits(&player, &flyer.bounds(), pi, oi));

        flyer = Obstacle::new(2, ObstacleKind::PterodactylLow, PLAYER_X);
        assert!(player_hits(&player, &flyer.bounds(), pi, oi));
    }

    #[test]
    fn test_ducking_player_clears_low_flyer() {
        let (pi, oi) = insets();
        let mut player = Player::default();
        player.start_duck(0.0);
        let flyer = Obstacle::new(1, ObstacleKind::PterodactylLow, PLAYER_X);
        assert!(!player_hits(&player.bounds(0.0, 100.0), &flyer.bounds(), pi, oi));
    }

    #[test]
    fn test_jumping_player_clears_cactus_at_peak() {
        let (pi, oi) = insets();
        let mut player = Player::default();
        player.try_jump(0.0, 500.0);
        let cactus = Obstacle::new(1, ObstacleKind::CactusLarge, PLAYER_X + 10.0);
        assert!(!player_hits(&player.bounds(250.0, 100.0), &cactus.bounds(), pi, oi));
        // Same cactus hits a grounded player
        assert!(player_hits(&Player::default().bounds(0.0, 100.0), &cactus.bounds(), pi, oi));
    }

    #[test]
    fn test_first_collision_is_in_order() {
        let (pi, oi) = insets();
        let player = Player::default().bounds(0.0, 100.0);
        let obstacles = vec![
            Obstacle::new(3, ObstacleKind::CactusLarge, PLAYER_X + 5.0),
            Obstacle::new(4, ObstacleKind::CactusDouble, PLAYER_X),
            Obstacle::new(5, ObstacleKind::CactusSmall, 400.0),
        ];
        assert_eq!(first_collision(&player, &obstacles, pi, oi), Some(3));
        assert_eq!(first_collision(&player, &obstacles[2..], pi, oi), None);
    }

    proptest! {
        #[test]
        fn prop_collision_matches_inset_overlap(
            px in -100.0f32..700.0, py in -100.0f32..300.0,
            ox in -100.0f32..700.0, oy in -100.0f32..300.0,
            ow in 1.0f32..80.0, oh in 1.0f32..80.0,
        ) {
            let (pi, oi) = insets();
            let player = Rect::from_xywh(px, py, 44.0, 47.0);
            let obstacle = Rect::from_xywh(ox, oy, ow, oh);
            let a = player.inset(pi);
            let b = obstacle.inset(oi);
            let expected = a.min.x < b.max.x && a.max.x > b.min.x
                && a.min.y < b.max.y && a.max.y > b.min.y;
            prop_assert_eq!(player_hits(&player, &obstacle, pi, oi), expected);
            // Deterministic and symmetric in argument order of the overlap test
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }
}
