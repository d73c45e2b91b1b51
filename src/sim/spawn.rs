//! Obstacle generator

use rand::Rng;

use super::state::{GameState, Obstacle, ObstacleKind};
use crate::consts::FIELD_WIDTH;

/// Whether the newest obstacle has moved farther than `min_gap` from the
/// right edge
pub fn has_room(newest: Option<&Obstacle>, min_gap: f32) -> bool {
    match newest {
        None => true,
        Some(o) => o.x < FIELD_WIDTH - min_gap,
    }
}

/// Try to append a random obstacle at the right edge. Returns its ID.
pub fn spawn_obstacle(state: &mut GameState) -> Option<u32> {
    let min_gap = state.tuning.min_gap(state.speed);
    if !has_room(state.newest_obstacle(), min_gap) {
        return None;
    }

    let kind = ObstacleKind::ALL[state.rng.random_range(0..ObstacleKind::ALL.len())];
    let id = state.next_entity_id();
    state.obstacles.push(Obstacle::new(id, kind, FIELD_WIDTH));
    log::debug!("Spawned {:?} #{}", kind, id);
    Some(id)
}
