//! Scene assembly
//!
//! Builds the full triangle list for one frame from the game state. Pure, so
//! frames can be checked without a GPU.

use glam::Vec2;

use super::shapes::{circle, rect, rect_at};
use super::vertex::{Palette, Vertex, colors};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GameState, Obstacle};

const CLOUD_SEGMENTS: u32 = 16;
/// Frames per leg swap while running
const STRIDE_FRAMES: u64 = 6;

/// Build every vertex for the current frame, back to front
pub fn build_scene(state: &GameState, settings: &Settings) -> Vec<Vertex> {
    let palette = Palette::for_mode(state.is_day);
    let mut vertices = Vec::with_capacity(1024);

    if settings.draw_clouds() {
        for cloud in &state.clouds {
            let p = cloud.pos;
            vertices.extend(circle(p, 20.0, palette.cloud, CLOUD_SEGMENTS));
            vertices.extend(circle(p + Vec2::new(15.0, -5.0), 15.0, palette.cloud, CLOUD_SEGMENTS));
            vertices.extend(circle(p + Vec2::new(30.0, 0.0), 20.0, palette.cloud, CLOUD_SEGMENTS));
        }
    }

    // Ground line
    vertices.extend(rect(0.0, GROUND_Y - 1.0, FIELD_WIDTH, 1.0, palette.ink));

    let wing_frame = if settings.animate_wings() { state.frame } else { 0 };
    for obstacle in &state.obstacles {
        if obstacle.is_flying() {
            let phase = Obstacle::wing_phase(wing_frame, state.tuning.flap_period_frames);
            vertices.extend(flyer(obstacle, phase, palette.ink));
        } else {
            vertices.extend(cactus(obstacle, palette.cactus));
        }
    }

    vertices.extend(player(state, palette.ink));

    vertices
}

/// Cactus body plus arms on the larger kinds
pub fn cactus(obstacle: &Obstacle, color: [f32; 4]) -> Vec<Vertex> {
    let (x, top, w, h) = (obstacle.x, obstacle.top(), obstacle.width, obstacle.height);
    let mut v = rect(x, top, w, h, color);
    if obstacle.kind.has_arms() {
        v.extend(rect(x - 5.0, top + 10.0, 8.0, 15.0, color));
        v.extend(rect(x + w - 3.0, top + 15.0, 8.0, 15.0, color));
    }
    v
}

/// Pterodactyl body, head and one of two wing poses
pub fn flyer(obstacle: &Obstacle, phase: u8, color: [f32; 4]) -> Vec<Vertex> {
    let origin = Vec2::new(obstacle.x, obstacle.top());
    let mut v = rect_at(origin, 10.0, 15.0, 30.0, 10.0, color);
    v.extend(rect_at(origin, 35.0, 10.0, 15.0, 15.0, color));
    if phase == 0 {
        v.extend(rect_at(origin, 0.0, 10.0, 15.0, 5.0, color));
        v.extend(rect_at(origin, 0.0, 0.0, 20.0, 5.0, color));
    } else {
        v.extend(rect_at(origin, 5.0, 15.0, 15.0, 5.0, color));
        v.extend(rect_at(origin, 5.0, 20.0, 20.0, 5.0, color));
    }
    v
}

/// The player, drawn inside its current bounds
pub fn player(state: &GameState, color: [f32; 4]) -> Vec<Vertex> {
    let b = state.player_bounds();
    let o = b.min;
    // Legs only alternate while running on the ground
    let stride = if state.is_running() && !state.player.is_jumping() {
        (state.frame / STRIDE_FRAMES) % 2
    } else {
        2
    };
    let (left_leg, right_leg) = match stride {
        0 => (9.0, 13.0),
        1 => (13.0, 9.0),
        _ => (13.0, 13.0),
    };

    let mut v = Vec::with_capacity(64);
    if state.player.is_ducking() {
        v.extend(rect_at(o, 0.0, 4.0, 40.0, 14.0, color));
        v.extend(rect_at(o, 37.0, 0.0, 22.0, 14.0, color));
        v.extend(rect_at(o, 50.0, 3.0, 3.0, 3.0, colors::EYE));
        v.extend(rect_at(o, 10.0, 18.0, 5.0, left_leg - 5.0, color));
        v.extend(rect_at(o, 24.0, 18.0, 5.0, right_leg - 5.0, color));
    } else {
        v.extend(rect_at(o, 20.0, 0.0, 24.0, 16.0, color));
        v.extend(rect_at(o, 34.0, 4.0, 3.0, 3.0, colors::EYE));
        v.extend(rect_at(o, 8.0, 14.0, 26.0, 20.0, color));
        v.extend(rect_at(o, 0.0, 16.0, 10.0, 8.0, color));
        v.extend(rect_at(o, 12.0, 34.0, 5.0, left_leg, color));
        v.extend(rect_at(o, 24.0, 34.0, 5.0, right_leg, color));
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::best_score::BestScore;
    use crate::sim::{GamePhase, ObstacleKind};
    use crate::tuning::Tuning;

    fn state_with(kind: ObstacleKind) -> GameState {
        let mut state = GameState::new(3, Tuning::default(), BestScore::default());
        state.phase = GamePhase::Playing;
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle::new(id, kind, 300.0));
        state
    }

    #[test]
    fn test_scene_is_triangle_list() {
        let state = state_with(ObstacleKind::CactusDouble);
        let scene = build_scene(&state, &Settings::default());
        assert!(!scene.is_empty());
        assert_eq!(scene.len() % 3, 0);
    }

    #[test]
    fn test_reduced_motion_hides_clouds() {
        let state = state_with(ObstacleKind::CactusSmall);
        let full = build_scene(&state, &Settings::default());
        let reduced = build_scene(
            &state,
            &Settings {
                reduced_motion: true,
                ..Default::default()
            },
        );
        let cloud_vertices = 5 * 3 * CLOUD_SEGMENTS as usize * 3;
        assert_eq!(full.len() - reduced.len(), cloud_vertices);
    }

    #[test]
    fn test_large_cacti_have_arms() {
        let small = Obstacle::new(1, ObstacleKind::CactusSmall, 100.0);
        let large = Obstacle::new(2, ObstacleKind::CactusLarge, 100.0);
        assert_eq!(cactus(&small, [1.0; 4]).len(), 6);
        assert_eq!(cactus(&large, [1.0; 4]).len(), 18);
    }

    #[test]
    fn test_wings_flap_between_phases() {
        let flyer_obstacle = Obstacle::new(1, ObstacleKind::PterodactylLow, 100.0);
        assert_ne!(flyer(&flyer_obstacle, 0, [1.0; 4]), flyer(&flyer_obstacle, 1, [1.0; 4]));
    }

    #[test]
    fn test_night_uses_night_ink() {
        let mut state = state_with(ObstacleKind::PterodactylHigh);
        state.is_day = false;
        let scene = build_scene(&state, &Settings::default());
        assert!(scene.iter().any(|v| v.color == colors::INK_NIGHT));
        assert!(!scene.iter().any(|v| v.color == colors::INK_DAY));
    }

    #[test]
    fn test_player_stays_in_bounds() {
        let mut state = state_with(ObstacleKind::CactusSmall);
        for ducking in [false, true] {
            if ducking {
                state.player.start_duck(0.0);
            }
            let b = state.player_bounds();
            for v in player(&state, [1.0; 4]) {
                assert!(v.position[0] >= b.min.x - 1e-3 && v.position[0] <= b.max.x + 1e-3);
                assert!(v.position[1] >= b.min.y - 1e-3 && v.position[1] <= b.max.y + 1e-3);
            }
        }
    }
}
