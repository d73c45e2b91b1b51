//! Simulation ticks
//!
//! `tick_frame` runs once per frame task tick: spawning, motion, despawn and
//! collision, in that order. `tick_score` runs once per score task tick and
//! applies milestone effects.

use super::collision::first_collision;
use super::spawn::spawn_obstacle;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the world by one frame
pub fn tick_frame(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.frame += 1;
    state.player.settle(state.time_ms);

    if state.frame.is_multiple_of(state.tuning.spawn_every_frames) {
        spawn_obstacle(state);
    }

    let wrap_x = state.tuning.cloud_wrap_x;
    for cloud in &mut state.clouds {
        cloud.drift(wrap_x);
    }

    let speed = state.speed;
    let despawn_x = state.tuning.despawn_x;
    for obstacle in &mut state.obstacles {
        obstacle.x -= speed;
    }
    state.obstacles.retain(|o| o.x >= despawn_x);

    let player = state.player_bounds();
    if let Some(id) = first_collision(
        &player,
        &state.obstacles,
        state.tuning.player_inset,
        state.tuning.obstacle_inset,
    ) {
        end_session(state, id);
    }
}

/// Add one point and apply any milestone it reaches
pub fn tick_score(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.score += 1;
    apply_score_effects(state);
}

/// Apply speed and day/night milestones for the current score. Running it
/// again without a score change does nothing.
pub fn apply_score_effects(state: &mut GameState) {
    let score = state.score;
    if score == 0 || score == state.effects_applied_for {
        return;
    }
    state.effects_applied_for = score;

    if score.is_multiple_of(state.tuning.speed_milestone) {
        let tuning = &state.tuning;
        state.speed = (state.speed + tuning.speed_step)
            .min(tuning.max_speed)
            .max(tuning.initial_speed);
        state.events.push(GameEvent::ScoreMilestone { score });
        log::debug!("Score {} reached, speed now {:.1}", score, state.speed);
    }

    if score.is_multiple_of(state.tuning.day_night_milestone) {
        state.is_day = !state.is_day;
        state.events.push(GameEvent::DayNightToggled {
            is_day: state.is_day,
        });
        log::debug!("Score {} reached, {}", score, if state.is_day { "day" } else { "night" });
    }
}

/// Freeze the session after a hit and record a new best if earned
fn end_session(state: &mut GameState, obstacle_id: u32) {
    state.phase = GamePhase::GameOver;
    state.events.push(GameEvent::GameOver { score: state.score });

    if state.best.submit(state.score) {
        state.events.push(GameEvent::NewBest { score: state.score });
        log::info!("Game over on obstacle #{}: new best {}", obstacle_id, state.score);
    } else {
        log::info!(
            "Game over on obstacle #{}: score {} (best {})",
            obstacle_id,
            state.score,
            state.best.value
        );
    }
}
