//! Game clock
//!
//! Two ticking tasks share one session timeline: the frame task (motion,
//! spawning, collisions) and the score task (score and difficulty). Both run
//! only between `start` and `stop`; once stopped no tick fires, even if the
//! caller is still inside an `advance` call.

use crate::tuning::Tuning;

/// Which task a tick belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    Frame,
    Score,
}

/// A fixed-period task that can be started and stopped
#[derive(Debug, Clone)]
pub struct Ticker {
    period_ms: f64,
    next_due_ms: f64,
    running: bool,
}

impl Ticker {
    pub fn new(period_ms: f64) -> Self {
        Self {
            period_ms,
            next_due_ms: 0.0,
            running: false,
        }
    }

    /// Schedule the first tick one period after `now_ms`
    pub fn start(&mut self, now_ms: f64) {
        self.running = true;
        self.next_due_ms = now_ms + self.period_ms;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// When the next tick fires, if running
    pub fn due_at(&self) -> Option<f64> {
        self.running.then_some(self.next_due_ms)
    }

    /// Consume the pending tick and schedule the next one
    fn fire(&mut self) -> f64 {
        let due = self.next_due_ms;
        self.next_due_ms += self.period_ms;
        due
    }
}

/// Session clock driving the frame and score tasks
#[derive(Debug, Clone)]
pub struct GameClock {
    now_ms: f64,
    max_catchup_ms: f64,
    pub frame: Ticker,
    pub score: Ticker,
}

impl GameClock {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            now_ms: 0.0,
            max_catchup_ms: tuning.max_catchup_ms,
            frame: Ticker::new(tuning.frame_period_ms),
            score: Ticker::new(tuning.score_period_ms),
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Start both tasks from the current time
    pub fn start(&mut self) {
        self.frame.start(self.now_ms);
        self.score.start(self.now_ms);
    }

    /// Cancel both tasks
    pub fn stop(&mut self) {
        self.frame.stop();
        self.score.stop();
    }

    pub fn is_running(&self) -> bool {
        self.frame.is_running() || self.score.is_running()
    }

    /// Advance time by `dt_ms` (clamped to the catch-up limit), firing due
    /// ticks in time order. `on_tick` receives the tick kind and its time and
    /// returns whether the tasks should keep running; returning false stops
    /// both tasks before any further tick fires.
    pub fn advance<F>(&mut self, dt_ms: f64, mut on_tick: F)
    where
        F: FnMut(TickKind, f64) -> bool,
    {
        let target = self.now_ms + dt_ms.clamp(0.0, self.max_catchup_ms);

        loop {
            let next = match (self.frame.due_at(), self.score.due_at()) {
                (Some(f), Some(s)) if s < f => Some((TickKind::Score, s)),
                (Some(f), _) => Some((TickKind::Frame, f)),
                (None, Some(s)) => Some((TickKind::Score, s)),
                (None, None) => None,
            };
            let Some((kind, due)) = next else { break };
            if due > target {
                break;
            }

            let at = match kind {
                TickKind::Frame => self.frame.fire(),
                TickKind::Score => self.score.fire(),
            };
            self.now_ms = at;

            if !on_tick(kind, at) {
                self.stop();
                break;
            }
        }

        self.now_ms = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock() -> GameClock {
        GameClock::new(&Tuning::default())
    }

    #[test]
    fn test_stopped_clock_never_ticks() {
        let mut clock = clock();
        let mut ticks = 0;
        clock.advance(200.0, |_, _| {
            ticks += 1;
            true
        });
        assert_eq!(ticks, 0);
        assert_eq!(clock.now_ms(), 200.0);
    }

    #[test]
    fn test_rates_are_independent() {
        let mut clock = clock();
        clock.start();
        let (mut frames, mut scores) = (0, 0);
        // One second in 10 ms slices
        for _ in 0..100 {
            clock.advance(10.0, |kind, _| {
                match kind {
                    TickKind::Frame => frames += 1,
                    TickKind::Score => scores += 1,
                }
                true
            });
        }
        assert_eq!(scores, 10);
        assert!((59..=60).contains(&frames), "frames = {frames}");
    }

    #[test]
    fn test_ticks_fire_in_time_order() {
        let mut clock = clock();
        clock.start();
        let mut last = 0.0;
        clock.advance(250.0, |_, at| {
            assert!(at >= last);
            last = at;
            true
        });
        assert!(last > 0.0);
    }

    #[test]
    fn test_stop_from_callback_cancels_pending_ticks() {
        let mut clock = clock();
        clock.start();
        let mut ticks = 0;
        clock.advance(250.0, |_, _| {
            ticks += 1;
            ticks < 3
        });
        assert_eq!(ticks, 3);
        assert!(!clock.is_running());

        clock.advance(1000.0, |_, _| panic!("tick after stop"));
    }

    #[test]
    fn test_catchup_is_clamped() {
        let mut clock = clock();
        clock.start();
        let mut scores = 0;
        clock.advance(10_000.0, |kind, _| {
            if kind == TickKind::Score {
                scores += 1;
            }
            true
        });
        // 250 ms cap => at most 2 score ticks
        assert_eq!(scores, 2);
        assert_eq!(clock.now_ms(), 250.0);
    }

    #[test]
    fn test_restart_schedules_from_now() {
        let mut clock = clock();
        clock.start();
        clock.advance(50.0, |_, _| false);
        assert!(!clock.is_running());
        clock.advance(100.0, |_, _| true);
        let resumed_at = clock.now_ms();

        clock.start();
        let mut first = None;
        clock.advance(20.0, |_, at| {
            first.get_or_insert(at);
            true
        });
        assert!(first.unwrap() > resumed_at);
    }
}
