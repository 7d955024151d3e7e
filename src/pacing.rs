//! Frame pacing
//!
//! The loop runs one update and one render per tick and then waits here for
//! the rest of the frame budget.

use std::thread;
use std::time::{Duration, Instant};

/// Blocks the game loop until the next frame may start
pub trait FramePacer {
    fn wait_for_next_frame(&mut self);
}

/// Caps the loop at a fixed number of ticks per second
///
/// Each wait sleeps until one budget has passed since the previous tick
/// began. A tick that overran its budget is not made up for: the schedule
/// re-anchors to the current instant instead of bursting.
pub struct FixedRatePacer {
    budget: Duration,
    tick_started: Instant,
}

impl FixedRatePacer {
    pub fn new(target_fps: u32) -> Self {
        FixedRatePacer {
            budget: Duration::from_secs(1) / target_fps.max(1),
            tick_started: Instant::now(),
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }
}

impl FramePacer for FixedRatePacer {
    fn wait_for_next_frame(&mut self) {
        let elapsed = self.tick_started.elapsed();

        if elapsed < self.budget {
            thread::sleep(self.budget - elapsed);
            self.tick_started += self.budget;
        } else {
            log::warn!(
                "Frame overran its budget: {:.2} ms (budget {:.2} ms)",
                elapsed.as_secs_f64() * 1000.0,
                self.budget.as_secs_f64() * 1000.0
            );
            self.tick_started = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_for_sixty_fps() {
        let pacer = FixedRatePacer::new(60);
        assert_eq!(pacer.budget(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_zero_fps_does_not_divide_by_zero() {
        let pacer = FixedRatePacer::new(0);
        assert_eq!(pacer.budget(), Duration::from_secs(1));
    }

    #[test]
    fn test_waits_out_the_budget() {
        let mut pacer = FixedRatePacer::new(200);
        let start = Instant::now();

        pacer.wait_for_next_frame();
        pacer.wait_for_next_frame();

        // Two ticks of 5 ms each, minus whatever the constructor already used
        assert!(start.elapsed() >= Duration::from_millis(9));
    }

    #[test]
    fn test_overrun_does_not_sleep() {
        let mut pacer = FixedRatePacer::new(10);
        thread::sleep(Duration::from_millis(110));

        let start = Instant::now();
        pacer.wait_for_next_frame();
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
