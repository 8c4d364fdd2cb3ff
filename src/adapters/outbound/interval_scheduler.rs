use crate::domains::simulation::FrameScheduler;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};

/// Fixed-rate frame pacing. Stands in for a display refresh callback: a
/// slow poll delays the next tick instead of producing a burst.
pub struct IntervalScheduler {
    interval: Interval,
}

impl IntervalScheduler {
    pub fn new(frames_per_second: u32) -> Self {
        let fps = frames_per_second.max(1);
        let mut interval = interval(Duration::from_secs_f64(1.0 / fps as f64));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }
}

#[async_trait]
impl FrameScheduler for IntervalScheduler {
    async fn next_frame(&mut self) {
        self.interval.tick().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticks_at_configured_rate() {
        let mut scheduler = IntervalScheduler::new(10);
        let start = tokio::time::Instant::now();

        // first tick completes immediately
        scheduler.next_frame().await;
        scheduler.next_frame().await;
        scheduler.next_frame().await;

        assert!(start.elapsed() >= Duration::from_millis(200));
    }
}
