// SPDX-License-Identifier: MPL-2.0
//! Progress poller.
//!
//! Samples the handle's position and duration on a [`RepeatingTimer`].
//! Consumers only see the latest [`ProgressSample`], so a push-based
//! source could replace the timer without touching them.

use super::timer::RepeatingTimer;
use crate::application::port::PlayerHandle;
use crate::domain::video::{PollInterval, ProgressSample};
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct ProgressPoller {
    timer: RepeatingTimer,
    latest: ProgressSample,
}

impl ProgressPoller {
    #[must_use]
    pub fn new(interval: PollInterval) -> Self {
        Self {
            timer: RepeatingTimer::new(interval.as_duration()),
            latest: ProgressSample::default(),
        }
    }

    /// Starts sampling, first sample due at `now`. Idempotent.
    pub fn start(&mut self, now: Instant) -> bool {
        self.timer.start(now)
    }

    /// Stops sampling. Safe when already stopped.
    pub fn stop(&mut self) {
        self.timer.stop();
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.next_deadline()
    }

    /// Latest published sample.
    #[must_use]
    pub fn latest(&self) -> ProgressSample {
        self.latest
    }

    /// Overrides the published sample, e.g. after an optimistic seek.
    pub fn publish(&mut self, sample: ProgressSample) {
        self.latest = sample;
    }

    /// Samples if a tick is due.
    pub fn poll<P: PlayerHandle>(&mut self, handle: &P, now: Instant) -> Option<ProgressSample> {
        if self.timer.take_due(now) {
            self.sample(handle)
        } else {
            None
        }
    }

    /// Reads the handle right away. No-op while the handle is not ready.
    ///
    /// A reading without a duration keeps the last known one.
    pub fn sample<P: PlayerHandle>(&mut self, handle: &P) -> Option<ProgressSample> {
        if !handle.is_ready() {
            return None;
        }
        let sample = ProgressSample::new(handle.current_time(), handle.duration())
            .merge_duration(self.latest.duration_secs());
        self.latest = sample;
        Some(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::simulated_player::SimulatedPlayer;
    use std::time::Duration;

    #[test]
    fn not_ready_handle_is_skipped() {
        let (player, _events) = SimulatedPlayer::new(120.0);
        let mut poller = ProgressPoller::new(PollInterval::default());
        poller.start(Instant::now());

        assert!(poller.poll(&player, Instant::now()).is_none());
        assert_eq!(poller.latest(), ProgressSample::default());
    }

    #[test]
    fn first_sample_is_taken_on_start() {
        let (mut player, _events) = SimulatedPlayer::new(120.0);
        player.boot();
        player.seek_to(30.0, true);

        let start = Instant::now();
        let mut poller = ProgressPoller::new(PollInterval::default());
        poller.start(start);

        let sample = poller.poll(&player, start).expect("first tick is immediate");
        assert_eq!(sample.duration_secs(), Some(120.0));
        assert_eq!(sample.time_text(), "00:30 / 02:00");
    }

    #[test]
    fn stopped_poller_never_samples() {
        let (mut player, _events) = SimulatedPlayer::new(120.0);
        player.boot();
        let start = Instant::now();
        let mut poller = ProgressPoller::new(PollInterval::default());
        poller.start(start);
        poller.stop();

        assert!(poller.poll(&player, start + Duration::from_secs(5)).is_none());
        assert!(poller.next_deadline().is_none());
    }

    #[test]
    fn unknown_duration_keeps_previous_reading() {
        let (mut player, _events) = SimulatedPlayer::new(0.0);
        player.boot();
        let mut poller = ProgressPoller::new(PollInterval::default());
        poller.publish(ProgressSample::new(0.0, 90.0));

        let sample = poller.sample(&player).expect("ready handle samples");
        assert_eq!(sample.duration_secs(), Some(90.0));
    }
}
