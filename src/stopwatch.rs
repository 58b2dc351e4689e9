//! A stopwatch that accumulates measured frame deltas while running.
//!
//! The host feeds `tick` with the elapsed time of each rendered frame, so a
//! skipped or slow frame simply contributes a larger delta. Nothing here
//! reads the system clock.

use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct Model {
    elapsed: Duration,
    running: bool,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts accumulating. No-op if already running.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Freezes the current lap time. No-op if already stopped.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stops and zeroes the lap time.
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed = Duration::ZERO;
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Advances the lap time by one frame's measured delta.
    pub fn tick(&mut self, delta: Duration) {
        if self.running {
            self.elapsed += delta;
        }
    }

    /// The lap time accumulated since the last reset.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Renders the lap time as `MM:SS.CC`. Minutes grow past two digits on
    /// laps over an hour and 39 minutes; seconds and hundredths stay zero
    /// padded.
    pub fn view(&self) -> String {
        let minutes = self.elapsed.as_secs() / 60;
        let seconds = self.elapsed.as_secs() % 60;
        let hundredths = self.elapsed.subsec_millis() / 10;
        format!("{:02}:{:02}.{:02}", minutes, seconds, hundredths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_stopped_at_zero() {
        let sw = Model::new();
        assert!(!sw.is_running());
        assert_eq!(sw.elapsed(), Duration::ZERO);
        assert_eq!(sw.view(), "00:00.00");
    }

    #[test]
    fn ticks_only_while_running() {
        let mut sw = Model::new();
        sw.tick(Duration::from_secs(3));
        assert_eq!(sw.elapsed(), Duration::ZERO);

        sw.start();
        sw.tick(Duration::from_secs(3));
        assert_eq!(sw.elapsed(), Duration::from_secs(3));

        sw.stop();
        sw.tick(Duration::from_secs(3));
        assert_eq!(sw.elapsed(), Duration::from_secs(3));
    }

    #[test]
    fn many_small_deltas_equal_one_large_delta() {
        let mut a = Model::new();
        let mut b = Model::new();
        a.start();
        b.start();

        for _ in 0..250 {
            a.tick(Duration::from_millis(20));
        }
        b.tick(Duration::from_secs(5));

        assert_eq!(a.elapsed(), b.elapsed());
    }

    #[test]
    fn reset_zeroes_and_stops_accumulation() {
        let mut sw = Model::new();
        sw.start();
        sw.tick(Duration::from_secs(2));
        sw.reset();

        assert_eq!(sw.elapsed(), Duration::ZERO);
        assert!(!sw.is_running());

        // No further increase until started again.
        sw.tick(Duration::from_secs(2));
        assert_eq!(sw.elapsed(), Duration::ZERO);

        sw.start();
        sw.tick(Duration::from_millis(500));
        assert_eq!(sw.elapsed(), Duration::from_millis(500));
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut sw = Model::new();
        sw.start();
        sw.start();
        sw.tick(Duration::from_secs(1));
        sw.stop();
        sw.stop();
        assert_eq!(sw.elapsed(), Duration::from_secs(1));
    }

    #[test]
    fn toggle_flips_running_state() {
        let mut sw = Model::new();
        sw.toggle();
        assert!(sw.is_running());
        sw.toggle();
        assert!(!sw.is_running());
    }

    #[test]
    fn view_formats_minutes_seconds_hundredths() {
        let mut sw = Model::new();
        sw.start();
        sw.tick(Duration::from_millis(65_250));
        assert_eq!(sw.view(), "01:05.25");
    }

    #[test]
    fn view_lets_minutes_run_past_an_hour() {
        let mut sw = Model::new();
        sw.start();
        sw.tick(Duration::from_secs(99 * 60 + 59));
        assert_eq!(sw.view(), "99:59.00");
    }
}
