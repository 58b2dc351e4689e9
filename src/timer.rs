//! Countdown timer engine.
//!
//! Holds the raw hours/minutes/seconds field text, validates it on demand,
//! and counts the armed total down one whole second at a time. The host
//! feeds `tick` with measured frame deltas; a fractional-second carry turns
//! those into one-second decrements, consuming several seconds from a single
//! long delta rather than dropping them.
//!
//! State machine: `Idle` (editing the input form) arms into `Running` on a
//! successful validation, flips between `Running` and `Paused` without
//! re-validating, and lands in `Finished` when the count hits zero. A user
//! stop returns to `Idle` silently; a natural finish is the host's cue to
//! ring the completion chime.

use std::time::Duration;

use crate::input::{self, TimerInput};

const ONE_SECOND: Duration = Duration::from_secs(1);

/// One of the three editable fields on the input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputField {
    #[default]
    Hours,
    Minutes,
    Seconds,
}

impl InputField {
    pub fn next(self) -> Self {
        match self {
            InputField::Hours => InputField::Minutes,
            InputField::Minutes => InputField::Seconds,
            InputField::Seconds => InputField::Hours,
        }
    }

    fn max_len(self) -> usize {
        match self {
            InputField::Hours => 7,
            InputField::Minutes | InputField::Seconds => 2,
        }
    }
}

/// Where the countdown currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Paused,
    Finished,
}

/// What `start` did with the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// Input validated; a fresh countdown is running. Any still-ringing
    /// completion chime should be silenced by the caller.
    Armed,
    /// A paused countdown picked up where it left off.
    Resumed,
    /// Validation failed; the per-field errors say why.
    Rejected,
}

#[derive(Debug, Clone)]
pub struct Model {
    hours: String,
    minutes: String,
    seconds: String,
    checked: TimerInput,
    remaining: u64,
    carry: Duration,
    phase: Phase,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            hours: "0".to_string(),
            minutes: "0".to_string(),
            seconds: "0".to_string(),
            checked: input::validate("0", "0", "0"),
            remaining: 0,
            carry: Duration::ZERO,
            phase: Phase::Idle,
        }
    }
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the three input fields with literal values, the same way
    /// the form would end up after typing them.
    pub fn set_input(&mut self, hours: u64, minutes: u64, seconds: u64) {
        self.hours = hours.to_string();
        self.minutes = minutes.to_string();
        self.seconds = seconds.to_string();
    }

    /// Raw text of one input field.
    pub fn input_text(&self, field: InputField) -> &str {
        match field {
            InputField::Hours => &self.hours,
            InputField::Minutes => &self.minutes,
            InputField::Seconds => &self.seconds,
        }
    }

    /// Appends a typed digit to a field, replacing a lone placeholder zero.
    pub fn push_digit(&mut self, field: InputField, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        let max_len = field.max_len();
        let text = self.field_mut(field);
        if text.as_str() == "0" {
            text.clear();
        }
        if text.len() < max_len {
            text.push(digit);
        }
    }

    /// Deletes the last digit of a field, leaving "0" rather than emptiness.
    pub fn pop_digit(&mut self, field: InputField) {
        let text = self.field_mut(field);
        text.pop();
        if text.is_empty() {
            text.push('0');
        }
    }

    /// Resets every input field to its default "0".
    pub fn clear_input(&mut self) {
        self.hours = "0".to_string();
        self.minutes = "0".to_string();
        self.seconds = "0".to_string();
    }

    fn field_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::Hours => &mut self.hours,
            InputField::Minutes => &mut self.minutes,
            InputField::Seconds => &mut self.seconds,
        }
    }

    /// Checks all three fields, records their per-field errors, and refreshes
    /// the countdown preview from whatever parsed. The preview updates even
    /// when validation fails so the readout never shows a stale value from a
    /// previous run.
    pub fn validate(&mut self) -> bool {
        self.checked = input::validate(&self.hours, &self.minutes, &self.seconds);
        self.remaining = self.checked.total_seconds();
        self.checked.is_valid()
    }

    /// Advisory error text for one field, if its last validation failed.
    pub fn field_error(&self, field: InputField) -> Option<&'static str> {
        match field {
            InputField::Hours => self.checked.hours.error,
            InputField::Minutes => self.checked.minutes.error,
            InputField::Seconds => self.checked.seconds.error,
        }
    }

    /// Resumes a paused countdown, or validates the form and arms a fresh
    /// one. Resuming never re-validates; the armed total was checked when
    /// the countdown started.
    pub fn start(&mut self) -> StartOutcome {
        if self.phase == Phase::Paused {
            self.phase = Phase::Running;
            log::debug!("countdown resumed with {}s remaining", self.remaining);
            return StartOutcome::Resumed;
        }
        if self.validate() {
            self.carry = Duration::ZERO;
            self.phase = Phase::Running;
            log::debug!("countdown armed for {}s", self.remaining);
            StartOutcome::Armed
        } else {
            log::debug!("countdown input rejected");
            StartOutcome::Rejected
        }
    }

    /// Freezes a running countdown. No-op in any other phase.
    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
        }
    }

    /// Abandons the countdown and returns to the input form. `finished`
    /// records whether the count ran out naturally (the caller rings the
    /// chime) or the user cut it short (silence).
    pub fn stop(&mut self, finished: bool) {
        self.phase = if finished { Phase::Finished } else { Phase::Idle };
        self.remaining = 0;
        self.carry = Duration::ZERO;
    }

    /// Advances the countdown by one frame's measured delta. Every whole
    /// second accumulated in the carry consumes one remaining second; the
    /// sub-second remainder stays in the carry. Returns true exactly once,
    /// on the tick where the count reaches zero.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.carry += delta;
        while self.carry >= ONE_SECOND {
            self.carry -= ONE_SECOND;
            self.remaining = self.remaining.saturating_sub(1);
            if self.remaining == 0 {
                self.stop(true);
                log::info!("countdown finished");
                return true;
            }
        }
        false
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    /// True while the input form is on screen (no countdown armed).
    pub fn shows_input_form(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::Finished)
    }

    /// Renders the remaining time as `HH:MM:SS`. Hours widen past two digits
    /// when the countdown is long enough.
    pub fn view(&self) -> String {
        let hours = self.remaining / 3600;
        let minutes = (self.remaining % 3600) / 60;
        let seconds = self.remaining % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armed(h: u64, m: u64, s: u64) -> Model {
        let mut timer = Model::new();
        timer.set_input(h, m, s);
        assert_eq!(timer.start(), StartOutcome::Armed);
        timer
    }

    #[test]
    fn rejects_invalid_seconds_minutes_and_hours() {
        let mut timer = Model::new();

        timer.set_input(0, 0, 90);
        assert!(!timer.validate());
        assert!(timer.field_error(InputField::Seconds).is_some());

        timer.set_input(0, 90, 0);
        assert!(!timer.validate());
        assert!(timer.field_error(InputField::Minutes).is_some());

        timer.set_input(1_000_000, 0, 0);
        assert!(!timer.validate());
        assert!(timer.field_error(InputField::Hours).is_some());

        timer.set_input(0, 0, 0);
        assert!(!timer.validate());
    }

    #[test]
    fn accepts_valid_input_and_previews_total() {
        let mut timer = Model::new();
        timer.set_input(1, 1, 1);
        assert!(timer.validate());
        assert_eq!(timer.remaining_seconds(), 3661);
        assert_eq!(timer.view(), "01:01:01");
        assert!(timer.field_error(InputField::Hours).is_none());
    }

    #[test]
    fn start_with_invalid_input_stays_idle() {
        let mut timer = Model::new();
        timer.set_input(0, 0, 0);
        assert_eq!(timer.start(), StartOutcome::Rejected);
        assert_eq!(timer.phase(), Phase::Idle);
        assert!(timer.shows_input_form());
    }

    #[test]
    fn five_second_countdown_with_pause_and_resume() {
        let mut timer = armed(0, 0, 5);
        assert_eq!(timer.remaining_seconds(), 5);

        assert!(!timer.tick(Duration::from_secs(1)));
        assert_eq!(timer.remaining_seconds(), 4);

        timer.pause();
        assert!(timer.is_paused());

        // Ticks while paused change nothing.
        assert!(!timer.tick(Duration::from_secs(3)));
        assert_eq!(timer.remaining_seconds(), 4);

        assert_eq!(timer.start(), StartOutcome::Resumed);
        let mut finished = false;
        for _ in 0..4 {
            finished = timer.tick(Duration::from_secs(1));
        }
        assert!(finished);
        assert_eq!(timer.remaining_seconds(), 0);
        assert_eq!(timer.phase(), Phase::Finished);
    }

    #[test]
    fn finish_fires_exactly_once() {
        let mut timer = armed(0, 0, 1);
        assert!(timer.tick(Duration::from_secs(1)));
        assert!(!timer.tick(Duration::from_secs(1)));
        assert_eq!(timer.remaining_seconds(), 0);
    }

    #[test]
    fn long_frame_consumes_multiple_seconds() {
        let mut timer = armed(0, 0, 5);
        assert!(!timer.tick(Duration::from_millis(2_500)));
        assert_eq!(timer.remaining_seconds(), 3);

        // The half second above was carried, not dropped.
        assert!(!timer.tick(Duration::from_millis(500)));
        assert_eq!(timer.remaining_seconds(), 2);
    }

    #[test]
    fn sub_second_remainder_survives_the_decrement() {
        let mut timer = armed(0, 0, 10);
        timer.tick(Duration::from_millis(1_700));
        assert_eq!(timer.remaining_seconds(), 9);
        timer.tick(Duration::from_millis(300));
        assert_eq!(timer.remaining_seconds(), 8);
    }

    #[test]
    fn oversized_final_frame_still_finishes_once() {
        let mut timer = armed(0, 0, 2);
        assert!(timer.tick(Duration::from_secs(10)));
        assert_eq!(timer.remaining_seconds(), 0);
        assert_eq!(timer.phase(), Phase::Finished);
    }

    #[test]
    fn resume_skips_revalidation() {
        let mut timer = armed(0, 0, 5);
        timer.tick(Duration::from_secs(1));
        timer.pause();

        // Corrupt the form while paused; resuming must not look at it.
        timer.set_input(0, 0, 0);
        assert_eq!(timer.start(), StartOutcome::Resumed);
        assert_eq!(timer.remaining_seconds(), 4);
        assert!(timer.is_running());
    }

    #[test]
    fn user_stop_returns_to_input_form_silently() {
        let mut timer = armed(0, 1, 30);
        timer.tick(Duration::from_secs(2));
        timer.stop(false);

        assert_eq!(timer.phase(), Phase::Idle);
        assert!(timer.shows_input_form());
        assert_eq!(timer.remaining_seconds(), 0);
        assert_eq!(timer.view(), "00:00:00");
    }

    #[test]
    fn starting_after_a_finish_revalidates_the_form() {
        let mut timer = armed(0, 0, 2);
        timer.tick(Duration::from_secs(2));
        assert_eq!(timer.phase(), Phase::Finished);

        // The fields still hold 0:0:2, so starting again arms a new run.
        assert_eq!(timer.start(), StartOutcome::Armed);
        assert_eq!(timer.remaining_seconds(), 2);
        assert!(timer.is_running());
    }

    #[test]
    fn pause_outside_running_is_a_no_op() {
        let mut timer = Model::new();
        timer.pause();
        assert_eq!(timer.phase(), Phase::Idle);

        let mut timer = armed(0, 0, 5);
        timer.pause();
        timer.pause();
        assert!(timer.is_paused());
    }

    #[test]
    fn digit_editing_replaces_placeholder_and_respects_width() {
        let mut timer = Model::new();
        timer.push_digit(InputField::Minutes, '4');
        assert_eq!(timer.input_text(InputField::Minutes), "4");
        timer.push_digit(InputField::Minutes, '2');
        assert_eq!(timer.input_text(InputField::Minutes), "42");
        // Minutes are capped at two digits.
        timer.push_digit(InputField::Minutes, '7');
        assert_eq!(timer.input_text(InputField::Minutes), "42");

        timer.push_digit(InputField::Minutes, 'x');
        assert_eq!(timer.input_text(InputField::Minutes), "42");

        timer.pop_digit(InputField::Minutes);
        assert_eq!(timer.input_text(InputField::Minutes), "4");
        timer.pop_digit(InputField::Minutes);
        assert_eq!(timer.input_text(InputField::Minutes), "0");
        timer.pop_digit(InputField::Minutes);
        assert_eq!(timer.input_text(InputField::Minutes), "0");
    }

    #[test]
    fn clear_input_restores_defaults() {
        let mut timer = Model::new();
        timer.set_input(3, 25, 48);
        timer.clear_input();
        assert_eq!(timer.input_text(InputField::Hours), "0");
        assert_eq!(timer.input_text(InputField::Minutes), "0");
        assert_eq!(timer.input_text(InputField::Seconds), "0");
    }

    #[test]
    fn view_widens_hours_for_long_countdowns() {
        let mut timer = Model::new();
        timer.set_input(120, 0, 30);
        assert!(timer.validate());
        assert_eq!(timer.view(), "120:00:30");
    }

    #[test]
    fn input_field_cycles_in_form_order() {
        assert_eq!(InputField::Hours.next(), InputField::Minutes);
        assert_eq!(InputField::Minutes.next(), InputField::Seconds);
        assert_eq!(InputField::Seconds.next(), InputField::Hours);
    }
}
