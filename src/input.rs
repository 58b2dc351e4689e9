//! Validation for the countdown timer's hours/minutes/seconds input.
//!
//! Parsing and bounds checking are pure functions over the raw field text so
//! they can be tested without any terminal plumbing. All three fields are
//! always checked; a failure in one never short-circuits the others, because
//! the form shows each field its own error text.

/// Largest accepted hour count. Minutes and seconds cap at 59.
pub const MAX_HOURS: u64 = 999_999;

const HOURS_RANGE_MSG: &str = "Enter a valid number (0-999,999)";
const MIN_SEC_RANGE_MSG: &str = "Enter a valid number (0-59)";

/// Outcome of checking a single input field.
///
/// When the field is invalid, `value` is zero and `error` carries the
/// advisory text to show next to the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    pub value: u64,
    pub error: Option<&'static str>,
}

impl FieldCheck {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

fn check_field(text: &str, max: u64, message: &'static str) -> FieldCheck {
    match text.trim().parse::<u64>() {
        Ok(value) if value <= max => FieldCheck { value, error: None },
        _ => FieldCheck {
            value: 0,
            error: Some(message),
        },
    }
}

/// The validated hours/minutes/seconds triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerInput {
    pub hours: FieldCheck,
    pub minutes: FieldCheck,
    pub seconds: FieldCheck,
}

impl TimerInput {
    /// Total length of the countdown, derived from whatever parsed. Invalid
    /// fields contribute zero so a partially valid form still previews a
    /// sensible countdown.
    pub fn total_seconds(&self) -> u64 {
        self.hours.value * 3600 + self.minutes.value * 60 + self.seconds.value
    }

    /// A usable countdown needs every field in range and a non-zero total.
    pub fn is_valid(&self) -> bool {
        self.hours.is_valid()
            && self.minutes.is_valid()
            && self.seconds.is_valid()
            && self.total_seconds() > 0
    }
}

/// Checks all three raw field strings and reports per-field results.
pub fn validate(hours: &str, minutes: &str, seconds: &str) -> TimerInput {
    TimerInput {
        hours: check_field(hours, MAX_HOURS, HOURS_RANGE_MSG),
        minutes: check_field(minutes, 59, MIN_SEC_RANGE_MSG),
        seconds: check_field(seconds, 59, MIN_SEC_RANGE_MSG),
    }
}
