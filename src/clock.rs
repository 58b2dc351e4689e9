//! Wall-clock readout for the clock tab.
//!
//! Formats the host machine's local time in zero-padded 24-hour `HH:MM:SS`.
//! The app re-renders this once per second; nothing is cached here.

use chrono::{Local, Timelike};

#[derive(Debug, Clone, Copy, Default)]
pub struct Model;

impl Model {
    pub fn new() -> Self {
        Self
    }

    /// The current local time as display text.
    pub fn view(&self) -> String {
        render(&Local::now())
    }
}

fn render(time: &impl Timelike) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}
