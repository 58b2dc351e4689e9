//! # deskclock
//!
//! A desk clock for the terminal, built with [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs):
//! a wall clock, a stopwatch, and a countdown timer behind three mutually
//! exclusive tabs.
//!
//! The time-keeping engines are plain state machines with no terminal
//! dependencies. The host drives them with measured frame deltas and reads
//! back display-ready strings:
//!
//! - [`stopwatch::Model`] accumulates elapsed time while running and renders
//!   `MM:SS.CC`.
//! - [`timer::Model`] validates an hours/minutes/seconds form, counts the
//!   total down one second at a time with pause/resume, and reports the
//!   moment it finishes so the host can ring a [`chime::Chime`].
//! - [`clock::Model`] formats the machine's local time as `HH:MM:SS`.
//! - [`tabs::Model`] keeps exactly one tab active.
//!
//! [`app::App`] is the composition root tying the engines to key bindings,
//! the frame tick, and the lipgloss-styled view. Run it as a program:
//!
//! ```rust,no_run
//! use bubbletea_rs::Program;
//! use deskclock::app::App;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let program = Program::<App>::builder().build()?;
//! program.run().await?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod chime;
pub mod clock;
pub mod help;
pub mod input;
pub mod key;
pub mod stopwatch;
pub mod tabs;
pub mod timer;

pub use app::App;
pub use chime::{Chime, TerminalBell};
pub use clock::Model as Clock;
pub use input::{validate as validate_input, FieldCheck, TimerInput};
pub use key::{Binding, KeyMap, KeyPress};
pub use stopwatch::Model as Stopwatch;
pub use tabs::{Model as TabCoordinator, Tab};
pub use timer::{InputField, Model as Timer, Phase, StartOutcome};
