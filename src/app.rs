//! The application model wiring the engines to the terminal.
//!
//! This is the composition root: it owns the tab coordinator, the three
//! engines, and the chime sink, routes key presses to whichever tab is
//! active, and turns the frame tick into the measured deltas the stopwatch
//! and timer consume. Nothing here keeps state of its own beyond the tick
//! bookkeeping and the once-per-second clock readout cache.

use bubbletea_rs::{quit, tick as bubbletea_tick, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use std::time::{Duration, Instant};

use crate::chime::{Chime, TerminalBell};
use crate::help;
use crate::key::{Binding, KeyMap};
use crate::tabs::Tab;
use crate::timer::{InputField, StartOutcome};
use crate::{clock, stopwatch, tabs, timer};

/// How often the frame tick fires. Engines receive the measured delta, so
/// this only bounds display smoothness, not timing accuracy.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(50);

const CLOCK_REFRESH: Duration = Duration::from_secs(1);

/// Frame tick driving the stopwatch and timer engines. The delta is measured
/// when the message is handled, so slow frames are accounted for in full.
#[derive(Debug)]
pub struct FrameMsg;

fn frame_cmd() -> Cmd {
    bubbletea_tick(FRAME_INTERVAL, |_| Box::new(FrameMsg) as Msg)
}

/// Key bindings for the whole application. Tab-specific bindings are shown
/// and matched only while their tab is active.
#[derive(Debug, Clone)]
pub struct AppKeyMap {
    pub quit: Binding,
    pub prev_tab: Binding,
    pub next_tab: Binding,
    pub toggle: Binding,
    pub reset: Binding,
    pub stop: Binding,
    pub next_field: Binding,
}

impl Default for AppKeyMap {
    fn default() -> Self {
        Self {
            quit: Binding::new(vec![
                (KeyCode::Char('q'), KeyModifiers::NONE),
                (KeyCode::Char('c'), KeyModifiers::CONTROL),
            ])
            .with_help("q", "quit"),
            prev_tab: Binding::new(vec![KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "prev tab"),
            next_tab: Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
                .with_help("→/l", "next tab"),
            toggle: Binding::new(vec![KeyCode::Char(' '), KeyCode::Enter])
                .with_help("space", "start/stop"),
            reset: Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset"),
            stop: Binding::new(vec![KeyCode::Char('s')]).with_help("s", "stop"),
            next_field: Binding::new(vec![KeyCode::Tab]).with_help("tab", "next field"),
        }
    }
}

/// Styles for the tab bar and tab bodies.
#[derive(Debug, Clone)]
pub struct Styles {
    pub active_tab: Style,
    pub inactive_tab: Style,
    pub readout: Style,
    pub status: Style,
    pub label: Style,
    pub focused_field: Style,
    pub error: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            active_tab: Style::new().bold(true).foreground(Color::from("212")),
            inactive_tab: Style::new().foreground(Color::from("241")),
            readout: Style::new().bold(true),
            status: Style::new().foreground(Color::from("241")),
            label: Style::new().foreground(Color::from("245")),
            focused_field: Style::new().bold(true).foreground(Color::from("212")),
            error: Style::new().foreground(Color::from("196")),
        }
    }
}

pub struct App {
    tabs: tabs::Model,
    clock: clock::Model,
    stopwatch: stopwatch::Model,
    timer: timer::Model,
    focus: InputField,
    chime: Box<dyn Chime + Send>,
    keymap: AppKeyMap,
    help: help::Model,
    styles: Styles,
    last_frame: Instant,
    clock_carry: Duration,
    clock_text: String,
}

impl App {
    /// Builds the application around an injected chime sink.
    pub fn new(chime: Box<dyn Chime + Send>) -> Self {
        let clock = clock::Model::new();
        let clock_text = clock.view();
        Self {
            tabs: tabs::Model::new(),
            clock,
            stopwatch: stopwatch::Model::new(),
            timer: timer::Model::new(),
            focus: InputField::Hours,
            chime,
            keymap: AppKeyMap::default(),
            help: help::Model::new(),
            styles: Styles::default(),
            last_frame: Instant::now(),
            clock_carry: Duration::ZERO,
            clock_text,
        }
    }

    /// Feeds one frame's delta to both engines and refreshes the clock
    /// readout once a full second has accumulated.
    fn handle_frame(&mut self, delta: Duration) {
        self.stopwatch.tick(delta);
        if self.timer.tick(delta) {
            self.chime.ring();
        }

        self.clock_carry += delta;
        if self.clock_carry >= CLOCK_REFRESH {
            // Keep the remainder so the refresh cadence does not drift on
            // slow frames, same as the timer's carry.
            while self.clock_carry >= CLOCK_REFRESH {
                self.clock_carry -= CLOCK_REFRESH;
            }
            self.clock_text = self.clock.view();
        }
    }

    fn handle_key(&mut self, key: &KeyMsg) -> Option<Cmd> {
        if self.keymap.quit.matches(key) {
            return Some(quit());
        }
        if self.keymap.prev_tab.matches(key) {
            self.tabs.select_prev();
            return None;
        }
        if self.keymap.next_tab.matches(key) {
            self.tabs.select_next();
            return None;
        }

        match self.tabs.active() {
            Tab::Clock => {}
            Tab::Stopwatch => self.handle_stopwatch_key(key),
            Tab::Timer => self.handle_timer_key(key),
        }
        None
    }

    fn handle_stopwatch_key(&mut self, key: &KeyMsg) {
        if self.keymap.toggle.matches(key) {
            self.stopwatch.toggle();
        } else if self.keymap.reset.matches(key) {
            self.stopwatch.reset();
        }
    }

    fn handle_timer_key(&mut self, key: &KeyMsg) {
        if self.timer.shows_input_form() {
            if self.keymap.toggle.matches(key) {
                if self.timer.start() == StartOutcome::Armed {
                    self.chime.silence();
                }
            } else if self.keymap.reset.matches(key) {
                self.timer.clear_input();
            } else if self.keymap.next_field.matches(key) {
                self.focus = self.focus.next();
            } else if let KeyCode::Char(c) = key.key {
                if c.is_ascii_digit() && key.modifiers == KeyModifiers::NONE {
                    self.timer.push_digit(self.focus, c);
                }
            } else if key.key == KeyCode::Backspace {
                self.timer.pop_digit(self.focus);
            }
        } else if self.keymap.toggle.matches(key) {
            if self.timer.is_running() {
                self.timer.pause();
            } else {
                self.timer.start();
            }
        } else if self.keymap.stop.matches(key) {
            self.timer.stop(false);
        }
    }

    fn tab_bar(&self) -> String {
        let labels: Vec<String> = Tab::ALL
            .iter()
            .map(|tab| {
                let style = if self.tabs.is_active(*tab) {
                    &self.styles.active_tab
                } else {
                    &self.styles.inactive_tab
                };
                style.clone().inline(true).render(tab.title())
            })
            .collect();
        labels.join("  ")
    }

    fn clock_body(&self) -> String {
        self.styles.readout.clone().render(&self.clock_text)
    }

    /// The small always-visible clock shown above the stopwatch and timer.
    fn top_clock(&self) -> String {
        self.styles.status.clone().inline(true).render(&self.clock_text)
    }

    fn stopwatch_body(&self) -> String {
        let status = if self.stopwatch.is_running() {
            "running"
        } else {
            "stopped"
        };
        format!(
            "{}\n{}",
            self.styles.readout.clone().render(&self.stopwatch.view()),
            self.styles.status.clone().render(status),
        )
    }

    fn timer_body(&self) -> String {
        if self.timer.shows_input_form() {
            self.timer_form()
        } else {
            let status = if self.timer.is_paused() {
                "paused"
            } else {
                "counting down"
            };
            format!(
                "{}\n{}",
                self.styles.readout.clone().render(&self.timer.view()),
                self.styles.status.clone().render(status),
            )
        }
    }

    fn timer_form(&self) -> String {
        let rows = [
            (InputField::Hours, "Hours"),
            (InputField::Minutes, "Minutes"),
            (InputField::Seconds, "Seconds"),
        ];

        let mut lines = Vec::with_capacity(rows.len());
        for (field, name) in rows {
            let marker = if field == self.focus { "> " } else { "  " };
            let label_style = if field == self.focus {
                &self.styles.focused_field
            } else {
                &self.styles.label
            };
            let label = label_style
                .clone()
                .inline(true)
                .render(&format!("{:<8}", name));
            let value = self.timer.input_text(field);
            let mut line = format!("{}{}{:>7}", marker, label, value);
            if let Some(error) = self.timer.field_error(field) {
                line.push_str("  ");
                line.push_str(&self.styles.error.clone().inline(true).render(error));
            }
            lines.push(line);
        }
        lines.join("\n")
    }
}

impl KeyMap for App {
    fn short_help(&self) -> Vec<&Binding> {
        let mut bindings = vec![&self.keymap.prev_tab, &self.keymap.next_tab];
        match self.tabs.active() {
            Tab::Clock => {}
            Tab::Stopwatch => {
                bindings.push(&self.keymap.toggle);
                bindings.push(&self.keymap.reset);
            }
            Tab::Timer => {
                bindings.push(&self.keymap.toggle);
                if self.timer.shows_input_form() {
                    bindings.push(&self.keymap.next_field);
                    bindings.push(&self.keymap.reset);
                } else {
                    bindings.push(&self.keymap.stop);
                }
            }
        }
        bindings.push(&self.keymap.quit);
        bindings
    }
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(Box::new(TerminalBell)), Some(frame_cmd()))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if msg.downcast_ref::<FrameMsg>().is_some() {
            let now = Instant::now();
            let delta = now.saturating_duration_since(self.last_frame);
            self.last_frame = now;
            self.handle_frame(delta);
            return Some(frame_cmd());
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key);
        }

        None
    }

    fn view(&self) -> String {
        // The stopwatch and timer tabs keep a small live clock above their
        // own readout; the clock tab is the clock.
        let body = match self.tabs.active() {
            Tab::Clock => self.clock_body(),
            Tab::Stopwatch => format!("{}\n\n{}", self.top_clock(), self.stopwatch_body()),
            Tab::Timer => format!("{}\n\n{}", self.top_clock(), self.timer_body()),
        };
        format!(
            "{}\n\n{}\n\n{}",
            self.tab_bar(),
            body,
            self.help.view(self)
        )
    }
}
