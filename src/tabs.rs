//! Exclusive selection over the three top-level tabs.

/// One of the three views. Exactly one is ever active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Clock,
    Stopwatch,
    Timer,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 3] = [Tab::Clock, Tab::Stopwatch, Tab::Timer];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Clock => "Clock",
            Tab::Stopwatch => "Stopwatch",
            Tab::Timer => "Timer",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Tab::Clock => Tab::Stopwatch,
            Tab::Stopwatch => Tab::Timer,
            Tab::Timer => Tab::Clock,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Tab::Clock => Tab::Timer,
            Tab::Stopwatch => Tab::Clock,
            Tab::Timer => Tab::Stopwatch,
        }
    }
}

/// Tracks which tab is active. Selecting the active tab again is a no-op.
#[derive(Debug, Clone, Default)]
pub struct Model {
    active: Tab,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, tab: Tab) {
        self.active = tab;
    }

    pub fn select_next(&mut self) {
        self.active = self.active.next();
    }

    pub fn select_prev(&mut self) {
        self.active = self.active.prev();
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }
}
