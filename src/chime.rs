//! The completion-sound seam.
//!
//! The timer engine only reports that the countdown finished; whoever owns
//! the engines decides what that sounds like. The composition root injects
//! [`TerminalBell`]; tests inject a counting fake.

use std::io::{self, Write};

/// Something that can announce a finished countdown.
pub trait Chime {
    /// Play the completion sound.
    fn ring(&mut self);

    /// Cut off a still-playing completion sound. The default is a no-op for
    /// sinks whose sound is instantaneous.
    fn silence(&mut self) {}
}

/// Rings the terminal bell (ASCII BEL).
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl Chime for TerminalBell {
    fn ring(&mut self) {
        let mut out = io::stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counting {
        rings: usize,
    }

    impl Chime for Counting {
        fn ring(&mut self) {
            self.rings += 1;
        }
    }

    #[test]
    fn default_silence_is_a_no_op() {
        let mut chime = Counting::default();
        chime.ring();
        chime.silence();
        assert_eq!(chime.rings, 1);
    }
}
