//! Audio cue stub.
//!
//! Nothing is synthesized. When audio is enabled a cue is logged, which is
//! the full extent of the feature.

use std::fmt;

/// A sound the scene would play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Pointer entered a node.
    Hover,
    /// A node or project was clicked.
    Click,
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hover => "hover",
            Self::Click => "click",
        })
    }
}

/// Audio on/off switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AudioCues {
    enabled: bool,
}

impl AudioCues {
    /// Whether cues are played.
    #[must_use]
    pub fn enabled(self) -> bool {
        self.enabled
    }

    /// Flip the switch and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// "Play" `cue`. Returns `true` if it would have been audible.
    pub fn play(self, cue: Cue) -> bool {
        if self.enabled {
            log::debug!("Playing {cue} sound");
        }
        self.enabled
    }
}
