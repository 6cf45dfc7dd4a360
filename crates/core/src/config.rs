//! Configure the behavior of a menu.
use crate::alignment::{Align, Direction};
use crate::animation::Animation;
use crate::close::ClosePolicy;

/// The default distance between the trigger and the panel.
pub const DEFAULT_GAP: f32 = 16.0;

/// The configuration of a menu.
///
/// It is immutable for the lifetime of a single view.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Config {
    /// The side of the trigger the panel opens on.
    pub direction: Direction,
    /// The alignment of the panel with the trigger.
    pub align: Align,
    /// The transition of the panel.
    pub animation: Animation,
    /// The distance between the trigger and the panel.
    pub gap: f32,
    /// The clicks that close the menu.
    #[cfg_attr(feature = "serde", serde(rename = "closeAfter"))]
    pub close_policy: ClosePolicy,
    /// Whether the trigger ignores activation.
    pub disabled: bool,
}

impl Config {
    /// Returns the [`Align`] that is actually applied.
    #[must_use]
    pub fn effective_align(&self) -> Align {
        self.align.resolve(self.direction)
    }

    /// Returns the [`Warning`] the [`Config`] deserves, if any.
    #[must_use]
    pub fn warning(&self) -> Option<Warning> {
        if self.align == Align::Stretch && self.direction.is_side() {
            Some(Warning::StretchOnSide(self.direction))
        } else {
            None
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            align: Align::default(),
            animation: Animation::default(),
            gap: DEFAULT_GAP,
            close_policy: ClosePolicy::default(),
            disabled: false,
        }
    }
}

/// A misuse of the [`Config`] that has a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// [`Align::Stretch`] was requested for a side [`Direction`]; the panel
    /// is centered instead.
    StretchOnSide(Direction),
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StretchOnSide(direction) => write!(
                f,
                "stretch alignment does not work on the {direction} side, centering instead"
            ),
        }
    }
}
