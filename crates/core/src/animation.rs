//! Animate the panel of a menu as it opens and closes.
use crate::alignment::Direction;
use crate::{Size, Vector};

/// The fraction of the panel extent a sliding panel travels.
pub const SLIDE_DISTANCE: f32 = 0.4;

/// The transition style of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Animation {
    /// The panel appears and disappears instantly.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "default", alias = "none"))]
    None,

    /// The panel slides out of the side of the trigger.
    #[cfg_attr(feature = "serde", serde(rename = "slide"))]
    Slide,
}

option_names!(Animation, "animation", {
    None => "default" | "none",
    Slide => "slide",
});

impl Animation {
    /// Returns true if the [`Animation`] has a visible transition.
    #[must_use]
    pub fn is_animated(self) -> bool {
        self != Self::None
    }

    /// Computes the translation of a panel of the given [`Size`].
    ///
    /// `progress` goes from `0.0` (closed) to `1.0` (open).
    #[must_use]
    pub fn translation(self, direction: Direction, panel: Size, progress: f32) -> Vector {
        match self {
            Self::None => Vector::ZERO,
            Self::Slide => slide(direction, panel, progress),
        }
    }
}

/// Computes the translation of a sliding panel.
///
/// A closed panel is pushed back towards the trigger by [`SLIDE_DISTANCE`]
/// of its extent; an open panel is not translated.
#[must_use]
pub fn slide(direction: Direction, panel: Size, progress: f32) -> Vector {
    let remaining = 1.0 - progress.clamp(0.0, 1.0);

    match direction {
        Direction::Bottom => Vector::new(0.0, -SLIDE_DISTANCE * panel.height * remaining),
        Direction::Top => Vector::new(0.0, SLIDE_DISTANCE * panel.height * remaining),
        Direction::Left => Vector::new(SLIDE_DISTANCE * panel.width * remaining, 0.0),
        Direction::Right => Vector::new(-SLIDE_DISTANCE * panel.width * remaining, 0.0),
    }
}
