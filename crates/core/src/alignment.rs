//! Anchor and align the panel of a menu.

/// The side of the trigger the panel of a menu opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Above the trigger.
    Top,

    /// Below the trigger.
    #[default]
    Bottom,

    /// To the left of the trigger.
    Left,

    /// To the right of the trigger.
    Right,
}

option_names!(Direction, "direction", {
    Top => "top",
    Bottom => "bottom",
    Left => "left",
    Right => "right",
});

impl Direction {
    /// Returns the [`Axis`] the panel is offset along.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// Returns true if the panel opens on one of the sides of the trigger.
    #[must_use]
    pub fn is_side(self) -> bool {
        self.axis() == Axis::Horizontal
    }
}

/// An axis of the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis.
    Horizontal,

    /// The y axis.
    Vertical,
}

/// The alignment of the panel with the trigger, along the axis
/// perpendicular to the [`Direction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Align {
    /// Align the leading edges.
    Start,

    /// Center the panel on the trigger.
    #[default]
    Center,

    /// Align the trailing edges.
    End,

    /// Match the width of the trigger.
    ///
    /// Only meaningful for [`Direction::Top`] and [`Direction::Bottom`].
    Stretch,
}

option_names!(Align, "alignment", {
    Start => "start",
    Center => "center",
    End => "end",
    Stretch => "stretch",
});

impl Align {
    /// Resolves the alignment that is actually applied for the given
    /// [`Direction`].
    ///
    /// [`Align::Stretch`] falls back to [`Align::Center`] on the sides.
    #[must_use]
    pub fn resolve(self, direction: Direction) -> Self {
        match self {
            Self::Stretch if direction.is_side() => Self::Center,
            align => align,
        }
    }
}
