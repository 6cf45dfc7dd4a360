//! Negotiate who owns the open state of a menu.

/// Who is allowed to write the open state of a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StatePriority {
    /// The menu owns its state.
    #[default]
    Inner,

    /// The caller owns the state.
    Outer,
}

option_names!(StatePriority, "state priority", {
    Inner => "inner",
    Outer => "outer",
});

/// The resolved ownership of the open state of a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// The menu is the only writer of its state.
    ///
    /// The caller may still be notified of changes.
    Inner {
        /// Whether the menu starts open.
        initial: bool,
    },

    /// The caller owns the state and the menu mirrors it.
    ///
    /// Changes requested by the menu are sent back to the caller, who
    /// decides whether they happen.
    Outer {
        /// The current state, as owned by the caller.
        state: bool,
    },
}

impl Ownership {
    /// Returns the [`StatePriority`] of the [`Ownership`].
    #[must_use]
    pub fn priority(self) -> StatePriority {
        match self {
            Self::Inner { .. } => StatePriority::Inner,
            Self::Outer { .. } => StatePriority::Outer,
        }
    }

    /// Returns the open state a freshly mounted menu starts with.
    #[must_use]
    pub fn initial_state(self) -> bool {
        match self {
            Self::Inner { initial } => initial,
            Self::Outer { state } => state,
        }
    }

    /// Returns the state the caller forces on the menu, if any.
    #[must_use]
    pub fn external_state(self) -> Option<bool> {
        match self {
            Self::Inner { .. } => None,
            Self::Outer { state } => Some(state),
        }
    }
}

impl Default for Ownership {
    fn default() -> Self {
        Self::Inner { initial: false }
    }
}
