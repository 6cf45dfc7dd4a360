//! Open and close a menu.
//!
//! A [`MenuState`] is a two-state machine: closed and open. It moves on
//! trigger activation, on clicks evaluated against the [`ClosePolicy`],
//! and, when the caller owns the state, on synchronization with the
//! caller's value.
//!
//! [`ClosePolicy`]: crate::ClosePolicy
use crate::close::ClickTarget;
use crate::config::Config;
use crate::ownership::Ownership;

/// Whether the items of a menu can be reached with the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabIndex {
    /// The items take part in the focus order.
    Reachable,

    /// The items are skipped by the focus order.
    Unreachable,
}

impl TabIndex {
    /// Returns true if the items can be focused.
    #[must_use]
    pub fn is_reachable(self) -> bool {
        self == Self::Reachable
    }
}

/// The markers a menu applies to its trigger, panel, and items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Markers {
    /// The trigger and the panel are displayed as active.
    pub active: bool,
    /// The panel is hidden from hit-testing and assistive technologies.
    pub hidden: bool,
    /// The reachability of the items.
    pub item_tab_index: TabIndex,
}

impl Markers {
    /// Returns the [`Markers`] of a menu that is open or closed.
    #[must_use]
    pub fn new(is_open: bool) -> Self {
        Self {
            active: is_open,
            hidden: !is_open,
            item_tab_index: if is_open {
                TabIndex::Reachable
            } else {
                TabIndex::Unreachable
            },
        }
    }
}

/// A change of the open state of a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    /// Whether the menu is open after the change.
    pub is_open: bool,
    /// The markers to apply after the change.
    pub markers: Markers,
}

impl Transition {
    fn to(is_open: bool) -> Self {
        Self {
            is_open,
            markers: Markers::new(is_open),
        }
    }
}

/// The open state of a mounted menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    is_open: bool,
}

impl MenuState {
    /// Mounts a menu with the given [`Config`] and [`Ownership`].
    ///
    /// Misuses of the [`Config`] that have a fallback are logged here, once
    /// per mounted menu.
    pub fn mount(config: &Config, ownership: Ownership) -> Self {
        if let Some(warning) = config.warning() {
            log::warn!("{warning}");
        }

        Self {
            is_open: ownership.initial_state(),
        }
    }

    /// Returns true if the menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Returns the current [`Markers`] of the menu.
    #[must_use]
    pub fn markers(&self) -> Markers {
        Markers::new(self.is_open)
    }

    /// Toggles the menu, unless it is disabled.
    pub fn activate_trigger(&mut self, config: &Config) -> Option<Transition> {
        if config.disabled {
            return None;
        }

        self.set(!self.is_open)
    }

    /// Processes a click on the given [`ClickTarget`].
    ///
    /// Returns a [`Transition`] if the click closes the menu.
    pub fn click(&mut self, config: &Config, target: ClickTarget) -> Option<Transition> {
        if self.is_open && config.close_policy.closes_on(target) {
            self.set(false)
        } else {
            None
        }
    }

    /// Forces the state owned by the caller on the menu.
    ///
    /// Does nothing for [`Ownership::Inner`].
    pub fn sync(&mut self, ownership: Ownership) -> Option<Transition> {
        self.set(ownership.external_state()?)
    }

    /// Sets the open state, returning a [`Transition`] if it changed.
    pub fn set(&mut self, is_open: bool) -> Option<Transition> {
        if self.is_open == is_open {
            return None;
        }

        self.is_open = is_open;

        Some(Transition::to(is_open))
    }
}
