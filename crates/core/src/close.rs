//! Decide which clicks close an open menu.

/// The part of the screen a click landed on, relative to a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickTarget {
    /// The trigger of the menu.
    Trigger,

    /// The panel of the menu, including its items.
    Panel,

    /// Anywhere else.
    Outside,
}

/// The clicks that close an open menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClosePolicy {
    /// Close only on clicks outside of both the panel and the trigger.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "outMenu"))]
    OutsideOnly,

    /// Close on any click that is not on the trigger, including clicks
    /// inside the panel.
    #[cfg_attr(feature = "serde", serde(rename = "any"))]
    AnyClick,
}

option_names!(ClosePolicy, "close policy", {
    OutsideOnly => "outMenu",
    AnyClick => "any",
});

impl ClosePolicy {
    /// Returns true if a click on the given [`ClickTarget`] closes an open
    /// menu.
    ///
    /// Clicks on the trigger never close through this path; the trigger
    /// toggles the menu itself.
    #[must_use]
    pub fn closes_on(self, target: ClickTarget) -> bool {
        match (self, target) {
            (_, ClickTarget::Trigger) => false,
            (_, ClickTarget::Outside) => true,
            (Self::OutsideOnly, ClickTarget::Panel) => false,
            (Self::AnyClick, ClickTarget::Panel) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_never_closes() {
        assert!(!ClosePolicy::OutsideOnly.closes_on(ClickTarget::Trigger));
        assert!(!ClosePolicy::AnyClick.closes_on(ClickTarget::Trigger));
    }

    #[test]
    fn panel_closes_only_on_any_click() {
        assert!(!ClosePolicy::OutsideOnly.closes_on(ClickTarget::Panel));
        assert!(ClosePolicy::AnyClick.closes_on(ClickTarget::Panel));
        assert!(ClosePolicy::OutsideOnly.closes_on(ClickTarget::Outside));
        assert!(ClosePolicy::AnyClick.closes_on(ClickTarget::Outside));
    }

    #[test]
    fn external_names() {
        assert_eq!("outMenu".parse(), Ok(ClosePolicy::OutsideOnly));
        assert_eq!(ClosePolicy::AnyClick.to_string(), "any");
    }
}
