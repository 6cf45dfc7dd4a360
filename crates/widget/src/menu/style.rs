//! Change the appearance of a menu.
use crate::Theme;
use crate::core::{Background, Border, Color, Shadow, Vector};

/// The possible status of the trigger of a [`Menu`](super::Menu).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The trigger can be interacted with.
    Active,
    /// The trigger is being hovered.
    Hovered,
    /// The menu is open.
    Opened,
    /// The trigger ignores activation.
    Disabled,
}

/// The appearance of a menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// The [`Background`] of the trigger.
    pub trigger_background: Option<Background>,
    /// The text [`Color`] of the trigger.
    pub trigger_text_color: Color,
    /// The [`Border`] of the trigger.
    pub trigger_border: Border,
    /// The background [`Color`] of the panel.
    pub panel_background: Color,
    /// The [`Border`] of the panel.
    pub panel_border: Border,
    /// The [`Shadow`] of the panel.
    pub panel_shadow: Shadow,
    /// The text [`Color`] of the items.
    pub item_text_color: Color,
    /// The background [`Color`] of a hovered or focused item.
    pub item_highlight: Color,
    /// The [`Border`] of a hovered or focused item.
    pub item_border: Border,
}

/// The theme catalog of a [`Menu`](super::Menu).
pub trait Catalog {
    /// The item class of the [`Catalog`].
    type Class<'a>;

    /// The default class produced by the [`Catalog`].
    fn default<'a>() -> Self::Class<'a>;

    /// The [`Style`] of a class with the given status.
    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style;
}

/// A styling function for a [`Menu`](super::Menu).
///
/// This is just a boxed closure: `Fn(&Theme, Status) -> Style`.
pub type StyleFn<'a, Theme> = Box<dyn Fn(&Theme, Status) -> Style + 'a>;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> StyleFn<'a, Self> {
        Box::new(default)
    }

    fn style(&self, class: &StyleFn<'_, Self>, status: Status) -> Style {
        class(self, status)
    }
}

/// The default style of a menu.
pub fn default(theme: &Theme, status: Status) -> Style {
    let palette = theme.extended_palette();

    let active = Style {
        trigger_background: Some(palette.background.base.color.into()),
        trigger_text_color: palette.background.base.text,
        trigger_border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 4.0.into(),
        },
        panel_background: palette.background.base.color,
        panel_border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 6.0.into(),
        },
        panel_shadow: Shadow {
            color: Color::BLACK.scale_alpha(0.2),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        item_text_color: palette.background.base.text,
        item_highlight: palette.primary.weak.color,
        item_border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
    };

    match status {
        Status::Active => active,
        Status::Hovered => Style {
            trigger_background: Some(palette.background.weak.color.into()),
            ..active
        },
        Status::Opened => Style {
            trigger_border: Border {
                color: palette.primary.strong.color,
                ..active.trigger_border
            },
            ..active
        },
        Status::Disabled => Style {
            trigger_background: Some(palette.background.weak.color.into()),
            trigger_text_color: active.trigger_text_color.scale_alpha(0.5),
            ..active
        },
    }
}

/// A menu without trigger decorations, showing only its content.
pub fn plain(theme: &Theme, status: Status) -> Style {
    let style = default(theme, status);

    Style {
        trigger_background: None,
        trigger_border: Border::default(),
        ..style
    }
}
