//! The dropdown menu widgets of icy_dropdown.
//!
//! A [`Menu`] is a trigger that reveals a [`MenuList`] of [`MenuItem`]s in
//! a panel drawn above the rest of the interface. The panel is placed next
//! to the trigger, can slide in and out, and closes on clicks according to
//! its [`ClosePolicy`](menu::ClosePolicy).
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use iced_widget::core;
pub use iced_widget::{Renderer, Theme};

pub mod menu;

mod helpers;

pub use helpers::*;
pub use menu::{Menu, MenuItem, MenuList};

/// A generic widget, with the default theme and renderer of this crate.
pub type Element<'a, Message, Theme = crate::Theme, Renderer = crate::Renderer> =
    core::Element<'a, Message, Theme, Renderer>;
