//! A dropdown menu widget for [`iced`].
//!
//! A [`Menu`] is a trigger that reveals a [`MenuList`] of [`MenuItem`]s in
//! a panel next to it. The panel can open towards any [`Direction`], be
//! aligned with the trigger in different ways, and slide in and out.
//!
//! ```ignore
//! use iced::widget::text;
//! use icy_dropdown::{Align, Direction, Element, menu, menu_item, menu_list};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Copy,
//!     Paste,
//! }
//!
//! fn view<'a>() -> Element<'a, Message> {
//!     menu(
//!         text("Edit"),
//!         menu_list([
//!             menu_item(text("Copy")).on_press(Message::Copy),
//!             menu_item(text("Paste")).on_press(Message::Paste),
//!         ]),
//!     )
//!     .direction(Direction::Right)
//!     .align(Align::Start)
//!     .into()
//! }
//! ```
//!
//! By default a [`Menu`] owns whether it is open. Use [`Menu::outer`] to keep
//! that state in your application instead.
//!
//! [`iced`]: https://github.com/iced-rs/iced
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use icy_dropdown_core as core;
pub use icy_dropdown_widget as widget;

pub use icy_dropdown_core::{
    Align, Animation, ClosePolicy, Config, Direction, Error, Options, Ownership, StatePriority,
};
pub use icy_dropdown_widget::{
    Element, Menu, MenuItem, MenuList, menu, menu_item, menu_list,
};
