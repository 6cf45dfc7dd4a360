//! The renderer-independent model of a dropdown menu.
//!
//! A menu is a trigger that reveals a panel of items. This crate holds
//! everything about it that does not need a renderer: its [`Config`], the
//! negotiation of who owns its open state ([`Ownership`]), the state
//! machine deciding when it opens and closes ([`MenuState`]), the geometry
//! placing the panel next to the trigger ([`Placement`]), and the curves of
//! its [`Animation`].
//!
//! The widgets built on top of it live in `icy_dropdown_widget`.
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Implements `name`, [`Display`](std::fmt::Display), and
/// [`FromStr`](std::str::FromStr) for an option enum.
macro_rules! option_names {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl $ty {
            /// Returns the name of the option value.
            #[must_use]
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = crate::Error;

            fn from_str(value: &str) -> crate::Result<Self> {
                match value {
                    $($name $(| $alias)* => Ok(Self::$variant),)+
                    _ => Err(crate::Error::unknown($kind, value)),
                }
            }
        }
    };
}

pub mod alignment;
pub mod animation;
pub mod close;
pub mod config;
pub mod error;
pub mod options;
pub mod ownership;
pub mod placement;
pub mod state;


pub use alignment::{Align, Axis, Direction};
pub use animation::Animation;
pub use close::{ClickTarget, ClosePolicy};
pub use config::{Config, Warning};
pub use error::{Error, Result};
pub use options::Options;
pub use ownership::{Ownership, StatePriority};
pub use placement::Placement;
pub use state::{Markers, MenuState, TabIndex, Transition};

pub use iced_core::{Point, Rectangle, Size, Vector};
