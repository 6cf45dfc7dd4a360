//! Build menus from loosely typed options.
//!
//! [`Options`] mirrors the attribute names a menu is usually described with
//! (`direction`, `closeAfter`, `statePriority`, ...) and validates them into
//! a [`Config`] and an [`Ownership`].
use crate::config::Config;
use crate::ownership::{Ownership, StatePriority};
use crate::{Error, Result};

/// The loosely typed options of a menu.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Options {
    /// The behavior of the menu.
    pub config: Config,
    /// Who owns the open state.
    pub state_priority: StatePriority,
    /// The current (outer) or initial (inner) open state.
    pub state: Option<bool>,
    /// The identifier of the panel.
    pub id: Option<String>,
}

impl Options {
    /// Sets the option with the given attribute name from its textual value.
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "direction" => self.config.direction = value.parse()?,
            "align" => self.config.align = value.parse()?,
            "animation" => self.config.animation = value.parse()?,
            "closeAfter" => self.config.close_policy = value.parse()?,
            "statePriority" => self.state_priority = value.parse()?,
            "gap" => {
                self.config.gap = value
                    .trim_end_matches("px")
                    .parse()
                    .map_err(|_| Error::unknown("gap", value))?;
            }
            "disabled" => {
                self.config.disabled = value.parse().map_err(|_| Error::unknown("disabled", value))?;
            }
            "state" => {
                self.state = Some(value.parse().map_err(|_| Error::unknown("state", value))?);
            }
            "id" => self.id = Some(value.to_owned()),
            _ => return Err(Error::unknown("option", name)),
        }

        Ok(())
    }

    /// Validates the [`Options`] into a [`Config`] and an [`Ownership`].
    ///
    /// `has_setter` tells whether the caller supplied a state setter.
    /// Outer ownership requires both a state value and a setter.
    pub fn resolve(&self, has_setter: bool) -> Result<(Config, Ownership)> {
        let ownership = match self.state_priority {
            StatePriority::Inner => Ownership::Inner {
                initial: self.state.unwrap_or(false),
            },
            StatePriority::Outer => {
                let state = self.state.ok_or(Error::MissingState)?;

                if !has_setter {
                    return Err(Error::MissingSetter);
                }

                Ownership::Outer { state }
            }
        };

        Ok((self.config, ownership))
    }
}
