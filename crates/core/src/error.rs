//! Report invalid menu configurations.

/// A convenient [`Result`](std::result::Result) alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error produced while resolving the options of a menu.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The menu is owned by the caller, but no state value was given.
    #[error("outer state priority requires a state value")]
    MissingState,

    /// The menu is owned by the caller, but no state setter was given.
    #[error("outer state priority requires a state setter")]
    MissingSetter,

    /// An option was given a value it does not understand.
    #[error("unknown {kind} {value:?}")]
    UnknownOption {
        /// The name of the option.
        kind: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl Error {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::UnknownOption {
            kind,
            value: value.to_owned(),
        }
    }
}
