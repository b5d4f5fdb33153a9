//! Primary error enum for flag registration.

use thiserror::Error;

/// Result alias returned by [`FlagSet`](crate::FlagSet) registrations and
/// [`AddFlags`](crate::AddFlags) hooks.
pub type FlagResult<T = ()> = Result<T, FlagError>;

/// Errors raised while registering a flag.
///
/// The walker never surfaces these to its caller: a hook that returns one is
/// reported as a debug diagnostic and the traversal carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FlagError {
    /// A flag with the same long name is already registered.
    #[error("flag '--{name}' is already registered")]
    Duplicate {
        /// Long name that collided.
        name: String,
    },

    /// The requested short name is already taken by another flag.
    #[error("short flag '-{short}' for '--{name}' is already used by '--{existing}'")]
    ShortConflict {
        /// Short character that collided.
        short: char,
        /// Long name of the flag being registered.
        name: String,
        /// Long name of the flag that already owns the short character.
        existing: String,
    },

    /// The flag name or short character is not usable on a command line.
    #[error("invalid flag name '{name}': {reason}")]
    InvalidName {
        /// Offending name as supplied.
        name: String,
        /// Why the name was rejected.
        reason: String,
    },

    /// A contribution hook failed for its own reasons.
    #[error("flag contribution failed: {message}")]
    Contribution {
        /// Human-readable explanation supplied by the hook.
        message: String,
    },
}
