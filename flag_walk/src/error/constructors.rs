//! Constructors for `FlagError`.

use super::FlagError;

impl FlagError {
    /// Construct a duplicate-name error.
    ///
    /// # Examples
    ///
    /// ```
    /// use flag_walk::FlagError;
    /// let err = FlagError::duplicate("verbose");
    /// assert_eq!(err.to_string(), "flag '--verbose' is already registered");
    /// ```
    #[must_use]
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::Duplicate { name: name.into() }
    }

    /// Construct a short-flag clash between `name` and `existing`.
    #[must_use]
    pub fn short_conflict(
        short: char,
        name: impl Into<String>,
        existing: impl Into<String>,
    ) -> Self {
        Self::ShortConflict {
            short,
            name: name.into(),
            existing: existing.into(),
        }
    }

    /// Construct an invalid-name error.
    #[must_use]
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Construct a hook-defined failure.
    ///
    /// Hooks use this when they cannot describe their flags, for example when
    /// a default cannot be rendered.
    ///
    /// ```
    /// use flag_walk::FlagError;
    /// let err = FlagError::contribution("missing default for 'port'");
    /// assert!(matches!(err, FlagError::Contribution { .. }));
    /// ```
    #[must_use]
    pub fn contribution(message: impl Into<String>) -> Self {
        Self::Contribution {
            message: message.into(),
        }
    }

    /// Returns `true` when the error reports an already-registered name.
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}
