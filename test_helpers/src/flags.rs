//! A scripted [`FlagSet`] for walker tests.

use std::collections::HashMap;

use flag_walk::{Flag, FlagError, FlagList, FlagResult, FlagSet};

/// Records every registration attempt, accepted or not.
///
/// Accepted flags land in an inner [`FlagList`], so duplicates and short
/// clashes behave exactly like the real registry. Names scripted with
/// [`RecordingFlagSet::fail_on`] are refused with the given error before the
/// registry sees them.
///
/// # Examples
///
/// ```
/// use flag_walk::{FlagError, FlagSet};
/// use flag_walk_test_helpers::RecordingFlagSet;
///
/// let mut flags = RecordingFlagSet::new().fail_on("port", FlagError::contribution("busy"));
/// assert!(flags.uint_flag("port", None, 80, "").is_err());
/// assert!(flags.bool_flag("debug", None, false, "").is_ok());
/// assert_eq!(flags.attempts(), ["port", "debug"]);
/// assert_eq!(flags.accepted().names(), vec!["debug"]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingFlagSet {
    accepted: FlagList,
    attempts: Vec<String>,
    failures: HashMap<String, FlagError>,
}

impl RecordingFlagSet {
    /// Creates an empty recorder with no scripted failures.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuses any registration of `name` with `error`.
    #[must_use]
    pub fn fail_on(mut self, name: impl Into<String>, error: FlagError) -> Self {
        self.failures.insert(name.into(), error);
        self
    }

    /// Long names of every attempted registration, in call order.
    #[must_use]
    pub fn attempts(&self) -> &[String] {
        &self.attempts
    }

    /// Flags that were accepted.
    #[must_use]
    pub const fn accepted(&self) -> &FlagList {
        &self.accepted
    }
}

impl FlagSet for RecordingFlagSet {
    fn add(&mut self, flag: Flag) -> FlagResult {
        self.attempts.push(flag.name().to_owned());
        if let Some(error) = self.failures.get(flag.name()) {
            return Err(error.clone());
        }
        self.accepted.add(flag)
    }

    fn contains(&self, name: &str) -> bool {
        self.accepted.contains(name)
    }
}
