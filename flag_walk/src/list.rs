//! Ordered in-memory flag registry.

use crate::{Flag, FlagError, FlagResult, FlagSet};

/// A [`FlagSet`] that records flags in registration order.
///
/// Useful for rendering flag listings, for checking what a configuration
/// graph contributes, and as a backend-neutral target in tests.
///
/// # Examples
///
/// ```
/// use flag_walk::{FlagList, FlagSet};
///
/// let mut flags = FlagList::new();
/// flags.bool_flag("verbose", Some('v'), false, "chatty output")?;
/// assert!(flags.contains("verbose"));
/// assert!(flags.bool_flag("verbose", None, true, "again").is_err());
/// # Ok::<(), flag_walk::FlagError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlagList {
    flags: Vec<Flag>,
}

impl FlagList {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self { flags: Vec::new() }
    }

    /// Number of registered flags.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns `true` when nothing has been registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Iterates flags in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Flag> {
        self.flags.iter()
    }

    /// Long names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.flags.iter().map(Flag::name).collect()
    }

    /// Looks a flag up by long name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Flag> {
        self.flags.iter().find(|flag| flag.name() == name)
    }

    fn short_owner(&self, short: char) -> Option<&Flag> {
        self.flags
            .iter()
            .find(|flag| flag.short_name() == Some(short))
    }
}

impl FlagSet for FlagList {
    fn add(&mut self, flag: Flag) -> FlagResult {
        flag.validate()?;
        if self.contains(flag.name()) {
            return Err(FlagError::duplicate(flag.name()));
        }
        if let Some(short) = flag.short_name()
            && let Some(existing) = self.short_owner(short)
        {
            return Err(FlagError::short_conflict(short, flag.name(), existing.name()));
        }
        self.flags.push(flag);
        Ok(())
    }

    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl<'a> IntoIterator for &'a FlagList {
    type Item = &'a Flag;
    type IntoIter = std::slice::Iter<'a, Flag>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::FlagList;
    use crate::{FlagError, FlagSet, FlagValue};

    #[fixture]
    fn populated() -> FlagList {
        let mut flags = FlagList::new();
        flags
            .string_flag("config", Some('c'), "app.toml", "config file")
            .and_then(|()| flags.count_flag("verbose", Some('v'), 0, "verbosity"))
            .unwrap_or_else(|err| panic!("seed flags: {err}"));
        flags
    }

    #[rstest]
    fn keeps_registration_order(populated: FlagList) {
        assert_eq!(populated.names(), vec!["config", "verbose"]);
        assert_eq!(populated.len(), 2);
    }

    #[rstest]
    fn rejects_duplicate_long_names(mut populated: FlagList) {
        let result = populated.bool_flag("config", None, false, "");
        assert_eq!(result, Err(FlagError::duplicate("config")));
        assert_eq!(populated.len(), 2);
    }

    #[rstest]
    fn rejects_clashing_short_names(mut populated: FlagList) {
        let result = populated.bool_flag("colour", Some('c'), false, "");
        assert_eq!(
            result,
            Err(FlagError::short_conflict('c', "colour", "config"))
        );
    }

    #[rstest]
    fn rejects_invalid_names() {
        let mut flags = FlagList::new();
        let result = flags.int_flag("", None, 1, "");
        assert!(matches!(result, Err(FlagError::InvalidName { .. })));
        assert!(flags.is_empty());
    }

    #[rstest]
    fn records_defaults(populated: FlagList) {
        let config = populated.get("config").map(|flag| flag.default_value().clone());
        assert_eq!(config, Some(FlagValue::Text("app.toml".to_owned())));
    }
}
