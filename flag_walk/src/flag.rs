//! Flag descriptors and the registration capability hooks write to.
//!
//! A [`Flag`] describes one command-line option: its long name, an optional
//! short character, usage text, and the default taken from the destination
//! field at the moment the hook runs. [`FlagSet`] is the only surface the
//! walker and hooks need; parsing belongs to whichever backend implements it.

use std::fmt;

use crate::{FlagError, FlagResult};

/// Default value and value shape of a flag.
#[derive(Debug, Clone, PartialEq)]
pub enum FlagValue {
    /// Boolean switch. `--name` sets `true`; `--name=false` is accepted.
    Bool(bool),
    /// Repeatable switch counting its occurrences.
    Count(u8),
    /// Free-form string.
    Text(String),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Floating point number.
    Float(f64),
    /// Repeatable string option accumulating every occurrence.
    List(Vec<String>),
}

impl FlagValue {
    /// Short name of the value shape, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Count(_) => "count",
            Self::Text(_) => "string",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::List(_) => "string-list",
        }
    }

    /// Renders the default as command-line text, one entry per value.
    ///
    /// Lists render one entry per element; every other shape renders one.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        match self {
            Self::Bool(value) => vec![value.to_string()],
            Self::Count(value) => vec![value.to_string()],
            Self::Text(value) => vec![value.clone()],
            Self::Int(value) => vec![value.to_string()],
            Self::Uint(value) => vec![value.to_string()],
            Self::Float(value) => vec![value.to_string()],
            Self::List(values) => values.clone(),
        }
    }
}

/// Description of one command-line flag.
///
/// # Examples
///
/// ```
/// use flag_walk::{Flag, FlagValue};
///
/// let flag = Flag::new("port", FlagValue::Uint(8080))
///     .short('p')
///     .usage("port to listen on");
/// assert_eq!(flag.name(), "port");
/// assert_eq!(flag.short_name(), Some('p'));
/// assert!(flag.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Flag {
    name: String,
    short: Option<char>,
    usage: String,
    default: FlagValue,
    hidden: bool,
}

impl Flag {
    /// Creates a flag with the given long name and default.
    #[must_use]
    pub fn new(name: impl Into<String>, default: FlagValue) -> Self {
        Self {
            name: name.into(),
            short: None,
            usage: String::new(),
            default,
            hidden: false,
        }
    }

    /// Sets the short character.
    #[must_use]
    pub const fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Sets the usage text.
    #[must_use]
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Hides the flag from generated help.
    #[must_use]
    pub const fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Long name, without leading dashes.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short character, if any.
    #[must_use]
    pub const fn short_name(&self) -> Option<char> {
        self.short
    }

    /// Usage text.
    #[must_use]
    pub fn usage_text(&self) -> &str {
        &self.usage
    }

    /// Default value.
    #[must_use]
    pub const fn default_value(&self) -> &FlagValue {
        &self.default
    }

    /// Whether the flag is hidden from help.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Checks the names are usable on a command line.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::InvalidName`] when the long name is empty, starts
    /// with `-`, or contains whitespace or `=`, or when the short character is
    /// not ASCII alphanumeric.
    pub fn validate(&self) -> FlagResult {
        let reason = if self.name.is_empty() {
            Some("must not be empty")
        } else if self.name.starts_with('-') {
            Some("must not start with '-'")
        } else if self
            .name
            .chars()
            .any(|ch| ch.is_whitespace() || ch == '=')
        {
            Some("must not contain whitespace or '='")
        } else if self.short.is_some_and(|short| !short.is_ascii_alphanumeric()) {
            Some("short name must be an ASCII letter or digit")
        } else {
            None
        };
        reason.map_or(Ok(()), |why| Err(FlagError::invalid_name(&self.name, why)))
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(short) = self.short {
            write!(f, "-{short}, ")?;
        }
        write!(f, "--{} <{}>", self.name, self.default.kind())
    }
}

/// Registration capability shared across one walk.
///
/// Implementations decide what a duplicate means; the bundled ones report it
/// as [`FlagError::Duplicate`]. The typed helpers mirror the verbs common to
/// flag libraries and all funnel into [`FlagSet::add`].
pub trait FlagSet {
    /// Registers a flag.
    ///
    /// # Errors
    ///
    /// Returns a [`FlagError`] when the flag is invalid or clashes with one
    /// already registered.
    fn add(&mut self, flag: Flag) -> FlagResult;

    /// Returns `true` when a flag with this long name is registered.
    fn contains(&self, name: &str) -> bool;

    /// Registers a boolean switch.
    ///
    /// # Errors
    ///
    /// See [`FlagSet::add`].
    fn bool_flag(
        &mut self,
        name: &str,
        short: Option<char>,
        default: bool,
        usage: &str,
    ) -> FlagResult {
        self.add(with_short(Flag::new(name, FlagValue::Bool(default)), short).usage(usage))
    }

    /// Registers a counting switch.
    ///
    /// # Errors
    ///
    /// See [`FlagSet::add`].
    fn count_flag(
        &mut self,
        name: &str,
        short: Option<char>,
        default: u8,
        usage: &str,
    ) -> FlagResult {
        self.add(with_short(Flag::new(name, FlagValue::Count(default)), short).usage(usage))
    }

    /// Registers a string option.
    ///
    /// # Errors
    ///
    /// See [`FlagSet::add`].
    fn string_flag(
        &mut self,
        name: &str,
        short: Option<char>,
        default: &str,
        usage: &str,
    ) -> FlagResult {
        self.add(
            with_short(Flag::new(name, FlagValue::Text(default.to_owned())), short).usage(usage),
        )
    }

    /// Registers a signed integer option.
    ///
    /// # Errors
    ///
    /// See [`FlagSet::add`].
    fn int_flag(
        &mut self,
        name: &str,
        short: Option<char>,
        default: i64,
        usage: &str,
    ) -> FlagResult {
        self.add(with_short(Flag::new(name, FlagValue::Int(default)), short).usage(usage))
    }

    /// Registers an unsigned integer option.
    ///
    /// # Errors
    ///
    /// See [`FlagSet::add`].
    fn uint_flag(
        &mut self,
        name: &str,
        short: Option<char>,
        default: u64,
        usage: &str,
    ) -> FlagResult {
        self.add(with_short(Flag::new(name, FlagValue::Uint(default)), short).usage(usage))
    }

    /// Registers a floating point option.
    ///
    /// # Errors
    ///
    /// See [`FlagSet::add`].
    fn float_flag(
        &mut self,
        name: &str,
        short: Option<char>,
        default: f64,
        usage: &str,
    ) -> FlagResult {
        self.add(with_short(Flag::new(name, FlagValue::Float(default)), short).usage(usage))
    }

    /// Registers a repeatable string option.
    ///
    /// # Errors
    ///
    /// See [`FlagSet::add`].
    fn string_list_flag(
        &mut self,
        name: &str,
        short: Option<char>,
        default: &[String],
        usage: &str,
    ) -> FlagResult {
        self.add(
            with_short(Flag::new(name, FlagValue::List(default.to_vec())), short).usage(usage),
        )
    }
}

fn with_short(flag: Flag, short: Option<char>) -> Flag {
    match short {
        Some(ch) => flag.short(ch),
        None => flag,
    }
}
