//! `clap` backend for [`FlagSet`].
//!
//! Each accepted flag becomes an [`Arg`] appended to the wrapped
//! [`Command`], so help output lists flags in the order the walk registered
//! them.

use clap::{Arg, ArgAction, Command, value_parser};

use crate::{Flag, FlagError, FlagResult, FlagSet, FlagValue, Target, add_flags};

/// How [`ClapFlagSet`] treats a long name that is already registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Report [`FlagError::Duplicate`]; the hook stops at that flag.
    #[default]
    Reject,
    /// Log the duplicate at debug level and report success, so the hook
    /// carries on registering its remaining flags.
    Skip,
}

/// A [`FlagSet`] writing into a [`clap::Command`].
///
/// # Examples
///
/// ```
/// use clap::Command;
/// use flag_walk::{ClapFlagSet, DuplicatePolicy, FlagSet};
///
/// let mut flags = ClapFlagSet::new(Command::new("demo"))
///     .with_duplicate_policy(DuplicatePolicy::Skip);
/// flags.bool_flag("verbose", Some('v'), false, "chatty output")?;
/// flags.bool_flag("verbose", None, false, "registered twice")?;
///
/// let matches = flags.into_command().try_get_matches_from(["demo", "-v"])?;
/// assert_eq!(matches.get_one::<bool>("verbose"), Some(&true));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct ClapFlagSet {
    command: Command,
    policy: DuplicatePolicy,
}

impl ClapFlagSet {
    /// Wraps `command`, rejecting duplicates.
    #[must_use]
    pub const fn new(command: Command) -> Self {
        Self {
            command,
            policy: DuplicatePolicy::Reject,
        }
    }

    /// Sets the duplicate policy.
    #[must_use]
    pub const fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The command built so far.
    #[must_use]
    pub const fn command(&self) -> &Command {
        &self.command
    }

    /// Hands the command back.
    #[must_use]
    pub fn into_command(self) -> Command {
        self.command
    }

    /// Long and short names clap adds on its own when the command is built.
    fn reserved(&self) -> Vec<(&'static str, char)> {
        let mut names = Vec::new();
        if !self.command.is_disable_help_flag_set() {
            names.push(("help", 'h'));
        }
        if self.command.get_version().is_some() && !self.command.is_disable_version_flag_set() {
            names.push(("version", 'V'));
        }
        names
    }

    fn short_owner(&self, short: char) -> Option<String> {
        self.command
            .get_arguments()
            .find(|arg| arg.get_short() == Some(short))
            .map(|arg| arg.get_id().as_str().to_owned())
            .or_else(|| {
                self.reserved()
                    .into_iter()
                    .find(|&(_, reserved)| reserved == short)
                    .map(|(name, _)| name.to_owned())
            })
    }
}

impl FlagSet for ClapFlagSet {
    fn add(&mut self, flag: Flag) -> FlagResult {
        flag.validate()?;
        if self.contains(flag.name()) {
            return match self.policy {
                DuplicatePolicy::Reject => Err(FlagError::duplicate(flag.name())),
                DuplicatePolicy::Skip => {
                    tracing::debug!(flag = flag.name(), "flag already exists");
                    Ok(())
                }
            };
        }
        if let Some(short) = flag.short_name()
            && let Some(existing) = self.short_owner(short)
        {
            return Err(FlagError::short_conflict(short, flag.name(), existing));
        }
        self.command = std::mem::take(&mut self.command).arg(to_arg(&flag));
        Ok(())
    }

    fn contains(&self, name: &str) -> bool {
        self.command
            .get_arguments()
            .any(|arg| arg.get_id() == name || arg.get_long() == Some(name))
            || self.reserved().iter().any(|&(reserved, _)| reserved == name)
    }
}

fn to_arg(flag: &Flag) -> Arg {
    let mut arg = Arg::new(flag.name().to_owned())
        .long(flag.name().to_owned())
        .help(flag.usage_text().to_owned())
        .hide(flag.is_hidden());
    if let Some(short) = flag.short_name() {
        arg = arg.short(short);
    }
    let shaped = match flag.default_value() {
        FlagValue::Bool(_) => arg
            .action(ArgAction::Set)
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
            .value_parser(value_parser!(bool)),
        FlagValue::Count(_) => arg.action(ArgAction::Count),
        FlagValue::Text(_) => arg.action(ArgAction::Set),
        FlagValue::Int(_) => arg.action(ArgAction::Set).value_parser(value_parser!(i64)),
        FlagValue::Uint(_) => arg.action(ArgAction::Set).value_parser(value_parser!(u64)),
        FlagValue::Float(_) => arg.action(ArgAction::Set).value_parser(value_parser!(f64)),
        FlagValue::List(_) => arg.action(ArgAction::Append),
    };
    shaped.default_values(flag.default_value().render())
}

/// Walks `roots` and returns `command` with every contributed flag added.
///
/// Duplicates are rejected, so a hook stops at its first clashing flag and
/// the clash is logged at debug level. Wrap the command in a
/// [`ClapFlagSet`] yourself to pick another [`DuplicatePolicy`].
///
/// # Panics
///
/// Panics when a [`Target::Detached`] is met; see [`add_flags`].
pub fn add_command_flags<'a, I>(command: Command, roots: I) -> Command
where
    I: IntoIterator<Item = Target<'a>>,
{
    let mut flags = ClapFlagSet::new(command);
    add_flags(&mut flags, roots);
    flags.into_command()
}
