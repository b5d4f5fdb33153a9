//! Register command-line flags by walking nested configuration structs.
//!
//! Configuration types implement [`FlagNode`] (normally through
//! `#[derive(FlagNode)]`) so the walker can reach their fields, and the ones
//! owning flags implement [`AddFlags`]. [`add_flags`] visits every root
//! depth-first, fires each node's own hook before its children, and keeps
//! going when a hook reports a clash. The derive lives in the companion
//! `flag_walk_macros` crate.
//!
//! ```
//! use clap::Command;
//! use flag_walk::{AddFlags, FlagNode, FlagResult, FlagSet, Target, add_command_flags};
//!
//! #[derive(FlagNode)]
//! #[flag_walk(add_flags)]
//! struct Logging {
//!     level: String,
//! }
//!
//! impl AddFlags for Logging {
//!     fn add_flags(&mut self, flags: &mut dyn FlagSet) -> FlagResult {
//!         flags.string_flag("log-level", None, &self.level, "log filter")
//!     }
//! }
//!
//! #[derive(FlagNode)]
//! struct AppConfig {
//!     logging: Logging,
//!     #[flag_walk(skip)]
//!     cache: std::cell::RefCell<Vec<u8>>,
//! }
//!
//! let mut config = AppConfig {
//!     logging: Logging { level: "info".to_owned() },
//!     cache: Default::default(),
//! };
//! let command = add_command_flags(Command::new("app"), [Target::from(&mut config)]);
//! let matches = command.try_get_matches_from(["app"])?;
//! assert_eq!(matches.get_one::<String>("log-level").map(String::as_str), Some("info"));
//! # Ok::<(), clap::Error>(())
//! ```

pub use flag_walk_macros::FlagNode;

mod command;
mod error;
mod flag;
mod list;
mod node;
mod walk;

pub use command::{ClapFlagSet, DuplicatePolicy, add_command_flags};
pub use error::{FlagError, FlagResult};
pub use flag::{Flag, FlagSet, FlagValue};
pub use list::FlagList;
pub use node::{AddFlags, FlagNode, Target};
pub use walk::add_flags;
