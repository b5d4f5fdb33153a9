//! Error types produced while registering flags.

mod constructors;
mod types;

pub use types::{FlagError, FlagResult};

#[cfg(test)]
mod tests;
