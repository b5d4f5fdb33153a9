//! Example CLI building its flags from nested configuration structs.
//!
//! `ServerConfig` embeds `TlsConfig` and `LogConfig`; each owns its flags and
//! the walker collects them into one `clap::Command`. Run with `--help` to
//! see the registration order, or pass flags to see them parsed.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Command;
use flag_walk::{AddFlags, FlagNode, FlagResult, FlagSet, Target, add_command_flags};

/// Transport security settings.
#[derive(FlagNode, Default)]
#[flag_walk(add_flags)]
struct TlsConfig {
    enabled: bool,
    cert: PathBuf,
}

impl AddFlags for TlsConfig {
    fn add_flags(&mut self, flags: &mut dyn FlagSet) -> FlagResult {
        flags.bool_flag("tls", None, self.enabled, "serve over TLS")?;
        flags.string_flag(
            "tls-cert",
            None,
            &self.cert.to_string_lossy(),
            "certificate chain in PEM format",
        )
    }
}

/// Logging settings, shared with other binaries.
#[derive(FlagNode)]
#[flag_walk(add_flags)]
struct LogConfig {
    level: String,
    verbosity: u8,
}

impl AddFlags for LogConfig {
    fn add_flags(&mut self, flags: &mut dyn FlagSet) -> FlagResult {
        flags.string_flag("log-level", None, &self.level, "log filter directive")?;
        flags.count_flag("verbose", Some('v'), self.verbosity, "raise verbosity")
    }
}

/// Top-level configuration.
#[derive(FlagNode)]
#[flag_walk(add_flags)]
struct ServerConfig {
    port: u64,
    tls: TlsConfig,
    log: LogConfig,
}

impl AddFlags for ServerConfig {
    fn add_flags(&mut self, flags: &mut dyn FlagSet) -> FlagResult {
        flags.uint_flag("port", Some('p'), self.port, "port to listen on")
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ServerConfig {
        port: 8443,
        tls: TlsConfig::default(),
        log: LogConfig {
            level: "info".to_owned(),
            verbosity: 0,
        },
    };
    let command = add_command_flags(
        Command::new("server_ctl").about("Serve requests"),
        [Target::from(&mut config)],
    );
    let matches = command.get_matches();

    let mut stdout = io::stdout().lock();
    for id in matches.ids() {
        writeln!(stdout, "{id}: {:?}", matches.value_source(id.as_str()))?;
    }
    Ok(())
}
