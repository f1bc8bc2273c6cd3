use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Default, Debug)]
#[clap(author, about, version)]
pub struct Cli {
    /// Log level (OFF, ERROR, WARN, INFO, DEBUG or TRACE), overrides the config.
    #[clap(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Writes the config to a given path or the default location.
    #[clap(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub write_config: Option<Option<PathBuf>>,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Parse a GL_VERSION string and list the core tiers it enables.
    Version {
        /// For example "4.6.0 NVIDIA 535.54" or "OpenGL ES 3.1 Mesa".
        version: String,
    },
    /// Probe a space separated GL_EXTENSIONS string.
    Extensions {
        extensions: String,
        /// Names to report on; every known extension found when omitted.
        names: Vec<String>,
    },
    /// Summarise the tiers, extensions and entry points the loader knows.
    Registry {
        /// Also print every alias group.
        #[clap(long)]
        aliases: bool,
    },
    /// Open the system GL library and report what resolves without a context.
    Library,
}

impl Default for Command {
    fn default() -> Self {
        Command::Registry { aliases: false }
    }
}
