//! Static description of the OpenGL API surface the loader knows about:
//! core tiers, vendor extensions, entry points, the tables tying entry points
//! to the tier or extension that introduces them, and alias groups.

pub mod alias;
pub mod command;
pub mod extension;
pub mod features;
pub mod version;

pub use alias::{aliases_of, ALIAS_GROUPS};
pub use command::Command;
pub use extension::Extension;
pub use features::FEATURES;
pub use version::Version;

/// What has to be present for an entry point to be bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    Version(Version),
    Extension(Extension),
}

impl Gate {
    pub fn name(self) -> &'static str {
        match self {
            Gate::Version(version) => version.name(),
            Gate::Extension(extension) => extension.name(),
        }
    }
}

/// Entry points introduced by `gate`, empty when it introduces none.
pub fn commands_of(gate: Gate) -> &'static [Command] {
    FEATURES
        .iter()
        .find(|(candidate, _)| *candidate == gate)
        .map(|(_, commands)| *commands)
        .unwrap_or(&[])
}

/// Every gate under which `command` is bound.
pub fn gates_of(command: Command) -> impl Iterator<Item = Gate> {
    FEATURES
        .iter()
        .filter(move |(_, commands)| commands.contains(&command))
        .map(|(gate, _)| *gate)
}
