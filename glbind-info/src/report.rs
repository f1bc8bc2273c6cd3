use glbind::registry::ALIAS_GROUPS;
use glbind::{parse_version, Command, Config, Extension, ExtensionQuery, GlLibrary, Version};
use std::fmt::Write;

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

pub fn version(version_string: &str) -> String {
    let version = parse_version(version_string);
    let mut out = String::new();
    let _ = writeln!(out, "GL_VERSION {version_string:?}");
    let _ = writeln!(out, "version {version} (packed {})", version.packed());
    for tier in Version::ALL {
        let _ = writeln!(out, "{:<16} {}", tier.name(), yes_no(version.supports(*tier)));
    }
    out
}

pub fn extensions(extensions: &str, names: &[String]) -> String {
    let query = ExtensionQuery::from_string(extensions);
    let mut out = String::new();
    if names.is_empty() {
        let found: Vec<&str> = Extension::ALL
            .iter()
            .map(|extension| extension.name())
            .filter(|name| query.has(name))
            .collect();
        for name in &found {
            let _ = writeln!(out, "{name}");
        }
        let _ = writeln!(
            out,
            "{} of {} known extensions",
            found.len(),
            Extension::COUNT
        );
    } else {
        for name in names {
            let known = if Extension::from_name(name).is_some() {
                ""
            } else {
                " (not in registry)"
            };
            let _ = writeln!(out, "{name} {}{known}", yes_no(query.has(name)));
        }
    }
    out
}

pub fn registry(aliases: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} core tiers", Version::COUNT);
    let _ = writeln!(out, "{} extensions", Extension::COUNT);
    let _ = writeln!(out, "{} commands", Command::COUNT);
    let _ = writeln!(out, "{} alias groups", ALIAS_GROUPS.len());
    if aliases {
        for group in ALIAS_GROUPS {
            let names: Vec<&str> = group.iter().map(|command| command.as_str()).collect();
            let _ = writeln!(out, "{}", names.join(" = "));
        }
    }
    out
}

pub fn library(config: &Config) -> glbind::Result<String> {
    let library = GlLibrary::open_with(&config.library)?;
    let resolved = Command::ALL
        .iter()
        .filter(|command| !library.proc_address(command.name()).is_null())
        .count();

    let mut out = String::new();
    let _ = writeln!(out, "library {}", library.path());
    let _ = writeln!(
        out,
        "get-proc-address {}",
        yes_no(library.has_get_proc_address())
    );
    let _ = writeln!(out, "{resolved} of {} commands resolve", Command::COUNT);
    Ok(out)
}
