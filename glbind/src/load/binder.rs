use crate::context::{Context, Proc};
use crate::registry::{Command, Gate, FEATURES};
use std::ffi::{c_void, CStr};
use tracing::trace;

/// Resolves one entry point. Absent gates leave the slot untouched; present
/// ones store whatever the lookup returned, null included.
pub fn bind<F>(context: &mut Context, command: Command, present: bool, lookup: &mut F)
where
    F: FnMut(&CStr) -> *const c_void,
{
    if !present {
        return;
    }

    let proc = Proc::new(lookup(command.name()));
    if proc.is_none() {
        trace!("{command} is advertised but could not be resolved");
    }
    context.set(command, proc);
}

/// Binds the entry points of every table entry `select` accepts, gated by
/// `is_present`.
pub fn bind_features<F>(
    context: &mut Context,
    select: impl Fn(Gate) -> bool,
    lookup: &mut F,
) where
    F: FnMut(&CStr) -> *const c_void,
{
    for (gate, commands) in FEATURES.iter().filter(|(gate, _)| select(*gate)) {
        let present = is_present(context, *gate);
        for command in commands.iter() {
            bind(context, *command, present, lookup);
        }
    }
}

#[inline]
pub fn is_present(context: &Context, gate: Gate) -> bool {
    match gate {
        Gate::Version(version) => context.has_version(version),
        Gate::Extension(extension) => context.has_extension(extension),
    }
}
