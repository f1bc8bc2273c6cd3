use crate::context::Context;
use crate::registry::ALIAS_GROUPS;
use tracing::trace;

/// Fills every unresolved member of an alias group with the first resolved
/// member of that group. Resolved members are never overwritten.
///
/// Returns how many slots were filled.
pub fn resolve_aliases(context: &mut Context) -> usize {
    let mut filled = 0;
    for group in ALIAS_GROUPS {
        let Some((source, proc)) = group
            .iter()
            .find_map(|command| context.get(*command).map(|proc| (*command, proc)))
        else {
            continue;
        };

        for command in group.iter() {
            if !context.is_loaded(*command) {
                trace!("{command} resolved through {source}");
                context.set(*command, Some(proc));
                filled += 1;
            }
        }
    }
    filled
}
