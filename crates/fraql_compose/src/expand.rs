//! Fixed-point fragment expansion.

use crate::extract;
use crate::registry::FragmentRegistry;
use rustc_hash::FxHashSet;

/// Inlines every registered fragment transitively referenced by `query`.
///
/// The document text is rescanned for spread markers (`...Name`) after each
/// round of appends, so fragments that themselves spread other fragments are
/// picked up on the next pass. Names absent from the registry are ignored;
/// they are assumed to resolve server-side.
///
/// The result is a fixed point: feeding an expanded document back in returns
/// it unchanged, and each registered fragment appears at most once no matter
/// how many spread sites reference it. Cycles among fragment definitions
/// expand each member once and then stop.
#[must_use]
pub fn expand(query: &str, registry: &FragmentRegistry) -> String {
    let mut text = query.to_string();
    let mut visited: FxHashSet<String> = FxHashSet::default();

    // Each round appends at least one fragment not yet visited, so the loop
    // runs at most `registry.len() + 1` times.
    loop {
        let referenced: Vec<String> = extract::spread_names(&text)
            .into_iter()
            .map(str::to_string)
            .collect();

        let fresh: Vec<&String> = referenced
            .iter()
            .filter(|name| !visited.contains(*name) && registry.contains(name))
            .collect();

        if fresh.is_empty() {
            return text;
        }

        for name in fresh {
            if let Some(source) = registry.get(name) {
                text.push('\n');
                text.push_str(source);
            }
        }

        // Every name scanned this round is settled, including the ones the
        // registry does not know about.
        visited.extend(referenced);
    }
}
