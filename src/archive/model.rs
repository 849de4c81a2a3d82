use serde::Serialize;

/// One file listed under the fixed repository path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveEntry {
    /// File name as listed (e.g. `"deep_dive-01.html"`).
    pub name: String,
    /// Human-readable label derived from the name (e.g. `"Deep Dive 01"`).
    pub display_name: String,
    /// File size in bytes.
    pub size: u64,
}

/// Derive a display label: strip the extension, turn `_`/`-` into spaces,
/// and capitalize the first letter of every word.
#[must_use]
pub(crate) fn display_label(name: &str, extension: &str) -> String {
    let stem = name.strip_suffix(extension).unwrap_or(name);
    let spaced: String = stem
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect();

    let mut out = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for c in spaced.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c == ' ';
    }
    out
}
