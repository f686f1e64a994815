// crates/contains_a_part/src/lib.rs

mod match_mode;

pub use match_mode::MatchMode;

/// Scans `parts` in index order and reports whether any present element
/// contains `part` under the given mode.
///
/// Absent (`None`) elements never match and are not an error; an empty
/// slice yields `false`. The scan stops at the first hit.
pub fn contains_a_part<S: AsRef<str>>(parts: &[Option<S>], part: &str, mode: MatchMode) -> bool {
    parts
        .iter()
        .flatten()
        .any(|element| mode.contains(element.as_ref(), part))
}
