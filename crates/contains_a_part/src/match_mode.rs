// crates/contains_a_part/src/match_mode.rs

/// Policy for deciding whether one string contains another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Byte-for-byte match.
    Exact,
    /// Case-insensitive over ASCII letters only; non-ASCII bytes must match
    /// exactly. Never allocates.
    AsciiIgnoreCase,
    /// Unicode-aware case-insensitive match: both sides are folded with
    /// `char::to_lowercase`. Purely ASCII inputs take an allocation-free
    /// fast path.
    IgnoreCase,
}

impl MatchMode {
    /// Returns true if `haystack` contains `part` under this policy.
    /// An empty `part` is found in every haystack.
    pub fn contains(self, haystack: &str, part: &str) -> bool {
        match self {
            MatchMode::Exact => haystack.contains(part),
            MatchMode::AsciiIgnoreCase => contains_ignore_ascii_case(haystack, part),
            MatchMode::IgnoreCase => contains_ignore_case(haystack, part),
        }
    }
}

// Window scan over raw bytes. ASCII letters fold; everything else compares
// verbatim, and a window that would split a multi-byte character can never
// equal a valid UTF-8 needle. `windows` panics on a zero-length window, so
// the empty needle is answered up front.
fn contains_ignore_ascii_case(haystack: &str, part: &str) -> bool {
    if part.is_empty() {
        return true;
    }
    let needle = part.as_bytes();
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}

fn contains_ignore_case(haystack: &str, part: &str) -> bool {
    // ASCII folding and Unicode folding agree on ASCII input.
    if haystack.is_ascii() && part.is_ascii() {
        return contains_ignore_ascii_case(haystack, part);
    }
    haystack.to_lowercase().contains(&part.to_lowercase())
}
