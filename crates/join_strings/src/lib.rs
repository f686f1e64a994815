// crates/join_strings/src/lib.rs

use pooled_string_builder::PooledStringBuilder;

/// Joins the elements of `parts` with `separator`, optionally following each
/// separator with a single space.
///
/// Absent (`None`) elements contribute no text, but they still occupy their
/// position: a separator (plus the optional space) is written before every
/// element at index 1 and later, present or not. Only the element at index 0
/// never gets one. `[Some("a"), None, Some("b")]` with `','` therefore joins
/// to `"a,,b"`, not `"a,b"`.
///
/// An empty slice joins to the empty string.
///
/// # Arguments
///
/// * `parts` - The elements to join; `None` entries contribute no text.
/// * `separator` - The character written between consecutive positions.
/// * `include_space` - Whether each separator is followed by one space.
pub fn join_strings<S: AsRef<str>>(
    parts: &[Option<S>],
    separator: char,
    include_space: bool,
) -> String {
    if parts.is_empty() {
        return String::new();
    }

    let capacity = (parts.len() * 4).clamp(128, 4096);
    let mut builder = PooledStringBuilder::with_capacity(capacity);

    if let Some(first) = &parts[0] {
        builder.push_str(first.as_ref());
    }

    for part in &parts[1..] {
        builder.push(separator);
        if include_space {
            builder.push(' ');
        }
        if let Some(part) = part {
            builder.push_str(part.as_ref());
        }
    }

    builder.finish()
}
