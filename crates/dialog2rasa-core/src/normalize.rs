/// Convert a CamelCase or space-separated identifier to snake_case.
///
/// An underscore goes in front of every ASCII uppercase letter except the
/// first character, spaces become underscores, runs of underscores collapse
/// to one and the result is lowercased. Applying it twice is a no-op.
pub fn normalize(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len() + 4);
    for (i, c) in identifier.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            push_separator(&mut out);
        }
        if c == ' ' || c == '_' {
            push_separator(&mut out);
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

fn push_separator(out: &mut String) {
    if !out.ends_with('_') {
        out.push('_');
    }
}
