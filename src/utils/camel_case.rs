//! Column label derivation from internal camelCase keys.

/// Converts a camelCase key into a human friendly label.
///
/// A word break is inserted before every uppercase letter that follows a
/// lowercase letter or digit; the result is lowercased and its first letter
/// capitalized.
///
/// ```ignore
/// assert_eq!(camel_case_to_human_friendly("userAgent"), "User agent");
/// assert_eq!(camel_case_to_human_friendly("type"), "Type");
/// ```
pub fn camel_case_to_human_friendly(key: &str) -> String {
    let mut words = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;

    for c in key.chars() {
        if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            words.push(' ');
        }
        words.extend(c.to_lowercase());
        prev = Some(c);
    }

    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
