//! Case Conversion
//!
//! Bridges script-style camelCase keys and CSS/dataset kebab-case
//! names. Leading and trailing hyphen runs are stripped first, so
//! vendor-prefixed input like "-webkit-transform" converts to
//! "webkitTransform" (and does not round-trip back to its prefixed
//! form).

/// Convert kebab-case to camelCase
///
/// Each `-x` sequence (for word characters `x`) becomes uppercase `x`;
/// a hyphen not followed by a word character is kept literally.
pub fn to_camel(key: &str) -> String {
    let key = key.trim_matches('-');
    let mut result = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            match chars.peek() {
                Some(&next) if next.is_ascii_alphanumeric() || next == '_' => {
                    result.push(next.to_ascii_uppercase());
                    chars.next();
                }
                _ => result.push('-'),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Convert camelCase to kebab-case
///
/// Every ASCII uppercase letter becomes a hyphen plus its lowercase
/// form.
pub fn to_kebab(key: &str) -> String {
    let key = key.trim_matches('-');
    let mut result = String::with_capacity(key.len() + 4);

    for c in key.chars() {
        if c.is_ascii_uppercase() {
            result.push('-');
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}
