//! Canonical value normalization.
//!
//! Every comparison and display site goes through this single function so that a
//! future richer value representation only requires changing one place. The
//! token rule: a string of the form `<label>: <token>` yields the trailing token
//! (first colon followed by whitespace wins); anything else yields its trimmed
//! string form. Case-sensitive, no type coercion.

use serde_json::Value;

/// Extract the canonical comparable token from a raw string.
///
/// Known limitation, preserved intentionally: the first colon-plus-whitespace
/// separator wins, so a message whose token itself contains one mis-splits.
#[must_use]
pub fn normalize_str(s: &str) -> String {
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b':' {
            if let Some(rest) = s.get(i + 1..) {
                if rest.starts_with(|c: char| c.is_whitespace()) {
                    return rest.trim().to_string();
                }
            }
        }
    }
    s.trim().to_string()
}

/// Normalize any legal report field value to its canonical token. Total over
/// JSON scalars: booleans render `true`/`false`, numbers use their display
/// form, null renders `null`, strings go through [`normalize_str`].
#[must_use]
pub fn normalize_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => normalize_str(s),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn labeled_string_yields_trailing_token() {
        assert_eq!(normalize_str("Status: PASS"), "PASS");
        assert_eq!(normalize_str("Virtual environment: found"), "found");
    }

    #[test]
    fn plain_values_are_trimmed_unchanged() {
        assert_eq!(normalize_str("WARN"), "WARN");
        assert_eq!(normalize_str("  FAIL  "), "FAIL");
    }

    #[test]
    fn colon_without_whitespace_is_not_a_separator() {
        assert_eq!(normalize_str("C:\\project"), "C:\\project");
    }

    #[test]
    fn first_separator_wins() {
        assert_eq!(normalize_str("Outer: inner: token"), "inner: token");
    }

    #[test]
    fn scalars_render_without_coercion() {
        assert_eq!(normalize_value(&json!(true)), "true");
        assert_eq!(normalize_value(&json!(false)), "false");
        assert_eq!(normalize_value(&json!(3)), "3");
        assert_eq!(normalize_value(&json!(null)), "null");
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert_ne!(normalize_str("pass"), normalize_str("PASS"));
    }
}
