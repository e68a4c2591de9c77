//! Markup neutralization for user-supplied text.
//!
//! The contact form forwards free text to an email relay whose template
//! may render fields as HTML. Every field passes through [`neutralize`]
//! before it leaves the page, so user-typed markup arrives inert: the
//! five characters with structural meaning in an HTML context become
//! entities, everything else (including non-ASCII) passes through as-is.
//!
//! The transform is not idempotent: `&lt;` becomes `&amp;lt;` on a
//! second pass. The submission flow applies it exactly once per field
//! per attempt.

/// Replace `&`, `<`, `>`, `"` and `'` with their HTML entities.
pub fn neutralize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

// =========================================================================
// Tests
// =========================================================================
