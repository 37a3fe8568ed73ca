use serde_json::Value;

/// Characters a barcode scanner smuggles into otherwise clean identifiers:
/// C0/C1 controls, the BOM, zero-width space/joiners and the word joiner.
fn is_invisible(c: char) -> bool {
    c.is_control() || matches!(c, '\u{FEFF}' | '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}')
}

/// Canonicalize a raw scanned or typed identifier. Invisible characters are
/// stripped before anything else, so control noise inside a value (a stray
/// tab or newline injected mid-scan) vanishes rather than splitting the
/// identifier; the whitespace that remains collapses to single ASCII spaces
/// with nothing leading or trailing. Returns the empty string for input that
/// sanitizes to nothing; callers must treat that as invalid, never as a
/// valid "empty identifier".
pub fn sanitize_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for c in raw.chars() {
        if is_invisible(c) {
            // includes tab/newline/CR: stripped outright, never a separator
        } else if c.is_whitespace() {
            pending_space = true;
        } else {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        }
    }
    out
}

/// Scanners and manual entry can hand us numbers or other JSON scalars where
/// a string was expected; coerce first, then sanitize. Non-scalars sanitize
/// to the empty string.
pub fn sanitize_identifier(raw: &Value) -> String {
    match raw {
        Value::String(s) => sanitize_text(s),
        Value::Number(n) => sanitize_text(&n.to_string()),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
