//! Comma escape processing
//!
//! Inline rules separate their fragments with commas, so a comma that belongs
//! to a value (for example the arguments of `min(...)` in a move expression)
//! has to be written as `\,`. Block rules carry one value per line and use
//! the plain comma.
//!
//! Supported sequences:
//! - `\,` → literal comma inside an inline fragment
//! - `,` → fragment separator (inline) or literal comma (block)

/// Escape every bare comma as `\,`, leaving already escaped commas alone
pub fn escape_commas(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                result.push(ch);
                if chars.peek() == Some(&',') {
                    chars.next();
                    result.push(',');
                }
            }
            ',' => result.push_str("\\,"),
            _ => result.push(ch),
        }
    }

    result
}

/// Turn every `\,` back into a plain comma
pub fn unescape_commas(input: &str) -> String {
    input.replace("\\,", ",")
}
