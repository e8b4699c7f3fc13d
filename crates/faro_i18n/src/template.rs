//! Single-pass `{name}` placeholder rendering.
//!
//! This is the last line of the "never raises" contract: whatever state the
//! template or data is in, rendering produces a string. Unknown placeholders
//! stay visible, an unterminated placeholder turns the remainder into
//! literal text, and expansion is capped so a hostile argument cannot blow
//! up memory.

use tracing::warn;

use crate::args::TemplateData;

const MAX_EXPANDED_BYTES: usize = 64 * 1024;

fn take_prefix_by_bytes(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

fn push_char_limited(out: &mut String, c: char) -> bool {
    if out.len() + c.len_utf8() > MAX_EXPANDED_BYTES {
        return true;
    }
    out.push(c);
    out.len() >= MAX_EXPANDED_BYTES
}

fn push_str_limited(out: &mut String, s: &str) -> bool {
    if out.len() >= MAX_EXPANDED_BYTES {
        return true;
    }
    let remaining = MAX_EXPANDED_BYTES - out.len();
    out.push_str(take_prefix_by_bytes(s, remaining));
    out.len() >= MAX_EXPANDED_BYTES
}

/// Render `template` against `data`, replacing `{name}` tokens.
///
/// `name` is used purely as the diagnostic template name in log output.
/// With empty data no substitution is attempted and the template comes back
/// as-is. Escaped braces: `{{` -> `{`, `}}` -> `}`.
pub(crate) fn render(name: &str, template: &str, data: &TemplateData) -> String {
    if data.is_empty() || (!template.contains('{') && !template.contains('}')) {
        return template.to_string();
    }

    let mut out = String::with_capacity(std::cmp::min(template.len() + 8, MAX_EXPANDED_BYTES));
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '}' {
            if chars.peek() == Some(&'}') {
                chars.next();
            }
            if push_char_limited(&mut out, '}') {
                break;
            }
            continue;
        }
        if c != '{' {
            if push_char_limited(&mut out, c) {
                break;
            }
            continue;
        }

        if chars.peek() == Some(&'{') {
            chars.next();
            if push_char_limited(&mut out, '{') {
                break;
            }
            continue;
        }

        // Read until `}`.
        let mut key = String::new();
        let mut closed = false;
        while let Some(&n) = chars.peek() {
            chars.next();
            if n == '}' {
                closed = true;
                break;
            }
            key.push(n);
        }

        // No closing brace: the rest is literal text.
        if !closed {
            warn!(
                template = name,
                "unterminated placeholder, leaving text verbatim"
            );
            if push_char_limited(&mut out, '{') {
                break;
            }
            push_str_limited(&mut out, &key);
            break;
        }

        let key = key.trim();
        match data.value_of(key) {
            Some(value) if !key.is_empty() => {
                if push_str_limited(&mut out, &value) {
                    break;
                }
            }
            _ => {
                // Keep unknown placeholders visible.
                if push_char_limited(&mut out, '{') {
                    break;
                }
                if push_str_limited(&mut out, key) {
                    break;
                }
                if push_char_limited(&mut out, '}') {
                    break;
                }
            }
        }
    }

    out
}

/// Last-resort rendering: honor the caller's placeholders even though real
/// localization lookup failed. `key` only names the template in diagnostics.
pub(crate) fn render_fallback(key: &str, fallback: &str, data: &TemplateData) -> String {
    render(key, fallback, data)
}
