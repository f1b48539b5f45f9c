//! Bind-variable-safe colon escaping.
//!
//! Downstream parameter binders treat every `:ident` as a placeholder, so
//! literal colons in a finished statement (time formats such as
//! `'HH24:MI:SS'`) must be doubled while genuine placeholders are left
//! alone. A placeholder is recognised only in assignment/comparison
//! position: a colon that is the first non-space character after `=`.

use alloc::borrow::Cow;
use alloc::string::String;

/// Room reserved up front for doubled colons.
const ESCAPE_HEADROOM: usize = 10;

/// Double every literal colon in `text`, leaving bind-variable colons intact.
///
/// A colon that is the first non-space character after `=` starts a bind
/// variable and is copied unchanged. Any other run of exactly one colon
/// becomes `::`; runs of two or more colons are copied as found, which makes
/// the rewrite idempotent.
///
/// When the text holds no bind variable at all (including when it has no
/// colon or no `=`), the input is returned unmodified.
///
/// # Examples
///
/// ```
/// use sql_tagmap::escape_bind_colons;
///
/// assert_eq!(
///     escape_bind_colons("to_char(d, 'HH24:MI') where id = :id"),
///     "to_char(d, 'HH24::MI') where id = :id"
/// );
/// assert_eq!(escape_bind_colons("to_char(d, 'HH24:MI')"), "to_char(d, 'HH24:MI')");
/// ```
#[must_use]
pub fn escape_bind_colons(text: &str) -> Cow<'_, str> {
    if !text.contains(':') || !text.contains('=') {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + ESCAPE_HEADROOM);
    let mut awaiting_operand = false;
    let mut bind_found = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if awaiting_operand && c != ' ' {
            awaiting_operand = false;
            if c == ':' {
                escaped.push(c);
                bind_found = true;
                continue;
            }
        }

        if c == ':' {
            let mut run = 1;
            while chars.next_if_eq(&':').is_some() {
                run += 1;
            }
            let emitted = if run == 1 { 2 } else { run };
            escaped.extend(core::iter::repeat_n(':', emitted));
            continue;
        }

        escaped.push(c);
        if c == '=' {
            awaiting_operand = true;
        }
    }

    if bind_found {
        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(text)
    }
}
