//! Payload Redaction
//!
//! Hides links and `@handles` in upstream data before it is returned to callers.
//! Only string leaves are rewritten; the shape of the JSON tree is preserved.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

pub const LINK_PLACEHOLDER: &str = "[LINK HIDDEN]";
pub const USER_PLACEHOLDER: &str = "[USER HIDDEN]";

/// ECMAScript whitespace and line terminators, as a regex class body.
/// Unlike Unicode `\s` it includes U+FEFF and excludes U+0085.
const JS_SPACE: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static HTTP_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)https?://[^{JS_SPACE}]+")).unwrap());
static WWW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)www\.[^{JS_SPACE}]+")).unwrap());
// ASCII word class only; `\w` would also match non-Latin letters.
static HANDLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)@[A-Za-z0-9_.\-]+").unwrap());

/// Redact a single string: URLs, then `www.` hosts, then handles, then trim.
///
/// Placeholders contain no matchable text, so applying this twice is a no-op.
pub fn clean_value(input: &str) -> String {
    let out = HTTP_URL_RE.replace_all(input, LINK_PLACEHOLDER);
    let out = WWW_RE.replace_all(&out, LINK_PLACEHOLDER);
    let out = HANDLE_RE.replace_all(&out, USER_PLACEHOLDER);
    out.trim_matches(is_js_space).to_string()
}

fn is_js_space(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Redact every string leaf of a JSON tree.
///
/// Arrays keep order and length, objects keep every key in insertion order,
/// booleans, null and finite numbers pass through unchanged. Numbers outside
/// the f64 range become null, as `JSON.stringify` renders them.
pub fn clean_deep(value: Value) -> Value {
    stacker::maybe_grow(64 * 1024, 1024 * 1024, || clean_node(value))
}

fn clean_node(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(clean_value(&s)),
        Value::Array(items) => Value::Array(items.into_iter().map(clean_deep).collect()),
        Value::Object(map) => {
            let mut cleaned = Map::with_capacity(map.len());
            for (k, v) in map {
                cleaned.insert(k, clean_deep(v));
            }
            Value::Object(cleaned)
        }
        Value::Number(n) if n.as_f64().is_none() => Value::Null,
        other => other,
    }
}
