//! Inbound query parameters and vehicle identifier extraction.

use std::fmt;

use url::form_urlencoded;

/// Query parameter names accepted for the vehicle number, in priority order.
pub const IDENTIFIER_PARAMS: [&str; 5] = ["num", "test1", "v", "vehicle", "q"];

/// Decoded query string as an ordered bag of `key=value` pairs.
///
/// Values are kept as strings; no coercion happens here. When a key repeats,
/// lookups return its first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Decode a raw `application/x-www-form-urlencoded` query string.
    pub fn parse(raw: Option<&str>) -> Self {
        let pairs = raw
            .map(|q| {
                form_urlencoded::parse(q.as_bytes())
                    .into_owned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First non-empty value among [`IDENTIFIER_PARAMS`].
    pub fn vehicle_identifier(&self) -> Option<VehicleIdentifier> {
        IDENTIFIER_PARAMS
            .iter()
            .filter_map(|name| self.get(name))
            .find(|value| !value.is_empty())
            .map(VehicleIdentifier::new)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Vehicle registration string as supplied by the caller.
///
/// Format is deliberately not validated; only presence matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleIdentifier(String);

impl VehicleIdentifier {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Uppercased form echoed back in the success envelope.
    pub fn to_uppercase(&self) -> String {
        self.0.to_uppercase()
    }
}

impl fmt::Display for VehicleIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
