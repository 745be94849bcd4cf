use std::fmt;

/// Placeholder printed wherever a key would otherwise leak.
const REDACTED: &str = "***";

/// Keys shorter than this are masked entirely.
const MIN_PREVIEW_LEN: usize = 8;

/// An OpenAI API key read from the process environment.
///
/// The value is opaque: it is never trimmed, parsed or otherwise transformed.
/// `Debug` and `Display` never print the raw value; call [`ApiKey::expose`]
/// at the point where the key is handed to an HTTP client.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key. Emptiness is checked by the loader, not here.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The exact value as it appeared in the environment.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Length of the raw value in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a key returned by `ConfigLoader`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Display-safe preview such as `sk-...1234`.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() < MIN_PREVIEW_LEN {
            return REDACTED.to_string();
        }

        let head: String = chars[..3].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&REDACTED).finish()
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}
