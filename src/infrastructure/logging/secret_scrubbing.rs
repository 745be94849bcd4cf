use regex::Regex;
use std::fmt;
use std::io;
use std::sync::{Arc, LazyLock};
use tracing_subscriber::fmt::MakeWriter;

// OpenAI keys: sk-..., sk-proj-..., sk-svcacct-...
static API_KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"sk-[A-Za-z0-9_-]{16,}").expect("api key pattern"));

// Key, separator and opening quote are kept so JSON log lines stay valid.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?P<prefix>["']?(?:api_key|apikey|token|secret)["']?\s*[:=]\s*)(?P<quote>["']?)[A-Za-z0-9_.\-]{8,}"#)
        .expect("token pattern")
});

static BEARER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Bearer\s+[A-Za-z0-9_.\-]+").expect("bearer pattern"));

static PASSWORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?P<prefix>["']?password["']?\s*[:=]\s*)(?P<quote>["']?)[^"'\s,}]+"#)
        .expect("password pattern")
});

const FIELD_REPLACEMENT: &str = "${prefix}${quote}[REDACTED]";

/// Redacts credentials from log text
#[derive(Clone, Copy, Default)]
pub struct SecretScrubber;

impl SecretScrubber {
    /// Scrubber with the built-in patterns.
    pub const fn new() -> Self {
        Self
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let scrubbed = API_KEY_PATTERN.replace_all(message, "[API_KEY_REDACTED]");
        let scrubbed = BEARER_PATTERN.replace_all(&scrubbed, "Bearer [TOKEN_REDACTED]");
        let scrubbed = TOKEN_PATTERN.replace_all(&scrubbed, FIELD_REPLACEMENT);
        PASSWORD_PATTERN
            .replace_all(&scrubbed, FIELD_REPLACEMENT)
            .into_owned()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}

/// `MakeWriter` that scrubs every formatted event before it reaches `inner`.
#[derive(Clone)]
pub struct ScrubbingMakeWriter<M> {
    inner: M,
    scrubber: Arc<SecretScrubber>,
}

impl<M> ScrubbingMakeWriter<M> {
    /// Wrap `inner` so everything it writes is scrubbed first.
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            scrubber: Arc::new(SecretScrubber::new()),
        }
    }
}

impl<'a, M: MakeWriter<'a>> MakeWriter<'a> for ScrubbingMakeWriter<M> {
    type Writer = ScrubbingWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        ScrubbingWriter {
            inner: self.inner.make_writer(),
            scrubber: Arc::clone(&self.scrubber),
        }
    }
}

/// Writer handed out by [`ScrubbingMakeWriter`].
pub struct ScrubbingWriter<W> {
    inner: W,
    scrubber: Arc<SecretScrubber>,
}

impl<W: io::Write> io::Write for ScrubbingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        self.inner
            .write_all(self.scrubber.scrub_message(&text).as_bytes())?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
