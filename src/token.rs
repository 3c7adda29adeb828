//! Security tokens: UsernameToken and Timestamp.

use crate::element::Element;
use crate::profile::{
    NONCE_BASE64_ENCODING, PASSWORD_DIGEST_TYPE, PASSWORD_TEXT_TYPE, WSSE_NS, WSU_NS,
};
use crate::time::{utc_now, utc_now_string, xsd_datetime, Clock, SystemClock};
use chrono::{DateTime, Duration, Utc};
use md5::{Digest, Md5};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A renderable security token.
///
/// Anything appended to a `Security` header implements this, including the
/// reserved extension points for future signature and key material.
pub trait Token {
    /// Render the token as an XML element.
    fn xml(&self) -> Element;
}

/// How `set_nonce(None)` generates a nonce value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NonceMode {
    /// 16 random bytes, lowercase hex.
    #[default]
    Random,
    /// MD5 over `username:password:timestamp`, lowercase hex. Reproducible
    /// for identical inputs and therefore provides no replay protection;
    /// kept for compatibility with existing services only.
    LegacyDeterministic,
}

/// WS-Security UsernameToken for outgoing requests.
#[derive(Debug, Clone, Default)]
pub struct UsernameToken {
    /// Username
    pub username: String,
    /// Password (rendered as PasswordText unless a digest is set)
    pub password: String,
    /// Pre-computed password digest, supplied by an external auth service
    pub password_digest: Option<String>,
    /// Replay-prevention nonce
    pub nonce: Option<String>,
    /// Whether the Nonce element carries a base64 EncodingType attribute
    pub nonce_has_encoding: bool,
    /// Token creation time
    pub created: Option<DateTime<Utc>>,
    /// Nonce generation mode
    pub nonce_mode: NonceMode,
}

impl UsernameToken {
    /// Create a token with the given credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    /// Select the nonce generation mode.
    pub fn with_nonce_mode(mut self, mode: NonceMode) -> Self {
        self.nonce_mode = mode;
        self
    }

    /// Toggle the `EncodingType` attribute on the Nonce element.
    ///
    /// The flag is independent of the nonce value; the caller is responsible
    /// for base64-encoding the nonce when setting it.
    pub fn set_nonce_encoding(&mut self, value: bool) {
        self.nonce_has_encoding = value;
    }

    /// Store a pre-computed password digest.
    ///
    /// When set, the Password element renders the digest value with the
    /// PasswordDigest type URI, overriding the plain password.
    pub fn set_password_digest(&mut self, digest: impl Into<String>) {
        self.password_digest = Some(digest.into());
    }

    /// Set the nonce, generating one when `text` is `None`.
    ///
    /// The nonce stays absent from rendered output unless this method is
    /// called; `xml()` never generates one.
    pub fn set_nonce(&mut self, text: Option<&str>) {
        self.nonce = Some(match text {
            Some(t) => t.to_string(),
            None => match self.nonce_mode {
                NonceMode::Random => random_nonce(),
                NonceMode::LegacyDeterministic => {
                    warn!(
                        username = %self.username,
                        "generating deterministic legacy nonce; this mode does not prevent replay"
                    );
                    legacy_nonce(&self.username, &self.password, &utc_now_string())
                }
            },
        });
    }

    /// Set the creation time, defaulting to the current UTC time.
    pub fn set_created(&mut self, dt: Option<DateTime<Utc>>) {
        self.created = Some(dt.unwrap_or_else(utc_now));
    }
}

impl Token for UsernameToken {
    fn xml(&self) -> Element {
        let mut root = Element::new("UsernameToken", WSSE_NS);

        let mut username = Element::new("Username", WSSE_NS);
        username.set_text(self.username.as_str());
        root.append(username);

        let mut password = Element::new("Password", WSSE_NS);
        match &self.password_digest {
            Some(digest) => {
                password.set_attr("Type", PASSWORD_DIGEST_TYPE);
                password.set_text(digest.as_str());
            }
            None => {
                password.set_attr("Type", PASSWORD_TEXT_TYPE);
                password.set_text(self.password.as_str());
            }
        }
        root.append(password);

        if let Some(nonce) = &self.nonce {
            let mut n = Element::new("Nonce", WSSE_NS);
            if self.nonce_has_encoding {
                n.set_attr("EncodingType", NONCE_BASE64_ENCODING);
            }
            n.set_text(nonce.as_str());
            root.append(n);
        }

        if let Some(created) = self.created {
            let mut c = Element::new("Created", WSU_NS);
            c.set_text(xsd_datetime(created));
            root.append(c);
        }

        root
    }
}

/// WS-Security Timestamp token.
///
/// The created/expires pair is computed once at construction and never
/// recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    /// Creation time
    pub created: DateTime<Utc>,
    /// Expiry time, `created + validity` seconds
    pub expires: DateTime<Utc>,
}

impl Timestamp {
    /// Create a timestamp valid for `validity` seconds from now.
    ///
    /// Zero or negative validity is accepted as-is and produces an
    /// expired-on-arrival window.
    pub fn new(validity: i64) -> Self {
        Self::with_clock(validity, &SystemClock)
    }

    /// Create a timestamp from an explicit clock.
    pub fn with_clock(validity: i64, clock: &dyn Clock) -> Self {
        let created = clock.now_utc();
        Self {
            created,
            expires: created + Duration::seconds(validity),
        }
    }
}

impl Token for Timestamp {
    fn xml(&self) -> Element {
        timestamp_element(self.created, self.expires)
    }
}

/// Shared Timestamp rendering, used by both the standalone token and the
/// inline timestamp under `Security`.
pub(crate) fn timestamp_element(created: DateTime<Utc>, expires: DateTime<Utc>) -> Element {
    let mut root = Element::new("Timestamp", WSU_NS);
    let mut c = Element::new("Created", WSU_NS);
    c.set_text(xsd_datetime(created));
    let mut e = Element::new("Expires", WSU_NS);
    e.set_text(xsd_datetime(expires));
    root.append(c);
    root.append(e);
    root
}

fn random_nonce() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Deterministic legacy nonce: lowercase hex MD5 of
/// `username:password:timestamp` (UTF-8).
pub(crate) fn legacy_nonce(username: &str, password: &str, timestamp: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(format!("{}:{}:{}", username, password, timestamp).as_bytes());
    hex::encode(hasher.finalize())
}
