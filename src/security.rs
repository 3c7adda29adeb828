//! The Security header container.

use crate::config::SecurityOptions;
use crate::element::Element;
use crate::profile::WSSE_NS;
use crate::time::{Clock, SystemClock};
use crate::token::{timestamp_element, Token};
use chrono::Duration;
use tracing::debug;

/// WS-Security header for an outgoing SOAP request.
///
/// Configure once, attach tokens, then call [`Security::xml`] to obtain the
/// header subtree for the envelope. Instances are built per request and
/// discarded after the envelope is assembled.
pub struct Security {
    /// Value of the SOAP mustUnderstand attribute
    pub must_understand: bool,
    /// Render an inline Timestamp directly under Security
    pub use_timestamp: bool,
    /// Inline timestamp lifetime in seconds
    pub validity: i64,
    /// Tokens in rendering order
    pub tokens: Vec<Box<dyn Token>>,
    /// Reserved for signature support; never rendered
    pub signatures: Vec<Box<dyn Token>>,
    /// Reserved for signed-reference support; never rendered
    pub references: Vec<Box<dyn Token>>,
    /// Reserved for encryption key support; never rendered
    pub keys: Vec<Box<dyn Token>>,
    clock: Box<dyn Clock>,
}

impl Security {
    /// Create a header without an inline timestamp.
    pub fn new() -> Self {
        Self::with_timestamp(false)
    }

    /// Create a header, optionally rendering an inline timestamp.
    pub fn with_timestamp(use_timestamp: bool) -> Self {
        Self {
            must_understand: true,
            use_timestamp,
            validity: 90,
            tokens: Vec::new(),
            signatures: Vec::new(),
            references: Vec::new(),
            keys: Vec::new(),
            clock: Box::new(SystemClock),
        }
    }

    /// Create a header from configuration.
    pub fn from_options(options: &SecurityOptions) -> Self {
        let mut security = Self::with_timestamp(options.use_timestamp);
        security.must_understand = options.must_understand;
        security.validity = options.validity_secs;
        security
    }

    /// Substitute the time source, for deterministic rendering in tests.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Append a token; insertion order is rendering order.
    pub fn add_token(&mut self, token: impl Token + 'static) {
        self.tokens.push(Box::new(token));
    }

    /// Render the header as an XML element tree.
    ///
    /// Pure over current state plus the clock; with no tokens and no inline
    /// timestamp the result is a childless Security element carrying only
    /// the mustUnderstand attribute.
    pub fn xml(&self) -> Element {
        debug!(
            tokens = self.tokens.len(),
            use_timestamp = self.use_timestamp,
            "rendering Security header"
        );

        let mut root = Element::new("Security", WSSE_NS);
        root.set_attr(
            "mustUnderstand",
            if self.must_understand { "true" } else { "false" },
        );

        if self.use_timestamp {
            let now = self.clock.now_utc();
            root.append(timestamp_element(now, now + Duration::seconds(self.validity)));
        }

        for token in &self.tokens {
            root.append(token.xml());
        }

        root
    }
}

impl Default for Security {
    fn default() -> Self {
        Self::new()
    }
}
