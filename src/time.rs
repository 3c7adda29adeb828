//! Clock abstraction and XSD dateTime formatting.
//!
//! Rendering binds to wall-clock time only through [`Clock`], so tests can
//! substitute a fixed instant and assert exact output.

use chrono::{DateTime, Local, Utc};

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Current time in UTC.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Current local time.
pub fn now_local() -> DateTime<Local> {
    Local::now()
}

/// Current UTC time.
pub fn utc_now() -> DateTime<Utc> {
    Utc::now()
}

/// Current UTC time in XSD dateTime lexical form.
pub fn utc_now_string() -> String {
    xsd_datetime(utc_now())
}

/// Format a UTC instant as `YYYY-MM-DDThh:mm:ssZ`, with microseconds
/// appended when nonzero.
pub fn xsd_datetime(dt: DateTime<Utc>) -> String {
    if dt.timestamp_subsec_micros() == 0 {
        dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    } else {
        dt.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
    }
}
