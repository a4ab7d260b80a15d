//! # Analysis Target Model
//!
//! Defines what the user can hand to the analyzer, which is either:
//! * A literal IPv4 address in dotted-quad form (e.g., `192.168.1.1`).
//! * A domain name (anything else, e.g., `example.com`).
//!
//! The address check is purely syntactic. Octets are not range-checked, so
//! `999.999.999.999` is still treated as an address and is never sent to DNS.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static IPV4_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d{1,3}\.){3}\d{1,3}$").expect("dotted-quad pattern is valid")
});

/// Returns `true` when `s` looks like four dot-separated groups of 1-3 digits.
///
/// This is not a validity check: `256.1.1.1` passes, `::1` does not.
pub fn is_ip_shaped(s: &str) -> bool {
    IPV4_SHAPE.is_match(s)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("no input provided")]
    Empty,
}

/// A single target to analyze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// Dotted-quad literal, kept verbatim since it may not be a valid `Ipv4Addr`.
    Address(String),
    /// Domain name, resolved through DNS and used as the classification hint.
    Domain(String),
}

impl Target {
    /// The domain string the classifier should inspect.
    ///
    /// Address literals carry no hint, so they always land in the
    /// low-abstraction bucket.
    pub fn domain_hint(&self) -> Option<&str> {
        match self {
            Target::Address(_) => None,
            Target::Domain(domain) => Some(domain),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Target::Address(s) | Target::Domain(s) => s,
        }
    }
}

impl FromStr for Target {
    type Err = TargetError;

    /// Parses a raw input line into a `Target`.
    ///
    /// Surrounding whitespace is trimmed first; an empty remainder is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(TargetError::Empty);
        }

        if is_ip_shaped(trimmed) {
            Ok(Target::Address(trimmed.to_string()))
        } else {
            Ok(Target::Domain(trimmed.to_string()))
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
