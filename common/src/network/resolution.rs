use std::fmt;
use std::net::Ipv4Addr;

/// What the report shows in its "Resolved IP" line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The target was already an address literal, so no lookup was made.
    Literal(String),
    /// Forward lookup succeeded.
    Resolved(Ipv4Addr),
    /// Forward lookup failed for any reason.
    Unresolved,
}

impl Resolution {
    /// The address, if one is known and parses as IPv4.
    pub fn address(&self) -> Option<Ipv4Addr> {
        match self {
            Resolution::Literal(s) => s.parse().ok(),
            Resolution::Resolved(addr) => Some(*addr),
            Resolution::Unresolved => None,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Literal(s) => f.write_str(s),
            Resolution::Resolved(addr) => write!(f, "{addr}"),
            Resolution::Unresolved => f.write_str("Unresolved"),
        }
    }
}
