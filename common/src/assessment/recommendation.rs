use std::fmt;

/// Where security effort is best spent for a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    ApplicationLayer,
    InfrastructureRelevant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confidence {
    High,
    Medium,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::ApplicationLayer => "application-layer",
            Priority::InfrastructureRelevant => "infrastructure-relevant",
        }
    }
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recommendation {
    pub priority: Priority,
    pub confidence: Confidence,
    pub guidance: &'static str,
}
