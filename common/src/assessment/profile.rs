use std::fmt;

/// Rough size of the infrastructure behind a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scale {
    Small,
    Large,
}

/// How much of the infrastructure is hidden behind shared, managed platforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Abstraction {
    Low,
    High,
}

/// How likely the domain owner directly controls the underlying hosts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Low,
    Higher,
}

impl Scale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scale::Small => "small",
            Scale::Large => "large",
        }
    }
}

impl Abstraction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Abstraction::Low => "low",
            Abstraction::High => "high",
        }
    }
}

impl Control {
    pub fn as_str(&self) -> &'static str {
        match self {
            Control::Low => "low",
            Control::Higher => "higher",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Abstraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heuristic view of a target's infrastructure.
///
/// `abstraction == High` always comes with `scale == Large` and
/// `control == Low`; `abstraction == Low` with `Small` and `Higher`.
/// The constructors below are the only way the classifier builds one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfrastructureProfile {
    pub scale: Scale,
    pub abstraction: Abstraction,
    pub control: Control,
    pub rationale: [&'static str; 2],
}

impl InfrastructureProfile {
    pub fn managed(rationale: [&'static str; 2]) -> Self {
        Self {
            scale: Scale::Large,
            abstraction: Abstraction::High,
            control: Control::Low,
            rationale,
        }
    }

    pub fn direct(rationale: [&'static str; 2]) -> Self {
        Self {
            scale: Scale::Small,
            abstraction: Abstraction::Low,
            control: Control::Higher,
            rationale,
        }
    }
}
