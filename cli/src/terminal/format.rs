use crate::terminal::colors;
use colored::*;
use contextlens_common::assessment::{Abstraction, Confidence, Control, Priority, Scale};
use std::fmt::Display;

/// Fixed color for each value of a closed enumeration.
pub trait Palette {
    fn color(&self) -> Color;
}

impl Palette for Scale {
    fn color(&self) -> Color {
        match self {
            Scale::Small => colors::CAUTION,
            Scale::Large => colors::FAVORABLE,
        }
    }
}

impl Palette for Abstraction {
    fn color(&self) -> Color {
        match self {
            Abstraction::Low => colors::CAUTION,
            Abstraction::High => colors::FAVORABLE,
        }
    }
}

impl Palette for Control {
    fn color(&self) -> Color {
        match self {
            Control::Low => colors::CONCERN,
            Control::Higher => colors::FAVORABLE,
        }
    }
}

impl Palette for Priority {
    fn color(&self) -> Color {
        match self {
            Priority::ApplicationLayer => colors::FAVORABLE,
            Priority::InfrastructureRelevant => colors::CAUTION,
        }
    }
}

impl Palette for Confidence {
    fn color(&self) -> Color {
        match self {
            Confidence::High => colors::FAVORABLE,
            Confidence::Medium => colors::CAUTION,
        }
    }
}

pub fn decorate<T: Palette + Display>(value: &T) -> ColoredString {
    value.to_string().color(value.color())
}
