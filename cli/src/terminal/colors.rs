use colored::Color;

pub const PRIMARY: Color = Color::BrightWhite;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const ACCENT: Color = Color::BrightGreen;

// Severity palette for profile and recommendation values
pub const FAVORABLE: Color = Color::Green;
pub const CAUTION: Color = Color::Yellow;
pub const CONCERN: Color = Color::Red;

pub const DISCLAIMER: Color = Color::Cyan;
