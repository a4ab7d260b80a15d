use colored::*;
use contextlens_common::assessment::Report;

use crate::terminal::format::decorate;
use crate::terminal::{colors, print};

const DISCLAIMER: &str = "Disclaimer: Output is contextual and advisory only.";

/// Lays out a report in its fixed order, one string per terminal line.
pub fn render(report: &Report) -> Vec<String> {
    let profile = &report.profile;
    let recommendation = &report.recommendation;

    let mut lines: Vec<String> = vec![
        String::new(),
        print::header_line("ContextLens v1 Summary"),
        String::new(),
        print::aligned("Target", report.target.to_string()),
        print::aligned("Resolved IP", report.resolution.to_string()),
        String::new(),
        print::section_line("Infrastructure Profile"),
        print::aligned("Scale", decorate(&profile.scale)),
        print::aligned("Abstraction", decorate(&profile.abstraction)),
        print::aligned("Control Likelihood", decorate(&profile.control)),
        print::aligned("Rationale", ""),
    ];

    lines.extend(profile.rationale.iter().map(|r| print::bullet_line(r)));

    lines.extend([
        String::new(),
        print::section_line("Recommendation"),
        print::aligned("Priority", decorate(&recommendation.priority)),
        print::aligned("Confidence", decorate(&recommendation.confidence)),
        print::aligned("Guidance", recommendation.guidance),
        String::new(),
        print::fat_separator_line(),
        format!("{}", DISCLAIMER.color(colors::DISCLAIMER)),
    ]);

    lines
}

pub fn print_report(report: &Report) {
    for line in render(report) {
        print::print(&line);
    }
}
