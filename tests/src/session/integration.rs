#![cfg(test)]
use std::io::Cursor;

use contextlens_common::assessment::Abstraction;
use contextlens_core::analysis::Analyzer;
use contextlens_core::session::{Session, SessionEnd};

use crate::support::{RecordingView, Shown, StaticResolver};

fn run_script(script: &str) -> (SessionEnd, RecordingView) {
    run_bytes(script.as_bytes())
}

fn run_bytes(script: &[u8]) -> (SessionEnd, RecordingView) {
    let resolver = StaticResolver::default();
    let mut session = Session::new(
        Cursor::new(script.to_vec()),
        RecordingView::default(),
        Analyzer::new(&resolver),
    );
    let end = session.run().expect("scripted input never fails");
    (end, session.into_view())
}

#[test]
fn exit_ends_without_report() {
    let (end, view) = run_script("exit\n");

    assert_eq!(end, SessionEnd::Exited);
    assert!(view.reports().is_empty());
    assert_eq!(
        view.shown,
        vec![Shown::Intro, Shown::PromptTarget, Shown::Farewell]
    );
}

#[test]
fn quit_is_case_insensitive() {
    let (end, view) = run_script("  QuIt \n");
    assert_eq!(end, SessionEnd::Exited);
    assert!(view.reports().is_empty());
}

#[test]
fn empty_input_reprompts_without_report() {
    let (end, view) = run_script("\n   \nexit\n");

    assert_eq!(end, SessionEnd::Exited);
    assert_eq!(view.count(&Shown::NoInput), 2);
    assert_eq!(view.count(&Shown::PromptTarget), 3);
    assert!(view.reports().is_empty());
}

#[test]
fn declining_rerun_ends_session() {
    let (end, view) = run_script("example-small-biz.net\nn\n");

    assert_eq!(end, SessionEnd::Declined);
    assert_eq!(view.reports().len(), 1);
    assert_eq!(view.shown.last(), Some(&Shown::Farewell));
}

#[test]
fn only_plain_y_loops_again() {
    let (end, view) = run_script("google.com\nY\n10.0.0.1\nyes\n");

    assert_eq!(end, SessionEnd::Declined);
    let reports = view.reports();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].profile.abstraction, Abstraction::High);
    assert_eq!(reports[1].profile.abstraction, Abstraction::Low);
}

#[test]
fn closed_input_ends_session_quietly() {
    let (end, view) = run_script("");
    assert_eq!(end, SessionEnd::InputClosed);
    assert_eq!(view.count(&Shown::Farewell), 0);

    let (end, view) = run_script("fastly.net\n");
    assert_eq!(end, SessionEnd::InputClosed);
    assert_eq!(view.reports().len(), 1);
    assert_eq!(view.shown.last(), Some(&Shown::PromptAgain));
}

#[test]
fn target_is_trimmed_before_analysis() {
    let (_, view) = run_script("   azure.com   \nn\n");
    let reports = view.reports();
    assert_eq!(reports[0].target.to_string(), "azure.com");
}

#[test]
fn invalid_utf8_line_is_analyzed_and_session_continues() {
    let (end, view) = run_bytes(b"\xff\xfe.example\ny\nexit\n");

    assert_eq!(end, SessionEnd::Exited);
    let reports = view.reports();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].target.to_string().ends_with(".example"));
    assert_eq!(reports[0].profile.abstraction, Abstraction::Low);
}
