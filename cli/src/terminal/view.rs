use contextlens_common::assessment::Report;
use contextlens_core::session::SessionView;
use tracing::error;

use crate::mprint;
use crate::terminal::{print, report};

/// Renders the session to standard output.
pub struct TerminalView;

impl SessionView for TerminalView {
    fn intro(&mut self) {
        mprint!();
        print::header("ContextLens v1");
        print::print_status("Enter a domain or IP address (or 'exit')");
        mprint!();
    }

    fn prompt_target(&mut self) {
        print::prompt("Target:");
    }

    fn no_input(&mut self) {
        error!("No input provided.");
    }

    fn report(&mut self, report: &Report) {
        report::print_report(report);
    }

    fn prompt_again(&mut self) {
        mprint!();
        print::prompt("Run another analysis? (y/n):");
    }

    fn farewell(&mut self) {
        print::farewell();
    }
}
