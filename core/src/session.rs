//! The interactive prompt loop.
//!
//! ```text
//! Prompting --exit/quit--> Terminated
//! Prompting --blank------> Prompting
//! Prompting --target-----> Analyzing --"y"--> Prompting
//!                                     --else-> Terminated
//! ```
//!
//! Interrupts are not handled here. The front-end runs [`Session::run`] under
//! a guard that turns Ctrl-C into a clean exit.

use std::io::BufRead;

use anyhow::Context;
use contextlens_common::assessment::Report;
use contextlens_common::network::target::{Target, TargetError};

use crate::analysis::Analyzer;
use crate::resolver::HostResolver;

const SENTINELS: &[&str] = &["exit", "quit"];

/// Terminal side of the session.
pub trait SessionView {
    /// Shown at the top of every iteration.
    fn intro(&mut self);
    fn prompt_target(&mut self);
    fn no_input(&mut self);
    fn report(&mut self, report: &Report);
    fn prompt_again(&mut self);
    fn farewell(&mut self);
}

/// Why the loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// User typed `exit` or `quit`.
    Exited,
    /// User answered anything but `y` to "run another analysis?".
    Declined,
    /// Standard input hit end of file.
    InputClosed,
}

pub struct Session<I, V, R> {
    input: I,
    view: V,
    analyzer: Analyzer<R>,
}

impl<I, V, R> Session<I, V, R>
where
    I: BufRead,
    V: SessionView,
    R: HostResolver,
{
    pub fn new(input: I, view: V, analyzer: Analyzer<R>) -> Self {
        Self {
            input,
            view,
            analyzer,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<SessionEnd> {
        loop {
            self.view.intro();
            self.view.prompt_target();

            let Some(line) = self.read_line()? else {
                return Ok(SessionEnd::InputClosed);
            };

            if is_sentinel(&line) {
                self.view.farewell();
                return Ok(SessionEnd::Exited);
            }

            let target: Target = match line.parse() {
                Ok(target) => target,
                Err(TargetError::Empty) => {
                    self.view.no_input();
                    continue;
                }
            };

            let report: Report = self.analyzer.analyze(target);
            self.view.report(&report);

            self.view.prompt_again();
            let Some(answer) = self.read_line()? else {
                return Ok(SessionEnd::InputClosed);
            };

            if !answer.trim().eq_ignore_ascii_case("y") {
                self.view.farewell();
                return Ok(SessionEnd::Declined);
            }
        }
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// `None` on end of file. Invalid UTF-8 is replaced, not rejected.
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut bytes: Vec<u8> = Vec::new();
        let read: usize = self
            .input
            .read_until(b'\n', &mut bytes)
            .context("reading from standard input")?;

        Ok((read > 0).then(|| String::from_utf8_lossy(&bytes).into_owned()))
    }
}

fn is_sentinel(line: &str) -> bool {
    let trimmed = line.trim();
    SENTINELS.iter().any(|s| trimmed.eq_ignore_ascii_case(s))
}
