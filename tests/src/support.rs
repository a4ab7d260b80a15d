#![cfg(test)]
use std::cell::RefCell;
use std::collections::HashMap;
use std::net::Ipv4Addr;

use contextlens_common::assessment::Report;
use contextlens_core::resolver::{HostResolver, ResolveError};
use contextlens_core::session::SessionView;

/// Answers from a fixed table and remembers every name it was asked about.
#[derive(Default)]
pub struct StaticResolver {
    pub answers: HashMap<String, Ipv4Addr>,
    pub queries: RefCell<Vec<String>>,
}

impl StaticResolver {
    pub fn with(domain: &str, addr: Ipv4Addr) -> Self {
        let mut resolver = Self::default();
        resolver.answers.insert(domain.to_string(), addr);
        resolver
    }
}

impl HostResolver for StaticResolver {
    fn resolve_ipv4(&self, domain: &str) -> Result<Ipv4Addr, ResolveError> {
        self.queries.borrow_mut().push(domain.to_string());
        self.answers
            .get(domain)
            .copied()
            .ok_or_else(|| ResolveError::NoIpv4 {
                domain: domain.to_string(),
            })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shown {
    Intro,
    PromptTarget,
    NoInput,
    Report(Box<Report>),
    PromptAgain,
    Farewell,
}

/// Records what the session asked the terminal to show.
#[derive(Default)]
pub struct RecordingView {
    pub shown: Vec<Shown>,
}

impl RecordingView {
    pub fn reports(&self) -> Vec<&Report> {
        self.shown
            .iter()
            .filter_map(|s| match s {
                Shown::Report(report) => Some(report.as_ref()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: &Shown) -> usize {
        self.shown.iter().filter(|s| *s == wanted).count()
    }
}

impl SessionView for RecordingView {
    fn intro(&mut self) {
        self.shown.push(Shown::Intro);
    }

    fn prompt_target(&mut self) {
        self.shown.push(Shown::PromptTarget);
    }

    fn no_input(&mut self) {
        self.shown.push(Shown::NoInput);
    }

    fn report(&mut self, report: &Report) {
        self.shown.push(Shown::Report(Box::new(report.clone())));
    }

    fn prompt_again(&mut self) {
        self.shown.push(Shown::PromptAgain);
    }

    fn farewell(&mut self) {
        self.shown.push(Shown::Farewell);
    }
}
