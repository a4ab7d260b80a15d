use contextlens_common::assessment::Report;
use contextlens_common::network::resolution::Resolution;
use contextlens_common::network::target::Target;

use crate::resolver::{self, HostResolver};
use crate::{classifier, recommendation};

/// Runs the full pipeline for one target at a time.
pub struct Analyzer<R> {
    resolver: R,
}

impl<R: HostResolver> Analyzer<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Address literals skip DNS entirely; domains get one lookup attempt.
    pub fn analyze(&self, target: Target) -> Report {
        let resolution: Resolution = match &target {
            Target::Address(literal) => Resolution::Literal(literal.clone()),
            Target::Domain(domain) => resolver::resolve(&self.resolver, domain),
        };

        let profile = classifier::classify(resolution.address(), target.domain_hint());
        let recommendation = recommendation::derive(&profile);

        Report {
            target,
            resolution,
            profile,
            recommendation,
        }
    }
}
