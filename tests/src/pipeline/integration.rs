#![cfg(test)]
use std::net::Ipv4Addr;

use contextlens_common::assessment::{Abstraction, Confidence, Control, Priority, Scale};
use contextlens_common::network::resolution::Resolution;
use contextlens_common::network::target::Target;
use contextlens_core::analysis::Analyzer;
use contextlens_core::classifier::{DIRECT_RATIONALE, MANAGED_RATIONALE};

use crate::support::StaticResolver;

fn target(s: &str) -> Target {
    s.parse().expect("non-empty target")
}

#[test]
fn hyperscaler_domain_is_application_layer() {
    let google: Ipv4Addr = Ipv4Addr::new(142, 250, 72, 14);
    let resolver = StaticResolver::with("google.com", google);
    let report = Analyzer::new(&resolver).analyze(target("google.com"));

    assert_eq!(report.resolution, Resolution::Resolved(google));
    assert_eq!(report.profile.scale, Scale::Large);
    assert_eq!(report.profile.abstraction, Abstraction::High);
    assert_eq!(report.profile.control, Control::Low);
    assert_eq!(report.profile.rationale, MANAGED_RATIONALE);
    assert_eq!(report.recommendation.priority, Priority::ApplicationLayer);
    assert_eq!(report.recommendation.confidence, Confidence::High);
    assert_eq!(*resolver.queries.borrow(), vec!["google.com".to_string()]);
}

#[test]
fn hyperscaler_classification_survives_failed_lookup() {
    let resolver = StaticResolver::default();
    let report = Analyzer::new(&resolver).analyze(target("google.com"));

    assert_eq!(report.resolution, Resolution::Unresolved);
    assert_eq!(report.profile.abstraction, Abstraction::High);
    assert_eq!(report.recommendation.priority, Priority::ApplicationLayer);
}

#[test]
fn unknown_domain_is_infrastructure_relevant() {
    let resolver = StaticResolver::default();
    let report = Analyzer::new(&resolver).analyze(target("example-small-biz.net"));

    assert_eq!(report.profile.scale, Scale::Small);
    assert_eq!(report.profile.abstraction, Abstraction::Low);
    assert_eq!(report.profile.control, Control::Higher);
    assert_eq!(report.profile.rationale, DIRECT_RATIONALE);
    assert_eq!(report.recommendation.priority, Priority::InfrastructureRelevant);
    assert_eq!(report.recommendation.confidence, Confidence::Medium);
}

#[test]
fn address_literal_skips_dns_and_falls_to_low_branch() {
    let resolver = StaticResolver::default();
    let report = Analyzer::new(&resolver).analyze(target("192.168.1.1"));

    assert!(resolver.queries.borrow().is_empty());
    assert_eq!(report.resolution, Resolution::Literal("192.168.1.1".into()));
    assert_eq!(report.profile.abstraction, Abstraction::Low);
    assert_eq!(report.recommendation.priority, Priority::InfrastructureRelevant);
    assert_eq!(report.recommendation.confidence, Confidence::Medium);
}

#[test]
fn out_of_range_literal_is_still_an_address() {
    let resolver = StaticResolver::default();
    let report = Analyzer::new(&resolver).analyze(target("999.999.999.999"));

    assert!(resolver.queries.borrow().is_empty());
    assert_eq!(report.resolution.address(), None);
    assert_eq!(report.profile.abstraction, Abstraction::Low);
}

#[test]
fn analysis_is_repeatable() {
    let resolver = StaticResolver::default();
    let analyzer = Analyzer::new(&resolver);

    let first = analyzer.analyze(target("cdn.Akamai.net"));
    let second = analyzer.analyze(target("cdn.Akamai.net"));
    assert_eq!(first, second);
    assert_eq!(resolver.queries.borrow().len(), 2);
}
