//! Keyword heuristic for infrastructure abstraction.
//!
//! A target whose domain mentions a large cloud or CDN provider is assumed to
//! sit behind shared, managed infrastructure. Matching is a plain substring
//! test, so `googleanalytics-mimic.com` counts as Google.

use std::net::Ipv4Addr;

use contextlens_common::assessment::InfrastructureProfile;
use tracing::debug;

/// Scanned in order; the first hit wins.
pub const HYPERSCALER_KEYWORDS: &[&str] = &[
    "google",
    "amazon",
    "aws",
    "azure",
    "microsoft",
    "cloudflare",
    "akamai",
    "fastly",
];

pub const MANAGED_RATIONALE: [&str; 2] = [
    "Large-scale managed infrastructure detected",
    "Infrastructure is abstracted behind shared control planes",
];

pub const DIRECT_RATIONALE: [&str; 2] = [
    "No evidence of hyperscaler or CDN abstraction",
    "Infrastructure characteristics suggest direct exposure",
];

/// Returns the first keyword contained in `domain_hint`, ignoring case.
pub fn matched_keyword(domain_hint: Option<&str>) -> Option<&'static str> {
    let domain_lower: String = domain_hint.unwrap_or_default().to_lowercase();

    HYPERSCALER_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| domain_lower.contains(*keyword))
}

/// Builds the profile for a target.
///
/// `_resolved` is accepted for callers that have it, but only the domain
/// hint takes part in the decision.
pub fn classify(_resolved: Option<Ipv4Addr>, domain_hint: Option<&str>) -> InfrastructureProfile {
    match matched_keyword(domain_hint) {
        Some(keyword) => {
            debug!("hyperscaler keyword '{keyword}' matched");
            InfrastructureProfile::managed(MANAGED_RATIONALE)
        }
        None => InfrastructureProfile::direct(DIRECT_RATIONALE),
    }
}
