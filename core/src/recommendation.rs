use contextlens_common::assessment::{
    Abstraction, Confidence, InfrastructureProfile, Priority, Recommendation,
};

const APPLICATION_GUIDANCE: &str =
    "Focus on application logic, configuration, and integration boundaries";
const INFRASTRUCTURE_GUIDANCE: &str =
    "Infrastructure-level assessment may be a rational use of effort";

/// Picks the recommendation for a profile. Only `abstraction` is read.
pub fn derive(profile: &InfrastructureProfile) -> Recommendation {
    for_abstraction(profile.abstraction)
}

pub fn for_abstraction(abstraction: Abstraction) -> Recommendation {
    match abstraction {
        Abstraction::High => Recommendation {
            priority: Priority::ApplicationLayer,
            confidence: Confidence::High,
            guidance: APPLICATION_GUIDANCE,
        },
        Abstraction::Low => Recommendation {
            priority: Priority::InfrastructureRelevant,
            confidence: Confidence::Medium,
            guidance: INFRASTRUCTURE_GUIDANCE,
        },
    }
}
