use crate::assessment::{InfrastructureProfile, Recommendation};
use crate::network::resolution::Resolution;
use crate::network::target::Target;

/// Everything printed for one analyzed target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub target: Target,
    pub resolution: Resolution,
    pub profile: InfrastructureProfile,
    pub recommendation: Recommendation,
}
