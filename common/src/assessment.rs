pub mod profile;
pub mod recommendation;
pub mod report;

pub use profile::{Abstraction, Control, InfrastructureProfile, Scale};
pub use recommendation::{Confidence, Priority, Recommendation};
pub use report::Report;
