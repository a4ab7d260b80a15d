//! # ContextLens analysis core
//!
//! The pipeline behind every report, in the order it runs:
//!
//! * **[`resolver`]**: one blocking forward lookup for domain targets.
//! * **[`classifier`]**: keyword heuristic producing an infrastructure profile.
//! * **[`recommendation`]**: fixed guidance keyed on the profile's abstraction.
//! * **[`analysis`]**: ties the three together into a [`Report`](contextlens_common::assessment::Report).
//! * **[`session`]**: the prompt/analyze/repeat loop driving it all.
//!
//! Nothing here writes to the terminal directly; the session talks to a
//! [`SessionView`](session::SessionView) supplied by the front-end.

pub mod analysis;
pub mod classifier;
pub mod recommendation;
pub mod resolver;
pub mod session;
