//! # ContextLens shared types
//!
//! Models passed between the analysis core and the terminal front-end.
//!
//! * **[`network`]**: what the user asked about and what DNS said about it.
//! * **[`assessment`]**: the infrastructure profile, the recommendation derived
//!   from it, and the per-target report bundling both.
//! * **[`config`]**: runtime switches handed down from the command line.

pub mod assessment;
pub mod config;
pub mod network;
