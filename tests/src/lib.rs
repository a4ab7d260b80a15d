//! End-to-end checks for the analysis pipeline and the prompt loop.
//!
//! Nothing here touches the network: DNS is replaced by a static lookup table.

mod session;
mod support;
