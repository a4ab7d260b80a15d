pub mod resolution;
pub mod target;
