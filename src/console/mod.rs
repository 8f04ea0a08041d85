//! Console apps.
pub mod inspector;
