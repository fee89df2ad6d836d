//! Command implementations for fmconv CLI

pub mod batch;
pub mod completions;
pub mod convert;
pub mod helpers;
pub mod preview;
pub mod version;
