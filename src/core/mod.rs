//! Core browsing logic.

pub mod detail;
pub mod navigation;
pub mod query;
pub mod session;
