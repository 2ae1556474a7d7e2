//! Movie Finder Library
//!
//! Search a TMDB movie catalog, browse related titles and enrich the selected
//! movie with its Wikipedia summary.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod preflight;
pub mod services;

pub use error::{Error, Result};
