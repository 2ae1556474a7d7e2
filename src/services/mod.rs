//! Clients for the external services.

pub mod catalog;
pub mod http;
pub mod wikipedia;
