//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — errors raised by the parsing surfaces

pub mod error;
