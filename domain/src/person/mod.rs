//! Individuals and their age-gated relationships.

pub mod entities;
