//! Family units and household income.

pub mod entities;
