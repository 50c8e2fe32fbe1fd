//! Brazilian payroll calculators for CLT employment.
//!
//! This crate computes vacation pay (férias), the 13th salary and the
//! monthly/annual cost of an employee, formats the results as pt-BR display
//! rows, and reads back calculations saved by older clients. An axum API
//! exposes the calculators together with A/B variant assignment and an
//! admin-only experiment listing.

#![warn(missing_docs)]

pub mod access;
pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod experiments;
pub mod formatting;
pub mod models;
pub mod saved;
