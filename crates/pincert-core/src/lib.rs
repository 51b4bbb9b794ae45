//! pincert-core — Certification evaluation and scoring.
//!
//! This crate decides whether a learner has completed every module a course
//! requires, turns quiz results into percentages, and combines both with a
//! pass threshold into a verdict. Course and submission files are parsed
//! here too; the `pincert-cli` crate is a thin layer on top.

pub mod assessment;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod model;
pub mod parser;
pub mod statistics;

#[cfg(test)]
mod properties;

pub use error::CertifyError;
pub use evaluator::{compute_score, is_certified, CertificationEvaluator};
