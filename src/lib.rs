//! Survey Match - compatibility matching over shared-question surveys
//!
//! This library pairs participants by how closely their survey answers agree.
//! The engine in [`core`] is pure computation over snapshots loaded from the
//! store; everything else is HTTP plumbing around it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{agreement_count, has_full_coverage, similarity_percent, Matcher};
pub use models::{
    AnswerSet, Catalog, PairMatch, ParticipantAnswers, ParticipantSummary, Question, RankedMatch,
};
