//! Receipt intake, scoring, and points lookup.
//!
//! A submitted [`Receipt`] is scored once by the [`ScoringEngine`], stored through a
//! [`ReceiptRepository`] under a freshly generated [`ReceiptId`], and afterwards only its
//! point total can be read back.

pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Item, Receipt, ReceiptId, ReceiptRecord};
pub use repository::{InMemoryReceiptRepository, ReceiptRepository, RepositoryError};
pub use router::receipt_router;
pub use scoring::{
    score, ScoreComponent, ScoreOutcome, ScoringConfig, ScoringEngine, ScoringRule,
};
pub use service::{ReceiptService, ReceiptServiceError};
