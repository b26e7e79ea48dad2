use std::sync::Arc;

use tracing::info;

use super::domain::{Receipt, ReceiptId};
use super::repository::{ReceiptRepository, RepositoryError};
use super::scoring::{ScoreOutcome, ScoringEngine};

/// Service composing the scoring engine and the receipt store.
pub struct ReceiptService<R> {
    repository: Arc<R>,
    engine: Arc<ScoringEngine>,
}

impl<R> ReceiptService<R>
where
    R: ReceiptRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_engine(repository, ScoringEngine::standard())
    }

    pub fn with_engine(repository: Arc<R>, engine: ScoringEngine) -> Self {
        Self {
            repository,
            engine: Arc::new(engine),
        }
    }

    /// Score a submitted receipt and store it, returning the assigned identifier.
    pub fn process(&self, receipt: Receipt) -> Result<ReceiptId, ReceiptServiceError> {
        let points = self.engine.score(&receipt).total_points;
        let id = self.repository.put(receipt, points)?;

        info!(receipt_id = %id, points, "receipt processed");
        Ok(id)
    }

    /// Points awarded to a previously processed receipt.
    pub fn points(&self, id: &ReceiptId) -> Result<u64, ReceiptServiceError> {
        let record = self
            .repository
            .get(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record.points)
    }

    /// Score without storing; used for previews and the CLI breakdown.
    pub fn breakdown(&self, receipt: &Receipt) -> ScoreOutcome {
        self.engine.score(receipt)
    }
}

/// Error raised by the receipt service.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ReceiptServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReceiptServiceError::Repository(RepositoryError::NotFound))
    }
}
