use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::receipts::domain::{Item, Receipt, ReceiptId, ReceiptRecord};
use crate::receipts::repository::{
    InMemoryReceiptRepository, ReceiptRepository, RepositoryError,
};
use crate::receipts::scoring::ScoringEngine;
use crate::receipts::{receipt_router, ReceiptService};

pub(super) fn item(description: &str, price: &str) -> Item {
    Item {
        short_description: description.to_string(),
        price: price.to_string(),
    }
}

/// Receipt on which every rule scores zero; tests flip one field at a time.
pub(super) fn neutral_receipt() -> Receipt {
    Receipt {
        retailer: "&".to_string(),
        purchase_date: "2022-01-02".to_string(),
        purchase_time: "09:00".to_string(),
        items: Vec::new(),
        total: "1.01".to_string(),
    }
}

pub(super) fn morning_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![item("Pepsi - 12-oz", "1.25"), item("Dasani", "1.40")],
        total: "35.35".to_string(),
    }
}

pub(super) fn target_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![
            item("Mountain Dew 12PK", "6.49"),
            item("Emils Cheese Pizza", "12.25"),
            item("Knorr Creamy Chicken", "1.26"),
            item("Doritos Nacho Cheese", "3.35"),
            item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
        total: "35.35".to_string(),
    }
}

pub(super) fn corner_market_receipt() -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        items: vec![
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
        ],
        total: "9.00".to_string(),
    }
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::standard()
}

pub(super) fn build_service() -> (
    ReceiptService<InMemoryReceiptRepository>,
    Arc<InMemoryReceiptRepository>,
) {
    let repository = Arc::new(InMemoryReceiptRepository::default());
    let service = ReceiptService::new(repository.clone());
    (service, repository)
}

pub(super) fn router_with_service(
    service: ReceiptService<InMemoryReceiptRepository>,
) -> axum::Router {
    receipt_router(Arc::new(service))
}

pub(super) struct UnavailableRepository;

impl ReceiptRepository for UnavailableRepository {
    fn put(&self, _receipt: Receipt, _points: u64) -> Result<ReceiptId, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn get(&self, _id: &ReceiptId) -> Result<Option<ReceiptRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn len(&self) -> Result<usize, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
