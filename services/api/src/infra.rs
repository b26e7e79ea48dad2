use metrics_exporter_prometheus::PrometheusHandle;
use receipt_points::receipts::{InMemoryReceiptRepository, ReceiptService};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Receipt service over the process-lifetime in-memory store.
pub(crate) fn in_memory_receipt_service() -> Arc<ReceiptService<InMemoryReceiptRepository>> {
    let repository = Arc::new(InMemoryReceiptRepository::default());
    Arc::new(ReceiptService::new(repository))
}
