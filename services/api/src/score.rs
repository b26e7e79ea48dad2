use clap::Args;
use receipt_points::error::AppError;
use crate::infra::in_memory_receipt_service;
use receipt_points::receipts::{Receipt, ScoreOutcome};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON document (same shape as POST /receipts/process)
    #[arg(long)]
    pub(crate) receipt: PathBuf,
    /// Emit the breakdown as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { receipt, json } = args;

    let raw = std::fs::read_to_string(&receipt)?;
    let receipt: Receipt = serde_json::from_str(&raw)?;
    let outcome = in_memory_receipt_service().breakdown(&receipt);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", render_breakdown(&receipt, &outcome));
    }

    Ok(())
}

fn render_breakdown(receipt: &Receipt, outcome: &ScoreOutcome) -> String {
    let mut report = String::new();

    let _ = writeln!(report, "Receipt points breakdown");
    let _ = writeln!(
        report,
        "Retailer: {} | purchased {} {} | total {} | {} item(s)",
        receipt.retailer,
        receipt.purchase_date,
        receipt.purchase_time,
        receipt.total,
        receipt.items.len()
    );

    let _ = writeln!(report, "\nRules");
    for component in &outcome.components {
        let _ = writeln!(
            report,
            "- {}: {} ({})",
            component.rule.label(),
            component.points,
            component.notes
        );
    }

    let _ = writeln!(report, "\nTotal points: {}", outcome.total_points);
    report
}
