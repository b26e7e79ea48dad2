mod config;
mod rules;

pub use config::ScoringConfig;

use super::domain::Receipt;
use serde::Serialize;

/// Stateless evaluator that applies the reward rules to a receipt.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn standard() -> Self {
        Self::new(ScoringConfig::standard())
    }

    /// Evaluate every rule. Fields that fail to parse zero their own rule and nothing else.
    pub fn score(&self, receipt: &Receipt) -> ScoreOutcome {
        let (components, total_points) = rules::score_receipt(receipt, &self.config);

        ScoreOutcome {
            total_points,
            components,
        }
    }
}

/// Points a receipt earns under the standard rules.
pub fn score(receipt: &Receipt) -> u64 {
    ScoringEngine::standard().score(receipt).total_points
}

/// Reward rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    RetailerName,
    RoundDollar,
    QuarterMultiple,
    ItemPairs,
    DescriptionLength,
    OddDay,
    AfternoonWindow,
}

impl ScoringRule {
    pub fn label(&self) -> &'static str {
        match self {
            ScoringRule::RetailerName => "Retailer name",
            ScoringRule::RoundDollar => "Round dollar total",
            ScoringRule::QuarterMultiple => "Quarter multiple total",
            ScoringRule::ItemPairs => "Item pairs",
            ScoringRule::DescriptionLength => "Description length",
            ScoringRule::OddDay => "Odd purchase day",
            ScoringRule::AfternoonWindow => "Afternoon purchase",
        }
    }
}

/// Discrete contribution to a receipt's points, kept for audits and the CLI breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub rule: ScoringRule,
    pub points: u64,
    pub notes: String,
}

/// Scoring output: the point total and the per-rule trail that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreOutcome {
    pub total_points: u64,
    pub components: Vec<ScoreComponent>,
}

impl ScoreOutcome {
    pub fn points_for(&self, rule: ScoringRule) -> u64 {
        self.components
            .iter()
            .filter(|component| component.rule == rule)
            .map(|component| component.points)
            .sum()
    }
}
