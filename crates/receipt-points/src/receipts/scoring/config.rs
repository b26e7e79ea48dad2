use rust_decimal::Decimal;

/// Weights and thresholds used by the receipt scoring rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringConfig {
    pub round_dollar_bonus: u64,
    pub quarter_multiple_bonus: u64,
    pub quarter_step: Decimal,
    pub item_pair_bonus: u64,
    pub description_length_divisor: usize,
    pub description_price_multiplier: Decimal,
    pub odd_day_bonus: u64,
    pub afternoon_bonus: u64,
    /// First hour (inclusive) of the afternoon window.
    pub afternoon_start_hour: u32,
    /// Hour at which the afternoon window closes (exclusive).
    pub afternoon_end_hour: u32,
}

impl ScoringConfig {
    /// The published reward rules.
    pub fn standard() -> Self {
        Self {
            round_dollar_bonus: 50,
            quarter_multiple_bonus: 25,
            quarter_step: Decimal::new(25, 2),
            item_pair_bonus: 5,
            description_length_divisor: 3,
            description_price_multiplier: Decimal::new(2, 1),
            odd_day_bonus: 6,
            afternoon_bonus: 10,
            afternoon_start_hour: 14,
            afternoon_end_hour: 16,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::standard()
    }
}
