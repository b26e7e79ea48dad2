use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use super::super::domain::Receipt;
use super::config::ScoringConfig;
use super::{ScoreComponent, ScoringRule};

const DATE_FORMAT: &str = "%Y-%m-%d";
/// Zero-padded shape of `DATE_FORMAT`; `#` marks a digit.
const DATE_SHAPE: &[u8] = b"####-##-##";
const TIME_FORMAT: &str = "%H:%M";

/// Parse a non-negative monetary amount. Negative values are outside the currency domain.
fn parse_amount(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    // Decimal's FromStr accepts digit-group underscores; plain decimals only.
    if raw.contains('_') {
        return None;
    }
    let amount = raw.parse::<Decimal>().ok()?;
    if amount < Decimal::ZERO {
        return None;
    }
    Some(amount)
}

fn parse_purchase_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    // chrono accepts unpadded months and days; the wire format does not.
    let padded = raw.len() == DATE_SHAPE.len()
        && raw
            .bytes()
            .zip(DATE_SHAPE)
            .all(|(byte, shape)| match shape {
                b'#' => byte.is_ascii_digit(),
                separator => byte == *separator,
            });
    if !padded {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

fn parse_purchase_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT).ok()
}

pub(crate) fn score_receipt(
    receipt: &Receipt,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, u64) {
    let total = parse_amount(&receipt.total);
    if total.is_none() {
        debug!(value = %receipt.total, "total is not a valid amount; total rules score zero");
    }

    let components = vec![
        retailer_name(receipt),
        round_dollar(total, config),
        quarter_multiple(total, config),
        item_pairs(receipt, config),
        description_length(receipt, config),
        odd_day(receipt, config),
        afternoon_window(receipt, config),
    ];

    let total_points = components
        .iter()
        .fold(0u64, |sum, component| sum.saturating_add(component.points));

    (components, total_points)
}

fn retailer_name(receipt: &Receipt) -> ScoreComponent {
    let count = receipt
        .retailer
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .count() as u64;

    ScoreComponent {
        rule: ScoringRule::RetailerName,
        points: count,
        notes: format!("{count} alphanumeric character(s) in retailer name"),
    }
}

fn round_dollar(total: Option<Decimal>, config: &ScoringConfig) -> ScoreComponent {
    let (points, notes) = match total {
        Some(total) if total.fract().is_zero() => (
            config.round_dollar_bonus,
            format!("total {total} is a round dollar amount"),
        ),
        Some(total) => (0, format!("total {total} has cents")),
        None => (0, "total could not be parsed".to_string()),
    };

    ScoreComponent {
        rule: ScoringRule::RoundDollar,
        points,
        notes,
    }
}

fn quarter_multiple(total: Option<Decimal>, config: &ScoringConfig) -> ScoreComponent {
    let (points, notes) = match total {
        Some(total) => {
            let multiple = total
                .checked_rem(config.quarter_step)
                .is_some_and(|remainder| remainder.is_zero());
            if multiple {
                (
                    config.quarter_multiple_bonus,
                    format!("total {total} is a multiple of {}", config.quarter_step),
                )
            } else {
                (
                    0,
                    format!("total {total} is not a multiple of {}", config.quarter_step),
                )
            }
        }
        None => (0, "total could not be parsed".to_string()),
    };

    ScoreComponent {
        rule: ScoringRule::QuarterMultiple,
        points,
        notes,
    }
}

fn item_pairs(receipt: &Receipt, config: &ScoringConfig) -> ScoreComponent {
    let pairs = (receipt.items.len() / 2) as u64;

    ScoreComponent {
        rule: ScoringRule::ItemPairs,
        points: pairs.saturating_mul(config.item_pair_bonus),
        notes: format!("{pairs} pair(s) across {} item(s)", receipt.items.len()),
    }
}

fn description_length(receipt: &Receipt, config: &ScoringConfig) -> ScoreComponent {
    let mut points: u64 = 0;
    let mut qualifying = 0usize;

    for item in &receipt.items {
        // Length in UTF-8 bytes.
        let length = item.short_description.trim().len();
        let divisible = length
            .checked_rem(config.description_length_divisor)
            .is_some_and(|remainder| remainder == 0);
        if !divisible {
            continue;
        }

        let Some(price) = parse_amount(&item.price) else {
            debug!(
                description = %item.short_description,
                value = %item.price,
                "item price is not a valid amount; item scores zero"
            );
            continue;
        };

        let award = price
            .checked_mul(config.description_price_multiplier)
            .and_then(|scaled| scaled.ceil().to_u64())
            .unwrap_or(0);
        qualifying += 1;
        points = points.saturating_add(award);
    }

    ScoreComponent {
        rule: ScoringRule::DescriptionLength,
        points,
        notes: format!(
            "{qualifying} item(s) with description length divisible by {}",
            config.description_length_divisor
        ),
    }
}

fn odd_day(receipt: &Receipt, config: &ScoringConfig) -> ScoreComponent {
    let (points, notes) = match parse_purchase_date(&receipt.purchase_date) {
        Some(date) if date.day() % 2 == 1 => {
            (config.odd_day_bonus, format!("purchased on odd day {}", date.day()))
        }
        Some(date) => (0, format!("purchased on even day {}", date.day())),
        None => {
            debug!(value = %receipt.purchase_date, "purchase date is not YYYY-MM-DD");
            (0, "purchase date could not be parsed".to_string())
        }
    };

    ScoreComponent {
        rule: ScoringRule::OddDay,
        points,
        notes,
    }
}

fn afternoon_window(receipt: &Receipt, config: &ScoringConfig) -> ScoreComponent {
    let window = config.afternoon_start_hour..config.afternoon_end_hour;
    let (points, notes) = match parse_purchase_time(&receipt.purchase_time) {
        Some(time) if window.contains(&time.hour()) => (
            config.afternoon_bonus,
            format!("purchased at {} inside the afternoon window", time.format(TIME_FORMAT)),
        ),
        Some(time) => (
            0,
            format!("purchased at {} outside the afternoon window", time.format(TIME_FORMAT)),
        ),
        None => {
            debug!(value = %receipt.purchase_time, "purchase time is not HH:MM");
            (0, "purchase time could not be parsed".to_string())
        }
    };

    ScoreComponent {
        rule: ScoringRule::AfternoonWindow,
        points,
        notes,
    }
}
