//! Derivation Layer
//!
//! Pure projection from raw backend entities to table records. Every
//! function here takes one entity (plus an explicit "now" where status is
//! involved) and produces exactly one record. Missing or malformed input
//! degrades to placeholders; nothing in this module fails or panics.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::model::entity::{RawFundingRound, RawPerson};
use crate::model::record::{
    InvestorSummary, MoneyField, PersonRecord, RoundRecord, RoundStatus, MISSING_NAME_PLACEHOLDER,
};

/// Project one raw funding round into a [`RoundRecord`].
///
/// `now` is threaded explicitly so derivation stays deterministic for a
/// given instant; callers pass `Utc::now()` once per fetch.
pub fn derive_round(raw: &RawFundingRound, now: DateTime<Utc>) -> RoundRecord {
    let target_funding = coerce_money(raw.target_funding.as_ref());
    let money_raised = coerce_money(raw.money_raised.as_ref());
    let closed_date = parse_date(raw.closed_date.as_deref());

    let status = derive_status(
        closed_date,
        money_raised.as_f64(),
        target_funding.as_f64(),
        now,
    );

    // Only accepted investments travel with the record
    let investors = raw
        .investments
        .iter()
        .filter(|inv| inv.is_accepted())
        .map(|inv| InvestorSummary {
            id: inv.id.clone(),
            investor_name: inv
                .investor_name
                .clone()
                .unwrap_or_else(|| MISSING_NAME_PLACEHOLDER.to_string()),
            amount: coerce_money(inv.amount.as_ref()),
        })
        .collect();

    RoundRecord {
        id: raw.id.clone(),
        name: raw.name.clone(),
        company: raw
            .company
            .clone()
            .unwrap_or_else(|| MISSING_NAME_PLACEHOLDER.to_string()),
        opened_date: parse_date(raw.opened_date.as_deref()),
        closed_date,
        target_funding,
        money_raised,
        status,
        investors,
    }
}

/// Project one raw person into a [`PersonRecord`].
pub fn derive_person(raw: &RawPerson) -> PersonRecord {
    let name = match (raw.first_name.as_deref(), raw.last_name.as_deref()) {
        (Some(first), Some(last)) => format!("{} {}", first, last),
        (Some(first), None) => first.to_string(),
        (None, Some(last)) => last.to_string(),
        (None, None) => MISSING_NAME_PLACEHOLDER.to_string(),
    };

    PersonRecord {
        id: raw.id.clone(),
        name,
        email: raw.email.clone().unwrap_or_default(),
        role: raw.role.clone().unwrap_or_default(),
        company: raw
            .company
            .clone()
            .unwrap_or_else(|| MISSING_NAME_PLACEHOLDER.to_string()),
        avatar_url: raw.avatar_url.clone(),
    }
}

/// Derive round status from its closing date and money fields.
///
/// `Completed` when the closing date has passed, or when both money fields
/// are valid numbers and the raised amount meets the target. A sentinel on
/// either money field removes the target comparison from the decision;
/// the closing date alone decides.
pub fn derive_status(
    closed_date: Option<DateTime<Utc>>,
    money_raised: Option<f64>,
    target_funding: Option<f64>,
    now: DateTime<Utc>,
) -> RoundStatus {
    if let Some(closed) = closed_date {
        if closed < now {
            return RoundStatus::Completed;
        }
    }

    if let (Some(raised), Some(target)) = (money_raised, target_funding) {
        if raised >= target {
            return RoundStatus::Completed;
        }
    }

    RoundStatus::Ongoing
}

/// Coerce a loosely-typed JSON money field to [`MoneyField`].
///
/// JSON numbers pass through; strings are trimmed and parsed as f64.
/// Anything else (null, absent, junk strings, NaN) is the sentinel.
fn coerce_money(value: Option<&Value>) -> MoneyField {
    let value = match value {
        Some(v) => v,
        None => return MoneyField::Unavailable,
    };

    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.is_finite() => MoneyField::Amount {
                raw: n.to_string(),
                value: f,
            },
            _ => MoneyField::Unavailable,
        },
        Value::String(s) => {
            let trimmed = s.trim();
            match trimmed.parse::<f64>() {
                Ok(f) if f.is_finite() => MoneyField::Amount {
                    raw: trimmed.to_string(),
                    value: f,
                },
                _ => MoneyField::Unavailable,
            }
        }
        _ => MoneyField::Unavailable,
    }
}

/// Parse an ISO 8601 date string; anything unparseable is treated as absent.
fn parse_date(s: Option<&str>) -> Option<DateTime<Utc>> {
    let s = s?;
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            // Backend sometimes sends date-only values
            chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        })
}
