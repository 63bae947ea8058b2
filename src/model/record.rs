//! Table Records
//!
//! UI-ready projections of backend entities. A record carries the raw
//! fields the table renders verbatim plus the fields derived at load time
//! (round status, sentinel-normalized money values). Records are built in
//! bulk right after a fetch completes and replaced wholesale on the next
//! fetch; nothing mutates them in place.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::table::{SortValue, TableRow};

/// Marker substituted for money fields that fail numeric coercion.
///
/// Display logic must special-case this value; it never participates in
/// arithmetic or numeric comparison.
pub const NUMERIC_SENTINEL: &str = "N/A";

/// Placeholder substituted for absent nested names (company, investor).
pub const MISSING_NAME_PLACEHOLDER: &str = "Unknown";

/// A money amount that either parsed to a number or degraded to the sentinel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MoneyField {
    /// Parsed successfully; `raw` keeps the original representation for
    /// formatting, `value` is used for comparisons
    Amount { raw: String, value: f64 },
    /// Coercion failed; renders as [`NUMERIC_SENTINEL`]
    Unavailable,
}

impl MoneyField {
    /// Numeric value, if this field parsed
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MoneyField::Amount { value, .. } => Some(*value),
            MoneyField::Unavailable => None,
        }
    }

    /// Display string: the original representation, or the sentinel
    pub fn display(&self) -> &str {
        match self {
            MoneyField::Amount { raw, .. } => raw,
            MoneyField::Unavailable => NUMERIC_SENTINEL,
        }
    }
}

impl std::fmt::Display for MoneyField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Derived lifecycle status of a funding round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundStatus {
    /// Still accepting investments
    Ongoing,
    /// Closing date passed, or the target was reached
    Completed,
}

impl std::fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundStatus::Ongoing => write!(f, "ongoing"),
            RoundStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Accepted investment attached to a round record
#[derive(Debug, Clone, Serialize)]
pub struct InvestorSummary {
    pub id: String,
    pub investor_name: String,
    pub amount: MoneyField,
}

/// UI-ready funding round
#[derive(Debug, Clone, Serialize)]
pub struct RoundRecord {
    /// Stable identity; used as the table row key
    pub id: String,
    pub name: String,
    /// Owning company, or [`MISSING_NAME_PLACEHOLDER`]
    pub company: String,
    pub opened_date: Option<DateTime<Utc>>,
    pub closed_date: Option<DateTime<Utc>>,
    pub target_funding: MoneyField,
    pub money_raised: MoneyField,
    /// Derived at load time from closing date and money fields
    pub status: RoundStatus,
    /// Only investments in the accepted state
    pub investors: Vec<InvestorSummary>,
}

/// UI-ready person
#[derive(Debug, Clone, Serialize)]
pub struct PersonRecord {
    /// Stable identity; used as the table row key
    pub id: String,
    /// Full display name, or [`MISSING_NAME_PLACEHOLDER`]
    pub name: String,
    pub email: String,
    pub role: String,
    pub company: String,
    pub avatar_url: Option<String>,
}

impl TableRow for RoundRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.company]
    }

    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "name" => SortValue::Text(self.name.clone()),
            "company" => SortValue::Text(self.company.clone()),
            "opened_date" => date_sort_value(self.opened_date),
            "closed_date" => date_sort_value(self.closed_date),
            "target_funding" => money_sort_value(&self.target_funding),
            "money_raised" => money_sort_value(&self.money_raised),
            "status" => SortValue::Text(self.status.to_string()),
            _ => SortValue::Missing,
        }
    }

    fn sort_keys() -> &'static [&'static str] {
        &[
            "name",
            "company",
            "opened_date",
            "closed_date",
            "target_funding",
            "money_raised",
            "status",
        ]
    }

    fn default_sort_key() -> &'static str {
        "name"
    }
}

impl TableRow for PersonRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.role, &self.company]
    }

    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "name" => SortValue::Text(self.name.clone()),
            "email" => SortValue::Text(self.email.clone()),
            "role" => SortValue::Text(self.role.clone()),
            "company" => SortValue::Text(self.company.clone()),
            _ => SortValue::Missing,
        }
    }

    fn sort_keys() -> &'static [&'static str] {
        &["name", "email", "role", "company"]
    }

    fn default_sort_key() -> &'static str {
        "name"
    }
}

fn date_sort_value(date: Option<DateTime<Utc>>) -> SortValue {
    date.map(|d| SortValue::Date(d.timestamp_millis()))
        .unwrap_or(SortValue::Missing)
}

// The sentinel never enters numeric comparison; it sorts as Missing
fn money_sort_value(field: &MoneyField) -> SortValue {
    field
        .as_f64()
        .map(SortValue::Number)
        .unwrap_or(SortValue::Missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_field_display() {
        let parsed = MoneyField::Amount {
            raw: "100000".to_string(),
            value: 100000.0,
        };
        assert_eq!(parsed.display(), "100000");
        assert_eq!(parsed.as_f64(), Some(100000.0));

        assert_eq!(MoneyField::Unavailable.display(), NUMERIC_SENTINEL);
        assert_eq!(MoneyField::Unavailable.as_f64(), None);
    }

    #[test]
    fn test_money_field_keeps_original_representation() {
        // "1.5e6" stays "1.5e6" for display even though it parsed
        let parsed = MoneyField::Amount {
            raw: "1.5e6".to_string(),
            value: 1_500_000.0,
        };
        assert_eq!(parsed.display(), "1.5e6");
        assert_eq!(parsed.to_string(), "1.5e6");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RoundStatus::Ongoing).unwrap(),
            r#""ongoing""#
        );
        assert_eq!(RoundStatus::Completed.to_string(), "completed");
    }

    fn sample_round() -> RoundRecord {
        RoundRecord {
            id: "r-1".to_string(),
            name: "Series A".to_string(),
            company: "Acme".to_string(),
            opened_date: None,
            closed_date: None,
            target_funding: MoneyField::Amount {
                raw: "100000".to_string(),
                value: 100000.0,
            },
            money_raised: MoneyField::Unavailable,
            status: RoundStatus::Ongoing,
            investors: Vec::new(),
        }
    }

    #[test]
    fn test_round_sort_values_are_typed_per_column() {
        let round = sample_round();
        assert_eq!(
            round.sort_value("target_funding"),
            SortValue::Number(100000.0)
        );
        // Sentinel money fields compare as Missing, not as text
        assert_eq!(round.sort_value("money_raised"), SortValue::Missing);
        assert_eq!(round.sort_value("closed_date"), SortValue::Missing);
        assert_eq!(round.sort_value("status"), SortValue::Text("ongoing".into()));
        assert_eq!(round.sort_value("bogus"), SortValue::Missing);
    }

    #[test]
    fn test_round_search_fields() {
        let round = sample_round();
        assert_eq!(round.search_fields(), vec!["Series A", "Acme"]);
    }

    #[test]
    fn test_person_sort_keys_are_validated_set() {
        assert!(PersonRecord::sort_keys().contains(&"email"));
        assert_eq!(PersonRecord::default_sort_key(), "name");
    }
}
