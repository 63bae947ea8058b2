//! Raw Backend Entities
//!
//! Deserialization shapes for the funding backend's JSON responses.
//! These mirror the wire format exactly; everything the dashboard renders
//! goes through the projections in [`crate::model::derive`] first.
//!
//! The backend is loosely typed: money fields may arrive as JSON numbers,
//! numeric strings, arbitrary strings ("N/A", "TBD") or null, so they are
//! kept as `serde_json::Value` until derivation coerces them.

use serde::Deserialize;
use serde_json::Value;

/// A funding round as returned by `GET /funding-rounds`
#[derive(Debug, Clone, Deserialize)]
pub struct RawFundingRound {
    /// Unique identifier, stable across re-fetches
    pub id: String,
    /// Round name (e.g., "Series A")
    pub name: String,
    /// Owning company name; may be absent for orphaned rounds
    #[serde(default)]
    pub company: Option<String>,
    /// When the round opened (ISO 8601)
    #[serde(default)]
    pub opened_date: Option<String>,
    /// When the round closes (ISO 8601)
    #[serde(default)]
    pub closed_date: Option<String>,
    /// Funding target; number, numeric string, or junk
    #[serde(default)]
    pub target_funding: Option<Value>,
    /// Amount raised so far; number, numeric string, or junk
    #[serde(default)]
    pub money_raised: Option<Value>,
    /// Investments submitted against this round
    #[serde(default)]
    pub investments: Vec<RawInvestment>,
}

/// A single investment attached to a funding round
#[derive(Debug, Clone, Deserialize)]
pub struct RawInvestment {
    pub id: String,
    /// Investor display name; may be absent
    #[serde(default)]
    pub investor_name: Option<String>,
    /// Invested amount; same loose typing as round money fields
    #[serde(default)]
    pub amount: Option<Value>,
    /// Lifecycle state: "pending", "accepted", "rejected"
    #[serde(default)]
    pub state: Option<String>,
}

impl RawInvestment {
    /// Whether this investment has been accepted by the round owner.
    ///
    /// Only accepted investments are attached to round records.
    pub fn is_accepted(&self) -> bool {
        self.state
            .as_deref()
            .map(|s| s.eq_ignore_ascii_case("accepted"))
            .unwrap_or(false)
    }
}

/// A platform user as returned by `GET /people`
#[derive(Debug, Clone, Deserialize)]
pub struct RawPerson {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Platform role: "startup", "investor", "admin"
    #[serde(default)]
    pub role: Option<String>,
    /// Company affiliation; may be absent
    #[serde(default)]
    pub company: Option<String>,
    /// URL of the avatar asset, fetched separately after the people load
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_round_with_loose_money_fields() {
        let json = r#"{
            "id": "r-1",
            "name": "Seed",
            "target_funding": 100000,
            "money_raised": "N/A",
            "investments": [
                {"id": "i-1", "investor_name": "Ada", "amount": 5000, "state": "accepted"},
                {"id": "i-2", "state": "pending"}
            ]
        }"#;

        let round: RawFundingRound = serde_json::from_str(json).unwrap();
        assert_eq!(round.id, "r-1");
        assert!(round.company.is_none());
        assert!(round.target_funding.as_ref().unwrap().is_number());
        assert!(round.money_raised.as_ref().unwrap().is_string());
        assert_eq!(round.investments.len(), 2);
        assert!(round.investments[0].is_accepted());
        assert!(!round.investments[1].is_accepted());
    }

    #[test]
    fn test_deserialize_person_with_missing_fields() {
        let person: RawPerson = serde_json::from_str(r#"{"id": "p-1"}"#).unwrap();
        assert_eq!(person.id, "p-1");
        assert!(person.email.is_none());
        assert!(person.avatar_url.is_none());
    }

    #[test]
    fn test_accepted_is_case_insensitive() {
        let inv: RawInvestment =
            serde_json::from_str(r#"{"id": "i-1", "state": "Accepted"}"#).unwrap();
        assert!(inv.is_accepted());
    }
}
