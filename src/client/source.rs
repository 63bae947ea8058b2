//! Record Source Seam
//!
//! Trait boundary between the view tier and wherever records come from.
//! Production uses [`BackendClient`]; the demo binary and router tests use
//! [`FixtureSource`] with canned entities.

use async_trait::async_trait;

use crate::client::backend::{BackendClient, BackendError};
use crate::model::entity::{RawFundingRound, RawPerson};

/// Asynchronous source of backend entity collections
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the full funding-round collection
    async fn fetch_rounds(&self) -> Result<Vec<RawFundingRound>, BackendError>;

    /// Fetch the full people collection
    async fn fetch_people(&self) -> Result<Vec<RawPerson>, BackendError>;
}

#[async_trait]
impl RecordSource for BackendClient {
    async fn fetch_rounds(&self) -> Result<Vec<RawFundingRound>, BackendError> {
        BackendClient::fetch_rounds(self).await
    }

    async fn fetch_people(&self) -> Result<Vec<RawPerson>, BackendError> {
        BackendClient::fetch_people(self).await
    }
}

/// In-memory source serving canned entities
pub struct FixtureSource {
    rounds: Vec<RawFundingRound>,
    people: Vec<RawPerson>,
    fail: bool,
}

impl FixtureSource {
    /// Source returning the given collections
    pub fn new(rounds: Vec<RawFundingRound>, people: Vec<RawPerson>) -> Self {
        Self {
            rounds,
            people,
            fail: false,
        }
    }

    /// Source whose every fetch fails, for exercising the empty state
    pub fn failing() -> Self {
        Self {
            rounds: Vec::new(),
            people: Vec::new(),
            fail: true,
        }
    }

    /// A small, representative dataset for the demo binary and tests
    pub fn with_sample_data() -> Self {
        let rounds: Vec<RawFundingRound> = serde_json::from_value(serde_json::json!([
            {
                "id": "r-1",
                "name": "Seed",
                "company": "Heliotrope Energy",
                "opened_date": "2025-09-01T00:00:00Z",
                "closed_date": "2026-03-01T00:00:00Z",
                "target_funding": 500000,
                "money_raised": 520000,
                "investments": [
                    {"id": "i-1", "investor_name": "Ada Lovelace", "amount": 300000, "state": "accepted"},
                    {"id": "i-2", "investor_name": "Grace Hopper", "amount": 220000, "state": "accepted"},
                    {"id": "i-3", "investor_name": "Anon", "amount": 50000, "state": "pending"}
                ]
            },
            {
                "id": "r-2",
                "name": "Series A",
                "company": "Heliotrope Energy",
                "opened_date": "2026-05-01T00:00:00Z",
                "closed_date": "2027-05-01T00:00:00Z",
                "target_funding": 3000000,
                "money_raised": 750000,
                "investments": []
            },
            {
                "id": "r-3",
                "name": "Seed",
                "company": "Marigold Labs",
                "opened_date": "2026-01-15T00:00:00Z",
                "closed_date": "2026-07-15T00:00:00Z",
                "target_funding": "250000",
                "money_raised": "N/A",
                "investments": [
                    {"id": "i-4", "investor_name": "Edsger Dijkstra", "amount": "100000", "state": "accepted"}
                ]
            },
            {
                "id": "r-4",
                "name": "Bridge",
                "opened_date": "2026-06-01T00:00:00Z",
                "target_funding": 120000,
                "money_raised": 15000,
                "investments": []
            }
        ]))
        .expect("sample rounds are valid");

        let people: Vec<RawPerson> = serde_json::from_value(serde_json::json!([
            {"id": "p-1", "first_name": "Ada", "last_name": "Lovelace",
             "email": "ada@invest.example", "role": "investor",
             "company": "Analytical Capital", "avatar_url": "http://localhost:9000/avatars/p-1.png"},
            {"id": "p-2", "first_name": "Grace", "last_name": "Hopper",
             "email": "grace@invest.example", "role": "investor",
             "company": "Compiler Ventures"},
            {"id": "p-3", "first_name": "Radia", "last_name": "Perlman",
             "email": "radia@heliotrope.example", "role": "startup",
             "company": "Heliotrope Energy"},
            {"id": "p-4", "email": "admin@fundboard.example", "role": "admin"}
        ]))
        .expect("sample people are valid");

        Self::new(rounds, people)
    }
}

#[async_trait]
impl RecordSource for FixtureSource {
    async fn fetch_rounds(&self) -> Result<Vec<RawFundingRound>, BackendError> {
        if self.fail {
            return Err(BackendError::Unavailable);
        }
        Ok(self.rounds.clone())
    }

    async fn fetch_people(&self) -> Result<Vec<RawPerson>, BackendError> {
        if self.fail {
            return Err(BackendError::Unavailable);
        }
        Ok(self.people.clone())
    }
}
