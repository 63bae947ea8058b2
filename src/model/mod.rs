//! Domain Model
//!
//! Raw backend entities and their UI-ready record projections:
//! - [`entity`]: serde shapes for the funding backend's JSON
//! - [`record`]: denormalized records the table engine operates on
//! - [`derive`]: pure projection from raw entity to table record

pub mod derive;
pub mod entity;
pub mod record;

pub use derive::{derive_person, derive_round, derive_status};
pub use entity::{RawFundingRound, RawInvestment, RawPerson};
pub use record::{
    InvestorSummary, MoneyField, PersonRecord, RoundRecord, RoundStatus, MISSING_NAME_PLACEHOLDER,
    NUMERIC_SENTINEL,
};
