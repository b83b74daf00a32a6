use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ClientStatus, LeadSource};

/// A client of the studio: a lead, an academic contact, or a paying customer.
///
/// `lifetime_value` is derived state. It is only ever written by the
/// lifetime-value recompute batch, which sets it to the sum of final amounts
/// over the client's completed projects.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Client {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub institution: Option<String>,
    pub department: Option<String>,
    pub title: Option<String>,
    pub field_of_study: Option<String>,
    pub status: ClientStatus,
    pub lead_source: LeadSource,
    pub lifetime_value: Decimal,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_contact: Option<DateTime<Utc>>,
}

impl Client {
    /// First and last name joined for display.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
