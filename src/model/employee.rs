use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

use super::number_or_zero;

/// Identifier assigned by the remote API (`_id`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EmployeeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id", alias = "id")]
    pub id: EmployeeId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub role: String,

    #[serde(default, deserialize_with = "number_or_zero")]
    pub pay_rate1: f64,

    #[serde(default, deserialize_with = "number_or_zero")]
    pub pay_rate2: f64,
}

impl Employee {
    /// The rate-2 hours input is only offered when a second rate exists.
    pub fn has_second_rate(&self) -> bool {
        self.pay_rate2 > 0.0
    }
}

/// Body of `POST /employees` and `PUT /employees/:id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeePayload {
    pub name: String,
    pub role: String,
    pub pay_rate1: f64,
    pub pay_rate2: f64,
}
