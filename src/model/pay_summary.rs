use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::number_or_zero;
use crate::utils::dates::lenient_datetime;

/// Unsaved summary from `GET /preview-pay/:employeeId`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayPreview {
    #[serde(default, deserialize_with = "number_or_zero")]
    pub total_hours: f64,

    #[serde(default, deserialize_with = "number_or_zero")]
    pub total_pay: f64,

    #[serde(default, deserialize_with = "number_or_zero")]
    pub deductions: f64,

    #[serde(default, deserialize_with = "number_or_zero")]
    pub net_pay: f64,

    #[serde(default, deserialize_with = "lenient_datetime")]
    pub last_pay_date: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "lenient_datetime")]
    pub preview_date: Option<DateTime<Utc>>,
}

/// Outcome of `POST /disburse-pay/:employeeId`. Only `netPay` is read; any
/// other summary fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisbursementResult {
    #[serde(default, deserialize_with = "number_or_zero")]
    pub net_pay: f64,
}
