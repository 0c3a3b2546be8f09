pub mod employee;
pub mod pay_summary;
pub mod report;
pub mod work_log;

use serde::{Deserialize, Deserializer};

use crate::pay::parse_amount;

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Number(f64),
    Text(String),
}

/// Reads a JSON number that the remote API may also send as `null` or as a
/// numeric string. Anything missing or unreadable counts as zero.
pub(crate) fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<LenientNumber>::deserialize(deserializer)? {
        Some(LenientNumber::Number(n)) => n,
        Some(LenientNumber::Text(s)) => parse_amount(&s),
        None => 0.0,
    })
}
