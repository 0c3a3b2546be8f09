use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::employee::{Employee, EmployeeId};
use super::number_or_zero;
use crate::pay::DailyPay;
use crate::utils::dates::lenient_date;

/// One day of recorded hours for one employee, as returned by
/// `GET /worklogs/:employeeId`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkLog {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: Option<String>,

    #[serde(rename = "employeeId", default)]
    pub employee_id: Option<EmployeeId>,

    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "number_or_zero")]
    pub hours_payrate1: f64,

    #[serde(default, deserialize_with = "number_or_zero")]
    pub hours_payrate2: f64,

    #[serde(default, deserialize_with = "number_or_zero")]
    pub deduction: f64,
}

impl WorkLog {
    pub fn daily_pay(&self, employee: &Employee) -> DailyPay {
        DailyPay {
            pay_rate1: employee.pay_rate1,
            pay_rate2: employee.pay_rate2,
            hours_payrate1: self.hours_payrate1,
            hours_payrate2: self.hours_payrate2,
            deduction: self.deduction,
        }
    }
}

/// Body of `POST /worklogs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewWorkLog {
    #[serde(rename = "employeeId")]
    pub employee_id: EmployeeId,
    pub date: DateTime<Utc>,
    pub hours_payrate1: f64,
    pub hours_payrate2: f64,
    pub deduction: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ana() -> Employee {
        Employee {
            id: EmployeeId::from("e1"),
            name: "Ana".into(),
            role: "Cook".into(),
            pay_rate1: 10.0,
            pay_rate2: 0.0,
        }
    }

    #[test]
    fn decodes_timestamp_dates_and_computes_pay() {
        let log: WorkLog = serde_json::from_value(json!({
            "_id": "l1",
            "employeeId": "e1",
            "date": "2025-03-04T00:00:00.000Z",
            "hours_payrate1": 8,
            "hours_payrate2": 0,
            "deduction": 5
        }))
        .unwrap();

        assert_eq!(log.date, NaiveDate::from_ymd_opt(2025, 3, 4));
        assert_eq!(log.daily_pay(&ana()).to_string(), "75.00");
    }

    #[test]
    fn missing_fields_read_as_zero() {
        let log: WorkLog = serde_json::from_value(json!({ "date": "2025-03-04" })).unwrap();

        assert_eq!(log.hours_payrate1, 0.0);
        assert_eq!(log.deduction, 0.0);
        assert_eq!(log.daily_pay(&ana()).to_string(), "0.00");
    }

    #[test]
    fn new_log_uses_remote_field_names() {
        let log = NewWorkLog {
            employee_id: EmployeeId::from("e1"),
            date: NaiveDate::from_ymd_opt(2025, 3, 4)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
                .and_utc(),
            hours_payrate1: 8.0,
            hours_payrate2: 0.0,
            deduction: 5.0,
        };

        let body = serde_json::to_value(&log).unwrap();
        assert_eq!(body["employeeId"], "e1");
        assert_eq!(body["date"], "2025-03-04T00:00:00Z");
        assert_eq!(body["hours_payrate1"], 8.0);
    }
}
