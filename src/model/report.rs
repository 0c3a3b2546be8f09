use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use strum_macros::{Display, EnumIter, FromRepr};

use super::employee::EmployeeId;
use super::number_or_zero;

/// Response of `GET /reports/monthly`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    #[serde(default)]
    pub results: Vec<MonthlyReportRow>,

    #[serde(default, deserialize_with = "number_or_zero")]
    pub total_expense: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReportRow {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub role: String,

    #[serde(default, deserialize_with = "number_or_zero")]
    pub total_hours: f64,

    #[serde(default, deserialize_with = "number_or_zero")]
    pub total_pay: f64,

    #[serde(default, deserialize_with = "number_or_zero")]
    pub total_deductions: f64,

    #[serde(default, deserialize_with = "number_or_zero")]
    pub net_pay: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, FromRepr)]
#[repr(u8)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u8>().ok().and_then(Self::from_repr)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeFilter {
    All,
    One(EmployeeId),
}

impl EmployeeFilter {
    pub const ALL: &'static str = "all";

    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == Self::ALL {
            Self::All
        } else {
            Self::One(EmployeeId::from(raw))
        }
    }

    pub fn as_param(&self) -> &str {
        match self {
            Self::All => Self::ALL,
            Self::One(id) => id.as_str(),
        }
    }
}

/// Parameters of one monthly report request. `None` leaves the choice of
/// period to the remote API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportQuery {
    pub employee: EmployeeFilter,
    pub month: Option<Month>,
    pub year: Option<i32>,
}

impl ReportQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("employeeId", self.employee.as_param().to_string())];
        if let Some(month) = self.month {
            params.push(("month", month.number().to_string()));
        }
        if let Some(year) = self.year {
            params.push(("year", year.to_string()));
        }
        params
    }
}

/// The report form as the user left it. Values stay as typed so the form can
/// be re-rendered verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportSelection {
    #[serde(default = "all_employees")]
    pub employee_id: String,

    #[serde(default)]
    pub month: String,

    #[serde(default)]
    pub year: String,
}

fn all_employees() -> String {
    EmployeeFilter::ALL.to_string()
}

impl ReportSelection {
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            employee_id: all_employees(),
            month: String::new(),
            year: today.year().to_string(),
        }
    }

    pub fn to_query(&self) -> ReportQuery {
        ReportQuery {
            employee: EmployeeFilter::parse(&self.employee_id),
            month: Month::parse(&self.month),
            year: self.year.trim().parse().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn months_are_numbered_from_one() {
        let numbers: Vec<u8> = Month::iter().map(Month::number).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<_>>());
        assert_eq!(Month::parse("3"), Some(Month::March));
        assert_eq!(Month::parse(""), None);
        assert_eq!(Month::parse("13"), None);
        assert_eq!(Month::March.to_string(), "March");
    }

    #[test]
    fn blank_month_and_year_are_left_out() {
        let selection = ReportSelection {
            employee_id: "all".into(),
            month: String::new(),
            year: String::new(),
        };

        assert_eq!(
            selection.to_query().params(),
            vec![("employeeId", "all".to_string())]
        );
    }

    #[test]
    fn full_selection_sends_every_param() {
        let selection = ReportSelection {
            employee_id: "e9".into(),
            month: "2".into(),
            year: "2025".into(),
        };

        assert_eq!(
            selection.to_query().params(),
            vec![
                ("employeeId", "e9".to_string()),
                ("month", "2".to_string()),
                ("year", "2025".to_string()),
            ]
        );
    }

    #[test]
    fn starting_selection_uses_current_year() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let selection = ReportSelection::starting(today);

        assert_eq!(selection.employee_id, "all");
        assert_eq!(selection.to_query().year, Some(2026));
        assert_eq!(selection.to_query().month, None);
    }

    #[test]
    fn decodes_report_rows() {
        let report: MonthlyReport = serde_json::from_value(serde_json::json!({
            "results": [{
                "name": "Ana", "role": "Cook", "totalHours": 8,
                "totalPay": 80, "totalDeductions": 5, "netPay": 75
            }],
            "totalExpense": 75
        }))
        .unwrap();

        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].net_pay, 75.0);
        assert_eq!(report.total_expense, 75.0);
    }
}
