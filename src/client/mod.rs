//! Access to the remote payroll API.
//!
//! Views only talk to [`PayrollApi`]; the server wires in [`HttpPayrollApi`]
//! and tests wire in an in-memory double.

pub mod http;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::employee::{Employee, EmployeeId, EmployeePayload};
use crate::model::pay_summary::{DisbursementResult, PayPreview};
use crate::model::report::{MonthlyReport, ReportQuery};
use crate::model::work_log::{NewWorkLog, WorkLog};

pub use http::HttpPayrollApi;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base url `{0}`")]
    BaseUrl(String),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{method} {url} returned {status}: {body}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
        body: String,
    },

    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;

#[async_trait]
pub trait PayrollApi: Send + Sync {
    async fn list_employees(&self) -> ApiResult<Vec<Employee>>;

    async fn create_employee(&self, employee: &EmployeePayload) -> ApiResult<()>;

    async fn update_employee(&self, id: &EmployeeId, employee: &EmployeePayload)
    -> ApiResult<()>;

    async fn delete_employee(&self, id: &EmployeeId) -> ApiResult<()>;

    async fn list_work_logs(&self, employee_id: &EmployeeId) -> ApiResult<Vec<WorkLog>>;

    async fn create_work_log(&self, log: &NewWorkLog) -> ApiResult<()>;

    async fn preview_pay(&self, employee_id: &EmployeeId) -> ApiResult<PayPreview>;

    async fn disburse_pay(&self, employee_id: &EmployeeId) -> ApiResult<DisbursementResult>;

    async fn monthly_report(&self, query: &ReportQuery) -> ApiResult<MonthlyReport>;

    /// There is no single-employee endpoint, so this filters the full list.
    /// `Ok(None)` means the id is not (or no longer) known to the API.
    async fn find_employee(&self, id: &EmployeeId) -> ApiResult<Option<Employee>> {
        let employees = self.list_employees().await?;
        Ok(employees.into_iter().find(|e| &e.id == id))
    }
}
