use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use super::{ApiError, ApiResult, PayrollApi};
use crate::model::employee::{Employee, EmployeeId, EmployeePayload};
use crate::model::pay_summary::{DisbursementResult, PayPreview};
use crate::model::report::{MonthlyReport, ReportQuery};
use crate::model::work_log::{NewWorkLog, WorkLog};

/// Stand-in for the remote API that keeps everything in memory and records
/// each call as `"METHOD /path"`.
#[derive(Default)]
pub struct InMemoryApi {
    employees: Mutex<Vec<Employee>>,
    work_logs: Mutex<Vec<WorkLog>>,
    preview: Mutex<Option<PayPreview>>,
    report: Mutex<MonthlyReport>,
    report_queries: Mutex<Vec<ReportQuery>>,
    created_logs: Mutex<Vec<NewWorkLog>>,
    calls: Mutex<Vec<String>>,
    next_id: AtomicU32,
    offline: AtomicBool,
    reject_writes: AtomicBool,
}

impl InMemoryApi {
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        let api = Self::default();
        *api.employees.lock().unwrap() = employees;
        api
    }

    pub fn add_work_log(&self, log: WorkLog) {
        self.work_logs.lock().unwrap().push(log);
    }

    pub fn set_preview(&self, preview: PayPreview) {
        *self.preview.lock().unwrap() = Some(preview);
    }

    pub fn set_report(&self, report: MonthlyReport) {
        *self.report.lock().unwrap() = report;
    }

    /// Every following call fails like an unreachable server.
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    /// Reads keep working, every mutating call fails.
    pub fn reject_writes(&self) {
        self.reject_writes.store(true, Ordering::SeqCst);
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.employees.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn mutating_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| !c.starts_with("GET "))
            .collect()
    }

    pub fn created_logs(&self) -> Vec<NewWorkLog> {
        self.created_logs.lock().unwrap().clone()
    }

    pub fn report_queries(&self) -> Vec<ReportQuery> {
        self.report_queries.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str, path: String) -> ApiResult<()> {
        self.calls.lock().unwrap().push(format!("{method} {path}"));
        let rejected = method != "GET" && self.reject_writes.load(Ordering::SeqCst);
        if rejected || self.offline.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                method,
                url: path,
                status: 503,
                body: "unavailable".into(),
            });
        }
        Ok(())
    }

    fn not_found(path: String) -> ApiError {
        ApiError::Status {
            method: "GET",
            url: path,
            status: 404,
            body: "not found".into(),
        }
    }
}

#[async_trait]
impl PayrollApi for InMemoryApi {
    async fn list_employees(&self) -> ApiResult<Vec<Employee>> {
        self.record("GET", "/employees".into())?;
        Ok(self.employees())
    }

    async fn create_employee(&self, employee: &EmployeePayload) -> ApiResult<()> {
        self.record("POST", "/employees".into())?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.employees.lock().unwrap().push(Employee {
            id: EmployeeId::from(format!("new-{id}")),
            name: employee.name.clone(),
            role: employee.role.clone(),
            pay_rate1: employee.pay_rate1,
            pay_rate2: employee.pay_rate2,
        });
        Ok(())
    }

    async fn update_employee(&self, id: &EmployeeId, employee: &EmployeePayload) -> ApiResult<()> {
        self.record("PUT", format!("/employees/{id}"))?;
        let mut employees = self.employees.lock().unwrap();
        let row = employees
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or_else(|| Self::not_found(format!("/employees/{id}")))?;
        row.name = employee.name.clone();
        row.role = employee.role.clone();
        row.pay_rate1 = employee.pay_rate1;
        row.pay_rate2 = employee.pay_rate2;
        Ok(())
    }

    async fn delete_employee(&self, id: &EmployeeId) -> ApiResult<()> {
        self.record("DELETE", format!("/employees/{id}"))?;
        self.employees.lock().unwrap().retain(|e| &e.id != id);
        Ok(())
    }

    async fn list_work_logs(&self, employee_id: &EmployeeId) -> ApiResult<Vec<WorkLog>> {
        self.record("GET", format!("/worklogs/{employee_id}"))?;
        Ok(self
            .work_logs
            .lock()
            .unwrap()
            .iter()
            .filter(|log| log.employee_id.as_ref() == Some(employee_id))
            .cloned()
            .collect())
    }

    async fn create_work_log(&self, log: &NewWorkLog) -> ApiResult<()> {
        self.record("POST", "/worklogs".into())?;
        self.created_logs.lock().unwrap().push(log.clone());
        self.work_logs.lock().unwrap().push(WorkLog {
            id: None,
            employee_id: Some(log.employee_id.clone()),
            date: Some(log.date.date_naive()),
            hours_payrate1: log.hours_payrate1,
            hours_payrate2: log.hours_payrate2,
            deduction: log.deduction,
        });
        Ok(())
    }

    async fn preview_pay(&self, employee_id: &EmployeeId) -> ApiResult<PayPreview> {
        self.record("GET", format!("/preview-pay/{employee_id}"))?;
        self.preview
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| Self::not_found(format!("/preview-pay/{employee_id}")))
    }

    async fn disburse_pay(&self, employee_id: &EmployeeId) -> ApiResult<DisbursementResult> {
        self.record("POST", format!("/disburse-pay/{employee_id}"))?;
        let net_pay = self
            .preview
            .lock()
            .unwrap()
            .as_ref()
            .map(|p| p.net_pay)
            .unwrap_or_default();
        Ok(DisbursementResult { net_pay })
    }

    async fn monthly_report(&self, query: &ReportQuery) -> ApiResult<MonthlyReport> {
        self.record("GET", "/reports/monthly".into())?;
        self.report_queries.lock().unwrap().push(query.clone());
        Ok(self.report.lock().unwrap().clone())
    }
}
