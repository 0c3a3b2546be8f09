use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{ApiError, ApiResult, PayrollApi};
use crate::model::employee::{Employee, EmployeeId, EmployeePayload};
use crate::model::pay_summary::{DisbursementResult, PayPreview};
use crate::model::report::{MonthlyReport, ReportQuery};
use crate::model::work_log::{NewWorkLog, WorkLog};

/// `PayrollApi` over HTTP/JSON. One attempt per call: no retries, no timeout.
#[derive(Clone)]
pub struct HttpPayrollApi {
    base_url: Url,
    client: Client,
}

impl HttpPayrollApi {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let parsed = Url::parse(base_url).map_err(|_| ApiError::BaseUrl(base_url.to_string()))?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::BaseUrl(base_url.to_string()));
        }

        Ok(Self {
            base_url: parsed,
            client: Client::new(),
        })
    }

    /// Appends path segments to the base url; ids are percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::BaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(
        &self,
        method: &'static str,
        url: &Url,
        request: RequestBuilder,
    ) -> ApiResult<Response> {
        debug!(method, url = %url, "Calling payroll API");

        let response = request.send().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            method,
            url: url.to_string(),
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(url: &Url, response: Response) -> ApiResult<T> {
        response.json::<T>().await.map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        let response = self.send("GET", &url, self.client.get(url.clone())).await?;
        Self::decode(&url, response).await
    }
}

#[async_trait]
impl PayrollApi for HttpPayrollApi {
    async fn list_employees(&self) -> ApiResult<Vec<Employee>> {
        self.get_json(self.endpoint(&["employees"])?).await
    }

    async fn create_employee(&self, employee: &EmployeePayload) -> ApiResult<()> {
        let url = self.endpoint(&["employees"])?;
        let request = self.client.post(url.clone()).json(employee);
        self.send("POST", &url, request).await?;
        Ok(())
    }

    async fn update_employee(&self, id: &EmployeeId, employee: &EmployeePayload) -> ApiResult<()> {
        let url = self.endpoint(&["employees", id.as_str()])?;
        let request = self.client.put(url.clone()).json(employee);
        self.send("PUT", &url, request).await?;
        Ok(())
    }

    async fn delete_employee(&self, id: &EmployeeId) -> ApiResult<()> {
        let url = self.endpoint(&["employees", id.as_str()])?;
        self.send("DELETE", &url, self.client.delete(url.clone())).await?;
        Ok(())
    }

    async fn list_work_logs(&self, employee_id: &EmployeeId) -> ApiResult<Vec<WorkLog>> {
        self.get_json(self.endpoint(&["worklogs", employee_id.as_str()])?)
            .await
    }

    async fn create_work_log(&self, log: &NewWorkLog) -> ApiResult<()> {
        let url = self.endpoint(&["worklogs"])?;
        let request = self.client.post(url.clone()).json(log);
        self.send("POST", &url, request).await?;
        Ok(())
    }

    async fn preview_pay(&self, employee_id: &EmployeeId) -> ApiResult<PayPreview> {
        self.get_json(self.endpoint(&["preview-pay", employee_id.as_str()])?)
            .await
    }

    async fn disburse_pay(&self, employee_id: &EmployeeId) -> ApiResult<DisbursementResult> {
        let url = self.endpoint(&["disburse-pay", employee_id.as_str()])?;
        let response = self.send("POST", &url, self.client.post(url.clone())).await?;
        Self::decode(&url, response).await
    }

    async fn monthly_report(&self, query: &ReportQuery) -> ApiResult<MonthlyReport> {
        let mut url = self.endpoint(&["reports", "monthly"])?;
        url.query_pairs_mut().extend_pairs(query.params());
        self.get_json(url).await
    }
}
