use actix_web::{HttpResponse, http::StatusCode, web};
use chrono::Utc;
use maud::html;
use strum::IntoEnumIterator;
use tracing::{error, info};

use super::components::{money, plain_number};
use super::layout::{CURRENCY, back_link, html_response, page, see_other};
use super::status::RequestStatus;
use crate::client::PayrollApi;
use crate::model::report::{EmployeeFilter, Month, ReportSelection};
use crate::utils::session::SessionId;
use crate::utils::view_state::{Notice, ViewStateStore};

pub async fn reports_page(
    api: web::Data<dyn PayrollApi>,
    store: web::Data<ViewStateStore>,
    session: SessionId,
) -> HttpResponse {
    let notice = store.take_notice(&session).await;
    let (selection, report) = store.report_state(&session).await;
    let selection = selection.unwrap_or_else(|| ReportSelection::starting(Utc::now().date_naive()));
    let report = report.unwrap_or_default();

    let employees = RequestStatus::from_result(api.list_employees().await, "employees");

    let body = html! {
        h2 { "Monthly Reports" }
        (back_link("/"))

        (employees.render(|_| html! {}))

        form method="post" action="/reports" class="row g-2 align-items-end mb-3" {
            div class="col-12 col-sm-4" {
                label for="employee_id" { "Employee" }
                select class="form-select" id="employee_id" name="employee_id" {
                    option value=(EmployeeFilter::ALL) selected[selection.employee_id == EmployeeFilter::ALL] {
                        "All Employees"
                    }
                    @if let Some(list) = employees.ready() {
                        @for emp in list {
                            @let id = emp.id.as_str();
                            option value=(id) selected[selection.employee_id == id] { (emp.name) }
                        }
                    }
                }
            }
            div class="col-12 col-sm-4 col-md-3" {
                label for="month" { "Month" }
                select class="form-select" id="month" name="month" {
                    option value="" selected[selection.month.is_empty()] { "(current)" }
                    @for month in Month::iter() {
                        @let value = month.number().to_string();
                        option value=(value) selected[selection.month == value] { (month.to_string()) }
                    }
                }
            }
            div class="col-12 col-sm-4 col-md-3" {
                label for="year" { "Year" }
                input type="number" class="form-control" id="year" name="year" value=(selection.year);
            }
            div class="col-12 col-md-2" {
                button type="submit" class="btn btn-primary w-100" { "Generate" }
            }
        }

        div class="table-responsive" {
            table class="table border border-3 border-dark table-striped table-hover" {
                thead class="table-dark" {
                    tr {
                        th { "Employee" }
                        th { "Role" }
                        th { "Hours" }
                        th { "Total Pay (" (CURRENCY) ")" }
                        th { "Deductions (" (CURRENCY) ")" }
                        th { "Net Pay (" (CURRENCY) ")" }
                    }
                }
                tbody {
                    @for row in &report.results {
                        tr {
                            td { (row.name) }
                            td { (row.role) }
                            td { (plain_number(row.total_hours)) }
                            td { (plain_number(row.total_pay)) }
                            td { (plain_number(row.total_deductions)) }
                            td { (plain_number(row.net_pay)) }
                        }
                    }
                    @if report.results.is_empty() {
                        tr {
                            td colspan="6" class="text-center" { "No results found." }
                        }
                    }
                }
            }
        }

        div class="mt-3 p-2 border border-2 rounded bg-light" {
            strong { "Total Expense: " (money(report.total_expense)) }
        }
    };

    let status = if employees.is_failed() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };
    html_response(status, page("Monthly Reports", notice.as_ref(), body))
}

/// Replaces the displayed report on success; keeps the previous one otherwise.
pub async fn generate_report(
    api: web::Data<dyn PayrollApi>,
    store: web::Data<ViewStateStore>,
    session: SessionId,
    form: web::Form<ReportSelection>,
) -> HttpResponse {
    let selection = form.into_inner();
    let query = selection.to_query();

    match api.monthly_report(&query).await {
        Ok(report) => {
            info!(
                employee = query.employee.as_param(),
                rows = report.results.len(),
                "Monthly report generated"
            );
            store.remember_report(&session, selection, report).await;
        }
        Err(e) => {
            error!(error = %e, ?query, "Failed to generate monthly report");
            store.remember_selection(&session, selection).await;
            store
                .push_notice(
                    &session,
                    Notice::error("Could not generate the report. Please try again."),
                )
                .await;
        }
    }

    see_other("/reports")
}
