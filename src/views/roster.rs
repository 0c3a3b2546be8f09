use actix_web::{HttpResponse, http::StatusCode, web};
use maud::html;
use serde::Deserialize;
use tracing::{error, info};

use super::components::{ConfirmDialog, plain_number};
use super::layout::{CURRENCY, back_link, html_response, page, see_other};
use super::status::RequestStatus;
use crate::client::PayrollApi;
use crate::model::employee::EmployeeId;
use crate::utils::session::SessionId;
use crate::utils::view_state::{Notice, ViewStateStore};

#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    pub confirm_delete: Option<String>,
}

/// Where a confirmed delete lands afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnTo {
    Manage,
    #[default]
    Roster,
}

impl ReturnTo {
    pub fn path(self) -> &'static str {
        match self {
            Self::Manage => "/manage",
            Self::Roster => "/allemployees",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub return_to: ReturnTo,
}

pub async fn roster_page(
    api: web::Data<dyn PayrollApi>,
    store: web::Data<ViewStateStore>,
    session: SessionId,
    query: web::Query<RosterQuery>,
) -> HttpResponse {
    let notice = store.take_notice(&session).await;
    let employees = RequestStatus::from_result(api.list_employees().await, "employees");

    let pending_delete = query.confirm_delete.as_deref().and_then(|id| {
        employees
            .ready()?
            .iter()
            .find(|e| e.id.as_str() == id)
            .cloned()
    });
    let dialog = pending_delete.map(|emp| ConfirmDialog {
        title: "Delete Employee",
        body: html! { "Are you sure you want to delete " strong { (emp.name) } "?" },
        confirm_label: "Confirm",
        confirm_action: format!("/employees/{}/delete", emp.id),
        confirm_fields: vec![("return_to", "roster".to_string())],
        cancel_action: ReturnTo::Roster.path().to_string(),
        cancel_fields: vec![],
        danger: true,
    });

    let body = html! {
        h2 { "All Employees" }
        (back_link("/"))

        (employees.render(|list| html! {
            div class="table-responsive" {
                table class="table border border-3 border-success table-striped table-hover" {
                    thead class="table-dark" {
                        tr {
                            th { "Name" }
                            th { "Role" }
                            th { "Rate 1 (" (CURRENCY) ")" }
                            th { "Rate 2 (" (CURRENCY) ")" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        @for emp in list {
                            @let id = emp.id.as_str();
                            tr data-employee=(id) {
                                td { (emp.name) }
                                td { (emp.role) }
                                td { (plain_number(emp.pay_rate1)) }
                                td { (plain_number(emp.pay_rate2)) }
                                td {
                                    div class="d-flex flex-wrap gap-2 justify-content-center" {
                                        a class="btn btn-info btn-sm" href={ "/details/" (id) } { "View" }
                                        a class="btn btn-secondary btn-sm" href={ "/worklog/" (id) } { "Log Hours" }
                                        a class="btn btn-warning btn-sm" href={ "/calculate/" (id) } { "Calculate Pay" }
                                        a class="btn btn-danger btn-sm" href={ "/allemployees?confirm_delete=" (id) } { "Delete" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }))

        @if let Some(dialog) = &dialog {
            (dialog)
        }
    };

    let status = if employees.is_failed() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };
    html_response(status, page("All Employees", notice.as_ref(), body))
}

/// Reached only from a confirmation dialog.
pub async fn delete_employee(
    api: web::Data<dyn PayrollApi>,
    store: web::Data<ViewStateStore>,
    session: SessionId,
    path: web::Path<String>,
    form: web::Form<DeleteForm>,
) -> HttpResponse {
    let employee_id = EmployeeId::from(path.into_inner());
    let return_to = form.return_to;

    match api.delete_employee(&employee_id).await {
        Ok(()) => info!(%employee_id, "Employee deleted"),
        Err(e) => {
            error!(error = %e, %employee_id, "Failed to delete employee");
            store
                .push_notice(
                    &session,
                    Notice::error("Could not delete the employee. Please try again."),
                )
                .await;
        }
    }

    see_other(return_to.path())
}
