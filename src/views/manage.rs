use actix_web::{HttpResponse, http::StatusCode, web};
use maud::{Markup, html};
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

use super::components::{ConfirmDialog, plain_number};
use super::layout::{CURRENCY, back_link, html_response, page, see_other};
use super::status::RequestStatus;
use crate::client::PayrollApi;
use crate::model::employee::{Employee, EmployeeId, EmployeePayload};
use crate::pay::parse_amount;
use crate::utils::session::SessionId;
use crate::utils::view_state::{Notice, ViewStateStore};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill name & role")]
    MissingNameOrRole,

    #[error("Pay rate cannot be negative.")]
    NegativeRate,
}

/// The add/edit form exactly as typed. `editing_id` is set while an existing
/// row is being edited.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EmployeeForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub pay_rate1: String,
    #[serde(default)]
    pub pay_rate2: String,
    #[serde(default)]
    pub editing_id: Option<String>,
}

impl EmployeeForm {
    pub fn from_employee(employee: &Employee) -> Self {
        // zero rates come back as blank inputs
        let rate = |r: f64| if r == 0.0 { String::new() } else { plain_number(r) };
        Self {
            name: employee.name.clone(),
            role: employee.role.clone(),
            pay_rate1: rate(employee.pay_rate1),
            pay_rate2: rate(employee.pay_rate2),
            editing_id: Some(employee.id.to_string()),
        }
    }

    pub fn editing(&self) -> Option<EmployeeId> {
        self.editing_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(EmployeeId::from)
    }

    pub fn validate(&self) -> Result<EmployeePayload, FormError> {
        let name = self.name.trim();
        let role = self.role.trim();
        if name.is_empty() || role.is_empty() {
            return Err(FormError::MissingNameOrRole);
        }

        let pay_rate1 = parse_amount(&self.pay_rate1);
        let pay_rate2 = parse_amount(&self.pay_rate2);
        if pay_rate1 < 0.0 || pay_rate2 < 0.0 {
            return Err(FormError::NegativeRate);
        }

        Ok(EmployeePayload {
            name: name.to_string(),
            role: role.to_string(),
            pay_rate1,
            pay_rate2,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ManageQuery {
    pub edit: Option<String>,
    pub confirm_delete: Option<String>,
}

pub async fn manage_page(
    api: web::Data<dyn PayrollApi>,
    store: web::Data<ViewStateStore>,
    session: SessionId,
    query: web::Query<ManageQuery>,
) -> HttpResponse {
    let notice = store.take_notice(&session).await;
    let employees = RequestStatus::from_result(api.list_employees().await, "employees");

    let find = |id: &Option<String>| {
        let id = id.as_deref()?;
        employees.ready()?.iter().find(|e| e.id.as_str() == id).cloned()
    };
    let form = find(&query.edit)
        .map(|e| EmployeeForm::from_employee(&e))
        .unwrap_or_default();
    let pending_delete = find(&query.confirm_delete);

    let status = if employees.is_failed() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };
    html_response(
        status,
        render(&employees, &form, pending_delete.as_ref(), notice.as_ref()),
    )
}

pub async fn save_employee(
    api: web::Data<dyn PayrollApi>,
    form: web::Form<EmployeeForm>,
) -> HttpResponse {
    let form = form.into_inner();

    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(e) => {
            // nothing is sent; the form comes back as typed
            let employees = RequestStatus::from_result(api.list_employees().await, "employees");
            let notice = Notice::error(e.to_string());
            return html_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                render(&employees, &form, None, Some(&notice)),
            );
        }
    };

    let result = match form.editing() {
        Some(id) => api.update_employee(&id, &payload).await,
        None => api.create_employee(&payload).await,
    };

    match result {
        Ok(()) => {
            info!(name = %payload.name, editing = ?form.editing(), "Employee saved");
            see_other("/manage")
        }
        Err(e) => {
            error!(error = %e, "Failed to save employee");
            let employees = RequestStatus::from_result(api.list_employees().await, "employees");
            let notice = Notice::error("Could not save the employee. Please try again.");
            html_response(
                StatusCode::BAD_GATEWAY,
                render(&employees, &form, None, Some(&notice)),
            )
        }
    }
}

fn render(
    employees: &RequestStatus<Vec<Employee>>,
    form: &EmployeeForm,
    pending_delete: Option<&Employee>,
    notice: Option<&Notice>,
) -> Markup {
    let editing = form.editing().is_some();
    let dialog = pending_delete.map(|emp| ConfirmDialog {
        title: "Delete Employee",
        body: html! { "Are you sure you want to delete " strong { (emp.name) } "?" },
        confirm_label: "Delete",
        confirm_action: format!("/employees/{}/delete", emp.id),
        confirm_fields: vec![("return_to", "manage".to_string())],
        cancel_action: "/manage".to_string(),
        cancel_fields: vec![],
        danger: true,
    });

    let body = html! {
        h2 { "Manage Employees" }
        (back_link("/"))

        form method="post" action="/manage" class="p-3 mb-3 border rounded" {
            h5 { @if editing { "Edit Employee" } @else { "Add Employee" } }
            input type="hidden" name="editing_id" value=(form.editing_id.as_deref().unwrap_or_default());
            div class="row g-2" {
                div class="col" {
                    input class="form-control" name="name" placeholder="Name" value=(form.name);
                }
                div class="col" {
                    input class="form-control" name="role" placeholder="Role" value=(form.role);
                }
            }
            div class="row g-2 mt-2" {
                div class="col" {
                    input class="form-control" type="number" step="any" name="pay_rate1"
                        placeholder="Pay Rate 1" value=(form.pay_rate1);
                }
                div class="col" {
                    input class="form-control" type="number" step="any" name="pay_rate2"
                        placeholder="Pay Rate 2" value=(form.pay_rate2);
                }
            }
            button type="submit" class="btn btn-primary mt-2" {
                @if editing { "Update Employee" } @else { "Add Employee" }
            }
            @if editing {
                a href="/manage" class="btn btn-secondary ms-2 mt-2" { "Cancel" }
            }
        }

        (employees.render(|list| html! {
            table class="table border border-3 border-primary table-hover" {
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
                        tr data-employee=(emp.id.as_str()) {
                            td { (emp.name) }
                            td { (emp.role) }
                            td { (plain_number(emp.pay_rate1)) }
                            td { (plain_number(emp.pay_rate2)) }
                            td {
                                div class="d-flex flex-wrap gap-2 justify-content-center" {
                                    a class="btn btn-sm btn-info" href={ "/manage?edit=" (emp.id.as_str()) } { "Edit" }
                                    a class="btn btn-sm btn-danger" href={ "/manage?confirm_delete=" (emp.id.as_str()) } { "Delete" }
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

    page("Manage Employees", notice, body)
}
