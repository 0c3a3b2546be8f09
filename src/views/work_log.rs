use actix_web::{HttpResponse, http::StatusCode, web};
use chrono::{DateTime, Utc};
use maud::{Markup, PreEscaped, html};
use serde::Deserialize;
use tracing::{error, info};

use super::components::{ConfirmDialog, plain_number};
use super::home::resolve_employee;
use super::layout::{CURRENCY, back_link, html_response, page, see_other};
use crate::client::PayrollApi;
use crate::model::employee::{Employee, EmployeeId};
use crate::model::work_log::NewWorkLog;
use crate::pay::{DailyPay, parse_amount};
use crate::utils::dates::parse_date;
use crate::utils::session::SessionId;
use crate::utils::view_state::{Notice, ViewStateStore};

const TITLE: &str = "Log Work Hours";

/// Recomputes the preview in place on every input event, with the same
/// lenient reading and two-decimal rounding the server uses.
const LIVE_PREVIEW_JS: &str = r#"
(() => {
  const form = document.getElementById('work-log-form');
  const out = document.getElementById('daily-pay-preview');
  if (!form || !out) return;
  const num = (v) => parseFloat(v) || 0;
  const field = (name) => (form.elements[name] ? num(form.elements[name].value) : 0);
  form.addEventListener('input', () => {
    const pay =
      field('hours_payrate1') * num(form.dataset.rate1) +
      field('hours_payrate2') * num(form.dataset.rate2) -
      field('deduction');
    const text = pay.toFixed(2);
    out.textContent = text === '-0.00' ? '0.00' : text;
  });
})();
"#;

/// Field values exactly as typed. Numbers are read leniently only when the
/// preview is computed or the log is sent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WorkLogForm {
    pub date: String,
    pub hours_payrate1: String,
    pub hours_payrate2: String,
    pub deduction: String,
}

impl Default for WorkLogForm {
    fn default() -> Self {
        Self {
            date: String::new(),
            hours_payrate1: String::new(),
            hours_payrate2: String::new(),
            deduction: "0".to_string(),
        }
    }
}

impl WorkLogForm {
    /// Rate-2 hours only count for employees who have a second rate; the
    /// field is not even shown otherwise.
    fn hours2(&self, employee: &Employee) -> f64 {
        if employee.has_second_rate() {
            parse_amount(&self.hours_payrate2)
        } else {
            0.0
        }
    }

    pub fn preview(&self, employee: &Employee) -> DailyPay {
        DailyPay {
            pay_rate1: employee.pay_rate1,
            pay_rate2: employee.pay_rate2,
            hours_payrate1: parse_amount(&self.hours_payrate1),
            hours_payrate2: self.hours2(employee),
            deduction: parse_amount(&self.deduction),
        }
    }

    /// A blank or unreadable date means "now".
    pub fn to_new_log(&self, employee: &Employee, now: DateTime<Utc>) -> NewWorkLog {
        let date = parse_date(&self.date)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|d| d.and_utc())
            .unwrap_or(now);

        NewWorkLog {
            employee_id: employee.id.clone(),
            date,
            hours_payrate1: parse_amount(&self.hours_payrate1),
            hours_payrate2: self.hours2(employee),
            deduction: parse_amount(&self.deduction),
        }
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("date", self.date.clone()),
            ("hours_payrate1", self.hours_payrate1.clone()),
            ("hours_payrate2", self.hours_payrate2.clone()),
            ("deduction", self.deduction.clone()),
        ]
    }
}

pub async fn work_log_page(
    api: web::Data<dyn PayrollApi>,
    store: web::Data<ViewStateStore>,
    session: SessionId,
    path: web::Path<String>,
    query: web::Query<WorkLogForm>,
) -> HttpResponse {
    let employee_id = EmployeeId::from(path.into_inner());
    let employee = match resolve_employee(api.get_ref(), &employee_id, TITLE).await {
        Ok(employee) => employee,
        Err(page) => return page,
    };
    let notice = store.take_notice(&session).await;

    html_response(
        StatusCode::OK,
        render(&employee, &query.into_inner(), None, notice.as_ref()),
    )
}

/// First step of saving: show what is about to be logged and ask.
pub async fn review_work_log(
    api: web::Data<dyn PayrollApi>,
    path: web::Path<String>,
    form: web::Form<WorkLogForm>,
) -> HttpResponse {
    let employee_id = EmployeeId::from(path.into_inner());
    let employee = match resolve_employee(api.get_ref(), &employee_id, TITLE).await {
        Ok(employee) => employee,
        Err(page) => return page,
    };
    let form = form.into_inner();
    let hours2 = if employee.has_second_rate() {
        form.hours_payrate2.as_str()
    } else {
        "0"
    };

    let dialog = ConfirmDialog {
        title: "Confirm Work Log",
        body: html! {
            p {
                "You are about to log " strong { (form.hours_payrate1) } " hours @ rate1 and "
                strong { (hours2) } " hours @ rate2 with a deduction of "
                strong { (CURRENCY) (form.deduction) } "."
                br;
                "The daily pay preview is " strong { (CURRENCY) (form.preview(&employee).to_string()) } "."
            }
            p { "Confirm to save?" }
        },
        confirm_label: "Confirm",
        confirm_action: format!("/worklog/{employee_id}/confirm"),
        confirm_fields: form.fields(),
        cancel_action: format!("/worklog/{employee_id}"),
        cancel_fields: form.fields(),
        danger: false,
    };

    html_response(
        StatusCode::OK,
        render(&employee, &form, Some(&dialog), None),
    )
}

pub async fn confirm_work_log(
    api: web::Data<dyn PayrollApi>,
    store: web::Data<ViewStateStore>,
    session: SessionId,
    path: web::Path<String>,
    form: web::Form<WorkLogForm>,
) -> HttpResponse {
    let employee_id = EmployeeId::from(path.into_inner());
    let employee = match resolve_employee(api.get_ref(), &employee_id, TITLE).await {
        Ok(employee) => employee,
        Err(page) => return page,
    };
    let form = form.into_inner();
    let log = form.to_new_log(&employee, Utc::now());

    match api.create_work_log(&log).await {
        Ok(()) => {
            info!(%employee_id, date = %log.date, "Work log added");
            store
                .push_notice(&session, Notice::info("Work log added successfully!"))
                .await;
            see_other(&format!("/details/{employee_id}"))
        }
        Err(e) => {
            error!(error = %e, %employee_id, "Failed to add work log");
            let notice = Notice::error("Could not save the work log. Please try again.");
            html_response(
                StatusCode::BAD_GATEWAY,
                render(&employee, &form, None, Some(&notice)),
            )
        }
    }
}

fn render(
    employee: &Employee,
    form: &WorkLogForm,
    dialog: Option<&ConfirmDialog>,
    notice: Option<&Notice>,
) -> Markup {
    let id = employee.id.as_str();

    let body = html! {
        h2 { "Log Work Hours - " (employee.name) }
        (back_link("/allemployees"))

        form id="work-log-form" method="post" action={ "/worklog/" (id) }
            data-rate1=(plain_number(employee.pay_rate1)) data-rate2=(plain_number(employee.pay_rate2)) {
            div class="row g-3" {
                div class="col-12 col-md-6" {
                    label class="form-label" for="date" { "Date" }
                    input type="date" class="form-control" id="date" name="date" value=(form.date);
                }
                div class="col-12 col-md-6" {
                    label class="form-label" for="hours_payrate1" {
                        "Hours @ Rate1 ( " (CURRENCY) (plain_number(employee.pay_rate1)) " )"
                    }
                    input type="number" step="any" class="form-control" id="hours_payrate1"
                        name="hours_payrate1" value=(form.hours_payrate1);
                }
                @if employee.has_second_rate() {
                    div class="col-12 col-md-6" {
                        label class="form-label" for="hours_payrate2" {
                            "Hours @ Rate2 ( " (CURRENCY) (plain_number(employee.pay_rate2)) " )"
                        }
                        input type="number" step="any" class="form-control" id="hours_payrate2"
                            name="hours_payrate2" value=(form.hours_payrate2);
                    }
                }
                div class="col-12 col-md-6" {
                    label class="form-label" for="deduction" { "Deduction (in " (CURRENCY) ", can be negative)" }
                    input type="number" step="any" class="form-control" id="deduction"
                        name="deduction" value=(form.deduction);
                }
            }

            div class="mt-3 p-2 border rounded bg-light" {
                strong { "Daily Pay Preview:" } " " (CURRENCY)
                span id="daily-pay-preview" { (form.preview(employee).to_string()) }
            }

            button type="submit" class="btn btn-primary mt-3" { "Save Work Log" }
        }

        @if let Some(dialog) = dialog {
            (dialog)
        }

        script { (PreEscaped(LIVE_PREVIEW_JS)) }
    };

    page(TITLE, notice, body)
}
