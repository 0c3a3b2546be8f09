use actix_web::{HttpResponse, http::StatusCode, web};
use maud::html;
use serde::Deserialize;
use tracing::{error, info};

use super::components::{money, plain_number};
use super::home::resolve_employee;
use super::layout::{CURRENCY, back_link, html_response, page, see_other};
use super::status::RequestStatus;
use crate::client::PayrollApi;
use crate::model::employee::EmployeeId;
use crate::pay::format_amount;
use crate::utils::dates::{display_date, display_datetime};
use crate::utils::session::SessionId;
use crate::utils::view_state::{Notice, ViewStateStore};

const TITLE: &str = "Calculate Pay";

#[derive(Debug, Default, Deserialize)]
pub struct CalculateQuery {
    #[serde(default)]
    pub preview: bool,
}

pub async fn calculate_page(
    api: web::Data<dyn PayrollApi>,
    store: web::Data<ViewStateStore>,
    session: SessionId,
    path: web::Path<String>,
    query: web::Query<CalculateQuery>,
) -> HttpResponse {
    let employee_id = EmployeeId::from(path.into_inner());
    let employee = match resolve_employee(api.get_ref(), &employee_id, TITLE).await {
        Ok(employee) => employee,
        Err(page) => return page,
    };
    let notice = store.take_notice(&session).await;

    let preview = if query.preview {
        RequestStatus::from_result(api.preview_pay(&employee_id).await, "pay preview")
    } else {
        RequestStatus::Idle
    };

    let id = employee_id.as_str();
    let body = html! {
        h2 { "Calculate Pay - " (employee.name) }
        (back_link("/allemployees"))

        div class="d-flex gap-2" {
            form method="get" action={ "/calculate/" (id) } {
                input type="hidden" name="preview" value="true";
                button type="submit" class="btn btn-info" { "Preview Pay" }
            }
            form method="post" action={ "/calculate/" (id) "/disburse" } {
                button type="submit" class="btn btn-success" { "Disburse Pay" }
            }
        }

        (preview.render(|p| html! {
            div class="alert alert-warning mt-3" data-status="ready" {
                h5 { "Pay Preview" }
                p { strong { "Total Hours:" } " " (plain_number(p.total_hours)) }
                p { strong { "Total Pay:" } " " (money(p.total_pay)) }
                p { strong { "Deductions:" } " " (money(p.deductions)) }
                p { strong { "Net Pay:" } " " (money(p.net_pay)) }
                p { strong { "Last Pay Date:" } " " (display_date(p.last_pay_date.map(|d| d.date_naive()))) }
                p { strong { "Preview Date:" } " " (display_datetime(p.preview_date)) }
            }
        }))
    };

    let status = if preview.is_failed() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };
    html_response(status, page(TITLE, notice.as_ref(), body))
}

pub async fn disburse_pay(
    api: web::Data<dyn PayrollApi>,
    store: web::Data<ViewStateStore>,
    session: SessionId,
    path: web::Path<String>,
) -> HttpResponse {
    let employee_id = EmployeeId::from(path.into_inner());

    match api.disburse_pay(&employee_id).await {
        Ok(result) => {
            let net_pay = format_amount(result.net_pay);
            info!(%employee_id, %net_pay, "Pay disbursed");
            store
                .push_notice(&session, Notice::info(format!("Pay of {CURRENCY}{net_pay} disbursed!")))
                .await;
            see_other(&format!("/details/{employee_id}"))
        }
        Err(e) => {
            error!(error = %e, %employee_id, "Failed to disburse pay");
            store
                .push_notice(
                    &session,
                    Notice::error("Could not disburse pay. Please try again."),
                )
                .await;
            see_other(&format!("/calculate/{employee_id}"))
        }
    }
}
