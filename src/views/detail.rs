use actix_web::{HttpResponse, http::StatusCode, web};
use maud::html;

use super::components::plain_number;
use super::home::employee_not_found;
use super::layout::{CURRENCY, back_link, html_response, page};
use super::status::RequestStatus;
use crate::client::PayrollApi;
use crate::model::employee::EmployeeId;
use crate::utils::dates::display_date;
use crate::utils::session::SessionId;
use crate::utils::view_state::ViewStateStore;

pub async fn detail_page(
    api: web::Data<dyn PayrollApi>,
    store: web::Data<ViewStateStore>,
    session: SessionId,
    path: web::Path<String>,
) -> HttpResponse {
    let employee_id = EmployeeId::from(path.into_inner());
    let notice = store.take_notice(&session).await;

    // both reads are independent and race freely
    let (employee, logs) = futures::join!(
        api.find_employee(&employee_id),
        api.list_work_logs(&employee_id)
    );

    let employee = match employee {
        Ok(Some(employee)) => employee,
        Ok(None) => return employee_not_found(employee_id.as_str()),
        Err(e) => {
            let status: RequestStatus<()> = RequestStatus::from_result(Err(e), "employee");
            let body = html! {
                h2 { "Employee Details" }
                (back_link("/allemployees"))
                (status.render(|_| html! {}))
            };
            return html_response(
                StatusCode::BAD_GATEWAY,
                page("Employee Details", notice.as_ref(), body),
            );
        }
    };
    let logs = RequestStatus::from_result(logs, "work logs");

    let body = html! {
        h2 { "Employee Details - " em { (employee.name) } }
        (back_link("/allemployees"))

        (logs.render(|logs| html! {
            div class="table-responsive" {
                table class="table border border-3 border-danger table-hover" {
                    thead class="table-dark" {
                        tr {
                            th { "Date" }
                            th { "Hours @ Rate1" }
                            th { "Hours @ Rate2" }
                            th { "Deduction (" (CURRENCY) ")" }
                            th { "Daily Pay (" (CURRENCY) ")" }
                        }
                    }
                    tbody {
                        @for log in logs {
                            tr {
                                td { (display_date(log.date)) }
                                td { (plain_number(log.hours_payrate1)) }
                                td { (plain_number(log.hours_payrate2)) }
                                td { (plain_number(log.deduction)) }
                                td class="daily-pay" { (log.daily_pay(&employee).to_string()) }
                            }
                        }
                        @if logs.is_empty() {
                            tr {
                                td colspan="5" class="text-center" { "No work logs found." }
                            }
                        }
                    }
                }
            }
        }))
    };

    let status = if logs.is_failed() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };
    html_response(status, page("Employee Details", notice.as_ref(), body))
}

#[cfg(test)]
mod tests {
    use crate::client::memory::InMemoryApi;
    use crate::model::employee::EmployeeId;
    use crate::model::work_log::WorkLog;
    use crate::test_support::{body_rows, body_string, staff, test_app};
    use actix_web::{http::StatusCode, test};
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn log(employee: &str, day: u32, h1: f64, h2: f64, deduction: f64) -> WorkLog {
        WorkLog {
            id: Some(format!("{employee}-{day}")),
            employee_id: Some(EmployeeId::from(employee)),
            date: NaiveDate::from_ymd_opt(2025, 3, day),
            hours_payrate1: h1,
            hours_payrate2: h2,
            deduction,
        }
    }

    #[actix_web::test]
    async fn shows_daily_pay_per_log() {
        let api = Arc::new(InMemoryApi::with_employees(staff()));
        api.add_work_log(log("e1", 3, 8.0, 0.0, 5.0));
        api.add_work_log(log("e2", 3, 4.0, 2.0, 0.0));
        api.add_work_log(log("e2", 4, 6.0, 0.0, -2.5));
        let app = test_app!(api);

        let res = test::call_service(&app, test::TestRequest::get().uri("/details/e1").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_string(res).await;
        assert!(body.contains("Employee Details - <em>Ana</em>"));
        assert_eq!(body_rows(&body), 1);
        assert!(body.contains("<td>2025-03-03</td>"));
        assert!(body.contains(r#"<td class="daily-pay">75.00</td>"#));

        let res = test::call_service(&app, test::TestRequest::get().uri("/details/e2").to_request()).await;
        let body = body_string(res).await;
        assert_eq!(body_rows(&body), 2);
        // 4 × 12.5 + 2 × 15
        assert!(body.contains(r#"<td class="daily-pay">80.00</td>"#));
        // 6 × 12.5 + 2.5
        assert!(body.contains(r#"<td class="daily-pay">77.50</td>"#));
    }

    #[actix_web::test]
    async fn empty_history_renders_placeholder_row() {
        let api = Arc::new(InMemoryApi::with_employees(staff()));
        let app = test_app!(api);

        let res = test::call_service(&app, test::TestRequest::get().uri("/details/e1").to_request()).await;
        let body = body_string(res).await;
        assert_eq!(body_rows(&body), 1);
        assert!(body.contains("No work logs found."));
    }

    #[actix_web::test]
    async fn unknown_employee_is_not_found() {
        let api = Arc::new(InMemoryApi::with_employees(staff()));
        let app = test_app!(api);

        let res = test::call_service(&app, test::TestRequest::get().uri("/details/gone").to_request()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(body_string(res).await.contains("Employee not found"));
    }

    #[actix_web::test]
    async fn unreachable_api_shows_banner() {
        let api = Arc::new(InMemoryApi::with_employees(staff()));
        api.go_offline();
        let app = test_app!(api);

        let res = test::call_service(&app, test::TestRequest::get().uri("/details/e1").to_request()).await;
        assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
        assert!(body_string(res).await.contains("Could not load employee"));
    }
}
