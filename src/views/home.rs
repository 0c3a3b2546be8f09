use actix_web::{HttpResponse, http::StatusCode, web};
use maud::html;

use super::layout::{back_link, html_response, page};
use super::status::RequestStatus;
use crate::client::PayrollApi;
use crate::model::employee::{Employee, EmployeeId};
use crate::utils::{session::SessionId, view_state::ViewStateStore};

pub async fn home_page(store: web::Data<ViewStateStore>, session: SessionId) -> HttpResponse {
    let notice = store.take_notice(&session).await;

    let body = html! {
        div class="text-center" {
            h2 { "Home Menu" }
            p { "Please choose an option:" }
            div class="row g-3 justify-content-center" {
                div class="col-12 col-sm-4" {
                    a href="/manage" class="btn btn-primary w-100" { "Manage Employees" }
                }
                div class="col-12 col-sm-4" {
                    a href="/allemployees" class="btn btn-info w-100" { "View All Employees" }
                }
                div class="col-12 col-sm-4" {
                    a href="/reports" class="btn btn-warning w-100" { "Monthly Reports" }
                }
            }
        }
    };

    html_response(StatusCode::OK, page("Home", notice.as_ref(), body))
}

pub async fn not_found_page() -> HttpResponse {
    let body = html! {
        h2 { "404 - Page Not Found" }
        p { a href="/" { "Go back home" } }
    };
    html_response(StatusCode::NOT_FOUND, page("Not found", None, body))
}

/// Shown when an id is absent from the employee list.
pub fn employee_not_found(id: &str) -> HttpResponse {
    let body = html! {
        h2 { "Employee not found" }
        p { "No employee with id " code { (id) } " exists. It may have been deleted." }
        a href="/allemployees" class="btn btn-secondary" { "Back to employees" }
    };
    html_response(StatusCode::NOT_FOUND, page("Employee not found", None, body))
}

/// Looks the employee up in the full list. `Err` carries the page to send
/// instead: 404 for an unknown id, 502 when the list could not be fetched.
pub async fn resolve_employee(
    api: &dyn PayrollApi,
    id: &EmployeeId,
    title: &str,
) -> Result<Employee, HttpResponse> {
    match api.find_employee(id).await {
        Ok(Some(employee)) => Ok(employee),
        Ok(None) => Err(employee_not_found(id.as_str())),
        Err(e) => {
            let status: RequestStatus<()> = RequestStatus::from_result(Err(e), "employee");
            let body = html! {
                h2 { (title) }
                (back_link("/allemployees"))
                (status.render(|_| html! {}))
            };
            Err(html_response(StatusCode::BAD_GATEWAY, page(title, None, body)))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::client::memory::InMemoryApi;
    use crate::test_support::test_app;
    use actix_web::{http::StatusCode, test};
    use std::sync::Arc;

    #[actix_web::test]
    async fn home_links_to_the_three_workflows() {
        let api = Arc::new(InMemoryApi::default());
        let app = test_app!(api);

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
        assert!(body.contains(r#"href="/manage""#));
        assert!(body.contains(r#"href="/allemployees""#));
        assert!(body.contains(r#"href="/reports""#));
        assert!(api.calls().is_empty());
    }

    #[actix_web::test]
    async fn unknown_route_renders_not_found_page() {
        let api = Arc::new(InMemoryApi::default());
        let app = test_app!(api);

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/nowhere").to_request()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
