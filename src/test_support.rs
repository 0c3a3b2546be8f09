//! Shared fixtures for handler tests.

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::test;

use crate::model::employee::{Employee, EmployeeId};
use crate::utils::session::SESSION_COOKIE;

/// Builds the full route table over an `Arc<InMemoryApi>` (the Arc is cloned,
/// so the caller can keep inspecting it).
macro_rules! test_app {
    ($api:expr) => {{
        let api: std::sync::Arc<dyn crate::client::PayrollApi> = $api.clone();
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(actix_web::middleware::from_fn(
                    crate::utils::session::session_middleware,
                ))
                .app_data(actix_web::web::Data::from(api))
                .app_data(actix_web::web::Data::new(
                    crate::utils::view_state::ViewStateStore::new(std::time::Duration::from_secs(
                        60,
                    )),
                ))
                .configure(crate::routes::configure)
                .default_service(actix_web::web::to(crate::views::home::not_found_page)),
        )
        .await
    }};
}

pub(crate) use test_app;

pub(crate) fn employee(id: &str, name: &str, role: &str, rate1: f64, rate2: f64) -> Employee {
    Employee {
        id: EmployeeId::from(id),
        name: name.to_string(),
        role: role.to_string(),
        pay_rate1: rate1,
        pay_rate2: rate2,
    }
}

pub(crate) fn staff() -> Vec<Employee> {
    vec![
        employee("e1", "Ana", "Cook", 10.0, 0.0),
        employee("e2", "Ben", "Driver", 12.5, 15.0),
    ]
}

pub(crate) async fn body_string(res: ServiceResponse) -> String {
    String::from_utf8(test::read_body(res).await.to_vec()).unwrap()
}

pub(crate) fn session_cookie(res: &ServiceResponse) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.into_owned())
        .expect("session cookie issued")
}

pub(crate) fn location(res: &ServiceResponse) -> &str {
    res.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// Number of `<tr>` rows inside the table body.
pub(crate) fn body_rows(html: &str) -> usize {
    html.split("<tbody>")
        .nth(1)
        .and_then(|rest| rest.split("</tbody>").next())
        .map(|tbody| tbody.matches("<tr").count())
        .unwrap_or(0)
}
