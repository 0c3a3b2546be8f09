use crate::api::daily_pay::DailyPayResponse;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payroll Admin",
        version = "0.1.0",
        description = r#"
## Payroll administration UI

Server-rendered pages for managing employees, logging hours, disbursing pay
and reading monthly reports. Every figure comes from the remote payroll API.

The only JSON endpoint served here computes the daily pay preview, the same
figure the work-log form shows as hours are typed.
"#,
    ),
    paths(crate::api::daily_pay::daily_pay),
    components(schemas(DailyPayResponse)),
    tags((name = "Pay", description = "Pay preview helpers"))
)]
pub struct ApiDoc;
