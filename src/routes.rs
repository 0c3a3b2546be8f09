use crate::{
    api::daily_pay,
    views::{calculate, detail, home, manage, reports, roster, work_log},
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use anyhow::Context;

/// Per-IP budget shared by every route.
pub fn build_limiter(
    requests_per_min: u32,
) -> anyhow::Result<Governor<PeerIpKeyExtractor, NoOpMiddleware>> {
    let per_ms = if requests_per_min == 0 {
        1
    } else {
        (60_000 / requests_per_min as u64).max(1)
    };
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min.max(1))
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .context("invalid rate limit")?;
    Ok(Governor::new(&cfg))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home::home_page)))
        // /manage
        .service(
            web::resource("/manage")
                .route(web::get().to(manage::manage_page))
                .route(web::post().to(manage::save_employee)),
        )
        // /allemployees
        .service(web::resource("/allemployees").route(web::get().to(roster::roster_page)))
        // /employees/{id}/delete
        .service(
            web::resource("/employees/{id}/delete")
                .route(web::post().to(roster::delete_employee)),
        )
        // /details/{id}
        .service(web::resource("/details/{id}").route(web::get().to(detail::detail_page)))
        .service(
            web::scope("/worklog")
                // /worklog/{id}
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(work_log::work_log_page))
                        .route(web::post().to(work_log::review_work_log)),
                )
                // /worklog/{id}/confirm
                .service(
                    web::resource("/{id}/confirm")
                        .route(web::post().to(work_log::confirm_work_log)),
                ),
        )
        .service(
            web::scope("/calculate")
                // /calculate/{id}
                .service(web::resource("/{id}").route(web::get().to(calculate::calculate_page)))
                // /calculate/{id}/disburse
                .service(
                    web::resource("/{id}/disburse")
                        .route(web::post().to(calculate::disburse_pay)),
                ),
        )
        // /reports
        .service(
            web::resource("/reports")
                .route(web::get().to(reports::reports_page))
                .route(web::post().to(reports::generate_report)),
        )
        // /api/daily-pay
        .service(web::resource("/api/daily-pay").route(web::get().to(daily_pay::daily_pay)));
}
