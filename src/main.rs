use actix_web::middleware::{Logger, NormalizePath, from_fn};
use actix_web::web::{self, Data};
use actix_web::{App, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use std::sync::Arc;

mod api;
mod client;
mod config;
mod docs;
mod model;
mod pay;
mod routes;
mod utils;
mod views;

#[cfg(test)]
mod test_support;

use client::{HttpPayrollApi, PayrollApi};
use config::Config;
use utils::session::session_middleware;
use utils::view_state::ViewStateStore;

use crate::docs::ApiDoc;
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(
        addr = %config.server_addr,
        api = %config.api_base_url,
        "Payroll admin starting..."
    );

    let api: Arc<dyn PayrollApi> = Arc::new(
        HttpPayrollApi::new(&config.api_base_url).context("API_BASE_URL is not usable")?,
    );
    let api = Data::from(api);
    let view_state = Data::new(ViewStateStore::new(config.session_idle));
    let limiter = Arc::new(routes::build_limiter(config.rate_per_min)?);
    let server_addr = config.server_addr.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(session_middleware))
            .wrap(limiter.clone())
            .wrap(NormalizePath::trim())
            .wrap(Logger::default())
            .service(
                // wildcard so the UI's JS/CSS assets match
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(api.clone())
            .app_data(view_state.clone())
            .configure(routes::configure)
            .default_service(web::to(views::home::not_found_page))
    })
    .bind(&server_addr)
    .with_context(|| format!("cannot bind {server_addr}"))?
    .run()
    .await?;

    Ok(())
}
