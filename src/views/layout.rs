use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use maud::{DOCTYPE, Markup, html};

use crate::utils::view_state::{Notice, NoticeKind};

pub const CURRENCY: &str = "£";

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// Navigation shell shared by every page.
pub fn page(title: &str, notice: Option<&Notice>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " · Payroll Admin" }
                link rel="stylesheet" href=(BOOTSTRAP_CSS);
            }
            body {
                nav class="navbar navbar-dark bg-dark" {
                    div class="container d-flex justify-content-between align-items-center" {
                        a class="navbar-brand fw-bold" href="/" { "Philly's Payroll" }
                        div class="d-flex gap-3" {
                            a class="nav-link text-light" href="/manage" { "Manage" }
                            a class="nav-link text-light" href="/allemployees" { "Employees" }
                            a class="nav-link text-light" href="/reports" { "Reports" }
                        }
                    }
                }
                @if let Some(notice) = notice {
                    (notice_dialog(notice))
                }
                main class="container mt-4" {
                    (body)
                }
            }
        }
    }
}

/// Rendered as a modal that has to be dismissed before the page is usable.
fn notice_dialog(notice: &Notice) -> Markup {
    let (title, button) = match notice.kind {
        NoticeKind::Info => ("Notice", "btn btn-primary"),
        NoticeKind::Error => ("Something went wrong", "btn btn-danger"),
    };
    html! {
        div class="modal show d-block" role="alertdialog" aria-modal="true"
            style="background-color: rgba(0,0,0,0.5)" data-notice=(notice_kind(notice.kind)) {
            div class="modal-dialog" {
                div class="modal-content" {
                    div class="modal-header" {
                        h5 class="modal-title" { (title) }
                    }
                    div class="modal-body" { (notice.message) }
                    div class="modal-footer" {
                        button type="button" class=(button)
                            onclick="this.closest('.modal').remove()" { "OK" }
                    }
                }
            }
        }
    }
}

fn notice_kind(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Info => "info",
        NoticeKind::Error => "error",
    }
}

pub fn back_link(href: &str) -> Markup {
    html! {
        a href=(href) class="btn btn-secondary mb-3" { "Back" }
    }
}

pub fn html_response(status: StatusCode, markup: Markup) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(markup.into_string())
}

/// POST → redirect → GET, so the target view re-fetches.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}
