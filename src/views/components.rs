use maud::{Markup, Render, html};

use super::layout::CURRENCY;
use crate::pay::format_amount;

/// The one confirmation step used before every irreversible or outgoing
/// action. Confirm posts `confirm_fields` to `confirm_action`; cancel is a
/// plain GET to `cancel_action` carrying `cancel_fields`, so nothing is sent
/// to the remote API.
pub struct ConfirmDialog<'a> {
    pub title: &'a str,
    pub body: Markup,
    pub confirm_label: &'a str,
    pub confirm_action: String,
    pub confirm_fields: Vec<(&'static str, String)>,
    pub cancel_action: String,
    pub cancel_fields: Vec<(&'static str, String)>,
    pub danger: bool,
}

impl Render for ConfirmDialog<'_> {
    fn render(&self) -> Markup {
        let confirm_class = if self.danger {
            "btn btn-danger"
        } else {
            "btn btn-primary"
        };
        html! {
            div class="modal show d-block" role="dialog" aria-modal="true"
                style="background-color: rgba(0,0,0,0.5)" data-confirm=(self.confirm_action) {
                div class="modal-dialog" {
                    div class="modal-content" {
                        div class="modal-header" {
                            h5 class="modal-title" { (self.title) }
                        }
                        div class="modal-body" { (self.body) }
                        div class="modal-footer" {
                            form method="get" action=(self.cancel_action) {
                                @for (name, value) in &self.cancel_fields {
                                    input type="hidden" name=(name) value=(value);
                                }
                                button type="submit" class="btn btn-secondary" { "Cancel" }
                            }
                            form method="post" action=(self.confirm_action) {
                                @for (name, value) in &self.confirm_fields {
                                    input type="hidden" name=(name) value=(value);
                                }
                                button type="submit" class=(confirm_class) { (self.confirm_label) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn error_banner(message: &str) -> Markup {
    html! {
        div class="alert alert-danger" role="alert" data-status="failed" { (message) }
    }
}

pub fn money(value: f64) -> Markup {
    html! { (CURRENCY) (format_amount(value)) }
}

/// Numbers as the API sent them: `8` rather than `8.00`.
pub fn plain_number(value: f64) -> String {
    format!("{value}")
}
