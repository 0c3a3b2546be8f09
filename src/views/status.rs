use maud::{Markup, html};
use tracing::error;

use super::components::error_banner;
use crate::client::ApiResult;

/// Outcome of one remote read as a view sees it. The in-flight state is the
/// browser's own page load, so it never reaches a template.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestStatus<T> {
    Idle,
    Ready(T),
    Failed(String),
}

impl<T> RequestStatus<T> {
    /// Logs the failure and keeps a message the page can show.
    pub fn from_result(result: ApiResult<T>, what: &str) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => {
                error!(error = %e, what, "Payroll API request failed");
                Self::Failed(format!("Could not load {what}. Please try again."))
            }
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Same markup for every view: nothing when idle, the banner on failure.
    pub fn render(&self, ready: impl FnOnce(&T) -> Markup) -> Markup {
        match self {
            Self::Idle => html! {},
            Self::Ready(value) => ready(value),
            Self::Failed(message) => error_banner(message),
        }
    }
}
