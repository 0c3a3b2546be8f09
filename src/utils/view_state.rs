use futures::future::ready;
use moka::future::Cache;
use std::time::Duration;

use crate::model::report::{MonthlyReport, ReportSelection};
use crate::utils::session::SessionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A message the user must dismiss, shown on the next rendered page.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// The report screen as last rendered for a session.
#[derive(Debug, Clone, Default)]
struct ReportState {
    selection: Option<ReportSelection>,
    report: Option<MonthlyReport>,
}

/// Display state that has to survive a POST → redirect → GET round trip.
/// Domain data is never kept here; views always re-fetch it.
///
/// Notices and report state live in separate caches, and each write is a
/// single cache operation, so concurrent requests from one session never
/// overwrite each other's updates.
#[derive(Clone)]
pub struct ViewStateStore {
    notices: Cache<String, Notice>,
    reports: Cache<String, ReportState>,
}

impl ViewStateStore {
    pub fn new(idle: Duration) -> Self {
        Self {
            notices: Cache::builder()
                .max_capacity(10_000)
                .time_to_idle(idle)
                .build(),
            reports: Cache::builder()
                .max_capacity(10_000)
                .time_to_idle(idle)
                .build(),
        }
    }

    pub async fn push_notice(&self, session: &SessionId, notice: Notice) {
        self.notices.insert(session.as_str().to_string(), notice).await;
    }

    /// Notices are shown once.
    pub async fn take_notice(&self, session: &SessionId) -> Option<Notice> {
        self.notices.remove(session.as_str()).await
    }

    pub async fn remember_report(
        &self,
        session: &SessionId,
        selection: ReportSelection,
        report: MonthlyReport,
    ) {
        let state = ReportState {
            selection: Some(selection),
            report: Some(report),
        };
        self.reports.insert(session.as_str().to_string(), state).await;
    }

    /// Keeps whatever report was already on screen.
    pub async fn remember_selection(&self, session: &SessionId, selection: ReportSelection) {
        self.reports
            .entry(session.as_str().to_string())
            .and_upsert_with(|current| {
                let report = current.and_then(|entry| entry.into_value().report);
                ready(ReportState {
                    selection: Some(selection),
                    report,
                })
            })
            .await;
    }

    pub async fn report_state(
        &self,
        session: &SessionId,
    ) -> (Option<ReportSelection>, Option<MonthlyReport>) {
        let state = self.reports.get(session.as_str()).await.unwrap_or_default();
        (state.selection, state.report)
    }
}
