//! Resource screens: one table plus one create/edit modal per REST collection.
//!
//! A screen never performs I/O itself. Operations mutate [`ScreenState`] and hand back
//! the [`ApiCall`] that has to be executed; the response is later fed to
//! [`Screen::handle_response`].

pub mod controller;
pub mod form;

pub use controller::ResourceScreen;
pub use form::{FormState, TextInput};

use crate::api::{ApiCall, ApiError};
use crate::catalog::ResourceKind;
use chrono::{DateTime, Local};
use serde_json::Value;
use std::time::{Duration, Instant};

/// Longest a notice may stay up when the configured TTL does not fit an `Instant`.
const MAX_NOTICE_TTL: Duration = Duration::from_secs(3600);

/// What a request was issued for, so its response can be applied correctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    List,
    Edit { id: String },
    Details { id: String },
    /// Option list for the dependent selector, with the entry to pre-select.
    Choices { selected: Option<String> },
    /// `editing` is the id held when the save was issued; `None` means create.
    Save { editing: Option<String> },
    Delete { id: String },
}

/// One table row. `id` is what edit/delete/details act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: String,
    pub label: String,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    pub expires_at: Instant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: String,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsView {
    pub title: String,
    pub entries: Vec<(&'static str, String)>,
}

/// Which layer currently receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Table,
    Form,
    Details,
    Confirm,
}

/// Everything a screen displays, independent of the record type.
#[derive(Debug)]
pub struct ScreenState {
    /// Id of the record loaded into the form; `None` means the next save creates.
    pub editing_id: Option<String>,
    /// Requests issued and not yet answered. Loading while non-zero.
    pub in_flight: usize,
    pub rows: Vec<Row>,
    pub selected: usize,
    pub form: Option<FormState>,
    pub confirm: Option<PendingDelete>,
    pub details: Option<DetailsView>,
    pub notice: Option<Notice>,
    pub loaded_at: Option<DateTime<Local>>,
    notice_ttl: Duration,
}

impl ScreenState {
    pub fn new(notice_ttl: Duration) -> Self {
        Self {
            editing_id: None,
            in_flight: 0,
            rows: Vec::new(),
            selected: 0,
            form: None,
            confirm: None,
            details: None,
            notice: None,
            loaded_at: None,
            notice_ttl,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn mode(&self) -> Mode {
        if self.confirm.is_some() {
            Mode::Confirm
        } else if self.form.is_some() {
            Mode::Form
        } else if self.details.is_some() {
            Mode::Details
        } else {
            Mode::Table
        }
    }

    pub fn selected_row(&self) -> Option<&Row> {
        self.rows.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }

    /// Hides the form and details popups. The editing id is left for the next
    /// open operation to overwrite.
    pub fn close_modal(&mut self) {
        self.form = None;
        self.details = None;
    }

    pub fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            kind,
            expires_at: Instant::now()
                .checked_add(self.notice_ttl)
                .unwrap_or_else(|| Instant::now() + MAX_NOTICE_TTL),
        });
    }

    pub fn notify_error(&mut self, text: impl Into<String>) {
        self.notify(NoticeKind::Error, text);
    }

    pub fn notify_success(&mut self, text: impl Into<String>) {
        self.notify(NoticeKind::Success, text);
    }

    pub fn dismiss_notice(&mut self) -> bool {
        self.notice.take().is_some()
    }

    /// Drops the notice once it has outlived its TTL. Returns whether it did.
    pub fn expire_notice(&mut self, now: Instant) -> bool {
        match &self.notice {
            Some(n) if now >= n.expires_at => {
                self.notice = None;
                true
            }
            _ => false,
        }
    }
}

/// The CRUD contract every resource screen fulfils.
///
/// Each operation returns the request it needs executed, if any.
pub trait Screen: Send {
    fn kind(&self) -> ResourceKind;
    fn columns(&self) -> &'static [&'static str];
    fn state(&self) -> &ScreenState;
    fn state_mut(&mut self) -> &mut ScreenState;

    /// Re-fetch the whole collection.
    fn list(&mut self) -> ApiCall;
    /// Open an empty form in create mode.
    fn open_create(&mut self) -> Option<ApiCall>;
    /// Load record `id` into the form in update mode.
    fn open_edit(&mut self, id: &str) -> ApiCall;
    /// Load record `id` into the read-only details popup.
    fn open_details(&mut self, id: &str) -> ApiCall;
    /// Submit the open form. `None` when nothing was sent.
    fn save(&mut self) -> Option<ApiCall>;
    /// Ask for confirmation before deleting `id`.
    fn request_delete(&mut self, id: &str);
    /// Answer the pending confirmation. Only a yes produces a request.
    fn resolve_delete(&mut self, confirmed: bool) -> Option<ApiCall>;
    /// Apply a response. May chain one follow-up request.
    fn handle_response(&mut self, intent: Intent, result: Result<Value, ApiError>) -> Option<ApiCall>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_huge_notice_ttl_is_capped() {
        let mut state = ScreenState::new(Duration::MAX);
        state.notify_error("boom");
        let expires_at = state.notice.as_ref().unwrap().expires_at;
        assert!(expires_at <= Instant::now() + MAX_NOTICE_TTL);
        assert!(!state.expire_notice(Instant::now()));
    }

    fn rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| Row {
                id: format!("r{i}"),
                label: format!("Row {i}"),
                cells: vec![],
            })
            .collect()
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut state = ScreenState::new(Duration::from_secs(4));
        state.select_next();
        assert_eq!(state.selected, 0);
        state.rows = rows(3);
        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 2);
        state.select_prev();
        assert_eq!(state.selected_row().map(|r| r.id.as_str()), Some("r1"));
        state.select_first();
        assert_eq!(state.selected, 0);
        state.select_last();
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_mode_priority() {
        let mut state = ScreenState::new(Duration::from_secs(4));
        assert_eq!(state.mode(), Mode::Table);
        state.details = Some(DetailsView {
            title: "x".into(),
            entries: vec![],
        });
        assert_eq!(state.mode(), Mode::Details);
        state.confirm = Some(PendingDelete {
            id: "r0".into(),
            prompt: "?".into(),
        });
        assert_eq!(state.mode(), Mode::Confirm);
        state.confirm = None;
        state.close_modal();
        assert_eq!(state.mode(), Mode::Table);
    }

    #[test]
    fn test_notice_expiry() {
        let mut state = ScreenState::new(Duration::from_secs(4));
        state.notify_error("boom");
        let issued = Instant::now();
        assert!(!state.expire_notice(issued));
        assert!(state.expire_notice(issued + Duration::from_secs(5)));
        assert!(state.notice.is_none());

        state.notify_success("ok");
        assert!(state.dismiss_notice());
        assert!(!state.dismiss_notice());
    }
}
