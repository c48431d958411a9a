//! View state of the users table.
//!
//! Owned by the table widget and reset whenever the widget unmounts. The widget
//! feeds it the current delete status and the clock every frame, and asks it
//! which commands to enqueue.

use std::any::Any;

use chrono::{DateTime, Duration, Utc};
use userdesk_states::State;
use ustr::Ustr;

use super::delete_user_compute::DeleteUserCompute;
use super::list_users_compute::RequestStatus;
use super::query::PageQuery;

/// How long the delete alert stays up.
pub const ALERT_DURATION: Duration = Duration::seconds(5);

/// Choices offered by the page size selector.
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 25, 50, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    Success,
    Error,
}

/// Single deferred callback driven by the virtual clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertTimer {
    deadline: Option<DateTime<Utc>>,
}

impl AlertTimer {
    /// Arms the timer, replacing any deadline already set.
    pub fn schedule(&mut self, now: DateTime<Utc>, after: Duration) {
        self.deadline = Some(now + after);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_scheduled(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once, on the first call at or after the deadline.
    pub fn fire_if_due(&mut self, now: DateTime<Utc>) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UsersTableState {
    default_limit: u32,
    page: u32,
    limit: u32,

    modal_open: bool,
    delete_target: Option<Ustr>,

    alert_visible: bool,
    alert_severity: AlertSeverity,
    alert_timer: AlertTimer,

    /// Last query handed out by `pending_query`.
    requested: Option<PageQuery>,
    /// Delete status and attempt seen on the previous frame.
    observed_delete: (RequestStatus, u64),
}

impl Default for UsersTableState {
    fn default() -> Self {
        Self::new(crate::BusinessConfig::DEFAULT_PAGE_SIZE)
    }
}

impl UsersTableState {
    pub fn new(default_limit: u32) -> Self {
        let default_limit = default_limit.max(1);
        Self {
            default_limit,
            page: 1,
            limit: default_limit,
            modal_open: false,
            delete_target: None,
            alert_visible: false,
            alert_severity: AlertSeverity::Success,
            alert_timer: AlertTimer::default(),
            requested: None,
            observed_delete: (RequestStatus::Idle, 0),
        }
    }

    // =====================
    // Pagination
    // =====================

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn query(&self) -> PageQuery {
        PageQuery::new(self.page, self.limit)
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Changing the page size goes back to the first page.
    pub fn set_limit(&mut self, limit: u32) {
        let limit = limit.max(1);
        if limit != self.limit {
            self.limit = limit;
            self.page = 1;
        }
    }

    /// The query to fetch, once per change of page or page size.
    pub fn pending_query(&mut self) -> Option<PageQuery> {
        let query = self.query();
        if self.requested == Some(query) {
            return None;
        }
        self.requested = Some(query);
        Some(query)
    }

    /// Makes the next `pending_query` hand out the current page again.
    pub fn refresh(&mut self) {
        self.requested = None;
    }

    // =====================
    // Delete confirmation
    // =====================

    pub fn open_delete_modal(&mut self, id: Ustr) {
        self.delete_target = Some(id);
        self.modal_open = true;
    }

    pub fn close_delete_modal(&mut self) {
        self.modal_open = false;
        self.delete_target = None;
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn delete_target(&self) -> Option<Ustr> {
        self.delete_target.filter(|_| self.modal_open)
    }

    /// The id to delete when the user confirms. Empty ids are never returned.
    pub fn confirm_delete(&self) -> Option<Ustr> {
        self.delete_target().filter(|id| !id.is_empty())
    }

    // =====================
    // Delete alert
    // =====================

    /// Feeds the current delete compute.
    ///
    /// A delete that just went in flight cancels the alert of the previous
    /// one, so its timer cannot reset the new delete. When a delete has just
    /// settled: shows the alert, closes the modal and arms the timer. A
    /// successful delete also refreshes the current page. Returns `true` on
    /// that transition.
    pub fn observe_delete(&mut self, delete: &DeleteUserCompute, now: DateTime<Utc>) -> bool {
        let observed = (delete.status, delete.attempt);
        if observed == self.observed_delete {
            return false;
        }
        self.observed_delete = observed;

        if delete.status == RequestStatus::Pending {
            self.alert_timer.cancel();
            self.alert_visible = false;
            return false;
        }
        if !delete.status.is_settled() {
            return false;
        }

        self.alert_visible = true;
        self.alert_severity = match delete.status {
            RequestStatus::Error => AlertSeverity::Error,
            _ => AlertSeverity::Success,
        };
        self.close_delete_modal();
        self.alert_timer.schedule(now, ALERT_DURATION);
        if delete.status == RequestStatus::Success {
            self.refresh();
        }
        true
    }

    /// Advances the alert timer. Returns `true` when the delete state should be
    /// reset now.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if self.alert_timer.fire_if_due(now) {
            self.alert_visible = false;
            return true;
        }
        false
    }

    /// Hides the alert. The timer keeps running and still resets the delete
    /// state when it fires.
    pub fn dismiss_alert(&mut self) {
        self.alert_visible = false;
    }

    pub fn is_alert_visible(&self) -> bool {
        self.alert_visible
    }

    pub fn alert_severity(&self) -> AlertSeverity {
        self.alert_severity
    }

    pub fn alert_timer(&self) -> &AlertTimer {
        &self.alert_timer
    }

    /// Cancels the timer and drops every piece of view state.
    pub fn unmount(&mut self) {
        self.alert_timer.cancel();
        *self = Self::new(self.default_limit);
    }
}

impl State for UsersTableState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
