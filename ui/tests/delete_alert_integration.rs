//! Integration tests for the delete confirmation flow and its alert.
//!
//! The harness is wide enough for every table column, so the row buttons and
//! the modal buttons are all clicked for real.

mod common;

use common::{TestCtx, mock_delete_user, sample_user};
use kittest::Queryable;
use userdesk_business::{AlertSeverity, DeleteUserCompute, RequestStatus, Route, UsersTableState};
use ustr::Ustr;

async fn app_with_delete(status: u16, message: &str) -> TestCtx<'static, userdesk_ui::AdminApp> {
    let mut ctx = TestCtx::new_app(vec![sample_user("u1", "Ada", "ada@example.com")], 1).await;
    mock_delete_user(ctx.mock_server(), "u1", status, message).await;
    ctx.pump_frames(4).await;
    ctx
}

async fn confirm_delete_of(ctx: &mut TestCtx<'static, userdesk_ui::AdminApp>, id: &str) {
    ctx.harness_mut().get_by_label("🗑️ Delete").click();
    ctx.pump_frames(2).await;
    assert_eq!(table(ctx).delete_target(), Some(Ustr::from(id)));
    assert!(ctx.harness().query_by_label_contains(&format!("'{id}'")).is_some());

    ctx.harness_mut().get_by_label("Confirm").click();
    ctx.pump_frames(4).await;
}

fn table<'a>(ctx: &'a TestCtx<'static, userdesk_ui::AdminApp>) -> &'a UsersTableState {
    ctx.state().ctx.state::<UsersTableState>()
}

#[tokio::test]
async fn test_delete_success_alert_lasts_five_seconds() {
    let mut ctx = app_with_delete(200, "User removed").await;

    confirm_delete_of(&mut ctx, "u1").await;
    ctx.pump_frames(2).await;

    assert!(table(&ctx).is_alert_visible());
    assert!(!table(&ctx).is_modal_open());
    assert_eq!(table(&ctx).alert_severity(), AlertSeverity::Success);
    assert!(ctx.harness().query_by_label_contains("User removed").is_some());
    assert_eq!(ctx.list_requests().await.len(), 2, "success refetches the page once");

    ctx.advance_time_by_seconds(4);
    ctx.pump_frames(2).await;
    assert!(table(&ctx).is_alert_visible());

    ctx.advance_time_by_seconds(1);
    ctx.pump_frames(3).await;

    assert!(!table(&ctx).is_alert_visible());
    assert!(ctx.harness().query_by_label_contains("User removed").is_none());
    assert_eq!(
        *ctx.state().ctx.compute::<DeleteUserCompute>(),
        DeleteUserCompute::default()
    );
}

#[tokio::test]
async fn test_delete_failure_shows_server_message() {
    let mut ctx = app_with_delete(403, "Admins cannot be deleted").await;

    confirm_delete_of(&mut ctx, "u1").await;

    assert!(table(&ctx).is_alert_visible());
    assert_eq!(table(&ctx).alert_severity(), AlertSeverity::Error);
    assert!(
        ctx.harness()
            .query_by_label_contains("Admins cannot be deleted")
            .is_some()
    );
    assert_eq!(ctx.list_requests().await.len(), 1, "failure does not refetch");

    ctx.advance_time_by_seconds(5);
    ctx.pump_frames(3).await;

    assert_eq!(
        ctx.state().ctx.compute::<DeleteUserCompute>().status,
        RequestStatus::Idle
    );
}

#[tokio::test]
async fn test_leaving_the_table_cancels_the_alert_timer() {
    let mut ctx = app_with_delete(200, "User removed").await;

    confirm_delete_of(&mut ctx, "u1").await;
    assert!(table(&ctx).alert_timer().is_scheduled());

    ctx.state_mut()
        .ctx
        .update::<Route>(|route| *route = Route::AddUser);
    ctx.pump_frames(2).await;

    assert!(!table(&ctx).alert_timer().is_scheduled());

    ctx.advance_time_by_seconds(10);
    ctx.pump_frames(2).await;

    assert!(
        ctx.state().ctx.compute::<DeleteUserCompute>().is_success(),
        "a cancelled timer never resets the delete state"
    );
}
