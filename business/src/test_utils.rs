//! Test utilities for business layer testing with mock servers.
//!
//! ```ignore
//! let mut test_ctx = TestContext::new().await;
//! test_ctx.mock_list_users(1, 100, vec![sample_user("1", "a@b.c")], 1).await;
//! test_ctx.get_users("/admin/users?page=1&limit=100");
//! test_ctx.flush_and_wait().await;
//! let list = test_ctx.ctx.compute::<UsersListCompute>();
//! ```

use std::time::Duration;

use userdesk_states::StateCtx;
use ustr::Ustr;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

use crate::users::{self, User};
use crate::{AuthState, BusinessConfig, install_root_state};

/// Holds a mock server and a `StateCtx` pointed at it.
pub struct TestContext {
    pub mock_server: MockServer,
    pub ctx: StateCtx,
}

impl TestContext {
    pub async fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        let mut ctx = StateCtx::new();
        ctx.add_state(BusinessConfig::new(mock_server.uri()));
        install_root_state(&mut ctx);

        Self { mock_server, ctx }
    }

    pub fn set_authenticated(&mut self, token: &str) {
        self.ctx.update::<AuthState>(|auth| {
            auth.login_success("test_admin".to_owned(), Some(token.to_owned()));
        });
    }

    pub fn get_users(&mut self, url: &str) {
        users::get_users(&mut self.ctx, url.to_owned());
    }

    pub fn delete_user(&mut self, id: &str) {
        users::delete_user(&mut self.ctx, Ustr::from(id));
    }

    /// Flushes queued commands and waits until every spawned task finished.
    pub async fn flush_and_wait(&mut self) {
        self.ctx.sync_computes();
        self.ctx.flush_commands();

        let timeout = Duration::from_secs(5);
        let start = std::time::Instant::now();

        while self.ctx.task_count() > 0 {
            assert!(
                start.elapsed() <= timeout,
                "Timed out waiting for pending tasks ({} still in JoinSet)",
                self.ctx.task_count()
            );
            if self.ctx.task_set_mut().join_next().await.is_some() {
                self.ctx.sync_computes();
            }
        }

        self.ctx.sync_computes();
    }

    // =========================================================================
    // Mock endpoint helpers
    // =========================================================================

    pub async fn mock_list_users(&self, page: u32, limit: u32, users: Vec<User>, total: u64) {
        Mock::given(method("GET"))
            .and(path("/api/admin/users"))
            .and(query_param("page", page.to_string()))
            .and(query_param("limit", limit.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "users": users,
                "totalDocs": total
            })))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_list_users_with_token(&self, page: u32, limit: u32, token: &str) {
        Mock::given(method("GET"))
            .and(path("/api/admin/users"))
            .and(query_param("page", page.to_string()))
            .and(query_param("limit", limit.to_string()))
            .and(header("Authorization", format!("Bearer {token}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "users": [],
                "totalDocs": 0
            })))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_list_users_error(&self, status: u16, message: &str) {
        Mock::given(method("GET"))
            .and(path("/api/admin/users"))
            .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!({
                "message": message
            })))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_delete_user(&self, id: &str, status: u16, message: &str) {
        Mock::given(method("DELETE"))
            .and(path(format!("/api/admin/users/{id}")))
            .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!({
                "message": message
            })))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_delete_user_empty(&self, id: &str, status: u16) {
        Mock::given(method("DELETE"))
            .and(path(format!("/api/admin/users/{id}")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.mock_server)
            .await;
    }
}

pub fn sample_user(id: &str, email: &str) -> User {
    User {
        id: id.to_owned(),
        first_name: "Test".to_owned(),
        last_name: "User".to_owned(),
        email: email.to_owned(),
        gender: "other".to_owned(),
        date_of_birth: "1990-01-01".to_owned(),
        role: "user".to_owned(),
    }
}
