#![allow(dead_code)]

use std::time::Duration;

use chrono::Duration as ChronoDuration;
use egui_kittest::Harness;
use userdesk_business::User;
use userdesk_states::Time;
use userdesk_ui::AdminApp;
use userdesk_ui::state::State;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Time to wait for async API responses in tests (milliseconds).
pub const API_RESPONSE_WAIT_MS: u64 = 25;

pub struct TestCtx<'a, T = State> {
    mock_server: MockServer,
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }

    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// Every list request the server received, as `(page, limit)`.
    pub async fn list_requests(&self) -> Vec<(String, String)> {
        self.mock_server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.method.as_str() == "GET")
            .map(page_and_limit)
            .collect()
    }
}

impl<'a> TestCtx<'a, AdminApp> {
    /// Starts the full app against a mock server that already serves `users`
    /// on every page.
    pub async fn new_app(users: Vec<User>, total_docs: u64) -> Self {
        let (mock_server, state) = setup_test_state().await;
        mock_any_list_users(&mock_server, users, total_docs).await;

        let app = AdminApp::new(state);
        let harness = Harness::builder()
            .with_size(egui::vec2(1400.0, 800.0))
            .build_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    /// Runs frames and gives async I/O time to complete.
    pub async fn pump_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.harness.step();
            yield_wait_for_network(API_RESPONSE_WAIT_MS).await;
        }
    }

    pub fn state(&self) -> &State {
        &self.harness.state().state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.harness.state_mut().state
    }

    pub fn advance_time_by_seconds(&mut self, seconds: i64) {
        self.state_mut()
            .ctx
            .update::<Time>(|time| time.advance(ChronoDuration::seconds(seconds)));
    }
}

async fn setup_test_state() -> (MockServer, State) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;
    let state = State::test(mock_server.uri());
    (mock_server, state)
}

async fn mock_any_list_users(mock_server: &MockServer, users: Vec<User>, total_docs: u64) {
    Mock::given(method("GET"))
        .and(path("/api/admin/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "users": users,
            "totalDocs": total_docs
        })))
        .mount(mock_server)
        .await;
}

pub async fn mock_delete_user(mock_server: &MockServer, id: &str, status: u16, message: &str) {
    Mock::given(method("DELETE"))
        .and(path(format!("/api/admin/users/{id}")))
        .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!({
            "message": message
        })))
        .mount(mock_server)
        .await;
}

pub async fn mock_list_page(mock_server: &MockServer, page: u32, limit: u32, users: Vec<User>) {
    Mock::given(method("GET"))
        .and(path("/api/admin/users"))
        .and(query_param("page", page.to_string()))
        .and(query_param("limit", limit.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "users": users,
            "totalDocs": 250
        })))
        .with_priority(1)
        .mount(mock_server)
        .await;
}

pub async fn yield_wait_for_network(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

fn page_and_limit(request: &Request) -> (String, String) {
    let mut page = String::new();
    let mut limit = String::new();
    for (key, value) in request.url.query_pairs() {
        match key.as_ref() {
            "page" => page = value.into_owned(),
            "limit" => limit = value.into_owned(),
            _ => {}
        }
    }
    (page, limit)
}

pub fn sample_user(id: &str, first_name: &str, email: &str) -> User {
    User {
        id: id.to_owned(),
        first_name: first_name.to_owned(),
        last_name: "Tester".to_owned(),
        email: email.to_owned(),
        gender: "other".to_owned(),
        date_of_birth: "1990-01-01".to_owned(),
        role: "user".to_owned(),
    }
}
