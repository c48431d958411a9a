use std::time::Duration;

use chrono::Utc;
use log::{debug, warn};
use userdesk_business::{Route, UsersTableState};
use userdesk_states::{StateCtx, Time};

use crate::{pages, state::State};

/// Repaint interval while commands run or the alert timer is armed.
const BUSY_REPAINT: Duration = Duration::from_millis(100);

pub struct AdminApp {
    pub state: State,
    /// Route rendered on the previous frame.
    mounted: Option<Route>,
    /// Contents of the address field in the top bar.
    path_input: String,
}

/// Navigates to the route `path` names. Unknown paths leave the route alone
/// and return `false`.
pub fn navigate_to_path(ctx: &mut StateCtx, path: &str) -> bool {
    match Route::from_path(path.trim()) {
        Some(route) => {
            ctx.update::<Route>(|current| *current = route);
            true
        }
        None => {
            warn!("No page at {path}");
            false
        }
    }
}

impl AdminApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            mounted: None,
            path_input: String::new(),
        }
    }

    /// Resets the users table when the previous frame showed it and the route
    /// now points elsewhere.
    fn track_mount(&mut self) {
        let route = self.state.ctx.state::<Route>().clone();
        if self.mounted == Some(Route::Users) && route != Route::Users {
            debug!("Leaving users table for {}", route.path());
            self.state
                .ctx
                .update::<UsersTableState>(UsersTableState::unmount);
        }
        self.mounted = Some(route);
    }

    fn is_busy(&self) -> bool {
        self.state.ctx.has_pending_work()
            || self
                .state
                .ctx
                .state::<UsersTableState>()
                .alert_timer()
                .is_scheduled()
    }
}

impl eframe::App for AdminApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.live_clock {
            self.state.ctx.update::<Time>(|time| time.set(Utc::now()));
        }

        // Sync Compute for render
        self.state.ctx.sync_computes();
        self.track_mount();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("User Admin");
                ui.separator();
                let path = self.state.ctx.state::<Route>().path();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.path_input)
                        .font(egui::TextStyle::Monospace)
                        .desired_width(320.0),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    navigate_to_path(&mut self.state.ctx, &self.path_input);
                    self.path_input = self.state.ctx.state::<Route>().path();
                } else if !response.has_focus() {
                    self.path_input = path;
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let route = self.state.ctx.state::<Route>().clone();
            match route {
                Route::Users => pages::users_page(&mut self.state, ui),
                Route::AddUser => pages::add_user_page(&mut self.state, ui),
                Route::EditUser(id) => pages::edit_user_page(&mut self.state, ui, id),
            };
        });

        // Run background jobs
        self.state.ctx.flush_commands();

        if self.is_busy() {
            ctx.request_repaint_after(BUSY_REPAINT);
        }
    }
}
