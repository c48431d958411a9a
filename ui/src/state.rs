use userdesk_business::{BusinessConfig, Route, UsersTableState, install_root_state};
use userdesk_states::{StateCtx, Time};

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
    /// Move `Time` to the wall clock at the start of every frame.
    ///
    /// Off in tests so they can drive the clock by hand.
    pub live_clock: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(Time::default());
        ctx.add_state(Route::default());
        ctx.add_state(UsersTableState::new(config.default_page_size));
        ctx.add_state(config);
        install_root_state(&mut ctx);

        Self {
            ctx,
            live_clock: true,
        }
    }

    pub fn test(base_url: String) -> Self {
        Self {
            live_clock: false,
            ..Self::new(BusinessConfig::new(base_url))
        }
    }
}
