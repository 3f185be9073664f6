use shared::UserId;

pub struct Config {
    pub api_base_url: &'static str,
    /// Host used for vote endpoints when the event detail omits `hostUserId`.
    pub default_host_id: UserId,
    pub placeholder_fallback: bool,
    pub log_filter: &'static str,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            api_base_url: "http://localhost:8080",
            default_host_id: 1,
            placeholder_fallback: cfg!(debug_assertions),
            log_filter: "debug",
        }
    }
}

pub const CONFIG: Config = Config::new();
