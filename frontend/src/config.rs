use log::Level;

pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 2_000;
/// Widths above this show the full navigation instead of the hamburger.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const RESIZE_DEBOUNCE_MS: u64 = 150;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Contact endpoint, when the build was given `SITE_SUBMIT_PATH`. Without
/// it submissions are simulated.
pub fn submit_endpoint() -> Option<String> {
    option_env!("SITE_SUBMIT_PATH").map(|path| format!("{}{}", get_backend_url(), path))
}

pub fn is_local_host(hostname: &str) -> bool {
    matches!(hostname, "localhost" | "127.0.0.1" | "")
}
