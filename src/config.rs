/// Lead collection endpoint, baked in at build time.
///
/// Build with `LEAD_ENDPOINT=https://... trunk build` to post leads somewhere
/// real. Without it the booking form only logs the payloads and waits
/// [`SIMULATED_LATENCY_MS`] before reporting success.
pub fn lead_endpoint() -> Option<&'static str> {
    option_env!("LEAD_ENDPOINT").filter(|url| !url.is_empty())
}

// Booking modal timings
pub const SIMULATED_LATENCY_MS: u32 = 1_500;
pub const AUTO_CLOSE_MS: u32 = 3_000;
pub const RESET_LINGER_MS: u32 = 300;

// Navbar scroll behaviour
pub const SCROLLED_THRESHOLD_PX: f64 = 20.0;
pub const SPY_WINDOW_TOP_PX: f64 = -100.0;
pub const SPY_WINDOW_BOTTOM_PX: f64 = 300.0;
pub const NAV_OFFSET_PX: f64 = 80.0;
