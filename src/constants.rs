//! UI Constants
//!
//! Centralized constants for layout, timing, and demo data.

/// Sidebar navigation width in pixels
pub const SIDEBAR_WIDTH: f32 = 80.0;

/// Login card width in pixels
pub const LOGIN_CARD_WIDTH: f32 = 420.0;

/// Log panel heights
pub const LOG_PANEL_EXPANDED_HEIGHT: f32 = 150.0;
pub const LOG_PANEL_COLLAPSED_HEIGHT: f32 = 32.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 800.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Log ring buffer capacity
pub const LOG_CAPACITY: usize = 2000;
/// Number of log entries rendered in the panel
pub const LOG_PANEL_VISIBLE_ENTRIES: usize = 50;
/// Bound of the logger -> UI channel
pub const LOG_CHANNEL_CAPACITY: usize = 1024;
/// Interval at which the UI drains pending log records
pub const LOG_DRAIN_INTERVAL_MS: u64 = 100;

/// "Forgot password" tooltip auto-dismiss delay
pub const FORGOT_PASSWORD_TOOLTIP_MS: u64 = 3000;

/// Simulated latency of the mock authentication store
pub const MOCK_AUTH_LATENCY_MS: u64 = 800;

/// Example credentials shown on the login screen
pub const DEMO_USERNAME: &str = "12.345.678-5";
pub const DEMO_PASSWORD: &str = "demo1234";

/// Classroom seat grid
pub const CLASSROOM_ROWS: u32 = 5;
pub const CLASSROOM_COLS: u32 = 6;
pub const CLASSROOM_OCCUPIED_THRESHOLD: u32 = 18;

/// Online course seat grid
pub const ONLINE_COURSE_CAPACITY: u32 = 24;
pub const ONLINE_COURSE_ENROLLED: u32 = 10;
pub const ONLINE_COURSE_PER_ROW: u32 = 8;
