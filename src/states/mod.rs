//! State Management Layer
//!
//! Centralized application state using GPUI's Entity system.
//! Follows a unidirectional data flow pattern:
//!
//! ```text
//! UI Action → State Method → spawn Service Call → Service Result → State Update → notify → UI Refresh
//! ```

mod app;
mod i18n;
mod login;
mod logs;
mod seats;
mod session;

pub use app::*;
pub use i18n::*;
pub use login::*;
pub use logs::*;
pub use seats::*;
pub use session::*;
