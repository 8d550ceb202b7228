//! View Components
//!
//! UI components for the Aula application.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        TitleBar                              │
//! ├────────┬────────────────────────────────────────────────────┤
//! │        │                                                     │
//! │ Side   │              Content (Login | Seats)                │
//! │ bar    │                                                     │
//! │ (80px) │                                                     │
//! ├────────┴────────────────────────────────────────────────────┤
//! │                        LogPanel                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod content;
mod log_panel;
mod login_view;
mod root;
mod seats_view;
mod sidebar;
mod title_bar;

pub use content::*;
pub use log_panel::*;
pub use login_view::*;
pub use root::*;
pub use seats_view::*;
pub use sidebar::*;
pub use title_bar::*;
