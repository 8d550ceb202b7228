//! Service Layer
//!
//! Collaborators the UI talks to but does not own:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  ServiceHub                   │
//! │  ┌───────────────┐        ┌───────────────┐  │
//! │  │ Authenticator │        │   AppLogger   │  │
//! │  │ (mock store)  │        │ (tracing+UI)  │  │
//! │  └───────────────┘        └───────────────┘  │
//! └──────────────────────────────────────────────┘
//!          │ run_in_tokio              │ LogRecord
//!          ▼                           ▼
//!     LoginState                    LogState
//! ```

mod auth;
mod hub;
mod logger;
mod runtime;

pub use auth::*;
pub use hub::*;
pub use logger::*;
pub use runtime::*;
