//! Components - Reusable UI Components
//!
//! Pure UI components that don't depend on services or do I/O.

mod banner;
mod seat_icon;

pub use banner::*;
pub use seat_icon::*;
