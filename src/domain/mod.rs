//! Domain Models
//!
//! Plain value types shared by states and views. Nothing here touches GPUI.

pub mod credentials;
pub mod rut;
pub mod seat;

pub use credentials::*;
pub use rut::*;
pub use seat::*;
