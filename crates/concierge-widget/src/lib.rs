//! # concierge-widget
//!
//! The widget session layer: owns the transcript and the open/closed flag,
//! drives the matching engine, and schedules bot replies behind simulated
//! typing delays. Rendering goes through the `Surface` trait so the session
//! itself never touches presentation state.

pub mod factory;
pub mod session;

pub use factory::{chatbot, chiro_motion_chatbot, cornerstone_chatbot, pharmacy_chatbot};
pub use session::{ChatWidget, Mount};
