//! # service_confirm: Confirmation Document Rendering
//!
//! Consumes external records and renders one formatted OTC equity index
//! option confirmation per record: a pure templating concern with a fixed
//! document layout (letterhead, general terms, procedure for exercise,
//! cash settlement terms, closing block). Confirmations are plain text;
//! PDF layout fidelity is an explicit non-goal.
//!
//! The trade identifier on each document is the ground-truth id rendered
//! as a zero-padded 5-digit opaque string; datasets beyond
//! [`recon_core::MAX_CONFIRMATION_RECORDS`] widen that identifier rather
//! than truncating it.

pub mod error;
pub mod renderer;
pub mod writer;

pub use error::ConfirmError;
pub use renderer::ConfirmationRenderer;
pub use writer::ConfirmationWriter;
