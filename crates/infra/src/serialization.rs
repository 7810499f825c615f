//! Encoders for the persisted metadata document.

mod json;
mod spaced;

pub use json::{JsonEncoder, JsonLayout};
pub use spaced::SpacedFormatter;
