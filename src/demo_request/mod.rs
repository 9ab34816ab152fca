pub mod payload;
pub mod pipeline;

pub use payload::{DemoRequest, DemoRequestPayload};
