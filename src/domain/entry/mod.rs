pub mod error;
pub mod service;

pub use error::EntryServiceError;
pub use service::{EntryService, EntryServiceApi, FlowOutcome};
