pub mod error;
pub mod model;
pub mod service;

pub use error::ConfigFlowError;
pub use model::{
    ConfigEntry, ConfigEntryData, FlowResult, FormField, CONF_API_KEY, CONF_GROUP_ID,
    CONF_VOICE_ID, DEFAULT_VOICE_ID, DOMAIN, ENTRY_TITLE,
};
pub use service::ConfigFlow;
