use super::error::ConfigFlowError;
use super::model::{
    ConfigEntryData, FlowResult, FormField, CONF_API_KEY, CONF_GROUP_ID, CONF_VOICE_ID,
    DEFAULT_VOICE_ID, ENTRY_TITLE,
};
use serde_json::{Map, Value};

const REQUIRED_FIELDS: [&str; 3] = [CONF_GROUP_ID, CONF_API_KEY, CONF_VOICE_ID];

/// The user-facing setup flow for a MiniMax instance
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigFlow;

impl ConfigFlow {
    pub const STEP_USER: &'static str = "user";

    pub fn new() -> Self {
        Self
    }

    /// Run the `user` step.
    ///
    /// Without input this describes the form to show. With input it validates
    /// the three required fields and returns the entry to create.
    pub fn step_user(&self, user_input: Option<Value>) -> Result<FlowResult, ConfigFlowError> {
        let input = match user_input {
            None => {
                return Ok(FlowResult::Form {
                    step_id: Self::STEP_USER.to_string(),
                    data_schema: Self::data_schema(),
                })
            }
            Some(Value::Object(input)) => input,
            Some(_) => return Err(ConfigFlowError::NotAnObject),
        };

        let data = ConfigEntryData {
            group_id: required_string(&input, CONF_GROUP_ID)?,
            api_key: required_string(&input, CONF_API_KEY)?,
            voice_id: required_string(&input, CONF_VOICE_ID)?,
        };

        if let Some(unknown) = input.keys().find(|key| !REQUIRED_FIELDS.contains(&key.as_str())) {
            return Err(ConfigFlowError::UnknownField(unknown.clone()));
        }

        tracing::info!(
            group_id = %data.group_id,
            voice_id = %data.voice_id,
            "Config flow completed"
        );

        Ok(FlowResult::CreateEntry {
            title: ENTRY_TITLE.to_string(),
            data,
        })
    }

    pub fn data_schema() -> Vec<FormField> {
        vec![
            FormField::required_string(CONF_GROUP_ID),
            FormField::required_string(CONF_API_KEY),
            FormField::required_string(CONF_VOICE_ID).with_default(DEFAULT_VOICE_ID),
        ]
    }
}

fn required_string(
    input: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ConfigFlowError> {
    match input.get(field) {
        None | Some(Value::Null) => Err(ConfigFlowError::MissingField(field)),
        Some(Value::String(value)) if value.trim().is_empty() => {
            Err(ConfigFlowError::EmptyField(field))
        }
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(ConfigFlowError::InvalidType(field)),
    }
}
