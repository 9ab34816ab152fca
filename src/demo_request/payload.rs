use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;

pub const MISSING_FIELDS: &str = "Missing required fields";

/// Body of `POST /v1/submit-demo-request` as sent by the landing page.
/// Fields stay untyped until `validate` decides what counts as present.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoRequestPayload {
    pub full_name: Option<Value>,
    pub company_email: Option<Value>,
    pub phone_number: Option<Value>,
}

/// A payload that passed the presence check. Contents are otherwise
/// unvalidated: email and phone formats are the submitter's problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoRequest {
    pub full_name: String,
    pub company_email: String,
    pub phone_number: String,
}

impl DemoRequestPayload {
    /// Only unparseable JSON and a bare `null` body are errors. Any other
    /// non-object body has no fields and fails validation later.
    pub fn from_json(body: &[u8]) -> Result<Self, AppError> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Null => Err(AppError::Internal(
                "Cannot read fields of a null request body".to_string(),
            )),
            value @ Value::Object(_) => Ok(serde_json::from_value(value)?),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(self) -> Result<DemoRequest, AppError> {
        match (
            present(self.full_name),
            present(self.company_email),
            present(self.phone_number),
        ) {
            (Some(full_name), Some(company_email), Some(phone_number)) => Ok(DemoRequest {
                full_name,
                company_email,
                phone_number,
            }),
            _ => Err(AppError::Validation(MISSING_FIELDS.to_string())),
        }
    }
}

/// `null`, `false`, `0` and `""` are missing. Other scalars are taken as
/// their text form; arrays and objects are rejected.
fn present(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}
