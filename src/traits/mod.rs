//! Trait definitions for PagerDuty operations.
//!
//! [`Fetcher`] is the transport contract. The resource traits describe an
//! endpoint declaratively (path template, envelope key, model type) and
//! provide the operation on top of any `Fetcher`.

mod create;
mod delete;
mod fetcher;
mod get;
mod list;
mod update;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{PagerDutyError, Result};

pub use create::Create;
pub use delete::Delete;
pub use fetcher::{Fetcher, JsonObject};
pub use get::Get;
pub use list::List;
pub use update::Update;

/// Decode the object stored under `field` in a response.
pub(crate) fn take_field<T: DeserializeOwned>(mut response: JsonObject, field: &str) -> Result<T> {
    let item = response
        .remove(field)
        .ok_or_else(|| PagerDutyError::missing_field(field))?;
    Ok(serde_json::from_value(item)?)
}

/// Serialize `params`, optionally nesting it under `field`.
pub(crate) fn request_body<P: Serialize + ?Sized>(field: Option<&str>, params: &P) -> Result<Value> {
    let value = serde_json::to_value(params)?;
    Ok(match field {
        Some(field) => {
            let mut envelope = JsonObject::new();
            envelope.insert(field.to_string(), value);
            Value::Object(envelope)
        }
        None => value,
    })
}

/// Decode a response either from `field` or from the whole object.
pub(crate) fn response_item<T: DeserializeOwned>(response: JsonObject, field: Option<&str>) -> Result<T> {
    match field {
        Some(field) => take_field(response, field),
        None => Ok(serde_json::from_value(Value::Object(response))?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_wraps() {
        let body = request_body(Some("user"), &json!({"name": "Jane"})).unwrap();
        assert_eq!(body, json!({"user": {"name": "Jane"}}));

        let bare = request_body(None, &json!({"active": true})).unwrap();
        assert_eq!(bare, json!({"active": true}));
    }

    #[test]
    fn test_response_item() {
        let response = match json!({"user": {"name": "Jane"}}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let user: Value = response_item(response.clone(), Some("user")).unwrap();
        assert_eq!(user, json!({"name": "Jane"}));

        let whole: Value = response_item(response, None).unwrap();
        assert_eq!(whole, json!({"user": {"name": "Jane"}}));
    }
}
