use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Request handed to a controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpRequest {
    #[serde(default)]
    pub body: SignUpBody,
}

impl HttpRequest {
    pub fn new(body: SignUpBody) -> Self {
        Self { body }
    }
}

/// Registration form. Every field may be absent.
///
/// A field holding anything but a JSON string is read as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignUpBody {
    #[serde(deserialize_with = "text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "text")]
    pub password: Option<String>,
    #[serde(deserialize_with = "text")]
    pub password_confirmation: Option<String>,
}

fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(value) => Ok(Some(value)),
        _ => Ok(None),
    }
}

impl SignUpBody {
    /// Value of a form field by its wire name.
    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "name" => &self.name,
            "email" => &self.email,
            "password" => &self.password,
            "password_confirmation" => &self.password_confirmation,
            _ => return None,
        };

        value.as_deref()
    }
}
