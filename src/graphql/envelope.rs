use serde::de::DeserializeOwned;
use serde_json::Value;

use super::GraphQlError;

/// A parsed GraphQL response document.
///
/// The raw JSON is kept so failures can be echoed verbatim.
#[derive(Debug, Clone)]
pub struct GraphQlEnvelope {
    raw: Value,
}

impl GraphQlEnvelope {
    pub fn parse(body: &str) -> Result<Self, GraphQlError> {
        let raw = serde_json::from_str(body).map_err(GraphQlError::Decode)?;
        Ok(Self { raw })
    }

    /// True when the top-level object has an `errors` key, whatever its value
    /// and whether or not `data` is also present.
    pub fn has_errors(&self) -> bool {
        self.raw
            .as_object()
            .is_some_and(|obj| obj.contains_key("errors"))
    }

    /// Deserialize `data.<field>`. A missing or null field is an error.
    pub fn data_field<T: DeserializeOwned>(&self, field: &'static str) -> Result<T, GraphQlError> {
        let value = self
            .raw
            .get("data")
            .and_then(|data| data.get(field))
            .filter(|v| !v.is_null())
            .ok_or(GraphQlError::MissingData(field))?;
        T::deserialize(value).map_err(GraphQlError::Decode)
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn into_raw(self) -> Value {
        self.raw
    }
}
