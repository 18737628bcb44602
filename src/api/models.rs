use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /concise`. Every field is optional; absent and `null`
/// fields read as empty strings.
#[derive(Debug, Default, Deserialize)]
pub struct ConciseRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub selection: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hostname: String,
}

#[derive(Debug, Serialize)]
pub struct ConciseResponse {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::ConciseRequest;

    #[test]
    fn missing_and_null_fields_default_to_empty() {
        let req: ConciseRequest =
            serde_json::from_str(r#"{"title":null,"selection":"hi","extra":1}"#).unwrap();
        assert_eq!(req.selection, "hi");
        assert_eq!(req.title, "");
        assert_eq!(req.question, "");
        assert_eq!(req.text, "");
        assert_eq!(req.hostname, "");
    }

    #[test]
    fn non_string_fields_are_rejected() {
        assert!(serde_json::from_str::<ConciseRequest>(r#"{"question":5}"#).is_err());
    }
}
