use serde::Deserialize;

/// Wire shape of `GET /api/message`. Extra fields are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

/// Fetches the greeting from the backend.
pub async fn fetch_message(url: &str) -> Result<String, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|_| "Network error calling backend.".to_string())?;
    if !resp.ok() {
        return Err(format!("Backend error: HTTP {}", resp.status()));
    }
    let body: MessageResponse = resp
        .json()
        .await
        .map_err(|_| "Failed to parse JSON from backend.".to_string())?;
    Ok(body.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_message_field() {
        let body: MessageResponse =
            serde_json::from_str(r#"{"message": "Hello from Mocked Lambda!"}"#).unwrap();
        assert_eq!(body.message, "Hello from Mocked Lambda!");
    }

    #[test]
    fn tolerates_extra_fields() {
        let body: MessageResponse =
            serde_json::from_str(r#"{"message": "hi", "extra": 1}"#).unwrap();
        assert_eq!(body.message, "hi");
    }

    #[test]
    fn missing_field_is_an_error() {
        assert!(serde_json::from_str::<MessageResponse>(r#"{"msg": "hi"}"#).is_err());
    }
}
