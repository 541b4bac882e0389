// API response wrapper types
use serde::Deserialize;

use super::User;

/// Body of a successful `GET /me`
#[derive(Debug, Deserialize)]
pub struct MeResponse {
    pub user: User,
}

/// Body of a failed request
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ApiErrorBody {
    /// First error message; a blank first entry counts as none
    pub fn first_message(&self) -> Option<&str> {
        self.errors
            .first()
            .map(|e| e.trim())
            .filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"errors":["Invalid token","second"]}"#).unwrap();
        assert_eq!(body.first_message(), Some("Invalid token"));
    }

    #[test]
    fn test_missing_errors_field() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"nope"}"#).unwrap();
        assert_eq!(body.first_message(), None);
    }

    #[test]
    fn test_blank_first_error_is_not_replaced_by_later_one() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"errors":["", "second"]}"#).unwrap();
        assert_eq!(body.first_message(), None);

        let body: ApiErrorBody = serde_json::from_str(r#"{"errors":["  "]}"#).unwrap();
        assert_eq!(body.first_message(), None);
    }
}
