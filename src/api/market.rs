// Lolzteam Market profile endpoint
use reqwest::StatusCode;

use crate::models::{ApiErrorBody, MeResponse, User};
use crate::utils::errors::{AppError, AppResult};
use crate::utils::mask_token;

/// Verify a token by fetching the profile it belongs to.
/// Single attempt; the caller has already rejected empty tokens.
pub async fn fetch_me(base_url: &str, token: &str) -> AppResult<User> {
    let token = token.trim();
    if token.is_empty() {
        return Err(AppError::EmptyToken);
    }

    let url = format!("{}/me", base_url.trim_end_matches('/'));
    log::debug!("[Market] GET {} (token {})", url, mask_token(token));

    let response = crate::utils::http::client()?
        .get(&url)
        .bearer_auth(token)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    let result = interpret_me_response(status, &body);
    match &result {
        Ok(user) => log::info!("[Market] Verified token for {} (id {})", user.username, user.user_id),
        Err(e) => log::warn!("[Market] Verification failed ({}): {}", status, e),
    }
    result
}

/// Map a raw `/me` response to a user or a displayable error.
///
/// Non-2xx: first entry of `errors` if the body carries one, otherwise a
/// generic status message. 2xx: the `user` object, or the parse failure.
pub fn interpret_me_response(status: StatusCode, body: &str) -> AppResult<User> {
    if !status.is_success() {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.first_message().map(str::to_string));
        return Err(match message {
            Some(msg) => AppError::Api(msg),
            None => AppError::HttpStatus(status.as_u16()),
        });
    }

    let parsed: MeResponse = serde_json::from_str(body)?;
    Ok(parsed.user)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OK_BODY: &str = r#"{
        "user": {
            "user_id": 7,
            "username": "abc",
            "balance": "10.00",
            "hold": "1.00",
            "currency": "usd",
            "register_date": 1600000000,
            "last_activity": 1700000000
        },
        "system_info": { "visitor_id": 7, "time": 1700000001 }
    }"#;

    #[test]
    fn test_success_returns_user() {
        let user = interpret_me_response(StatusCode::OK, OK_BODY).unwrap();
        assert_eq!(user.user_id, 7);
        assert_eq!(user.username, "abc");
        assert_eq!(user.currency, "usd");
    }

    #[test]
    fn test_error_array_first_entry_is_surfaced() {
        let err = interpret_me_response(
            StatusCode::UNAUTHORIZED,
            r#"{"errors":["The access token is invalid.","other"]}"#,
        )
        .unwrap_err();
        assert_eq!(err, AppError::Api("The access token is invalid.".to_string()));
        assert_eq!(err.to_string(), "The access token is invalid.");
    }

    #[test]
    fn test_error_without_errors_field_uses_status() {
        let err = interpret_me_response(StatusCode::FORBIDDEN, r#"{"message":"nope"}"#).unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! Status: 403");
    }

    #[test]
    fn test_error_with_non_json_body_uses_status() {
        let err = interpret_me_response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>")
            .unwrap_err();
        assert_eq!(err, AppError::HttpStatus(502));
    }

    #[test]
    fn test_error_with_empty_errors_array_uses_status() {
        let err = interpret_me_response(StatusCode::TOO_MANY_REQUESTS, r#"{"errors":[]}"#)
            .unwrap_err();
        assert_eq!(err, AppError::HttpStatus(429));
    }

    #[test]
    fn test_blank_first_error_uses_status() {
        let err = interpret_me_response(StatusCode::UNAUTHORIZED, r#"{"errors":["","second"]}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! Status: 401");
    }

    #[test]
    fn test_success_tolerates_odd_display_fields() {
        let body = r#"{"user":{"user_id":8,"username":"odd","balance":"5","user_title":null,
            "currency":null,"is_banned":0}}"#;
        let user = interpret_me_response(StatusCode::OK, body).unwrap();
        assert_eq!(user.user_id, 8);
        assert_eq!(user.hold, "0");
        assert_eq!(user.user_title, "");
        assert!(!user.is_banned);
    }

    #[test]
    fn test_success_with_invalid_json_is_parse_error() {
        let err = interpret_me_response(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, AppError::InvalidResponse(_)));
    }

    #[test]
    fn test_success_without_user_is_parse_error() {
        let err = interpret_me_response(StatusCode::OK, r#"{"system_info":{}}"#).unwrap_err();
        assert!(matches!(err, AppError::InvalidResponse(_)));
    }

    #[test]
    fn test_empty_token_never_hits_network() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        // Unroutable base URL: the call must fail before any connection attempt
        let result = rt.block_on(fetch_me("http://0.0.0.0:1", "   "));
        assert_eq!(result, Err(AppError::EmptyToken));
    }
}
