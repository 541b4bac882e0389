use serde::{Deserialize, Deserializer, Serialize};

/// Profile returned by `GET /me` (UserModel in the market API)
///
/// Only `user_id` is required. Display fields fall back to their defaults
/// when missing or `null` so one odd value never fails a verification.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct User {
    pub user_id: u64,
    #[serde(default, deserialize_with = "null_default")]
    pub username: String,

    /// Decimal amounts stay textual; the API sends them as strings or numbers
    #[serde(default = "zero_amount", deserialize_with = "decimal_string")]
    pub balance: String,
    #[serde(default = "zero_amount", deserialize_with = "decimal_string")]
    pub hold: String,
    #[serde(default, deserialize_with = "null_default")]
    pub currency: String,

    #[serde(default, deserialize_with = "null_default")]
    pub active_items_count: u64,
    #[serde(default, deserialize_with = "null_default")]
    pub sold_items_count: u64,
    #[serde(default, deserialize_with = "null_default")]
    pub restore_count: u64,
    #[serde(default, deserialize_with = "null_default")]
    pub like_count: u64,
    #[serde(default, deserialize_with = "null_default")]
    pub message_count: u64,

    /// UNIX seconds
    #[serde(default, deserialize_with = "null_default")]
    pub register_date: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub last_activity: i64,

    #[serde(default, deserialize_with = "null_default")]
    pub user_title: String,
    #[serde(default, deserialize_with = "flag")]
    pub is_banned: bool,

    #[serde(default, deserialize_with = "null_default")]
    pub rendered: RenderedUser,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct RenderedUser {
    #[serde(default, deserialize_with = "null_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_default")]
    pub avatars: Avatars,
    #[serde(default, deserialize_with = "null_default")]
    pub link: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Avatars {
    #[serde(default, deserialize_with = "null_default")]
    pub l: String,
    #[serde(default, deserialize_with = "null_default")]
    pub m: String,
    #[serde(default, deserialize_with = "null_default")]
    pub s: String,
}

impl User {
    /// Best avatar URL available, largest first
    pub fn avatar_url(&self) -> Option<&str> {
        let avatars = &self.rendered.avatars;
        [&avatars.l, &avatars.m, &avatars.s]
            .into_iter()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
    }

    pub fn profile_link(&self) -> Option<&str> {
        let link = self.rendered.link.trim();
        (!link.is_empty()).then_some(link)
    }
}

fn zero_amount() -> String {
    "0".to_string()
}

/// `null` becomes the type's default
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Booleans sometimes arrive as 0/1
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Bool(b) => Ok(b),
        serde_json::Value::Number(n) => Ok(n.as_f64().is_some_and(|v| v != 0.0)),
        serde_json::Value::String(s) => Ok(matches!(s.trim(), "1" | "true")),
        serde_json::Value::Null => Ok(false),
        other => Err(serde::de::Error::custom(format!("expected boolean, got {}", other))),
    }
}

fn decimal_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok("0".to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected decimal string or number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "user_id": 42,
        "username": "tester",
        "balance": "1500.50",
        "hold": "0.00",
        "currency": "rub",
        "active_items_count": 3,
        "sold_items_count": 17,
        "restore_count": 1,
        "register_date": 1614834367,
        "last_activity": 1700000000,
        "like_count": 9,
        "message_count": 120,
        "user_title": "Seller",
        "is_banned": false,
        "rendered": {
            "username": "<b>tester</b>",
            "avatars": { "l": "https://cdn.example/l.jpg", "m": "https://cdn.example/m.jpg", "s": "" },
            "link": "https://lolz.live/members/42/"
        }
    }"#;

    #[test]
    fn test_parse_full_user() {
        let user: User = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(user.user_id, 42);
        assert_eq!(user.balance, "1500.50");
        assert_eq!(user.sold_items_count, 17);
        assert_eq!(user.avatar_url(), Some("https://cdn.example/l.jpg"));
        assert_eq!(user.profile_link(), Some("https://lolz.live/members/42/"));
    }

    #[test]
    fn test_numeric_balance_is_kept_as_text() {
        let user: User = serde_json::from_str(
            r#"{"user_id":1,"username":"a","balance":12.5,"hold":0}"#,
        )
        .unwrap();
        assert_eq!(user.balance, "12.5");
        assert_eq!(user.hold, "0");
        assert_eq!(user.avatar_url(), None);
    }

    #[test]
    fn test_null_display_fields_use_defaults() {
        let user: User = serde_json::from_str(
            r#"{"user_id":5,"username":null,"balance":"1","hold":"0","currency":null,
                "user_title":null,"like_count":null,"register_date":null,
                "rendered":{"username":"x","avatars":{"l":null,"m":"https://cdn.example/m.jpg"},"link":null}}"#,
        )
        .unwrap();
        assert_eq!(user.username, "");
        assert_eq!(user.currency, "");
        assert_eq!(user.user_title, "");
        assert_eq!(user.like_count, 0);
        assert_eq!(user.register_date, 0);
        assert_eq!(user.avatar_url(), Some("https://cdn.example/m.jpg"));
        assert_eq!(user.profile_link(), None);
    }

    #[test]
    fn test_null_rendered_block_uses_default() {
        let user: User = serde_json::from_str(r#"{"user_id":5,"rendered":null}"#).unwrap();
        assert_eq!(user.rendered, RenderedUser::default());
    }

    #[test]
    fn test_is_banned_accepts_numbers() {
        let banned: User = serde_json::from_str(r#"{"user_id":1,"is_banned":1}"#).unwrap();
        assert!(banned.is_banned);

        let active: User = serde_json::from_str(r#"{"user_id":1,"is_banned":0}"#).unwrap();
        assert!(!active.is_banned);

        let unknown: User = serde_json::from_str(r#"{"user_id":1,"is_banned":null}"#).unwrap();
        assert!(!unknown.is_banned);
    }

    #[test]
    fn test_missing_amounts_default_to_zero() {
        let user: User = serde_json::from_str(r#"{"user_id":1,"username":"a"}"#).unwrap();
        assert_eq!(user.balance, "0");
        assert_eq!(user.hold, "0");
    }

    #[test]
    fn test_boolean_balance_is_rejected() {
        let result: Result<User, _> = serde_json::from_str(
            r#"{"user_id":1,"username":"a","balance":true,"hold":"0"}"#,
        );
        assert!(result.is_err());
    }
}
