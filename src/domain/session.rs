use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Characters of the bearer token shown on the console.
pub const TOKEN_PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

impl User {
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or("-")
    }

    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or("-")
    }
}

/// `data.login` as returned by the API.
///
/// A rejected login comes back with a null `token`/`user` rather than a
/// top-level error.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginPayload {
    pub token: Option<String>,
    pub user: Option<User>,
    #[serde(default)]
    pub errors: Option<Vec<Value>>,
}

impl LoginPayload {
    /// Entries in the payload-level `errors` list.
    pub fn error_count(&self) -> usize {
        self.errors.as_ref().map_or(0, Vec::len)
    }

    /// `None` unless both a non-empty token and a user are present.
    pub fn into_session(self) -> Option<Session> {
        match (self.token, self.user) {
            (Some(token), Some(user)) if !token.is_empty() => Some(Session { token, user }),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn token_preview(&self) -> &str {
        match self.token.char_indices().nth(TOKEN_PREVIEW_CHARS) {
            Some((idx, _)) => &self.token[..idx],
            None => &self.token,
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"***")
            .field("user", &self.user)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user() -> User {
        User {
            id: "u-1".into(),
            email: Some("al-hussein@papayatrading.com".into()),
            full_name: Some("Al Hussein".into()),
        }
    }

    #[test]
    fn preview_truncates_long_tokens_to_fifty_chars() {
        let session = Session { token: "x".repeat(120), user: user() };
        assert_eq!(session.token_preview().len(), 50);
    }

    #[test]
    fn preview_keeps_short_tokens_whole() {
        let session = Session { token: "abc".into(), user: user() };
        assert_eq!(session.token_preview(), "abc");
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let session = Session { token: "é".repeat(60), user: user() };
        assert_eq!(session.token_preview().chars().count(), 50);
    }

    #[test]
    fn debug_hides_the_token() {
        let session = Session { token: "secret-jwt".into(), user: user() };
        assert!(!format!("{session:?}").contains("secret-jwt"));
    }

    #[test]
    fn payload_with_token_and_user_becomes_a_session() {
        let payload: LoginPayload = serde_json::from_value(json!({
            "token": "jwt",
            "user": { "id": "u-1", "email": "a@b.c", "fullName": "A B" },
            "errors": null
        }))
        .unwrap();
        let session = payload.into_session().unwrap();
        assert_eq!(session.user.display_name(), "A B");
        assert_eq!(session.user.display_email(), "a@b.c");
    }

    #[test]
    fn payload_errors_are_counted() {
        let payload: LoginPayload = serde_json::from_value(json!({
            "token": null,
            "user": null,
            "errors": [{ "__typename": "InvalidCredentialsError" }]
        }))
        .unwrap();
        assert_eq!(payload.error_count(), 1);

        let clean: LoginPayload = serde_json::from_value(json!({ "token": "jwt", "user": null })).unwrap();
        assert_eq!(clean.error_count(), 0);
    }

    #[test]
    fn payload_without_token_is_rejected() {
        let payload: LoginPayload =
            serde_json::from_value(json!({ "token": null, "user": null })).unwrap();
        assert!(payload.into_session().is_none());
    }
}
