use std::io::Write;
use tracing::{info, warn};

use crate::config::Credentials;
use crate::domain::{LoginPayload, Session};
use crate::error::SmokeError;
use crate::graphql::{string_literal, GraphQlClient};
use crate::report::Console;

pub fn login_document(credentials: &Credentials) -> String {
    format!(
        r#"
mutation Login {{
  login(input: {{
    email: {email}
    password: {password}
  }}) {{
    token
    user {{
      id
      email
      fullName
    }}
    errors {{
      __typename
    }}
  }}
}}
"#,
        email = string_literal(&credentials.email),
        password = string_literal(&credentials.password),
    )
}

/// Log in and return the session.
///
/// Any top-level `errors` key, or a payload without a token, prints the
/// response and yields [`SmokeError::LoginRejected`].
pub async fn authenticate<W: Write>(
    client: &GraphQlClient,
    credentials: &Credentials,
    console: &mut Console<W>,
) -> Result<Session, SmokeError> {
    console.line("🔐 Logging in...")?;

    let response = client
        .execute(&login_document(credentials), None, None)
        .await?;
    let envelope = response.json()?;

    if envelope.has_errors() {
        warn!(status = %response.status, "login returned GraphQL errors");
        return reject(console, envelope.into_raw());
    }

    let payload: LoginPayload = envelope.data_field("login")?;
    let payload_errors = payload.error_count();
    let Some(session) = payload.into_session() else {
        warn!(status = %response.status, payload_errors, "login payload carried no token");
        return reject(console, envelope.into_raw());
    };

    info!(user_id = %session.user.id, "logged in");
    console.line(format_args!(
        "✅ Logged in as: {} ({})",
        session.user.display_name(),
        session.user.display_email()
    ))?;
    console.line(format_args!("🎫 Token: {}...", session.token_preview()))?;
    console.blank()?;

    Ok(session)
}

fn reject<W: Write>(
    console: &mut Console<W>,
    response: serde_json::Value,
) -> Result<Session, SmokeError> {
    console.line("❌ Login failed:")?;
    console.json(&response)?;
    Err(SmokeError::LoginRejected { response })
}
