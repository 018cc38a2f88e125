// src/auth/identity.rs
//
// Minimal stand-in for the external identity provider: an email plus a
// display name is enough to open a session.

use crate::auth::sessions::create_session;
use crate::db::users::{get_or_create_user, touch_last_login};
use crate::domain::context::CurrentUser;
use crate::errors::ServerError;
use rusqlite::Connection;

/// Trim + lowercase, minimal sanity check.
pub fn normalize_email(email: &str) -> Result<String, ServerError> {
    let e = email.trim().to_lowercase();
    if e.is_empty() || !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
        return Err(ServerError::BadRequest("invalid email".into()));
    }
    Ok(e)
}

/// Display name, falling back to the local part of the email.
pub fn display_name_for(name: Option<&str>, email: &str) -> String {
    name.map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| email.split('@').next().unwrap_or("Usuario").to_string())
}

pub struct SignedIn {
    pub user: CurrentUser,
    pub session_token: String,
}

pub fn sign_in(
    conn: &Connection,
    email: &str,
    name: Option<&str>,
    now: i64,
) -> Result<SignedIn, ServerError> {
    let email = normalize_email(email)?;
    let display_name = display_name_for(name, &email);

    let user_id = get_or_create_user(conn, &email, &display_name, now)?;
    touch_last_login(conn, user_id, now)?;
    let session_token = create_session(conn, user_id, now)?;

    Ok(SignedIn {
        user: CurrentUser {
            id: user_id,
            display_name,
        },
        session_token,
    })
}
