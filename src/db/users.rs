// src/db/users.rs
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

/// Insert a user if they don't exist, then return the user id.
/// Email should already be normalized by caller (trim/lowercase).
/// An existing user's display name is refreshed.
pub fn get_or_create_user(
    conn: &Connection,
    email: &str,
    display_name: &str,
    now: i64,
) -> Result<i64, ServerError> {
    conn.execute(
        "insert into users (email, display_name, created_at) values (?, ?, ?)
         on conflict(email) do update set display_name = excluded.display_name",
        params![email, display_name, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert user failed: {e}")))?;

    conn.query_row(
        "select id from users where email = ?",
        params![email],
        |row| row.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("select user id failed: {e}")))
}

pub fn touch_last_login(conn: &Connection, user_id: i64, now: i64) -> Result<(), ServerError> {
    conn.execute(
        "update users set last_login_at = ? where id = ?",
        params![now, user_id],
    )
    .map_err(|e| ServerError::DbError(format!("update last_login_at failed: {e}")))?;
    Ok(())
}

/// What the dashboard shows about the signed-in user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub email: String,
    pub display_name: String,
    /// Unix seconds.
    pub created_at: i64,
}

pub fn get_user_profile(
    conn: &Connection,
    user_id: i64,
) -> Result<Option<UserProfile>, ServerError> {
    conn.query_row(
        "select email, display_name, created_at from users where id = ?",
        params![user_id],
        |row| {
            Ok(UserProfile {
                email: row.get(0)?,
                display_name: row.get(1)?,
                created_at: row.get(2)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("load user failed: {e}")))
}
