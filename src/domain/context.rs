// src/domain/context.rs

/// The signed-in user, as resolved from the session cookie.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub id: i64,
    pub display_name: String,
}

/// Per-request view context handed explicitly to handlers and templates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewContext {
    pub current_user: Option<CurrentUser>,
}

impl ViewContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: CurrentUser) -> Self {
        Self {
            current_user: Some(user),
        }
    }

    pub fn current_user_id(&self) -> Option<i64> {
        self.current_user.as_ref().map(|u| u.id)
    }

    /// Gates the "add timeline update" affordance. Presence only; no roles.
    pub fn can_add_timeline_update(&self) -> bool {
        self.current_user.is_some()
    }
}
