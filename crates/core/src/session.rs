//! Explicit session state with an acquire/release lifecycle.
//!
//! The session is a plain value passed by reference into whatever needs
//! authorization context — never an ambient singleton. It is opened from
//! the `/login` response and closed by consuming it; token persistence
//! between runs is the embedding client's concern.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Timestamp};

/// User roles. Admins manage every dojo; senseis only their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "sensei")]
    Sensei,
}

/// The authenticated user as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub nombre: String,
    pub rol: Role,
    /// The sensei's dojo; absent for admins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dojo_id: Option<EntityId>,
}

/// The `/login` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginGrant {
    pub token: String,
    pub user: SessionUser,
}

/// An open session. Dropping or calling [`Session::close`] releases it.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    user: SessionUser,
    opened_at: Timestamp,
}

impl Session {
    /// Acquire a session from a successful login.
    pub fn open(grant: LoginGrant) -> Self {
        tracing::info!(user = %grant.user.nombre, rol = ?grant.user.rol, "session opened");
        Self {
            token: grant.token,
            user: grant.user,
            opened_at: chrono::Utc::now(),
        }
    }

    /// Release the session, consuming it so no stale handle survives logout.
    pub fn close(self) {
        tracing::info!(user = %self.user.nombre, "session closed");
    }

    pub fn user(&self) -> &SessionUser {
        &self.user
    }

    pub fn opened_at(&self) -> Timestamp {
        self.opened_at
    }

    pub fn is_admin(&self) -> bool {
        self.user.rol == Role::Admin
    }

    /// Whether this session may manage records of the given dojo.
    pub fn can_manage_dojo(&self, dojo_id: &str) -> bool {
        match self.user.rol {
            Role::Admin => true,
            Role::Sensei => self.user.dojo_id.as_deref() == Some(dojo_id),
        }
    }

    /// The `Authorization` header value for the transport collaborator.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grant(rol: Role, dojo_id: Option<&str>) -> LoginGrant {
        LoginGrant {
            token: "tok-123".into(),
            user: SessionUser {
                id: "u1".into(),
                nombre: "Mar Aguilar".into(),
                rol,
                dojo_id: dojo_id.map(String::from),
            },
        }
    }

    #[test]
    fn admin_manages_any_dojo() {
        let session = Session::open(grant(Role::Admin, None));
        assert!(session.is_admin());
        assert!(session.can_manage_dojo("d1"));
        assert!(session.can_manage_dojo("d2"));
    }

    #[test]
    fn sensei_manages_only_own_dojo() {
        let session = Session::open(grant(Role::Sensei, Some("d1")));
        assert!(!session.is_admin());
        assert!(session.can_manage_dojo("d1"));
        assert!(!session.can_manage_dojo("d2"));
    }

    #[test]
    fn sensei_without_dojo_manages_nothing() {
        let session = Session::open(grant(Role::Sensei, None));
        assert!(!session.can_manage_dojo("d1"));
    }

    #[test]
    fn bearer_header_format() {
        let session = Session::open(grant(Role::Admin, None));
        assert_eq!(session.bearer_header(), "Bearer tok-123");
    }

    #[test]
    fn login_grant_parses_wire_shape() {
        let json = r#"{
            "token": "abc",
            "user": { "_id": "u9", "nombre": "Rey", "rol": "sensei", "dojoId": "d7" }
        }"#;
        let grant: LoginGrant = serde_json::from_str(json).unwrap();
        assert_eq!(grant.user.rol, Role::Sensei);
        assert_eq!(grant.user.dojo_id.as_deref(), Some("d7"));
    }
}
