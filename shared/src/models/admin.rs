//! Admin User Model

use serde::{Deserialize, Serialize};

/// Admin role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    /// 超级管理员
    SuperAdmin,
    /// 普通管理员
    #[default]
    Admin,
}

/// Logged-in admin (the persisted user record)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub role: AdminRole,
    /// active, inactive, locked
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "active".to_string()
}

impl AdminUser {
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            avatar: String::new(),
            role: AdminRole::default(),
            status: default_status(),
        }
    }

    /// Can use the admin panel.
    ///
    /// Both roles pass, the same set the server's admin routes accept.
    pub fn is_admin(&self) -> bool {
        matches!(self.role, AdminRole::Admin | AdminRole::SuperAdmin)
    }

    pub fn is_super_admin(&self) -> bool {
        self.role == AdminRole::SuperAdmin
    }

    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}
