/// Platform roles and the guard sets used to protect routes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    OrgAdmin,
    Editor,
    Viewer,
    Candidate,
    /// Signed up but not yet approved
    Pending,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::OrgAdmin => "org_admin",
            Role::Editor => "editor",
            Role::Viewer => "viewer",
            Role::Candidate => "candidate",
            Role::Pending => "pending",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Role::SuperAdmin),
            "org_admin" => Ok(Role::OrgAdmin),
            "editor" => Ok(Role::Editor),
            "viewer" => Ok(Role::Viewer),
            "candidate" => Ok(Role::Candidate),
            "pending" => Ok(Role::Pending),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

pub const SUPER_ADMIN: &[Role] = &[Role::SuperAdmin];
pub const ORG_ADMIN: &[Role] = &[Role::SuperAdmin, Role::OrgAdmin];
pub const EDITOR: &[Role] = &[Role::SuperAdmin, Role::OrgAdmin, Role::Editor];
pub const VIEWER: &[Role] = &[Role::SuperAdmin, Role::OrgAdmin, Role::Editor, Role::Viewer];

/// Render a guard set for error messages
pub fn describe(roles: &[Role]) -> String {
    roles
        .iter()
        .map(Role::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
