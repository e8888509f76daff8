use serde::{Deserialize, Serialize};

use crate::constants::PANEL_PATH_PREFIX;

/// Role resolved from the persisted user-type flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Guest,
    Visitor,
    Employee,
}

impl Role {
    /// Reads the stored flag. The museum stores Spanish values ("Empleado",
    /// "Visitante"); anything unrecognized is a guest.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag.map(|f| f.trim().to_lowercase()).as_deref() {
            Some("empleado") | Some("employee") => Role::Employee,
            Some("visitante") | Some("visitor") => Role::Visitor,
            _ => Role::Guest,
        }
    }

    /// Staff panel routes are reserved for employees; every other route is open.
    pub fn can_access(&self, path: &str) -> bool {
        let is_panel = path == PANEL_PATH_PREFIX
            || path
                .strip_prefix(PANEL_PATH_PREFIX)
                .map_or(false, |rest| rest.starts_with('/'));
        !is_panel || *self == Role::Employee
    }
}
