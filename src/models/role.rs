use serde::{Deserialize, Serialize};

/// Closed set of faculty roles as stored in the `faculty.role` column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Faculty,
    Hod,
    Ahod,
}

/// Operations gated by role. Routes consult `Role::allows` instead of
/// comparing role strings inline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    MarkAttendance,
    ViewAdminReports,
}

impl Role {
    pub fn from_db(raw: &str) -> Option<Role> {
        match raw {
            "faculty" => Some(Role::Faculty),
            "hod" => Some(Role::Hod),
            "ahod" => Some(Role::Ahod),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Faculty => "faculty",
            Role::Hod => "hod",
            Role::Ahod => "ahod",
        }
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Role::Hod | Role::Ahod)
    }

    pub fn allows(self, op: Operation) -> bool {
        match op {
            // Admins are explicitly forbidden from marking attendance.
            Operation::MarkAttendance => matches!(self, Role::Faculty),
            Operation::ViewAdminReports => self.is_admin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles_only() {
        assert_eq!(Role::from_db("faculty"), Some(Role::Faculty));
        assert_eq!(Role::from_db("hod"), Some(Role::Hod));
        assert_eq!(Role::from_db("ahod"), Some(Role::Ahod));
        assert_eq!(Role::from_db("admin"), None);
        assert_eq!(Role::from_db(""), None);
    }

    #[test]
    fn capability_table() {
        assert!(Role::Faculty.allows(Operation::MarkAttendance));
        assert!(!Role::Hod.allows(Operation::MarkAttendance));
        assert!(!Role::Ahod.allows(Operation::MarkAttendance));

        assert!(!Role::Faculty.allows(Operation::ViewAdminReports));
        assert!(Role::Hod.allows(Operation::ViewAdminReports));
        assert!(Role::Ahod.allows(Operation::ViewAdminReports));
    }

    #[test]
    fn db_string_roundtrip() {
        for role in [Role::Faculty, Role::Hod, Role::Ahod] {
            assert_eq!(Role::from_db(role.as_str()), Some(role));
        }
    }
}
