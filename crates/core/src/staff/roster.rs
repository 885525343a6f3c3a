//! Technician roster derived from staff records.

use salon_shared::types::StaffId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::{coerce_optional_text, coerce_text};

/// Role tag carried by technicians in the users collection.
pub const TECHNICIAN_ROLE: &str = "technician";

/// A staff record as stored in the users collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawStaffMember")]
pub struct StaffMember {
    /// Store document key.
    pub id: Option<StaffId>,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: Option<String>,
    /// Role tag (`admin`, `technician`, ...).
    pub role: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawStaffMember {
    id: Value,
    name: Value,
    email: Value,
    role: Value,
}

impl From<RawStaffMember> for StaffMember {
    fn from(raw: RawStaffMember) -> Self {
        Self {
            id: coerce_optional_text(&raw.id).map(StaffId::new),
            name: coerce_text(&raw.name),
            email: coerce_optional_text(&raw.email),
            role: coerce_text(&raw.role),
        }
    }
}

impl StaffMember {
    /// Decodes a snapshot of raw documents; unreadable documents become empty members.
    #[must_use]
    pub fn from_snapshot(documents: &[Value]) -> Vec<Self> {
        documents
            .iter()
            .map(|doc| Self::deserialize(doc).unwrap_or_default())
            .collect()
    }

    /// Returns true if this member is tagged as a technician.
    #[must_use]
    pub fn is_technician(&self) -> bool {
        self.role.eq_ignore_ascii_case(TECHNICIAN_ROLE)
    }

    /// Name shown in reports; falls back to the email when the name is blank.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        if self.name.is_empty() {
            self.email.as_deref()
        } else {
            Some(&self.name)
        }
    }
}

/// Ordered technician display names active at computation time.
///
/// Names are unique; a repeated name keeps its first position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Roster(Vec<String>);

impl Roster {
    /// Builds a roster from display names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut roster = Vec::new();
        for name in names {
            let name = name.into();
            if !roster.contains(&name) {
                roster.push(name);
            }
        }
        Self(roster)
    }

    /// Builds the roster from staff records tagged as technicians.
    #[must_use]
    pub fn from_staff(staff: &[StaffMember]) -> Self {
        Self::new(
            staff
                .iter()
                .filter(|member| member.is_technician())
                .filter_map(StaffMember::display_name),
        )
    }

    /// Technician names in roster order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Number of technicians.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Roster {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<Roster> for Vec<String> {
    fn from(roster: Roster) -> Self {
        roster.0
    }
}

impl<S: Into<String>> FromIterator<S> for Roster {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn member(name: &str, email: Option<&str>, role: &str) -> StaffMember {
        StaffMember {
            id: None,
            name: name.to_string(),
            email: email.map(str::to_string),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_roster_keeps_first_position_of_duplicates() {
        let roster = Roster::new(["Amy", "Bao", "Amy"]);
        assert_eq!(roster.names(), ["Amy", "Bao"]);
    }

    #[test]
    fn test_from_staff_keeps_technicians_only() {
        let staff = vec![
            member("Owner", None, "admin"),
            member("Amy", None, "technician"),
            member("Bao", None, "Technician"),
            member("Desk", None, "receptionist"),
        ];
        let roster = Roster::from_staff(&staff);
        assert_eq!(roster.names(), ["Amy", "Bao"]);
    }

    #[test]
    fn test_from_staff_falls_back_to_email() {
        let staff = vec![
            member("", Some("cat@salon.test"), "technician"),
            member("", None, "technician"),
        ];
        let roster = Roster::from_staff(&staff);
        assert_eq!(roster.names(), ["cat@salon.test"]);
    }

    #[test]
    fn test_deserialized_roster_drops_repeated_names() {
        let roster: Roster = serde_json::from_value(json!(["Amy", "Bao", "Amy"])).unwrap();
        assert_eq!(roster.names(), ["Amy", "Bao"]);
        assert_eq!(serde_json::to_value(&roster).unwrap(), json!(["Amy", "Bao"]));
    }

    #[test]
    fn test_staff_member_decodes_fail_soft() {
        let member: StaffMember = serde_json::from_value(json!({
            "id": "u1",
            "name": " Amy ",
            "role": "technician",
            "phone": 5
        }))
        .unwrap();
        assert_eq!(member.id, Some(StaffId::new("u1")));
        assert_eq!(member.name, "Amy");
        assert!(member.email.is_none());
        assert!(member.is_technician());
    }
}
