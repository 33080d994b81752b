//! Staff members: a person holding a grade and a roster identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use tracing::info;
use uuid::Uuid;

use super::notice::Notice;
use super::types::{Gender, Grade, Introduce, Person};

/// Number of distinct identifiers (`0000`..=`9999`).
const ID_SPACE: u128 = 10_000;

// ─────────────────────────────────────────────────────────────────
// Staff Member Id
// ─────────────────────────────────────────────────────────────────

/// Four-digit staff identifier, rendered zero-padded (e.g. `0427`).
///
/// Identifiers are drawn at random. Two independently generated members can
/// collide; only the roster checks a fresh draw against its own members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StaffMemberId(u16);

impl StaffMemberId {
    /// Draw a random identifier.
    pub fn generate() -> Self {
        let value = Uuid::new_v4().as_u128() % ID_SPACE;
        Self(value as u16)
    }

    /// Build an identifier from its numeric value, wrapping into the four-digit range.
    pub fn from_raw(value: u16) -> Self {
        Self(value % ID_SPACE as u16)
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for StaffMemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl FromStr for StaffMemberId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("Invalid staff id '{}': expected four digits", s));
        }
        s.parse::<u16>()
            .map(Self)
            .map_err(|e| format!("Invalid staff id '{}': {}", s, e))
    }
}

impl Serialize for StaffMemberId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ─────────────────────────────────────────────────────────────────
// Staff Member
// ─────────────────────────────────────────────────────────────────

/// A person on the roster with a grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffMember {
    id: StaffMemberId,
    #[serde(flatten)]
    person: Person,
    grade: Grade,
}

impl StaffMember {
    /// Create a member with a freshly drawn identifier.
    pub fn new(name: impl Into<String>, gender: Gender, age: u32, grade: Grade) -> Self {
        Self::with_id(StaffMemberId::generate(), Person::new(name, gender, age), grade)
    }

    pub(crate) fn with_id(id: StaffMemberId, person: Person, grade: Grade) -> Self {
        Self { id, person, grade }
    }

    pub fn id(&self) -> StaffMemberId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.person.name()
    }

    pub fn gender(&self) -> Gender {
        self.person.gender()
    }

    pub fn age(&self) -> u32 {
        self.person.age()
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// Base pay for the current grade.
    pub fn compensation(&self) -> u32 {
        self.grade.base_pay()
    }

    /// Move one grade up. At the top grade nothing changes and a notice is returned.
    pub fn promote(&mut self) -> Result<Grade, Notice> {
        let next = self.grade.next_higher().ok_or_else(|| {
            Notice::AlreadyTopGrade {
                name: self.name().to_string(),
                grade: self.grade,
            }
            .raise()
        })?;
        info!(id = %self.id, name = %self.name(), from = %self.grade, to = %next, "Promoted");
        self.grade = next;
        Ok(next)
    }

    /// Move one grade down. At the bottom grade nothing changes and a notice is returned.
    pub fn demote(&mut self) -> Result<Grade, Notice> {
        let next = self.grade.next_lower().ok_or_else(|| {
            Notice::AlreadyBottomGrade {
                name: self.name().to_string(),
                grade: self.grade,
            }
            .raise()
        })?;
        info!(id = %self.id, name = %self.name(), from = %self.grade, to = %next, "Demoted");
        self.grade = next;
        Ok(next)
    }

    /// Give up the grade and identifier, keeping only the identity record.
    pub fn into_person(self) -> Person {
        self.person
    }
}

impl Introduce for StaffMember {
    fn person(&self) -> &Person {
        &self.person
    }

    fn role_label(&self) -> Option<&str> {
        Some(self.grade.label())
    }
}

impl fmt::Display for StaffMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.introduction())
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
