//! The leader, an extra-roster role that administers a roster and hands
//! over leadership on resignation.

use std::fmt;
use std::sync::Arc;

use tracing::info;

use super::member::{StaffMember, StaffMemberId};
use super::notice::Notice;
use super::registry::Roster;
use super::types::{Gender, Grade, Introduce, Person};

/// Fixed monthly pay of the leader.
pub const LEADER_COMPENSATION: u32 = 1_000_000;

const ROLE_LABEL: &str = "President";

/// Head of the organization. Not a roster member and holds no grade.
pub struct Leader {
    person: Person,
    roster: Option<Arc<Roster>>,
}

impl Leader {
    pub fn new(name: impl Into<String>, gender: Gender, age: u32) -> Self {
        Self {
            person: Person::new(name, gender, age),
            roster: None,
        }
    }

    /// Build a leader from a member returned by [`Leader::resign`].
    ///
    /// The new leader starts without a roster; attach one with [`Leader::set_roster`].
    pub fn from_successor(member: StaffMember) -> Self {
        Self {
            person: member.into_person(),
            roster: None,
        }
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

    pub fn compensation(&self) -> u32 {
        LEADER_COMPENSATION
    }

    /// The roster this leader governs, if any.
    pub fn roster(&self) -> Option<&Arc<Roster>> {
        self.roster.as_ref()
    }

    /// Govern `roster`, replacing any previous one.
    pub fn set_roster(&mut self, roster: Arc<Roster>) {
        info!(
            leader = %self.name(),
            members = roster.current_number(),
            capacity = roster.capacity(),
            replaced = self.roster.is_some(),
            "Roster attached"
        );
        self.roster = Some(roster);
    }

    pub fn add_member(
        &self,
        name: impl Into<String>,
        gender: Gender,
        age: u32,
        grade: Grade,
    ) -> Result<StaffMemberId, Notice> {
        self.attached()?.add_member(name, gender, age, grade)
    }

    pub fn remove_member(&self, member: &StaffMember) -> Result<StaffMember, Notice> {
        self.attached()?.remove_member(member)
    }

    pub fn find_by_name(&self, name: &str) -> Option<StaffMember> {
        self.roster.as_ref()?.find_by_name(name)
    }

    pub fn find_by_id(&self, id: StaffMemberId) -> Option<StaffMember> {
        self.roster.as_ref()?.find_by_id(id)
    }

    /// Step down and designate a successor.
    ///
    /// The chosen member is removed from the roster and returned. This leader is
    /// left untouched; installing the successor is up to the caller.
    pub fn resign(&self) -> Result<StaffMember, Notice> {
        let roster = self.attached()?;
        let successor = roster
            .select_successor()
            .ok_or_else(|| Notice::NoSuccessor.raise())?;
        let successor = roster.remove_member(&successor)?;

        info!(
            leader = %self.name(),
            successor = %successor.name(),
            successor_id = %successor.id(),
            grade = %successor.grade(),
            remaining = roster.current_number(),
            "Leader resigned"
        );
        Ok(successor)
    }

    fn attached(&self) -> Result<&Arc<Roster>, Notice> {
        self.roster.as_ref().ok_or_else(|| {
            Notice::NoRosterAttached {
                leader: self.name().to_string(),
            }
            .raise()
        })
    }
}

impl Introduce for Leader {
    fn person(&self) -> &Person {
        &self.person
    }

    fn role_label(&self) -> Option<&str> {
        Some(ROLE_LABEL)
    }
}

impl fmt::Display for Leader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.introduction())
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
