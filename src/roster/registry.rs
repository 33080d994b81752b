//! Roster: the capacity-bounded, ordered set of staff members.
//!
//! The member list lives behind a lock so a single `Arc<Roster>` can be held
//! by both the operator and the leader and mutated through `&self`.

use std::fmt::Write as _;

use parking_lot::RwLock;
use tracing::{debug, info};

use super::member::{StaffMember, StaffMemberId};
use super::notice::Notice;
use super::types::{Gender, Grade, Person};

// ─────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 10;

/// Draws allowed before giving up on finding a free identifier.
const MAX_ID_ATTEMPTS: u32 = 64;

// ─────────────────────────────────────────────────────────────────
// Roster
// ─────────────────────────────────────────────────────────────────

/// Ordered staff list bounded by a fixed capacity
pub struct Roster {
    capacity: usize,
    members: RwLock<Vec<StaffMember>>,
}

impl Roster {
    /// Create an empty roster. A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            members: RwLock::new(Vec::with_capacity(capacity.max(1))),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of members currently on the roster
    pub fn current_number(&self) -> usize {
        self.members.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.read().is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.current_number() >= self.capacity
    }

    /// Snapshot of all members in roster order
    pub fn members(&self) -> Vec<StaffMember> {
        self.members.read().clone()
    }

    /// Hire a new member and append it.
    ///
    /// Returns the identifier assigned to the new member.
    pub fn add_member(
        &self,
        name: impl Into<String>,
        gender: Gender,
        age: u32,
        grade: Grade,
    ) -> Result<StaffMemberId, Notice> {
        let name = name.into();
        let mut members = self.members.write();

        if members.len() >= self.capacity {
            return Err(Notice::CapacityExhausted {
                name,
                capacity: self.capacity,
            }
            .raise());
        }

        let id = Self::free_id(&members)?;
        let member = StaffMember::with_id(id, Person::new(name, gender, age), grade);
        info!(
            id = %id,
            name = %member.name(),
            grade = %grade,
            count = members.len() + 1,
            "Staff member added"
        );
        members.push(member);
        Ok(id)
    }

    /// Attach an already constructed member, keeping its identifier.
    ///
    /// A member whose identifier is already on the roster is the same member;
    /// it is refused and the roster is left as it was.
    pub fn attach(&self, member: StaffMember) -> Result<StaffMemberId, Notice> {
        let mut members = self.members.write();

        if members.iter().any(|m| m.id() == member.id()) {
            return Err(Notice::AlreadyOnRoster {
                name: member.name().to_string(),
                id: member.id(),
            }
            .raise());
        }

        if members.len() >= self.capacity {
            return Err(Notice::CapacityExhausted {
                name: member.name().to_string(),
                capacity: self.capacity,
            }
            .raise());
        }

        let id = member.id();
        info!(id = %id, name = %member.name(), count = members.len() + 1, "Staff member attached");
        members.push(member);
        Ok(id)
    }

    /// Remove a member by identity.
    pub fn remove_member(&self, member: &StaffMember) -> Result<StaffMember, Notice> {
        let mut members = self.members.write();
        match members.iter().position(|m| m.id() == member.id()) {
            Some(index) => {
                let removed = members.remove(index);
                info!(
                    id = %removed.id(),
                    name = %removed.name(),
                    count = members.len(),
                    "Staff member removed"
                );
                Ok(removed)
            }
            None => Err(Notice::MemberNotFound {
                name: member.name().to_string(),
                id: member.id(),
            }
            .raise()),
        }
    }

    /// First member with the given name, in roster order
    pub fn find_by_name(&self, name: &str) -> Option<StaffMember> {
        let found = self.members.read().iter().find(|m| m.name() == name).cloned();
        debug!(name, found = found.is_some(), "Lookup by name");
        found
    }

    /// Member with the given identifier
    pub fn find_by_id(&self, id: StaffMemberId) -> Option<StaffMember> {
        let found = self.members.read().iter().find(|m| m.id() == id).cloned();
        debug!(id = %id, found = found.is_some(), "Lookup by id");
        found
    }

    /// Promote the member stored under `id`.
    pub fn promote(&self, id: StaffMemberId) -> Result<Grade, Notice> {
        self.with_member_mut(id, StaffMember::promote)
    }

    /// Demote the member stored under `id`.
    pub fn demote(&self, id: StaffMemberId) -> Result<Grade, Notice> {
        self.with_member_mut(id, StaffMember::demote)
    }

    /// Pick the member who should take over leadership.
    ///
    /// The oldest top-grade member wins; without any, the oldest member overall.
    /// Ties go to whoever comes first in roster order. The member stays on the roster.
    pub fn select_successor(&self) -> Option<StaffMember> {
        let members = self.members.read();
        let top = Grade::top();

        let successor = oldest(members.iter().filter(|m| m.grade() == top))
            .or_else(|| oldest(members.iter()))
            .cloned();

        match &successor {
            Some(m) => debug!(id = %m.id(), name = %m.name(), grade = %m.grade(), age = m.age(), "Successor selected"),
            None => debug!("No successor available"),
        }
        successor
    }

    /// Human-readable listing of every member with a total count.
    pub fn display_all(&self) -> String {
        let members = self.members.read();
        if members.is_empty() {
            return "No staff members on the roster.\n".to_string();
        }

        let mut out = String::from("=== Staff List ===\n");
        for member in members.iter() {
            let _ = writeln!(
                out,
                "[{}] {} | {} | {} | age {}",
                member.id(),
                member.name(),
                member.grade(),
                member.gender(),
                member.age()
            );
        }
        let _ = writeln!(out, "Total: {} of {}", members.len(), self.capacity);
        out
    }

    fn with_member_mut<F>(&self, id: StaffMemberId, op: F) -> Result<Grade, Notice>
    where
        F: FnOnce(&mut StaffMember) -> Result<Grade, Notice>,
    {
        let mut members = self.members.write();
        match members.iter_mut().find(|m| m.id() == id) {
            Some(member) => op(member),
            None => Err(Notice::UnknownId { id }.raise()),
        }
    }

    fn free_id(members: &[StaffMember]) -> Result<StaffMemberId, Notice> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = StaffMemberId::generate();
            if !members.iter().any(|m| m.id() == id) {
                return Ok(id);
            }
            debug!(id = %id, "Staff id collision, drawing again");
        }
        Err(Notice::IdentifierExhausted {
            attempts: MAX_ID_ATTEMPTS,
        }
        .raise())
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Oldest member in iteration order; the first one wins a tie.
fn oldest<'a>(members: impl Iterator<Item = &'a StaffMember>) -> Option<&'a StaffMember> {
    members.fold(None, |best: Option<&StaffMember>, m| match best {
        Some(b) if b.age() >= m.age() => Some(b),
        _ => Some(m),
    })
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn full_roster() -> Roster {
        let roster = Roster::default();
        for i in 0..DEFAULT_CAPACITY {
            roster
                .add_member(format!("Member {}", i), Gender::Male, 25, Grade::Staff)
                .unwrap();
        }
        roster
    }

    #[test]
    fn test_new_roster_is_empty() {
        let roster = Roster::default();
        assert_eq!(roster.current_number(), 0);
        assert_eq!(roster.capacity(), 10);
        assert!(roster.is_empty());
        assert!(roster.members().is_empty());
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        assert_eq!(Roster::new(0).capacity(), 1);
    }

    #[test]
    fn test_add_member() {
        let roster = Roster::default();
        let id = roster
            .add_member("Newcomer", Gender::Male, 22, Grade::Staff)
            .unwrap();
        assert_eq!(roster.current_number(), 1);
        assert_eq!(roster.members()[0].name(), "Newcomer");
        assert_eq!(roster.members()[0].id(), id);
    }

    #[test]
    fn test_add_beyond_capacity() {
        let roster = full_roster();
        assert!(roster.is_full());

        let notice = roster
            .add_member("Overflow", Gender::Male, 30, Grade::Staff)
            .unwrap_err();
        assert!(matches!(notice, Notice::CapacityExhausted { capacity: 10, .. }));
        assert_eq!(roster.current_number(), DEFAULT_CAPACITY);
        assert!(roster.find_by_name("Overflow").is_none());
    }

    #[test]
    fn test_ids_unique_within_roster() {
        let roster = full_roster();
        let mut ids: Vec<_> = roster.members().iter().map(|m| m.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_remove_member() {
        let roster = Roster::default();
        roster.add_member("Leaving", Gender::Male, 30, Grade::Staff).unwrap();
        let member = roster.members()[0].clone();

        let removed = roster.remove_member(&member).unwrap();
        assert_eq!(removed.id(), member.id());
        assert_eq!(roster.current_number(), 0);
    }

    #[test]
    fn test_remove_nonmember() {
        let roster = Roster::default();
        roster.add_member("Stays", Gender::Female, 41, Grade::Chief).unwrap();
        let before = roster.members();

        let stranger = StaffMember::with_id(
            // Take an id that cannot be on the roster.
            StaffMemberId::from_raw((before[0].id().value() + 1) % 10_000),
            Person::new("Nobody", Gender::Male, 30),
            Grade::Staff,
        );
        let notice = roster.remove_member(&stranger).unwrap_err();
        assert!(matches!(notice, Notice::MemberNotFound { .. }));
        assert!(notice.to_string().contains("does not exist"));
        assert_eq!(roster.members(), before);
    }

    #[test]
    fn test_find_by_name() {
        let roster = Roster::default();
        roster.add_member("Target", Gender::Female, 28, Grade::Chief).unwrap();
        roster.add_member("Target", Gender::Male, 50, Grade::Staff).unwrap();

        let found = roster.find_by_name("Target").unwrap();
        assert_eq!(found.age(), 28);
        assert!(roster.find_by_name("Missing").is_none());
    }

    #[test]
    fn test_find_by_id() {
        let roster = Roster::default();
        let id = roster.add_member("ById", Gender::Male, 30, Grade::Staff).unwrap();

        let found = roster.find_by_id(id).unwrap();
        assert_eq!(found.id(), id);
        assert_eq!(found.name(), "ById");
    }

    #[test]
    fn test_lookup_on_empty_roster() {
        let roster = Roster::default();
        assert!(roster.find_by_name("Anyone").is_none());
        assert!(roster.find_by_id(StaffMemberId::from_raw(0)).is_none());
        assert!(roster.select_successor().is_none());
    }

    #[test]
    fn test_promote_in_place() {
        let roster = Roster::default();
        let id = roster.add_member("Climber", Gender::Male, 30, Grade::Manager).unwrap();

        assert_eq!(roster.promote(id), Ok(Grade::Executive));
        assert_eq!(roster.find_by_id(id).unwrap().grade(), Grade::Executive);
        assert!(matches!(roster.promote(id), Err(Notice::AlreadyTopGrade { .. })));

        assert_eq!(roster.demote(id), Ok(Grade::Manager));
        assert_eq!(roster.find_by_id(id).unwrap().grade(), Grade::Manager);
    }

    #[test]
    fn test_promote_unknown_id() {
        let roster = Roster::default();
        let id = StaffMemberId::from_raw(1234);
        assert_eq!(roster.promote(id), Err(Notice::UnknownId { id }));
        assert_eq!(roster.demote(id), Err(Notice::UnknownId { id }));
    }

    #[test]
    fn test_successor_prefers_oldest_executive() {
        let roster = Roster::default();
        roster.add_member("Young Exec", Gender::Male, 45, Grade::Executive).unwrap();
        roster.add_member("Veteran Exec", Gender::Male, 55, Grade::Executive).unwrap();
        roster.add_member("Old Staff", Gender::Male, 60, Grade::Staff).unwrap();

        let successor = roster.select_successor().unwrap();
        assert_eq!(successor.grade(), Grade::Executive);
        assert_eq!(successor.age(), 55);
        assert_eq!(roster.current_number(), 3);
    }

    #[test]
    fn test_successor_without_executive() {
        let roster = Roster::default();
        roster.add_member("Junior", Gender::Male, 25, Grade::Staff).unwrap();
        roster.add_member("Middle", Gender::Male, 35, Grade::Chief).unwrap();
        roster.add_member("Senior", Gender::Male, 50, Grade::Manager).unwrap();

        let successor = roster.select_successor().unwrap();
        assert_eq!(successor.age(), 50);
        assert_eq!(successor.name(), "Senior");
    }

    #[test]
    fn test_successor_tie_goes_to_roster_order() {
        let roster = Roster::default();
        roster.add_member("First", Gender::Female, 50, Grade::Executive).unwrap();
        roster.add_member("Second", Gender::Male, 50, Grade::Executive).unwrap();

        assert_eq!(roster.select_successor().unwrap().name(), "First");
    }

    #[test]
    fn test_successor_fallback_tie_goes_to_roster_order() {
        let roster = Roster::default();
        roster.add_member("Younger", Gender::Male, 40, Grade::Manager).unwrap();
        roster.add_member("First", Gender::Female, 50, Grade::Chief).unwrap();
        roster.add_member("Second", Gender::Male, 50, Grade::Manager).unwrap();

        let successor = roster.select_successor().unwrap();
        assert_eq!(successor.name(), "First");
        assert_eq!(successor.grade(), Grade::Chief);
    }

    #[test]
    fn test_attach_keeps_id() {
        let roster = Roster::default();
        let member = StaffMember::new("Transfer", Gender::Other, 39, Grade::Chief);
        let id = roster.attach(member.clone()).unwrap();
        assert_eq!(id, member.id());
        assert_eq!(roster.find_by_id(id).unwrap().name(), "Transfer");
    }

    #[test]
    fn test_attach_same_member_twice_is_refused() {
        let roster = Roster::default();
        let member = StaffMember::new("Twin", Gender::Male, 30, Grade::Staff);
        roster.attach(member.clone()).unwrap();

        let notice = roster.attach(member.clone()).unwrap_err();
        assert_eq!(
            notice,
            Notice::AlreadyOnRoster {
                name: "Twin".to_string(),
                id: member.id(),
            }
        );
        assert_eq!(roster.current_number(), 1);
        assert_eq!(roster.members()[0].id(), member.id());
    }

    #[test]
    fn test_attach_lookup_clone_is_refused() {
        let roster = Roster::default();
        let id = roster.add_member("Listed", Gender::Female, 44, Grade::Manager).unwrap();

        let copy = roster.find_by_id(id).unwrap();
        assert!(matches!(roster.attach(copy), Err(Notice::AlreadyOnRoster { .. })));
        assert_eq!(roster.current_number(), 1);
        assert_eq!(roster.find_by_name("Listed").unwrap().id(), id);
    }

    #[test]
    fn test_display_all() {
        let roster = Roster::default();
        roster.add_member("Taro", Gender::Male, 30, Grade::Staff).unwrap();
        roster.add_member("Hanako", Gender::Female, 28, Grade::Chief).unwrap();

        let listing = roster.display_all();
        assert!(listing.contains("Staff List"));
        assert!(listing.contains("Taro"));
        assert!(listing.contains("Hanako"));
        assert!(listing.contains("Total: 2"));
    }

    #[test]
    fn test_display_empty() {
        let roster = Roster::default();
        assert!(roster.display_all().contains("No staff members"));
    }
}
