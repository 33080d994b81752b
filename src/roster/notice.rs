//! Non-fatal notices raised by roster operations.
//!
//! Every notice means the operation was a no-op: nothing in the roster or the
//! member changed. Callers decide whether to print, log or ignore them.

use thiserror::Error;

use super::member::StaffMemberId;
use super::types::Grade;

/// A recoverable condition that left state unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Promotion attempted at the top of the ladder
    #[error("{name} already holds the top grade ({grade})")]
    AlreadyTopGrade { name: String, grade: Grade },

    /// Demotion attempted at the bottom of the ladder
    #[error("{name} already holds the bottom grade ({grade})")]
    AlreadyBottomGrade { name: String, grade: Grade },

    /// Roster is at capacity
    #[error("Roster is at its upper limit of {capacity} members; cannot add {name}")]
    CapacityExhausted { name: String, capacity: usize },

    /// Member is not on the roster
    #[error("Staff member {name} ({id}) does not exist on the roster")]
    MemberNotFound { name: String, id: StaffMemberId },

    /// No member is stored under the identifier
    #[error("No staff member with id {id} on the roster")]
    UnknownId { id: StaffMemberId },

    /// Member is already on the roster
    #[error("Staff member {name} ({id}) is already on the roster")]
    AlreadyOnRoster { name: String, id: StaffMemberId },

    /// No identifier could be drawn that is free on this roster
    #[error("Could not allocate a free staff identifier after {attempts} attempts")]
    IdentifierExhausted { attempts: u32 },

    /// Resignation without anyone to take over
    #[error("Do not resign: there is no staff member to succeed you")]
    NoSuccessor,

    /// Leader has not been attached to a roster
    #[error("{leader} does not govern a roster")]
    NoRosterAttached { leader: String },
}

impl Notice {
    /// Short machine-readable kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Notice::AlreadyTopGrade { .. } => "already_top_grade",
            Notice::AlreadyBottomGrade { .. } => "already_bottom_grade",
            Notice::CapacityExhausted { .. } => "capacity_exhausted",
            Notice::MemberNotFound { .. } => "member_not_found",
            Notice::UnknownId { .. } => "unknown_id",
            Notice::AlreadyOnRoster { .. } => "already_on_roster",
            Notice::IdentifierExhausted { .. } => "identifier_exhausted",
            Notice::NoSuccessor => "no_successor",
            Notice::NoRosterAttached { .. } => "no_roster_attached",
        }
    }

    /// Emit the notice at `warn` and hand it back, for use in `Err(..)` position.
    pub(crate) fn raise(self) -> Self {
        tracing::warn!(kind = self.kind(), "{}", self);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_messages() {
        let notice = Notice::AlreadyTopGrade {
            name: "Ken".into(),
            grade: Grade::Executive,
        };
        assert!(notice.to_string().contains("top grade"));
        assert!(notice.to_string().contains("Executive"));

        let notice = Notice::CapacityExhausted {
            name: "Ken".into(),
            capacity: 10,
        };
        assert!(notice.to_string().contains("upper limit of 10"));

        assert!(Notice::NoSuccessor.to_string().contains("Do not resign"));
    }

    #[test]
    fn test_notice_kind() {
        assert_eq!(Notice::NoSuccessor.kind(), "no_successor");
        let notice = Notice::MemberNotFound {
            name: "Ken".into(),
            id: StaffMemberId::from_raw(42),
        };
        assert_eq!(notice.kind(), "member_not_found");
        assert!(notice.to_string().contains("0042"));
    }

    #[test]
    fn test_unknown_id_names_only_the_id() {
        let notice = Notice::UnknownId {
            id: StaffMemberId::from_raw(1234),
        };
        assert_eq!(notice.to_string(), "No staff member with id 1234 on the roster");
        assert_eq!(notice.kind(), "unknown_id");
    }
}
