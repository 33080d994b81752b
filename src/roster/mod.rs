//! Personnel roster: grades, staff members, the capacity-bounded roster and
//! the leader who governs it.
//!
//! Invalid operations never fail hard: they leave state untouched and return a
//! [`Notice`] describing why.

pub mod leader;
pub mod member;
pub mod notice;
pub mod registry;
pub mod types;

pub use leader::{Leader, LEADER_COMPENSATION};
pub use member::{StaffMember, StaffMemberId};
pub use notice::Notice;
pub use registry::{Roster, DEFAULT_CAPACITY};
pub use types::{Gender, Grade, Introduce, Person};
