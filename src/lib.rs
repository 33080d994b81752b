//! Staff Roster - personnel roster model
//!
//! Grades, staff members, a capacity-bounded roster and the leader who
//! governs it, plus the configuration and logging used by the CLI.

pub mod config;
pub mod error;
pub mod logging;
pub mod organization;
pub mod roster;

pub use error::{Error, ErrorCode, Result};
pub use organization::{Organization, Succession};
pub use roster::{
    Gender, Grade, Introduce, Leader, Notice, Person, Roster, StaffMember, StaffMemberId,
};
