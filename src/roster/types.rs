//! Core types for the roster: the grade ladder, gender categories and the
//! shared identity record every role is built on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────
// Grade Ladder
// ─────────────────────────────────────────────────────────────────

/// Job grades, lowest to highest.
///
/// The derived ordering follows declaration order, so `Grade::Staff < Grade::Executive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Grade {
    /// Rank-and-file entry grade.
    Staff,
    /// First supervisory grade.
    Chief,
    /// Section manager.
    Manager,
    /// Executive officer, the top of the ladder.
    Executive,
}

impl Grade {
    /// All grades in ladder order.
    pub fn all() -> &'static [Grade] {
        &[Grade::Staff, Grade::Chief, Grade::Manager, Grade::Executive]
    }

    /// Lowest grade on the ladder.
    pub fn bottom() -> Grade {
        Grade::Staff
    }

    /// Highest grade on the ladder.
    pub fn top() -> Grade {
        Grade::Executive
    }

    /// The grade one step up, or `None` at the top.
    pub fn next_higher(&self) -> Option<Grade> {
        match self {
            Grade::Staff => Some(Grade::Chief),
            Grade::Chief => Some(Grade::Manager),
            Grade::Manager => Some(Grade::Executive),
            Grade::Executive => None,
        }
    }

    /// The grade one step down, or `None` at the bottom.
    pub fn next_lower(&self) -> Option<Grade> {
        match self {
            Grade::Staff => None,
            Grade::Chief => Some(Grade::Staff),
            Grade::Manager => Some(Grade::Chief),
            Grade::Executive => Some(Grade::Manager),
        }
    }

    /// Monthly base pay for the grade.
    pub fn base_pay(&self) -> u32 {
        match self {
            Grade::Staff => 200_000,
            Grade::Chief => 300_000,
            Grade::Manager => 450_000,
            Grade::Executive => 600_000,
        }
    }

    /// Slug used in configuration files and CLI args.
    pub fn slug(&self) -> &'static str {
        match self {
            Grade::Staff => "staff",
            Grade::Chief => "chief",
            Grade::Manager => "manager",
            Grade::Executive => "executive",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Grade::Staff => "Staff",
            Grade::Chief => "Chief",
            Grade::Manager => "Manager",
            Grade::Executive => "Executive",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "staff" => Ok(Grade::Staff),
            "chief" => Ok(Grade::Chief),
            "manager" => Ok(Grade::Manager),
            "executive" | "exec" => Ok(Grade::Executive),
            _ => Err(format!(
                "Unknown grade '{}'. Valid: staff, chief, manager, executive",
                s
            )),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Gender
// ─────────────────────────────────────────────────────────────────

/// Gender category of a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "man" | "m" => Ok(Gender::Male),
            "female" | "woman" | "f" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(format!("Unknown gender '{}'. Valid: male, female, other", s)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Person
// ─────────────────────────────────────────────────────────────────

/// Identity record shared by staff members and the leader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    gender: Gender,
    age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, gender: Gender, age: u32) -> Self {
        Self {
            name: name.into(),
            gender,
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

/// Self-description shared by every role built on a [`Person`].
pub trait Introduce {
    /// The identity record behind this role.
    fn person(&self) -> &Person;

    /// Grade or role label appended to the introduction, if any.
    fn role_label(&self) -> Option<&str> {
        None
    }

    /// One-line self-introduction.
    fn introduction(&self) -> String {
        let person = self.person();
        let mut line = format!(
            "My name is {}. Gender: {}. Age: {} years old.",
            person.name(),
            person.gender(),
            person.age()
        );
        if let Some(role) = self.role_label() {
            line.push_str(&format!(" Position: {}.", role));
        }
        line
    }
}

impl Introduce for Person {
    fn person(&self) -> &Person {
        self
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.introduction())
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
