//! Organization wiring. Builds a leader and its roster from configuration and
//! performs the leadership hand-over that sits outside the roster core.

use std::sync::Arc;

use tracing::info;

use crate::config::RosterConfig;
use crate::error::{Error, Result};
use crate::roster::{Leader, Notice, Roster, StaffMember};

/// A leader together with the roster they govern.
pub struct Organization {
    name: String,
    leader: Leader,
    roster: Arc<Roster>,
}

/// Outcome of a completed hand-over.
#[derive(Debug)]
pub struct Succession {
    /// Name of the leader who stepped down
    pub outgoing: String,
    /// The member removed from the roster to become leader
    pub successor: StaffMember,
}

impl Organization {
    /// Build the organization described by `config`, hiring every `[[staff]]` entry in order.
    pub fn from_config(config: &RosterConfig) -> Result<Self> {
        let roster = Arc::new(Roster::new(config.organization.capacity));
        let mut leader = Leader::new(
            config.leader.name.clone(),
            config.leader.gender,
            config.leader.age,
        );
        leader.set_roster(roster.clone());

        for seed in &config.staff {
            leader
                .add_member(seed.name.clone(), seed.gender, seed.age, seed.grade)
                .map_err(|notice| Error::seed(seed.name.clone(), notice))?;
        }

        info!(
            organization = %config.organization.name,
            leader = %leader.name(),
            staff = roster.current_number(),
            capacity = roster.capacity(),
            "Organization ready"
        );

        Ok(Self {
            name: config.organization.name.clone(),
            leader,
            roster,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn leader(&self) -> &Leader {
        &self.leader
    }

    pub fn roster(&self) -> &Arc<Roster> {
        &self.roster
    }

    /// Resign the current leader and install the designated successor.
    ///
    /// On a notice (e.g. nobody left to succeed) the organization is unchanged.
    pub fn hand_over(&mut self) -> std::result::Result<Succession, Notice> {
        let successor = self.leader.resign()?;

        let mut next = Leader::from_successor(successor.clone());
        next.set_roster(self.roster.clone());
        let outgoing = std::mem::replace(&mut self.leader, next);

        info!(
            outgoing = %outgoing.name(),
            incoming = %self.leader.name(),
            "Leadership handed over"
        );

        Ok(Succession {
            outgoing: outgoing.name().to_string(),
            successor,
        })
    }
}
