//! Seating Plan Records
//!
//! Plain records exchanged with whatever layer persists seating state.

use serde::{Deserialize, Serialize};

use super::dining_table::DiningTable;
use super::guest::Guest;
use super::venue::{Venue, Viewport};

/// Venue and tables, without the roster
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeatingSnapshot {
    pub venue: Venue,
    #[serde(default)]
    pub tables: Vec<DiningTable>,
}

/// Full plan as exported by the host: snapshot plus roster and viewport
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeatingPlan {
    pub venue: Venue,
    pub viewport: Option<Viewport>,
    #[serde(default)]
    pub guests: Vec<Guest>,
    #[serde(default)]
    pub tables: Vec<DiningTable>,
}

impl SeatingPlan {
    pub fn snapshot(&self) -> SeatingSnapshot {
        SeatingSnapshot {
            venue: self.venue,
            tables: self.tables.clone(),
        }
    }
}
