//! Guest Model
//!
//! Guests are owned by the guest-list feature; seating only reads them.

use serde::{Deserialize, Serialize};

use crate::types::GuestId;

/// Which side of the couple a guest was invited by
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GuestSide {
    PartnerOne,
    PartnerTwo,
    #[default]
    Shared,
}

/// Guest roster entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
    #[serde(default)]
    pub side: GuestSide,
    pub plus_one_name: Option<String>,
}

impl Guest {
    pub fn new(id: GuestId, name: impl Into<String>, side: GuestSide) -> Self {
        Self {
            id,
            name: name.into(),
            side,
            plus_one_name: None,
        }
    }

    /// Name as shown on a guest chip, including the plus-one when present
    pub fn display_name(&self) -> String {
        match &self.plus_one_name {
            Some(plus_one) if !plus_one.trim().is_empty() => {
                format!("{} & {}", self.name, plus_one)
            }
            _ => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_with_plus_one() {
        let mut guest = Guest::new(1, "Ana", GuestSide::PartnerOne);
        assert_eq!(guest.display_name(), "Ana");

        guest.plus_one_name = Some("Luis".to_string());
        assert_eq!(guest.display_name(), "Ana & Luis");

        guest.plus_one_name = Some("  ".to_string());
        assert_eq!(guest.display_name(), "Ana");
    }

    #[test]
    fn test_side_defaults_to_shared() {
        let guest: Guest = serde_json::from_str(r#"{"id": 5, "name": "Kim", "plus_one_name": null}"#).unwrap();
        assert_eq!(guest.side, GuestSide::Shared);
    }
}
