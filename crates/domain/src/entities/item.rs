//! Item entity - Objects a character can pick up
//!
//! Items exist independently of whoever carries them. Picking one up moves it
//! into the carrier's inventory; it is not destroyed with the carrier's weapon
//! or pet.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{ItemId, ItemName};

/// An object that can be carried
///
/// Simple data struct: there is no invalid combination of field values, so
/// all fields are public.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: ItemName,
    pub description: Option<String>,
}

impl Item {
    pub fn new(name: ItemName) -> Self {
        Self {
            id: ItemId::new(),
            name,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{} ({})", self.name, description),
            None => write!(f, "{}", self.name),
        }
    }
}
