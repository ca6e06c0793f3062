//! Map error types

use realmgrid_domain::ElementId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The element was never added to this map
    #[error("Element {id} is not on the map")]
    NotAMember { id: ElementId },
}

impl MapError {
    pub fn not_a_member(id: ElementId) -> Self {
        Self::NotAMember { id }
    }
}
