//! The map: an insertion-ordered registry of placeable elements.
//!
//! The map holds its elements in the order they were added. It draws them in
//! that order and moves them on request. A move never fails: when another
//! element already stands on the destination, the mover interacts with it
//! after arriving.

use realmgrid_domain::{ElementId, Position};

use super::error::MapError;
use super::placeable::{Occupant, Placeable};
use super::policy::OccupancyPolicy;

/// What happened when an element was asked to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The element is not on this map; nothing changed
    NotAMember { id: ElementId },
    /// The destination was free
    Moved {
        id: ElementId,
        from: Position,
        to: Position,
    },
    /// The destination was occupied; the mover interacted with the occupant
    Interacted {
        id: ElementId,
        from: Position,
        to: Position,
        occupant: ElementId,
    },
}

impl MoveOutcome {
    pub fn is_member(&self) -> bool {
        !matches!(self, Self::NotAMember { .. })
    }

    /// The element the mover interacted with, if any.
    pub fn occupant(&self) -> Option<ElementId> {
        match self {
            Self::Interacted { occupant, .. } => Some(*occupant),
            _ => None,
        }
    }
}

/// Insertion-ordered collection of map elements.
///
/// # Invariants
///
/// - Elements keep their insertion order; there is no removal
/// - Several elements may share a cell; that is what triggers interactions
/// - Duplicate identities are accepted but not expected. Lookups by id
///   (`get`, `move_element`) always reach the first copy; the later copies
///   stay where they were added and, under `OccupancyPolicy::ExcludeMover`,
///   are never reported as occupants to a mover with the same id
pub struct SpatialRegistry<P = Box<dyn Placeable>> {
    elements: Vec<P>,
    policy: OccupancyPolicy,
}

impl<P: Placeable> Default for SpatialRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Placeable> SpatialRegistry<P> {
    pub fn new() -> Self {
        Self::with_policy(OccupancyPolicy::default())
    }

    pub fn with_policy(policy: OccupancyPolicy) -> Self {
        Self {
            elements: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> OccupancyPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &P> {
        self.elements.iter()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: ElementId) -> Option<&P> {
        self.index_of(id).map(|index| &self.elements[index])
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut P> {
        self.index_of(id).map(|index| &mut self.elements[index])
    }

    /// Like [`get`](Self::get), for callers that treat a missing element as an error.
    pub fn element(&self, id: ElementId) -> Result<&P, MapError> {
        self.get(id).ok_or(MapError::not_a_member(id))
    }

    /// Append `element` to the map and return its identity.
    ///
    /// Nothing is validated: an element that is already present is added again.
    pub fn add_element(&mut self, element: P) -> ElementId {
        let id = element.id();
        tracing::info!(
            element_id = %id,
            kind = element.kind(),
            position = %element.position(),
            "Element added to map"
        );
        self.elements.push(element);
        id
    }

    /// Draw every element once, in insertion order.
    pub fn draw_all(&self) {
        tracing::info!(elements = self.elements.len(), "Drawing map");
        for element in &self.elements {
            element.draw();
        }
    }

    /// Move the element identified by `id` to `new_position`.
    ///
    /// The occupant is looked up before the element moves. The move itself
    /// always happens; if an occupant was found the mover then interacts with
    /// it exactly once. The occupant is left untouched by the map.
    ///
    /// An unknown `id` is logged and reported as `MoveOutcome::NotAMember`.
    /// The log line carries only the id: an element that was never added
    /// cannot tell the map its kind.
    pub fn move_element(&mut self, id: ElementId, new_position: Position) -> MoveOutcome {
        let Some(index) = self.index_of(id) else {
            let error = MapError::not_a_member(id);
            tracing::warn!(error = %error, element_id = %id, "Element is not on the map");
            return MoveOutcome::NotAMember { id };
        };

        let occupant = self
            .occupant_index(id, new_position)
            .map(|occupant| Occupant::of(&self.elements[occupant]));

        let element = &mut self.elements[index];
        let from = element.position();
        element.move_to(new_position);

        match occupant {
            None => {
                tracing::info!(
                    element_id = %id,
                    element = %element.label(),
                    from = %from,
                    to = %new_position,
                    "Destination is free, element moved"
                );
                MoveOutcome::Moved {
                    id,
                    from,
                    to: new_position,
                }
            }
            Some(occupant) => {
                tracing::info!(
                    element_id = %id,
                    occupant_id = %occupant.id,
                    occupant = %occupant.label,
                    to = %new_position,
                    "Destination is also occupied, interacting"
                );
                element.interact(&occupant);
                MoveOutcome::Interacted {
                    id,
                    from,
                    to: new_position,
                    occupant: occupant.id,
                }
            }
        }
    }

    /// First element, in insertion order, standing on `position`.
    pub fn find_occupant(&self, position: Position) -> Option<&P> {
        self.elements
            .iter()
            .find(|element| element.position() == position)
    }

    fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|element| element.id() == id)
    }

    // Occupant of `position` as seen by the mover `id`, honoring the policy.
    fn occupant_index(&self, id: ElementId, position: Position) -> Option<usize> {
        self.elements.iter().position(|element| {
            let eligible = match self.policy {
                OccupancyPolicy::ExcludeMover => element.id() != id,
                OccupancyPolicy::IncludeMover => true,
            };
            eligible && element.position() == position
        })
    }
}
