//! The capability every map element exposes.

use realmgrid_domain::{ElementId, Position};

/// Snapshot of the element found at a destination cell.
///
/// The mover receives this instead of a live reference to the occupant, so
/// the map never hands out two borrows of its collection at once. Any change
/// to the occupant's own state is the occupant's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupant {
    pub id: ElementId,
    pub kind: &'static str,
    pub label: String,
    pub position: Position,
}

impl Occupant {
    /// Capture the current identity and position of `element`.
    pub fn of<P: Placeable + ?Sized>(element: &P) -> Self {
        Self {
            id: element.id(),
            kind: element.kind(),
            label: element.label(),
            position: element.position(),
        }
    }
}

/// Anything that can stand on the map.
#[cfg_attr(test, mockall::automock)]
pub trait Placeable {
    /// Identity used for membership checks.
    fn id(&self) -> ElementId;

    /// Concrete kind name, used in log lines ("Character", "Pet", ...).
    fn kind(&self) -> &'static str;

    /// Human-readable description, used in log lines.
    fn label(&self) -> String;

    fn position(&self) -> Position;

    /// Relocate unconditionally.
    fn move_to(&mut self, position: Position);

    /// React to meeting `occupant` at the cell just moved into.
    fn interact(&mut self, occupant: &Occupant);

    /// Render the element. Console output stands in for a real UI.
    fn draw(&self);
}

impl<P: Placeable + ?Sized> Placeable for Box<P> {
    fn id(&self) -> ElementId {
        (**self).id()
    }

    fn kind(&self) -> &'static str {
        (**self).kind()
    }

    fn label(&self) -> String {
        (**self).label()
    }

    fn position(&self) -> Position {
        (**self).position()
    }

    fn move_to(&mut self, position: Position) {
        (**self).move_to(position)
    }

    fn interact(&mut self, occupant: &Occupant) {
        (**self).interact(occupant)
    }

    fn draw(&self) {
        (**self).draw()
    }
}
