use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            pub fn to_uuid(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Map membership
define_id!(ElementId);

// Core entity IDs
define_id!(CharacterId);
define_id!(PetId);

// Item and mission IDs
define_id!(ItemId);
define_id!(MissionId);

// Anything that can stand on the map is identified by the same UUID as its entity.
impl From<CharacterId> for ElementId {
    fn from(value: CharacterId) -> Self {
        Self(value.0)
    }
}

impl From<PetId> for ElementId {
    fn from(value: PetId) -> Self {
        Self(value.0)
    }
}
