use crate::object::ObjType;
use crate::project::ItemKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// A structural edit with timestamp, kept for history tracking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditEvent {
    pub timestamp: DateTime<Utc>,
    pub kind: EditEventKind,
}

impl EditEvent {
    /// Create a new event with the current timestamp
    pub fn new(kind: EditEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }

    /// Create a new event with a specific timestamp
    pub fn with_timestamp(timestamp: DateTime<Utc>, kind: EditEventKind) -> Self {
        Self { timestamp, kind }
    }
}

/// Structural mutations recorded by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EditEventKind {
    SceneCreated {
        id: Ulid,
        name: String,
    },

    ModuleCreated {
        id: Ulid,
        name: String,
    },

    ItemDeleted {
        id: Ulid,
        kind: ItemKind,
        name: String,
    },

    ObjectAdded {
        scene_id: Ulid,
        object_id: Ulid,
        obj_type: ObjType,
        name: String,
    },

    ObjectRemoved {
        scene_id: Ulid,
        object_id: Ulid,
    },

    ObjectUpdated {
        scene_id: Ulid,
        object_id: Ulid,
    },

    ObjectPropSet {
        scene_id: Ulid,
        object_id: Ulid,
        key: String,
    },

    SceneCodeChanged {
        scene_id: Ulid,
    },

    SceneRenamed {
        scene_id: Ulid,
        new_name: String,
    },

    SceneDescriptionChanged {
        scene_id: Ulid,
    },
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Scene => "scene",
            ItemKind::Module => "module",
        }
    }
}

// ItemKind only appears in events and commands, so its serde impl lives here.
impl Serialize for ItemKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ItemKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "scene" => Ok(ItemKind::Scene),
            "module" => Ok(ItemKind::Module),
            other => Err(serde::de::Error::unknown_variant(
                other,
                &["scene", "module"],
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_creation() {
        let event = EditEvent::new(EditEventKind::SceneCreated {
            id: Ulid::new(),
            name: "TitleScene".to_string(),
        });

        assert!(event.timestamp <= Utc::now());
    }

    #[test]
    fn test_event_serialization() {
        let event = EditEvent::new(EditEventKind::ObjectAdded {
            scene_id: Ulid::new(),
            object_id: Ulid::new(),
            obj_type: ObjType::Circle,
            name: "circle1".to_string(),
        });

        let json = serde_json::to_string(&event).unwrap();
        let back: EditEvent = serde_json::from_str(&json).unwrap();

        match (&event.kind, &back.kind) {
            (
                EditEventKind::ObjectAdded {
                    object_id: a,
                    obj_type: ta,
                    ..
                },
                EditEventKind::ObjectAdded {
                    object_id: b,
                    obj_type: tb,
                    ..
                },
            ) => {
                assert_eq!(a, b);
                assert_eq!(ta, tb);
            }
            _ => panic!("Event kind mismatch"),
        }
    }

    #[test]
    fn test_item_kind_serde() {
        let json = serde_json::to_string(&ItemKind::Module).unwrap();
        assert_eq!(json, "\"module\"");
        let back: ItemKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ItemKind::Module);
    }
}
