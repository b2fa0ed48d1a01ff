use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// The fixed set of placeable object types.
///
/// Declaration order is significant: it is the tie-break order used by the
/// insights panel when two types have the same object count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ObjType {
    Sprite,
    Text,
    Rectangle,
    Circle,
    Image,
    Tilemap,
    Group,
    Particles,
    Zone,
}

/// Display metadata for an object type (static configuration, not state).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjTypeMeta {
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

impl ObjType {
    /// All types in declaration order.
    pub const ALL: [ObjType; 9] = [
        ObjType::Sprite,
        ObjType::Text,
        ObjType::Rectangle,
        ObjType::Circle,
        ObjType::Image,
        ObjType::Tilemap,
        ObjType::Group,
        ObjType::Particles,
        ObjType::Zone,
    ];

    /// Label, default color, and toolbar glyph for this type.
    pub fn meta(&self) -> ObjTypeMeta {
        match self {
            ObjType::Sprite => ObjTypeMeta {
                label: "Sprite",
                color: "#4a7dff",
                icon: "\u{25C6}",
            },
            ObjType::Text => ObjTypeMeta {
                label: "Text",
                color: "#34d399",
                icon: "T",
            },
            ObjType::Rectangle => ObjTypeMeta {
                label: "Rectangle",
                color: "#f59e0b",
                icon: "\u{25AC}",
            },
            ObjType::Circle => ObjTypeMeta {
                label: "Circle",
                color: "#a78bfa",
                icon: "\u{25CF}",
            },
            ObjType::Image => ObjTypeMeta {
                label: "Image",
                color: "#22d3ee",
                icon: "\u{25A3}",
            },
            ObjType::Tilemap => ObjTypeMeta {
                label: "Tilemap",
                color: "#f472b6",
                icon: "\u{25A6}",
            },
            ObjType::Group => ObjTypeMeta {
                label: "Group",
                color: "#fb923c",
                icon: "\u{25C8}",
            },
            ObjType::Particles => ObjTypeMeta {
                label: "Particles",
                color: "#e879f9",
                icon: "\u{2726}",
            },
            ObjType::Zone => ObjTypeMeta {
                label: "Zone",
                color: "#94a3b8",
                icon: "\u{2B1A}",
            },
        }
    }

    /// Lowercase tag used for generated object names.
    pub fn tag(&self) -> &'static str {
        match self {
            ObjType::Sprite => "sprite",
            ObjType::Text => "text",
            ObjType::Rectangle => "rectangle",
            ObjType::Circle => "circle",
            ObjType::Image => "image",
            ObjType::Tilemap => "tilemap",
            ObjType::Group => "group",
            ObjType::Particles => "particles",
            ObjType::Zone => "zone",
        }
    }

    /// Default width/height for a freshly placed object of this type.
    pub fn default_size(&self) -> (f32, f32) {
        match self {
            ObjType::Text => (80.0, 24.0),
            ObjType::Zone => (80.0, 80.0),
            _ => (40.0, 40.0),
        }
    }
}

/// A scalar value in an object's props bag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl PropValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Text(s.to_string())
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

/// Type-specific configuration: ordered string keys to scalar values.
pub type PropBag = IndexMap<String, PropValue>;

/// A placed entity within a scene.
///
/// Position is center-point based; the top-left corner is at
/// `(x - w/2, y - h/2)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameObject {
    /// Unique identifier within the owning scene
    pub id: Ulid,

    /// Display name, e.g. "rectangle3"
    pub name: String,

    /// Fixed type tag determining default appearance
    pub obj_type: ObjType,

    /// Center x in scene units
    pub x: f32,

    /// Center y in scene units
    pub y: f32,

    /// Width in scene units
    pub w: f32,

    /// Height in scene units
    pub h: f32,

    /// Fill color as a hex string, e.g. "#4a7dff"
    pub color: String,

    /// Hidden objects are skipped by the canvas and layout map
    pub visible: bool,

    /// Locked objects cannot be dragged or transform-edited;
    /// deletion and visibility toggles still apply
    pub locked: bool,

    /// Free-form per-object configuration
    pub props: PropBag,
}

impl GameObject {
    /// Create an object with type-derived defaults at the given center.
    pub fn new(name: impl Into<String>, obj_type: ObjType, x: f32, y: f32) -> Self {
        let (w, h) = obj_type.default_size();
        Self {
            id: Ulid::new(),
            name: name.into(),
            obj_type,
            x,
            y,
            w,
            h,
            color: obj_type.meta().color.to_string(),
            visible: true,
            locked: false,
            props: PropBag::new(),
        }
    }

    /// Create an object with a specific ID (useful for testing)
    pub fn with_id(id: Ulid, name: impl Into<String>, obj_type: ObjType, x: f32, y: f32) -> Self {
        Self {
            id,
            ..Self::new(name, obj_type, x, y)
        }
    }
}

/// A partial update of object fields; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectPatch {
    pub name: Option<String>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub w: Option<f32>,
    pub h: Option<f32>,
    pub color: Option<String>,
    pub visible: Option<bool>,
    pub locked: Option<bool>,
}

impl ObjectPatch {
    /// Patch that moves an object to a new center.
    pub fn position(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    /// True if the patch touches position or size.
    pub fn touches_transform(&self) -> bool {
        self.x.is_some() || self.y.is_some() || self.w.is_some() || self.h.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sizes() {
        assert_eq!(ObjType::Text.default_size(), (80.0, 24.0));
        assert_eq!(ObjType::Zone.default_size(), (80.0, 80.0));
        assert_eq!(ObjType::Sprite.default_size(), (40.0, 40.0));
        assert_eq!(ObjType::Circle.default_size(), (40.0, 40.0));
    }

    #[test]
    fn test_object_creation_defaults() {
        let obj = GameObject::new("sprite1", ObjType::Sprite, 400.0, 300.0);

        assert_eq!(obj.name, "sprite1");
        assert_eq!(obj.obj_type, ObjType::Sprite);
        assert_eq!((obj.w, obj.h), (40.0, 40.0));
        assert_eq!(obj.color, "#4a7dff");
        assert!(obj.visible);
        assert!(!obj.locked);
        assert!(obj.props.is_empty());
    }

    #[test]
    fn test_prop_value_accessors() {
        let text = PropValue::from("patrol");
        assert_eq!(text.as_str(), Some("patrol"));
        assert_eq!(text.as_number(), None);

        let num = PropValue::from(80.0);
        assert_eq!(num.as_number(), Some(80.0));

        let flag = PropValue::from(true);
        assert_eq!(flag.as_bool(), Some(true));
    }

    #[test]
    fn test_patch_touches_transform() {
        assert!(ObjectPatch::position(10.0, 20.0).touches_transform());
        assert!(ObjectPatch {
            w: Some(64.0),
            ..Default::default()
        }
        .touches_transform());

        let cosmetic = ObjectPatch {
            name: Some("renamed".to_string()),
            visible: Some(false),
            ..Default::default()
        };
        assert!(!cosmetic.touches_transform());
    }

    #[test]
    fn test_all_types_have_distinct_metadata() {
        let mut colors: Vec<&str> = ObjType::ALL.iter().map(|t| t.meta().color).collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), ObjType::ALL.len());
    }

    #[test]
    fn test_obj_type_serde_tag() {
        let json = serde_json::to_string(&ObjType::Rectangle).unwrap();
        assert_eq!(json, "\"rectangle\"");
        let back: ObjType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ObjType::Rectangle);
    }
}
