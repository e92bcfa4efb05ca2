use std::borrow::Cow;
use std::fmt;

use serde_json::{Map, Value};

/// Entity kind, keyed by the Draft.js entity type tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityType {
    Mention,
    Link,
    Image,
    Video,
    EmbeddedLink,
    CtaBox,
    CtaImage,
    /// Application-defined type; only an entity transform can render it.
    Custom(String),
}

impl EntityType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "MENTION" => EntityType::Mention,
            "LINK" => EntityType::Link,
            "IMAGE" => EntityType::Image,
            "VIDEO" => EntityType::Video,
            "EMBEDDED_LINK" => EntityType::EmbeddedLink,
            "CTA_BOX" => EntityType::CtaBox,
            "CTA_IMAGE" => EntityType::CtaImage,
            other => EntityType::Custom(other.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            EntityType::Mention => "MENTION",
            EntityType::Link => "LINK",
            EntityType::Image => "IMAGE",
            EntityType::Video => "VIDEO",
            EntityType::EmbeddedLink => "EMBEDDED_LINK",
            EntityType::CtaBox => "CTA_BOX",
            EntityType::CtaImage => "CTA_IMAGE",
            EntityType::Custom(tag) => tag,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// A typed, data-bearing annotation referenced by key from entity ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub entity_type: EntityType,
    pub data: Map<String, Value>,
}

impl Entity {
    pub fn new(entity_type: EntityType) -> Self {
        Entity {
            entity_type,
            data: Map::new(),
        }
    }

    pub fn with_data(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(name.into(), value.into());
        self
    }

    /// Attribute value as text. Strings are returned as-is, other JSON
    /// scalars as their JSON text; `null` and missing attributes are `None`.
    pub fn attr(&self, name: &str) -> Option<Cow<'_, str>> {
        match self.data.get(name)? {
            Value::Null => None,
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }

    /// Like [`Entity::attr`], but empty values also fall back to `default`.
    pub fn attr_or<'a>(&'a self, name: &str, default: &'a str) -> Cow<'a, str> {
        match self.attr(name) {
            Some(value) if !value.is_empty() => value,
            _ => Cow::Borrowed(default),
        }
    }
}
