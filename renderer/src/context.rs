use draft::Document;
use draft::entity::Entity;

use crate::config::{HashtagConfig, RenderOptions};
use crate::entity::EntityTransform;
use crate::error::RenderError;

/// Everything a render pass reads besides the block at hand.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub document: &'a Document,
    pub options: &'a RenderOptions,
    pub transform: Option<&'a dyn EntityTransform>,
}

impl<'a> RenderContext<'a> {
    pub fn new(document: &'a Document, options: &'a RenderOptions) -> Self {
        RenderContext {
            document,
            options,
            transform: None,
        }
    }

    pub fn with_transform(mut self, transform: &'a dyn EntityTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn hashtag(&self) -> Option<&'a HashtagConfig> {
        self.options.hashtag.as_ref()
    }

    pub fn directional(&self) -> bool {
        self.options.directional
    }

    pub fn entity(&self, key: &str) -> Result<&'a Entity, RenderError> {
        self.document
            .entity(key)
            .ok_or_else(|| RenderError::UndefinedEntity {
                key: key.to_string(),
            })
    }
}
