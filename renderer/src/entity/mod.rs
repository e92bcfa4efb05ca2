//! Entity markup: the caller's transform first, then a built-in renderer per type.

mod cta;

use std::borrow::Cow;

use draft::entity::Entity;

use crate::context::RenderContext;
use crate::error::RenderError;

/// Caller-supplied override for entity markup.
///
/// `text` is the already-rendered inner markup of the entity's section, or
/// `None` when the entity is the whole content of an atomic block. Returning
/// `None` or an empty string falls through to the built-in renderers.
pub trait EntityTransform {
    fn transform(&self, entity: &Entity, text: Option<&str>) -> Option<String>;
}

impl<F> EntityTransform for F
where
    F: Fn(&Entity, Option<&str>) -> Option<String>,
{
    fn transform(&self, entity: &Entity, text: Option<&str>) -> Option<String> {
        self(entity, text)
    }
}

type RenderFn = fn(&Entity, &str) -> String;

/// Built-in renderers keyed by entity type tag.
const BUILTIN_RENDERERS: &[(&str, RenderFn)] = &[
    ("MENTION", render_mention),
    ("LINK", render_link),
    ("IMAGE", render_image),
    ("VIDEO", render_video),
    ("EMBEDDED_LINK", render_embedded_link),
    ("CTA_BOX", cta::render_cta_box),
    ("CTA_IMAGE", cta::render_cta_image),
];

fn builtin_renderer(entity: &Entity) -> Option<RenderFn> {
    let tag = entity.entity_type.as_tag();
    BUILTIN_RENDERERS
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, render)| *render)
}

/// Markup for the entity stored under `key`, wrapping `text`.
pub fn entity_markup(
    ctx: &RenderContext<'_>,
    key: &str,
    text: Option<&str>,
) -> Result<String, RenderError> {
    let entity = ctx.entity(key)?;
    if let Some(transform) = ctx.transform {
        if let Some(html) = transform.transform(entity, text).filter(|h| !h.is_empty()) {
            return Ok(html);
        }
    }
    let text = text.unwrap_or_default();
    match builtin_renderer(entity) {
        Some(render) => Ok(render(entity, text)),
        None => {
            tracing::debug!(
                "no renderer for entity type '{}', passing text through",
                entity.entity_type
            );
            Ok(text.to_string())
        }
    }
}

/// Attribute text, empty when missing.
fn attr<'a>(entity: &'a Entity, name: &str) -> Cow<'a, str> {
    entity.attr(name).unwrap_or_default()
}

fn render_mention(entity: &Entity, text: &str) -> String {
    format!(
        "<a href=\"{}\" class=\"wysiwyg-mention\" data-mention data-value=\"{}\">{}</a>",
        attr(entity, "url"),
        attr(entity, "value"),
        text
    )
}

fn render_link(entity: &Entity, text: &str) -> String {
    format!(
        "<a href=\"{}\" target=\"{}\">{}</a>",
        attr(entity, "url"),
        entity.attr_or("targetOption", "_self"),
        text
    )
}

fn media_style(entity: &Entity) -> String {
    format!(
        "float:{};height: {};width: {}",
        entity.attr_or("alignment", "none"),
        attr(entity, "height"),
        attr(entity, "width")
    )
}

fn render_image(entity: &Entity, _text: &str) -> String {
    format!(
        "<img src=\"{}\" alt=\"{}\" style=\"{}\"/>",
        attr(entity, "src"),
        attr(entity, "alt"),
        media_style(entity)
    )
}

fn render_video(entity: &Entity, _text: &str) -> String {
    format!(
        "<video controls src=\"{}\" alt=\"{}\" style=\"{}\"></video>",
        attr(entity, "src"),
        attr(entity, "alt"),
        media_style(entity)
    )
}

fn render_embedded_link(entity: &Entity, _text: &str) -> String {
    format!(
        "<iframe width=\"{}\" height=\"{}\" src=\"{}\" frameBorder=\"0\"></iframe>",
        attr(entity, "width"),
        attr(entity, "height"),
        attr(entity, "src")
    )
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use draft::Document;
    use draft::entity::EntityType;

    use super::*;
    use crate::config::RenderOptions;

    fn document(entity: Entity) -> Document {
        Document {
            blocks: Vec::new(),
            entity_map: BTreeMap::from([("0".to_string(), entity)]),
        }
    }

    fn markup(entity: Entity, text: Option<&str>) -> String {
        let doc = document(entity);
        let options = RenderOptions::default();
        entity_markup(&RenderContext::new(&doc, &options), "0", text).unwrap()
    }

    #[test]
    fn link_defaults_to_self() {
        let link = Entity::new(EntityType::Link).with_data("url", "http://x.com");
        assert_eq!(
            markup(link, Some("go")),
            "<a href=\"http://x.com\" target=\"_self\">go</a>"
        );
    }

    #[test]
    fn link_honors_target() {
        let link = Entity::new(EntityType::Link)
            .with_data("url", "http://x.com")
            .with_data("targetOption", "_blank");
        assert_eq!(
            markup(link, Some("go")),
            "<a href=\"http://x.com\" target=\"_blank\">go</a>"
        );
    }

    #[test]
    fn mention_carries_value() {
        let mention = Entity::new(EntityType::Mention)
            .with_data("url", "/u/ann")
            .with_data("value", "ann");
        assert_eq!(
            markup(mention, Some("@ann")),
            "<a href=\"/u/ann\" class=\"wysiwyg-mention\" data-mention data-value=\"ann\">@ann</a>"
        );
    }

    #[test]
    fn image_defaults_alignment() {
        let image = Entity::new(EntityType::Image)
            .with_data("src", "a.png")
            .with_data("alt", "pic")
            .with_data("height", "auto")
            .with_data("width", "100px");
        assert_eq!(
            markup(image, None),
            "<img src=\"a.png\" alt=\"pic\" style=\"float:none;height: auto;width: 100px\"/>"
        );
    }

    #[test]
    fn video_uses_alignment() {
        let video = Entity::new(EntityType::Video)
            .with_data("src", "v.mp4")
            .with_data("alignment", "left");
        assert_eq!(
            markup(video, None),
            "<video controls src=\"v.mp4\" alt=\"\" style=\"float:left;height: ;width: \"></video>"
        );
    }

    #[test]
    fn embedded_link_is_iframe() {
        let embed = Entity::new(EntityType::EmbeddedLink)
            .with_data("src", "https://e.com")
            .with_data("width", 300)
            .with_data("height", 200);
        assert_eq!(
            markup(embed, None),
            "<iframe width=\"300\" height=\"200\" src=\"https://e.com\" frameBorder=\"0\"></iframe>"
        );
    }

    #[test]
    fn cta_box_fills_template() {
        let cta = Entity::new(EntityType::CtaBox)
            .with_data("ctaTitle", "Sale")
            .with_data("ctaText", "Everything must go")
            .with_data("ctaButtonText", "Buy")
            .with_data("url", "https://shop");
        let html = markup(cta, Some("ignored"));
        assert!(html.starts_with("\n    <div id=\"ctabox-root\""));
        assert!(html.ends_with(">Buy</a>\n    </div>"));
        assert!(html.contains(">Sale</h3>"));
        assert!(html.contains(">Everything must go</p>"));
        assert!(html.contains("<a href=\"https://shop\" target=\"cta\""));
        assert!(html.contains(">Buy</a>"));
        assert!(!html.contains("ignored"));
    }

    #[test]
    fn cta_button_style_keeps_declaration_order() {
        let html = markup(Entity::new(EntityType::CtaBox), None);
        let declarations: Vec<&str> = html
            .lines()
            .map(str::trim)
            .skip_while(|line| !line.ends_with("style=\""))
            .skip(1)
            .take(4)
            .collect();
        assert_eq!(
            declarations,
            [
                "display: -webkit-box;",
                "background-color: red;",
                "box-shadow: 0 5px 0 darkred;",
                "color: white;",
            ]
        );
        assert!(html.contains("\n        padding: 1em 1.5em;\n"));
        assert!(html.contains("\n        padding: 14px 0;\n"));
        assert!(html.contains("background-image: url(data:image/jpeg;base64,"));
    }

    #[test]
    fn cta_image_wraps_image() {
        let cta = Entity::new(EntityType::CtaImage)
            .with_data("linkUrl", "https://shop")
            .with_data("src", "b.png");
        let html = markup(cta, None);
        assert!(html.contains("<a id=\"ctaimage-root\" href=\"https://shop\" target=\"cta\""));
        assert!(html.contains("<img src=\"b.png\" alt=\"\" style=\"float:none;"));
    }

    #[test]
    fn custom_type_passes_text_through() {
        let custom = Entity::new(EntityType::Custom("CARD".into()));
        assert_eq!(markup(custom.clone(), Some("<b>x</b>")), "<b>x</b>");
        assert_eq!(markup(custom, None), "");
    }

    #[test]
    fn transform_short_circuits() {
        let doc = document(Entity::new(EntityType::Link).with_data("url", "u"));
        let options = RenderOptions::default();
        let transform = |entity: &Entity, text: Option<&str>| {
            (entity.entity_type == EntityType::Link)
                .then(|| format!("[{}]", text.unwrap_or("-")))
        };
        let ctx = RenderContext::new(&doc, &options).with_transform(&transform);
        assert_eq!(entity_markup(&ctx, "0", Some("go")).unwrap(), "[go]");
        assert_eq!(entity_markup(&ctx, "0", None).unwrap(), "[-]");
    }

    #[test]
    fn empty_transform_result_falls_through() {
        let doc = document(Entity::new(EntityType::Link).with_data("url", "u"));
        let options = RenderOptions::default();
        let transform = |_: &Entity, _: Option<&str>| Some(String::new());
        let ctx = RenderContext::new(&doc, &options).with_transform(&transform);
        assert_eq!(
            entity_markup(&ctx, "0", Some("go")).unwrap(),
            "<a href=\"u\" target=\"_self\">go</a>"
        );
    }

    #[test]
    fn missing_key_is_an_error() {
        let doc = Document::empty();
        let options = RenderOptions::default();
        let err = entity_markup(&RenderContext::new(&doc, &options), "7", Some("x")).unwrap_err();
        assert_eq!(err, RenderError::UndefinedEntity { key: "7".into() });
    }
}
