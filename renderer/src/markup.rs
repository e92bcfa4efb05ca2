//! Inline markup for one block: sections, style runs and whitespace.

use draft::block::Block;
use draft::style::{PropertyKind, ToggleStyle};

use crate::context::RenderContext;
use crate::entity::entity_markup;
use crate::error::RenderError;
use crate::runs::merge_runs;
use crate::sections::{Section, SectionKind, plan_sections};
use crate::style_index::{ActiveStyles, PROPERTY_ATTRIBUTES, StyleIndex, TOGGLE_ATTRIBUTES};

const NBSP: &str = "&nbsp;";

/// Escape raw text. Newlines become `<br>`.
pub fn escape_text(chars: &[char]) -> String {
    let mut escaped = String::with_capacity(chars.len());
    for &c in chars {
        match c {
            '\n' => escaped.push_str("<br>"),
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn toggle_tag(toggle: ToggleStyle) -> &'static str {
    match toggle {
        ToggleStyle::Bold => "strong",
        ToggleStyle::Italic => "em",
        ToggleStyle::Underline => "ins",
        ToggleStyle::Strikethrough => "del",
        ToggleStyle::Code => "code",
        ToggleStyle::Superscript => "sup",
        ToggleStyle::Subscript => "sub",
    }
}

/// Wrap `content` in one element per active toggle, BOLD outermost.
pub fn wrap_toggles(styles: &ActiveStyles, content: String) -> String {
    styles.toggles().rev().fold(content, |inner, toggle| {
        let tag = toggle_tag(toggle);
        format!("<{tag}>{inner}</{tag}>")
    })
}

/// Wrap `content` in a styled span if any property style is active.
pub fn wrap_properties(styles: &ActiveStyles, content: String) -> String {
    if !styles.has_properties() {
        return content;
    }
    let mut css = String::new();
    for kind in PropertyKind::ALL {
        if let Some(value) = styles.property(kind) {
            css.push_str(kind.css_property());
            css.push_str(": ");
            css.push_str(value);
            if kind == PropertyKind::FontSize && value.bytes().all(|b| b.is_ascii_digit()) {
                css.push_str("px");
            }
            css.push(';');
        }
    }
    format!("<span style=\"{css}\">{content}</span>")
}

fn render_section(
    ctx: &RenderContext<'_>,
    chars: &[char],
    index: &StyleIndex,
    section: &Section,
) -> Result<String, RenderError> {
    let mut text = String::new();
    for property_run in merge_runs(index, &PROPERTY_ATTRIBUTES, section.start, section.end) {
        let mut inner = String::new();
        for toggle_run in merge_runs(
            index,
            &TOGGLE_ATTRIBUTES,
            property_run.start,
            property_run.end,
        ) {
            let escaped = escape_text(&chars[toggle_run.start..toggle_run.end]);
            inner.push_str(&wrap_toggles(&toggle_run.styles, escaped));
        }
        text.push_str(&wrap_properties(&property_run.styles, inner));
    }
    match &section.kind {
        SectionKind::Plain => Ok(text),
        SectionKind::Entity { key } => entity_markup(ctx, key, Some(&text)),
        SectionKind::Hashtag => Ok(format!(
            "<a href=\"{text}\" class=\"wysiwyg-hashtag\">{text}</a>"
        )),
    }
}

/// Replace each leading literal space with `&nbsp;`.
pub fn preserve_leading_spaces(markup: &str) -> String {
    let rest = markup.trim_start_matches(' ');
    let mut out = NBSP.repeat(markup.len() - rest.len());
    out.push_str(rest);
    out
}

/// Replace each trailing literal space with `&nbsp;`.
pub fn preserve_trailing_spaces(markup: &str) -> String {
    let rest = markup.trim_end_matches(' ');
    let mut out = rest.to_string();
    out.push_str(&NBSP.repeat(markup.len() - rest.len()));
    out
}

/// Inner markup of a block: every section rendered in order.
///
/// Space preservation runs on the rendered markup of the first and last
/// sections, so a space behind an opening tag is left alone.
pub fn block_inner_markup(ctx: &RenderContext<'_>, block: &Block) -> Result<String, RenderError> {
    let chars: Vec<char> = block.text.chars().collect();
    let index = StyleIndex::new(chars.len(), &block.inline_style_ranges);
    let sections = plan_sections(block, ctx.hashtag());
    let last = sections.len().saturating_sub(1);

    let mut markup = String::new();
    for (i, section) in sections.iter().enumerate() {
        let mut text = render_section(ctx, &chars, &index, section)?;
        if i == 0 {
            text = preserve_leading_spaces(&text);
        }
        if i == last {
            text = preserve_trailing_spaces(&text);
        }
        markup.push_str(&text);
    }
    Ok(markup)
}
