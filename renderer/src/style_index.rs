//! Per-character style arrays for a single block.

use std::collections::{BTreeMap, BTreeSet};

use draft::block::Block;
use draft::block::range::InlineStyleRange;
use draft::style::{PropertyKind, StyleTag, ToggleStyle};

/// One of the eleven attributes the index tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Toggle(ToggleStyle),
    Property(PropertyKind),
}

pub const TOGGLE_ATTRIBUTES: [Attribute; 7] = [
    Attribute::Toggle(ToggleStyle::Bold),
    Attribute::Toggle(ToggleStyle::Italic),
    Attribute::Toggle(ToggleStyle::Underline),
    Attribute::Toggle(ToggleStyle::Strikethrough),
    Attribute::Toggle(ToggleStyle::Code),
    Attribute::Toggle(ToggleStyle::Superscript),
    Attribute::Toggle(ToggleStyle::Subscript),
];

pub const PROPERTY_ATTRIBUTES: [Attribute; 4] = [
    Attribute::Property(PropertyKind::Color),
    Attribute::Property(PropertyKind::BgColor),
    Attribute::Property(PropertyKind::FontSize),
    Attribute::Property(PropertyKind::FontFamily),
];

/// Styles in effect at one offset.
///
/// Toggles iterate in wrapping precedence (`ToggleStyle`'s declaration order).
/// Properties with an empty value are not considered active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveStyles {
    toggles: BTreeSet<ToggleStyle>,
    properties: BTreeMap<PropertyKind, String>,
}

impl ActiveStyles {
    pub fn toggles(&self) -> impl DoubleEndedIterator<Item = ToggleStyle> + '_ {
        self.toggles.iter().copied()
    }

    pub fn has(&self, toggle: ToggleStyle) -> bool {
        self.toggles.contains(&toggle)
    }

    pub fn property(&self, kind: PropertyKind) -> Option<&str> {
        self.properties.get(&kind).map(String::as_str)
    }

    pub fn has_properties(&self) -> bool {
        !self.properties.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleIndex {
    len: usize,
    toggles: [Vec<bool>; 7],
    properties: [Vec<Option<String>>; 4],
}

impl StyleIndex {
    pub fn for_block(block: &Block) -> Self {
        StyleIndex::new(block.char_len(), &block.inline_style_ranges)
    }

    /// Apply `ranges` in order over a text of `len` characters. Toggles are
    /// OR-ed in; a later property range overwrites earlier values it covers.
    pub fn new(len: usize, ranges: &[InlineStyleRange]) -> Self {
        let mut index = StyleIndex {
            len,
            toggles: std::array::from_fn(|_| vec![false; len]),
            properties: std::array::from_fn(|_| vec![None; len]),
        };
        for range in ranges {
            let covered = range.offset.min(len)..range.end().min(len);
            match &range.style {
                StyleTag::Toggle(toggle) => {
                    index.toggles[*toggle as usize][covered].fill(true);
                }
                StyleTag::Property(kind, value) => {
                    for slot in &mut index.properties[*kind as usize][covered] {
                        *slot = Some(value.clone());
                    }
                }
                StyleTag::Unknown(tag) => {
                    tracing::debug!("ignoring unrecognized inline style '{}'", tag);
                }
            }
        }
        index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn toggle(&self, toggle: ToggleStyle, offset: usize) -> bool {
        self.toggles[toggle as usize]
            .get(offset)
            .copied()
            .unwrap_or(false)
    }

    pub fn property(&self, kind: PropertyKind, offset: usize) -> Option<&str> {
        self.properties[kind as usize]
            .get(offset)
            .and_then(|v| v.as_deref())
    }

    /// True when every attribute in `attributes` holds the same value at
    /// `offset` as at `offset - 1`. Offset 0 and offsets past the end never do.
    pub fn same_as_previous(&self, attributes: &[Attribute], offset: usize) -> bool {
        if offset == 0 || offset >= self.len {
            return false;
        }
        attributes.iter().all(|attribute| match attribute {
            Attribute::Toggle(t) => self.toggle(*t, offset) == self.toggle(*t, offset - 1),
            Attribute::Property(k) => self.property(*k, offset) == self.property(*k, offset - 1),
        })
    }

    pub fn styles_at(&self, offset: usize) -> ActiveStyles {
        let toggles = ToggleStyle::ALL
            .into_iter()
            .filter(|t| self.toggle(*t, offset))
            .collect();
        let properties = PropertyKind::ALL
            .into_iter()
            .filter_map(|k| match self.property(k, offset) {
                Some(value) if !value.is_empty() => Some((k, value.to_string())),
                _ => None,
            })
            .collect();
        ActiveStyles {
            toggles,
            properties,
        }
    }
}
