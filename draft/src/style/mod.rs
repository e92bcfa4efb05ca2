use std::fmt;

/// Binary on/off inline styles, listed in wrapping precedence (outermost first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ToggleStyle {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    Superscript,
    Subscript,
}

impl ToggleStyle {
    pub const ALL: [ToggleStyle; 7] = [
        ToggleStyle::Bold,
        ToggleStyle::Italic,
        ToggleStyle::Underline,
        ToggleStyle::Strikethrough,
        ToggleStyle::Code,
        ToggleStyle::Superscript,
        ToggleStyle::Subscript,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToggleStyle::Bold => "BOLD",
            ToggleStyle::Italic => "ITALIC",
            ToggleStyle::Underline => "UNDERLINE",
            ToggleStyle::Strikethrough => "STRIKETHROUGH",
            ToggleStyle::Code => "CODE",
            ToggleStyle::Superscript => "SUPERSCRIPT",
            ToggleStyle::Subscript => "SUBSCRIPT",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ToggleStyle::ALL.into_iter().find(|t| t.name() == name)
    }
}

/// Inline styles that carry a value, encoded in a tag as `prefix-value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyKind {
    Color,
    BgColor,
    FontSize,
    FontFamily,
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 4] = [
        PropertyKind::Color,
        PropertyKind::BgColor,
        PropertyKind::FontSize,
        PropertyKind::FontFamily,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            PropertyKind::Color => "color-",
            PropertyKind::BgColor => "bgcolor-",
            PropertyKind::FontSize => "fontsize-",
            PropertyKind::FontFamily => "fontfamily-",
        }
    }

    /// The CSS property this style maps onto.
    pub fn css_property(self) -> &'static str {
        match self {
            PropertyKind::Color => "color",
            PropertyKind::BgColor => "background-color",
            PropertyKind::FontSize => "font-size",
            PropertyKind::FontFamily => "font-family",
        }
    }
}

/// A decoded inline style tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StyleTag {
    Toggle(ToggleStyle),
    Property(PropertyKind, String),
    /// Unrecognized tags survive loading but are ignored when rendering.
    Unknown(String),
}

impl StyleTag {
    pub fn parse(tag: &str) -> Self {
        for kind in PropertyKind::ALL {
            if let Some(value) = tag.strip_prefix(kind.prefix()) {
                return StyleTag::Property(kind, value.to_string());
            }
        }
        match ToggleStyle::from_name(tag) {
            Some(toggle) => StyleTag::Toggle(toggle),
            None => StyleTag::Unknown(tag.to_string()),
        }
    }
}

impl From<&str> for StyleTag {
    fn from(tag: &str) -> Self {
        StyleTag::parse(tag)
    }
}

impl From<ToggleStyle> for StyleTag {
    fn from(toggle: ToggleStyle) -> Self {
        StyleTag::Toggle(toggle)
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleTag::Toggle(toggle) => f.write_str(toggle.name()),
            StyleTag::Property(kind, value) => write!(f, "{}{}", kind.prefix(), value),
            StyleTag::Unknown(tag) => f.write_str(tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_toggles_and_properties() {
        assert_eq!(StyleTag::parse("BOLD"), StyleTag::Toggle(ToggleStyle::Bold));
        assert_eq!(
            StyleTag::parse("color-rgb(1,2,3)"),
            StyleTag::Property(PropertyKind::Color, "rgb(1,2,3)".into())
        );
        assert_eq!(
            StyleTag::parse("bgcolor-red"),
            StyleTag::Property(PropertyKind::BgColor, "red".into())
        );
        assert_eq!(
            StyleTag::parse("fontfamily-Times New Roman"),
            StyleTag::Property(PropertyKind::FontFamily, "Times New Roman".into())
        );
        assert_eq!(StyleTag::parse("bold"), StyleTag::Unknown("bold".into()));
    }

    #[test]
    fn display_restores_tag() {
        for tag in ["ITALIC", "fontsize-12", "HIGHLIGHT"] {
            assert_eq!(StyleTag::parse(tag).to_string(), tag);
        }
    }
}
