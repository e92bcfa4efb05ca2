//! Partition a block's text into plain, entity and hashtag sections.

use std::ops::Range;

use draft::block::Block;

use crate::config::HashtagConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind {
    Plain,
    Entity { key: String },
    Hashtag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub start: usize,
    pub end: usize,
    pub kind: SectionKind,
}

impl Section {
    fn plain(start: usize, end: usize) -> Self {
        Section {
            start,
            end,
            kind: SectionKind::Plain,
        }
    }
}

/// Find hashtag ranges in `text`, trigger included.
///
/// A token starts after `separator + trigger` (or after `trigger` at offset 0)
/// and runs to the next separator or the end of the text. Empty tokens are
/// skipped. Scanning resumes after each token.
pub fn find_hashtags(text: &[char], config: &HashtagConfig) -> Vec<Range<usize>> {
    let trigger: Vec<char> = config.trigger().chars().collect();
    let separator: Vec<char> = config.separator().chars().collect();
    let needle: Vec<char> = separator.iter().chain(&trigger).copied().collect();

    let mut hashtags = Vec::new();
    let mut next_token = if text.starts_with(&trigger) {
        Some(trigger.len())
    } else {
        position(text, &needle).map(|i| i + needle.len())
    };
    while let Some(token_start) = next_token {
        let token_end = position(&text[token_start..], &separator)
            .map_or(text.len(), |i| token_start + i);
        if token_end > token_start {
            hashtags.push(token_start - trigger.len()..token_end);
        }
        next_token =
            position(&text[token_end..], &needle).map(|i| token_end + i + needle.len());
    }
    hashtags
}

fn position(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Plan the sections of `block`, in ascending offset order.
///
/// Entity ranges go in before hashtag ranges and the sort is stable, so an
/// entity wins ties on start offset. The two kinds are not reconciled
/// otherwise: a hashtag inside an entity yields overlapping sections.
/// A range without an entity key becomes a plain section over its interval.
pub fn plan_sections(block: &Block, hashtag: Option<&HashtagConfig>) -> Vec<Section> {
    let chars: Vec<char> = block.text.chars().collect();

    let mut tagged: Vec<Section> = block
        .entity_ranges
        .iter()
        .map(|range| match &range.key {
            Some(key) => Section {
                start: range.offset,
                end: range.end(),
                kind: SectionKind::Entity { key: key.clone() },
            },
            None => Section::plain(range.offset, range.end()),
        })
        .collect();
    if let Some(config) = hashtag {
        tagged.extend(find_hashtags(&chars, config).into_iter().map(|r| Section {
            start: r.start,
            end: r.end,
            kind: SectionKind::Hashtag,
        }));
    }
    tagged.sort_by_key(|section| section.start);

    let mut sections = Vec::with_capacity(tagged.len() * 2 + 1);
    let mut cursor = 0;
    for section in tagged {
        if section.start > cursor {
            sections.push(Section::plain(cursor, section.start));
        }
        cursor = section.end;
        sections.push(section);
    }
    if cursor < chars.len() {
        sections.push(Section::plain(cursor, chars.len()));
    }
    tracing::trace!(count = sections.len(), "planned sections");
    sections
}

#[cfg(test)]
mod tests {
    use draft::block::BlockType;
    use draft::block::range::EntityRange;

    use super::*;

    fn hashtags(text: &str) -> Vec<Range<usize>> {
        let chars: Vec<char> = text.chars().collect();
        find_hashtags(&chars, &HashtagConfig::default())
    }

    fn layout(sections: &[Section]) -> Vec<(usize, usize, &SectionKind)> {
        sections.iter().map(|s| (s.start, s.end, &s.kind)).collect()
    }

    #[test]
    fn hashtag_after_separator() {
        assert_eq!(hashtags("hello #world test"), [6..12]);
    }

    #[test]
    fn hashtag_at_start_and_after() {
        assert_eq!(hashtags("#a #bc d"), [0..2, 3..6]);
    }

    #[test]
    fn bare_trigger_is_not_a_hashtag() {
        assert!(hashtags("a # b").is_empty());
        assert!(hashtags("#").is_empty());
        assert!(hashtags("no tags here").is_empty());
    }

    #[test]
    fn doubled_trigger_stays_one_token() {
        assert_eq!(hashtags("a ##b"), [2..5]);
    }

    #[test]
    fn custom_trigger_and_separator() {
        let chars: Vec<char> = "x,@one,@two".chars().collect();
        let config = HashtagConfig {
            trigger: "@".into(),
            separator: ",".into(),
        };
        assert_eq!(find_hashtags(&chars, &config), [2..6, 7..11]);
    }

    #[test]
    fn offsets_count_characters() {
        assert_eq!(hashtags("héllo #wörld"), [6..12]);
    }

    #[test]
    fn gaps_become_plain_sections() {
        let block = Block::new(BlockType::Unstyled, "go to x now").with_entity(3, 4, "0");
        let sections = plan_sections(&block, None);
        assert_eq!(
            layout(&sections),
            [
                (0, 3, &SectionKind::Plain),
                (3, 7, &SectionKind::Entity { key: "0".into() }),
                (7, 11, &SectionKind::Plain),
            ]
        );
    }

    #[test]
    fn hashtags_merge_with_entities_in_order() {
        let block = Block::new(BlockType::Unstyled, "#tag and link").with_entity(9, 4, "k");
        let sections = plan_sections(&block, Some(&HashtagConfig::default()));
        assert_eq!(
            layout(&sections),
            [
                (0, 4, &SectionKind::Hashtag),
                (4, 9, &SectionKind::Plain),
                (9, 13, &SectionKind::Entity { key: "k".into() }),
            ]
        );
    }

    #[test]
    fn entity_precedes_hashtag_on_tie() {
        let block = Block::new(BlockType::Unstyled, "#tag").with_entity(0, 4, "k");
        let sections = plan_sections(&block, Some(&HashtagConfig::default()));
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].kind, SectionKind::Entity { key: "k".into() });
        assert_eq!(sections[1].kind, SectionKind::Hashtag);
    }

    #[test]
    fn hashtag_inside_longer_entity_overlaps() {
        let block = Block::new(BlockType::Unstyled, "see a #tag here").with_entity(0, 10, "k");
        let sections = plan_sections(&block, Some(&HashtagConfig::default()));
        assert_eq!(
            layout(&sections),
            [
                (0, 10, &SectionKind::Entity { key: "k".into() }),
                (6, 10, &SectionKind::Hashtag),
                (10, 15, &SectionKind::Plain),
            ]
        );
    }

    #[test]
    fn hashtag_ending_inside_entity_restarts_plain_text_after_it() {
        let block = Block::new(BlockType::Unstyled, "ab #cd efghij").with_entity(0, 10, "k");
        let sections = plan_sections(&block, Some(&HashtagConfig::default()));
        assert_eq!(
            layout(&sections),
            [
                (0, 10, &SectionKind::Entity { key: "k".into() }),
                (3, 6, &SectionKind::Hashtag),
                (6, 13, &SectionKind::Plain),
            ]
        );
    }

    #[test]
    fn keyless_range_is_plain() {
        let mut block = Block::new(BlockType::Unstyled, "go now");
        block.entity_ranges.push(EntityRange::keyless(0, 2));
        assert_eq!(
            layout(&plan_sections(&block, None)),
            [(0, 2, &SectionKind::Plain), (2, 6, &SectionKind::Plain)]
        );
    }

    #[test]
    fn hashtags_off_without_config() {
        let block = Block::new(BlockType::Unstyled, "#tag");
        assert_eq!(layout(&plan_sections(&block, None)), [(0, 4, &SectionKind::Plain)]);
    }

    #[test]
    fn empty_text_has_no_sections() {
        let block = Block::new(BlockType::Unstyled, "");
        assert!(plan_sections(&block, Some(&HashtagConfig::default())).is_empty());
    }
}
