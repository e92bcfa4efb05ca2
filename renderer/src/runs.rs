use crate::style_index::{ActiveStyles, Attribute, StyleIndex};

/// A maximal interval over which the compared attributes are constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRun {
    pub start: usize,
    pub end: usize,
    /// Everything active at `start`, not only the compared attributes.
    pub styles: ActiveStyles,
}

impl StyleRun {
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Split `[start, end)` into runs of identical values for `attributes`.
/// `end` is clipped to the indexed text.
pub fn merge_runs(
    index: &StyleIndex,
    attributes: &[Attribute],
    start: usize,
    end: usize,
) -> Vec<StyleRun> {
    let end = end.min(index.len());
    let mut runs: Vec<StyleRun> = Vec::new();
    for offset in start..end {
        if offset != start && index.same_as_previous(attributes, offset) {
            if let Some(run) = runs.last_mut() {
                run.end = offset + 1;
                continue;
            }
        }
        runs.push(StyleRun {
            start: offset,
            end: offset + 1,
            styles: index.styles_at(offset),
        });
    }
    runs
}
