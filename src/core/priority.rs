use std::cmp::Ordering;
use std::collections::HashMap;

/// Rank given to anything not found in a priority list.
pub const SENTINEL_RANK: usize = 999;

/// Ordered, immutable list of labels; position is rank.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityList {
    entries: Vec<String>,
    exact: HashMap<String, usize>,
    folded: HashMap<String, usize>,
}

impl PriorityList {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        let mut exact = HashMap::new();
        let mut folded = HashMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            // first occurrence keeps its slot
            exact.entry(entry.clone()).or_insert(idx);
            folded.entry(fold_key(entry)).or_insert(idx);
        }
        Self {
            entries,
            exact,
            folded,
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of `label` compared byte for byte.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.exact.get(label).copied()
    }

    /// Position of `label` ignoring case and surrounding whitespace.
    pub fn position_folded(&self, label: &str) -> Option<usize> {
        self.folded.get(&fold_key(label)).copied()
    }

    /// Exact position, then case-insensitive, then [`SENTINEL_RANK`].
    pub fn rank(&self, label: &str) -> usize {
        self.position(label)
            .or_else(|| self.position_folded(label))
            .unwrap_or(SENTINEL_RANK)
    }
}

fn fold_key(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Blank names go after every name with content.
pub fn blank_last(a: &str, b: &str) -> Ordering {
    match (a.trim().is_empty(), b.trim().is_empty()) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

/// Builds a comparator that orders by `rank_of` ascending and settles ties
/// with `tie_break`.
pub fn make_priority_sorter<T, R, B>(rank_of: R, tie_break: B) -> impl Fn(&T, &T) -> Ordering
where
    T: ?Sized,
    R: Fn(&T) -> usize,
    B: Fn(&T, &T) -> Ordering,
{
    move |a, b| {
        rank_of(a)
            .cmp(&rank_of(b))
            .then_with(|| tie_break(a, b))
    }
}
