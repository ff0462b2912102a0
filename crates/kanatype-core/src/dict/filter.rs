/// Inclusion/exclusion filter applied while building a dictionary.
///
/// Plain entries form a whitelist; entries prefixed with `-` are a
/// blacklist. An empty axis includes everything, so the default filter
/// admits the whole table. Exclusions are checked after inclusions, and a
/// spelling explicitly whitelisted here survives even when its usage flags
/// (`unused`/`extinct`/`obsolete`) would normally drop it.
#[derive(Debug, Clone, Default)]
pub struct TableFilter {
    pub groups: Vec<String>,
    pub spellings: Vec<String>,
}

const EXCLUSION_MARKER: char = '-';

fn inclusions(axis: &[String]) -> impl Iterator<Item = &str> {
    axis.iter()
        .map(String::as_str)
        .filter(|s| !s.starts_with(EXCLUSION_MARKER))
}

fn exclusions(axis: &[String]) -> impl Iterator<Item = &str> {
    axis.iter()
        .filter_map(|s| s.strip_prefix(EXCLUSION_MARKER))
}

fn admits_value(axis: &[String], value: &str) -> bool {
    let include = inclusions(axis).next().is_none() || inclusions(axis).any(|s| s == value);
    include && !exclusions(axis).any(|s| s == value)
}

impl TableFilter {
    pub fn new(groups: Vec<String>, spellings: Vec<String>) -> Self {
        Self { groups, spellings }
    }

    pub(crate) fn admits_group(&self, group: &str) -> bool {
        admits_value(&self.groups, group)
    }

    /// A symbol entry passes when its group is admitted and at least one of
    /// its inputs is admitted (any excluded input drops the whole entry).
    pub(crate) fn admits_entry(&self, group: &str, inputs: &[String]) -> bool {
        if !self.admits_group(group) {
            return false;
        }
        if inputs
            .iter()
            .any(|i| exclusions(&self.spellings).any(|s| s == i.as_str()))
        {
            return false;
        }
        inclusions(&self.spellings).next().is_none()
            || inputs
                .iter()
                .any(|i| inclusions(&self.spellings).any(|s| s == i.as_str()))
    }

    pub(crate) fn admits_spelling(&self, spelling: &str) -> bool {
        admits_value(&self.spellings, spelling)
    }

    /// Explicit whitelist membership, used to resurrect flagged spellings.
    pub(crate) fn whitelists_spelling(&self, spelling: &str) -> bool {
        inclusions(&self.spellings).any(|s| s == spelling)
    }
}
