//! Grouping and de-duplication policies.
//!
//! Both are plain values owned by a single conversion call.

use std::collections::HashSet;

use super::table::{Row, Table};

/// Normalise a group name for de-duplication: trimmed, internal whitespace
/// runs collapsed to a single space, lowercased.
pub fn normalize_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Tracks which group names have already been emitted.
#[derive(Debug, Clone, Default)]
pub struct FirstSeen {
    seen: HashSet<String>,
}

impl FirstSeen {
    pub fn new() -> Self {
        Self::default()
    }

    /// True the first time a name (after normalisation) is offered; false on
    /// every later call with an equivalent name.
    pub fn first_sight(&mut self, name: &str) -> bool {
        self.seen.insert(normalize_key(name))
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// One multi-row logical record: a leader row and the keyless rows after it.
#[derive(Debug, Clone)]
pub struct Group<'a> {
    pub key: String,
    pub leader: Row<'a>,
    pub followers: Vec<Row<'a>>,
}

impl<'a> Group<'a> {
    /// Leader first, then followers, in table order.
    pub fn rows(&self) -> Vec<Row<'a>> {
        std::iter::once(self.leader)
            .chain(self.followers.iter().copied())
            .collect()
    }
}

/// Result of [`group_by_leader`].
#[derive(Debug, Clone, Default)]
pub struct Grouped<'a> {
    /// Groups in leader-encounter order.
    pub groups: Vec<Group<'a>>,
    /// Indices of rows that appeared before any leader.
    pub orphans: Vec<usize>,
}

/// Split a table into leading-row groups.
///
/// A row whose `key_column` is present starts a new group, even when the
/// key repeats an earlier one. Rows without a key join the most recent
/// group; those before the first leader are reported as orphans.
pub fn group_by_leader<'a>(table: &'a Table, key_column: &str) -> Grouped<'a> {
    let mut grouped = Grouped::default();
    for row in table.rows() {
        match row.get(key_column) {
            Some(key) => grouped.groups.push(Group {
                key: key.to_string(),
                leader: row,
                followers: Vec::new(),
            }),
            None => match grouped.groups.last_mut() {
                Some(group) => group.followers.push(row),
                None => {
                    tracing::debug!(row = row.position(), "dropping row before first group leader");
                    grouped.orphans.push(row.index());
                }
            },
        }
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_and_lowercases() {
        assert_eq!(normalize_key("  Raw   Material\t"), "raw material");
        assert_eq!(normalize_key("RAW MATERIAL"), "raw material");
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn first_sight_is_case_and_space_insensitive() {
        let mut seen = FirstSeen::new();
        assert!(seen.first_sight("Raw Material"));
        assert!(!seen.first_sight("raw  material"));
        assert!(seen.first_sight("Finished Goods"));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn groups_follow_leaders() {
        let table = Table::new(
            ["name", "account"],
            vec![
                vec!["A", "a1"],
                vec!["", "a2"],
                vec!["nan", "a3"],
                vec!["B", "b1"],
                vec!["", "b2"],
            ],
        );
        let grouped = group_by_leader(&table, "name");
        assert!(grouped.orphans.is_empty());
        let summary: Vec<_> = grouped
            .groups
            .iter()
            .map(|g| (g.key.as_str(), g.followers.len()))
            .collect();
        assert_eq!(summary, [("A", 2), ("B", 1)]);
        let accounts: Vec<_> = grouped.groups[0]
            .rows()
            .iter()
            .filter_map(|r| r.get("account"))
            .collect();
        assert_eq!(accounts, ["a1", "a2", "a3"]);
    }

    #[test]
    fn rows_before_first_leader_are_orphans() {
        let table = Table::new(["name"], vec![vec![""], vec![" "], vec!["JV-1"]]);
        let grouped = group_by_leader(&table, "name");
        assert_eq!(grouped.orphans, [0, 1]);
        assert_eq!(grouped.groups.len(), 1);
    }

    #[test]
    fn repeated_key_starts_new_group() {
        let table = Table::new(["name"], vec![vec!["JV-1"], vec!["JV-1"]]);
        assert_eq!(group_by_leader(&table, "name").groups.len(), 2);
    }
}
