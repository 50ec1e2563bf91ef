//! Suspect tally: how often each suspect is linked across all clues

use indexmap::IndexMap;

use crate::table::AssociationTable;

/// The suspect with the most associations and how many there are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopSuspect {
    /// Suspect name
    pub suspect: String,

    /// Number of associations naming the suspect
    pub count: usize,
}

/// Per-suspect association counts, in the order suspects were discovered.
///
/// Discovery order is the table's traversal order: buckets ascending, each
/// chain head to tail (most recent link first). Matching is exact and
/// case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct SuspectTally<'a> {
    counts: IndexMap<&'a str, usize>,
}

impl<'a> SuspectTally<'a> {
    /// Count every association in `table`.
    pub fn from_table(table: &'a AssociationTable) -> Self {
        let mut counts = IndexMap::new();
        for association in table.iter() {
            *counts.entry(association.suspect).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count recorded for `suspect` (0 if never linked).
    pub fn count(&self, suspect: &str) -> usize {
        self.counts.get(suspect).copied().unwrap_or(0)
    }

    /// Suspects and their counts in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.counts.iter().map(|(suspect, count)| (*suspect, *count))
    }

    /// Number of distinct suspects.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no suspect was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The suspect with the highest count.
    ///
    /// On a tie the suspect discovered first wins. Returns `None` for an
    /// empty tally.
    pub fn leader(&self) -> Option<TopSuspect> {
        let mut best: Option<(&str, usize)> = None;
        for (suspect, count) in self.iter() {
            match best {
                Some((_, top)) if count <= top => {}
                _ => best = Some((suspect, count)),
            }
        }
        best.map(|(suspect, count)| TopSuspect {
            suspect: suspect.to_string(),
            count,
        })
    }
}

impl AssociationTable {
    /// The suspect linked to the most clues, or `None` for an empty table.
    ///
    /// Ties go to the suspect met first when walking buckets in ascending
    /// order and each chain head to tail.
    pub fn most_cited_suspect(&self) -> Option<TopSuspect> {
        let leader = SuspectTally::from_table(self).leader();
        tracing::debug!(?leader, entries = self.len(), "tallied suspects");
        leader
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table_of(links: &[(&str, &str)]) -> AssociationTable {
        let mut table = AssociationTable::with_buckets(10).unwrap();
        for (clue, suspect) in links {
            table.insert(clue, suspect).unwrap();
        }
        table
    }

    #[test]
    fn test_empty_table_has_no_leader() {
        let table = table_of(&[]);
        assert!(SuspectTally::from_table(&table).is_empty());
        assert_eq!(table.most_cited_suspect(), None);
    }

    #[test]
    fn test_counts_across_clues() {
        let table = table_of(&[("knife", "Green"), ("knife", "Plum"), ("rope", "Green")]);
        let tally = SuspectTally::from_table(&table);
        assert_eq!(tally.len(), 2);
        assert_eq!(tally.count("Green"), 2);
        assert_eq!(tally.count("Plum"), 1);
        assert_eq!(tally.count("green"), 0);
    }

    #[test]
    fn test_discovery_order_follows_traversal() {
        // knife -> bucket 5 (Plum then Green), rope -> bucket 8
        let table = table_of(&[("knife", "Green"), ("knife", "Plum"), ("rope", "White")]);
        let tally = SuspectTally::from_table(&table);
        assert_eq!(
            tally.iter().collect::<Vec<_>>(),
            vec![("Plum", 1), ("Green", 1), ("White", 1)]
        );
    }

    #[test]
    fn test_tie_goes_to_first_discovered() {
        // "rope" (bucket 8) was recorded first, but "knife" (bucket 5) is walked first
        let table = table_of(&[("rope", "Green"), ("knife", "Plum")]);
        assert_eq!(
            table.most_cited_suspect(),
            Some(TopSuspect {
                suspect: "Plum".to_string(),
                count: 1,
            })
        );
    }

    #[test]
    fn test_tie_within_one_chain_prefers_most_recent() {
        let table = table_of(&[("knife", "Green"), ("knife", "Plum")]);
        assert_eq!(table.most_cited_suspect().unwrap().suspect, "Plum");
    }

    #[test]
    fn test_strictly_higher_count_wins() {
        let table = table_of(&[("c1", "A"), ("c2", "B"), ("c3", "A")]);
        assert_eq!(
            table.most_cited_suspect(),
            Some(TopSuspect {
                suspect: "A".to_string(),
                count: 2,
            })
        );
    }
}
