use crate::state::{Candidate, SortDirection};

/// What: Order candidates by registration timestamp in-place.
///
/// Inputs:
/// - `items`: Slice to reorder
/// - `direction`: Descending (newest first) or ascending
///
/// Output:
/// - `items` sorted by `created_at`; equal timestamps keep no particular
///   relative order beyond what the sort gives them.
pub fn sort_by_created_at(items: &mut [Candidate], direction: SortDirection) {
    items.sort_by(|a, b| match direction {
        SortDirection::Descending => b.created_at.cmp(&a.created_at),
        SortDirection::Ascending => a.created_at.cmp(&b.created_at),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::candidate;

    #[test]
    /// What: Descending puts the newest registration first, ascending the oldest
    ///
    /// - Input: Three candidates with distinct timestamps, shuffled
    /// - Output: [3,1,2] descending; [2,1,3] ascending
    fn sort_by_created_at_both_directions() {
        let mut items = vec![
            candidate(1, "a", "a@x.mx", "Engineer", 1, "2024-03-01T00:00:00Z"),
            candidate(2, "b", "b@x.mx", "Engineer", 1, "2024-01-15T00:00:00Z"),
            candidate(3, "c", "c@x.mx", "Engineer", 1, "2024-06-01T00:00:00Z"),
        ];
        sort_by_created_at(&mut items, SortDirection::Descending);
        let ids: Vec<u64> = items.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        sort_by_created_at(&mut items, SortDirection::Ascending);
        let ids: Vec<u64> = items.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    /// What: Flipping the direction on an unchanged set reverses the order
    ///
    /// - Input: Four candidates sorted descending, then ascending
    /// - Output: Ascending order is the exact reverse of descending
    fn sort_direction_flip_reverses_order() {
        let mut items = vec![
            candidate(1, "a", "a@x.mx", "Engineer", 1, "2023-11-02T08:00:00Z"),
            candidate(2, "b", "b@x.mx", "Sales", 2, "2024-02-20T12:30:00Z"),
            candidate(3, "c", "c@x.mx", "Designer", 3, "2024-05-05T09:15:00Z"),
            candidate(4, "d", "d@x.mx", "Engineer", 4, "2024-08-19T17:45:00Z"),
        ];
        sort_by_created_at(&mut items, SortDirection::Descending);
        let desc: Vec<u64> = items.iter().map(|c| c.id).collect();
        sort_by_created_at(&mut items, SortDirection::Ascending);
        let asc: Vec<u64> = items.iter().map(|c| c.id).collect();
        let mut reversed = desc.clone();
        reversed.reverse();
        assert_eq!(asc, reversed);
    }
}
