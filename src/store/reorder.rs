use crate::domain::Period;

/// Where the period at `index` belongs so the sequence is ordered by start
/// date again. Assumes every other period is already ordered relative to
/// the rest, so a single move always suffices.
///
/// Returns `None` for an out-of-range index.
pub fn repositioned_index(periods: &[Period], index: usize) -> Option<usize> {
    let edited = periods.get(index)?.start_date;

    let after_prev = index
        .checked_sub(1)
        .and_then(|prev| periods.get(prev))
        .is_none_or(|prev| prev.start_date <= edited);
    let before_next = periods
        .get(index + 1)
        .is_none_or(|next| edited <= next.start_date);
    if after_prev && before_next {
        return Some(index);
    }

    // First later-dated period decides the slot. Removing `index` first shifts
    // everything after it down by one.
    let target = periods
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != index)
        .find(|(_, other)| edited < other.start_date)
        .map(|(j, _)| if j > index { j - 1 } else { j })
        .unwrap_or(periods.len() - 1);

    Some(target)
}

/// Remove at `from`, insert at `to`. Indices are positions before/after the removal
/// exactly like a list "move".
pub fn relocate<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use itertools::Itertools;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, n).unwrap()
    }

    fn periods(days: &[u32]) -> Vec<Period> {
        days.iter().map(|&n| Period::new(100, 120, day(n))).collect()
    }

    fn dates(periods: &[Period]) -> Vec<NaiveDate> {
        periods.iter().map(|p| p.start_date).collect()
    }

    fn is_sorted(periods: &[Period]) -> bool {
        periods
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.start_date <= b.start_date)
    }

    #[test]
    fn in_place_when_still_ordered() {
        let mut seq = periods(&[1, 3, 5, 7]);
        seq[1].start_date = day(4);
        assert_eq!(repositioned_index(&seq, 1), Some(1));
    }

    #[test]
    fn moves_earlier() {
        let mut seq = periods(&[1, 3, 5]);
        seq[2].start_date = day(2);
        assert_eq!(repositioned_index(&seq, 2), Some(1));
    }

    #[test]
    fn moves_later_accounting_for_removal() {
        let mut seq = periods(&[1, 3, 5, 7]);
        seq[0].start_date = day(6);
        assert_eq!(repositioned_index(&seq, 0), Some(2));
    }

    #[test]
    fn moves_to_end_when_nothing_is_later() {
        let mut seq = periods(&[1, 10, 5]);
        seq[1].start_date = day(10);
        assert_eq!(repositioned_index(&seq, 1), Some(2));
    }

    #[test]
    fn equal_dates_do_not_move() {
        let mut seq = periods(&[1, 3, 3, 5]);
        seq[1].start_date = day(3);
        assert_eq!(repositioned_index(&seq, 1), Some(1));
        assert_eq!(repositioned_index(&seq, 2), Some(2));
    }

    #[test]
    fn out_of_range_is_none() {
        assert_eq!(repositioned_index(&periods(&[1]), 1), None);
        assert_eq!(repositioned_index(&[], 0), None);
    }

    #[test]
    fn relocate_moves_single_item() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        relocate(&mut items, 0, 2);
        assert_eq!(items, vec!['b', 'c', 'a', 'd']);
        relocate(&mut items, 3, 0);
        assert_eq!(items, vec!['d', 'b', 'c', 'a']);
        relocate(&mut items, 1, 9);
        assert_eq!(items, vec!['d', 'b', 'c', 'a']);
    }

    #[test]
    fn any_single_edit_of_a_sorted_sequence_is_repaired_in_one_move() {
        let base = [2, 4, 4, 8, 12];
        for index in 0..base.len() {
            for new_day in 1..=14 {
                let mut seq = periods(&base);
                seq[index].start_date = day(new_day);
                let id = seq[index].id;

                let target = repositioned_index(&seq, index).unwrap();
                relocate(&mut seq, index, target);

                assert!(is_sorted(&seq), "edit {index} -> {new_day}: {:?}", dates(&seq));
                assert_eq!(seq[target].id, id);
                // A second pass over the settled sequence changes nothing.
                assert_eq!(repositioned_index(&seq, target), Some(target));
            }
        }
    }
}
