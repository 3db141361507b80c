//! Nil-safe comparators and the record sort
//!
//! Every comparator is a strict less-than over two records. When either side
//! of the compared field is absent the comparator answers `false`, so two
//! records are only ever ordered by values that are actually present.

use log::debug;

/// Strict less-than over two records of one resource type
pub type Less<T> = fn(&T, &T) -> bool;

/// A sortable column key and its comparator
pub struct SortKey<T: 'static> {
    pub key: &'static str,
    pub less: Less<T>,
}

/// Ascending comparison of two optional values
///
/// Works for integers, floats (NaN is never ordered), strings (byte order),
/// booleans (`false < true`) and chrono timestamps (chronological).
pub fn less_opt<V: PartialOrd + ?Sized>(a: Option<&V>, b: Option<&V>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a < b,
        _ => false,
    }
}

/// Descending comparison of two optional values
pub fn greater_opt<V: PartialOrd + ?Sized>(a: Option<&V>, b: Option<&V>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a > b,
        _ => false,
    }
}

/// Compare string-typed numbers numerically, falling back to byte order
///
/// Both sides must parse as integers for the numeric comparison to apply.
pub fn less_numeric_str(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => match (a.parse::<i64>(), b.parse::<i64>()) {
            (Ok(x), Ok(y)) => x < y,
            _ => a < b,
        },
        _ => false,
    }
}

/// Sort records in place with a stable merge sort driven by `less`
///
/// Only `less(right, left)` moves a record ahead of an earlier one, so records
/// the comparator does not order keep their relative position inside each
/// merge. The comparator is not required to be a total order.
pub fn sort_records<T>(records: &mut Vec<T>, less: Less<T>) {
    let len = records.len();
    if len < 2 {
        return;
    }

    let mut order: Vec<usize> = (0..len).collect();
    let mut merged: Vec<usize> = Vec::with_capacity(len);
    let mut width = 1;

    while width < len {
        merged.clear();
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut i, mut j) = (start, mid);
            while i < mid && j < end {
                if less(&records[order[j]], &records[order[i]]) {
                    merged.push(order[j]);
                    j += 1;
                } else {
                    merged.push(order[i]);
                    i += 1;
                }
            }
            merged.extend_from_slice(&order[i..mid]);
            merged.extend_from_slice(&order[j..end]);
            start = end;
        }
        std::mem::swap(&mut order, &mut merged);
        width *= 2;
    }

    let mut slots: Vec<Option<T>> = records.drain(..).map(Some).collect();
    records.extend(order.into_iter().filter_map(|idx| slots[idx].take()));
    debug!("Sorted {} records", len);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Rec {
        tag: &'static str,
        n: Option<i64>,
        lun: Option<String>,
    }

    fn rec(tag: &'static str, n: Option<i64>) -> Rec {
        Rec { tag, n, lun: None }
    }

    fn lun(tag: &'static str, value: &str) -> Rec {
        Rec {
            tag,
            n: None,
            lun: Some(value.to_string()),
        }
    }

    fn by_n(a: &Rec, b: &Rec) -> bool {
        less_opt(a.n.as_ref(), b.n.as_ref())
    }

    fn by_lun(a: &Rec, b: &Rec) -> bool {
        less_numeric_str(a.lun.as_deref(), b.lun.as_deref())
    }

    fn tags(records: &[Rec]) -> Vec<&'static str> {
        records.iter().map(|r| r.tag).collect()
    }

    #[test]
    fn test_less_opt_orders_present_values() {
        assert!(less_opt(Some(&1), Some(&2)));
        assert!(!less_opt(Some(&2), Some(&1)));
        assert!(!less_opt(Some(&2), Some(&2)));
        assert!(less_opt(Some("abc"), Some("abd")));
    }

    #[test]
    fn test_less_opt_absent_is_never_ordered() {
        assert!(!less_opt::<i64>(None, Some(&1)));
        assert!(!less_opt::<i64>(Some(&1), None));
        assert!(!less_opt::<i64>(None, None));
    }

    #[test]
    fn test_less_opt_nan_is_never_ordered() {
        assert!(!less_opt(Some(&f64::NAN), Some(&1.0)));
        assert!(!less_opt(Some(&1.0), Some(&f64::NAN)));
        assert!(less_opt(Some(&1.5), Some(&2.5)));
    }

    #[test]
    fn test_less_opt_booleans() {
        assert!(less_opt(Some(&false), Some(&true)));
        assert!(!less_opt(Some(&true), Some(&false)));
    }

    #[test]
    fn test_greater_opt_inverts_polarity() {
        assert!(greater_opt(Some(&5), Some(&1)));
        assert!(!greater_opt(Some(&1), Some(&5)));
        assert!(!greater_opt::<i64>(None, Some(&5)));
    }

    #[test]
    fn test_numeric_fallback_parses_both_sides() {
        assert!(less_numeric_str(Some("20"), Some("100")));
        assert!(!less_numeric_str(Some("100"), Some("20")));
    }

    #[test]
    fn test_numeric_fallback_uses_bytes_when_one_side_fails() {
        assert!(less_numeric_str(Some("20"), Some("abc")));
        assert!(!less_numeric_str(Some("abc"), Some("20")));
        // "100" < "20" lexicographically once numeric parsing is off the table
        assert!(less_numeric_str(Some("100"), Some("2x")));
    }

    #[test]
    fn test_numeric_fallback_absent() {
        assert!(!less_numeric_str(None, Some("1")));
        assert!(!less_numeric_str(Some("1"), None));
    }

    #[test]
    fn test_sort_records_numeric_fallback_end_to_end() {
        let mut records = vec![lun("a", "100"), lun("b", "20")];
        sort_records(&mut records, by_lun);
        assert_eq!(tags(&records), vec!["b", "a"]);

        let mut records = vec![lun("a", "abc"), lun("b", "20")];
        sort_records(&mut records, by_lun);
        assert_eq!(tags(&records), vec!["b", "a"]);
    }

    #[test]
    fn test_sort_records_ascending() {
        let mut records = vec![rec("c", Some(3)), rec("a", Some(1)), rec("b", Some(2))];
        sort_records(&mut records, by_n);
        assert_eq!(tags(&records), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_records_is_stable_for_equal_keys() {
        let mut records = vec![
            rec("x1", Some(2)),
            rec("y", Some(1)),
            rec("x2", Some(2)),
            rec("x3", Some(2)),
        ];
        sort_records(&mut records, by_n);
        assert_eq!(tags(&records), vec!["y", "x1", "x2", "x3"]);
    }

    #[test]
    fn test_sort_records_all_absent_keeps_input_order() {
        let mut records = vec![rec("a", None), rec("b", None), rec("c", None)];
        sort_records(&mut records, by_n);
        assert_eq!(tags(&records), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_records_with_absent_values_does_not_panic() {
        let mut records = vec![
            rec("a", Some(9)),
            rec("b", None),
            rec("c", Some(1)),
            rec("d", None),
            rec("e", Some(5)),
        ];
        sort_records(&mut records, by_n);
        assert_eq!(records.len(), 5);
        let mut seen = tags(&records);
        seen.sort();
        assert_eq!(seen, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_sort_records_empty_and_single() {
        let mut empty: Vec<Rec> = Vec::new();
        sort_records(&mut empty, by_n);
        assert!(empty.is_empty());

        let mut single = vec![rec("a", None)];
        sort_records(&mut single, by_n);
        assert_eq!(tags(&single), vec!["a"]);
    }
}
