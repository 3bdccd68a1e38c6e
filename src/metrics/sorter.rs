use crate::core::{Category, GroupKey, ResultRow, SortRule, Total};
use std::cmp::Ordering;

/// Order a category's totals for rendering.
///
/// Block counts are sorted by name ascending. Per-layer totals are sorted by
/// magnitude descending with the layer name ascending as tie-break, so the
/// order never depends on the mapping's iteration order.
pub fn sort<I>(category: Category, totals: I) -> Vec<ResultRow>
where
    I: IntoIterator<Item = (GroupKey, Total)>,
{
    let mut rows: Vec<ResultRow> = totals
        .into_iter()
        .map(|(key, total)| ResultRow::new(key, total))
        .collect();
    rows.sort_by(|a, b| compare(category.sort_rule(), a, b));
    rows
}

pub fn compare(rule: SortRule, a: &ResultRow, b: &ResultRow) -> Ordering {
    match rule {
        SortRule::KeyAscending => a.key.cmp(&b.key),
        SortRule::TotalDescending => b
            .total
            .total_cmp(&a.total)
            .then_with(|| a.key.cmp(&b.key)),
    }
}

/// True when `rows` are in the order `sort` would produce.
pub fn is_sorted(category: Category, rows: &[ResultRow]) -> bool {
    let rule = category.sort_rule();
    rows.windows(2)
        .all(|pair| compare(rule, &pair[0], &pair[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(rows: &[ResultRow]) -> Vec<&str> {
        rows.iter().map(|row| row.key.as_str()).collect()
    }

    #[test]
    fn test_block_rows_sorted_by_name() {
        let rows = sort(
            Category::BlockReference,
            vec![
                ("Window".to_string(), Total::Count(1)),
                ("Door".to_string(), Total::Count(9)),
                ("Chair".to_string(), Total::Count(3)),
            ],
        );
        assert_eq!(keys(&rows), vec!["Chair", "Door", "Window"]);
    }

    #[test]
    fn test_lexicographic_order_is_code_point_order() {
        let rows = sort(
            Category::BlockReference,
            vec![
                ("b".to_string(), Total::Count(1)),
                ("B".to_string(), Total::Count(1)),
                ("Б".to_string(), Total::Count(1)),
                ("a".to_string(), Total::Count(1)),
            ],
        );
        assert_eq!(keys(&rows), vec!["B", "a", "b", "Б"]);
    }

    #[test]
    fn test_layer_rows_sorted_by_total_descending() {
        let rows = sort(
            Category::Polyline,
            vec![
                ("Walls".to_string(), Total::Quantity(15.0)),
                ("Doors".to_string(), Total::Quantity(20.0)),
                ("Axes".to_string(), Total::Quantity(0.5)),
            ],
        );
        assert_eq!(keys(&rows), vec!["Doors", "Walls", "Axes"]);
    }

    #[test]
    fn test_equal_totals_fall_back_to_key() {
        let rows = sort(
            Category::SingleLineText,
            vec![
                ("Notes".to_string(), Total::Count(4)),
                ("Dims".to_string(), Total::Count(4)),
                ("Titles".to_string(), Total::Count(10)),
            ],
        );
        assert_eq!(keys(&rows), vec!["Titles", "Dims", "Notes"]);
    }

    #[test]
    fn test_empty_mapping_yields_no_rows() {
        let rows = sort(Category::Hatch, Vec::new());
        assert!(rows.is_empty());
        assert!(is_sorted(Category::Hatch, &rows));
    }

    #[test]
    fn test_is_sorted_detects_misordered_rows() {
        let rows = vec![
            ResultRow::new("Small", Total::Quantity(1.0)),
            ResultRow::new("Large", Total::Quantity(2.0)),
        ];
        assert!(!is_sorted(Category::Hatch, &rows));
        assert!(is_sorted(Category::BlockReference, &rows[1..]));
    }
}
