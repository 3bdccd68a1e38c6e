use super::accumulator::Accumulators;
use super::classifier::classify;
use super::labels::Labels;
use crate::core::{AggregationStats, DrawingObject, Error, MetricsReport, ResultSet, Result};

/// Aggregate model-space objects into the four result sets with English
/// captions.
pub fn aggregate<'a, I>(objects: I) -> Result<MetricsReport>
where
    I: IntoIterator<Item = &'a DrawingObject>,
{
    aggregate_with(objects, &Labels::default())
}

/// Single pass over `objects`: classify, merge, then sort every category.
///
/// The first object that cannot be measured aborts the pass; no partial
/// report is returned.
pub fn aggregate_with<'a, I>(objects: I, labels: &Labels) -> Result<MetricsReport>
where
    I: IntoIterator<Item = &'a DrawingObject>,
{
    let mut accumulators = Accumulators::new();
    let mut stats = AggregationStats::default();

    for (index, object) in objects.into_iter().enumerate() {
        stats.scanned += 1;
        let Some(category) = classify(object) else {
            log::trace!("Skipping object #{} of kind {}", index, object.kind);
            stats.skipped += 1;
            continue;
        };

        accumulators
            .merge(category, object)
            .map_err(|source| Error::measure_extraction(index, object.handle.clone(), source))?;
        stats.classified[category.index()] += 1;
    }

    log::debug!(
        "Aggregated {} objects ({} skipped): blocks={}, polylines={}, texts={}, hatches={}",
        stats.scanned,
        stats.skipped,
        stats.classified[0],
        stats.classified[1],
        stats.classified[2],
        stats.classified[3],
    );

    let result_sets = accumulators
        .into_inner()
        .into_iter()
        .map(|accumulator| {
            let category = accumulator.category();
            ResultSet {
                category,
                caption: labels.caption(category).to_string(),
                headers: labels.headers(category),
                rows: accumulator.into_rows(),
            }
        })
        .collect();

    Ok(MetricsReport { result_sets, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, ObjectKind, Total};
    use crate::metrics::labels::Locale;

    #[test]
    fn test_empty_input_yields_four_empty_sets() {
        let report = aggregate(&Vec::<DrawingObject>::new()).unwrap();
        assert_eq!(report.result_sets.len(), 4);
        assert!(report.is_empty());
        assert_eq!(report.stats, AggregationStats::default());
        let order: Vec<_> = report.iter().map(|set| set.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn test_mixed_input_routes_each_object_once() {
        let objects = vec![
            DrawingObject::block_reference("Door"),
            DrawingObject::polyline("Walls", 3.0),
            DrawingObject::text("Notes", "abc"),
            DrawingObject::hatch("Fill", 1.5),
            DrawingObject::new("AcDbCircle").with_layer("Walls"),
        ];
        let report = aggregate(&objects).unwrap();

        assert_eq!(report.stats.scanned, 5);
        assert_eq!(report.stats.skipped, 1);
        for category in Category::ALL {
            assert_eq!(report.stats.classified_as(category), 1);
            assert_eq!(report.get(category).unwrap().rows.len(), 1);
        }
        assert_eq!(
            report.get(Category::Polyline).unwrap().get("Walls"),
            Some(Total::Quantity(3.0))
        );
    }

    #[test]
    fn test_bad_object_aborts_pass_with_position() {
        let objects = vec![
            DrawingObject::polyline("Walls", 3.0),
            DrawingObject::new(ObjectKind::Hatch)
                .with_layer("Fill")
                .with_handle("1A"),
        ];
        let err = aggregate(&objects).unwrap_err();
        match err {
            Error::MeasureExtraction { index, handle, source } => {
                assert_eq!(index, 1);
                assert_eq!(handle.as_deref(), Some("1A"));
                assert_eq!(source.field(), "area");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_captions_follow_locale() {
        let objects = vec![DrawingObject::block_reference("Door")];
        let report = aggregate_with(&objects, &Labels::for_locale(Locale::Ru)).unwrap();
        let blocks = report.get(Category::BlockReference).unwrap();
        assert_eq!(blocks.caption, "Количество вхождений блока каждого типа");
        assert_eq!(blocks.rows[0].total, Total::Count(1));
    }
}
