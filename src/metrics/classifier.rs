use crate::core::{Category, DrawingObject, ObjectKind};

/// Category an object is aggregated under, or `None` when its kind has no
/// metric. Depends on the kind tag alone.
pub fn classify(object: &DrawingObject) -> Option<Category> {
    classify_kind(&object.kind)
}

pub fn classify_kind(kind: &ObjectKind) -> Option<Category> {
    match kind {
        ObjectKind::BlockReference => Some(Category::BlockReference),
        ObjectKind::Polyline => Some(Category::Polyline),
        ObjectKind::Text => Some(Category::SingleLineText),
        ObjectKind::Hatch => Some(Category::Hatch),
        ObjectKind::Other(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_kinds() {
        assert_eq!(
            classify(&DrawingObject::block_reference("Door")),
            Some(Category::BlockReference)
        );
        assert_eq!(
            classify(&DrawingObject::polyline("Walls", 1.0)),
            Some(Category::Polyline)
        );
        assert_eq!(
            classify(&DrawingObject::text("Notes", "Hi")),
            Some(Category::SingleLineText)
        );
        assert_eq!(
            classify(&DrawingObject::hatch("Fill", 2.0)),
            Some(Category::Hatch)
        );
    }

    #[test]
    fn test_classify_ignores_fields() {
        // A block reference without a name is still a block reference;
        // the missing name is the accumulator's problem.
        assert_eq!(
            classify(&DrawingObject::new(ObjectKind::BlockReference)),
            Some(Category::BlockReference)
        );
    }

    #[test]
    fn test_unknown_kinds_are_unclassified() {
        for tag in ["AcDbMText", "AcDbLine", "AcDbCircle", ""] {
            assert_eq!(classify(&DrawingObject::new(tag)), None, "tag {tag:?}");
        }
    }
}
