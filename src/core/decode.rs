//! Deserialization of [`DrawingObject`].
//!
//! Drawing exports are loose about scalars: the default layer is often
//! written `layer: 0` and text contents may be plain numbers. Such values are
//! read back as their textual form. Every field error is prefixed with the
//! field name so a rejected object can be located.

use super::{DrawingObject, ObjectKind};
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "lowercase")]
enum Field {
    Kind,
    Handle,
    Layer,
    Name,
    Length,
    Area,
    Text,
    #[serde(other)]
    Unknown,
}

impl Field {
    fn name(&self) -> &'static str {
        match self {
            Field::Kind => "kind",
            Field::Handle => "handle",
            Field::Layer => "layer",
            Field::Name => "name",
            Field::Length => "length",
            Field::Area => "area",
            Field::Text => "text",
            Field::Unknown => "unknown",
        }
    }
}

/// A string, or a number taken as its decimal text. Null is absent.
struct Scalar(Option<String>);

impl Scalar {
    fn into_inner(self) -> Option<String> {
        self.0
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ScalarVisitor).map(Scalar)
    }
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = Option<String>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or a number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

// Reads the value of `field` into an empty slot.
fn fill<'de, A, T>(map: &mut A, slot: &mut Option<T>, field: Field) -> Result<(), A::Error>
where
    A: MapAccess<'de>,
    T: Deserialize<'de>,
{
    if slot.is_some() {
        return Err(de::Error::duplicate_field(field.name()));
    }
    let value = map
        .next_value::<T>()
        .map_err(|e| de::Error::custom(format_args!("invalid `{}`: {}", field.name(), e)))?;
    *slot = Some(value);
    Ok(())
}

struct DrawingObjectVisitor;

impl<'de> Visitor<'de> for DrawingObjectVisitor {
    type Value = DrawingObject;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a drawing object with a `kind` tag")
    }

    fn visit_map<A>(self, mut map: A) -> Result<DrawingObject, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut kind: Option<String> = None;
        let mut handle: Option<Scalar> = None;
        let mut layer: Option<Scalar> = None;
        let mut name: Option<Scalar> = None;
        let mut text: Option<Scalar> = None;
        let mut length: Option<Option<f64>> = None;
        let mut area: Option<Option<f64>> = None;

        while let Some(field) = map.next_key::<Field>()? {
            match field {
                Field::Kind => fill(&mut map, &mut kind, field)?,
                Field::Handle => fill(&mut map, &mut handle, field)?,
                Field::Layer => fill(&mut map, &mut layer, field)?,
                Field::Name => fill(&mut map, &mut name, field)?,
                Field::Text => fill(&mut map, &mut text, field)?,
                Field::Length => fill(&mut map, &mut length, field)?,
                Field::Area => fill(&mut map, &mut area, field)?,
                Field::Unknown => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        let kind = kind.ok_or_else(|| de::Error::missing_field("kind"))?;
        Ok(DrawingObject {
            kind: ObjectKind::from(kind),
            handle: handle.and_then(Scalar::into_inner),
            layer: layer.and_then(Scalar::into_inner),
            name: name.and_then(Scalar::into_inner),
            length: length.flatten(),
            area: area.flatten(),
            text: text.and_then(Scalar::into_inner),
        })
    }
}

impl<'de> Deserialize<'de> for DrawingObject {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DrawingObjectVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_numeric_layer_and_text_read_as_text() {
        let objects: Vec<DrawingObject> = serde_yaml::from_str(indoc! {"
            - kind: AcDbPolyline
              layer: 0
              length: 2.0
            - kind: AcDbText
              layer: 12.5
              text: 123
            - kind: AcDbBlockReference
              name: 42
              handle: 2B
        "})
        .unwrap();

        assert_eq!(objects[0], DrawingObject::polyline("0", 2.0));
        assert_eq!(objects[1], DrawingObject::text("12.5", "123"));
        assert_eq!(objects[2].name.as_deref(), Some("42"));
        assert_eq!(objects[2].handle.as_deref(), Some("2B"));
    }

    #[test]
    fn test_integer_measure_is_accepted() {
        let object: DrawingObject =
            serde_json::from_str(r#"{"kind": "AcDbHatch", "layer": "Fill", "area": 4}"#).unwrap();
        assert_eq!(object, DrawingObject::hatch("Fill", 4.0));
    }

    #[test]
    fn test_null_and_unknown_fields() {
        let object: DrawingObject = serde_json::from_str(
            r#"{"kind": "AcDbCircle", "layer": null, "radius": 3.0, "color": {"aci": 1}}"#,
        )
        .unwrap();
        assert_eq!(object, DrawingObject::new("AcDbCircle"));
    }

    #[test]
    fn test_invalid_measure_error_names_field() {
        let err = serde_json::from_str::<DrawingObject>(
            r#"{"kind": "AcDbPolyline", "layer": "W", "length": "ten"}"#,
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("invalid `length`"), "{message}");
        assert!(message.contains("ten"), "{message}");
    }

    #[test]
    fn test_layer_must_be_scalar() {
        let err = serde_json::from_str::<DrawingObject>(
            r#"{"kind": "AcDbText", "layer": ["a"], "text": "x"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid `layer`"), "{err}");
    }

    #[test]
    fn test_missing_kind_and_duplicate_field() {
        let err = serde_json::from_str::<DrawingObject>(r#"{"layer": "0"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `kind`"), "{err}");

        let err = serde_json::from_str::<DrawingObject>(
            r#"{"kind": "AcDbHatch", "area": 1.0, "area": 2.0}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate field `area`"), "{err}");
    }
}
