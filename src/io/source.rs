//! Drawing sources: where model-space objects come from.
//!
//! The aggregator only needs a finite sequence of [`DrawingObject`]s. A
//! drawing file is either a document with named layouts, of which only the
//! model-space layout is read:
//!
//! ```json
//! { "layouts": [ { "name": "Model", "objects": [ { "kind": "AcDbHatch", "layer": "Fill", "area": 4.0 } ] } ] }
//! ```
//!
//! or a bare array of objects, taken to be model space as a whole.

use crate::core::{DrawingObject, Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Supplies the objects of one layout of a drawing.
pub trait DrawingSource {
    fn model_space(&self, layout: &str) -> Result<Vec<DrawingObject>>;
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layout {
    pub name: String,
    pub objects: Vec<DrawingObject>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DrawingDocument {
    pub layouts: Vec<Layout>,
}

impl DrawingDocument {
    pub fn layout_names(&self) -> Vec<String> {
        self.layouts.iter().map(|layout| layout.name.clone()).collect()
    }
}

/// Parsed contents of a drawing file.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Drawing {
    Objects(Vec<DrawingObject>),
    Document(DrawingDocument),
}

impl Drawing {
    /// Objects of the named layout. A bare object list has no layouts and is
    /// returned whole.
    pub fn into_model_space(self, layout: &str) -> Result<Vec<DrawingObject>> {
        match self {
            Drawing::Objects(objects) => Ok(objects),
            Drawing::Document(mut document) => {
                match document.layouts.iter().position(|l| l.name == layout) {
                    Some(index) => Ok(document.layouts.swap_remove(index).objects),
                    None => Err(Error::ModelSpaceNotFound {
                        layout: layout.to_string(),
                        available: document.layout_names(),
                    }),
                }
            }
        }
    }
}

impl DrawingSource for Drawing {
    fn model_space(&self, layout: &str) -> Result<Vec<DrawingObject>> {
        self.clone().into_model_space(layout)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    /// `.yaml`/`.yml` are YAML; everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

// Layouts with their objects still undecoded, so that a bad object can be
// reported with its position.
#[derive(Deserialize)]
struct RawDocument<V> {
    #[serde(default = "Vec::new")]
    layouts: Vec<RawLayout<V>>,
}

#[derive(Deserialize)]
struct RawLayout<V> {
    name: String,
    #[serde(default = "Vec::new")]
    objects: Vec<V>,
}

const EXPECTED_SHAPE: &str = "expected a list of objects or a mapping with `layouts`";

/// Parse a drawing: a top-level sequence is a bare object list, a top-level
/// mapping is a document with layouts.
pub fn parse_drawing(contents: &str, format: SourceFormat) -> Result<Drawing> {
    match format {
        SourceFormat::Json => match serde_json::from_str::<serde_json::Value>(contents)? {
            serde_json::Value::Array(items) => decode_objects(items, None).map(Drawing::Objects),
            value @ serde_json::Value::Object(_) => decode_document(value),
            _ => Err(Error::invalid_drawing("drawing", EXPECTED_SHAPE)),
        },
        SourceFormat::Yaml => match serde_yaml::from_str::<serde_yaml::Value>(contents)? {
            serde_yaml::Value::Sequence(items) => decode_objects(items, None).map(Drawing::Objects),
            value @ serde_yaml::Value::Mapping(_) => decode_document(value),
            _ => Err(Error::invalid_drawing("drawing", EXPECTED_SHAPE)),
        },
    }
}

fn decode_document<'de, V>(value: V) -> Result<Drawing>
where
    V: Deserializer<'de> + Deserialize<'de>,
{
    let raw = RawDocument::<V>::deserialize(value)
        .map_err(|e| Error::invalid_drawing("drawing", e.to_string()))?;

    let layouts = raw
        .layouts
        .into_iter()
        .map(|layout| {
            let objects = decode_objects(layout.objects, Some(&layout.name))?;
            Ok(Layout {
                name: layout.name,
                objects,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Drawing::Document(DrawingDocument { layouts }))
}

fn decode_objects<'de, V>(items: Vec<V>, layout: Option<&str>) -> Result<Vec<DrawingObject>>
where
    V: Deserializer<'de>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            DrawingObject::deserialize(item).map_err(|e| {
                let location = match layout {
                    Some(name) => format!("layout '{name}', object #{index}"),
                    None => format!("object #{index}"),
                };
                Error::invalid_drawing(location, e.to_string())
            })
        })
        .collect()
}

/// Drawing stored as a JSON or YAML file.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<Drawing> {
        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| Error::drawing_source(&self.path, e.to_string()))?;
        parse_drawing(&contents, SourceFormat::from_path(&self.path))
            .map_err(|e| Error::drawing_source(&self.path, e.to_string()))
    }
}

impl DrawingSource for FileSource {
    fn model_space(&self, layout: &str) -> Result<Vec<DrawingObject>> {
        let objects = self.read()?.into_model_space(layout)?;
        log::info!(
            "Read {} objects from layout '{}' of {}",
            objects.len(),
            layout,
            self.path.display()
        );
        Ok(objects)
    }
}
