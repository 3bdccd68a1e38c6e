//! Captions and column headers attached to each result set.

use crate::core::{Category, ColumnHeaders};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct CategoryLabels {
    caption: &'static str,
    key_header: &'static str,
    value_header: &'static str,
}

/// Label set for all four categories in one locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labels {
    locale: Locale,
    entries: [CategoryLabels; 4],
}

impl Default for Labels {
    fn default() -> Self {
        Self::for_locale(Locale::En)
    }
}

impl Labels {
    pub fn for_locale(locale: Locale) -> Self {
        let entries = match locale {
            Locale::En => [
                CategoryLabels {
                    caption: "Count of occurrences of each block type",
                    key_header: "Block type",
                    value_header: "Count",
                },
                CategoryLabels {
                    caption: "Total length of all lines, sorted by layer",
                    key_header: "Layer",
                    value_header: "Length",
                },
                CategoryLabels {
                    caption: "Total character count of all single-line text, sorted by layer",
                    key_header: "Layer",
                    value_header: "Count",
                },
                CategoryLabels {
                    caption: "Total area of all hatching, sorted by layer",
                    key_header: "Layer",
                    value_header: "Area",
                },
            ],
            Locale::Ru => [
                CategoryLabels {
                    caption: "Количество вхождений блока каждого типа",
                    key_header: "Тип блока",
                    value_header: "Количество",
                },
                CategoryLabels {
                    caption: "Суммарная длина всех линий с сортировкой по слоям",
                    key_header: "Слой",
                    value_header: "Длина",
                },
                CategoryLabels {
                    caption: "Суммарное количество текстовых символов во всех Однострочных текстах с сортировкой по слоям",
                    key_header: "Слой",
                    value_header: "Количество",
                },
                CategoryLabels {
                    caption: "Суммарная площадь всей штриховки с сортировкой по слоям",
                    key_header: "Слой",
                    value_header: "Площадь",
                },
            ],
        };
        Self { locale, entries }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn caption(&self, category: Category) -> &'static str {
        self.entries[category.index()].caption
    }

    pub fn headers(&self, category: Category) -> ColumnHeaders {
        let entry = &self.entries[category.index()];
        ColumnHeaders {
            key: entry.key_header.to_string(),
            value: entry.value_header.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_captions() {
        let labels = Labels::default();
        assert_eq!(
            labels.caption(Category::BlockReference),
            "Count of occurrences of each block type"
        );
        assert_eq!(
            labels.caption(Category::Hatch),
            "Total area of all hatching, sorted by layer"
        );
        assert_eq!(labels.headers(Category::Polyline).value, "Length");
    }

    #[test]
    fn test_russian_headers() {
        let labels = Labels::for_locale(Locale::Ru);
        let headers = labels.headers(Category::BlockReference);
        assert_eq!(headers.key, "Тип блока");
        assert_eq!(headers.value, "Количество");
        assert_eq!(labels.headers(Category::Hatch).value, "Площадь");
    }

    #[test]
    fn test_locale_reads_lowercase_names() {
        let locale: Locale = serde_json::from_str("\"ru\"").unwrap();
        assert_eq!(locale, Locale::Ru);
        assert!(serde_json::from_str::<Locale>("\"de\"").is_err());
    }
}
