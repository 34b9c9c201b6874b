use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One course outline as served by `/outlines/`
///
/// Extra fields the backend includes (lecturer, lesson, course, evaluation)
/// are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineRecord {
    pub id: u64,
    pub name: String,
    /// Cover image URI
    #[serde(default)]
    pub image: Option<String>,
    pub credit: Credit,
    /// Rich text (HTML) overview
    #[serde(default)]
    pub overview: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
}

/// Credit value, numeric on current servers but accepted as text too
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Credit {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl fmt::Display for Credit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credit::Integer(value) => write!(f, "{}", value),
            Credit::Decimal(value) => write!(f, "{}", value),
            Credit::Text(value) => f.write_str(value),
        }
    }
}

/// Page-number pagination envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of records across all pages, when reported
    #[serde(default)]
    pub count: Option<u64>,
    /// Continuation indicator; `None` means this is the last page
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Whether the server reported a further page
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

pub type OutlinePage = Page<OutlineRecord>;

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SAMPLE_PAGE: &str = indoc! {r#"
        {
            "count": 5,
            "next": "http://10.17.64.200:8000/outlines/?page=2",
            "previous": null,
            "results": [
                {
                    "id": 7,
                    "name": "Data Structures",
                    "credit": 3,
                    "overview": "<p>Lists, trees &amp; graphs</p>",
                    "created_date": "2024-05-01T08:30:00.123456Z",
                    "image": "https://res.cloudinary.com/demo/image/upload/ds.png",
                    "lecturer": 2,
                    "course": [{"year": 2024}],
                    "lesson": 4,
                    "evaluation": []
                }
            ]
        }
    "#};

    #[test]
    fn test_decode_outline_page() {
        let page: OutlinePage = serde_json::from_str(SAMPLE_PAGE).unwrap();
        assert!(page.has_next());
        assert_eq!(page.count, Some(5));
        assert_eq!(page.results.len(), 1);

        let record = &page.results[0];
        assert_eq!(record.id, 7);
        assert_eq!(record.name, "Data Structures");
        assert_eq!(record.credit, Credit::Integer(3));
        assert!(record.created_date.is_some());
        assert_eq!(
            record.image.as_deref(),
            Some("https://res.cloudinary.com/demo/image/upload/ds.png")
        );
    }

    #[test]
    fn test_decode_last_page() {
        let page: OutlinePage = serde_json::from_str(r#"{"results": [], "next": null}"#).unwrap();
        assert!(!page.has_next());
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_credit_variants() {
        let integer: Credit = serde_json::from_str("4").unwrap();
        let decimal: Credit = serde_json::from_str("2.5").unwrap();
        let text: Credit = serde_json::from_str("\"3 (lab)\"").unwrap();

        assert_eq!(integer.to_string(), "4");
        assert_eq!(decimal.to_string(), "2.5");
        assert_eq!(text.to_string(), "3 (lab)");
    }

    #[test]
    fn test_missing_optional_fields() {
        let record: OutlineRecord =
            serde_json::from_str(r#"{"id": 1, "name": "Intro", "credit": 2}"#).unwrap();
        assert_eq!(record.image, None);
        assert_eq!(record.overview, "");
        assert_eq!(record.created_date, None);
    }
}
