use crate::dblp::Hit;

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const UNKNOWN_URL: &str = "Unknown URL";

/// A flattened search hit: title, comma-joined authors and link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperRecord {
    pub title: String,
    pub authors: String,
    pub link: String,
}

impl PaperRecord {
    /// Extract a record from one hit, substituting placeholders for missing fields.
    pub fn from_hit(hit: &Hit) -> Self {
        let Some(info) = hit.info.as_ref() else {
            return Self::placeholder();
        };

        let title = info
            .title
            .clone()
            .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

        let names: Vec<&str> = info
            .authors
            .iter()
            .flat_map(|authors| authors.author.iter())
            .map(|author| author.text.as_deref().unwrap_or(UNKNOWN_AUTHOR))
            .collect();
        let authors = if names.is_empty() {
            UNKNOWN_AUTHOR.to_string()
        } else {
            names.join(", ")
        };

        let link = if info.ee.is_empty() {
            UNKNOWN_URL.to_string()
        } else {
            info.ee.join(", ")
        };

        Self {
            title,
            authors,
            link,
        }
    }

    fn placeholder() -> Self {
        Self {
            title: UNKNOWN_TITLE.to_string(),
            authors: UNKNOWN_AUTHOR.to_string(),
            link: UNKNOWN_URL.to_string(),
        }
    }
}
