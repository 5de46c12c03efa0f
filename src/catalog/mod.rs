//! Catalog record types and the per-resource description the screens are built from.
//!
//! A [`Resource`] tells the generic screen controller everything it needs to know about
//! one REST collection: where it lives, how its table looks, which form fields it has
//! and how a fetched record maps back onto those fields.

pub mod anime;
pub mod publisher;
pub mod studio;

pub use anime::Anime;
pub use publisher::Publisher;
pub use studio::Studio;

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// The three catalog collections exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Anime,
    Studio,
    Publisher,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Anime,
        ResourceKind::Studio,
        ResourceKind::Publisher,
    ];

    /// Collection path segment under the API base URL.
    pub fn collection(self) -> &'static str {
        match self {
            ResourceKind::Anime => "animes",
            ResourceKind::Studio => "estudios",
            ResourceKind::Publisher => "editoras",
        }
    }

    /// Capitalized plural, used for tab titles.
    pub fn title(self) -> &'static str {
        match self {
            ResourceKind::Anime => "Anime",
            ResourceKind::Studio => "Studios",
            ResourceKind::Publisher => "Publishers",
        }
    }

    /// Lowercase singular, used inside messages.
    pub fn noun(self) -> &'static str {
        match self {
            ResourceKind::Anime => "anime",
            ResourceKind::Studio => "studio",
            ResourceKind::Publisher => "publisher",
        }
    }

    /// Lowercase plural, used inside messages.
    pub fn plural(self) -> &'static str {
        match self {
            ResourceKind::Anime => "anime",
            ResourceKind::Studio => "studios",
            ResourceKind::Publisher => "publishers",
        }
    }
}

/// How a form field is edited and how its text is encoded into the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, sent as a JSON string.
    Text,
    /// Free text that may run long (synopsis, description).
    LongText,
    /// Whole number typed as text, sent as a JSON integer.
    Integer,
    /// Calendar date typed as `YYYY-MM-DD`, sent as a JSON string.
    Date,
    /// Reference to a record of another collection, picked from a fetched option list.
    Choice(ResourceKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// JSON key in the request/response body.
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: true,
        }
    }

    pub const fn optional(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
        }
    }
}

/// One entry of a dependent selector (e.g. a studio offered in the anime form).
///
/// Every collection names its records with `nome`, except anime which uses `titulo`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Choice {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(alias = "titulo")]
    pub nome: String,
}

/// A REST collection the generic screen controller can manage.
pub trait Resource: DeserializeOwned + Send + 'static {
    const KIND: ResourceKind;
    /// Form fields in display order.
    const FIELDS: &'static [FieldSpec];
    /// Table column headers; `cells()` yields one value per column.
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> &str;

    /// Human-readable name, used in confirmation prompts.
    fn display_name(&self) -> &str;

    fn cells(&self) -> Vec<String>;

    /// Current value of the form field `key`, empty when absent.
    fn field_value(&self, key: &str) -> String;

    /// Label/value pairs for the read-only details view.
    fn details(&self) -> Vec<(&'static str, String)> {
        Self::FIELDS
            .iter()
            .map(|f| (f.label, self.field_value(f.key)))
            .collect()
    }

    /// Extra sentence appended to the delete confirmation prompt.
    fn delete_warning() -> Option<&'static str> {
        None
    }
}

/// The dependent selector of a field list, if any.
pub fn choice_field(fields: &[FieldSpec]) -> Option<(usize, ResourceKind)> {
    fields.iter().enumerate().find_map(|(i, f)| match f.kind {
        FieldKind::Choice(kind) => Some((i, kind)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_paths() {
        assert_eq!(ResourceKind::Anime.collection(), "animes");
        assert_eq!(ResourceKind::Studio.collection(), "estudios");
        assert_eq!(ResourceKind::Publisher.collection(), "editoras");
    }

    #[test]
    fn test_choice_field_lookup() {
        assert_eq!(
            choice_field(Anime::FIELDS),
            Some((5, ResourceKind::Studio))
        );
        assert_eq!(choice_field(Studio::FIELDS), None);
        assert_eq!(choice_field(Publisher::FIELDS), None);
    }

    #[test]
    fn test_choice_accepts_title_alias() {
        let c: Choice = serde_json::from_str(r#"{"_id":"a1","titulo":"X"}"#).unwrap();
        assert_eq!(c.nome, "X");
        let c: Choice = serde_json::from_str(r#"{"_id":"s1","nome":"StudioA","pais":"JP"}"#).unwrap();
        assert_eq!(c.id, "s1");
    }
}
