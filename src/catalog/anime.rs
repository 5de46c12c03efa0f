use super::{Choice, FieldKind, FieldSpec, Resource, ResourceKind};
use serde::Deserialize;

/// Studio reference as the API returns it: a bare id on single-record fetches, an
/// embedded `{ _id, nome }` object on collection fetches.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StudioRef {
    Id(String),
    Embedded(Choice),
}

impl StudioRef {
    pub fn id(&self) -> &str {
        match self {
            StudioRef::Id(id) => id,
            StudioRef::Embedded(c) => &c.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            StudioRef::Id(_) => None,
            StudioRef::Embedded(c) => Some(&c.nome),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Anime {
    #[serde(rename = "_id")]
    pub id: String,
    pub titulo: String,
    #[serde(default)]
    pub genero: String,
    #[serde(default, alias = "numeroEpisodios")]
    pub episodios: Option<i64>,
    #[serde(default)]
    pub ano: Option<i64>,
    #[serde(default)]
    pub sinopse: Option<String>,
    #[serde(default)]
    pub estudio: Option<StudioRef>,
}

fn number(n: Option<i64>) -> String {
    n.map(|n| n.to_string()).unwrap_or_default()
}

impl Resource for Anime {
    const KIND: ResourceKind = ResourceKind::Anime;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("titulo", "Title", FieldKind::Text),
        FieldSpec::required("genero", "Genre", FieldKind::Text),
        FieldSpec::required("episodios", "Episodes", FieldKind::Integer),
        FieldSpec::required("ano", "Year", FieldKind::Integer),
        FieldSpec::optional("sinopse", "Synopsis", FieldKind::LongText),
        FieldSpec::optional("estudio", "Studio", FieldKind::Choice(ResourceKind::Studio)),
    ];
    const COLUMNS: &'static [&'static str] = &["Title", "Genre", "Episodes", "Year", "Studio"];

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.titulo
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.titulo.clone(),
            self.genero.clone(),
            number(self.episodios),
            number(self.ano),
            self.studio_name().to_string(),
        ]
    }

    fn field_value(&self, key: &str) -> String {
        match key {
            "titulo" => self.titulo.clone(),
            "genero" => self.genero.clone(),
            "episodios" => number(self.episodios),
            "ano" => number(self.ano),
            "sinopse" => self.sinopse.clone().unwrap_or_default(),
            "estudio" => self
                .estudio
                .as_ref()
                .map(|s| s.id().to_string())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Title", self.titulo.clone()),
            ("Genre", self.genero.clone()),
            ("Episodes", number(self.episodios)),
            ("Year", number(self.ano)),
            ("Synopsis", self.sinopse.clone().unwrap_or_default()),
            ("Studio", self.studio_name().to_string()),
        ]
    }
}

impl Anime {
    /// Embedded studio name, `N/A` when the studio is unset or not embedded.
    pub fn studio_name(&self) -> &str {
        self.estudio
            .as_ref()
            .and_then(StudioRef::name)
            .unwrap_or("N/A")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_row_with_embedded_studio() {
        let json = r#"[{"_id":"a1","titulo":"X","genero":"Action","episodios":12,"ano":2020,
            "estudio":{"_id":"s1","nome":"StudioA"}}]"#;
        let animes: Vec<Anime> = serde_json::from_str(json).unwrap();
        assert_eq!(animes.len(), 1);
        assert_eq!(animes[0].id(), "a1");
        assert_eq!(animes[0].cells(), vec!["X", "Action", "12", "2020", "StudioA"]);
    }

    #[test]
    fn test_single_fetch_with_bare_studio_id() {
        let json = r#"{"_id":"a1","titulo":"X","genero":"Action","episodios":12,"ano":2020,"estudio":"s1"}"#;
        let anime: Anime = serde_json::from_str(json).unwrap();
        assert_eq!(anime.field_value("estudio"), "s1");
        assert_eq!(anime.studio_name(), "N/A");
        assert_eq!(anime.field_value("sinopse"), "");
    }

    #[test]
    fn test_missing_studio_renders_na() {
        let json = r#"{"_id":"a2","titulo":"Y","genero":"Drama","episodios":1,"ano":1999,"estudio":null}"#;
        let anime: Anime = serde_json::from_str(json).unwrap();
        assert_eq!(anime.cells()[4], "N/A");
        assert_eq!(anime.field_value("estudio"), "");
    }

    #[test]
    fn test_episode_count_alias() {
        let json = r#"{"_id":"a3","titulo":"Z","genero":"Comedy","numeroEpisodios":24,"ano":2011}"#;
        let anime: Anime = serde_json::from_str(json).unwrap();
        assert_eq!(anime.field_value("episodios"), "24");
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let json = r#"{"titulo":"X","genero":"Action"}"#;
        assert!(serde_json::from_str::<Anime>(json).is_err());
    }
}
