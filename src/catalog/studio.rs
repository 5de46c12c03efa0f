use super::{FieldKind, FieldSpec, Resource, ResourceKind};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Studio {
    #[serde(rename = "_id")]
    pub id: String,
    pub nome: String,
    #[serde(default)]
    pub fundacao: Option<i64>,
    #[serde(default)]
    pub pais: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub website: Option<String>,
}

impl Resource for Studio {
    const KIND: ResourceKind = ResourceKind::Studio;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("nome", "Name", FieldKind::Text),
        FieldSpec::required("fundacao", "Founded (year)", FieldKind::Integer),
        FieldSpec::required("pais", "Country", FieldKind::Text),
        FieldSpec::required("descricao", "Description", FieldKind::LongText),
        FieldSpec::optional("website", "Website", FieldKind::Text),
    ];
    const COLUMNS: &'static [&'static str] = &["Name", "Founded", "Country"];

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.nome
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.nome.clone(),
            self.field_value("fundacao"),
            self.pais.clone(),
        ]
    }

    fn field_value(&self, key: &str) -> String {
        match key {
            "nome" => self.nome.clone(),
            "fundacao" => self.fundacao.map(|y| y.to_string()).unwrap_or_default(),
            "pais" => self.pais.clone(),
            "descricao" => self.descricao.clone(),
            "website" => self.website.clone().unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![
            ("Name", self.nome.clone()),
            ("Founded", self.field_value("fundacao")),
            ("Country", self.pais.clone()),
            ("Description", self.descricao.clone()),
        ];
        if let Some(site) = self.website.as_deref().filter(|s| !s.is_empty()) {
            entries.push(("Website", site.to_string()));
        }
        entries
    }

    fn delete_warning() -> Option<&'static str> {
        Some("Anime associated with this studio may be removed as well.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_website_falls_back_to_empty() {
        let json = r#"{"_id":"s1","nome":"StudioA","fundacao":1985,"pais":"Japan","descricao":"d"}"#;
        let studio: Studio = serde_json::from_str(json).unwrap();
        assert_eq!(studio.field_value("website"), "");
        assert_eq!(studio.cells(), vec!["StudioA", "1985", "Japan"]);
    }

    #[test]
    fn test_details_omit_absent_website() {
        let json = r#"{"_id":"s1","nome":"StudioA","fundacao":1985,"pais":"Japan","descricao":"d"}"#;
        let studio: Studio = serde_json::from_str(json).unwrap();
        assert!(studio.details().iter().all(|(label, _)| *label != "Website"));

        let json = r#"{"_id":"s1","nome":"StudioA","fundacao":1985,"pais":"Japan","descricao":"d",
            "website":"https://example.jp"}"#;
        let studio: Studio = serde_json::from_str(json).unwrap();
        assert_eq!(
            studio.details().last(),
            Some(&("Website", "https://example.jp".to_string()))
        );
    }
}
