use super::{FieldKind, FieldSpec, Resource, ResourceKind};
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Publisher {
    #[serde(rename = "_id")]
    pub id: String,
    pub nome: String,
    #[serde(default)]
    pub pais: String,
    #[serde(default, rename = "fundadoEm")]
    pub fundado_em: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
}

/// Reduces a stored founding date to `YYYY-MM-DD`. The API may hand back a full
/// RFC 3339 timestamp; anything unparseable is shown as-is.
fn founding_date(raw: &str) -> String {
    if NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok() {
        return raw.to_string();
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.date_naive().format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}

impl Resource for Publisher {
    const KIND: ResourceKind = ResourceKind::Publisher;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("nome", "Name", FieldKind::Text),
        FieldSpec::required("pais", "Country", FieldKind::Text),
        FieldSpec::required("fundadoEm", "Founded (YYYY-MM-DD)", FieldKind::Date),
        FieldSpec::optional("site", "Website", FieldKind::Text),
    ];
    const COLUMNS: &'static [&'static str] = &["Name", "Country", "Founded", "Website"];

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.nome
    }

    fn cells(&self) -> Vec<String> {
        let site = match self.site.as_deref() {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => "N/A".to_string(),
        };
        vec![
            self.nome.clone(),
            self.pais.clone(),
            self.field_value("fundadoEm"),
            site,
        ]
    }

    fn field_value(&self, key: &str) -> String {
        match key {
            "nome" => self.nome.clone(),
            "pais" => self.pais.clone(),
            "fundadoEm" => self
                .fundado_em
                .as_deref()
                .map(founding_date)
                .unwrap_or_default(),
            "site" => self.site.clone().unwrap_or_default(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_founding_date_normalization() {
        assert_eq!(founding_date("1990-05-01"), "1990-05-01");
        assert_eq!(founding_date("1990-05-01T00:00:00.000Z"), "1990-05-01");
        assert_eq!(founding_date("sometime"), "sometime");
    }

    #[test]
    fn test_row_without_site() {
        let json = r#"{"_id":"p1","nome":"Shueisha","pais":"Japan","fundadoEm":"1925-08-08T00:00:00.000Z"}"#;
        let p: Publisher = serde_json::from_str(json).unwrap();
        assert_eq!(p.cells(), vec!["Shueisha", "Japan", "1925-08-08", "N/A"]);
        assert_eq!(p.field_value("site"), "");
    }

    #[test]
    fn test_default_details_follow_fields() {
        let json = r#"{"_id":"p1","nome":"Kodansha","pais":"Japan","fundadoEm":"1909-11-01","site":"https://kodansha.co.jp"}"#;
        let p: Publisher = serde_json::from_str(json).unwrap();
        let details = p.details();
        assert_eq!(details.len(), Publisher::FIELDS.len());
        assert_eq!(details[3].1, "https://kodansha.co.jp");
    }
}
