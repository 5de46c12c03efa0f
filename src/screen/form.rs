//! Modal form state: one text input per field plus an optional choice selector.

use crate::catalog::{Choice, FieldKind, FieldSpec};
use chrono::NaiveDate;
use serde_json::{Map, Value};
use thiserror::Error;
use unicode_width::UnicodeWidthStr;

/// Constraint violations caught before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} must be a whole number")]
    NotInteger(&'static str),
    #[error("{0} must be a date like 2024-01-31")]
    NotDate(&'static str),
}

/// Single-line text editor with a byte-offset cursor kept on char boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub text: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Terminal columns occupied by the text left of the cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub spec: FieldSpec,
    /// For choice fields this holds the selected record id, empty for none.
    pub input: TextInput,
    pub options: Vec<Choice>,
    pub options_loaded: bool,
}

impl FormField {
    fn new(spec: FieldSpec, value: String) -> Self {
        Self {
            spec,
            input: TextInput::with_text(value),
            options: Vec::new(),
            options_loaded: false,
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.spec.kind, FieldKind::Choice(_))
    }

    /// Value as displayed; choice fields show the selected option's name.
    pub fn display_value(&self) -> String {
        if !self.is_choice() {
            return self.input.text.clone();
        }
        if self.input.text.is_empty() {
            return if self.options_loaded {
                "(none)".to_string()
            } else {
                "loading…".to_string()
            };
        }
        self.options
            .iter()
            .find(|c| c.id == self.input.text)
            .map(|c| c.nome.clone())
            .unwrap_or_else(|| self.input.text.clone())
    }

    /// Steps through `(none)` followed by every option, wrapping around.
    pub fn cycle_choice(&mut self, forward: bool) {
        if !self.is_choice() || self.options.is_empty() {
            return;
        }
        let slots = self.options.len() + 1;
        let current = self
            .options
            .iter()
            .position(|c| c.id == self.input.text)
            .map(|i| i + 1)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };
        self.input = match next {
            0 => TextInput::default(),
            i => TextInput::with_text(self.options[i - 1].id.clone()),
        };
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub title: String,
    pub fields: Vec<FormField>,
    pub focused: usize,
    /// Constraint violation from the last submit attempt.
    pub error: Option<String>,
}

impl FormState {
    pub fn blank(title: impl Into<String>, specs: &[FieldSpec]) -> Self {
        Self::filled(title, specs, |_| String::new())
    }

    pub fn filled(
        title: impl Into<String>,
        specs: &[FieldSpec],
        value_of: impl Fn(&str) -> String,
    ) -> Self {
        Self {
            title: title.into(),
            fields: specs
                .iter()
                .map(|spec| FormField::new(*spec, value_of(spec.key)))
                .collect(),
            focused: 0,
            error: None,
        }
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.spec.key == key)
            .map(|f| f.input.text.as_str())
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.fields.get(self.focused)
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.focused)
    }

    /// Routes a typed character to the focused text input. Choice fields ignore it.
    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.focused_field_mut().filter(|f| !f.is_choice()) {
            field.input.insert_char(c);
        }
    }

    /// Fills the option list of the choice field at `index`. `selected` wins over
    /// whatever was selected before.
    pub fn set_choices(&mut self, index: usize, options: Vec<Choice>, selected: Option<&str>) {
        if let Some(field) = self.fields.get_mut(index).filter(|f| f.is_choice()) {
            if let Some(id) = selected {
                field.input = TextInput::with_text(id);
            }
            field.options = options;
            field.options_loaded = true;
        }
    }

    /// Builds the JSON request body.
    ///
    /// Empty optional fields are omitted on create and sent blank on update, so that
    /// clearing a field in the editor clears it on the server.
    pub fn to_body(&self, updating: bool) -> Result<Map<String, Value>, FormError> {
        let mut body = Map::new();
        for field in &self.fields {
            let spec = field.spec;
            let raw = field.input.text.as_str();
            let trimmed = raw.trim();

            if trimmed.is_empty() {
                if spec.required {
                    return Err(FormError::Missing(spec.label));
                }
                if updating {
                    let blank = match spec.kind {
                        FieldKind::Text | FieldKind::LongText => Value::String(String::new()),
                        _ => Value::Null,
                    };
                    body.insert(spec.key.to_string(), blank);
                }
                continue;
            }

            let value = match spec.kind {
                FieldKind::Text | FieldKind::LongText => Value::String(raw.to_string()),
                FieldKind::Integer => trimmed
                    .parse::<i64>()
                    .map(Value::from)
                    .map_err(|_| FormError::NotInteger(spec.label))?,
                FieldKind::Date => {
                    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                        .map_err(|_| FormError::NotDate(spec.label))?;
                    Value::String(trimmed.to_string())
                }
                FieldKind::Choice(_) => Value::String(trimmed.to_string()),
            };
            body.insert(spec.key.to_string(), value);
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Anime, Publisher, Resource, Studio};
    use serde_json::json;

    fn type_into(form: &mut FormState, key: &str, text: &str) {
        let index = form.fields.iter().position(|f| f.spec.key == key).unwrap();
        form.focused = index;
        for c in text.chars() {
            form.insert_char(c);
        }
    }

    #[test]
    fn test_text_input_editing() {
        let mut input = TextInput::default();
        for c in "héllo".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "hélo");
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text, "élo");
        input.move_right();
        assert_eq!(input.cursor, 'é'.len_utf8());
        input.move_end();
        assert_eq!(input.cursor, input.text.len());
        input.clear();
        assert_eq!(input, TextInput::default());
    }

    #[test]
    fn test_cursor_column_counts_wide_chars() {
        let input = TextInput::with_text("進撃x");
        assert_eq!(input.cursor_column(), 5);
    }

    #[test]
    fn test_integer_fields_are_coerced() {
        let mut form = FormState::blank("Add Anime", Anime::FIELDS);
        type_into(&mut form, "titulo", "X");
        type_into(&mut form, "genero", "Action");
        type_into(&mut form, "episodios", "12");
        type_into(&mut form, "ano", " 2020 ");
        let body = form.to_body(false).unwrap();
        assert_eq!(
            Value::Object(body),
            json!({"titulo": "X", "genero": "Action", "episodios": 12, "ano": 2020})
        );
    }

    #[test]
    fn test_constraint_violations() {
        let mut form = FormState::blank("Add Anime", Anime::FIELDS);
        assert_eq!(form.to_body(false), Err(FormError::Missing("Title")));

        type_into(&mut form, "titulo", "X");
        type_into(&mut form, "genero", "Action");
        type_into(&mut form, "episodios", "twelve");
        type_into(&mut form, "ano", "2020");
        assert_eq!(form.to_body(false), Err(FormError::NotInteger("Episodes")));

        let mut form = FormState::blank("Add Publisher", Publisher::FIELDS);
        type_into(&mut form, "nome", "Shueisha");
        type_into(&mut form, "pais", "Japan");
        type_into(&mut form, "fundadoEm", "08/08/1925");
        assert_eq!(
            form.to_body(false),
            Err(FormError::NotDate("Founded (YYYY-MM-DD)"))
        );
    }

    #[test]
    fn test_empty_optional_fields_on_update() {
        let form = FormState::filled("Edit Studio", Studio::FIELDS, |key| match key {
            "nome" => "StudioA".into(),
            "fundacao" => "1985".into(),
            "pais" => "Japan".into(),
            "descricao" => "d".into(),
            _ => String::new(),
        });
        let create = form.to_body(false).unwrap();
        assert!(!create.contains_key("website"));
        let update = form.to_body(true).unwrap();
        assert_eq!(update["website"], json!(""));
    }

    #[test]
    fn test_choice_cycling_and_preselection() {
        let mut form = FormState::blank("Add Anime", Anime::FIELDS);
        let index = 5;
        assert_eq!(form.fields[index].display_value(), "loading…");

        let options = vec![
            Choice {
                id: "s1".into(),
                nome: "StudioA".into(),
            },
            Choice {
                id: "s2".into(),
                nome: "StudioB".into(),
            },
        ];
        form.set_choices(index, options.clone(), Some("s2"));
        assert_eq!(form.fields[index].display_value(), "StudioB");

        let field = &mut form.fields[index];
        field.cycle_choice(true);
        assert_eq!(field.display_value(), "(none)");
        field.cycle_choice(true);
        assert_eq!(field.input.text, "s1");
        field.cycle_choice(false);
        field.cycle_choice(false);
        assert_eq!(field.input.text, "s2");

        form.focused = index;
        form.insert_char('z');
        assert_eq!(form.value("estudio"), Some("s2"));
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = FormState::blank("Add Publisher", Publisher::FIELDS);
        form.focus_prev();
        assert_eq!(form.focused, Publisher::FIELDS.len() - 1);
        form.focus_next();
        assert_eq!(form.focused, 0);
    }
}
