use super::{DetailsView, FormState, Intent, PendingDelete, Row, Screen, ScreenState};
use crate::api::{ApiCall, ApiError};
use crate::catalog::{choice_field, Choice, Resource, ResourceKind};
use chrono::Local;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;
use std::time::Duration;
use tracing::{info, warn};

/// Generic list/modal controller for one REST collection.
pub struct ResourceScreen<R: Resource> {
    state: ScreenState,
    _record: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceScreen<R> {
    pub fn new(notice_ttl: Duration) -> Self {
        Self {
            state: ScreenState::new(notice_ttl),
            _record: PhantomData,
        }
    }

    fn call(&mut self, intent: Intent, method: Method, id: Option<&str>) -> ApiCall {
        self.call_on(R::KIND, intent, method, id)
    }

    fn call_on(
        &mut self,
        kind: ResourceKind,
        intent: Intent,
        method: Method,
        id: Option<&str>,
    ) -> ApiCall {
        let mut segments = vec![kind.collection().to_string()];
        segments.extend(id.map(str::to_string));
        self.state.in_flight += 1;
        ApiCall::new(R::KIND, intent, method, segments)
    }

    fn choices_call(&mut self, selected: Option<String>) -> Option<ApiCall> {
        let (_, kind) = choice_field(R::FIELDS)?;
        Some(self.call_on(kind, Intent::Choices { selected }, Method::GET, None))
    }

    fn decode<T: DeserializeOwned>(result: Result<Value, ApiError>) -> Result<T, ApiError> {
        Ok(serde_json::from_value(result?)?)
    }

    fn fail(&mut self, what: &str, fallback: &str, err: &ApiError) {
        warn!(resource = R::KIND.collection(), error = %err, "{}", what);
        self.state.notify_error(err.user_message(fallback));
    }

    fn apply_list(&mut self, result: Result<Value, ApiError>) -> Option<ApiCall> {
        match Self::decode::<Vec<R>>(result) {
            Ok(records) => {
                self.state.rows = records
                    .iter()
                    .map(|r| Row {
                        id: r.id().to_string(),
                        label: r.display_name().to_string(),
                        cells: r.cells(),
                    })
                    .collect();
                if self.state.selected >= self.state.rows.len() {
                    self.state.select_last();
                }
                self.state.loaded_at = Some(Local::now());
                info!(
                    resource = R::KIND.collection(),
                    count = self.state.rows.len(),
                    "screen: list loaded"
                );
            }
            Err(err) => {
                self.state.rows.clear();
                self.state.selected = 0;
                let fallback = format!("Failed to load {}", R::KIND.plural());
                self.fail("screen: list failed", &fallback, &err);
            }
        }
        None
    }

    fn apply_edit(&mut self, id: String, result: Result<Value, ApiError>) -> Option<ApiCall> {
        match Self::decode::<R>(result) {
            Ok(record) => {
                let title = format!("Edit {}", R::KIND.noun());
                let form = FormState::filled(title, R::FIELDS, |key| record.field_value(key));
                let selected = choice_field(R::FIELDS)
                    .map(|(i, _)| form.fields[i].input.text.clone())
                    .filter(|id| !id.is_empty());
                self.state.details = None;
                self.state.form = Some(form);
                self.state.editing_id = Some(id);
                self.choices_call(selected)
            }
            Err(err) => {
                if self.state.editing_id.as_deref() == Some(id.as_str()) {
                    self.state.editing_id = None;
                }
                let fallback = format!("{} not found", capitalize(R::KIND.noun()));
                self.fail("screen: edit fetch failed", &fallback, &err);
                None
            }
        }
    }

    fn apply_details(&mut self, result: Result<Value, ApiError>) -> Option<ApiCall> {
        match Self::decode::<R>(result) {
            Ok(record) => {
                self.state.details = Some(DetailsView {
                    title: record.display_name().to_string(),
                    entries: record.details(),
                });
            }
            Err(err) => {
                let fallback = format!("{} not found", capitalize(R::KIND.noun()));
                self.fail("screen: details fetch failed", &fallback, &err);
            }
        }
        None
    }

    fn apply_choices(
        &mut self,
        selected: Option<String>,
        result: Result<Value, ApiError>,
    ) -> Option<ApiCall> {
        let (index, kind) = choice_field(R::FIELDS)?;
        match Self::decode::<Vec<Choice>>(result) {
            Ok(options) => {
                if let Some(form) = self.state.form.as_mut() {
                    form.set_choices(index, options, selected.as_deref());
                }
            }
            Err(err) => {
                if let Some(field) = self
                    .state
                    .form
                    .as_mut()
                    .and_then(|f| f.fields.get_mut(index))
                {
                    field.options_loaded = true;
                }
                let fallback = format!("Failed to load {}", kind.plural());
                self.fail("screen: choices fetch failed", &fallback, &err);
            }
        }
        None
    }

    fn apply_save(
        &mut self,
        editing: Option<String>,
        result: Result<Value, ApiError>,
    ) -> Option<ApiCall> {
        match result {
            Ok(_) => {
                self.state.form = None;
                self.state.editing_id = None;
                let verb = if editing.is_some() { "updated" } else { "added" };
                self.state
                    .notify_success(format!("{} {}", capitalize(R::KIND.noun()), verb));
                info!(resource = R::KIND.collection(), verb, "screen: record saved");
                Some(self.list())
            }
            Err(err) => {
                let action = if editing.is_some() { "update" } else { "create" };
                let fallback = format!("Failed to {} {}", action, R::KIND.noun());
                self.fail("screen: save failed", &fallback, &err);
                None
            }
        }
    }

    fn apply_delete(&mut self, id: String, result: Result<Value, ApiError>) -> Option<ApiCall> {
        match result {
            Ok(_) => {
                self.state
                    .notify_success(format!("{} deleted", capitalize(R::KIND.noun())));
                info!(resource = R::KIND.collection(), %id, "screen: record deleted");
                Some(self.list())
            }
            Err(err) => {
                let fallback = format!("Failed to delete {}", R::KIND.noun());
                self.fail("screen: delete failed", &fallback, &err);
                None
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl<R: Resource> Screen for ResourceScreen<R> {
    fn kind(&self) -> ResourceKind {
        R::KIND
    }

    fn columns(&self) -> &'static [&'static str] {
        R::COLUMNS
    }

    fn state(&self) -> &ScreenState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ScreenState {
        &mut self.state
    }

    fn list(&mut self) -> ApiCall {
        self.call(Intent::List, Method::GET, None)
    }

    fn open_create(&mut self) -> Option<ApiCall> {
        self.state.editing_id = None;
        self.state.details = None;
        let title = format!("Add {}", R::KIND.noun());
        self.state.form = Some(FormState::blank(title, R::FIELDS));
        self.choices_call(None)
    }

    fn open_edit(&mut self, id: &str) -> ApiCall {
        self.state.editing_id = Some(id.to_string());
        self.call(Intent::Edit { id: id.to_string() }, Method::GET, Some(id))
    }

    fn open_details(&mut self, id: &str) -> ApiCall {
        self.call(Intent::Details { id: id.to_string() }, Method::GET, Some(id))
    }

    fn save(&mut self) -> Option<ApiCall> {
        let editing = self.state.editing_id.clone();
        let form = self.state.form.as_mut()?;
        let body = match form.to_body(editing.is_some()) {
            Ok(body) => body,
            Err(err) => {
                form.error = Some(err.to_string());
                return None;
            }
        };
        form.error = None;

        let (method, id) = match editing.as_deref() {
            Some(id) => (Method::PUT, Some(id.to_string())),
            None => (Method::POST, None),
        };
        let call = self
            .call(Intent::Save { editing }, method, id.as_deref())
            .with_body(Value::Object(body));
        Some(call)
    }

    fn request_delete(&mut self, id: &str) {
        let name = self
            .state
            .rows
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.label.clone())
            .unwrap_or_else(|| id.to_string());
        let mut prompt = format!("Delete {} \"{}\"?", R::KIND.noun(), name);
        if let Some(warning) = R::delete_warning() {
            prompt.push(' ');
            prompt.push_str(warning);
        }
        self.state.confirm = Some(PendingDelete {
            id: id.to_string(),
            prompt,
        });
    }

    fn resolve_delete(&mut self, confirmed: bool) -> Option<ApiCall> {
        let pending = self.state.confirm.take()?;
        if !confirmed {
            return None;
        }
        Some(self.call(
            Intent::Delete {
                id: pending.id.clone(),
            },
            Method::DELETE,
            Some(&pending.id),
        ))
    }

    fn handle_response(&mut self, intent: Intent, result: Result<Value, ApiError>) -> Option<ApiCall> {
        self.state.in_flight = self.state.in_flight.saturating_sub(1);
        match intent {
            Intent::List => self.apply_list(result),
            Intent::Edit { id } => self.apply_edit(id, result),
            Intent::Details { .. } => self.apply_details(result),
            Intent::Choices { selected } => self.apply_choices(selected, result),
            Intent::Save { editing } => self.apply_save(editing, result),
            Intent::Delete { id } => self.apply_delete(id, result),
        }
    }
}
