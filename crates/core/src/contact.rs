//! Simulated contact form submission.
//!
//! Nothing leaves the browser: a submit flips the button into a "sending"
//! state, and after a fixed delay the host shows a success notification,
//! resets the form and restores the label.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Sending {
        original_label: String,
    },
}

#[derive(Debug, Default)]
pub struct ContactForm {
    state: FormState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.state, FormState::Sending { .. })
    }

    /// Starts a submission. Returns `false` while one is already in flight.
    pub fn submit(&mut self, current_label: &str, payload: &FormPayload) -> bool {
        if self.is_sending() {
            return false;
        }
        match payload.to_json() {
            Ok(json) => debug!(fields = payload.len(), %json, "contact form submitted"),
            Err(e) => debug!(error = %e, "contact form payload not serializable"),
        }
        self.state = FormState::Sending {
            original_label: current_label.to_string(),
        };
        true
    }

    /// Finishes the in-flight submission and returns the label to restore.
    pub fn complete(&mut self) -> Option<String> {
        match std::mem::take(&mut self.state) {
            FormState::Sending { original_label } => Some(original_label),
            FormState::Idle => None,
        }
    }
}

/// Form fields in name order. A repeated name keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormPayload(BTreeMap<String, String>);

impl FormPayload {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_then_complete_restores_label() {
        let mut form = ContactForm::new();
        let payload = FormPayload::from_pairs([("name", "Ana"), ("email", "ana@example.com")]);

        assert!(form.submit("ENVIAR MENSAGEM", &payload));
        assert!(form.is_sending());
        assert_eq!(
            form.state(),
            &FormState::Sending {
                original_label: "ENVIAR MENSAGEM".to_string()
            }
        );

        assert_eq!(form.complete().as_deref(), Some("ENVIAR MENSAGEM"));
        assert_eq!(form.state(), &FormState::Idle);
        assert_eq!(form.complete(), None);
    }

    #[test]
    fn double_submit_is_ignored() {
        let mut form = ContactForm::new();
        let payload = FormPayload::default();
        assert!(form.submit("Enviar", &payload));
        assert!(!form.submit("Enviando...", &payload));
        assert_eq!(form.complete().as_deref(), Some("Enviar"));
    }

    #[test]
    fn payload_keeps_last_value_and_sorts_keys() {
        let payload = FormPayload::from_pairs([
            ("service", "refining"),
            ("name", "Rui"),
            ("service", "storage"),
        ]);
        assert_eq!(payload.len(), 2);
        assert_eq!(payload.get("service"), Some("storage"));
        assert_eq!(
            payload.to_json().unwrap(),
            r#"{"name":"Rui","service":"storage"}"#
        );
    }
}
