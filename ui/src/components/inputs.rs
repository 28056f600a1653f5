//! Form controls

use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Password,
    Email,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct LabeledInputProps {
    pub id: String,
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    #[props(default)]
    pub input_class: String,
    #[props(default)]
    pub disabled: bool,
    /// Upper bound on characters the browser lets through
    pub max_length: Option<usize>,
    /// Helper text under the field
    pub hint: Option<String>,
    /// Keystroke filter; the field is rewritten when it drops characters
    pub filter: Option<InputFilter>,
    pub on_change: EventHandler<String>,
}

pub type InputFilter = fn(&str) -> String;

/// Result of running one edit through an `InputFilter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredEdit {
    pub value: String,
    /// The filter changed the edit, so the DOM still shows the raw text.
    pub rejected: bool,
}

pub fn filter_edit(raw: &str, filter: Option<InputFilter>) -> FilteredEdit {
    match filter {
        Some(filter) => {
            let value = filter(raw);
            let rejected = value != raw;
            FilteredEdit { value, rejected }
        }
        None => FilteredEdit {
            value: raw.to_string(),
            rejected: false,
        },
    }
}

/// Script that writes `value` back into the input with the given id.
///
/// Needed because an edit that filters down to the current value produces
/// no attribute diff, so the renderer never touches the field.
pub fn restore_field_script(id: &str, value: &str) -> String {
    format!(
        "const field = document.getElementById({}); if (field) {{ field.value = {}; }}",
        serde_json::Value::from(id),
        serde_json::Value::from(value)
    )
}

/// Label, input and optional hint stacked as one field.
#[component]
pub fn LabeledInput(props: LabeledInputProps) -> Element {
    let max_length = props.max_length.map(|max| max.to_string());
    let field_id = props.id.clone();
    let filter = props.filter;

    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                r#for: "{props.id}",
                "{props.label}"
            }
            input {
                id: "{props.id}",
                class: "input-field {props.input_class}",
                r#type: "{props.input_type.as_str()}",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                maxlength: max_length,
                disabled: props.disabled,
                oninput: move |event| {
                    let edit = filter_edit(&event.value(), filter);
                    if edit.rejected {
                        let _ = document::eval(&restore_field_script(&field_id, &edit.value));
                    }
                    props.on_change.call(edit.value);
                }
            }
            if let Some(hint) = &props.hint {
                p { class: "input-hint", "{hint}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::verification::sanitize_imei_input;

    #[test]
    fn test_rejected_keystroke_is_flagged() {
        let edit = filter_edit("3a", Some(sanitize_imei_input));
        assert_eq!(edit.value, "3");
        assert!(edit.rejected);
    }

    #[test]
    fn test_accepted_keystroke_passes_through() {
        let edit = filter_edit("35", Some(sanitize_imei_input));
        assert_eq!(edit.value, "35");
        assert!(!edit.rejected);

        let edit = filter_edit("free text", None);
        assert_eq!(edit.value, "free text");
        assert!(!edit.rejected);
    }

    #[test]
    fn test_sixteenth_digit_is_rejected() {
        let edit = filter_edit("3567890123456789", Some(sanitize_imei_input));
        assert_eq!(edit.value, "356789012345678");
        assert!(edit.rejected);
    }

    #[test]
    fn test_restore_script_quotes_values() {
        assert_eq!(
            restore_field_script("imei", "3"),
            r#"const field = document.getElementById("imei"); if (field) { field.value = "3"; }"#
        );
        let script = restore_field_script("note", "say \"hi\"");
        assert!(script.contains(r#"field.value = "say \"hi\"";"#));
    }
}
