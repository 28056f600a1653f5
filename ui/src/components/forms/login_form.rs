use dioxus::prelude::*;

use crate::components::inputs::{InputType, LabeledInput};
use crate::features::session::{validate_login, LoginForm};
use crate::{console_info, console_warn};

#[derive(Props, PartialEq, Clone)]
pub struct LoginFormComponentProps {
    /// Fired once both fields are filled and the form is submitted
    pub on_login: EventHandler<()>,
}

#[component]
pub fn LoginFormComponent(props: LoginFormComponentProps) -> Element {
    let mut form = use_signal(LoginForm::default);

    rsx! {
        div {
            class: "login-page",
            div {
                class: "login-card",
                div {
                    class: "login-header",
                    h1 { class: "login-brand", "HYNS" }
                    p { class: "login-tagline", "Smartphone Management Platform" }
                }
                h2 { class: "form-title", "Sign in to your account" }
                form {
                    class: "login-form",
                    onsubmit: move |event: FormEvent| {
                        event.prevent_default();
                        let current = form();
                        if validate_login(&current.email, &current.password) {
                            console_info!("sign in accepted");
                            props.on_login.call(());
                        } else {
                            console_warn!("sign in attempted with an empty field");
                        }
                    },
                    LabeledInput {
                        id: "email".to_string(),
                        label: "Email address".to_string(),
                        value: form().email,
                        placeholder: "Email address".to_string(),
                        input_type: InputType::Email,
                        on_change: move |value: String| form.with_mut(|f| f.email = value),
                    }
                    LabeledInput {
                        id: "password".to_string(),
                        label: "Password".to_string(),
                        value: form().password,
                        placeholder: "Password".to_string(),
                        input_type: InputType::Password,
                        on_change: move |value: String| form.with_mut(|f| f.password = value),
                    }
                    div {
                        class: "button-section",
                        button {
                            class: "primary-button",
                            r#type: "submit",
                            disabled: !form().is_complete(),
                            "Sign in"
                        }
                    }
                }
                p {
                    class: "login-footer",
                    "Don't have an account? "
                    a { class: "text-link", href: "#", "Create an account" }
                }
            }
        }
    }
}
