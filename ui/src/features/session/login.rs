/// Credentials typed into the login screen. They are never checked
/// against anything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn is_complete(&self) -> bool {
        validate_login(&self.email, &self.password)
    }
}

/// Any non-empty email and password pair is accepted.
pub fn validate_login(email: &str, password: &str) -> bool {
    !email.is_empty() && !password.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_login() {
        assert!(validate_login("a@b.com", "x"));
        assert!(!validate_login("", "x"));
        assert!(!validate_login("a@b.com", ""));
        assert!(!validate_login("", ""));
    }

    #[test]
    fn test_login_form_completion() {
        let mut form = LoginForm::default();
        assert!(!form.is_complete());
        form.email = "merchant@hyns.example".to_string();
        assert!(!form.is_complete());
        form.password = "secret".to_string();
        assert!(form.is_complete());
    }
}
