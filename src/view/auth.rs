// src/view/auth.rs — Login form shown in the auth prompt overlay.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthField {
    #[default]
    Email,
    Password,
}

/// Form state; created empty each time the prompt opens and dropped with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub focus: AuthField,
    /// Optional hint line, e.g. demo credentials.
    pub hint: Option<String>,
    /// A login for this form is in flight.
    pub submitting: bool,
}

impl AuthForm {
    pub fn new(hint: Option<String>) -> Self {
        Self {
            hint,
            ..Self::default()
        }
    }

    fn focused(&mut self) -> &mut String {
        match self.focus {
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.focused().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused().pop();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            AuthField::Email => AuthField::Password,
            AuthField::Password => AuthField::Email,
        };
    }

    pub fn masked_password(&self) -> String {
        "\u{2022}".repeat(self.password.chars().count())
    }
}
