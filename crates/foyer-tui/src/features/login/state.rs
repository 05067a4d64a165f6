//! Login form state.

/// Which form field has keyboard focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Username,
    Password,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Username => Field::Password,
            Field::Password => Field::Username,
        }
    }
}

/// The two text fields of the login form plus focus.
///
/// Fields survive a submission: the user can correct a typo without
/// retyping everything, matching ordinary login-form behavior.
#[derive(Debug, Clone, Default)]
pub struct LoginFormState {
    pub username: String,
    pub password: String,
    pub focus: Field,
}

impl LoginFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The field currently holding focus.
    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
        }
    }
}
