//! In-memory sign-in gate. Not a security boundary: any non-empty name is
//! accepted and nothing survives the process.

/// A signed-in user name. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    pub fn parse(name: &str) -> Option<Self> {
        if name.is_empty() {
            None
        } else {
            Some(Self(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<Username>,
}

impl Session {
    pub const fn user(&self) -> Option<&Username> {
        self.user.as_ref()
    }

    pub const fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn sign_in(&mut self, user: Username) {
        log::info!("signed in as {user}");
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            log::info!("{user} signed out");
        }
    }
}

/// The one-field sign-in form shown in place of gated content.
#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub input: String,
    pub rejected: bool,
}

impl SignInForm {
    pub fn push(&mut self, ch: char) {
        self.input.push(ch);
        self.rejected = false;
    }

    pub fn pop(&mut self) {
        self.input.pop();
    }

    /// Validates the required field. On success the form is cleared and the
    /// name is handed back for [`Session::sign_in`]; an empty field is
    /// flagged and yields nothing.
    pub fn submit(&mut self) -> Option<Username> {
        match Username::parse(&self.input) {
            Some(user) => {
                self.input.clear();
                self.rejected = false;
                Some(user)
            }
            None => {
                self.rejected = true;
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_then_out() {
        let mut session = Session::default();
        assert!(!session.is_signed_in());

        session.sign_in(Username::parse("Alice").expect("non-empty name"));
        assert_eq!(session.user().map(Username::as_str), Some("Alice"));

        session.sign_out();
        assert_eq!(session.user(), None);
    }

    #[test]
    fn empty_name_is_not_a_user() {
        assert!(Username::parse("").is_none());
        assert_eq!(Username::parse(" ").map(|u| u.to_string()), Some(" ".to_string()));
    }

    #[test]
    fn empty_form_is_rejected_and_keeps_nothing() {
        let mut form = SignInForm::default();
        assert_eq!(form.submit(), None);
        assert!(form.rejected);

        for ch in "Bob".chars() {
            form.push(ch);
        }
        assert!(!form.rejected);

        assert_eq!(form.submit().map(|u| u.to_string()), Some("Bob".to_string()));
        assert!(form.input.is_empty());
    }
}
