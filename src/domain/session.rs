/// Label used when the user signed in without a name
pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// Sign-in flag and the user's display name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub signed_in: bool,
    pub user_name: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign in with any name, including an empty one
    pub fn sign_in(&mut self, name: impl Into<String>) {
        self.user_name = name.into();
        self.signed_in = true;
    }

    /// Sign out. The name is kept.
    pub fn sign_out(&mut self) {
        self.signed_in = false;
    }

    pub fn display_name(&self) -> &str {
        if self.user_name.is_empty() {
            DEFAULT_DISPLAY_NAME
        } else {
            &self.user_name
        }
    }

    /// Home screen greeting
    pub fn greeting(&self) -> String {
        format!("Hello, {}", self.display_name())
    }
}
