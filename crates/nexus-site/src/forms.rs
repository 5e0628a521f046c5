//! Form shell helpers.
//!
//! The login and signup forms hold their field values in component-local
//! signals and perform no real submission; these helpers cover the pieces of
//! that state handling worth testing on their own.

/// Maps a password-visibility flag to the HTML input type.
pub const fn password_input_type(visible: bool) -> &'static str {
    if visible {
        "text"
    } else {
        "password"
    }
}

/// Which signup tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountType {
    #[default]
    Work,
    Personal,
}

impl AccountType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Work => "Work Email",
            Self::Personal => "Personal Use",
        }
    }

    /// The value logged on submit.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_field_is_masked_by_default() {
        assert_eq!(password_input_type(false), "password");
        assert_eq!(password_input_type(true), "text");
    }

    #[test]
    fn even_toggle_counts_restore_masking() {
        let mut visible = false;
        let original = password_input_type(visible);
        visible = !visible;
        visible = !visible;
        assert_eq!(password_input_type(visible), original);
    }

    #[test]
    fn account_type_keys() {
        assert_eq!(AccountType::default(), AccountType::Work);
        assert_eq!(AccountType::Work.key(), "work");
        assert_eq!(AccountType::Personal.key(), "personal");
    }
}
