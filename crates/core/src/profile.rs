//! Profile popover content for the signed-in user.

use serde::Serialize;

use crate::types::User;

/// Avatar shown when the user has none.
pub const PLACEHOLDER_AVATAR: &str = "/placeholder.svg";

/// Prompt shown when nobody is signed in.
pub const SIGNED_OUT_PROMPT: &str = "Please log in to see profile details.";

/// What the profile popover displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfileView {
    SignedOut { prompt: &'static str },
    Card(ProfileCard),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCard {
    pub name: String,
    pub avatar_url: String,
    /// First character of the name, used when the image fails to load.
    pub avatar_fallback: String,
    pub email: String,
    /// Present only when the user has a non-empty phone number.
    pub phone: Option<String>,
}

impl ProfileView {
    /// Build the view from whatever the auth context currently holds.
    #[must_use]
    pub fn for_user(user: Option<&User>) -> Self {
        let Some(user) = user else {
            return Self::SignedOut {
                prompt: SIGNED_OUT_PROMPT,
            };
        };

        Self::Card(ProfileCard {
            name: user.name.clone(),
            avatar_url: user
                .avatar
                .as_deref()
                .filter(|url| !url.is_empty())
                .unwrap_or(PLACEHOLDER_AVATAR)
                .to_owned(),
            avatar_fallback: user.name.chars().next().map(String::from).unwrap_or_default(),
            email: user.email.to_string(),
            phone: user.phone.clone().filter(|phone| !phone.is_empty()),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{Email, UserRole};

    fn user() -> User {
        User {
            id: None,
            email: Email::parse("renee@example.com").unwrap(),
            username: None,
            role: UserRole::Sales,
            name: "Renée".to_owned(),
            avatar: None,
            phone: None,
        }
    }

    #[test]
    fn test_signed_out() {
        assert_eq!(
            ProfileView::for_user(None),
            ProfileView::SignedOut {
                prompt: SIGNED_OUT_PROMPT
            }
        );
    }

    #[test]
    fn test_card_defaults() {
        let ProfileView::Card(card) = ProfileView::for_user(Some(&user())) else {
            panic!("expected a profile card");
        };
        assert_eq!(card.avatar_url, PLACEHOLDER_AVATAR);
        assert_eq!(card.avatar_fallback, "R");
        assert_eq!(card.email, "renee@example.com");
        assert_eq!(card.phone, None);
    }

    #[test]
    fn test_card_with_avatar_and_phone() {
        let mut user = user();
        user.avatar = Some("https://cdn.example.com/r.png".to_owned());
        user.phone = Some("+1 555 0100".to_owned());

        let ProfileView::Card(card) = ProfileView::for_user(Some(&user)) else {
            panic!("expected a profile card");
        };
        assert_eq!(card.avatar_url, "https://cdn.example.com/r.png");
        assert_eq!(card.phone.as_deref(), Some("+1 555 0100"));
    }

    #[test]
    fn test_empty_phone_hidden() {
        let mut user = user();
        user.phone = Some(String::new());
        user.avatar = Some(String::new());

        let ProfileView::Card(card) = ProfileView::for_user(Some(&user)) else {
            panic!("expected a profile card");
        };
        assert_eq!(card.phone, None);
        assert_eq!(card.avatar_url, PLACEHOLDER_AVATAR);
    }
}
