//! The card composer.

use std::collections::BTreeSet;

use auth::AdminPolicy;
use entities::{CustomLink, LinkDescriptor, LinkType};

use crate::{Catalog, ComposeResult, training_card_for};

/// Id of the weather card.
pub const WEATHER_CARD_ID: &str = "weather";

/// Prefix of cards built from custom links.
pub const CUSTOM_CARD_PREFIX: &str = "custom-";

static NO_LINKS: BTreeSet<String> = BTreeSet::new();

/// Everything the composer looks at.
#[derive(Debug, Clone, Copy)]
pub struct ComposeInput<'a> {
    pub is_authenticated: bool,
    pub user_email: Option<&'a str>,
    pub enabled_links: &'a BTreeSet<String>,
    pub has_set_preferences: bool,
    pub custom_links: &'a [CustomLink],
    /// Stored activity for the current weekday, if the week is known.
    pub todays_training: Option<&'a str>,
    pub city: Option<&'a str>,
}

impl<'a> ComposeInput<'a> {
    /// Input for a visitor without a session.
    pub fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            user_email: None,
            enabled_links: &NO_LINKS,
            has_set_preferences: false,
            custom_links: &[],
            todays_training: None,
            city: None,
        }
    }

    /// Input for a signed-in user with nothing loaded yet.
    pub fn authenticated(user_email: &'a str) -> Self {
        Self {
            is_authenticated: true,
            user_email: Some(user_email),
            ..Self::anonymous()
        }
    }
}

/// Composes dashboard cards from a catalog under an admin policy.
#[derive(Debug, Clone, Copy)]
pub struct LinkComposer<'a> {
    catalog: &'a Catalog,
    admin_policy: &'a AdminPolicy,
}

impl<'a> LinkComposer<'a> {
    /// Creates a composer.
    pub fn new(catalog: &'a Catalog, admin_policy: &'a AdminPolicy) -> Self {
        Self {
            catalog,
            admin_policy,
        }
    }

    /// Builds the ordered card list.
    ///
    /// Order: catalog links, the emails shortcut, custom links, today's
    /// training card, the weather card. Missing optional inputs only shrink
    /// the list; an unknown training activity is an error.
    pub fn compose(&self, input: &ComposeInput<'_>) -> ComposeResult<Vec<LinkDescriptor>> {
        let mut cards: Vec<LinkDescriptor> = if input.has_set_preferences {
            self.catalog
                .available_links()
                .iter()
                .filter(|link| input.enabled_links.contains(&link.id))
                .cloned()
                .collect()
        } else {
            self.catalog.available_links().to_vec()
        };

        if input.is_authenticated && self.admin_policy.is_admin(input.user_email) {
            cards.push(self.catalog.emails_link().clone());
        }

        if input.is_authenticated {
            cards.extend(input.custom_links.iter().map(custom_link_card));
        }

        if let Some(activity) = input.todays_training {
            cards.push(training_card_for(activity)?);
        }

        if input.is_authenticated {
            if let Some(city) = input.city.filter(|c| !c.trim().is_empty()) {
                cards.push(weather_card(city));
            }
        }

        tracing::debug!(
            cards = cards.len(),
            authenticated = input.is_authenticated,
            "Composed dashboard cards"
        );

        Ok(cards)
    }
}

/// Adapts a custom link into a card.
pub fn custom_link_card(link: &CustomLink) -> LinkDescriptor {
    LinkDescriptor {
        id: format!("{CUSTOM_CARD_PREFIX}{}", link.id),
        title: link.title.clone(),
        url: link.url.clone(),
        icon: link.icon.clone(),
        color: link.color.clone(),
        gradient: link.gradient.clone(),
        link_type: Some(LinkType::Custom),
        display_by_default: None,
    }
}

/// Builds the weather placeholder card for a city.
pub fn weather_card(city: &str) -> LinkDescriptor {
    LinkDescriptor::new(WEATHER_CARD_ID, city.trim(), "#", "🌤️", "from-sky-500 to-sky-600")
        .with_type(LinkType::Weather)
}

#[cfg(test)]
mod tests {
    use entities::TrainingActivity;
    use uuid::Uuid;

    use super::*;
    use crate::{ComposeError, TRAINING_CARD_ID};

    const ADMIN: &str = "admin@example.com";

    fn policy() -> AdminPolicy {
        AdminPolicy::new(Some(ADMIN.to_string()))
    }

    fn ids(cards: &[LinkDescriptor]) -> Vec<&str> {
        cards.iter().map(|c| c.id.as_str()).collect()
    }

    fn custom_links(n: usize) -> Vec<CustomLink> {
        let user_id = Uuid::new_v4();
        (0..n)
            .map(|i| {
                CustomLink::new(user_id, format!("Link {i}"), format!("https://{i}.example"), "⭐")
            })
            .collect()
    }

    #[test]
    fn test_anonymous_sees_full_catalog_only() {
        let catalog = Catalog::builtin().unwrap();
        let policy = policy();
        let composer = LinkComposer::new(&catalog, &policy);

        let cards = composer.compose(&ComposeInput::anonymous()).unwrap();

        assert_eq!(cards, catalog.available_links().to_vec());
    }

    #[test]
    fn test_anonymous_ignores_personal_inputs() {
        let catalog = Catalog::builtin().unwrap();
        let policy = policy();
        let composer = LinkComposer::new(&catalog, &policy);
        let links = custom_links(2);

        let input = ComposeInput {
            user_email: Some(ADMIN),
            custom_links: &links,
            city: Some("sydney"),
            ..ComposeInput::anonymous()
        };
        let cards = composer.compose(&input).unwrap();

        assert_eq!(cards.len(), 5);
    }

    #[test]
    fn test_no_preferences_ignores_enabled_links() {
        let catalog = Catalog::builtin().unwrap();
        let policy = policy();
        let composer = LinkComposer::new(&catalog, &policy);
        let enabled: BTreeSet<String> = ["google".to_string()].into();

        let input = ComposeInput {
            enabled_links: &enabled,
            has_set_preferences: false,
            ..ComposeInput::authenticated("user@example.com")
        };
        let cards = composer.compose(&input).unwrap();

        assert_eq!(ids(&cards), vec!["google", "github", "chatgpt", "youtube", "outlook"]);
    }

    #[test]
    fn test_preferences_select_subset_in_catalog_order() {
        let catalog = Catalog::builtin().unwrap();
        let policy = policy();
        let composer = LinkComposer::new(&catalog, &policy);
        let enabled: BTreeSet<String> =
            ["youtube", "google", "not-a-link"].map(String::from).into();

        let input = ComposeInput {
            enabled_links: &enabled,
            has_set_preferences: true,
            ..ComposeInput::authenticated("user@example.com")
        };
        let cards = composer.compose(&input).unwrap();

        assert_eq!(ids(&cards), vec!["google", "youtube"]);
    }

    #[test]
    fn test_empty_preferences_show_no_catalog_links() {
        let catalog = Catalog::builtin().unwrap();
        let policy = policy();
        let composer = LinkComposer::new(&catalog, &policy);

        let input = ComposeInput {
            has_set_preferences: true,
            ..ComposeInput::authenticated("user@example.com")
        };

        assert!(composer.compose(&input).unwrap().is_empty());
    }

    #[test]
    fn test_emails_card_ignores_toggle() {
        let catalog = Catalog::builtin().unwrap();
        let policy = policy();
        let composer = LinkComposer::new(&catalog, &policy);
        let with_emails: BTreeSet<String> = ["emails".to_string()].into();
        let without: BTreeSet<String> = BTreeSet::new();

        for enabled in [&with_emails, &without] {
            let input = ComposeInput {
                enabled_links: enabled,
                has_set_preferences: true,
                ..ComposeInput::authenticated(ADMIN)
            };
            assert_eq!(ids(&composer.compose(&input).unwrap()), vec!["emails"]);
        }
    }

    #[test]
    fn test_emails_card_requires_admin_and_session() {
        let catalog = Catalog::builtin().unwrap();
        let policy = policy();
        let composer = LinkComposer::new(&catalog, &policy);

        let not_admin = ComposeInput::authenticated("Admin@example.com");
        let no_session = ComposeInput {
            user_email: Some(ADMIN),
            ..ComposeInput::anonymous()
        };

        for input in [not_admin, no_session] {
            let cards = composer.compose(&input).unwrap();
            assert!(cards.iter().all(|c| c.link_type != Some(LinkType::Emails)));
        }
    }

    #[test]
    fn test_custom_links_adapted_one_to_one() {
        let catalog = Catalog::builtin().unwrap();
        let policy = policy();
        let composer = LinkComposer::new(&catalog, &policy);
        let links = custom_links(3);

        let input = ComposeInput {
            custom_links: &links,
            has_set_preferences: true,
            ..ComposeInput::authenticated("user@example.com")
        };
        let cards = composer.compose(&input).unwrap();

        assert_eq!(cards.len(), 3);
        for (card, link) in cards.iter().zip(&links) {
            assert_eq!(card.id, format!("custom-{}", link.id));
            assert_eq!(card.title, link.title);
            assert_eq!(card.url, link.url);
            assert_eq!(card.icon, link.icon);
            assert_eq!(card.color, link.color);
            assert_eq!(card.gradient, link.gradient);
            assert_eq!(card.link_type, Some(LinkType::Custom));
        }
    }

    #[test]
    fn test_training_card_appended() {
        let catalog = Catalog::builtin().unwrap();
        let policy = policy();
        let composer = LinkComposer::new(&catalog, &policy);

        let input = ComposeInput {
            has_set_preferences: true,
            todays_training: Some(TrainingActivity::Rest.as_str()),
            ..ComposeInput::authenticated("user@example.com")
        };
        let cards = composer.compose(&input).unwrap();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, TRAINING_CARD_ID);
        assert_eq!(cards[0].title, "Rest Day");
    }

    #[test]
    fn test_unknown_training_activity_fails() {
        let catalog = Catalog::builtin().unwrap();
        let policy = policy();
        let composer = LinkComposer::new(&catalog, &policy);

        let input = ComposeInput {
            todays_training: Some("crossfit"),
            ..ComposeInput::authenticated("user@example.com")
        };

        assert_eq!(
            composer.compose(&input).unwrap_err(),
            ComposeError::UnknownTrainingActivity {
                activity: "crossfit".to_string()
            }
        );
    }

    #[test]
    fn test_weather_card_requires_city_and_session() {
        let catalog = Catalog::builtin().unwrap();
        let policy = policy();
        let composer = LinkComposer::new(&catalog, &policy);

        let cases = [
            (ComposeInput { city: Some("sydney"), ..ComposeInput::authenticated("u@example.com") }, true),
            (ComposeInput { city: Some(""), ..ComposeInput::authenticated("u@example.com") }, false),
            (ComposeInput { city: Some("   "), ..ComposeInput::authenticated("u@example.com") }, false),
            (ComposeInput { city: None, ..ComposeInput::authenticated("u@example.com") }, false),
            (ComposeInput { city: Some("sydney"), ..ComposeInput::anonymous() }, false),
        ];

        for (input, expected) in cases {
            let cards = composer.compose(&input).unwrap();
            let has_weather = cards.iter().any(|c| c.id == WEATHER_CARD_ID);
            assert_eq!(has_weather, expected, "city {:?}", input.city);
        }
    }

    #[test]
    fn test_admin_full_dashboard_order() {
        let catalog = Catalog::builtin().unwrap();
        let policy = policy();
        let composer = LinkComposer::new(&catalog, &policy);
        let links = custom_links(2);

        let input = ComposeInput {
            custom_links: &links,
            todays_training: Some("run"),
            city: Some("sydney"),
            ..ComposeInput::authenticated(ADMIN)
        };
        let cards = composer.compose(&input).unwrap();

        let expected_custom: Vec<String> =
            links.iter().map(|l| format!("custom-{}", l.id)).collect();
        assert_eq!(
            ids(&cards),
            vec![
                "google",
                "github",
                "chatgpt",
                "youtube",
                "outlook",
                "emails",
                expected_custom[0].as_str(),
                expected_custom[1].as_str(),
                TRAINING_CARD_ID,
                WEATHER_CARD_ID,
            ]
        );
        assert_eq!(cards[8].title, "Run Day");
        assert_eq!(cards[9].title, "sydney");
        assert_eq!(cards[9].link_type, Some(LinkType::Weather));
    }

    #[test]
    fn test_non_admin_single_enabled_link() {
        let catalog = Catalog::builtin().unwrap();
        let policy = policy();
        let composer = LinkComposer::new(&catalog, &policy);
        let enabled: BTreeSet<String> = ["google".to_string()].into();

        let input = ComposeInput {
            enabled_links: &enabled,
            has_set_preferences: true,
            ..ComposeInput::authenticated("user@example.com")
        };

        assert_eq!(ids(&composer.compose(&input).unwrap()), vec!["google"]);
    }

    #[test]
    fn test_disabled_policy_never_shows_emails() {
        let catalog = Catalog::builtin().unwrap();
        let policy = AdminPolicy::new(None);
        let composer = LinkComposer::new(&catalog, &policy);

        let cards = composer.compose(&ComposeInput::authenticated("")).unwrap();
        assert!(cards.iter().all(|c| c.id != "emails"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let catalog = Catalog::builtin().unwrap();
        let policy = policy();
        let composer = LinkComposer::new(&catalog, &policy);
        let links = custom_links(1);

        let input = ComposeInput {
            custom_links: &links,
            todays_training: Some("bike"),
            city: Some("oslo"),
            ..ComposeInput::authenticated(ADMIN)
        };

        assert_eq!(composer.compose(&input).unwrap(), composer.compose(&input).unwrap());
    }
}
