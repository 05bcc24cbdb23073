//! The static link catalog.

use std::collections::HashSet;

use entities::{LinkDescriptor, LinkType};

use crate::CatalogError;

/// Links offered to every user, plus the admin-only emails shortcut.
#[derive(Debug, Clone)]
pub struct Catalog {
    links: Vec<LinkDescriptor>,
    emails: LinkDescriptor,
}

impl Catalog {
    /// Creates a catalog, rejecting duplicate ids.
    ///
    /// The emails descriptor shares the id space of the public links.
    pub fn new(links: Vec<LinkDescriptor>, emails: LinkDescriptor) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for id in links.iter().chain(std::iter::once(&emails)).map(|l| &l.id) {
            if !seen.insert(id.as_str()) {
                return Err(CatalogError::DuplicateId(id.clone()));
            }
        }

        Ok(Self { links, emails })
    }

    /// The built-in catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin_links(), emails_link())
    }

    /// Publicly available links, in grid order.
    pub fn available_links(&self) -> &[LinkDescriptor] {
        &self.links
    }

    /// The admin-only emails shortcut.
    pub fn emails_link(&self) -> &LinkDescriptor {
        &self.emails
    }
}

fn builtin_links() -> Vec<LinkDescriptor> {
    vec![
        LinkDescriptor::new(
            "google",
            "Google",
            "https://www.google.com",
            "🔍",
            "from-blue-500 to-blue-600",
        ),
        LinkDescriptor::new(
            "github",
            "GitHub",
            "https://github.com",
            "🐙",
            "from-gray-700 to-gray-800",
        ),
        LinkDescriptor::new(
            "chatgpt",
            "ChatGPT",
            "https://chat.com",
            "🤖",
            "from-emerald-500 to-emerald-600",
        ),
        LinkDescriptor::new(
            "youtube",
            "YouTube",
            "https://www.youtube.com",
            "📺",
            "from-red-500 to-red-600",
        ),
        LinkDescriptor::new(
            "outlook",
            "Outlook",
            "https://outlook.live.com",
            "📧",
            "from-blue-500 to-blue-600",
        ),
    ]
}

fn emails_link() -> LinkDescriptor {
    LinkDescriptor::new("emails", "Emails", "#", "📬", "from-indigo-500 to-indigo-600")
        .with_type(LinkType::Emails)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();

        assert_eq!(catalog.available_links().len(), 5);
        assert_eq!(catalog.emails_link().id, "emails");
        assert_eq!(catalog.emails_link().link_type, Some(LinkType::Emails));
    }

    #[test]
    fn test_builtin_links_are_plain() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.available_links().iter().all(|l| l.link_type.is_none()));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let link = LinkDescriptor::new("a", "A", "https://a.example", "🅰", "from-red-500 to-red-600");
        let err = Catalog::new(vec![link.clone(), link], emails_link()).unwrap_err();

        assert_eq!(err, CatalogError::DuplicateId("a".to_string()));
    }

    #[test]
    fn test_emails_id_collision_rejected() {
        let clash = LinkDescriptor::new("emails", "Mail", "https://mail.example", "✉", "from-red-500 to-red-600");
        assert!(Catalog::new(vec![clash], emails_link()).is_err());
    }
}
