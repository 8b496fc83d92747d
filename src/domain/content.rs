//! Typed page content: one strict record type per page kind.
//!
//! Every page is a singleton document keyed by its slug. The shape of the
//! document depends on the slug, so the domain models content as a tagged
//! union over `PageKind` rather than as free-form JSON. Raw input only
//! becomes one of these types by passing through the schema registry.

use serde::{Deserialize, Serialize};

/// The closed set of singleton pages the system manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Home,
    About,
    Contact,
    CompanyInfo,
    Terms,
    Privacy,
}

impl PageKind {
    pub const ALL: [PageKind; 6] = [
        PageKind::Home,
        PageKind::About,
        PageKind::Contact,
        PageKind::CompanyInfo,
        PageKind::Terms,
        PageKind::Privacy,
    ];

    /// Stable slug used as the primary key in the store and in URLs.
    pub fn slug(self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::About => "about",
            PageKind::Contact => "contact",
            PageKind::CompanyInfo => "company-info",
            PageKind::Terms => "terms",
            PageKind::Privacy => "privacy",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }
}

impl std::fmt::Display for PageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub headline: String,
    pub subheadline: String,
    pub cta_text: String,
    pub cta_link: String,
    pub hero_image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferingsSection {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub author_image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialsSection {
    pub title: String,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeContent {
    pub hero: HeroSection,
    pub offerings: OfferingsSection,
    pub testimonials: TestimonialsSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_image_url: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub headline: String,
    pub subheadline: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub cta_text: String,
    pub cta_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfoContent {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    pub email: String,
    pub logo_url: String,
}

/// Shared shape of the terms and privacy documents. The two kinds differ
/// only in their title length budget, which the schema registry enforces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalContent {
    pub title: String,
    pub content: String,
    pub effective_date: String,
}

/// A validated page document, tagged by the kind it conforms to.
///
/// Serialization is intentionally untagged: the store persists only the
/// inner document, and the slug column carries the kind.
#[derive(Debug, Clone, PartialEq)]
pub enum PageContent {
    Home(HomeContent),
    About(AboutContent),
    Contact(ContactContent),
    CompanyInfo(CompanyInfoContent),
    Terms(LegalContent),
    Privacy(LegalContent),
}

impl PageContent {
    pub fn kind(&self) -> PageKind {
        match self {
            PageContent::Home(_) => PageKind::Home,
            PageContent::About(_) => PageKind::About,
            PageContent::Contact(_) => PageKind::Contact,
            PageContent::CompanyInfo(_) => PageKind::CompanyInfo,
            PageContent::Terms(_) => PageKind::Terms,
            PageContent::Privacy(_) => PageKind::Privacy,
        }
    }

    /// Serialize the inner document for persistence or transport.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            PageContent::Home(content) => serde_json::to_value(content),
            PageContent::About(content) => serde_json::to_value(content),
            PageContent::Contact(content) => serde_json::to_value(content),
            PageContent::CompanyInfo(content) => serde_json::to_value(content),
            PageContent::Terms(content) | PageContent::Privacy(content) => {
                serde_json::to_value(content)
            }
        }
    }

    /// Re-parse a stored document against the type registered for `kind`.
    ///
    /// Stored rows were validated on the way in, so a failure here means the
    /// row no longer conforms to its schema and is an integrity problem.
    pub fn from_value(
        kind: PageKind,
        value: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            PageKind::Home => PageContent::Home(serde_json::from_value(value)?),
            PageKind::About => PageContent::About(serde_json::from_value(value)?),
            PageKind::Contact => PageContent::Contact(serde_json::from_value(value)?),
            PageKind::CompanyInfo => PageContent::CompanyInfo(serde_json::from_value(value)?),
            PageKind::Terms => PageContent::Terms(serde_json::from_value(value)?),
            PageKind::Privacy => PageContent::Privacy(serde_json::from_value(value)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_round_trip() {
        for kind in PageKind::ALL {
            assert_eq!(PageKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(PageKind::from_slug("blog"), None);
    }

    #[test]
    fn stored_shape_uses_camel_case_keys() {
        let content = PageContent::About(AboutContent {
            hero_title: "Who we are".into(),
            hero_subtitle: "A short history".into(),
            hero_image_url: "https://cdn.example.com/about.jpg".into(),
            body: "Founded in a garage.".into(),
        });

        let value = content.to_value().expect("serializable");
        assert!(value.get("heroTitle").is_some());
        assert!(value.get("heroImageUrl").is_some());
        assert!(value.get("hero_title").is_none());
    }

    #[test]
    fn from_value_rejects_mismatched_shape() {
        let about = serde_json::json!({
            "heroTitle": "x",
            "heroSubtitle": "y",
            "heroImageUrl": "https://example.com/a.png",
            "body": "z",
        });

        assert!(PageContent::from_value(PageKind::About, about.clone()).is_ok());
        assert!(PageContent::from_value(PageKind::Contact, about).is_err());
    }

    #[test]
    fn optional_tagline_is_omitted_when_absent() {
        let content = PageContent::CompanyInfo(CompanyInfoContent {
            name: "Vetrina".into(),
            tagline: None,
            email: "hello@vetrina.dev".into(),
            logo_url: "https://cdn.example.com/logo.svg".into(),
        });

        let value = content.to_value().expect("serializable");
        assert!(value.get("tagline").is_none());
    }
}
