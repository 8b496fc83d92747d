//! Cache tag definitions.
//!
//! A `CacheTag` names one independently cached render of site content.
//! When content changes, every tag that depends on it must be marked
//! stale. The string forms are the wire contract with the rendering
//! layer and must stay stable.

use serde::{Serialize, Serializer};

/// The closed set of cache tags the rendering layer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheTag {
    /// Public home page render.
    HomePage,
    /// Admin home editing form, which doubles as the offerings
    /// management view.
    HomeForm,
    /// Public about page render.
    AboutPage,
    /// Admin about editing form.
    AboutForm,
    /// Public contact page render.
    ContactPage,
    /// Admin contact editing form.
    ContactForm,
    /// Admin company info editing form. There is no standalone public
    /// company-info page; the footer is its public surface.
    CompanyInfoForm,
    /// Site-wide footer embedded in every public render.
    PublicFooter,
    /// Public terms page render.
    TermsPage,
    /// Admin terms editing form.
    TermsForm,
    /// Public privacy page render.
    PrivacyPage,
    /// Admin privacy editing form.
    PrivacyForm,
}

impl CacheTag {
    pub const ALL: [CacheTag; 12] = [
        CacheTag::HomePage,
        CacheTag::HomeForm,
        CacheTag::AboutPage,
        CacheTag::AboutForm,
        CacheTag::ContactPage,
        CacheTag::ContactForm,
        CacheTag::CompanyInfoForm,
        CacheTag::PublicFooter,
        CacheTag::TermsPage,
        CacheTag::TermsForm,
        CacheTag::PrivacyPage,
        CacheTag::PrivacyForm,
    ];

    /// Stable key understood by the rendering layer.
    pub fn as_str(self) -> &'static str {
        match self {
            CacheTag::HomePage => "home-page",
            CacheTag::HomeForm => "home-form",
            CacheTag::AboutPage => "about-page",
            CacheTag::AboutForm => "about-form",
            CacheTag::ContactPage => "contact-page",
            CacheTag::ContactForm => "contact-form",
            CacheTag::CompanyInfoForm => "company-info-form",
            CacheTag::PublicFooter => "public-footer",
            CacheTag::TermsPage => "terms-page",
            CacheTag::TermsForm => "terms-form",
            CacheTag::PrivacyPage => "privacy-page",
            CacheTag::PrivacyForm => "privacy-form",
        }
    }
}

impl From<CacheTag> for &'static str {
    fn from(tag: CacheTag) -> Self {
        tag.as_str()
    }
}

impl Serialize for CacheTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl std::fmt::Display for CacheTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
