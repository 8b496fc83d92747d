//! Static dependency table: which cache tags depend on which content.
//!
//! Centralizing the fan-out here is what keeps it complete. Write sites
//! never name individual tags; they ask this table for the full set, so
//! a view added to the site only needs its tag registered in one place.

use crate::domain::content::PageKind;

use super::keys::CacheTag;

/// Every cached view embedding the offerings collection. Offerings are
/// cross-cutting: the public home page lists them, the admin home form
/// manages them, and the footer links them.
pub const OFFERING_DEPENDENTS: &[CacheTag] =
    &[CacheTag::HomePage, CacheTag::HomeForm, CacheTag::PublicFooter];

/// Every cached view that could serve stale content after a save of the
/// given page kind.
pub fn page_dependents(kind: PageKind) -> &'static [CacheTag] {
    match kind {
        PageKind::Home => &[CacheTag::HomePage, CacheTag::HomeForm],
        PageKind::About => &[CacheTag::AboutPage, CacheTag::AboutForm],
        PageKind::Contact => &[CacheTag::ContactPage, CacheTag::ContactForm],
        // Company info has no standalone public page; it surfaces through
        // the footer on every public render.
        PageKind::CompanyInfo => &[CacheTag::CompanyInfoForm, CacheTag::PublicFooter],
        PageKind::Terms => &[CacheTag::TermsPage, CacheTag::TermsForm],
        PageKind::Privacy => &[CacheTag::PrivacyPage, CacheTag::PrivacyForm],
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_kind_has_dependents() {
        for kind in PageKind::ALL {
            assert!(
                !page_dependents(kind).is_empty(),
                "no dependents registered for {kind}"
            );
        }
    }

    #[test]
    fn no_duplicate_tags_within_a_set() {
        for kind in PageKind::ALL {
            let tags = page_dependents(kind);
            let unique: HashSet<_> = tags.iter().collect();
            assert_eq!(unique.len(), tags.len(), "duplicate tag for {kind}");
        }
        let unique: HashSet<_> = OFFERING_DEPENDENTS.iter().collect();
        assert_eq!(unique.len(), OFFERING_DEPENDENTS.len());
    }

    #[test]
    fn every_tag_is_reachable_from_some_write() {
        // A tag no write path can invalidate would cache stale output
        // forever; the table must cover the whole tag space.
        let mut reachable: HashSet<CacheTag> = HashSet::new();
        for kind in PageKind::ALL {
            reachable.extend(page_dependents(kind));
        }
        reachable.extend(OFFERING_DEPENDENTS);

        for tag in CacheTag::ALL {
            assert!(reachable.contains(&tag), "tag {tag} is orphaned");
        }
    }

    #[test]
    fn offerings_touch_all_embedding_views() {
        assert!(OFFERING_DEPENDENTS.contains(&CacheTag::HomePage));
        assert!(OFFERING_DEPENDENTS.contains(&CacheTag::HomeForm));
        assert!(OFFERING_DEPENDENTS.contains(&CacheTag::PublicFooter));
    }

    #[test]
    fn saving_a_page_invalidates_its_own_renders() {
        assert!(page_dependents(PageKind::Home).contains(&CacheTag::HomePage));
        assert!(page_dependents(PageKind::Terms).contains(&CacheTag::TermsPage));
        assert!(page_dependents(PageKind::CompanyInfo).contains(&CacheTag::PublicFooter));
    }
}
