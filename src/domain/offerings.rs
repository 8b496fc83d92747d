//! Validated inputs for offering mutations.

/// A fully validated new offering. `is_active` has already had its default
/// applied; URL fields are `None` when the input was empty or absent.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferingDraft {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub href: Option<String>,
    pub is_active: bool,
}

/// A validated partial update. Outer `None` means "field not supplied";
/// for the nullable URL fields, `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfferingPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<Option<String>>,
    pub href: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl OfferingPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.href.is_none()
            && self.is_active.is_none()
    }
}
