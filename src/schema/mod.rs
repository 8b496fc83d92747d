//! Schema registry: one validation contract per content kind.
//!
//! `validate_page` is the only way raw input becomes a typed
//! [`PageContent`], and the offering contracts are the only way offering
//! input reaches the store. Validation is a pure function of its input:
//! it either returns the typed value or an error listing every field
//! that failed, and it never touches anything else.

mod fields;

use serde_json::Value;

use crate::domain::content::{
    AboutContent, CompanyInfoContent, ContactContent, HeroSection, HomeContent, LegalContent,
    OfferingsSection, PageContent, PageKind, Testimonial, TestimonialsSection,
};
use crate::domain::offerings::{OfferingDraft, OfferingPatch};
use fields::{
    as_object, bounded, email_checked, non_empty, object_at, opt_str_at, push, str_at, url_checked,
};

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldReason {
    Required,
    TooLong { max: usize },
    InvalidUrl,
    InvalidEmail,
    InvalidType,
    EmptyUpdate,
}

impl FieldReason {
    /// Stable code for API payloads.
    pub fn code(self) -> &'static str {
        match self {
            FieldReason::Required => "required",
            FieldReason::TooLong { .. } => "max_length",
            FieldReason::InvalidUrl => "invalid_url",
            FieldReason::InvalidEmail => "invalid_email",
            FieldReason::InvalidType => "invalid_type",
            FieldReason::EmptyUpdate => "empty_update",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// Dotted path into the document, e.g. `hero.headline` or
    /// `testimonials.items[2].quote`. Empty for document-level errors.
    pub field: String,
    pub reason: FieldReason,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

impl std::error::Error for ValidationError {}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed: ")?;
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            if error.field.is_empty() {
                write!(f, "{}", error.message)?;
            } else {
                write!(f, "{}: {}", error.field, error.message)?;
            }
        }
        Ok(())
    }
}

/// Validate a raw page document against the contract registered for `kind`.
pub fn validate_page(kind: PageKind, raw: &Value) -> Result<PageContent, ValidationError> {
    let result = match kind {
        PageKind::Home => validate_home(raw).map(PageContent::Home),
        PageKind::About => validate_about(raw).map(PageContent::About),
        PageKind::Contact => validate_contact(raw).map(PageContent::Contact),
        PageKind::CompanyInfo => validate_company_info(raw).map(PageContent::CompanyInfo),
        PageKind::Terms => validate_legal(raw, 100, "Title must be at most 100 characters")
            .map(PageContent::Terms),
        PageKind::Privacy => validate_legal(raw, 128, "Title must be at most 128 characters")
            .map(PageContent::Privacy),
    };
    result.map_err(ValidationError::new)
}

fn validate_home(raw: &Value) -> Result<HomeContent, Vec<FieldError>> {
    let mut errors = Vec::new();
    let Some(obj) = as_object(raw, &mut errors) else {
        return Err(errors);
    };

    let hero = match object_at(obj, "hero", "hero", &mut errors) {
        Some(hero) => {
            let headline = bounded(
                str_at(hero, "headline", "hero.headline", &mut errors),
                48,
                "hero.headline",
                "Headline must be at most 48 characters long",
                &mut errors,
            );
            let subheadline = bounded(
                str_at(hero, "subheadline", "hero.subheadline", &mut errors),
                128,
                "hero.subheadline",
                "Subheadline must be at most 128 characters long",
                &mut errors,
            );
            let cta_text = bounded(
                str_at(hero, "ctaText", "hero.ctaText", &mut errors),
                24,
                "hero.ctaText",
                "CTA Text must be at most 24 characters long",
                &mut errors,
            );
            let cta_link = url_checked(
                str_at(hero, "ctaLink", "hero.ctaLink", &mut errors),
                "hero.ctaLink",
                "CTA Link must be a valid URL",
                &mut errors,
            );
            let hero_image_url = url_checked(
                str_at(hero, "heroImageUrl", "hero.heroImageUrl", &mut errors),
                "hero.heroImageUrl",
                "Hero Image URL must be a valid URL",
                &mut errors,
            );
            Some((headline, subheadline, cta_text, cta_link, hero_image_url))
        }
        None => None,
    };

    let offerings_title = object_at(obj, "offerings", "offerings", &mut errors).and_then(|s| {
        bounded(
            str_at(s, "title", "offerings.title", &mut errors),
            32,
            "offerings.title",
            "Title must be at most 32 characters long",
            &mut errors,
        )
    });

    let testimonials = object_at(obj, "testimonials", "testimonials", &mut errors).map(|s| {
        let title = bounded(
            str_at(s, "title", "testimonials.title", &mut errors),
            32,
            "testimonials.title",
            "Title must be at most 32 characters long",
            &mut errors,
        );
        let items = validate_testimonial_items(s, &mut errors);
        (title, items)
    });

    if !errors.is_empty() {
        return Err(errors);
    }

    let (headline, subheadline, cta_text, cta_link, hero_image_url) =
        hero.unwrap_or_default();
    let (testimonials_title, items) = testimonials.unwrap_or_default();

    Ok(HomeContent {
        hero: HeroSection {
            headline: headline.unwrap_or_default(),
            subheadline: subheadline.unwrap_or_default(),
            cta_text: cta_text.unwrap_or_default(),
            cta_link: cta_link.unwrap_or_default(),
            hero_image_url: hero_image_url.unwrap_or_default(),
        },
        offerings: OfferingsSection {
            title: offerings_title.unwrap_or_default(),
        },
        testimonials: TestimonialsSection {
            title: testimonials_title.unwrap_or_default(),
            items,
        },
    })
}

fn validate_testimonial_items(
    testimonials: &serde_json::Map<String, Value>,
    errors: &mut Vec<FieldError>,
) -> Vec<Testimonial> {
    let entries = match testimonials.get("items") {
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            push(
                errors,
                "testimonials.items",
                FieldReason::InvalidType,
                "Expected a list",
            );
            return Vec::new();
        }
        None => {
            push(errors, "testimonials.items", FieldReason::Required, "Required");
            return Vec::new();
        }
    };

    let mut items = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let path = |name: &str| format!("testimonials.items[{index}].{name}");
        let Some(item) = entry.as_object() else {
            push(
                errors,
                format!("testimonials.items[{index}]"),
                FieldReason::InvalidType,
                "Expected an object",
            );
            continue;
        };

        let quote = bounded(
            str_at(item, "quote", &path("quote"), errors),
            256,
            &path("quote"),
            "Quote must be at most 256 characters long",
            errors,
        );
        let author = bounded(
            str_at(item, "author", &path("author"), errors),
            64,
            &path("author"),
            "Author name must be at most 64 characters long",
            errors,
        );
        let author_image_url = url_checked(
            str_at(item, "authorImageUrl", &path("authorImageUrl"), errors),
            &path("authorImageUrl"),
            "Author image URL must be a valid URL",
            errors,
        );

        items.push(Testimonial {
            quote: quote.unwrap_or_default(),
            author: author.unwrap_or_default(),
            author_image_url: author_image_url.unwrap_or_default(),
        });
    }

    items
}

fn validate_about(raw: &Value) -> Result<AboutContent, Vec<FieldError>> {
    let mut errors = Vec::new();
    let Some(obj) = as_object(raw, &mut errors) else {
        return Err(errors);
    };

    let hero_title = bounded(
        str_at(obj, "heroTitle", "heroTitle", &mut errors),
        64,
        "heroTitle",
        "Title must be at most 64 characters",
        &mut errors,
    );
    let hero_subtitle = bounded(
        str_at(obj, "heroSubtitle", "heroSubtitle", &mut errors),
        160,
        "heroSubtitle",
        "Subtitle must be at most 160 characters",
        &mut errors,
    );
    let hero_image_url = url_checked(
        str_at(obj, "heroImageUrl", "heroImageUrl", &mut errors),
        "heroImageUrl",
        "Hero image must be a valid URL",
        &mut errors,
    );
    let body = bounded(
        str_at(obj, "body", "body", &mut errors),
        1200,
        "body",
        "Body must be at most 1200 characters",
        &mut errors,
    );

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(AboutContent {
        hero_title: hero_title.unwrap_or_default(),
        hero_subtitle: hero_subtitle.unwrap_or_default(),
        hero_image_url: hero_image_url.unwrap_or_default(),
        body: body.unwrap_or_default(),
    })
}

fn validate_contact(raw: &Value) -> Result<ContactContent, Vec<FieldError>> {
    let mut errors = Vec::new();
    let Some(obj) = as_object(raw, &mut errors) else {
        return Err(errors);
    };

    let headline = bounded(
        str_at(obj, "headline", "headline", &mut errors),
        64,
        "headline",
        "Headline must be at most 64 characters",
        &mut errors,
    );
    let subheadline = bounded(
        str_at(obj, "subheadline", "subheadline", &mut errors),
        160,
        "subheadline",
        "Subheadline must be at most 160 characters",
        &mut errors,
    );
    let email = email_checked(
        str_at(obj, "email", "email", &mut errors),
        "email",
        "Enter a valid email",
        &mut errors,
    );
    let phone = bounded(
        str_at(obj, "phone", "phone", &mut errors),
        32,
        "phone",
        "Phone must be at most 32 characters",
        &mut errors,
    );
    let address = bounded(
        str_at(obj, "address", "address", &mut errors),
        200,
        "address",
        "Address must be at most 200 characters",
        &mut errors,
    );
    let cta_text = bounded(
        str_at(obj, "ctaText", "ctaText", &mut errors),
        40,
        "ctaText",
        "CTA text must be at most 40 characters",
        &mut errors,
    );
    let cta_link = url_checked(
        str_at(obj, "ctaLink", "ctaLink", &mut errors),
        "ctaLink",
        "CTA link must be a valid URL",
        &mut errors,
    );

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ContactContent {
        headline: headline.unwrap_or_default(),
        subheadline: subheadline.unwrap_or_default(),
        email: email.unwrap_or_default(),
        phone: phone.unwrap_or_default(),
        address: address.unwrap_or_default(),
        cta_text: cta_text.unwrap_or_default(),
        cta_link: cta_link.unwrap_or_default(),
    })
}

fn validate_company_info(raw: &Value) -> Result<CompanyInfoContent, Vec<FieldError>> {
    let mut errors = Vec::new();
    let Some(obj) = as_object(raw, &mut errors) else {
        return Err(errors);
    };

    let name = bounded(
        str_at(obj, "name", "name", &mut errors),
        64,
        "name",
        "Company name must be at most 64 characters long",
        &mut errors,
    );
    let tagline = bounded(
        opt_str_at(obj, "tagline", "tagline", &mut errors),
        128,
        "tagline",
        "Tagline must be at most 128 characters long",
        &mut errors,
    );
    let email = email_checked(
        str_at(obj, "email", "email", &mut errors),
        "email",
        "Email must be a valid email address",
        &mut errors,
    );
    let logo_url = url_checked(
        str_at(obj, "logoUrl", "logoUrl", &mut errors),
        "logoUrl",
        "Logo URL must be a valid URL",
        &mut errors,
    );

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(CompanyInfoContent {
        name: name.unwrap_or_default(),
        tagline,
        email: email.unwrap_or_default(),
        logo_url: logo_url.unwrap_or_default(),
    })
}

fn validate_legal(
    raw: &Value,
    title_max: usize,
    title_message: &str,
) -> Result<LegalContent, Vec<FieldError>> {
    let mut errors = Vec::new();
    let Some(obj) = as_object(raw, &mut errors) else {
        return Err(errors);
    };

    let title = bounded(
        str_at(obj, "title", "title", &mut errors),
        title_max,
        "title",
        title_message,
        &mut errors,
    );
    let content = non_empty(
        str_at(obj, "content", "content", &mut errors),
        "content",
        "Content is required",
        &mut errors,
    );
    let effective_date = non_empty(
        str_at(obj, "effectiveDate", "effectiveDate", &mut errors),
        "effectiveDate",
        "Effective date is required",
        &mut errors,
    );

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(LegalContent {
        title: title.unwrap_or_default(),
        content: content.unwrap_or_default(),
        effective_date: effective_date.unwrap_or_default(),
    })
}

/// Validate input for creating an offering. `isActive` defaults to true;
/// empty-string URLs normalize to absent.
pub fn validate_offering_draft(raw: &Value) -> Result<OfferingDraft, ValidationError> {
    let mut errors = Vec::new();
    let Some(obj) = as_object(raw, &mut errors) else {
        return Err(ValidationError::new(errors));
    };

    let title = non_empty(
        str_at(obj, "title", "title", &mut errors),
        "title",
        "Title is required",
        &mut errors,
    );
    let description = non_empty(
        str_at(obj, "description", "description", &mut errors),
        "description",
        "Description is required",
        &mut errors,
    );
    let image_url = optional_url(obj, "imageUrl", "Image URL must be a valid URL", &mut errors);
    let href = optional_url(obj, "href", "Link must be a valid URL", &mut errors);

    let is_active = match obj.get("isActive") {
        Some(Value::Bool(active)) => *active,
        Some(Value::Null) | None => true,
        Some(_) => {
            push(
                &mut errors,
                "isActive",
                FieldReason::InvalidType,
                "Expected a boolean",
            );
            true
        }
    };

    if !errors.is_empty() {
        return Err(ValidationError::new(errors));
    }

    Ok(OfferingDraft {
        title: title.unwrap_or_default(),
        description: description.unwrap_or_default(),
        image_url,
        href,
        is_active,
    })
}

/// Validate input for a partial offering update. Every field is optional,
/// but at least one must be supplied.
pub fn validate_offering_patch(raw: &Value) -> Result<OfferingPatch, ValidationError> {
    let mut errors = Vec::new();
    let Some(obj) = as_object(raw, &mut errors) else {
        return Err(ValidationError::new(errors));
    };

    let mut patch = OfferingPatch::default();
    let mut supplied = 0usize;

    if obj.contains_key("title") {
        supplied += 1;
        patch.title = non_empty(
            str_at(obj, "title", "title", &mut errors),
            "title",
            "Title is required",
            &mut errors,
        );
    }
    if obj.contains_key("description") {
        supplied += 1;
        patch.description = non_empty(
            str_at(obj, "description", "description", &mut errors),
            "description",
            "Description is required",
            &mut errors,
        );
    }
    if let Some(value) = obj.get("imageUrl") {
        supplied += 1;
        patch.image_url = Some(nullable_url(
            value,
            "imageUrl",
            "Image URL must be a valid URL",
            &mut errors,
        ));
    }
    if let Some(value) = obj.get("href") {
        supplied += 1;
        patch.href = Some(nullable_url(
            value,
            "href",
            "Link must be a valid URL",
            &mut errors,
        ));
    }
    if let Some(value) = obj.get("isActive") {
        supplied += 1;
        match value {
            Value::Bool(active) => patch.is_active = Some(*active),
            _ => push(
                &mut errors,
                "isActive",
                FieldReason::InvalidType,
                "Expected a boolean",
            ),
        }
    }

    if supplied == 0 {
        push(
            &mut errors,
            "",
            FieldReason::EmptyUpdate,
            "At least one field must be provided for update",
        );
    }

    if !errors.is_empty() {
        return Err(ValidationError::new(errors));
    }

    Ok(patch)
}

/// URL field that may be absent, null or empty. All three mean "no value".
fn optional_url(
    obj: &serde_json::Map<String, Value>,
    name: &str,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match obj.get(name) {
        Some(value) => nullable_url(value, name, message, errors),
        None => None,
    }
}

fn nullable_url(
    value: &Value,
    path: &str,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => {
            url_checked(Some(text.clone()), path, message, errors)
        }
        _ => {
            push(errors, path, FieldReason::InvalidType, "Expected a string");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_home() -> Value {
        json!({
            "hero": {
                "headline": "Build with confidence",
                "subheadline": "Everything a small studio needs to ship its site.",
                "ctaText": "Get started",
                "ctaLink": "https://vetrina.dev/start",
                "heroImageUrl": "https://cdn.vetrina.dev/hero.jpg",
            },
            "offerings": { "title": "What we do" },
            "testimonials": {
                "title": "Kind words",
                "items": [
                    {
                        "quote": "They rebuilt our site in a week.",
                        "author": "Dana R.",
                        "authorImageUrl": "https://cdn.vetrina.dev/dana.jpg",
                    },
                ],
            },
        })
    }

    #[test]
    fn home_accepts_conforming_input() {
        let content = validate_page(PageKind::Home, &valid_home()).expect("valid");
        let PageContent::Home(home) = content else {
            panic!("expected home content");
        };
        assert_eq!(home.hero.headline, "Build with confidence");
        assert_eq!(home.testimonials.items.len(), 1);
    }

    #[test]
    fn home_rejects_headline_over_limit() {
        let mut raw = valid_home();
        raw["hero"]["headline"] = Value::String("x".repeat(49));

        let error = validate_page(PageKind::Home, &raw).expect_err("49 chars is over budget");
        assert_eq!(error.errors.len(), 1);
        assert_eq!(error.errors[0].field, "hero.headline");
        assert_eq!(error.errors[0].reason, FieldReason::TooLong { max: 48 });
    }

    #[test]
    fn home_headline_at_limit_is_accepted() {
        let mut raw = valid_home();
        raw["hero"]["headline"] = Value::String("x".repeat(48));
        assert!(validate_page(PageKind::Home, &raw).is_ok());
    }

    #[test]
    fn home_enumerates_every_failing_field() {
        let mut raw = valid_home();
        raw["hero"]["ctaLink"] = Value::String("not a url".into());
        raw["offerings"]["title"] = Value::String("y".repeat(33));
        raw["testimonials"]["items"][0]["authorImageUrl"] = Value::String("also bad".into());

        let error = validate_page(PageKind::Home, &raw).expect_err("three failures");
        let fields: Vec<&str> = error.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "hero.ctaLink",
                "offerings.title",
                "testimonials.items[0].authorImageUrl",
            ]
        );
    }

    #[test]
    fn home_reports_missing_sections() {
        let error = validate_page(PageKind::Home, &json!({})).expect_err("all missing");
        let fields: Vec<&str> = error.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["hero", "offerings", "testimonials"]);
        assert!(error.errors.iter().all(|e| e.reason == FieldReason::Required));
    }

    #[test]
    fn about_rejects_hero_title_at_sixty_five() {
        let raw = json!({
            "heroTitle": "X".repeat(65),
            "heroSubtitle": "Our story",
            "heroImageUrl": "https://cdn.vetrina.dev/about.jpg",
            "body": "We make brochure sites.",
        });

        let error = validate_page(PageKind::About, &raw).expect_err("title too long");
        assert_eq!(error.errors.len(), 1);
        assert_eq!(error.errors[0].field, "heroTitle");
        assert_eq!(error.errors[0].message, "Title must be at most 64 characters");
    }

    #[test]
    fn contact_rejects_bad_email() {
        let raw = json!({
            "headline": "Say hello",
            "subheadline": "We reply within a day",
            "email": "not-an-email",
            "phone": "+1 555 0100",
            "address": "1 Main St",
            "ctaText": "Write to us",
            "ctaLink": "https://vetrina.dev/contact",
        });

        let error = validate_page(PageKind::Contact, &raw).expect_err("bad email");
        assert_eq!(error.errors[0].field, "email");
        assert_eq!(error.errors[0].reason, FieldReason::InvalidEmail);
        assert_eq!(error.errors[0].message, "Enter a valid email");
    }

    #[test]
    fn company_info_tagline_is_optional_but_bounded() {
        let mut raw = json!({
            "name": "Vetrina Studio",
            "email": "hello@vetrina.dev",
            "logoUrl": "https://cdn.vetrina.dev/logo.svg",
        });
        assert!(validate_page(PageKind::CompanyInfo, &raw).is_ok());

        raw["tagline"] = Value::String("t".repeat(129));
        let error = validate_page(PageKind::CompanyInfo, &raw).expect_err("tagline too long");
        assert_eq!(error.errors[0].field, "tagline");
        assert_eq!(error.errors[0].reason, FieldReason::TooLong { max: 128 });
    }

    #[test]
    fn terms_and_privacy_differ_only_in_title_budget() {
        let raw = |title_len: usize| {
            json!({
                "title": "t".repeat(title_len),
                "content": "The fine print.",
                "effectiveDate": "2026-01-01",
            })
        };

        assert!(validate_page(PageKind::Terms, &raw(100)).is_ok());
        assert!(validate_page(PageKind::Terms, &raw(101)).is_err());
        assert!(validate_page(PageKind::Privacy, &raw(128)).is_ok());
        assert!(validate_page(PageKind::Privacy, &raw(129)).is_err());
    }

    #[test]
    fn legal_pages_require_content_and_date() {
        let raw = json!({
            "title": "Terms",
            "content": "   ",
            "effectiveDate": "",
        });

        let error = validate_page(PageKind::Terms, &raw).expect_err("blank fields");
        let fields: Vec<&str> = error.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["content", "effectiveDate"]);
    }

    #[test]
    fn offering_draft_defaults_and_normalization() {
        let draft = validate_offering_draft(&json!({
            "title": "Web Dev",
            "description": "Build sites",
            "imageUrl": "",
        }))
        .expect("valid draft");

        assert!(draft.is_active);
        assert_eq!(draft.image_url, None);
        assert_eq!(draft.href, None);
    }

    #[test]
    fn offering_draft_requires_title_and_description() {
        let error = validate_offering_draft(&json!({ "href": "https://example.com" }))
            .expect_err("missing required fields");
        let fields: Vec<&str> = error.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["title", "description"]);
    }

    #[test]
    fn offering_draft_rejects_malformed_urls() {
        let error = validate_offering_draft(&json!({
            "title": "Design",
            "description": "Logos and layouts",
            "imageUrl": "broken image",
            "href": "not a link",
        }))
        .expect_err("two bad urls");
        assert_eq!(error.errors.len(), 2);
    }

    #[test]
    fn offering_patch_requires_at_least_one_field() {
        let error = validate_offering_patch(&json!({})).expect_err("empty patch");
        assert_eq!(error.errors.len(), 1);
        assert_eq!(error.errors[0].reason, FieldReason::EmptyUpdate);
        assert_eq!(
            error.errors[0].message,
            "At least one field must be provided for update"
        );
    }

    #[test]
    fn offering_patch_distinguishes_clear_from_absent() {
        let patch = validate_offering_patch(&json!({ "imageUrl": null })).expect("valid patch");
        assert_eq!(patch.image_url, Some(None));
        assert_eq!(patch.href, None);

        let patch =
            validate_offering_patch(&json!({ "isActive": false })).expect("valid patch");
        assert_eq!(patch.is_active, Some(false));
        assert!(patch.title.is_none());
    }

    #[test]
    fn validation_never_partially_succeeds() {
        // A document with one bad field yields an error, not a repaired value.
        let mut raw = valid_home();
        raw["hero"]["heroImageUrl"] = Value::String("bad".into());
        assert!(validate_page(PageKind::Home, &raw).is_err());
    }
}
