//! Public read models: compositions the public site renders.
//!
//! These views are assembled at read time and never stored; the cache
//! tags in `crate::cache` are what keep their cached renders honest.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::application::content::{ContentError, ContentService};
use crate::application::offerings::{OfferingError, OfferingService};
use crate::domain::content::{CompanyInfoContent, HomeContent, PageContent, PageKind};
use crate::domain::entities::OfferingRecord;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error(transparent)]
    Offerings(#[from] OfferingError),
}

/// The public home render: the home document plus the active offerings.
#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub page: Option<HomeContent>,
    pub offerings: Vec<OfferingRecord>,
}

/// The site-wide footer: company info plus the active offerings.
#[derive(Debug, Clone, Serialize)]
pub struct FooterView {
    pub company: Option<CompanyInfoContent>,
    pub offerings: Vec<OfferingRecord>,
}

#[derive(Clone)]
pub struct SiteService {
    content: Arc<ContentService>,
    offerings: Arc<OfferingService>,
}

impl SiteService {
    pub fn new(content: Arc<ContentService>, offerings: Arc<OfferingService>) -> Self {
        Self { content, offerings }
    }

    pub async fn home(&self) -> Result<HomeView, SiteError> {
        let page = match self.content.page(PageKind::Home).await? {
            Some(document) => match document.content {
                PageContent::Home(home) => Some(home),
                // page() validated against the Home schema, so this arm
                // is unreachable; treat it as an absent page.
                _ => None,
            },
            None => None,
        };
        let offerings = self.offerings.list(true).await?;

        Ok(HomeView { page, offerings })
    }

    pub async fn footer(&self) -> Result<FooterView, SiteError> {
        let company = match self.content.page(PageKind::CompanyInfo).await? {
            Some(document) => match document.content {
                PageContent::CompanyInfo(company) => Some(company),
                _ => None,
            },
            None => None,
        };
        let offerings = self.offerings.list(true).await?;

        Ok(FooterView { company, offerings })
    }
}
