use std::sync::Arc;

use crate::application::content::ContentService;
use crate::application::offerings::OfferingService;
use crate::application::repos::StoreHealth;
use crate::application::site::SiteService;
use crate::cache::TagStamps;

#[derive(Clone)]
pub struct ApiState {
    pub content: Arc<ContentService>,
    pub offerings: Arc<OfferingService>,
    pub site: Arc<SiteService>,
    pub stamps: Arc<TagStamps>,
    pub health: Arc<dyn StoreHealth>,
}
