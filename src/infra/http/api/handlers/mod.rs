mod cache;
mod offerings;
mod pages;

pub use cache::cache_stamps;
pub use offerings::{create_offering, delete_offering, list_offerings, update_offering};
pub use pages::{get_page, put_page};
