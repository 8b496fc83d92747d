//! Application services layer.

pub mod content;
pub mod error;
pub mod offerings;
pub mod repos;
pub mod site;
