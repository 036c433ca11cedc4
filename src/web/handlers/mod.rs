//! HTML template rendering handlers for the explorer pages.

mod apod;
mod eonet;
mod home;
mod neo;

pub use apod::apod_page_handler;
pub use eonet::eonet_page_handler;
pub use home::home_handler;
pub use neo::neo_page_handler;
