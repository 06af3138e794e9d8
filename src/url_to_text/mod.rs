pub mod fetchers;
pub mod html;
