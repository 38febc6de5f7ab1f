// src/ports/mod.rs
pub mod html;
pub mod site;
pub mod text;

pub use html::HtmlPresenter;
pub use site::{Page, Site, SiteBuilder, SiteData};
pub use text::TextPresenter;
