//! Page compositions for the accounting office site.
//!
//! A page is an ordered list of sections with page-specific copy. The
//! static builder wraps the rendered body in the site layout.

pub mod about;
pub mod blocks;
pub mod page;
pub mod privacy;
pub mod services;
pub mod site;

pub use blocks::{Hero, History, PolicyArticle, PolicyClause};
pub use page::{all_pages, asset_url, renderer, Page};
pub use site::SiteInfo;
