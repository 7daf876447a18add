//! Page model shared by the compositions.

use contabil_sections::{RenderError, Route, Section, SectionRenderer};

use crate::site::SiteInfo;
use crate::{about, blocks, privacy, services};

/// An ordered composition of sections served at one route.
pub struct Page {
    pub route: Route,
    /// Document title.
    pub title: String,
    /// Meta description and search index summary.
    pub description: String,
    pub sections: Vec<Box<dyn Section>>,
    /// Static files the page references, relative to the public directory.
    pub assets: Vec<&'static str>,
}

impl Page {
    /// Render the sections in order.
    pub fn render_body(&self, renderer: &SectionRenderer) -> Result<String, RenderError> {
        renderer.render_all(&self.sections)
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let templates: Vec<_> = self.sections.iter().map(|s| s.template()).collect();
        f.debug_struct("Page")
            .field("route", &self.route)
            .field("title", &self.title)
            .field("sections", &templates)
            .field("assets", &self.assets)
            .finish()
    }
}

/// Every page this site publishes.
pub fn all_pages(site: &SiteInfo) -> Vec<Page> {
    vec![about::page(site), services::page(site), privacy::page(site)]
}

/// Section renderer with the page block templates registered.
pub fn renderer() -> Result<SectionRenderer, RenderError> {
    let mut renderer = SectionRenderer::new()?;
    blocks::register_templates(&mut renderer)?;
    Ok(renderer)
}

/// Public URL of a file copied from the public directory.
pub fn asset_url(path: &str) -> String {
    format!("/assets/{}", path.trim_start_matches('/'))
}
