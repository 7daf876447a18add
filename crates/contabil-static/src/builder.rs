//! Static site builder.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use rayon::prelude::*;

use contabil_pages::{all_pages, Page, SiteInfo};
use contabil_sections::{Route, SectionRenderer};

use crate::assets::AssetPipeline;
use crate::templates::{ContactLinks, Context, NavItem, TemplateEngine};

/// Routes listed in the header menu, in display order.
const NAV_ROUTES: [Route; 4] = [Route::Home, Route::About, Route::Services, Route::Contact];

/// Files the builder writes into `assets/` itself.
const GENERATED_ASSETS: [&str; 2] = ["main.css", "main.js"];

/// Configuration for building a static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory
    pub output_dir: PathBuf,

    /// Directory of static files copied to `assets/`
    pub public_dir: PathBuf,

    /// Minify CSS output
    pub minify: bool,

    /// Absolute site URL, used in the sitemap
    pub site_url: String,

    /// Site title
    pub title: String,

    /// Document language
    pub lang: String,

    /// Paths to extra CSS stylesheets to include
    pub styles: Vec<String>,

    /// Office contact details
    pub site: SiteInfo,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            public_dir: PathBuf::from("public"),
            minify: true,
            site_url: "https://www.exatacontabilidade.com.br".to_string(),
            title: "Exata Contabilidade".to_string(),
            lang: "pt-BR".to_string(),
            styles: vec![],
            site: SiteInfo::default(),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Number of sections rendered across all pages
    pub sections: usize,

    /// Number of static files copied from the public directory
    pub assets: usize,

    /// Linked routes with no generated page; the host site serves them
    pub host_routes: Vec<Route>,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read input: {0}")]
    ReadError(String),

    #[error("Failed to render sections: {0}")]
    RenderError(String),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    renderer: SectionRenderer,
    templates: TemplateEngine,
}

impl StaticBuilder {
    /// Create a new static builder.
    pub fn new(config: BuildConfig) -> Result<Self, BuildError> {
        let renderer =
            contabil_pages::renderer().map_err(|e| BuildError::RenderError(e.to_string()))?;
        let templates =
            TemplateEngine::new().map_err(|e| BuildError::TemplateError(e.to_string()))?;

        Ok(Self {
            config,
            renderer,
            templates,
        })
    }

    /// Build the static site.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        // Ensure output directory exists
        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let pages = all_pages(&self.config.site);

        // Render pages in parallel
        let results: Vec<Result<usize, BuildError>> =
            pages.par_iter().map(|page| self.build_page(page)).collect();

        let mut total_sections = 0;
        for result in results {
            total_sections += result?;
        }

        self.build_not_found()?;

        let assets = self.generate_assets(&pages)?;

        self.generate_search_index(&pages)?;

        self.generate_sitemap(&pages)?;

        let host_routes: Vec<Route> = Route::ALL
            .into_iter()
            .filter(|route| pages.iter().all(|page| page.route != *route))
            .collect();
        for route in &host_routes {
            tracing::debug!(
                "No page generated for {}; links to it need the host site",
                route.path()
            );
        }

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: pages.len(),
            sections: total_sections,
            assets,
            host_routes,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Output file for a route: `dist/index.html` or `dist/<slug>/index.html`.
    fn output_path(&self, route: Route) -> PathBuf {
        let slug = route.slug();
        if slug.is_empty() {
            self.config.output_dir.join("index.html")
        } else {
            self.config.output_dir.join(slug).join("index.html")
        }
    }

    /// Header menu with the current route marked.
    fn navigation(&self, current: Option<Route>) -> Vec<NavItem> {
        NAV_ROUTES
            .iter()
            .map(|route| NavItem {
                title: route.label().to_string(),
                path: route.path().to_string(),
                active: Some(*route) == current,
            })
            .collect()
    }

    fn context(
        &self,
        title: &str,
        description: &str,
        content: String,
        current: Option<Route>,
    ) -> Context {
        let site = &self.config.site;

        Context {
            title: title.to_string(),
            site_title: self.config.title.clone(),
            description: description.to_string(),
            lang: self.config.lang.clone(),
            content,
            nav: self.navigation(current),
            contact: ContactLinks {
                whatsapp_url: site.whatsapp_url(),
                mailto: site.mailto(),
                email: site.email.clone(),
                phone: site.phone.clone(),
                privacy_path: Route::PrivacyPolicy.path().to_string(),
            },
            styles: self
                .config
                .styles
                .iter()
                .map(|s| stylesheet_name(s))
                .filter(|name| !is_generated_asset(name))
                .map(|name| format!("/assets/{}", name))
                .collect(),
        }
    }

    /// Build a single page. Returns the number of sections rendered.
    fn build_page(&self, page: &Page) -> Result<usize, BuildError> {
        let body = page
            .render_body(&self.renderer)
            .map_err(|e| BuildError::RenderError(format!("{}: {}", page.route.path(), e)))?;

        let context = self.context(&page.title, &page.description, body, Some(page.route));

        let html = self
            .templates
            .render_page("page.html", &context)
            .map_err(|e: minijinja::Error| BuildError::TemplateError(e.to_string()))?;

        let output_path = self.output_path(page.route);

        // Ensure output directory exists
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }

        fs::write(&output_path, html).map_err(|e| BuildError::WriteError(e.to_string()))?;

        tracing::debug!(
            "Rendered {} ({} sections) to {}",
            page.route.path(),
            page.sections.len(),
            output_path.display()
        );

        Ok(page.sections.len())
    }

    /// Write `404.html` at the output root.
    fn build_not_found(&self) -> Result<(), BuildError> {
        let context = self.context(
            "Página não encontrada",
            "O endereço acessado não existe.",
            String::new(),
            None,
        );

        let html = self
            .templates
            .render_page("404.html", &context)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        fs::write(self.config.output_dir.join("404.html"), html)
            .map_err(|e| BuildError::WriteError(e.to_string()))
    }

    /// Generate static assets. Returns the number of public files copied.
    fn generate_assets(&self, pages: &[Page]) -> Result<usize, BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        // Copy the public directory first so generated files win on a clash
        let public_dir = &self.config.public_dir;
        let copied = if public_dir.is_dir() {
            for name in GENERATED_ASSETS {
                if public_dir.join(name).exists() {
                    tracing::warn!(
                        "{} is replaced by the generated assets/{}",
                        public_dir.join(name).display(),
                        name
                    );
                }
            }
            AssetPipeline::copy_tree(public_dir, &assets_dir)
                .map_err(|e| BuildError::WriteError(e.to_string()))?
        } else {
            tracing::warn!("Public directory not found: {}", public_dir.display());
            0
        };

        // Generate main CSS
        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or_else(|e| {
                tracing::warn!("Skipping CSS minification: {}", e);
                css
            })
        } else {
            css
        };
        fs::write(assets_dir.join("main.css"), css)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let js = AssetPipeline::generate_js();
        fs::write(assets_dir.join("main.js"), js)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        // Copy configured stylesheets
        for style_path in &self.config.styles {
            let name = stylesheet_name(style_path);
            if is_generated_asset(name) {
                tracing::warn!(
                    "Skipping stylesheet {}: assets/{} is generated",
                    style_path,
                    name
                );
                continue;
            }

            let source_path = PathBuf::from(style_path);
            if source_path.exists() {
                let content = fs::read_to_string(&source_path).map_err(|e| {
                    BuildError::ReadError(format!("Failed to read stylesheet: {}", e))
                })?;
                fs::write(assets_dir.join(name), content)
                    .map_err(|e| BuildError::WriteError(e.to_string()))?;
                tracing::info!("Copied stylesheet from {}", style_path);
            } else {
                tracing::warn!("Stylesheet not found: {}", style_path);
            }
        }

        // Pages still build when an image is missing; the browser shows alt text.
        for page in pages {
            for asset in &page.assets {
                if !public_dir.join(asset).is_file() {
                    tracing::warn!(
                        "Missing asset {} referenced by {}",
                        asset,
                        page.route.path()
                    );
                }
            }
        }

        Ok(copied)
    }

    /// Generate search index.
    fn generate_search_index(&self, pages: &[Page]) -> Result<(), BuildError> {
        let index: Vec<serde_json::Value> = pages
            .iter()
            .map(|page| {
                serde_json::json!({
                    "title": page.title,
                    "description": page.description,
                    "url": page.route.path(),
                })
            })
            .collect();

        let json = serde_json::to_string_pretty(&index)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        fs::write(self.config.output_dir.join("search-index.json"), json)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Generate sitemap.
    fn generate_sitemap(&self, pages: &[Page]) -> Result<(), BuildError> {
        let site_url = self.config.site_url.trim_end_matches('/');

        let urls: Vec<String> = pages
            .iter()
            .map(|page| {
                format!(
                    "  <url>\n    <loc>{}{}</loc>\n  </url>",
                    site_url,
                    page.route.path()
                )
            })
            .collect();

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
            urls.join("\n")
        );

        fs::write(self.config.output_dir.join("sitemap.xml"), sitemap)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        // Also generate robots.txt
        let robots = format!(
            "User-agent: *\nAllow: /\nSitemap: {}/sitemap.xml",
            site_url
        );
        fs::write(self.config.output_dir.join("robots.txt"), robots)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }
}

/// File name a configured stylesheet is published under.
fn stylesheet_name(path: &str) -> &str {
    std::path::Path::new(path)
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or("style.css")
}

fn is_generated_asset(name: &str) -> bool {
    GENERATED_ASSETS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config(root: &std::path::Path) -> BuildConfig {
        BuildConfig {
            output_dir: root.join("dist"),
            public_dir: root.join("public"),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn builds_every_page() {
        let temp = tempdir().unwrap();
        let config = config(temp.path());
        let out = config.output_dir.clone();

        let result = StaticBuilder::new(config).unwrap().build().await.unwrap();

        assert_eq!(result.pages, 3);
        assert_eq!(result.sections, 14);
        assert!(out.join("sobre/index.html").exists());
        assert!(out.join("servicos/index.html").exists());
        assert!(out.join("politica-de-privacidade/index.html").exists());
        assert!(out.join("404.html").exists());
        assert!(out.join("assets/main.css").exists());
        assert!(out.join("assets/main.js").exists());
    }

    #[tokio::test]
    async fn wraps_pages_in_layout() {
        let temp = tempdir().unwrap();
        let config = config(temp.path());
        let out = config.output_dir.clone();

        StaticBuilder::new(config).unwrap().build().await.unwrap();

        let about = fs::read_to_string(out.join("sobre/index.html")).unwrap();
        assert!(about.starts_with("<!DOCTYPE html>"));
        assert!(about.contains("<title>Sobre Nós | Exata Contabilidade</title>"));
        assert!(about.contains(r#"<a href="/sobre" aria-current="page">Sobre</a>"#));
        assert!(about.contains("Pronto para fazer parte da nossa história?"));
    }

    #[tokio::test]
    async fn generates_sitemap_and_robots() {
        let temp = tempdir().unwrap();
        let config = BuildConfig {
            site_url: "https://exemplo.com.br/".to_string(),
            ..config(temp.path())
        };
        let out = config.output_dir.clone();

        StaticBuilder::new(config).unwrap().build().await.unwrap();

        let sitemap = fs::read_to_string(out.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://exemplo.com.br/sobre</loc>"));
        assert!(sitemap.contains("<loc>https://exemplo.com.br/politica-de-privacidade</loc>"));

        let robots = fs::read_to_string(out.join("robots.txt")).unwrap();
        assert!(robots.ends_with("Sitemap: https://exemplo.com.br/sitemap.xml"));
    }

    #[tokio::test]
    async fn generates_search_index() {
        let temp = tempdir().unwrap();
        let config = config(temp.path());
        let out = config.output_dir.clone();

        StaticBuilder::new(config).unwrap().build().await.unwrap();

        let index = fs::read_to_string(out.join("search-index.json")).unwrap();
        let entries: Vec<serde_json::Value> = serde_json::from_str(&index).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["url"], "/sobre");
        assert_eq!(entries[0]["title"], "Sobre Nós");
    }

    #[tokio::test]
    async fn copies_public_files() {
        let temp = tempdir().unwrap();
        let config = config(temp.path());
        let out = config.output_dir.clone();

        let images = config.public_dir.join("images");
        fs::create_dir_all(&images).unwrap();
        fs::write(images.join("sobre-escritorio.jpg"), b"jpg").unwrap();
        fs::write(images.join("sobre-equipe.jpg"), b"jpg").unwrap();

        let result = StaticBuilder::new(config).unwrap().build().await.unwrap();

        assert_eq!(result.assets, 2);
        assert!(out.join("assets/images/sobre-equipe.jpg").exists());
    }

    #[test]
    fn missing_public_dir_only_warns() {
        let temp = tempdir().unwrap();
        let config = config(temp.path());

        let builder = StaticBuilder::new(config).unwrap();
        let result = tokio_test::block_on(builder.build()).unwrap();

        assert_eq!(result.assets, 0);
    }

    #[tokio::test]
    async fn skips_minification_when_disabled() {
        let temp = tempdir().unwrap();
        let config = BuildConfig {
            minify: false,
            ..config(temp.path())
        };
        let out = config.output_dir.clone();

        StaticBuilder::new(config).unwrap().build().await.unwrap();

        let css = fs::read_to_string(out.join("assets/main.css")).unwrap();
        assert_eq!(css, AssetPipeline::generate_css());
    }

    #[tokio::test]
    async fn generated_assets_win_over_public_files() {
        let temp = tempdir().unwrap();
        let config = BuildConfig {
            minify: false,
            ..config(temp.path())
        };
        let out = config.output_dir.clone();

        fs::create_dir_all(&config.public_dir).unwrap();
        fs::write(config.public_dir.join("main.css"), "body { color: red }").unwrap();
        fs::write(config.public_dir.join("main.js"), "alert(1)").unwrap();

        StaticBuilder::new(config).unwrap().build().await.unwrap();

        let css = fs::read_to_string(out.join("assets/main.css")).unwrap();
        let js = fs::read_to_string(out.join("assets/main.js")).unwrap();
        assert_eq!(css, AssetPipeline::generate_css());
        assert_eq!(js, AssetPipeline::generate_js());
    }

    #[tokio::test]
    async fn skips_stylesheet_named_like_generated_asset() {
        let temp = tempdir().unwrap();
        let brand = temp.path().join("brand");
        fs::create_dir_all(&brand).unwrap();
        fs::write(brand.join("main.css"), "body { color: red }").unwrap();
        fs::write(brand.join("extra.css"), ".x { color: blue }").unwrap();

        let config = BuildConfig {
            minify: false,
            styles: vec![
                brand.join("main.css").display().to_string(),
                brand.join("extra.css").display().to_string(),
            ],
            ..config(temp.path())
        };
        let out = config.output_dir.clone();

        StaticBuilder::new(config).unwrap().build().await.unwrap();

        let css = fs::read_to_string(out.join("assets/main.css")).unwrap();
        assert_eq!(css, AssetPipeline::generate_css());
        assert!(out.join("assets/extra.css").exists());

        let about = fs::read_to_string(out.join("sobre/index.html")).unwrap();
        assert_eq!(about.matches(r#"href="/assets/main.css""#).count(), 1);
        assert!(about.contains(r#"href="/assets/extra.css""#));
    }

    #[tokio::test]
    async fn reports_routes_left_to_host() {
        let temp = tempdir().unwrap();
        let config = config(temp.path());
        let out = config.output_dir.clone();

        let result = StaticBuilder::new(config).unwrap().build().await.unwrap();

        assert_eq!(result.host_routes, [Route::Home, Route::Contact]);
        assert!(!out.join("contato/index.html").exists());
    }

    #[test]
    fn home_route_maps_to_root_index() {
        let builder = StaticBuilder::new(BuildConfig::default()).unwrap();

        assert_eq!(
            builder.output_path(Route::Home),
            PathBuf::from("dist/index.html")
        );
        assert_eq!(
            builder.output_path(Route::About),
            PathBuf::from("dist/sobre/index.html")
        );
    }

    #[test]
    fn navigation_marks_only_current_route() {
        let builder = StaticBuilder::new(BuildConfig::default()).unwrap();

        let nav = builder.navigation(Some(Route::Services));
        let active: Vec<_> = nav
            .iter()
            .filter(|n| n.active)
            .map(|n| n.path.as_str())
            .collect();
        assert_eq!(active, ["/servicos"]);

        assert!(builder.navigation(None).iter().all(|n| !n.active));
    }
}
