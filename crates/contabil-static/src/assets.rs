//! Asset pipeline for CSS, JavaScript and static files.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Generate the main JavaScript file.
    pub fn generate_js() -> String {
        DEFAULT_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }

    /// Copy every file under `source` into `dest`, keeping relative paths.
    ///
    /// Returns the number of files copied.
    pub fn copy_tree(source: &Path, dest: &Path) -> io::Result<usize> {
        let mut copied = 0;

        for entry in WalkDir::new(source).follow_links(true) {
            let entry = entry.map_err(io::Error::other)?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(source).unwrap_or(path);
            let target = dest.join(relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &target)?;
            copied += 1;
        }

        Ok(copied)
    }
}

// Design tokens plus the utility and component classes emitted by the
// section templates.
const DEFAULT_CSS: &str = r#"/* Exata Contabilidade - site theme */

:root {
  --primary: #0f3d5e;
  --primary-hover: #0b2e47;
  --primary-foreground: #ffffff;
  --accent: #f2a93b;
  --accent-hover: #e0952a;
  --accent-foreground: #1f2933;
  --background: #f4f7fa;
  --foreground: #1f2933;
  --muted-foreground: #52606d;
  --border: #d9e2ec;
  --radius: 0.75rem;
  --container-width: 1200px;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans, "Inter", system-ui, -apple-system, sans-serif);
  background: #ffffff;
  color: var(--foreground);
  line-height: 1.6;
}

img {
  max-width: 100%;
  display: block;
}

a {
  color: inherit;
}

.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 1.5rem;
}

.section {
  padding: 5rem 0;
}

.text-center {
  text-align: center;
}

.items-center {
  align-items: center;
}

.justify-start {
  justify-content: flex-start;
}

.my-6 {
  margin-top: 1.5rem;
  margin-bottom: 1.5rem;
}

.my-8 {
  margin-top: 2rem;
  margin-bottom: 2rem;
}

.pt-0 {
  padding-top: 0;
}

/* Backgrounds */
.bg-white {
  background: #ffffff;
}

.bg-background {
  background: var(--background);
}

.bg-primary {
  background: var(--primary);
}

.bg-accent {
  background: var(--accent);
}

.text-on-primary {
  color: var(--primary-foreground);
}

.text-on-accent {
  color: var(--accent-foreground);
}

.text-accent {
  color: var(--accent);
}

/* Grid */
.grid {
  display: grid;
}

.grid-cols-1 {
  grid-template-columns: repeat(1, minmax(0, 1fr));
}

.gap-4 {
  gap: 1rem;
}

.gap-6 {
  gap: 1.5rem;
}

.gap-8 {
  gap: 2rem;
}

.gap-12 {
  gap: 3rem;
}

@media (min-width: 768px) {
  .md\:grid-cols-2 {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }
}

@media (min-width: 1024px) {
  .lg\:grid-cols-2 {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }

  .lg\:grid-cols-3 {
    grid-template-columns: repeat(3, minmax(0, 1fr));
  }

  .lg\:grid-cols-4 {
    grid-template-columns: repeat(4, minmax(0, 1fr));
  }

  .lg\:grid-cols-5 {
    grid-template-columns: repeat(5, minmax(0, 1fr));
  }
}

/* Section headings */
.section-heading {
  text-align: center;
  max-width: 720px;
  margin: 0 auto 3rem;
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  color: var(--primary);
}

.section-subtitle {
  font-size: 1.125rem;
  color: var(--muted-foreground);
}

.section-divider {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
}

.divider-bar {
  display: block;
  height: 4px;
  width: 3rem;
  border-radius: 9999px;
}

.divider-dot {
  display: block;
  height: 4px;
  width: 1rem;
  border-radius: 9999px;
}

/* Cards */
.card {
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 2rem;
  list-style: none;
  transition: box-shadow 0.2s, transform 0.2s;
}

.card:hover {
  box-shadow: 0 12px 24px rgba(15, 61, 94, 0.08);
  transform: translateY(-2px);
}

.card-icon {
  color: var(--primary);
  margin-bottom: 1rem;
}

.card-title {
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--primary);
  margin-bottom: 0.5rem;
}

.card-text {
  color: var(--muted-foreground);
}

.step-label {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  min-width: 2.5rem;
  height: 2.5rem;
  padding: 0 0.75rem;
  margin-bottom: 1rem;
  border-radius: 9999px;
  background: var(--accent);
  color: var(--accent-foreground);
  font-weight: 700;
}

/* Buttons */
.btn {
  display: inline-block;
  padding: 0.875rem 1.75rem;
  border-radius: var(--radius);
  border: 2px solid transparent;
  font-weight: 600;
  text-decoration: none;
  transition: background 0.15s, color 0.15s, border-color 0.15s;
}

.btn-primary {
  background: var(--primary);
  color: var(--primary-foreground);
}

.btn-primary:hover {
  background: var(--primary-hover);
}

.btn-accent {
  background: var(--accent);
  color: var(--accent-foreground);
}

.btn-accent:hover {
  background: var(--accent-hover);
}

.btn-outline-light {
  border-color: var(--primary-foreground);
  color: var(--primary-foreground);
}

.btn-outline-light:hover {
  background: var(--primary-foreground);
  color: var(--primary);
}

.btn-outline-dark {
  border-color: var(--primary);
  color: var(--primary);
}

.btn-outline-dark:hover {
  background: var(--primary);
  color: var(--primary-foreground);
}

/* Call to action */
.cta-title {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: 1rem;
}

.cta-text {
  font-size: 1.125rem;
  max-width: 640px;
  margin: 0 auto 2rem;
}

.cta-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
}

/* Checklists */
.documents-panel {
  border-radius: var(--radius);
  padding: 2.5rem;
}

.document-list,
.service-features {
  list-style: none;
}

.document-item,
.service-feature {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
}

.service-features {
  margin: 1.5rem 0;
}

.service-feature + .service-feature {
  margin-top: 0.5rem;
}

.check-glyph {
  flex-shrink: 0;
  margin-top: 0.2rem;
}

.document-note {
  margin-top: 2rem;
  padding: 1.25rem 1.5rem;
  border-left: 4px solid var(--accent);
  border-radius: 0.5rem;
  background: rgba(242, 169, 59, 0.12);
}

.document-note-title {
  display: block;
  color: var(--primary);
  margin-bottom: 0.25rem;
}

/* Hero */
.hero {
  position: relative;
  overflow: hidden;
  padding: 6rem 0 5rem;
}

.hero-image {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0.15;
}

.hero-content {
  position: relative;
}

.hero .divider-bar {
  background: var(--accent);
}

.hero-eyebrow {
  display: inline-block;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  font-size: 0.875rem;
  font-weight: 600;
  color: var(--accent);
  margin-bottom: 1rem;
}

.hero-title {
  font-size: 3rem;
  font-weight: 800;
  line-height: 1.15;
}

.hero-subtitle {
  font-size: 1.25rem;
  max-width: 720px;
  margin: 0 auto;
  opacity: 0.9;
}

/* About history */
.history-paragraph + .history-paragraph {
  margin-top: 1rem;
}

.rounded-image {
  border-radius: var(--radius);
  box-shadow: 0 20px 40px rgba(15, 61, 94, 0.15);
}

/* Privacy policy */
.policy-container {
  max-width: 860px;
}

.policy-updated {
  color: var(--muted-foreground);
  font-size: 0.875rem;
  margin-bottom: 2rem;
}

.policy-clause + .policy-clause {
  margin-top: 2.5rem;
}

.policy-clause-title {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--primary);
  margin-bottom: 0.75rem;
}

.policy-clause p {
  margin-bottom: 0.75rem;
}

.policy-items {
  padding-left: 1.5rem;
}

/* Header and navigation */
.site-header {
  position: sticky;
  top: 0;
  z-index: 50;
  background: #ffffff;
  border-bottom: 1px solid var(--border);
}

.header-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: 4.5rem;
}

.brand {
  font-weight: 800;
  font-size: 1.25rem;
  color: var(--primary);
  text-decoration: none;
}

.nav-list {
  display: flex;
  gap: 1.5rem;
  list-style: none;
}

.nav-item a {
  color: var(--muted-foreground);
  text-decoration: none;
  font-weight: 500;
}

.nav-item a:hover,
.nav-item.active a {
  color: var(--primary);
}

.menu-btn {
  display: none;
  background: none;
  border: none;
  font-size: 1.5rem;
  color: var(--primary);
  cursor: pointer;
}

/* Footer */
.site-footer {
  background: var(--primary);
  color: var(--primary-foreground);
  padding: 3rem 0;
}

.footer-inner {
  display: grid;
  gap: 1.5rem;
}

.footer-contact {
  list-style: none;
}

.footer-legal {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  font-size: 0.875rem;
  opacity: 0.8;
}

@media (max-width: 767px) {
  .menu-btn {
    display: block;
  }

  .site-nav {
    display: none;
    position: absolute;
    top: 4.5rem;
    left: 0;
    right: 0;
    background: #ffffff;
    border-bottom: 1px solid var(--border);
    padding: 1rem 1.5rem;
  }

  .site-nav.open {
    display: block;
  }

  .nav-list {
    flex-direction: column;
    gap: 0.75rem;
  }

  .hero-title {
    font-size: 2.25rem;
  }

  .section-title,
  .cta-title {
    font-size: 1.75rem;
  }
}
"#;

const DEFAULT_JS: &str = r#"// Exata Contabilidade - runtime JavaScript
(function() {
  'use strict';

  // Mobile menu toggle
  const menuBtn = document.querySelector('.menu-btn');
  const nav = document.querySelector('.site-nav');

  if (menuBtn && nav) {
    menuBtn.addEventListener('click', () => {
      const open = nav.classList.toggle('open');
      menuBtn.setAttribute('aria-expanded', String(open));
    });
  }
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn generates_css() {
        let css = AssetPipeline::generate_css();
        assert!(css.contains(":root"));
        assert!(css.contains("--primary"));
        assert!(css.contains(r".lg\:grid-cols-5"));
    }

    #[test]
    fn generates_js() {
        let js = AssetPipeline::generate_js();
        assert!(js.contains("addEventListener"));
        assert!(js.contains("aria-expanded"));
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.button {
    background-color: blue;
    padding: 10px;
}
        "#;

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".button"));
    }

    #[test]
    fn minifies_theme() {
        let minified = AssetPipeline::minify_css(&AssetPipeline::generate_css()).unwrap();

        assert!(minified.len() < AssetPipeline::generate_css().len());
        assert!(minified.contains("grid-cols-5"));
    }

    #[test]
    fn copies_nested_files() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("public");
        let dest = temp.path().join("dist/assets");

        fs::create_dir_all(source.join("images")).unwrap();
        fs::write(source.join("favicon.ico"), b"ico").unwrap();
        fs::write(source.join("images/logo.png"), b"png").unwrap();

        let copied = AssetPipeline::copy_tree(&source, &dest).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read(dest.join("images/logo.png")).unwrap(), b"png");
        assert!(dest.join("favicon.ico").exists());
    }
}
