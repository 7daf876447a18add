//! Static site generator for the accounting office site.
//!
//! Renders every page composition into a deployable directory together with
//! the stylesheet, scripts, public files, sitemap and search index.

pub mod assets;
pub mod builder;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
