//! Data-driven section templates for the accounting office site.
//!
//! Every section is a pure function of its configuration: build the value,
//! hand it to a [`SectionRenderer`] and get an HTML fragment back.

pub mod benefits;
pub mod cta;
pub mod divider;
pub mod documents;
pub mod glyph;
pub mod icons;
pub mod process;
pub mod render;
pub mod route;
pub mod services;
pub mod style;

pub use benefits::{Benefit, BenefitsSection};
pub use cta::CtaSection;
pub use divider::SectionDivider;
pub use documents::DocumentsRequired;
pub use glyph::Glyph;
pub use process::{ProcessStep, ProcessSteps};
pub use render::{RenderError, Section, SectionRenderer};
pub use route::Route;
pub use services::{ServiceItem, ServicesSection};
pub use style::{Background, BackgroundTokens, Columns, CtaTokens, CtaVariant};
