//! Style variants and the token bundles they resolve to.
//!
//! Each variant is looked up once per render in a constant table. Templates
//! only ever see the resolved class strings.

use crate::render::RenderError;

/// Visual treatment of a call-to-action banner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CtaVariant {
    #[default]
    Default,
    Accent,
}

/// Classes applied to a call-to-action banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtaTokens {
    pub section: &'static str,
    pub primary_button: &'static str,
    pub secondary_button: &'static str,
    /// Divider colors that stay visible on `section`.
    pub divider_bar: &'static str,
    pub divider_dot: &'static str,
}

const DEFAULT_CTA: CtaTokens = CtaTokens {
    section: "bg-primary text-on-primary",
    primary_button: "btn btn-accent",
    secondary_button: "btn btn-outline-light",
    divider_bar: "bg-accent",
    divider_dot: "bg-white",
};

const ACCENT_CTA: CtaTokens = CtaTokens {
    section: "bg-accent text-on-accent",
    primary_button: "btn btn-primary",
    secondary_button: "btn btn-outline-dark",
    divider_bar: "bg-primary",
    divider_dot: "bg-white",
};

impl CtaVariant {
    pub fn tokens(self) -> CtaTokens {
        match self {
            CtaVariant::Default => DEFAULT_CTA,
            CtaVariant::Accent => ACCENT_CTA,
        }
    }
}

/// Background shade of a section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Background {
    #[default]
    White,
    Background,
}

/// Outer section class and the complementary class for panels inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundTokens {
    pub section: &'static str,
    pub panel: &'static str,
}

const WHITE: &str = "bg-white";
const MUTED: &str = "bg-background";

impl Background {
    /// Panels always take the other shade of the pair.
    pub fn tokens(self) -> BackgroundTokens {
        match self {
            Background::White => BackgroundTokens {
                section: WHITE,
                panel: MUTED,
            },
            Background::Background => BackgroundTokens {
                section: MUTED,
                panel: WHITE,
            },
        }
    }
}

/// Column count of the step grid at the large breakpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Columns {
    #[default]
    Four,
    Five,
}

impl Columns {
    pub fn grid_class(self) -> &'static str {
        match self {
            Columns::Four => "lg:grid-cols-4",
            Columns::Five => "lg:grid-cols-5",
        }
    }
}

impl TryFrom<u8> for Columns {
    type Error = RenderError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Columns::Four),
            5 => Ok(Columns::Five),
            other => Err(RenderError::InvalidColumns(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn classes(tokens: &CtaTokens) -> Vec<&'static str> {
        [tokens.section, tokens.primary_button, tokens.secondary_button]
            .iter()
            .flat_map(|s| s.split_whitespace())
            .filter(|class| *class != "btn")
            .collect()
    }

    #[test]
    fn cta_variants_do_not_overlap() {
        let default = CtaVariant::Default.tokens();
        let accent = CtaVariant::Accent.tokens();

        assert_ne!(default.section, accent.section);
        assert_ne!(default.primary_button, accent.primary_button);
        assert_ne!(default.secondary_button, accent.secondary_button);

        let accent_classes = classes(&accent);
        for class in classes(&default) {
            assert!(!accent_classes.contains(&class), "shared class {class}");
        }
    }

    #[test]
    fn default_cta_variant_is_default() {
        assert_eq!(CtaVariant::default().tokens(), CtaVariant::Default.tokens());
    }

    #[test]
    fn backgrounds_swap() {
        let white = Background::White.tokens();
        let muted = Background::Background.tokens();

        assert_eq!(white.section, muted.panel);
        assert_eq!(white.panel, muted.section);
        assert_ne!(white.section, white.panel);
        assert_ne!(muted.section, muted.panel);
    }

    #[test]
    fn columns_accept_four_and_five_only() {
        assert_eq!(Columns::try_from(4).unwrap(), Columns::Four);
        assert_eq!(Columns::try_from(5).unwrap(), Columns::Five);
        assert!(matches!(
            Columns::try_from(3),
            Err(RenderError::InvalidColumns(3))
        ));
        assert!(Columns::try_from(6).is_err());
    }

    #[test]
    fn column_classes_differ() {
        assert_ne!(Columns::Four.grid_class(), Columns::Five.grid_class());
        assert_eq!(Columns::default(), Columns::Four);
    }
}
