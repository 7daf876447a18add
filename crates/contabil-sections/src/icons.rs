//! Outline icon set (24x24, stroke based).

use crate::glyph::{outline_svg, Glyph};

macro_rules! outline_icon {
    ($(#[$meta:meta])* $ty:ident, $name:literal, $body:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $ty;

        impl Glyph for $ty {
            fn name(&self) -> &'static str {
                $name
            }

            fn render(&self, size: u32, class: &str) -> String {
                outline_svg($name, size, class, $body)
            }
        }
    };
}

outline_icon!(
    /// Checkmark inside a circle. Fixed bullet for checklists.
    CheckCircle,
    "check-circle",
    r#"<path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/><polyline points="22 4 12 14.01 9 11.01"/>"#
);

outline_icon!(
    Shield,
    "shield",
    r#"<path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/>"#
);

outline_icon!(
    Clock,
    "clock",
    r#"<circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/>"#
);

outline_icon!(
    Users,
    "users",
    r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#
);

outline_icon!(
    UserCheck,
    "user-check",
    r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><polyline points="16 11 18 13 22 9"/>"#
);

outline_icon!(
    Target,
    "target",
    r#"<circle cx="12" cy="12" r="10"/><circle cx="12" cy="12" r="6"/><circle cx="12" cy="12" r="2"/>"#
);

outline_icon!(
    Award,
    "award",
    r#"<circle cx="12" cy="8" r="6"/><path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"/>"#
);

outline_icon!(
    Heart,
    "heart",
    r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>"#
);

outline_icon!(
    FileText,
    "file-text",
    r#"<path d="M14.5 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7.5L14.5 2z"/><polyline points="14 2 14 8 20 8"/><line x1="16" y1="13" x2="8" y2="13"/><line x1="16" y1="17" x2="8" y2="17"/><line x1="10" y1="9" x2="8" y2="9"/>"#
);

outline_icon!(
    Lock,
    "lock",
    r#"<rect x="3" y="11" width="18" height="11" rx="2" ry="2"/><path d="M7 11V7a5 5 0 0 1 10 0v4"/>"#
);

outline_icon!(
    Eye,
    "eye",
    r#"<path d="M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z"/><circle cx="12" cy="12" r="3"/>"#
);

outline_icon!(
    Mail,
    "mail",
    r#"<rect x="2" y="4" width="20" height="16" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
);

outline_icon!(
    Phone,
    "phone",
    r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#
);

outline_icon!(
    MessageCircle,
    "message-circle",
    r#"<path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z"/>"#
);

outline_icon!(
    Briefcase,
    "briefcase",
    r#"<rect x="2" y="7" width="20" height="14" rx="2" ry="2"/><path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>"#
);

outline_icon!(
    Calculator,
    "calculator",
    r#"<rect x="4" y="2" width="16" height="20" rx="2"/><line x1="8" y1="6" x2="16" y2="6"/><line x1="16" y1="14" x2="16" y2="18"/><path d="M16 10h.01"/><path d="M12 10h.01"/><path d="M8 10h.01"/><path d="M12 14h.01"/><path d="M8 14h.01"/><path d="M12 18h.01"/><path d="M8 18h.01"/>"#
);

outline_icon!(
    Building,
    "building",
    r#"<rect x="4" y="2" width="16" height="20" rx="2" ry="2"/><path d="M9 22v-4h6v4"/><path d="M8 6h.01"/><path d="M16 6h.01"/><path d="M12 6h.01"/><path d="M12 10h.01"/><path d="M12 14h.01"/><path d="M16 10h.01"/><path d="M16 14h.01"/><path d="M8 10h.01"/><path d="M8 14h.01"/>"#
);

outline_icon!(
    TrendingUp,
    "trending-up",
    r#"<polyline points="22 7 13.5 15.5 8.5 10.5 2 17"/><polyline points="16 7 22 7 22 13"/>"#
);

outline_icon!(
    Search,
    "search",
    r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#
);

outline_icon!(
    Send,
    "send",
    r#"<path d="m22 2-7 20-4-9-9-4Z"/><path d="M22 2 11 13"/>"#
);

/// Bullet drawn before checklist rows and service features.
pub(crate) fn check_mark() -> String {
    CheckCircle.render(20, "check-glyph text-accent")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_carry_their_name() {
        let glyphs: [&dyn Glyph; 3] = [&CheckCircle, &Shield, &Calculator];
        let names: Vec<_> = glyphs.iter().map(|g| g.name()).collect();

        assert_eq!(names, ["check-circle", "shield", "calculator"]);
    }

    #[test]
    fn check_mark_is_the_check_circle() {
        assert!(check_mark().contains(r#"data-icon="check-circle""#));
    }

    #[test]
    fn renders_path_data() {
        let svg = Lock.render(24, "icon");

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("<rect"));
        assert!(svg.ends_with("</svg>"));
    }
}
