//! Glyph capability used by sections that show an icon per item.

/// Something that can draw itself as inline markup.
///
/// Sections receive glyphs as data (`&'static dyn Glyph`) and only ever ask
/// them to render at a size with a class, so any icon set can be plugged in.
pub trait Glyph: Send + Sync {
    /// Stable identifier, used for `data-icon` attributes and debugging.
    fn name(&self) -> &'static str;

    /// Render the glyph at `size` pixels with the given class attribute.
    fn render(&self, size: u32, class: &str) -> String;
}

impl std::fmt::Debug for dyn Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Glyph({})", self.name())
    }
}

/// Wrap outline path data in a 24x24 SVG element.
pub(crate) fn outline_svg(name: &str, size: u32, class: &str, body: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="{class}" data-icon="{name}" aria-hidden="true">{body}</svg>"#
    )
}
