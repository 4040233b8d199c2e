//! Call-to-action link styled as a button.

use maud::{Markup, html};

/// Link visual variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkVariant {
    /// Filled, inverted colors.
    Solid,
    /// Bordered with transparent fill.
    Outline,
    /// Text link, underlined on hover.
    Plain,
}

impl LinkVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Solid => "bg-foreground text-background",
            Self::Outline => "border hover:bg-foreground/5",
            Self::Plain => "hover:underline",
        }
    }
}

/// Link size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkSize {
    /// Compact, for the header.
    Sm,
    /// Hero call-to-action.
    Lg,
}

impl LinkSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "rounded-xl px-3 py-1.5",
            Self::Lg => "rounded-xl px-5 py-3 font-medium",
        }
    }
}

/// Anchor rendered with button styling.
///
/// # Example
///
/// ```rust,ignore
/// link_button("/soap", "Try it now", LinkVariant::Solid, LinkSize::Lg)
/// ```
pub fn link_button(href: &str, label: &str, variant: LinkVariant, size: LinkSize) -> Markup {
    let classes = match variant {
        LinkVariant::Plain => variant.classes().to_string(),
        _ => format!("{} {}", size.classes(), variant.classes()),
    };

    html! {
        a href=(href) class=(classes) { (label) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_link_carries_size_and_variant_classes() {
        let html = link_button("/soap", "Try it now", LinkVariant::Solid, LinkSize::Lg).into_string();
        assert_eq!(
            html,
            r#"<a href="/soap" class="rounded-xl px-5 py-3 font-medium bg-foreground text-background">Try it now</a>"#
        );
    }

    #[test]
    fn plain_link_ignores_size() {
        let html = link_button("/about", "About", LinkVariant::Plain, LinkSize::Sm).into_string();
        assert_eq!(html, r#"<a href="/about" class="hover:underline">About</a>"#);
    }

    #[test]
    fn label_is_escaped() {
        let html = link_button("/", "<b>", LinkVariant::Plain, LinkSize::Sm).into_string();
        assert!(html.contains("&lt;b&gt;"));
    }
}
