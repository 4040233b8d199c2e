//! Card containers.

use maud::{Markup, html};

/// Bordered card container.
///
/// # Example
///
/// ```rust,ignore
/// card("p-6", html! { pre { "..." } })
/// ```
pub fn card(class: &str, content: Markup) -> Markup {
    let classes = format!("rounded-2xl border bg-card/40 {class}");

    html! {
        div class=(classes.trim_end()) {
            (content)
        }
    }
}

/// Titled card with a short description.
pub fn feature_card(title: &str, description: &str) -> Markup {
    card(
        "p-5",
        html! {
            h3 class="font-semibold mb-2" { (title) }
            p class="text-sm text-foreground/70" { (description) }
        },
    )
}
