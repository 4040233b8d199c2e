//! Page chrome: document head, sticky header navigation, content slot, footer.

use maud::{DOCTYPE, Markup, html};

use crate::config::SiteConfig;
use crate::site::{NAV_ENTRIES, NavStyle, Route};
use crate::ui::components::{LinkSize, LinkVariant, link_button};

/// Everything the chrome needs from outside a single page.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub site: &'a SiteConfig,
    /// Year printed in the footer.
    pub year: i32,
}

/// Title and canonical address of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    /// Prefixed to the site title; `None` shows the bare site title.
    pub name: Option<&'static str>,
    /// `None` for pages with no canonical address.
    pub route: Option<Route>,
}

impl PageMeta {
    pub const NOT_FOUND: Self = Self {
        name: Some("Not Found"),
        route: None,
    };
}

/// Wrap `content` in the full HTML document.
pub fn shell(ctx: &PageContext<'_>, page: PageMeta, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head { (head(ctx.site, page)) }
            body class="antialiased min-h-screen bg-background text-foreground" {
                (header(ctx.site))
                main class="mx-auto max-w-6xl px-4" { (content) }
                (footer(ctx))
            }
        }
    }
}

fn page_title(site: &SiteConfig, page: PageMeta) -> String {
    match page.name {
        Some(name) => format!("{name} - {}", site.title),
        None => site.title.clone(),
    }
}

fn head(site: &SiteConfig, page: PageMeta) -> Markup {
    let title = page_title(site, page);
    let canonical = page.route.and_then(|r| site.base_url.join(r.path()).ok());

    html! {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1";
        title { (title) }
        meta name="description" content=(site.description);
        meta property="og:title" content=(title);
        meta property="og:description" content=(site.description);
        meta property="og:type" content="website";
        @if let Some(canonical) = &canonical {
            meta property="og:url" content=(canonical.as_str());
            link rel="canonical" href=(canonical.as_str());
        }
        @if let Some(backend) = &site.backend_url {
            meta name="medai:backend-url" content=(backend.as_str());
        }
        link rel="stylesheet" href="/static/app.css";
    }
}

fn header(site: &SiteConfig) -> Markup {
    html! {
        header class="sticky top-0 z-40 border-b bg-background/70 backdrop-blur" {
            nav class="mx-auto max-w-6xl px-4 py-3 flex items-center justify-between" {
                a href=(Route::Home.path()) class="text-xl font-semibold" { (site.title) }
                div class="flex items-center gap-6 text-sm" {
                    @for entry in &NAV_ENTRIES {
                        (link_button(entry.route.path(), entry.label, nav_variant(entry.style), LinkSize::Sm))
                    }
                }
            }
        }
    }
}

fn nav_variant(style: NavStyle) -> LinkVariant {
    match style {
        NavStyle::Plain => LinkVariant::Plain,
        NavStyle::Pill => LinkVariant::Outline,
    }
}

fn footer(ctx: &PageContext<'_>) -> Markup {
    html! {
        footer class="border-t mt-16" {
            div class="mx-auto max-w-6xl px-4 py-8 text-sm text-foreground/70" {
                p { "© " (ctx.year) " " (ctx.site.title) ". All rights reserved." }
            }
        }
    }
}
