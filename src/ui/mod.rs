//! Server-rendered UI.
//!
//! Every page is a pure function from static copy (plus [`SiteConfig`]) to
//! [`maud::Markup`]; [`shell::shell`] wraps it in the shared chrome.
//!
//! [`SiteConfig`]: crate::config::SiteConfig

pub mod components;
pub mod landing;
pub mod pages;
pub mod shell;

use maud::Markup;

use crate::config::SiteConfig;
use crate::site::Route;
pub use shell::{PageContext, PageMeta};

/// Render a full document for one of the site's own routes.
///
/// Returns `None` for routes the site links to but does not serve.
pub fn render_route(ctx: &PageContext<'_>, route: Route) -> Option<Markup> {
    let (name, content) = route_content(ctx.site, route)?;
    let page = PageMeta {
        name,
        route: Some(route),
    };
    Some(shell::shell(ctx, page, content))
}

/// Render the 404 document.
pub fn render_not_found(ctx: &PageContext<'_>) -> Markup {
    shell::shell(ctx, PageMeta::NOT_FOUND, pages::not_found())
}

fn route_content(site: &SiteConfig, route: Route) -> Option<(Option<&'static str>, Markup)> {
    match route {
        Route::Home => Some((None, landing::landing())),
        Route::Features => Some((Some("Features"), pages::features())),
        Route::About => Some((Some("About"), pages::about(site))),
        Route::Contact => Some((Some("Contact"), pages::contact(site))),
        Route::Soap => None,
    }
}
