//! Secondary pages reachable from the header navigation, plus the 404 page.

use maud::{Markup, html};

use crate::config::SiteConfig;
use crate::site::Route;
use crate::ui::components::{LinkSize, LinkVariant, card, feature_card, link_button};

const FEATURES: [(&str, &str); 4] = [
    (
        "SOAP drafting",
        "Turns transcripts and free-form notes into Subjective, Objective, Assessment and Plan sections.",
    ),
    (
        "ICD-10 suggestions",
        "Proposes the most relevant ICD-10 codes for a note, each with a short justification.",
    ),
    (
        "Pluggable backend",
        "Point the application at any compatible backend URL, hosted or on-premises.",
    ),
    (
        "Review first",
        "Every draft stays editable; nothing is filed without a clinician signing off.",
    ),
];

pub fn features() -> Markup {
    html! {
        section class="py-16 space-y-8" {
            h1 class="text-3xl font-bold" { "Features" }
            div class="grid gap-4 md:grid-cols-2" {
                @for (title, description) in FEATURES {
                    (feature_card(title, description))
                }
            }
            (link_button(Route::Soap.path(), "Try it now", LinkVariant::Solid, LinkSize::Lg))
        }
    }
}

pub fn about(site: &SiteConfig) -> Markup {
    html! {
        section class="py-16 space-y-6 max-w-prose" {
            h1 class="text-3xl font-bold" { "About " (site.title) }
            p class="text-foreground/80" {
                (site.title) " helps clinicians spend less time on documentation. It drafts \
                 structured SOAP notes from visit transcripts and suggests ICD-10 codes, \
                 leaving the final say with the care team."
            }
            p class="text-foreground/80" {
                "Drafts are suggestions. Always review generated notes and codes before \
                 they enter a patient record."
            }
        }
    }
}

pub fn contact(site: &SiteConfig) -> Markup {
    let mailto = format!("mailto:{}", site.contact_email);

    html! {
        section class="py-16 space-y-6" {
            h1 class="text-3xl font-bold" { "Contact" }
            (card("p-6", html! {
                p class="text-foreground/80" {
                    "Questions, pilots or feedback: "
                    a href=(mailto) class="underline" { (site.contact_email) }
                }
            }))
        }
    }
}

pub fn not_found() -> Markup {
    html! {
        section class="flex flex-col items-center justify-center py-20" {
            h1 class="text-4xl font-bold mb-4" { "404" }
            p class="text-foreground/70 mb-6" { "Page not found" }
            (link_button(Route::Home.path(), "Go Home", LinkVariant::Solid, LinkSize::Lg))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_lists_every_capability() {
        let html = features().into_string();
        assert_eq!(html.matches("<h3").count(), FEATURES.len());
        assert!(html.contains("ICD-10 suggestions"));
    }

    #[test]
    fn contact_links_configured_address() {
        let site = SiteConfig {
            contact_email: "team@clinic.example".to_string(),
            ..SiteConfig::default()
        };
        let html = contact(&site).into_string();
        assert!(html.contains(r#"href="mailto:team@clinic.example""#));
    }

    #[test]
    fn about_uses_site_title() {
        let html = about(&SiteConfig::default()).into_string();
        assert!(html.contains("About MedAI Clerk"));
    }

    #[test]
    fn not_found_links_home() {
        let html = not_found().into_string();
        assert!(html.contains(">404<"));
        assert!(html.contains(r#"<a href="/""#));
    }
}
