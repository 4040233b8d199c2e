//! Landing page: product pitch with calls to action and a sample conversion.

use maud::{Markup, html};

use crate::site::Route;
use crate::ui::components::{LinkSize, LinkVariant, card, link_button};

/// Claims listed under the calls to action.
pub const CLAIMS: [&str; 3] = [
    "HIPAA‑friendly design patterns",
    "Fast, minimalist server-rendered UI",
    "Pluggable backend URL",
];

/// Sample input and the two outputs the application produces for it.
pub const EXAMPLE: &str = "\
Input: \"45 y/o with intermittent chest pain...\"
→ SOAP: Subjective, Objective, Assessment, Plan
→ ICD‑10: R07.9 (Chest pain, unspecified)";

pub fn landing() -> Markup {
    html! {
        section class="py-16 sm:py-24" {
            div class="grid gap-12 lg:grid-cols-2 lg:items-center" {
                div class="space-y-6" {
                    h1 class="text-4xl sm:text-5xl font-bold leading-tight" {
                        "AI that drafts "
                        span class="underline decoration-foreground/40" { "SOAP notes" }
                        " in seconds."
                    }
                    p class="text-foreground/80 text-lg" {
                        "Paste patient transcripts or free‑form notes, and MedAI Clerk will \
                         structure them into clean, compliant SOAP documentation and suggest \
                         ICD‑10 codes."
                    }
                    div class="flex gap-4" {
                        (link_button(Route::Soap.path(), "Try it now", LinkVariant::Solid, LinkSize::Lg))
                        (link_button(Route::Features.path(), "See features", LinkVariant::Outline, LinkSize::Lg))
                    }
                    ul class="mt-6 grid gap-3 text-sm text-foreground/80" {
                        @for claim in CLAIMS {
                            li { "• " (claim) }
                        }
                    }
                }
                (card("p-6", html! {
                    pre class="text-xs overflow-auto leading-relaxed" { (EXAMPLE) }
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(html: &str) -> Vec<(&str, &str)> {
        html.split("<a href=\"")
            .skip(1)
            .map(|rest| {
                let href = rest.split('"').next().unwrap();
                let label = rest.split('>').nth(1).unwrap().split('<').next().unwrap();
                (href, label)
            })
            .collect()
    }

    #[test]
    fn has_exactly_two_calls_to_action() {
        let html = landing().into_string();
        assert_eq!(
            links(&html),
            [("/soap", "Try it now"), ("/features", "See features")]
        );
    }

    #[test]
    fn lists_three_claims() {
        let html = landing().into_string();
        assert_eq!(html.matches("<li>").count(), 3);
        assert!(html.contains("Pluggable backend URL"));
    }

    #[test]
    fn example_block_mentions_soap_and_code() {
        let html = landing().into_string();
        let start = html.find("<pre").unwrap();
        let end = html.find("</pre>").unwrap();
        let example = &html[start..end];
        assert!(example.contains("SOAP"));
        assert!(example.contains("R07.9"));
    }

    #[test]
    fn copy_keeps_non_breaking_hyphens() {
        let html = landing().into_string();
        assert!(html.contains("HIPAA\u{2011}friendly"));
        assert!(html.contains("free\u{2011}form"));
        assert_eq!(html.matches("ICD\u{2011}10").count(), 2);
        assert!(!html.contains("ICD-10"));
    }

    #[test]
    fn heading_emphasizes_soap_notes() {
        let html = landing().into_string();
        assert!(html.contains(r#"<span class="underline decoration-foreground/40">SOAP notes</span>"#));
    }
}
