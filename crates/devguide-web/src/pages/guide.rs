use leptos::prelude::*;

use crate::components::{CommandStep, Section};
use crate::content::GUIDE;

/// The setup guide itself: header, prerequisites, the numbered command
/// sections, footer. All text comes from [`crate::content::GUIDE`].
#[component]
pub fn GuidePage() -> impl IntoView {
    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8 md:py-12">
            <header class="mb-8 text-center">
                <h1 class="text-xl font-bold mb-2">
                    {format!("\u{2500}\u{2524} {} \u{251C}\u{2500}", GUIDE.title)}
                </h1>
                <div class="text-[var(--ink-light)] mt-2">{GUIDE.tagline}</div>
            </header>

            <Section id="prerequisites" title="0. Prerequisites" intro=GUIDE.prerequisites_intro>
                <ul class="list-none space-y-2">
                    {GUIDE.prerequisites.iter().map(|p| view! {
                        <li>
                            "\u{2022} " <strong>{p.name}</strong> ": " {p.detail}
                            " (check with "
                            <code class="text-sm bg-[var(--rule)] px-1">{p.check_command}</code>
                            ")"
                        </li>
                    }).collect_view()}
                </ul>
                <p class="mt-4 text-[var(--ink-light)]">{GUIDE.prerequisites_outro}</p>
            </Section>

            {GUIDE.sections.iter().map(|section| view! {
                <Section id=section.id title=section.title intro=section.intro>
                    {section.steps.iter().map(|step| view! {
                        <CommandStep step=step />
                    }).collect_view()}
                </Section>
            }).collect_view()}

            <footer class="mt-8 pt-4 border-t border-dashed border-[var(--rule)] text-center text-[var(--ink-light)] text-sm">
                <p class="mb-1">{GUIDE.footer_copyright}</p>
                <p>{GUIDE.footer_note}</p>
            </footer>
        </main>
    }
}
