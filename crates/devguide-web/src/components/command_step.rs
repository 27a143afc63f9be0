use leptos::prelude::*;

use super::CopyButton;
use crate::content;

/// One setup step: description, collapsible command panel with a copy
/// button, then optional note and expected-outcome callouts.
#[component]
pub fn CommandStep(step: &'static content::CommandStep) -> impl IntoView {
    // Deterministic initial state for SSR/hydration match.
    let (open, set_open) = signal(true);

    view! {
        <div id=step.id class="mb-8">
            <p class="mb-3">{step.description}</p>
            <div class="border border-dashed border-[var(--rule)]">
                <div class="flex items-center justify-between px-3 py-2 border-b border-dashed border-[var(--rule)]">
                    <button
                        type="button"
                        on:click=move |_| set_open.update(|o| *o = !*o)
                        aria-expanded=move || open.get().to_string()
                        aria-label="Toggle command"
                        class="font-bold text-sm uppercase tracking-wider cursor-pointer select-none"
                    >
                        {move || if open.get() { "\u{25BE} command" } else { "\u{25B8} command" }}
                    </button>
                    <CopyButton id=step.id text=step.command />
                </div>
                {move || open.get().then(|| view! {
                    <pre class="p-3 overflow-x-auto"><code>{step.command}</code></pre>
                })}
            </div>
            {step.note.map(|note| view! {
                <p class="mt-2 text-sm text-[var(--ink-light)] italic">
                    "\u{26A0} Note: " {note}
                </p>
            })}
            {step.expected_outcome.map(|outcome| view! {
                <div class="mt-3 p-3 border border-dashed border-[var(--rule)]">
                    <strong class="text-sm uppercase">"Expected outcome"</strong>
                    <p class="mt-1 text-sm">{outcome}</p>
                </div>
            })}
        </div>
    }
}
