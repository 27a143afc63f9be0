use leptos::prelude::*;

use crate::copy_state::CopyFeedback;

/// A button that copies a command to the clipboard with visual feedback.
///
/// Reads and writes the shared [`CopyFeedback`] tracker from context, so
/// each button's "copied" flash is independent of every other button's.
#[component]
pub fn CopyButton(
    /// The text to copy when clicked
    #[prop(into)]
    text: String,
    /// Stable id of the command block, keys the copied indicator
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let feedback = CopyFeedback::expect();
    let copied = {
        let id = id.clone();
        Memo::new(move |_| feedback.is_copied(&id))
    };
    let on_copy = move |_| feedback.record_copy(&id, &text);

    view! {
        <button
            type="button"
            on:click=on_copy
            aria-label="Copy command"
            class="px-3 py-1 border border-dashed border-[var(--rule)] hover:bg-[var(--rule)] transition-colors cursor-pointer select-none"
        >
            {move || if copied.get() { "Copied! \u{2713}" } else { "Copy" }}
        </button>
    }
}
