//! Transient "copied" feedback for the guide's command blocks.
//!
//! Each command block has a stable id. A successful copy marks that id as
//! recently copied and the mark reverts on its own after a fixed delay.
//! Blocks are independent: one block's timer never touches another's state.

use leptos::prelude::*;
use std::collections::HashMap;

/// How long a block shows "copied" feedback after a successful copy.
pub const COPIED_RESET_MS: u32 = 2_500;

/// Per-block copied flags, each with a generation counter.
///
/// The generation lets a delayed reversion detect that a newer copy of the
/// same block superseded it: copying again restarts the display window
/// instead of being cut short when the older timer fires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyStatusMap {
    entries: HashMap<String, Entry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    copied: bool,
    generation: u64,
}

impl CopyStatusMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Is this block currently showing copied feedback? Unknown ids read `false`.
    pub fn is_copied(&self, id: &str) -> bool {
        self.entries.get(id).is_some_and(|e| e.copied)
    }

    /// Mark a block as just copied. Returns the generation to hand back to
    /// [`revert`](Self::revert) once the feedback window elapses.
    pub fn mark_copied(&mut self, id: &str) -> u64 {
        let entry = self.entries.entry(id.to_owned()).or_insert(Entry {
            copied: false,
            generation: 0,
        });
        entry.copied = true;
        entry.generation += 1;
        entry.generation
    }

    /// Clear the copied flag, unless a newer copy superseded `generation`.
    pub fn revert(&mut self, id: &str, generation: u64) {
        if let Some(entry) = self.entries.get_mut(id)
            && entry.generation == generation
        {
            entry.copied = false;
        }
    }
}

/// Reactive copy-status tracker, shared through context by the page root.
#[derive(Clone, Copy)]
pub struct CopyFeedback {
    states: RwSignal<CopyStatusMap>,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new()
    }
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self {
            states: RwSignal::new(CopyStatusMap::new()),
        }
    }

    /// Provide a fresh tracker to the component tree below the caller.
    pub fn provide() {
        provide_context(Self::new());
    }

    /// Grab the tracker provided by the page root.
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Reactive read of a block's copied flag.
    pub fn is_copied(&self, id: &str) -> bool {
        self.states.with(|m| m.is_copied(id))
    }

    /// Write `text` to the system clipboard and flash the block's indicator.
    ///
    /// A failed clipboard write is logged and otherwise swallowed: the
    /// indicator never flips, nothing propagates, and the user can retry.
    pub fn record_copy(&self, id: &str, text: &str) {
        #[cfg(feature = "hydrate")]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::{JsFuture, spawn_local};

            let Some(window) = web_sys::window() else {
                return;
            };
            let clipboard = window.navigator().clipboard();
            let states = self.states;
            let id = id.to_owned();
            let text = text.to_owned();

            spawn_local(async move {
                match JsFuture::from(clipboard.write_text(&text)).await {
                    Ok(_) => {
                        // try_update: the page may be torn down before the
                        // delay fires; a stale callback must be a no-op.
                        let Some(generation) = states.try_update(|m| m.mark_copied(&id)) else {
                            return;
                        };
                        TimeoutFuture::new(COPIED_RESET_MS).await;
                        states.try_update(|m| m.revert(&id, generation));
                    }
                    Err(err) => {
                        leptos::logging::error!("Failed to copy command: {err:?}");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            // Interactivity only exists in the hydrated client.
            let _ = (id, text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ids_read_false() {
        let m = CopyStatusMap::new();
        assert!(!m.is_copied("db-step1"));
        assert!(!m.is_copied(""));
    }

    #[test]
    fn mark_then_revert() {
        let mut m = CopyStatusMap::new();
        let generation = m.mark_copied("db-step1");
        assert!(m.is_copied("db-step1"));
        m.revert("db-step1", generation);
        assert!(!m.is_copied("db-step1"));
    }

    #[test]
    fn blocks_are_independent() {
        let mut m = CopyStatusMap::new();
        let gen_a = m.mark_copied("db-step1");
        m.mark_copied("db-step2");
        assert!(m.is_copied("db-step1"));
        assert!(m.is_copied("db-step2"));

        m.revert("db-step1", gen_a);
        assert!(!m.is_copied("db-step1"));
        assert!(m.is_copied("db-step2"), "reverting A must not touch B");
    }

    #[test]
    fn recopy_restarts_the_window() {
        let mut m = CopyStatusMap::new();
        let first = m.mark_copied("db-step1");
        let second = m.mark_copied("db-step1");
        assert_ne!(first, second);

        // The first timer fires after the second copy: stale, must not clear.
        m.revert("db-step1", first);
        assert!(m.is_copied("db-step1"));

        // The second timer clears normally.
        m.revert("db-step1", second);
        assert!(!m.is_copied("db-step1"));
    }

    #[test]
    fn revert_of_unknown_id_is_noop() {
        let mut m = CopyStatusMap::new();
        m.revert("never-copied", 1);
        assert!(!m.is_copied("never-copied"));
        assert_eq!(m, CopyStatusMap::new());
    }
}
