//! Signal plumbing shared by the four record section pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page owns an `RwSignal<SectionState<T>>`. These helpers wrap the
//! state transitions with the browser side effects: the confirm dialog
//! before deletes, the simulated submit delay and console logging.

use leptos::prelude::*;

use crate::state::registry::{Record, RecordId};
use crate::state::section::{Banner, SectionState};
use crate::util::{browser, clock};

/// Two-way binding between an input and one `String` slot of the draft.
#[derive(Clone, Copy)]
pub struct DraftBinding {
    pub value: Signal<String>,
    pub on_input: Callback<String>,
}

pub fn bind_text<T>(
    state: RwSignal<SectionState<T>>,
    get: fn(&T::Draft) -> &String,
    set: fn(&mut T::Draft) -> &mut String,
) -> DraftBinding
where
    T: Record + Send + Sync + 'static,
    T::Draft: Send + Sync + 'static,
{
    DraftBinding {
        value: Signal::derive(move || state.with(|s| get(&s.draft).clone())),
        on_input: Callback::new(move |value: String| state.update(|s| *set(&mut s.draft) = value)),
    }
}

pub fn search_binding<T>(state: RwSignal<SectionState<T>>) -> DraftBinding
where
    T: Record + Send + Sync + 'static,
    T::Draft: Send + Sync + 'static,
{
    DraftBinding {
        value: Signal::derive(move || state.with(|s| s.search.clone())),
        on_input: Callback::new(move |term: String| state.update(|s| s.search = term)),
    }
}

pub fn show_error<T>(state: RwSignal<SectionState<T>>, text: String)
where
    T: Record + Send + Sync + 'static,
    T::Draft: Send + Sync + 'static,
{
    state.update(|s| s.banner = Some(Banner::Error(text)));
}

pub fn open_edit<T>(state: RwSignal<SectionState<T>>, id: RecordId)
where
    T: Record + Send + Sync + 'static,
    T::Draft: Send + Sync + 'static,
{
    if state.try_update(|s| s.open_edit(id)) != Some(true) {
        log::warn!("edit requested for missing record {id}");
    }
}

/// Validate, wait out the section's simulated delay, then apply the draft.
pub fn submit<T>(state: RwSignal<SectionState<T>>)
where
    T: Record + Send + Sync + 'static,
    T::Draft: Send + Sync + 'static,
{
    if state.with_untracked(|s| s.busy) {
        return;
    }
    match state.try_update(SectionState::begin_submit) {
        Some(Ok(())) => {}
        Some(Err(err)) => {
            log::warn!("form rejected: {err}");
            return;
        }
        None => return,
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        browser::simulated_delay(T::SUBMIT_DELAY_MS).await;
        finish_submit(state);
    });
    #[cfg(not(feature = "hydrate"))]
    finish_submit(state);
}

fn finish_submit<T>(state: RwSignal<SectionState<T>>)
where
    T: Record + Send + Sync + 'static,
    T::Draft: Send + Sync + 'static,
{
    match state.try_update(|s| s.finish_submit(clock::now_millis())) {
        Some(Ok(Some(record))) => log::info!("saved record {}", record.id()),
        Some(Ok(None)) => log::debug!("pending submit dropped"),
        Some(Err(err)) => log::warn!("save failed: {err}"),
        None => {}
    }
}

/// Delete after the user confirms; declining leaves everything untouched.
pub fn delete<T>(state: RwSignal<SectionState<T>>, id: RecordId)
where
    T: Record + Send + Sync + 'static,
    T::Draft: Send + Sync + 'static,
{
    if !browser::confirm(T::MESSAGES.confirm_delete) {
        return;
    }
    match state.try_update(|s| s.delete(id)) {
        Some(Ok(record)) => log::info!("deleted record {}", record.id()),
        Some(Err(err)) => log::warn!("delete failed: {err}"),
        None => {}
    }
}
