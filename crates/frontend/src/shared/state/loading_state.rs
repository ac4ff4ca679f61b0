use leptos::prelude::*;
use std::future::Future;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingState {
    pub is_loading: bool,
    pub message: Option<String>,
}

/// Busy flag behind the single global loading overlay
#[derive(Clone, Copy)]
pub struct LoadingStore {
    state: RwSignal<LoadingState>,
}

impl LoadingStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(LoadingState::default()),
        }
    }

    /// Overwrites the state. A message without the busy flag is dropped.
    pub fn set_loading(&self, is_loading: bool, message: Option<String>) {
        let message = if is_loading { message } else { None };
        log::debug!("loading: {} {:?}", is_loading, message);
        self.state.set(LoadingState { is_loading, message });
    }

    pub fn clear_loading(&self) {
        self.set_loading(false, None);
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|state| state.is_loading)
    }

    pub fn message(&self) -> Option<String> {
        self.state.with(|state| state.message.clone())
    }

    pub fn state(&self) -> LoadingState {
        self.state.get()
    }

    /// Runs `operation` with the overlay shown.
    ///
    /// The overlay is cleared when the operation settles either way, and
    /// also when the returned future is dropped before completion. The
    /// operation's output is returned untouched.
    pub async fn with_loading<F>(&self, message: Option<String>, operation: F) -> F::Output
    where
        F: Future,
    {
        self.set_loading(true, message);
        let _release = LoadingRelease(*self);
        operation.await
    }
}

impl Default for LoadingStore {
    fn default() -> Self {
        Self::new()
    }
}

struct LoadingRelease(LoadingStore);

impl Drop for LoadingRelease {
    fn drop(&mut self) {
        // the owning scope may already be disposed
        let _ = self.0.state.try_set(LoadingState::default());
    }
}

pub fn use_loading_state() -> LoadingStore {
    use_context::<LoadingStore>().expect("LoadingStore not provided in context")
}
