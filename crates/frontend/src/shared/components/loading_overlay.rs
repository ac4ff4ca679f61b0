use leptos::prelude::*;
use thaw::*;

use crate::shared::state::use_loading_state;

/// The one full-viewport loading indicator. Mount it once, at the app root.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let loading = use_loading_state();

    view! {
        <style>
            ".loading-overlay {
                position: fixed;
                inset: 0;
                z-index: 1000;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 12px;
                background: rgba(255, 255, 255, 0.6);
            }
            .loading-overlay__message {
                font-size: 0.875rem;
                color: var(--colorNeutralForeground1, #242424);
            }"
        </style>
        <Show when=move || loading.is_loading()>
            <div class="loading-overlay" role="status" aria-live="polite">
                <Spinner />
                {move || loading.message().map(|message| view! {
                    <div class="loading-overlay__message">{message}</div>
                })}
            </div>
        </Show>
    }
}
