//! Validation and upload error messages.

use leptos::*;
use crate::UploadFlow;

#[component]
pub fn ValidationPanel(flow: RwSignal<UploadFlow>) -> impl IntoView {
    view! {
        <Show
            when=move || flow.with(|f| !f.messages().is_empty())
            fallback=|| view! { }
        >
            <div class="error-list">
                <For
                    each=move || flow.with(|f| f.messages().iter().cloned().enumerate().collect::<Vec<_>>())
                    key=|(idx, message)| (*idx, message.clone())
                    children=|(_, message)| view! {
                        <div class="error-item">
                            <span class="error-icon">"⚠️"</span>
                            <span>{message}</span>
                        </div>
                    }
                />
            </div>
        </Show>
    }
}

/// Panel shown after a rejected upload, with a retry button.
#[component]
pub fn UploadErrorPanel(on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="error-panel">
            <div class="error-panel-icon">"❌"</div>
            <h3>"Upload Failed"</h3>
            <p class="error-panel-text">"Something went wrong with your upload."</p>
            <button class="retry-button" on:click=move |_| on_retry.call(())>
                "Try Again"
            </button>
        </div>
    }
}
