//! Hero section component

use leptos::*;
use crate::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Upload Your Model"</h1>
            <p class="subtitle">
                "Share your AI creations with the world on " {APP_NAME}
            </p>
        </div>
    }
}
