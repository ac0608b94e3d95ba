//! Footer component

use leptos::*;
use crate::{APP_NAME, DASHBOARD_PATH};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Copyright © 2025 " {APP_NAME} " • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href=DASHBOARD_PATH class="footer-link">"Dashboard"</a>
                <a href="https://github.com/neural-nexus" class="footer-link" target="_blank">
                    "GitHub"
                </a>
            </div>
        </footer>
    }
}
