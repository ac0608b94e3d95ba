//! Top navigation bar

use leptos::*;
use crate::{APP_NAME, DASHBOARD_PATH, UPLOAD_PATH};

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="/" class="logo">{APP_NAME}</a>
                <span class="badge">"Model Hub"</span>
            </div>
            <div class="header-right">
                <a href=DASHBOARD_PATH class="nav-link">"Dashboard"</a>
                <a href=UPLOAD_PATH class="nav-link active">"Upload"</a>
            </div>
        </header>
    }
}
