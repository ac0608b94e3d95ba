//! Model Upload - Frontend Rust/Leptos Application
//!
//! A WebAssembly page for uploading AI models to Neural Nexus.
//! The upload itself is simulated in the browser.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Navbar                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  UploadPage (owns UploadFlow + UploadTicker)                 │
//! │  ├── Hero                                                    │
//! │  ├── ModelDetailsForm, FileDropZone, ValidationPanel         │
//! │  ├── UploadProgress / UploadErrorPanel / submit button       │
//! │  └── SuccessScreen (replaces the form on success)            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (ModelMetadata, SelectedFile, AppError, etc.)
//! - [`flow`] - Upload state machine
//! - [`components`] - UI components
//! - [`services`] - Upload simulation, timer and browser file handles

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod flow;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Form
    ModelMetadata, ModelType, SelectedFile, UploadSummary,
    // Display
    StepStatus,
    // Messages
    MSG_FILES_REQUIRED, MSG_NAME_REQUIRED, MSG_UPLOAD_REJECTED,
    // Errors
    AppError, AppResult,
};

// State machine
pub use flow::{Tick, TickAction, UploadFlow, UploadState};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=format!("Upload Your Model | {}", APP_NAME)/>
        <Router>
            <Navbar/>
            <main>
                <Routes>
                    <Route path="/" view=UploadPage/>
                    <Route path=UPLOAD_PATH view=UploadPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
