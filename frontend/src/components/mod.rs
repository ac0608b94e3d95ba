//! UI Components for the model upload page.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Navbar`] - Top navigation
//! - [`Hero`] - Page title and tagline
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadPage`] - Owns the upload flow and the progress timer
//! - [`ModelDetailsForm`] - Name, type and description inputs
//! - [`FileDropZone`] - File selection with drag & drop
//! - [`ValidationPanel`] / [`UploadErrorPanel`] - Error display and retry
//! - [`UploadProgress`] - Progress bar of the running upload
//! - [`SuccessScreen`] / [`SuccessStep`] - Post-upload screen

mod navbar;
mod hero;
mod footer;
mod model_details;
mod upload;
mod messages;
mod progress;
mod success;
mod upload_page;

pub use navbar::*;
pub use hero::*;
pub use footer::*;
pub use model_details::*;
pub use upload::*;
pub use messages::*;
pub use progress::*;
pub use success::*;
pub use upload_page::*;
