//! Services behind the upload page.
//!
//! # Services
//!
//! - [`simulator`] - Random stand-in for the network upload
//! - [`ticker`] - Repeating timer driving the simulation
//! - [`files`] - Conversion of browser `FileList`s into [`SelectedFile`](crate::SelectedFile)s

pub mod simulator;
pub mod ticker;
pub mod files;

pub use simulator::*;
pub use ticker::*;
pub use files::*;
