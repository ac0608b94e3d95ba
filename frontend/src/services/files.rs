//! Browser file handles.
//!
//! Drops and the file picker both hand us a `FileList`; only the name
//! and size of each entry are kept.

use web_sys::{DataTransfer, File, FileList};

use crate::SelectedFile;

impl From<&File> for SelectedFile {
    fn from(file: &File) -> Self {
        // Blob sizes come back as f64
        SelectedFile::new(file.name(), file.size() as u64)
    }
}

/// Collect every entry of a `FileList`, in order.
pub fn selected_files(list: &FileList) -> Vec<SelectedFile> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(|file| SelectedFile::from(&file))
        .collect()
}

/// Files carried by a drop event, empty when there are none.
pub fn dropped_files(transfer: Option<DataTransfer>) -> Vec<SelectedFile> {
    transfer
        .and_then(|dt| dt.files())
        .map(|list| selected_files(&list))
        .unwrap_or_default()
}
