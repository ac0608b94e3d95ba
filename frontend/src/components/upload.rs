//! File selection with drag & drop support.
//!
//! Step 2 of the form. Dropped and picked files are appended to the
//! flow; nothing is read or sent anywhere.

use leptos::*;
use web_sys::{DragEvent, Event, HtmlInputElement};
use wasm_bindgen::JsCast;
use crate::services::{dropped_files, selected_files};
use crate::{SelectedFile, UploadFlow};

const FILE_INPUT_ID: &str = "fileInput";

#[component]
pub fn FileDropZone(flow: RwSignal<UploadFlow>) -> impl IntoView {
    let has_files = move || flow.with(|f| !f.files().is_empty());

    let add_files = move |files: Vec<SelectedFile>| {
        if files.is_empty() {
            return;
        }
        log::info!("📁 Added {} file(s)", files.len());
        flow.update(|f| f.add_files(files));
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        add_files(dropped_files(ev.data_transfer()));
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            add_files(selected_files(&list));
        }
        // Lets the same file be picked again
        input.set_value("");
    };

    // Buttons forward to the hidden input
    let open_picker = move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id(FILE_INPUT_ID) {
                    if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                        html_input.click();
                    }
                }
            }
        }
    };

    view! {
        <div class="form-step">
            <h2 class="step-title">
                <span class="step-number">"2"</span>
                "Upload Files"
            </h2>

            <div
                class="drop-zone"
                class:active=has_files
                on:dragover=|ev: DragEvent| ev.prevent_default()
                on:drop=on_drop
            >
                <Show
                    when=has_files
                    fallback=move || view! {
                        <div class="drop-empty">
                            <div class="upload-icon">"📤"</div>
                            <h3 class="drop-title">"Drag and drop your files here"</h3>
                            <p class="upload-hint">"or click to browse files"</p>
                            <button class="upload-button" on:click=open_picker>
                                "Browse Files"
                            </button>
                        </div>
                    }
                >
                    <div class="file-list">
                        <div class="file-list-header">
                            <h3 class="drop-title">"Selected Files"</h3>
                            <button class="upload-button small" on:click=open_picker>
                                "Add More Files"
                            </button>
                        </div>
                        <For
                            each=move || flow.with(|f| f.files().iter().cloned().enumerate().collect::<Vec<_>>())
                            key=|(idx, file)| (*idx, file.clone())
                            children=move |(_, file)| view! { <FileRow flow=flow file=file/> }
                        />
                    </div>
                </Show>

                <input
                    type="file"
                    id=FILE_INPUT_ID
                    multiple
                    style="display:none"
                    aria-label="File upload"
                    on:change=on_file_change
                />
            </div>
        </div>
    }
}

#[component]
fn FileRow(flow: RwSignal<UploadFlow>, file: SelectedFile) -> impl IntoView {
    let size = file.size_label();
    let name = file.name.clone();

    let on_remove = move |_| {
        let removed = flow.try_update(|f| f.remove_file(&file)).unwrap_or(false);
        if removed {
            log::info!("🗑️ Removed {}", file.name);
        }
    };

    view! {
        <div class="file-row">
            <div class="file-info">
                <div class="file-icon">"🧠"</div>
                <div class="file-text">
                    <div class="file-name">{name}</div>
                    <div class="file-size">{size}</div>
                </div>
            </div>
            <button class="file-remove" aria-label="Remove file" on:click=on_remove>
                "✕"
            </button>
        </div>
    }
}
