//! Step 1 of the form: name, type and description of the model.

use leptos::*;
use web_sys::Event;
use crate::{ModelType, UploadFlow};

#[component]
pub fn ModelDetailsForm(flow: RwSignal<UploadFlow>) -> impl IntoView {
    let on_type_change = move |ev: Event| {
        let value = event_target_value(&ev);
        match ModelType::from_value(&value) {
            Ok(model_type) => flow.update(|f| f.set_model_type(model_type)),
            Err(e) => log::warn!("⚠️ {}", e),
        }
    };

    view! {
        <div class="form-step">
            <h2 class="step-title">
                <span class="step-number">"1"</span>
                "Model Details"
            </h2>

            <div class="form-grid">
                <div>
                    <label class="form-label" for="modelName">"Model Name *"</label>
                    <input
                        type="text"
                        id="modelName"
                        class="form-input"
                        placeholder="Give your model a vibe name"
                        prop:value=move || flow.with(|f| f.metadata().name.clone())
                        on:input=move |ev| flow.update(|f| f.set_name(event_target_value(&ev)))
                    />
                </div>

                <div>
                    <label class="form-label" for="modelType">"Model Type *"</label>
                    <select
                        id="modelType"
                        class="form-input"
                        aria-label="Model Type"
                        on:change=on_type_change
                    >
                        {ModelType::ALL
                            .into_iter()
                            .map(|model_type| view! {
                                <option
                                    value=model_type.value()
                                    prop:selected=move || flow.with(|f| f.metadata().model_type == model_type)
                                >
                                    {model_type.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-wide">
                    <label class="form-label" for="modelDescription">"Description"</label>
                    <textarea
                        id="modelDescription"
                        class="form-input form-textarea"
                        placeholder="Spill the tea on what your model can do..."
                        prop:value=move || flow.with(|f| f.metadata().description.clone())
                        on:input=move |ev| flow.update(|f| f.set_description(event_target_value(&ev)))
                    ></textarea>
                </div>
            </div>
        </div>
    }
}
