//! Success screen shown once the simulated upload is accepted.

use leptos::*;
use crate::{StepStatus, DASHBOARD_PATH, UPLOAD_PATH};

#[component]
pub fn SuccessScreen(
    #[prop(into)] model_name: Signal<String>,
    on_start_over: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="success-screen">
            <div class="success-icon">"✅"</div>
            <h2>"Model Uploaded Successfully!"</h2>
            <p class="subtitle">
                {move || format!(
                    "Your model \"{}\" has been uploaded and is being processed.",
                    model_name.get()
                )}
            </p>

            <div class="success-steps">
                <SuccessStep
                    icon="🧠"
                    title="Processing"
                    description="Your model is being validated and processed"
                    status=StepStatus::InProgress
                />
                <SuccessStep
                    icon="⚙️"
                    title="Optimization"
                    description="Optimizing your model for inference performance"
                    status=StepStatus::Pending
                />
                <SuccessStep
                    icon="🖥️"
                    title="Deployment"
                    description="Making your model available for API access"
                    status=StepStatus::Pending
                />
            </div>

            <div class="success-actions">
                <a href=DASHBOARD_PATH class="upload-button">"Go to Dashboard"</a>
                <a
                    href=UPLOAD_PATH
                    class="secondary-button"
                    on:click=move |_| on_start_over.call(())
                >
                    "Upload Another Model"
                </a>
            </div>
        </div>
    }
}

/// One decorative pipeline stage card.
#[component]
pub fn SuccessStep(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    status: StepStatus,
) -> impl IntoView {
    view! {
        <div class=format!("success-step {}", status.css_class())>
            <div class="step-icon">{icon}</div>
            <h3 class="step-name">{title}</h3>
            <p class="step-description">{description}</p>
            <div class="step-status">{status.label()}</div>
        </div>
    }
}
