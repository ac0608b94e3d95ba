//! The upload page: owns the flow state and drives the simulated upload.

use leptos::*;
use crate::services::{RandomUploadSource, UploadOutcome, UploadTicker};
use crate::{
    AppError, FileDropZone, Hero, ModelDetailsForm, SimulationSettings, SuccessScreen, Tick,
    TickAction, UploadErrorPanel, UploadFlow, UploadProgress, UploadState, ValidationPanel,
    MSG_UPLOAD_REJECTED, TICK_INTERVAL_MS,
};

#[component]
pub fn UploadPage() -> impl IntoView {
    let flow = create_rw_signal(UploadFlow::new());
    let ticker = store_value(UploadTicker::new());
    let source = store_value(RandomUploadSource::new(SimulationSettings::default()));

    let state = create_memo(move |_| flow.with(|f| f.state()));

    let on_tick = move || {
        let tick = source
            .try_update_value(|src| flow.try_update(|f| f.tick(src)))
            .flatten()
            .unwrap_or(Tick::NotUploading);

        match tick {
            Tick::Advanced(progress) => log::debug!("⏳ Upload progress {:.1}%", progress),
            Tick::Finished(UploadOutcome::Accepted) => log::info!("✅ Upload complete"),
            Tick::Finished(UploadOutcome::Rejected) => {
                log::error!("❌ {}", AppError::Upload(MSG_UPLOAD_REJECTED.to_string()))
            }
            Tick::NotUploading => log::warn!("⏱️ Tick with no upload running"),
        }

        if tick.action() == TickAction::Stop {
            let was_running = ticker.try_update_value(|t| t.cancel()).unwrap_or(false);
            log::debug!("⏱️ Upload ticker stopped (was running: {})", was_running);
        }
    };

    let on_submit = move |_| match flow.try_update(|f| f.submit()) {
        Some(Ok(summary)) => {
            log::info!(
                "🚀 Uploading \"{}\" ({} file(s), {} bytes)",
                summary.name,
                summary.files.len(),
                summary.total_bytes
            );
            match serde_json::to_string(&summary) {
                Ok(json) => log::debug!("📦 {}", json),
                Err(e) => log::warn!("Could not serialize upload summary: {}", e),
            }
            ticker.update_value(|t| t.start(TICK_INTERVAL_MS, on_tick));
        }
        Some(Err(e)) => log::warn!("⚠️ {}", e),
        None => {}
    };

    let on_retry = Callback::new(move |_| match flow.try_update(|f| f.reset()) {
        Some(Ok(())) => log::info!("🔁 Back to the form"),
        Some(Err(e)) => log::warn!("⚠️ {}", e),
        None => {}
    });

    let on_start_over = Callback::new(move |_| match flow.try_update(|f| f.start_over()) {
        Some(Ok(())) => log::info!("🆕 Starting a new upload"),
        Some(Err(e)) => log::warn!("⚠️ {}", e),
        None => {}
    });

    on_cleanup(move || {
        ticker.try_update_value(|t| t.cancel());
    });

    view! {
        <div class="container">
            <Hero/>

            <div class="upload-card">
                <Show
                    when=move || state.get() == UploadState::Success
                    fallback=move || view! {
                        <div class="upload-form">
                            <ModelDetailsForm flow=flow/>
                            <FileDropZone flow=flow/>
                            <ValidationPanel flow=flow/>

                            <Show
                                when=move || state.get().is_uploading()
                                fallback=|| view! { }
                            >
                                <UploadProgress
                                    progress=Signal::derive(move || state.get().progress().unwrap_or(0.0))
                                />
                            </Show>

                            <Show
                                when=move || state.get() == UploadState::Error
                                fallback=|| view! { }
                            >
                                <UploadErrorPanel on_retry=on_retry/>
                            </Show>

                            <Show
                                when=move || state.get().is_idle()
                                fallback=|| view! { }
                            >
                                <div class="submit-row">
                                    <button class="submit-button" on:click=on_submit>
                                        "Upload Model →"
                                    </button>
                                </div>
                            </Show>
                        </div>
                    }
                >
                    <SuccessScreen
                        model_name=Signal::derive(move || flow.with(|f| f.metadata().name.clone()))
                        on_start_over=on_start_over
                    />
                </Show>
            </div>
        </div>
    }
}
