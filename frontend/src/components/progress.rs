use leptos::*;

/// Rounded percentage shown next to the bar, e.g. `"42%"`.
pub fn percent_label(progress: f64) -> String {
    format!("{}%", progress.clamp(0.0, 100.0).round())
}

#[component]
pub fn UploadProgress(#[prop(into)] progress: Signal<f64>) -> impl IntoView {
    view! {
        <div class="progress-section show" id="progressSection">
            <div class="progress-header">
                <span>"Uploading..."</span>
                <span>{move || percent_label(progress.get())}</span>
            </div>
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    id="progressFill"
                    style=move || format!("width: {:.2}%;", progress.get().clamp(0.0, 100.0))
                ></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_label() {
        assert_eq!(percent_label(0.0), "0%");
        assert_eq!(percent_label(42.4), "42%");
        assert_eq!(percent_label(99.6), "100%");
        assert_eq!(percent_label(130.0), "100%");
    }
}
