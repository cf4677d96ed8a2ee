use leptos::*;
use crate::rating::clamp_percentage;

#[component]
pub fn ProgressBar(percentage: f32) -> impl IntoView {
    let width = format!("{}%", clamp_percentage(percentage));

    view! {
        <div class="progress-track">
            <div class="progress-fill" style:width=width></div>
        </div>
    }
}
