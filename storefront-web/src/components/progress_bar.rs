//! Payment progress bar

use leptos::prelude::*;

use shared::payment::PurchaseProgress;

use crate::utils::format::format_paid_percent;

#[component]
pub fn ProgressBar(#[prop(into)] progress: Signal<PurchaseProgress>) -> impl IntoView {
    view! {
        <div class="progress">
            <div class="progress-labels">
                <span>{move || format_paid_percent(progress.get().percent())}</span>
                <span class="muted">
                    {move || {
                        let p = progress.get();
                        format!("{} of {}", p.paid, p.total)
                    }}
                </span>
            </div>
            <div class="progress-track">
                <div
                    class="progress-fill"
                    style:width=move || format!("{}%", progress.get().percent())
                ></div>
            </div>
        </div>
    }
}
