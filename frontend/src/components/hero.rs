//! Hero section component

use leptos::*;
use crate::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_NAME}</h1>
            <p class="subtitle">
                "Drop a CSV file, pick a compression mode and send it on. "
                "The file is compressed server-side and forwarded for import."
            </p>
        </div>
    }
}
