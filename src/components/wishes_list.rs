//! Wishes List Component

use leptos::prelude::*;

#[component]
pub fn WishesList(wishes: &'static [&'static str]) -> impl IntoView {
    wishes
        .iter()
        .enumerate()
        .map(|(index, text)| {
            view! {
                <div class="wish-card">
                    <div class="wish-number">{index + 1}</div>
                    <p class="wish-text">{*text}</p>
                </div>
            }
        })
        .collect_view()
}
