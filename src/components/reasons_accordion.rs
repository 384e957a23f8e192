//! Reasons Accordion Component
//!
//! One numbered card per reason. Clicking a header expands or collapses
//! that card only.

use leptos::prelude::*;

use crate::accordion::{reason_label, Accordion};

#[component]
pub fn ReasonsAccordion(reasons: &'static [&'static str]) -> impl IntoView {
    let accordion = RwSignal::new(Accordion::new(reasons.len()));

    reasons
        .iter()
        .enumerate()
        .map(|(index, text)| view! { <ReasonCard index=index text=*text accordion=accordion /> })
        .collect_view()
}

#[component]
fn ReasonCard(index: usize, text: &'static str, accordion: RwSignal<Accordion>) -> impl IntoView {
    let toggle = move |_| {
        accordion.update(|a| {
            a.toggle(index);
        });
    };

    view! {
        <div class="reason-card" class:active=move || accordion.with(|a| a.is_expanded(index))>
            <div class="reason-header" on:click=toggle>
                <span>{reason_label(index + 1)}</span>
                <i class="fas fa-chevron-down"></i>
            </div>
            <div class="reason-content">
                <p>{text}</p>
            </div>
        </div>
    }
}
