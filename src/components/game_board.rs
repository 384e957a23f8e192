//! Hearts Game Board Component
//!
//! Clickable hearts scattered over the game container. Each click updates the
//! `#counter` readout; the last one reveals `#unlockMessage` after a delay.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use log::info;
use web_sys::HtmlElement;

use crate::dom;
use crate::game::{CollectOutcome, HeartsGame};
use crate::models::Placement;

/// Write the current count into `#counter`
pub fn sync_counter(game: &HeartsGame) {
    if let Some(counter) = dom::find::<HtmlElement>(dom::COUNTER_ID) {
        counter.set_text_content(Some(&game.counter_text()));
    }
}

fn collect_heart(game: RwSignal<HeartsGame>, index: usize, unlock_delay_ms: u32) {
    let outcome = game
        .try_update(|g| g.collect(index))
        .unwrap_or(CollectOutcome::Ignored);
    if outcome == CollectOutcome::Ignored {
        return;
    }

    game.with_untracked(sync_counter);

    if outcome == CollectOutcome::Completed {
        info!("all hearts collected");
        Timeout::new(unlock_delay_ms, || {
            if let Some(message) = dom::find::<HtmlElement>(dom::UNLOCK_ID) {
                if let Err(e) = dom::show_block(&message) {
                    log::warn!("failed to show unlock message: {}", e);
                }
            }
        })
        .forget();
    }
}

#[component]
pub fn GameBoard(placements: Vec<Placement>, unlock_delay_ms: u32) -> impl IntoView {
    let game = RwSignal::new(HeartsGame::new(placements.len()));
    game.with_untracked(sync_counter);

    placements
        .into_iter()
        .enumerate()
        .map(|(index, placement)| {
            view! {
                <div
                    class="game-heart"
                    class:collected=move || game.with(|g| g.is_collected(index))
                    style=placement.style()
                    on:click=move |_| collect_heart(game, index, unlock_delay_ms)
                ></div>
            }
        })
        .collect_view()
}
