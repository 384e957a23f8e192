//! Scroll Reveal Utilities
//!
//! Reveal-on-scroll for a list of cards.
//! A card is revealed when its top edge enters the viewport (minus a margin),
//! or when its slot in the initial cascade fires. Reveal is one-way.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Class added to revealed cards
pub const VISIBLE_CLASS: &str = "visible";

/// Per-card reveal flags
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealState {
    visible: Vec<bool>,
}

impl RevealState {
    pub fn new(len: usize) -> Self {
        Self {
            visible: vec![false; len],
        }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Mark a card visible. Returns true only on the first reveal.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.visible.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    /// Reveal every hidden card the probe reports as in view.
    /// Returns the newly revealed indices.
    pub fn check<F>(&mut self, in_view: F) -> Vec<usize>
    where
        F: Fn(usize) -> bool,
    {
        let mut revealed = Vec::new();
        for index in 0..self.visible.len() {
            if !self.visible[index] && in_view(index) {
                self.visible[index] = true;
                revealed.push(index);
            }
        }
        revealed
    }
}

/// Viewport threshold test on client coordinates
pub fn is_above_fold(top: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height - margin
}

/// Staggered reveal of the leading cards on load
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cascade {
    pub count: usize,
    pub base_ms: u32,
    pub step_ms: u32,
}

impl Cascade {
    /// (card index, delay in ms) for each card the cascade covers
    pub fn schedule(&self, len: usize) -> Vec<(usize, u32)> {
        (0..self.count.min(len))
            .map(|i| {
                let step = self.step_ms.saturating_mul(i as u32);
                (i, self.base_ms.saturating_add(step))
            })
            .collect()
    }
}

/// Reveal state paired with the viewport test it is checked against
pub struct RevealTracker<P> {
    state: RevealState,
    in_view: P,
}

impl<P> RevealTracker<P>
where
    P: Fn(usize) -> bool,
{
    pub fn new(len: usize, in_view: P) -> Self {
        Self {
            state: RevealState::new(len),
            in_view,
        }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.state.is_visible(index)
    }

    /// Scroll/resize path. Returns the newly revealed indices.
    pub fn check(&mut self) -> Vec<usize> {
        self.state.check(&self.in_view)
    }

    /// Cascade path. Returns true only on the first reveal.
    pub fn reveal(&mut self, index: usize) -> bool {
        self.state.reveal(index)
    }
}

fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

fn mark_visible(card: &web_sys::Element) {
    if let Err(e) = card.class_list().add_1(VISIBLE_CLASS) {
        log::warn!("failed to mark card visible: {:?}", e);
    }
}

/// Track `cards` for reveal: checks once now, again on every scroll and
/// resize, and schedules the cascade. Listeners and timers live for the page.
pub fn bind(cards: Vec<web_sys::Element>, margin: f64, cascade: Cascade) -> Result<(), String> {
    if cards.is_empty() {
        return Ok(());
    }
    let window = web_sys::window().ok_or("no window")?;

    let cards = Rc::new(cards);
    let probe_cards = cards.clone();
    let in_view = move |i: usize| {
        viewport_height()
            .map(|height| is_above_fold(probe_cards[i].get_bounding_client_rect().top(), height, margin))
            .unwrap_or(false)
    };
    let tracker = Rc::new(RefCell::new(RevealTracker::new(cards.len(), in_view)));

    let check = {
        let tracker = tracker.clone();
        let cards = cards.clone();
        move || {
            for index in tracker.borrow_mut().check() {
                mark_visible(&cards[index]);
            }
        }
    };
    check();

    let on_scroll = Closure::<dyn FnMut()>::new(check);
    let options = web_sys::AddEventListenerOptions::new();
    options.set_passive(true);
    for event in ["scroll", "resize"] {
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                on_scroll.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| format!("{:?}", e))?;
    }
    on_scroll.forget();

    for (index, delay) in cascade.schedule(cards.len()) {
        let tracker = tracker.clone();
        let cards = cards.clone();
        let cb = Closure::<dyn FnMut()>::new(move || {
            if tracker.borrow_mut().reveal(index) {
                mark_visible(&cards[index]);
            }
        });
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), timeout_ms(delay))
            .map_err(|e| format!("{:?}", e))?;
        cb.forget();
    }

    Ok(())
}

/// Browser timeouts take an i32; larger delays saturate
fn timeout_ms(delay: u32) -> i32 {
    i32::try_from(delay).unwrap_or(i32::MAX)
}
