//! Page Decorations
//!
//! Wires the seven page features. Each one looks up its own anchors and is
//! skipped when they are missing; one feature failing never stops the rest.

use leptos::prelude::*;
use log::{debug, info, warn};
use web_sys::{Document, HtmlElement};

use crate::audio;
use crate::carousel;
use crate::components::{GameBoard, ParticleField, ParticleKind, ReasonsAccordion, WishesList};
use crate::config::{ConfigSource, PageConfig};
use crate::content::{REASONS, WISHES};
use crate::dom;
use crate::models::ParticleSpec;
use crate::particles::{browser_rng, generate_particles, place_targets};

/// Entry point once the document is parsed
pub fn boot() {
    let doc = match dom::document() {
        Ok(doc) => doc,
        Err(e) => {
            web_sys::console::error_1(&format!("[APP] {}", e).into());
            return;
        }
    };

    let (config, source) = PageConfig::load(&doc);
    if console_log::init_with_level(config.level()).is_err() {
        web_sys::console::warn_1(&"[APP] logger already installed".into());
    }
    match source {
        ConfigSource::Defaults => debug!("using default config"),
        ConfigSource::Embedded => info!("using embedded config"),
        ConfigSource::Invalid(e) => warn!("invalid embedded config, using defaults: {}", e),
    }

    init(&doc, &config);
}

pub fn init(doc: &Document, config: &PageConfig) {
    run("audio toggle", || audio::bind(doc));
    run("floating hearts", || {
        mount_particles(doc, dom::FLOATING_HEARTS_ID, ParticleKind::Heart, &config.hearts)
    });
    run("reasons", || mount_reasons(doc));
    run("verse carousel", || carousel::bind(doc, config.carousel_interval_ms));
    run("hearts game", || mount_game(doc, config));
    run("sparkles", || {
        mount_particles(doc, dom::SPARKLES_ID, ParticleKind::Sparkle, &config.sparkles)
    });
    run("wishes", || mount_wishes(doc));
    run("wish reveal", || bind_reveal(doc, config));
    info!("page ready");
}

fn run<F>(feature: &str, setup: F)
where
    F: FnOnce() -> Result<bool, String>,
{
    match setup() {
        Ok(true) => debug!("{} ready", feature),
        Ok(false) => debug!("{} skipped", feature),
        Err(e) => warn!("{} failed: {}", feature, e),
    }
}

/// Mount `f` into the anchor and keep it for the page lifetime
fn mount_into<F, N>(anchor: HtmlElement, f: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    leptos::mount::mount_to(anchor, f).forget();
}

fn mount_particles(doc: &Document, anchor_id: &str, kind: ParticleKind, spec: &ParticleSpec) -> Result<bool, String> {
    let Some(anchor) = dom::by_id::<HtmlElement>(doc, anchor_id) else {
        return Ok(false);
    };
    let particles = generate_particles(spec, &mut browser_rng());
    mount_into(anchor, move || view! { <ParticleField kind=kind particles=particles /> });
    Ok(true)
}

fn mount_reasons(doc: &Document) -> Result<bool, String> {
    let Some(anchor) = dom::by_id::<HtmlElement>(doc, dom::REASONS_ID) else {
        return Ok(false);
    };
    mount_into(anchor, || view! { <ReasonsAccordion reasons=&REASONS /> });
    Ok(true)
}

fn mount_game(doc: &Document, config: &PageConfig) -> Result<bool, String> {
    let anchor = dom::by_id::<HtmlElement>(doc, dom::GAME_ID);
    let counter = dom::by_id::<HtmlElement>(doc, dom::COUNTER_ID);
    let unlock = dom::by_id::<HtmlElement>(doc, dom::UNLOCK_ID);
    let (Some(anchor), Some(_), Some(_)) = (anchor, counter, unlock) else {
        return Ok(false);
    };

    let placements = place_targets(config.game_hearts, config.game_margin_pct, &mut browser_rng());
    let unlock_delay_ms = config.unlock_delay_ms;
    mount_into(anchor, move || view! { <GameBoard placements=placements unlock_delay_ms=unlock_delay_ms /> });
    Ok(true)
}

fn mount_wishes(doc: &Document) -> Result<bool, String> {
    let Some(anchor) = dom::by_id::<HtmlElement>(doc, dom::WISHES_ID) else {
        return Ok(false);
    };
    mount_into(anchor, || view! { <WishesList wishes=&WISHES /> });
    Ok(true)
}

/// Reveal covers every `.wish-card` on the page, generated or static
fn bind_reveal(doc: &Document, config: &PageConfig) -> Result<bool, String> {
    let cards = dom::query_all(doc, dom::WISH_CARD_SELECTOR)?;
    if cards.is_empty() {
        return Ok(false);
    }
    scroll_reveal::bind(cards, config.reveal_margin_px, config.cascade())?;
    Ok(true)
}
