//! Host Page Bindings
//!
//! Thin wrappers over `web-sys` for the anchors the page script looks up.
//! Errors are stringified at this boundary.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement};

// ========================
// Markup Anchors
// ========================

pub const AUDIO_ID: &str = "bgMusic";
pub const PLAY_BUTTON_ID: &str = "playBtn";
pub const FLOATING_HEARTS_ID: &str = "floatingHearts";
pub const REASONS_ID: &str = "reasonsContainer";
pub const GAME_ID: &str = "gameContainer";
pub const COUNTER_ID: &str = "counter";
pub const UNLOCK_ID: &str = "unlockMessage";
pub const SPARKLES_ID: &str = "sparklesContainer";
pub const WISHES_ID: &str = "wishesContainer";
pub const CONFIG_ID: &str = "pageConfig";

pub const VERSE_SELECTOR: &str = ".verse";
pub const VERSE_DOT_SELECTOR: &str = ".verse-dot";
pub const WISH_CARD_SELECTOR: &str = ".wish-card";

pub const ACTIVE_CLASS: &str = "active";

// ========================
// Lookups
// ========================

pub fn document() -> Result<Document, String> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())
}

/// Element by id, cast to `T`. Missing or mistyped anchors give `None`.
pub fn by_id<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
    doc.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Same as [`by_id`] against the live document
pub fn find<T: JsCast>(id: &str) -> Option<T> {
    by_id(&document().ok()?, id)
}

/// All elements matching `selector`, in document order
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, String> {
    let list = doc.query_selector_all(selector).map_err(|e| format!("{:?}", e))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

// ========================
// Events
// ========================

/// Attach a click listener that lives for the page
pub fn on_click<T, F>(target: &T, handler: F) -> Result<(), String>
where
    T: AsRef<EventTarget>,
    F: FnMut() + 'static,
{
    let cb = Closure::<dyn FnMut()>::new(handler);
    target
        .as_ref()
        .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .map_err(|e| format!("{:?}", e))?;
    cb.forget();
    Ok(())
}

/// Run `f` once the document structure is parsed
pub fn on_ready<F>(f: F) -> Result<(), String>
where
    F: FnOnce() + 'static,
{
    let doc = document()?;
    if doc.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let cb = Closure::once_into_js(f);
    doc.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref())
        .map_err(|e| format!("{:?}", e))
}

// ========================
// Mutations
// ========================

pub fn set_active(el: &Element, active: bool) -> Result<(), String> {
    let classes = el.class_list();
    let result = if active {
        classes.add_1(ACTIVE_CLASS)
    } else {
        classes.remove_1(ACTIVE_CLASS)
    };
    result.map_err(|e| format!("{:?}", e))
}

pub fn show_block(el: &HtmlElement) -> Result<(), String> {
    el.style()
        .set_property("display", "block")
        .map_err(|e| format!("{:?}", e))
}
