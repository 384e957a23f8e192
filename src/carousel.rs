//! Verse Carousel
//!
//! Cycles the `active` marker through the page's `.verse` elements on a timer,
//! with `.verse-dot` elements jumping straight to their `data-index`.
//! A dot click does not reset the timer; the next tick continues from there.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::{Document, Element};

use crate::dom;

/// Wrap any integer index into `0..len`. `None` when there is nothing to show.
pub fn normalize(index: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let n = len as i64;
    Some((((index % n) + n) % n) as usize)
}

/// Current selection over `len` verses
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    /// Select `index` (wrapped). Returns the verse to activate.
    pub fn show(&mut self, index: i64) -> Option<usize> {
        let target = normalize(index, self.len)?;
        self.current = target;
        Some(target)
    }

    pub fn advance(&mut self) -> Option<usize> {
        self.show(self.current as i64 + 1)
    }
}

/// `active` marker for each of `count` elements once `target` is selected.
/// Dots may be fewer than verses, in which case none of them is marked.
pub fn active_markers(count: usize, target: usize) -> Vec<bool> {
    (0..count).map(|i| i == target).collect()
}

/// Parse a dot's `data-index`; anything non-integer is ignored
pub fn parse_dot_index(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok()
}

struct VerseDeck {
    carousel: Carousel,
    verses: Vec<Element>,
    dots: Vec<Element>,
}

impl VerseDeck {
    fn apply(&self, index: usize) {
        for group in [&self.verses, &self.dots] {
            for (el, active) in group.iter().zip(active_markers(group.len(), index)) {
                let _ = dom::set_active(el, active);
            }
        }
    }

    fn show(&mut self, index: i64) {
        if let Some(target) = self.carousel.show(index) {
            self.apply(target);
        }
    }

    fn advance(&mut self) {
        if let Some(target) = self.carousel.advance() {
            self.apply(target);
        }
    }
}

/// Wire dots and the auto-advance timer. `Ok(false)` when the page has no verses.
pub fn bind(doc: &Document, interval_ms: u32) -> Result<bool, String> {
    let verses = dom::query_all(doc, dom::VERSE_SELECTOR)?;
    if verses.is_empty() {
        return Ok(false);
    }
    let dots = dom::query_all(doc, dom::VERSE_DOT_SELECTOR)?;

    let deck = Rc::new(RefCell::new(VerseDeck {
        carousel: Carousel::new(verses.len()),
        verses,
        dots: dots.clone(),
    }));

    for dot in &dots {
        let deck = deck.clone();
        let index = parse_dot_index(dot.get_attribute("data-index").as_deref());
        dom::on_click(dot, move || {
            if let Some(index) = index {
                deck.borrow_mut().show(index);
            }
        })?;
    }

    deck.borrow_mut().show(0);
    Interval::new(interval_ms, move || deck.borrow_mut().advance()).forget();
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(markers: &[bool]) -> usize {
        markers.iter().filter(|a| **a).count()
    }

    #[test]
    fn test_normalize_negative() {
        assert_eq!(normalize(-1, 4), Some(3));
        assert_eq!(normalize(-5, 4), Some(3));
        assert_eq!(normalize(9, 4), Some(1));
        assert_eq!(normalize(0, 0), None);
    }

    #[test]
    fn test_show_negative_index() {
        let mut c = Carousel::new(4);
        assert_eq!(c.show(-1), Some(3));
        assert_eq!(c.advance(), Some(0));
    }

    #[test]
    fn test_advance_wraps() {
        let mut c = Carousel::new(3);
        assert_eq!(c.advance(), Some(1));
        assert_eq!(c.advance(), Some(2));
        assert_eq!(c.advance(), Some(0));
    }

    #[test]
    fn test_jump_then_timer_continues() {
        let mut c = Carousel::new(5);
        c.advance();
        c.show(3);
        assert_eq!(c.advance(), Some(4));
    }

    #[test]
    fn test_exactly_one_active() {
        for len in 1..6 {
            let mut c = Carousel::new(len);
            let ops: [i64; 8] = [0, 7, -3, 2, -1, 100, 1, -100];
            let mut previous = active_markers(len, 0);
            for (step, op) in ops.iter().enumerate() {
                let target = if step % 2 == 0 { c.advance() } else { c.show(*op) };
                let markers = active_markers(len, target.unwrap());
                assert_eq!(active_count(&markers), 1, "len {} step {}", len, step);
                assert!(markers[target.unwrap()]);
                // The previously active verse is cleared unless it is the target again
                for (i, was_active) in previous.iter().enumerate() {
                    if *was_active && i != target.unwrap() {
                        assert!(!markers[i]);
                    }
                }
                previous = markers;
            }
        }
    }

    #[test]
    fn test_empty_carousel_noop() {
        let mut c = Carousel::new(0);
        assert_eq!(c.advance(), None);
        assert_eq!(c.show(2), None);
    }

    #[test]
    fn test_missing_dot_stays_unmarked() {
        // Four verses, two dots: selecting verse 3 clears both dots
        assert_eq!(active_markers(2, 3), vec![false, false]);
        assert_eq!(active_markers(4, 3), vec![false, false, false, true]);
        assert!(active_markers(0, 0).is_empty());
    }

    #[test]
    fn test_parse_dot_index() {
        assert_eq!(parse_dot_index(Some("2")), Some(2));
        assert_eq!(parse_dot_index(Some(" 1 ")), Some(1));
        assert_eq!(parse_dot_index(Some("two")), None);
        assert_eq!(parse_dot_index(None), None);
    }
}
