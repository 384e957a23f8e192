//! Reasons Accordion State
//!
//! Independent expand flags, one per card. Cards never affect each other.

#[derive(Debug, Clone, PartialEq)]
pub struct Accordion {
    expanded: Vec<bool>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self {
            expanded: vec![false; len],
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    /// Flip one card. Returns its new state.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.expanded.get_mut(index) {
            Some(flag) => {
                *flag = !*flag;
                *flag
            }
            None => false,
        }
    }
}

/// Header label for the 1-based card number
pub fn reason_label(number: usize) -> String {
    format!("Reason {}", number)
}
