//! Hearts Mini-Game State
//!
//! One flag per target; the collected count is derived from the flags.

/// Result of clicking a target
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollectOutcome {
    /// Already collected, or not a target
    Ignored,
    Collected,
    /// This click collected the last target
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeartsGame {
    collected: Vec<bool>,
}

impl HeartsGame {
    pub fn new(total: usize) -> Self {
        Self {
            collected: vec![false; total],
        }
    }

    pub fn total(&self) -> usize {
        self.collected.len()
    }

    pub fn collected_count(&self) -> usize {
        self.collected.iter().filter(|c| **c).count()
    }

    pub fn is_collected(&self, index: usize) -> bool {
        self.collected.get(index).copied().unwrap_or(false)
    }

    pub fn is_complete(&self) -> bool {
        self.collected_count() == self.total()
    }

    pub fn collect(&mut self, index: usize) -> CollectOutcome {
        match self.collected.get_mut(index) {
            Some(flag) if !*flag => *flag = true,
            _ => return CollectOutcome::Ignored,
        }
        if self.is_complete() {
            CollectOutcome::Completed
        } else {
            CollectOutcome::Collected
        }
    }

    pub fn counter_text(&self) -> String {
        format!("Hearts collected: {} / {}", self.collected_count(), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_counter() {
        let game = HeartsGame::new(26);
        assert_eq!(game.counter_text(), "Hearts collected: 0 / 26");
        assert!(!game.is_complete());
    }

    #[test]
    fn test_collect_all_in_any_order() {
        let mut game = HeartsGame::new(26);
        let order: Vec<usize> = (0..26).map(|i| (i * 7) % 26).collect();
        for (n, index) in order.iter().enumerate() {
            let outcome = game.collect(*index);
            if n == 25 {
                assert_eq!(outcome, CollectOutcome::Completed);
            } else {
                assert_eq!(outcome, CollectOutcome::Collected);
                assert_eq!(game.collected_count(), n + 1);
            }
        }
        assert_eq!(game.counter_text(), "Hearts collected: 26 / 26");
    }

    #[test]
    fn test_repeat_click_ignored() {
        let mut game = HeartsGame::new(26);
        game.collect(4);
        assert_eq!(game.collect(4), CollectOutcome::Ignored);
        assert_eq!(game.collected_count(), 1);
        assert_eq!(game.counter_text(), "Hearts collected: 1 / 26");
    }

    #[test]
    fn test_completed_fires_once() {
        let mut game = HeartsGame::new(2);
        game.collect(0);
        assert_eq!(game.collect(1), CollectOutcome::Completed);
        assert_eq!(game.collect(1), CollectOutcome::Ignored);
        assert_eq!(game.collect(0), CollectOutcome::Ignored);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut game = HeartsGame::new(3);
        assert_eq!(game.collect(3), CollectOutcome::Ignored);
        assert_eq!(game.collected_count(), 0);
    }
}
