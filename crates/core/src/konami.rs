use std::collections::VecDeque;

/// ↑ ↑ ↓ ↓ ← → ← → B A, as `KeyboardEvent.key` values (letters lowercased).
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Sliding-window matcher over the most recent key presses.
#[derive(Debug, Default)]
pub struct KonamiDetector {
    recent: VecDeque<String>,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key. Returns `true` when the window spells the sequence,
    /// after which the window starts over.
    pub fn push(&mut self, key: &str) -> bool {
        let key = if key.chars().count() == 1 {
            key.to_lowercase()
        } else {
            key.to_string()
        };
        self.recent.push_back(key);
        if self.recent.len() > KONAMI_SEQUENCE.len() {
            self.recent.pop_front();
        }

        let hit = self.recent.len() == KONAMI_SEQUENCE.len()
            && self.recent.iter().zip(KONAMI_SEQUENCE).all(|(a, b)| a == b);
        if hit {
            self.recent.clear();
        }
        hit
    }
}
