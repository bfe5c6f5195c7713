/// Typewriter reveal of a fixed text, one character per tick.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    typed: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            typed: 0,
        }
    }

    /// Types the next character and returns the visible prefix, or `None`
    /// once the whole text is shown.
    pub fn advance(&mut self) -> Option<String> {
        if self.typed >= self.chars.len() {
            return None;
        }
        self.typed += 1;
        Some(self.visible())
    }

    pub fn visible(&self) -> String {
        self.chars[..self.typed].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.typed >= self.chars.len()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_by_character_not_byte() {
        let mut tw = Typewriter::new("Refinação");
        assert_eq!(tw.len(), 9);
        let mut frames = Vec::new();
        while let Some(prefix) = tw.advance() {
            frames.push(prefix);
        }
        assert_eq!(frames.len(), 9);
        assert_eq!(frames[0], "R");
        assert_eq!(frames[7], "Refinaçã");
        assert_eq!(frames[8], "Refinação");
        assert!(tw.is_done());
        assert_eq!(tw.advance(), None);
    }

    #[test]
    fn empty_text_is_done_immediately() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_empty());
        assert!(tw.is_done());
        assert_eq!(tw.advance(), None);
        assert_eq!(tw.visible(), "");
    }
}
