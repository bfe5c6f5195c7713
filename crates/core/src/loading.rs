#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingPhase {
    #[default]
    Visible,
    FadingOut,
    Removed,
}

/// Splash screen shown while the page settles.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadingScreen {
    phase: LoadingPhase,
}

impl LoadingScreen {
    pub fn phase(self) -> LoadingPhase {
        self.phase
    }

    /// Starts the fade. Returns `false` unless the splash is still fully visible.
    pub fn begin_fade(&mut self) -> bool {
        if self.phase == LoadingPhase::Visible {
            self.phase = LoadingPhase::FadingOut;
            true
        } else {
            false
        }
    }

    /// Drops the splash after its fade. Returns `false` unless it was fading.
    pub fn finish(&mut self) -> bool {
        if self.phase == LoadingPhase::FadingOut {
            self.phase = LoadingPhase::Removed;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fades_then_removes() {
        let mut screen = LoadingScreen::default();
        assert!(!screen.finish());
        assert!(screen.begin_fade());
        assert!(!screen.begin_fade());
        assert_eq!(screen.phase(), LoadingPhase::FadingOut);
        assert!(screen.finish());
        assert_eq!(screen.phase(), LoadingPhase::Removed);
        assert!(!screen.finish());
    }
}
