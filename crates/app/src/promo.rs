use std::sync::atomic::{AtomicBool, Ordering};

use services::{Screen, ScreenObserver};
use tracing::debug;

/// Promotional slot shown only on the landing and results screens.
///
/// Mounts and unmounts itself as the flow moves between screens.
#[derive(Debug)]
pub struct PromoSlot {
    mounted: AtomicBool,
}

impl PromoSlot {
    /// Slot state matching a flow that currently shows `screen`.
    #[must_use]
    pub fn for_screen(screen: Screen) -> Self {
        Self {
            mounted: AtomicBool::new(Self::wanted_on(screen)),
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Relaxed)
    }

    fn wanted_on(screen: Screen) -> bool {
        matches!(screen, Screen::Landing | Screen::Results)
    }
}

impl ScreenObserver for PromoSlot {
    fn screen_changed(&self, _from: Screen, to: Screen) {
        let want = Self::wanted_on(to);
        if self.mounted.swap(want, Ordering::Relaxed) != want {
            debug!(screen = %to, mounted = want, "promo slot toggled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounted_only_on_landing_and_results() {
        let slot = PromoSlot::for_screen(Screen::Landing);
        assert!(slot.is_mounted());
        slot.screen_changed(Screen::Landing, Screen::LoadingQuestions);
        assert!(!slot.is_mounted());
        slot.screen_changed(Screen::LoadingQuestions, Screen::Quiz);
        assert!(!slot.is_mounted());
        slot.screen_changed(Screen::Analyzing, Screen::Results);
        assert!(slot.is_mounted());
    }
}
