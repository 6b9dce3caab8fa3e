// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/hud.rs
//
// Single-slot debounce for the zoom indicator.

/// Token identifying one scheduled hide.
pub type HideToken = u64;

/// Visibility of the zoom indicator plus the token of the only hide that may
/// still take effect. Scheduling a new hide supersedes the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HudTimer {
    visible: bool,
    generation: HideToken,
}

impl HudTimer {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the indicator and return the token for its hide.
    pub fn show(&mut self) -> HideToken {
        self.generation = self.generation.wrapping_add(1);
        self.visible = true;
        self.generation
    }

    /// Hide the indicator if `token` belongs to the latest `show`.
    /// Returns whether the indicator was hidden.
    pub fn expire(&mut self, token: HideToken) -> bool {
        if token != self.generation || !self.visible {
            log::trace!("Ignoring stale HUD hide {token}");
            return false;
        }
        self.visible = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_shown() {
        assert!(!HudTimer::default().is_visible());
    }

    #[test]
    fn hide_fires_for_single_change() {
        let mut hud = HudTimer::default();
        let token = hud.show();
        assert!(hud.is_visible());
        assert!(hud.expire(token));
        assert!(!hud.is_visible());
    }

    #[test]
    fn second_change_supersedes_first_hide() {
        let mut hud = HudTimer::default();
        let first = hud.show();
        let second = hud.show();

        assert!(!hud.expire(first));
        assert!(hud.is_visible());

        assert!(hud.expire(second));
        assert!(!hud.is_visible());
    }

    #[test]
    fn hide_fires_only_once() {
        let mut hud = HudTimer::default();
        let token = hud.show();
        assert!(hud.expire(token));
        assert!(!hud.expire(token));
    }
}
