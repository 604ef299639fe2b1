/// Visibility targets - what a visibility decision is applied to.
///
/// The host implements these for its own object/renderer types. The
/// helpers only write a target when its current state differs from the
/// decision, so a steady object costs one read per tick.

/// An object-wide active flag (hides the whole object).
pub trait ActiveTarget: Send {
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
}

/// One renderer of an object, enabled or disabled on its own.
pub trait RendererTarget: Send {
    fn is_enabled(&self) -> bool;
    fn set_enabled(&mut self, enabled: bool);
}

/// Set `target` active iff `visible`. Returns true if it was toggled.
pub fn apply_active<T: ActiveTarget + ?Sized>(target: &mut T, visible: bool) -> bool {
    if target.is_active() == visible {
        return false;
    }
    target.set_active(visible);
    true
}

/// Set every present renderer enabled iff `visible`.
///
/// `None` entries (renderers destroyed by the host) are skipped. Returns
/// the number of renderers toggled.
pub fn apply_renderers<R: RendererTarget>(renderers: &mut [Option<R>], visible: bool) -> usize {
    let mut toggled = 0;
    for renderer in renderers.iter_mut().flatten() {
        if renderer.is_enabled() != visible {
            renderer.set_enabled(visible);
            toggled += 1;
        }
    }
    toggled
}

/// Plain active flag that counts how often it was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveFlag {
    active: bool,
    toggles: u32,
}

impl ActiveFlag {
    pub fn new(active: bool) -> Self {
        Self { active, toggles: 0 }
    }

    /// Number of `set_active` calls so far
    pub fn toggles(&self) -> u32 {
        self.toggles
    }
}

impl ActiveTarget for ActiveFlag {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
        self.toggles += 1;
    }
}

/// Plain renderer switch that counts how often it was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererSwitch {
    enabled: bool,
    toggles: u32,
}

impl RendererSwitch {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, toggles: 0 }
    }

    /// Number of `set_enabled` calls so far
    pub fn toggles(&self) -> u32 {
        self.toggles
    }
}

impl RendererTarget for RendererSwitch {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.toggles += 1;
    }
}

#[cfg(test)]
#[path = "targets_tests.rs"]
mod tests;
