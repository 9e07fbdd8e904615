//! Pure visibility state machines behind the DOM wiring.
//!
//! The controllers' transition logic lives here without any web types so it
//! can be exercised host-side; the wasm modules translate these transitions
//! into class-list mutations on the real document.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Visible => Visibility::Hidden,
            Visibility::Hidden => Visibility::Visible,
        }
    }

    #[inline]
    pub fn is_visible(self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

/// A set of elements whose visibility flips together in one step.
///
/// Members never diverge: `toggle` flips every member within a single call,
/// so a partial toggle is never observable. Two toggles restore the initial
/// state.
#[derive(Clone, Debug)]
pub struct ToggleGroup {
    members: Vec<Visibility>,
}

impl ToggleGroup {
    pub fn new(initial: Visibility, member_count: usize) -> Self {
        Self {
            members: vec![initial; member_count],
        }
    }

    /// Flip every member. Returns the shared state after the flip.
    pub fn toggle(&mut self) -> Visibility {
        for m in &mut self.members {
            *m = m.toggled();
        }
        self.state()
    }

    /// The state shared by all members.
    pub fn state(&self) -> Visibility {
        self.members.first().copied().unwrap_or(Visibility::Hidden)
    }

    pub fn members(&self) -> &[Visibility] {
        &self.members
    }

    pub fn is_consistent(&self) -> bool {
        self.members.windows(2).all(|w| w[0] == w[1])
    }
}

/// One-shot dismissal of the success alert.
///
/// A one-way VISIBLE -> HIDDEN transition, terminal once fired, due only
/// after the configured delay, and a no-op when the alert element is absent
/// from the page.
#[derive(Clone, Copy, Debug)]
pub struct AlertDismiss {
    delay_ms: i32,
    fired: bool,
}

impl AlertDismiss {
    pub fn new(delay_ms: i32) -> Self {
        Self {
            delay_ms,
            fired: false,
        }
    }

    /// Whether the dismissal should happen at `elapsed_ms` since load.
    pub fn due(&self, elapsed_ms: i32) -> bool {
        !self.fired && elapsed_ms >= self.delay_ms
    }

    /// Consume the one shot. Returns true when the caller should hide the
    /// alert, which happens at most once and only if the element exists.
    pub fn fire(&mut self, alert_present: bool) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        alert_present
    }

    pub fn fired(&self) -> bool {
        self.fired
    }
}
