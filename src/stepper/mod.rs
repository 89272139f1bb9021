//! Headless stepper control for cooking-step navigation.
//!
//! The component tracks the open/closed state of the step-list popover and
//! translates discrete inputs (pointer activation, keys, outside clicks,
//! popover row selection) into selection requests on a [`StepperHost`]. It is
//! purely a presentation/input layer: the host owns the authoritative active
//! step and must feed updates back through [`Stepper::set_active`]; the
//! component never mutates it.
//!
//! Document-level listeners (outside-click, global key capture) are acquired
//! through the host only while the popover is open and released on every exit
//! path, including teardown.
//!
//! ## Positions vs. ids
//!
//! Arrow navigation computes 1-based positions from the clamped current
//! value, while popover selection and row highlighting use step `id`s. When
//! `id`s are non-contiguous or unordered relative to array position the two
//! disagree; hosts that need coherent arrow navigation must supply steps
//! whose `id`s equal their 1-based positions.

pub mod view;

pub use view::{StepRow, StepperView};

use tracing::debug;

/// One entry of the externally-owned step sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub id: u32,
    pub label: String,
}

impl Step {
    #[must_use]
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// Popover visibility states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopoverState {
    Closed,
    Open,
}

/// Keys the control reacts to while focused (or via global capture when open).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Discrete input events fed to the control by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// Pointer activation of the control itself.
    Activate,
    Key(Key),
    /// Pointer interaction outside both the control and the popover.
    OutsideClick,
    /// Selection of the popover row with this step id.
    Select(u32),
}

/// Integration seam to the surrounding UI.
///
/// `select_step` receives every selection request, including boundary-clamped
/// arrow moves that resolve to the unchanged position. The listener hooks
/// bracket the popover's open state; hosts that have no document-level
/// listeners keep the default no-op implementations.
pub trait StepperHost {
    fn select_step(&mut self, step: u32);

    fn attach_listeners(&mut self) {}

    fn detach_listeners(&mut self) {}
}

/// Host that ignores every selection, for display-only usage.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHost;

impl StepperHost for NoopHost {
    fn select_step(&mut self, _step: u32) {}
}

/// The stepper state machine over a borrowed step sequence.
pub struct Stepper<'a, H: StepperHost> {
    steps: &'a [Step],
    active: u32,
    state: PopoverState,
    host: H,
}

impl<'a, H: StepperHost> Stepper<'a, H> {
    /// Create the control in the `Closed` state. An empty sequence produces a
    /// control that renders nothing and ignores every input.
    #[must_use]
    pub fn new(steps: &'a [Step], active: u32, host: H) -> Self {
        Self {
            steps,
            active,
            state: PopoverState::Closed,
            host,
        }
    }

    /// Feed back the host-owned active step after it changed.
    pub fn set_active(&mut self, active: u32) {
        self.active = active;
    }

    #[must_use]
    pub fn state(&self) -> PopoverState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == PopoverState::Open
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Render-ready view of the current state, `None` for an empty sequence.
    #[must_use]
    pub fn view(&self) -> Option<StepperView> {
        view::build(self.steps, self.active, self.is_open())
    }

    /// Apply one input event.
    pub fn handle(&mut self, input: Input) {
        if self.steps.is_empty() {
            return;
        }

        match input {
            Input::Activate | Input::Key(Key::Enter | Key::Space) => self.toggle(),
            Input::Key(Key::Escape) | Input::OutsideClick => self.close(),
            Input::Key(Key::ArrowLeft) => self.step_back(),
            Input::Key(Key::ArrowRight) => self.step_forward(),
            Input::Select(id) => self.select(id),
        }
    }

    fn toggle(&mut self) {
        match self.state {
            PopoverState::Closed => self.open(),
            PopoverState::Open => self.close(),
        }
    }

    fn open(&mut self) {
        debug!("stepper popover opened");
        self.state = PopoverState::Open;
        self.host.attach_listeners();
    }

    fn close(&mut self) {
        if self.state == PopoverState::Open {
            debug!("stepper popover closed");
            self.state = PopoverState::Closed;
            self.host.detach_listeners();
        }
    }

    fn step_back(&mut self) {
        let requested = self.current().saturating_sub(1).max(1);
        self.host.select_step(requested);
    }

    fn step_forward(&mut self) {
        let requested = self.current().saturating_add(1).min(self.total());
        self.host.select_step(requested);
    }

    fn select(&mut self, id: u32) {
        // Rows only exist while the popover is open.
        if self.state == PopoverState::Open {
            self.host.select_step(id);
            self.close();
        }
    }

    fn total(&self) -> u32 {
        u32::try_from(self.steps.len()).unwrap_or(u32::MAX)
    }

    fn current(&self) -> u32 {
        self.active.clamp(1, self.total())
    }
}

impl<H: StepperHost> Drop for Stepper<'_, H> {
    fn drop(&mut self) {
        // Teardown is an exit path like any other; never leak listeners.
        if self.state == PopoverState::Open {
            self.host.detach_listeners();
        }
    }
}
