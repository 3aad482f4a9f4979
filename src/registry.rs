//! Step catalog types and the dispatcher.

use tracing::info;

use crate::{
    cmd::CommandExecutor,
    config::Settings,
    error::InstallerError,
    lsblk::Drive,
    operator::Operator,
    outcome::{Outcome, Unmet},
    probe::Probe,
    session::Session,
};

/// Everything a step action may touch.
pub struct Context<'a> {
    pub session: Session,
    pub exec: &'a dyn CommandExecutor,
    pub probe: &'a dyn Probe,
    pub operator: &'a mut dyn Operator,
    pub settings: &'a Settings,
}

impl<'a> Context<'a> {
    /// A context with a fresh session.
    pub fn new(
        exec: &'a dyn CommandExecutor,
        probe: &'a dyn Probe,
        operator: &'a mut dyn Operator,
        settings: &'a Settings,
    ) -> Self {
        Context {
            session: Session::new(),
            exec,
            probe,
            operator,
            settings,
        }
    }
}

pub type ActionResult = Result<Outcome, InstallerError>;

/// Capability a step needs before its action may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    Always,
    DriveSelected,
    InsideTargetRoot,
}

impl Precondition {
    fn check(self, ctx: &Context<'_>) -> Option<Unmet> {
        match self {
            Precondition::Always => None,
            Precondition::DriveSelected => ctx
                .session
                .selected_drive()
                .is_none()
                .then_some(Unmet::NoDriveSelected),
            Precondition::InsideTargetRoot => {
                (!ctx.probe.inside_target_root()).then_some(Unmet::NotInsideTargetRoot)
            }
        }
    }
}

#[derive(Clone, Copy)]
pub enum Action {
    Run(fn(&mut Context<'_>) -> ActionResult),
    /// Receives the selected drive; only valid with [`Precondition::DriveSelected`].
    OnDrive(fn(&mut Context<'_>, &Drive) -> ActionResult),
    Quit,
}

/// One menu entry.
#[derive(Clone, Copy)]
pub struct Step {
    pub selector: u8,
    pub label: &'static str,
    pub precondition: Precondition,
    pub action: Action,
}

impl Step {
    pub fn is_quit(&self) -> bool {
        matches!(self.action, Action::Quit)
    }
}

/// Ordered catalog of steps with unique selectors.
pub struct Registry {
    steps: Vec<Step>,
}

impl Registry {
    /// # Panics
    /// If two steps share a selector, or a drive action is not gated on a
    /// selected drive. Both are catalog bugs.
    pub fn new(steps: Vec<Step>) -> Self {
        for (i, step) in steps.iter().enumerate() {
            assert!(
                steps[..i].iter().all(|s| s.selector != step.selector),
                "duplicate selector {}",
                step.selector
            );
            if let Action::OnDrive(_) = step.action {
                assert_eq!(
                    step.precondition,
                    Precondition::DriveSelected,
                    "step {} needs a drive but does not require one",
                    step.selector
                );
            }
        }
        Registry { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Looks up the step named by the operator's input. Only plain decimal
    /// digits name a step; signs and other decoration do not.
    pub fn resolve(&self, input: &str) -> Option<&Step> {
        let input = input.trim();
        if !input.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let selector: u8 = input.parse().ok()?;
        self.steps.iter().find(|s| s.selector == selector)
    }

    /// Resolves `input`, checks the step's precondition and runs its action.
    pub fn dispatch(&self, input: &str, ctx: &mut Context<'_>) -> ActionResult {
        let Some(step) = self.resolve(input) else {
            info!(input, "invalid choice");
            return Ok(Outcome::InvalidChoice);
        };

        if let Some(unmet) = step.precondition.check(ctx) {
            info!(selector = step.selector, ?unmet, "precondition not met");
            return Ok(Outcome::Unmet(unmet));
        }

        info!(selector = step.selector, label = step.label, "running step");
        match step.action {
            Action::Run(action) => action(ctx),
            Action::OnDrive(action) => match ctx.session.selected_drive().cloned() {
                Some(drive) => action(ctx, &drive),
                None => Ok(Outcome::Unmet(Unmet::NoDriveSelected)),
            },
            Action::Quit => Ok(Outcome::Quit),
        }
    }
}
