use tracing::debug;

use crate::{
    error::InstallerError,
    outcome::Outcome,
    registry::{Context, Registry},
    steps, ui,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Terminated,
}

/// The main menu loop.
pub struct Menu {
    registry: Registry,
    state: MenuState,
}

impl Default for Menu {
    fn default() -> Self {
        Menu::new(steps::catalog())
    }
}

impl Menu {
    pub fn new(registry: Registry) -> Self {
        Menu {
            registry,
            state: MenuState::Running,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Handles one line of operator input: dispatch, then bookkeeping.
    ///
    /// Only the quit step moves the menu to [`MenuState::Terminated`].
    pub fn handle(
        &mut self,
        input: &str,
        ctx: &mut Context<'_>,
    ) -> Result<Outcome, InstallerError> {
        let outcome = self.registry.dispatch(input, ctx)?;

        match &outcome {
            Outcome::Quit => self.state = MenuState::Terminated,
            Outcome::Completed(_) | Outcome::Failed(_) => {
                if let Some(step) = self.registry.resolve(input) {
                    if outcome.is_completed() {
                        ctx.session.record_completed(step.selector);
                    } else {
                        ctx.session.record_not_completed(step.selector);
                    }
                }
            }
            _ => {}
        }
        debug!(?outcome, state = ?self.state, "handled");

        Ok(outcome)
    }

    /// Shows the menu and handles selections until the operator quits.
    pub fn run(&mut self, ctx: &mut Context<'_>) -> Result<(), InstallerError> {
        while self.state == MenuState::Running {
            ui::clear_screen();
            ui::print_menu(&self.registry, &ctx.session, ctx.settings.dry_run);

            let input = ctx.operator.read_line("Enter your choice")?;
            let outcome = self.handle(&input, ctx)?;
            ui::print_outcome(&outcome);

            if self.state == MenuState::Running {
                ctx.operator
                    .acknowledge("Press Enter to return to the main menu")?;
            }
        }
        Ok(())
    }
}
