use crate::error::TransitionError;
use crate::form::{CompiledForm, Step};
use crate::rules::{AnswerMap, NavigationTarget, match_navigation};
use crate::trace::TraceFormatter;

/// The outcome of one submit on a [`FlowSession`].
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// The flow moved to another step. `reason` explains the rule that fired;
    /// `None` means the flow fell through to the structurally next step.
    Advanced {
        step_number: u32,
        reason: Option<String>,
    },
    /// The flow reached its terminal state. `seed_offering_ids` is the
    /// static, author-curated list attached to the step the flow ended on —
    /// distinct from dynamic rule matching, which the caller runs separately
    /// over the final answers.
    Finished {
        seed_offering_ids: Vec<String>,
        reason: Option<String>,
    },
    /// A rule redirected the run to an external URL. The session is terminal
    /// and no offerings are produced; the caller performs the redirect.
    Redirected { url: String, reason: String },
}

/// The state machine for one form run.
///
/// A session is owned by exactly one client and holds the only mutable state
/// in the engine: the accumulated answers and the step pointer. Terminal
/// sessions refuse further submits; a new run is a new session object.
pub struct FlowSession<'a> {
    form: &'a CompiledForm,
    current_step: u32,
    answers: AnswerMap,
    completed_steps: Vec<u32>,
    terminal: bool,
}

impl<'a> FlowSession<'a> {
    /// Starts a new run at the lowest-numbered step.
    pub fn new(form: &'a CompiledForm) -> Self {
        let first = form.first_step().map(|step| step.step_number).unwrap_or(1);
        Self {
            form,
            current_step: first,
            answers: AnswerMap::new(),
            completed_steps: Vec::new(),
            terminal: false,
        }
    }

    pub fn current_step(&self) -> Option<&'a Step> {
        self.form.step(self.current_step)
    }

    pub fn current_step_number(&self) -> u32 {
        self.current_step
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn completed_steps(&self) -> &[u32] {
        &self.completed_steps
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Merges the submitted entries and runs the current step's navigation
    /// rules.
    ///
    /// The required-field gate runs first: every required input field of the
    /// current step must be present and non-empty in `entries`, or the
    /// transition is refused with the session untouched and the same step is
    /// re-presented to the caller.
    pub fn submit(&mut self, entries: AnswerMap) -> Result<Transition, TransitionError> {
        if self.terminal {
            return Err(TransitionError::Finished);
        }
        let step = self
            .form
            .step(self.current_step)
            .ok_or(TransitionError::UnknownStep(self.current_step))?;

        let missing: Vec<String> = step
            .required_inputs()
            .filter(|field| {
                entries
                    .get(&field.id)
                    .is_none_or(|value| value.is_empty_answer())
            })
            .map(|field| field.id.clone())
            .collect();
        if !missing.is_empty() {
            return Err(TransitionError::MissingRequired { fields: missing });
        }

        self.answers.extend(entries);

        match match_navigation(&step.navigation_rules, &self.answers) {
            Some(matched) => {
                let reason = TraceFormatter::format_trace(&matched.trace);
                match &matched.rule.target {
                    NavigationTarget::Step { step_number } => {
                        let next = *step_number;
                        self.advance_to(next);
                        Ok(Transition::Advanced {
                            step_number: next,
                            reason: Some(reason),
                        })
                    }
                    NavigationTarget::End => {
                        self.terminal = true;
                        Ok(Transition::Finished {
                            seed_offering_ids: step.offering_ids.clone(),
                            reason: Some(reason),
                        })
                    }
                    NavigationTarget::ExternalUrl { url } => {
                        self.terminal = true;
                        Ok(Transition::Redirected {
                            url: url.clone(),
                            reason,
                        })
                    }
                }
            }
            // No rule fired: fall through to the structurally next step, or
            // end the run the same way an `End` target would.
            None => match self.form.next_step_after(self.current_step) {
                Some(next) => {
                    let next = next.step_number;
                    self.advance_to(next);
                    Ok(Transition::Advanced {
                        step_number: next,
                        reason: None,
                    })
                }
                None => {
                    self.terminal = true;
                    Ok(Transition::Finished {
                        seed_offering_ids: step.offering_ids.clone(),
                        reason: None,
                    })
                }
            },
        }
    }

    fn advance_to(&mut self, step_number: u32) {
        self.completed_steps.push(self.current_step);
        self.current_step = step_number;
    }
}
