//! The session controller: binds a form, reacts to its events and gates submission.

use std::collections::HashSet;

use formdom::{Event, EventKind, Form};

use crate::aggregate::{self, FormValues, RequiredUnit};
use crate::apply;
use crate::classify::{self, Classification, classify};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::host::{Control, FormHost};
use crate::result::{FieldError, ValidationResult};

/// Presentation state of a validation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// No event has classified the unit yet (or it was reset).
    Untouched,
    Valid,
    Invalid,
}

/// What [`FormValidate::dispatch`] did with an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Not an event the controller listens to.
    Ignored,
    /// A bound field was reclassified.
    Validated {
        control: String,
        unit: String,
        valid: bool,
    },
    /// The form was valid; these are its values.
    Submitted(FormValues),
    /// The form was invalid; every invalid unit is now marked.
    Rejected(ValidationResult),
    /// Markers were cleared and the form reset.
    Reset,
}

/// Validation controller for one form.
///
/// # Example
///
/// ```ignore
/// let mut validate = FormValidate::new(form, Config::default())?;
/// validate.init();
///
/// let mut event = Event::submit(validate.form().id());
/// match validate.dispatch(&mut event) {
///     Outcome::Submitted(values) => send(values),
///     Outcome::Rejected(result) => log::info!("{} invalid fields", result.errors().len()),
///     _ => {}
/// }
/// ```
#[derive(Debug)]
pub struct FormValidate<H: FormHost = Form> {
    form: H,
    config: Config,
    /// Controls with listeners attached by `init`. `None` until then.
    bound: Option<HashSet<String>>,
}

impl<H: FormHost> FormValidate<H> {
    /// Bind `form`. Fails before anything is attached if the root is not a
    /// form element or the configuration is unusable.
    pub fn new(form: H, config: Config) -> Result<Self> {
        if !form.is_form() {
            return Err(Error::InvalidForm);
        }
        config.validate()?;
        Ok(Self {
            form,
            config,
            bound: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn form(&self) -> &H {
        &self.form
    }

    /// Mutable access for the host page, e.g. to simulate typing.
    pub fn form_mut(&mut self) -> &mut H {
        &mut self.form
    }

    pub fn into_form(self) -> H {
        self.form
    }

    pub fn is_initialized(&self) -> bool {
        self.bound.is_some()
    }

    /// Whether `init` attached listeners to this control.
    pub fn is_bound(&self, control: &str) -> bool {
        self.bound.as_ref().is_some_and(|b| b.contains(control))
    }

    /// Attach listeners to every required control and opt the form out of
    /// native browser validation. Calling it again does nothing.
    pub fn init(&mut self) {
        if self.bound.is_some() {
            log::debug!("[controller] init called twice, ignoring");
            return;
        }

        let form_id = self.form.form_id();
        self.form.set_attribute(&form_id, "novalidate", "");

        let controls = self.bindable_controls();
        let bound: HashSet<String> = controls.iter().map(|c| c.id.clone()).collect();
        log::debug!(
            "[controller] bound {} controls on form '{}'",
            bound.len(),
            form_id
        );
        self.bound = Some(bound);

        if self.config.prescan {
            for control in controls {
                let filled = if control.kind.is_checkable() {
                    control.checked
                } else {
                    !control.value.is_empty()
                };
                if filled {
                    self.validation(&control.id);
                }
            }
        }
    }

    /// Controls whose validation unit is required, in document order.
    fn bindable_controls(&self) -> Vec<Control> {
        let required: HashSet<String> = aggregate::required_units(&self.form, &self.config)
            .into_iter()
            .map(|u| u.unit)
            .collect();
        self.form
            .controls()
            .into_iter()
            .filter(|c| !c.kind.is_submit_or_reset())
            .filter(|c| required.contains(&classify::unit_of(&self.form, &self.config, c)))
            .collect()
    }

    /// Reclassify `control` and update its unit. Returns the control's validity;
    /// unknown IDs are invalid and change nothing.
    pub fn validation(&mut self, control: &str) -> bool {
        self.validate_control(control).is_some_and(|c| c.valid)
    }

    fn validate_control(&mut self, control: &str) -> Option<Classification> {
        let Some(result) = classify(&self.form, &self.config, control) else {
            log::debug!("[controller] '{control}' is not a control of the form");
            return None;
        };

        if let Some(max) = result.rule.max_length() {
            self.form
                .set_attribute(&result.control, "maxlength", &max.to_string());
        }

        if result.valid {
            apply::apply_valid(&mut self.form, &self.config, &result.unit);
        } else {
            apply::apply_invalid(&mut self.form, &self.config, &result.unit, &result.message);
        }
        log::debug!(
            "[controller] {} -> {}",
            result.unit,
            if result.valid { "valid" } else { "invalid" }
        );
        Some(result)
    }

    /// Route an event the way the attached listeners would.
    pub fn dispatch(&mut self, event: &mut Event) -> Outcome {
        let Some(bound) = &self.bound else {
            return Outcome::Ignored;
        };
        let listening = event.kind.is_field_event() && bound.contains(&event.target);
        let on_form = event.target == self.form.form_id();

        match event.kind {
            EventKind::Submit if on_form => {
                let result = self.submit(event);
                if result.is_valid() {
                    Outcome::Submitted(self.values())
                } else {
                    Outcome::Rejected(result)
                }
            }
            EventKind::Reset if on_form => {
                self.reset();
                Outcome::Reset
            }
            _ if listening => {
                let target = event.target.clone();
                match self.validate_control(&target) {
                    Some(result) => Outcome::Validated {
                        control: result.control,
                        unit: result.unit,
                        valid: result.valid,
                    },
                    None => Outcome::Ignored,
                }
            }
            _ => Outcome::Ignored,
        }
    }

    /// Handle a submit: cancel the native action, and if the form is not valid,
    /// mark every unmarked required unit invalid and focus the first one.
    pub fn submit(&mut self, event: &mut Event) -> ValidationResult {
        event.prevent_default();

        let invalid = aggregate::invalid_units(&self.form, &self.config);
        if invalid.is_empty() {
            log::debug!("[controller] submit accepted");
            return ValidationResult::Valid;
        }

        let mut errors = Vec::with_capacity(invalid.len());
        for unit in &invalid {
            let message = classify::message_for(&self.form, &self.config, &unit.marker, &unit.unit);
            apply::apply_invalid(&mut self.form, &self.config, &unit.unit, &message);
            errors.push(FieldError {
                field_name: self.field_name(unit),
                target: unit.unit.clone(),
                message,
            });
        }

        if let Some(target) = invalid.first().and_then(|u| self.focus_target(&u.unit)) {
            self.form.focus(&target);
        }

        let result = ValidationResult::Invalid(errors);
        log::debug!("[controller] submit rejected, {result}");
        result
    }

    fn field_name(&self, unit: &RequiredUnit) -> String {
        let named = |c: Control| c.name.filter(|n| !n.is_empty());
        self.form
            .control(&unit.marker)
            .and_then(named)
            .or_else(|| {
                self.form
                    .controls_within(&unit.unit)
                    .into_iter()
                    .find_map(named)
            })
            .unwrap_or_else(|| unit.unit.clone())
    }

    /// The unit itself if it is a control, else the first control inside it.
    fn focus_target(&self, unit: &str) -> Option<String> {
        if self.form.control(unit).is_some() {
            return Some(unit.to_string());
        }
        self.form
            .controls_within(unit)
            .into_iter()
            .next()
            .map(|c| c.id)
    }

    /// True when every required unit carries the valid class.
    pub fn has_valid_fields(&self) -> bool {
        aggregate::is_valid(&self.form, &self.config)
    }

    /// Same as [`has_valid_fields`](Self::has_valid_fields).
    pub fn check_valid_fields(&self) -> bool {
        self.has_valid_fields()
    }

    pub fn values(&self) -> FormValues {
        aggregate::collect_values(&self.form, &self.config)
    }

    /// Clear every valid/invalid marker and message, then reset the form.
    pub fn reset(&mut self) {
        aggregate::reset(&mut self.form, &self.config);
    }

    /// Reclassify every required control, e.g. after the page pre-fills the form.
    /// Returns the resulting overall validity.
    pub fn revalidate_all(&mut self) -> bool {
        let ids: Vec<String> = self
            .bindable_controls()
            .into_iter()
            .map(|c| c.id)
            .collect();
        for id in &ids {
            self.validate_control(id);
        }
        self.has_valid_fields()
    }

    /// Same as [`revalidate_all`](Self::revalidate_all).
    pub fn trigger(&mut self) -> bool {
        self.revalidate_all()
    }

    /// Current state of the unit `unit`.
    pub fn field_state(&self, unit: &str) -> FieldState {
        if self.form.has_class(unit, &self.config.valid_class) {
            FieldState::Valid
        } else if self.form.has_class(unit, &self.config.invalid_class) {
            FieldState::Invalid
        } else {
            FieldState::Untouched
        }
    }

    /// The unit the control `control` reports to.
    pub fn unit_of(&self, control: &str) -> Option<String> {
        let control = self.form.control(control)?;
        Some(classify::unit_of(&self.form, &self.config, &control))
    }
}
