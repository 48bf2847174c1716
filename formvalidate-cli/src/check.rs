//! `check` subcommand: replay input against a fixture and submit it.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use formdom::{Event, Form};
use formvalidate::{Config, FieldError, FormValidate, FormValues, Outcome};
use serde::Serialize;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Form fixture (JSON).
    pub fixture: PathBuf,

    /// Validation options (JSON, same keys as the page options).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Type VALUE into the control named NAME.
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub sets: Vec<(String, String)>,

    /// Check the radio/checkbox named NAME whose value is VALUE.
    #[arg(long = "check", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub checks: Vec<(String, String)>,

    /// Classify fields the fixture already fills in.
    #[arg(long)]
    pub prescan: bool,
}

/// What a submit attempt produced.
#[derive(Debug, Serialize)]
pub struct Report {
    pub valid: bool,
    pub errors: Vec<FieldError>,
    pub values: FormValues,
}

/// Parse `name=value`. The value may be empty or contain `=`.
pub fn parse_assignment(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got `{s}`")),
    }
}

pub fn run(args: &CheckArgs) -> Result<Report> {
    let json = fs::read_to_string(&args.fixture)
        .with_context(|| format!("reading fixture {}", args.fixture.display()))?;
    let form = Form::from_json(&json)
        .with_context(|| format!("parsing fixture {}", args.fixture.display()))?;

    let mut config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str::<Config>(&json)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => Config::default(),
    };
    if args.prescan {
        config.prescan = true;
    }

    check(form, config, &args.sets, &args.checks)
}

/// Bind `form`, apply the input in order, then submit.
pub fn check(
    form: Form,
    config: Config,
    sets: &[(String, String)],
    checks: &[(String, String)],
) -> Result<Report> {
    let mut validate = FormValidate::new(form, config)?;
    validate.init();

    for (name, value) in sets {
        let id = value_control(validate.form(), name)?;
        validate.form_mut().set_value(&id, value.as_str())?;
        validate.dispatch(&mut Event::input(id));
    }
    for (name, value) in checks {
        let id = toggle_control(validate.form(), name, value)?;
        validate.form_mut().set_checked(&id, true)?;
        validate.dispatch(&mut Event::change(id));
    }

    let form_id = validate.form().id().to_string();
    let report = match validate.dispatch(&mut Event::submit(form_id)) {
        Outcome::Submitted(values) => Report {
            valid: true,
            errors: Vec::new(),
            values,
        },
        Outcome::Rejected(result) => Report {
            valid: false,
            errors: result.into_errors(),
            values: validate.values(),
        },
        other => bail!("submit was not handled: {other:?}"),
    };

    log::info!(
        "[check] valid={} errors={} values={}",
        report.valid,
        report.errors.len(),
        report.values.len()
    );
    Ok(report)
}

fn value_control(form: &Form, name: &str) -> Result<String> {
    form.query(|e| e.is_control() && !e.is_checkable() && e.name.as_deref() == Some(name))
        .first()
        .map(|e| e.id.clone())
        .with_context(|| format!("no text control named `{name}`"))
}

fn toggle_control(form: &Form, name: &str, value: &str) -> Result<String> {
    form.query(|e| e.is_checkable() && e.name.as_deref() == Some(name) && e.value == value)
        .first()
        .map(|e| e.id.clone())
        .with_context(|| format!("no radio/checkbox `{name}` with value `{value}`"))
}
