//! Command-line front end for the form validation engine.
//!
//! Loads a form fixture, replays user input against it and reports whether
//! the form would submit.

pub mod check;
