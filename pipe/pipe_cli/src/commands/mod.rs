//! Command implementations and decision reporting.

pub mod check;
pub mod demo;

use pipe_core::{log_decision, AllOf, ConditionalPipe};
use pipe_user::SharedUser;
use serde::Serialize;

/// The outcome of checking a user against a set of pipes.
#[derive(Debug, Serialize)]
pub struct Decision {
    /// Full name of the user that was checked
    pub subject: String,

    /// Labels of the pipes, in evaluation order
    pub checked: Vec<String>,

    /// Whether every pipe held
    pub granted: bool,
}

impl Decision {
    /// Runs the pipes against the user and records the result
    pub fn evaluate(user: &SharedUser, pipes: &AllOf) -> Self {
        let subject = user.read().full_name();
        let granted = pipes.check();
        log_decision!(&subject, granted, pipes => pipes.len());

        Self {
            subject,
            checked: pipes.pipes().iter().map(|p| p.describe()).collect(),
            granted,
        }
    }
}

/// Prints a decision to stdout
pub fn report(decision: &Decision, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(decision)?);
    } else {
        let verdict = if decision.granted { "granted" } else { "denied" };
        println!("{}: {}", verdict, decision.subject);
    }
    Ok(())
}
