//! Contact form commands
use std::collections::HashMap;

use serde::Serialize;

use vela_core::Submission;

use super::navigation::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SubmissionInfo {
    pub id: String,
    pub fields: HashMap<String, String>,
    pub received_at: String,
}

impl From<Submission> for SubmissionInfo {
    fn from(submission: Submission) -> Self {
        Self {
            id: submission.id,
            fields: submission.fields,
            received_at: submission.received_at.to_rfc3339(),
        }
    }
}

pub fn fill_field(state: &AppState, name: &str, value: &str) -> CommandResult<bool> {
    match state.with_shell(|shell| Ok(shell.fill_form_field(name, value))) {
        Ok(true) => CommandResult::ok(true),
        Ok(false) => CommandResult::err(format!("No form field named {name}")),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn submit_contact_form(state: &AppState) -> CommandResult<SubmissionInfo> {
    match state.with_shell(|shell| shell.submit_contact_form()) {
        Ok(submission) => CommandResult::ok(submission.into()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn list_submissions(state: &AppState) -> CommandResult<Vec<SubmissionInfo>> {
    match state.with_shell(|shell| Ok(shell.submissions())) {
        Ok(submissions) => {
            CommandResult::ok(submissions.into_iter().map(SubmissionInfo::from).collect())
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}
