//! Navigation commands
use serde::Serialize;

use vela_core::{RenderReport, SectionDescriptor, Shell};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Snapshot of the page state a frontend renders from.
#[derive(Debug, Serialize)]
pub struct PageView {
    pub current_section: String,
    pub fragment: Option<String>,
    pub document_title: String,
    pub header_title: Option<String>,
    pub header_subtitle: Option<String>,
    pub active_nav_link: Option<String>,
    pub history_depth: usize,
    pub render: Option<RenderReport>,
}

#[derive(Debug, Serialize)]
pub struct SectionInfo {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub page_title: String,
}

impl From<(String, SectionDescriptor)> for SectionInfo {
    fn from((id, descriptor): (String, SectionDescriptor)) -> Self {
        Self {
            id,
            title: descriptor.title,
            subtitle: descriptor.subtitle,
            page_title: descriptor.page_title,
        }
    }
}

fn page_view(shell: &Shell, render: Option<RenderReport>) -> PageView {
    let current_section = shell.current_section();
    let fragment = shell.fragment();
    let history_depth = shell.history_depth();

    shell.with_document(|doc| PageView {
        current_section,
        fragment,
        document_title: doc.document_title().to_string(),
        header_title: doc.header_title().map(str::to_string),
        header_subtitle: doc.header_subtitle().map(str::to_string),
        active_nav_link: doc.active_nav_link().map(str::to_string),
        history_depth,
        render,
    })
}

pub fn show_section(state: &AppState, section: &str) -> CommandResult<PageView> {
    match state.with_shell(|shell| {
        let report = shell.show_section(section)?;
        Ok(page_view(shell, Some(report)))
    }) {
        Ok(view) => CommandResult::ok(view),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn navigate_back(state: &AppState) -> CommandResult<PageView> {
    match state.with_shell(|shell| Ok(shell.navigate_back().map(|r| page_view(shell, Some(r))))) {
        Ok(Some(view)) => CommandResult::ok(view),
        Ok(None) => CommandResult::err("No earlier history entry".to_string()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn navigate_forward(state: &AppState) -> CommandResult<PageView> {
    match state.with_shell(|shell| Ok(shell.navigate_forward().map(|r| page_view(shell, Some(r))))) {
        Ok(Some(view)) => CommandResult::ok(view),
        Ok(None) => CommandResult::err("No later history entry".to_string()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn get_page(state: &AppState) -> CommandResult<PageView> {
    match state.with_shell(|shell| Ok(page_view(shell, None))) {
        Ok(view) => CommandResult::ok(view),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn list_sections(state: &AppState) -> CommandResult<Vec<SectionInfo>> {
    match state.with_shell(|shell| Ok(shell.sections())) {
        Ok(sections) => {
            CommandResult::ok(sections.into_iter().map(SectionInfo::from).collect())
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}
