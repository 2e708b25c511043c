//! In-memory page document
//!
//! Models exactly the parts of the page the shell touches: one panel per
//! content section, nav links carrying a section target, the two header
//! elements, the tab title, the scroll position, and the contact form.
//! A host builds the document once and renders from it afterwards.

use serde::{Deserialize, Serialize};

/// One mutually-exclusive content panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionPanel {
    /// Section id the panel belongs to
    pub id: String,
    /// Whether the panel is currently visible
    pub active: bool,
}

/// A navigation link carrying a section reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavLink {
    /// Section id the link navigates to
    pub target: String,
    /// Whether the link is highlighted
    pub active: bool,
}

/// A captured contact-form submission event.
///
/// Handlers must call [`SubmitEvent::prevent_default`] to stop the
/// native submission; the flag stays observable for tests and hosts.
#[derive(Debug, Clone)]
pub struct SubmitEvent {
    fields: Vec<(String, String)>,
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self {
            fields,
            default_prevented: false,
        }
    }

    /// Block the native form submission.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Raw field pairs in document order, duplicates included.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

/// Effectful page operations the navigation and form layers perform.
///
/// Every operation that can miss its element reports the miss instead of
/// failing: renders degrade field by field and keep going.
pub trait DocumentSurface {
    /// Remove the active mark from every panel. Returns how many were cleared.
    fn clear_active_sections(&mut self) -> usize;

    /// Mark the panel for `id` active. Returns false when no such panel exists.
    fn activate_section(&mut self, id: &str) -> bool;

    /// Highlight the links targeting `id` and clear the rest.
    /// Returns the number of links highlighted.
    fn highlight_nav_link(&mut self, id: &str) -> usize;

    /// Set the header title text. Returns false when the element is absent.
    fn set_header_title(&mut self, text: &str) -> bool;

    /// Set the header subtitle text. Returns false when the element is absent.
    fn set_header_subtitle(&mut self, text: &str) -> bool;

    /// Set the browser tab title.
    fn set_document_title(&mut self, text: &str);

    /// Scroll the viewport back to the top.
    fn scroll_to_top(&mut self);

    /// Present a transient notice to the user.
    fn show_notice(&mut self, message: &str);

    /// Clear every contact form field. Returns false when no form exists.
    fn reset_contact_form(&mut self) -> bool;
}

/// The authoritative document state.
#[derive(Debug, Clone, Serialize)]
pub struct PageDocument {
    sections: Vec<SectionPanel>,
    nav_links: Vec<NavLink>,
    header_title: Option<String>,
    header_subtitle: Option<String>,
    document_title: String,
    scroll_y: u32,
    notices: Vec<String>,
    form_fields: Option<Vec<(String, String)>>,
}

impl PageDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            sections: Vec::new(),
            nav_links: Vec::new(),
            header_title: None,
            header_subtitle: None,
            document_title: title.into(),
            scroll_y: 0,
            notices: Vec::new(),
            form_fields: None,
        }
    }

    /// Add a content panel for `id`, initially hidden.
    pub fn add_section(&mut self, id: impl Into<String>) {
        self.sections.push(SectionPanel {
            id: id.into(),
            active: false,
        });
    }

    /// Add a navigation link targeting `target`.
    pub fn add_nav_link(&mut self, target: impl Into<String>) {
        self.nav_links.push(NavLink {
            target: target.into(),
            active: false,
        });
    }

    /// Install the two header elements with their initial text.
    pub fn install_header(&mut self, title: impl Into<String>, subtitle: impl Into<String>) {
        self.header_title = Some(title.into());
        self.header_subtitle = Some(subtitle.into());
    }

    /// Install an empty contact form with the given field names.
    pub fn install_contact_form(&mut self, field_names: &[&str]) {
        self.form_fields = Some(
            field_names
                .iter()
                .map(|name| (name.to_string(), String::new()))
                .collect(),
        );
    }

    /// Type a value into the first form field named `name`.
    /// Returns false when the form or the field is missing.
    pub fn set_form_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        let Some(fields) = self.form_fields.as_mut() else {
            return false;
        };

        match fields.iter_mut().find(|(n, _)| n == name) {
            Some(field) => {
                field.1 = value.into();
                true
            }
            None => false,
        }
    }

    /// Append another input with the given name, duplicates allowed.
    /// Returns false when no form exists.
    pub fn push_form_field(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        match self.form_fields.as_mut() {
            Some(fields) => {
                fields.push((name.into(), value.into()));
                true
            }
            None => false,
        }
    }

    /// Fire a submit event for the contact form, if one exists.
    pub fn submit_contact_form(&self) -> Option<SubmitEvent> {
        self.form_fields
            .as_ref()
            .map(|fields| SubmitEvent::new(fields.clone()))
    }

    /// Scroll the viewport to an absolute offset.
    pub fn scroll_to(&mut self, y: u32) {
        self.scroll_y = y;
    }

    // === Inspection ===

    pub fn sections(&self) -> &[SectionPanel] {
        &self.sections
    }

    pub fn nav_links(&self) -> &[NavLink] {
        &self.nav_links
    }

    /// Id of the first active panel, if any.
    pub fn active_section(&self) -> Option<&str> {
        self.sections
            .iter()
            .find(|panel| panel.active)
            .map(|panel| panel.id.as_str())
    }

    pub fn active_panel_count(&self) -> usize {
        self.sections.iter().filter(|panel| panel.active).count()
    }

    /// Target of the first highlighted nav link, if any.
    pub fn active_nav_link(&self) -> Option<&str> {
        self.nav_links
            .iter()
            .find(|link| link.active)
            .map(|link| link.target.as_str())
    }

    pub fn active_link_count(&self) -> usize {
        self.nav_links.iter().filter(|link| link.active).count()
    }

    pub fn header_title(&self) -> Option<&str> {
        self.header_title.as_deref()
    }

    pub fn header_subtitle(&self) -> Option<&str> {
        self.header_subtitle.as_deref()
    }

    pub fn document_title(&self) -> &str {
        &self.document_title
    }

    pub fn scroll_y(&self) -> u32 {
        self.scroll_y
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Current form field pairs, when a form is installed.
    pub fn form_fields(&self) -> Option<&[(String, String)]> {
        self.form_fields.as_deref()
    }
}

impl DocumentSurface for PageDocument {
    fn clear_active_sections(&mut self) -> usize {
        let mut cleared = 0;
        for panel in &mut self.sections {
            if panel.active {
                panel.active = false;
                cleared += 1;
            }
        }
        cleared
    }

    fn activate_section(&mut self, id: &str) -> bool {
        match self.sections.iter_mut().find(|panel| panel.id == id) {
            Some(panel) => {
                panel.active = true;
                true
            }
            None => false,
        }
    }

    fn highlight_nav_link(&mut self, id: &str) -> usize {
        let mut marked = 0;
        for link in &mut self.nav_links {
            link.active = link.target == id;
            if link.active {
                marked += 1;
            }
        }
        marked
    }

    fn set_header_title(&mut self, text: &str) -> bool {
        match self.header_title.as_mut() {
            Some(title) => {
                *title = text.to_string();
                true
            }
            None => false,
        }
    }

    fn set_header_subtitle(&mut self, text: &str) -> bool {
        match self.header_subtitle.as_mut() {
            Some(subtitle) => {
                *subtitle = text.to_string();
                true
            }
            None => false,
        }
    }

    fn set_document_title(&mut self, text: &str) {
        self.document_title = text.to_string();
    }

    fn scroll_to_top(&mut self) {
        self.scroll_y = 0;
    }

    fn show_notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn reset_contact_form(&mut self) -> bool {
        match self.form_fields.as_mut() {
            Some(fields) => {
                for (_, value) in fields.iter_mut() {
                    value.clear();
                }
                true
            }
            None => false,
        }
    }
}
