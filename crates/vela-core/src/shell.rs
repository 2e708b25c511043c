//! Application shell
//!
//! Central state container wiring the section registry, the navigation
//! controller, and the contact form handler together. Hosts render from
//! this state and call in through the operations below.

use std::sync::Arc;

use parking_lot::RwLock;

use vela_forms::{ContactFormHandler, Submission};
use vela_navigation::{NavigationController, RenderReport};
use vela_page::{HistoryDriver, PageDocument, WindowHistory};
use vela_sections::{SectionDescriptor, SectionRegistry};

use crate::config::Config;
use crate::error::ShellError;
use crate::Result;

pub struct Shell {
    /// Configuration
    config: Config,
    /// Navigation controller owning the page document and history
    controller: Arc<RwLock<NavigationController<PageDocument, WindowHistory>>>,
    /// Contact form handler with its capture log
    form_handler: Arc<RwLock<ContactFormHandler>>,
}

impl Shell {
    /// Build a shell over the default six-section site registry.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_registry(config, SectionRegistry::site_default())
    }

    /// Build a shell over a caller-provided registry. The page document
    /// is constructed from it: one panel and one nav link per section,
    /// header and title primed from the home descriptor.
    pub fn with_registry(config: Config, registry: SectionRegistry) -> Result<Self> {
        let home_descriptor = registry
            .descriptor(&config.home_section)
            .cloned()
            .ok_or_else(|| {
                ShellError::Config(format!(
                    "Home section is not registered: {}",
                    config.home_section
                ))
            })?;

        let mut document = PageDocument::new(home_descriptor.page_title.clone());
        for id in registry.ids() {
            document.add_section(id);
            document.add_nav_link(id);
        }
        document.install_header(
            home_descriptor.title.as_str(),
            home_descriptor.subtitle.as_str(),
        );

        if !config.contact_form_fields.is_empty() {
            let field_names: Vec<&str> = config
                .contact_form_fields
                .iter()
                .map(String::as_str)
                .collect();
            document.install_contact_form(&field_names);
        }

        let history = WindowHistory::new(&config.base_url)?;
        let controller =
            NavigationController::new(registry, config.home_section.clone(), document, history)?;

        Ok(Self {
            config,
            controller: Arc::new(RwLock::new(controller)),
            form_handler: Arc::new(RwLock::new(ContactFormHandler::new())),
        })
    }

    /// Run the first-load contract against the configured base URL.
    pub fn initialize(&self) -> RenderReport {
        let report = self.controller.write().initialize();
        tracing::info!(section = %self.current_section(), "Shell initialized");
        report
    }

    // === Navigation operations ===

    /// The single exposed navigation operation.
    pub fn show_section(&self, id: &str) -> Result<RenderReport> {
        Ok(self.controller.write().show_section(id)?)
    }

    /// Traverse one entry back and replay it, like a popstate event.
    /// Returns `None` when there is no entry to go back to.
    pub fn navigate_back(&self) -> Option<RenderReport> {
        let mut controller = self.controller.write();
        let popped = controller.history_mut().back()?;
        Some(controller.handle_pop_state(popped))
    }

    /// Traverse one entry forward and replay it.
    pub fn navigate_forward(&self) -> Option<RenderReport> {
        let mut controller = self.controller.write();
        let popped = controller.history_mut().forward()?;
        Some(controller.handle_pop_state(popped))
    }

    pub fn current_section(&self) -> String {
        self.controller.read().current_section().to_string()
    }

    pub fn fragment(&self) -> Option<String> {
        self.controller.read().history().fragment()
    }

    pub fn history_depth(&self) -> usize {
        self.controller.read().history().len()
    }

    // === Section registry ===

    pub fn section_ids(&self) -> Vec<String> {
        self.controller
            .read()
            .registry()
            .ids()
            .map(str::to_string)
            .collect()
    }

    pub fn sections(&self) -> Vec<(String, SectionDescriptor)> {
        self.controller
            .read()
            .registry()
            .entries()
            .map(|(id, descriptor)| (id.to_string(), descriptor.clone()))
            .collect()
    }

    // === Contact form operations ===

    /// Type a value into a contact form field.
    /// Returns false when the form or the field is missing.
    pub fn fill_form_field(&self, name: &str, value: &str) -> bool {
        self.controller.write().document_mut().set_form_field(name, value)
    }

    /// Submit the contact form: capture, acknowledge, reset.
    pub fn submit_contact_form(&self) -> Result<Submission> {
        let mut controller = self.controller.write();

        let Some(mut event) = controller.document().submit_contact_form() else {
            return Err(ShellError::MissingForm);
        };

        let submission = self
            .form_handler
            .write()
            .handle_submit(&mut event, controller.document_mut());
        Ok(submission)
    }

    /// Submissions captured so far, oldest first.
    pub fn submissions(&self) -> Vec<Submission> {
        self.form_handler.read().captured().to_vec()
    }

    // === Inspection ===

    /// Read the page document under the lock.
    pub fn with_document<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&PageDocument) -> T,
    {
        f(self.controller.read().document())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Clone for Shell {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            controller: Arc::clone(&self.controller),
            form_handler: Arc::clone(&self.form_handler),
        }
    }
}
