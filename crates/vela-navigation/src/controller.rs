//! Navigation controller
//!
//! Owns the current-section state and drives the render sequence when it
//! changes. The page document and the window history are injected, so
//! the controller never reaches for ambient state and the whole sequence
//! runs against plain in-memory surfaces in tests.

use serde::Serialize;

use vela_page::{DocumentSurface, HistoryDriver, HistoryRecord};
use vela_sections::SectionRegistry;

use crate::transition::{self, Transition};
use crate::{NavigationError, Result};

/// What a render pass actually reached on the page.
///
/// Missing elements are skipped, never fatal; the report keeps every
/// skip visible to callers and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RenderReport {
    /// Panels that had their active mark removed
    pub sections_cleared: usize,
    /// Whether the target panel existed and was marked active
    pub section_mounted: bool,
    /// Nav links highlighted for the target
    pub links_marked: usize,
    /// Whether the header title element was present
    pub header_title_set: bool,
    /// Whether the header subtitle element was present
    pub header_subtitle_set: bool,
}

enum HistoryMode {
    Push,
    Replace,
}

pub struct NavigationController<D, H>
where
    D: DocumentSurface,
    H: HistoryDriver,
{
    registry: SectionRegistry,
    home_section: String,
    current_section: String,
    document: D,
    history: H,
}

impl<D, H> NavigationController<D, H>
where
    D: DocumentSurface,
    H: HistoryDriver,
{
    /// The home section must be a registry key; the controller starts
    /// there until `initialize` or `show_section` moves it.
    pub fn new(
        registry: SectionRegistry,
        home_section: impl Into<String>,
        document: D,
        history: H,
    ) -> Result<Self> {
        let home_section = home_section.into();
        if !registry.contains(&home_section) {
            return Err(NavigationError::UnknownSection(home_section));
        }

        Ok(Self {
            current_section: home_section.clone(),
            home_section,
            registry,
            document,
            history,
        })
    }

    pub fn current_section(&self) -> &str {
        &self.current_section
    }

    pub fn home_section(&self) -> &str {
        &self.home_section
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// Switch the visible section.
    ///
    /// Validation happens before any page or history state moves: an
    /// unknown id returns the error with everything exactly as it was.
    pub fn show_section(&mut self, target: &str) -> Result<RenderReport> {
        let plan = transition::plan(&self.registry, &self.current_section, target)?;
        Ok(self.apply(&plan, HistoryMode::Push))
    }

    /// React to a history traversal event (back/forward).
    ///
    /// The payload section wins; otherwise the location fragment decides,
    /// falling back to the home section. Unknown targets degrade to a
    /// logged no-op.
    pub fn handle_pop_state(&mut self, record: Option<HistoryRecord>) -> RenderReport {
        let target = match record {
            Some(record) => record.section,
            None => self
                .history
                .fragment()
                .unwrap_or_else(|| self.home_section.clone()),
        };

        match self.show_section(&target) {
            Ok(report) => report,
            Err(err) => {
                tracing::error!(%err, "History traversal targeted an unknown section");
                RenderReport::default()
            }
        }
    }

    /// First-load contract: a recognized location fragment gets the full
    /// render, anything else settles on the home section quietly.
    pub fn initialize(&mut self) -> RenderReport {
        if let Some(fragment) = self.history.fragment() {
            match transition::plan(&self.registry, &self.current_section, &fragment) {
                // First paint rewrites the initial entry, never pushes over it
                Ok(plan) => return self.apply(&plan, HistoryMode::Replace),
                Err(_) => {
                    tracing::debug!(fragment = %fragment, "Ignoring unrecognized fragment on load")
                }
            }
        }

        self.history
            .replace(HistoryRecord::new(self.home_section.as_str()), &self.home_section);
        tracing::debug!(section = %self.home_section, "Settled on home section");
        RenderReport::default()
    }

    fn apply(&mut self, plan: &Transition, mode: HistoryMode) -> RenderReport {
        let sections_cleared = self.document.clear_active_sections();

        let section_mounted = self.document.activate_section(&plan.to);
        if !section_mounted {
            tracing::debug!(section = %plan.to, "Section panel missing, navigation state updated anyway");
        }

        self.current_section = plan.to.clone();

        let links_marked = self.document.highlight_nav_link(&plan.to);
        let header_title_set = self.document.set_header_title(&plan.descriptor.title);
        let header_subtitle_set = self.document.set_header_subtitle(&plan.descriptor.subtitle);
        self.document.set_document_title(&plan.descriptor.page_title);
        self.document.scroll_to_top();

        let record = HistoryRecord::new(plan.to.as_str());
        match mode {
            HistoryMode::Push => self.history.push(record, plan.fragment()),
            HistoryMode::Replace => self.history.replace(record, plan.fragment()),
        }

        let report = RenderReport {
            sections_cleared,
            section_mounted,
            links_marked,
            header_title_set,
            header_subtitle_set,
        };

        tracing::debug!(
            from = %plan.from,
            to = %plan.to,
            sections_cleared = report.sections_cleared,
            links_marked = report.links_marked,
            "Section shown"
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vela_page::{PageDocument, WindowHistory};
    use vela_sections::SectionDescriptor;

    fn registry() -> SectionRegistry {
        let mut registry = SectionRegistry::new();
        registry.register("home", SectionDescriptor::new("Welcome", "Start here", "Docs Home"));
        registry.register("services", SectionDescriptor::new("Services", "What we do", "Services Page"));
        registry.register("projects", SectionDescriptor::new("Projects", "Our work", "Projects Page"));
        registry.register("contact", SectionDescriptor::new("Contact", "Write to us", "Contact Page"));
        registry
    }

    fn controller(base_url: &str) -> NavigationController<PageDocument, WindowHistory> {
        let registry = registry();
        let mut document = PageDocument::new("Docs Home");
        for id in registry.ids() {
            document.add_section(id);
            document.add_nav_link(id);
        }
        document.install_header("Welcome", "Start here");

        let history = WindowHistory::new(base_url).unwrap();
        NavigationController::new(registry, "home", document, history).unwrap()
    }

    #[test]
    fn test_show_section_updates_page_and_history() {
        let mut controller = controller("https://docs.example.com/");

        let report = controller.show_section("services").unwrap();
        assert!(report.section_mounted);
        assert_eq!(report.links_marked, 1);
        assert!(report.header_title_set);
        assert!(report.header_subtitle_set);

        assert_eq!(controller.current_section(), "services");
        assert_eq!(controller.document().active_section(), Some("services"));
        assert_eq!(controller.document().active_panel_count(), 1);
        assert_eq!(controller.document().active_nav_link(), Some("services"));
        assert_eq!(controller.document().header_title(), Some("Services"));
        assert_eq!(controller.document().header_subtitle(), Some("What we do"));
        assert_eq!(controller.document().document_title(), "Services Page");
        assert_eq!(controller.history().fragment(), Some("services".to_string()));
        assert_eq!(controller.history().len(), 2);
    }

    #[test]
    fn test_unknown_section_leaves_everything_untouched() {
        let mut controller = controller("https://docs.example.com/");
        controller.show_section("services").unwrap();
        controller.document_mut().scroll_to(300);

        let err = controller.show_section("blog").unwrap_err();
        assert!(matches!(err, NavigationError::UnknownSection(id) if id == "blog"));

        assert_eq!(controller.current_section(), "services");
        assert_eq!(controller.document().active_section(), Some("services"));
        assert_eq!(controller.document().active_nav_link(), Some("services"));
        assert_eq!(controller.document().header_title(), Some("Services"));
        assert_eq!(controller.document().document_title(), "Services Page");
        assert_eq!(controller.document().scroll_y(), 300);
        assert_eq!(controller.history().fragment(), Some("services".to_string()));
        assert_eq!(controller.history().len(), 2);
    }

    #[test]
    fn test_show_section_is_idempotent_for_visible_state() {
        let mut controller = controller("https://docs.example.com/");

        controller.show_section("projects").unwrap();
        controller.show_section("projects").unwrap();

        assert_eq!(controller.document().active_section(), Some("projects"));
        assert_eq!(controller.document().active_panel_count(), 1);
        assert_eq!(controller.document().active_nav_link(), Some("projects"));
        assert_eq!(controller.document().document_title(), "Projects Page");
        // Each show still pushes its own entry
        assert_eq!(controller.history().len(), 3);
    }

    #[test]
    fn test_initialize_with_recognized_fragment_replaces() {
        let mut controller = controller("https://docs.example.com/#contact");

        let report = controller.initialize();
        assert!(report.section_mounted);

        assert_eq!(controller.current_section(), "contact");
        assert_eq!(controller.document().active_section(), Some("contact"));
        assert_eq!(controller.document().header_title(), Some("Contact"));
        assert_eq!(controller.history().len(), 1);
        assert_eq!(
            controller.history().current_record(),
            Some(&HistoryRecord::new("contact"))
        );
    }

    #[test]
    fn test_initialize_without_fragment_settles_on_home() {
        let mut controller = controller("https://docs.example.com/");

        let report = controller.initialize();
        assert_eq!(report, RenderReport::default());

        // No render pass ran; only the history entry was rewritten
        assert_eq!(controller.current_section(), "home");
        assert_eq!(controller.document().active_section(), None);
        assert_eq!(controller.history().len(), 1);
        assert_eq!(controller.history().fragment(), Some("home".to_string()));
        assert_eq!(
            controller.history().current_record(),
            Some(&HistoryRecord::new("home"))
        );
    }

    #[test]
    fn test_initialize_with_unknown_fragment_settles_on_home() {
        let mut controller = controller("https://docs.example.com/#blog");

        controller.initialize();
        assert_eq!(controller.current_section(), "home");
        assert_eq!(controller.history().fragment(), Some("home".to_string()));
        assert_eq!(controller.history().len(), 1);
    }

    #[test]
    fn test_pop_state_with_payload() {
        let mut controller = controller("https://docs.example.com/");

        let report = controller.handle_pop_state(Some(HistoryRecord::new("projects")));
        assert!(report.section_mounted);
        assert_eq!(controller.document().active_section(), Some("projects"));
    }

    #[test]
    fn test_pop_state_without_payload_falls_back() {
        let mut controller = controller("https://docs.example.com/");
        controller.show_section("services").unwrap();

        // Traverse back to the initial entry, which carries no payload
        let popped = controller.history_mut().back().unwrap();
        assert!(popped.is_none());

        controller.handle_pop_state(popped);
        // Initial entry has no fragment either, so home wins
        assert_eq!(controller.current_section(), "home");
        assert_eq!(controller.document().active_section(), Some("home"));
    }

    #[test]
    fn test_back_traversal_recovers_prior_section() {
        let mut controller = controller("https://docs.example.com/");
        controller.initialize();
        controller.show_section("services").unwrap();
        controller.show_section("projects").unwrap();

        let popped = controller.history_mut().back().unwrap();
        assert_eq!(popped, Some(HistoryRecord::new("services")));

        controller.handle_pop_state(popped);
        assert_eq!(controller.current_section(), "services");
        assert_eq!(controller.document().active_section(), Some("services"));
        assert_eq!(controller.document().header_title(), Some("Services"));
    }

    #[test]
    fn test_pop_state_with_unknown_payload_is_a_no_op() {
        let mut controller = controller("https://docs.example.com/");
        controller.show_section("services").unwrap();

        let report = controller.handle_pop_state(Some(HistoryRecord::new("blog")));
        assert_eq!(report, RenderReport::default());
        assert_eq!(controller.current_section(), "services");
    }

    #[test]
    fn test_missing_panel_is_best_effort() {
        let mut registry = registry();
        registry.register("faq", SectionDescriptor::new("FAQ", "Answers", "FAQ Page"));

        let mut document = PageDocument::new("Docs Home");
        document.add_section("home");
        document.add_nav_link("home");
        document.install_header("Welcome", "Start here");

        let history = WindowHistory::new("https://docs.example.com/").unwrap();
        let mut controller = NavigationController::new(registry, "home", document, history).unwrap();

        let report = controller.show_section("faq").unwrap();
        assert!(!report.section_mounted);
        assert_eq!(report.links_marked, 0);

        // State and history still moved
        assert_eq!(controller.current_section(), "faq");
        assert_eq!(controller.document().active_panel_count(), 0);
        assert_eq!(controller.document().document_title(), "FAQ Page");
        assert_eq!(controller.history().fragment(), Some("faq".to_string()));
    }

    #[test]
    fn test_home_section_must_be_registered() {
        let document = PageDocument::new("Docs");
        let history = WindowHistory::new("https://docs.example.com/").unwrap();
        let result = NavigationController::new(registry(), "splash", document, history);
        assert!(result.is_err());
    }
}
