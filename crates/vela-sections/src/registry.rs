//! Section registry
//!
//! Insertion-ordered so hosts can build the page (panels, nav links) in
//! the order sections were declared. Lookup is linear; the table is a
//! handful of entries, defined at startup and never mutated afterwards.

use crate::descriptor::SectionDescriptor;

#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    entries: Vec<(String, SectionDescriptor)>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a section. A repeated id replaces the earlier descriptor
    /// and keeps its position.
    pub fn register(&mut self, id: impl Into<String>, descriptor: SectionDescriptor) {
        let id = id.into();
        match self.entries.iter_mut().find(|(known, _)| *known == id) {
            Some(entry) => entry.1 = descriptor,
            None => self.entries.push((id, descriptor)),
        }
    }

    /// Look up the descriptor for `id`.
    pub fn descriptor(&self, id: &str) -> Option<&SectionDescriptor> {
        self.entries
            .iter()
            .find(|(known, _)| known == id)
            .map(|(_, descriptor)| descriptor)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.descriptor(id).is_some()
    }

    /// Known section ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Ordered (id, descriptor) pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &SectionDescriptor)> {
        self.entries
            .iter()
            .map(|(id, descriptor)| (id.as_str(), descriptor))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The six-section registry of the documentation site.
    pub fn site_default() -> Self {
        let mut registry = Self::new();
        registry.register(
            "home",
            SectionDescriptor::new(
                "📚 Spring Boot REST API Documentation",
                "Version 3.2.0 | Updated: October 2025",
                "Spring Boot REST API Documentation v3.2",
            ),
        );
        registry.register(
            "services",
            SectionDescriptor::new(
                "Our Services",
                "Professional Development Solutions",
                "Services - Our Professional Services",
            ),
        );
        registry.register(
            "projects",
            SectionDescriptor::new(
                "Our Projects",
                "Showcasing Excellence in Software Development",
                "Projects - Our Portfolio",
            ),
        );
        registry.register(
            "about",
            SectionDescriptor::new(
                "About Us",
                "Building the Future Together",
                "About - Our Company Story",
            ),
        );
        registry.register(
            "pricing",
            SectionDescriptor::new(
                "Pricing Plans",
                "Choose the Perfect Plan for Your Business",
                "Pricing - Service Plans & Packages",
            ),
        );
        registry.register(
            "contact",
            SectionDescriptor::new(
                "Contact Us",
                "We'd Love to Hear From You",
                "Contact - Get in Touch",
            ),
        );
        registry
    }
}
