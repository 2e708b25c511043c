//! Pure transition planning
//!
//! Validates a requested section change against the registry and
//! gathers everything the render pass needs, without touching the page.
//! An unknown id fails here, so no state has moved when it does.

use vela_sections::{SectionDescriptor, SectionRegistry};

use crate::{NavigationError, Result};

/// A validated section change, ready to render.
#[derive(Debug, Clone)]
pub struct Transition {
    /// Section that was current when the plan was made
    pub from: String,
    /// Validated target section
    pub to: String,
    /// Display metadata for the target
    pub descriptor: SectionDescriptor,
}

impl Transition {
    /// URL fragment reflecting the target section.
    pub fn fragment(&self) -> &str {
        &self.to
    }
}

/// Plan a change from `current` to `target`.
pub fn plan(registry: &SectionRegistry, current: &str, target: &str) -> Result<Transition> {
    let descriptor = registry
        .descriptor(target)
        .ok_or_else(|| NavigationError::UnknownSection(target.to_string()))?;

    Ok(Transition {
        from: current.to_string(),
        to: target.to_string(),
        descriptor: descriptor.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SectionRegistry {
        let mut registry = SectionRegistry::new();
        registry.register("home", SectionDescriptor::new("Home", "Start", "Home"));
        registry.register("contact", SectionDescriptor::new("Contact", "Write", "Contact"));
        registry
    }

    #[test]
    fn test_plan_known_section() {
        let transition = plan(&registry(), "home", "contact").unwrap();
        assert_eq!(transition.from, "home");
        assert_eq!(transition.to, "contact");
        assert_eq!(transition.descriptor.title, "Contact");
        assert_eq!(transition.fragment(), "contact");
    }

    #[test]
    fn test_plan_unknown_section() {
        let err = plan(&registry(), "home", "blog").unwrap_err();
        assert!(matches!(err, NavigationError::UnknownSection(id) if id == "blog"));
    }

    #[test]
    fn test_plan_same_section() {
        // Re-showing the current section is a valid transition
        let transition = plan(&registry(), "home", "home").unwrap();
        assert_eq!(transition.from, transition.to);
    }
}
