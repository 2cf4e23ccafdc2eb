//! The root aggregate handed from extraction to normalization to emission.

use serde::Serialize;

use crate::decl::{Class, Interface};

/// Classes and interfaces in declaration order.
///
/// Lookups are linear scans; libraries hold a few hundred declarations at most.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Library {
    pub classes: Vec<Class>,
    pub interfaces: Vec<Interface>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_by_name(&self, name: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn class_index(&self, name: &str) -> Option<usize> {
        self.classes.iter().position(|c| c.name == name)
    }

    pub fn interface_by_name(&self, name: &str) -> Option<&Interface> {
        self.interfaces.iter().find(|i| i.name == name)
    }

    /// Append another library, keeping declaration order.
    pub fn extend(&mut self, other: Library) {
        self.classes.extend(other.classes);
        self.interfaces.extend(other.interfaces);
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.interfaces.is_empty()
    }
}
