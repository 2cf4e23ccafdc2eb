//! Declarations: classes, interfaces and their members.

use serde::Serialize;

use crate::types::{NamedType, Parameter, Property, Type};

/// Method markers kept from the source. Accessibility, `readonly`, `async`
/// and `abstract` are dropped; only `static` has a Dart spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Static,
    Override,
}

impl Modifier {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "static" => Some(Self::Static),
            "override" => Some(Self::Override),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Getter {
    pub name: String,
    pub return_type: Type,
    pub is_static: bool,
    pub doc: String,
}

impl Getter {
    pub fn new(name: impl Into<String>, return_type: Type) -> Self {
        Self {
            name: name.into(),
            return_type,
            is_static: false,
            doc: String::new(),
        }
    }
}

/// Accessor pair half derived from a property.
impl From<&Property> for Getter {
    fn from(property: &Property) -> Self {
        Self {
            name: property.name.clone(),
            return_type: property.ty.clone(),
            is_static: property.is_static,
            doc: property.doc.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Setter {
    pub name: String,
    pub parameter: Parameter,
    pub is_static: bool,
    pub doc: String,
}

impl Setter {
    pub fn new(name: impl Into<String>, parameter: Parameter) -> Self {
        Self {
            name: name.into(),
            parameter,
            is_static: false,
            doc: String::new(),
        }
    }
}

/// Setter whose single parameter carries the property's name and type.
impl From<&Property> for Setter {
    fn from(property: &Property) -> Self {
        Self {
            name: property.name.clone(),
            parameter: Parameter {
                name: property.name.clone(),
                ty: property.ty.clone(),
                optional: false,
                doc: property.doc.clone(),
            },
            is_static: property.is_static,
            doc: property.doc.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    pub name: String,
    pub modifiers: Vec<Modifier>,
    pub return_type: Type,
    pub parameters: Vec<Parameter>,
    pub doc: String,
}

impl Method {
    pub fn new(name: impl Into<String>, return_type: Type, parameters: Vec<Parameter>) -> Self {
        Self {
            name: name.into(),
            modifiers: Vec::new(),
            return_type,
            parameters,
            doc: String::new(),
        }
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.contains(&Modifier::Static)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Constructor {
    pub parameters: Vec<Parameter>,
    pub doc: String,
}

impl Constructor {
    pub fn new(parameters: Vec<Parameter>) -> Self {
        Self {
            parameters,
            doc: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Class {
    pub name: String,
    pub is_abstract: bool,
    pub type_params: Vec<String>,
    pub super_type: Option<NamedType>,
    pub interfaces: Vec<NamedType>,
    pub constructors: Vec<Constructor>,
    pub properties: Vec<Property>,
    pub getters: Vec<Getter>,
    pub setters: Vec<Setter>,
    pub methods: Vec<Method>,
    pub doc: String,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_abstract: false,
            type_params: Vec::new(),
            super_type: None,
            interfaces: Vec::new(),
            constructors: Vec::new(),
            properties: Vec::new(),
            getters: Vec::new(),
            setters: Vec::new(),
            methods: Vec::new(),
            doc: String::new(),
        }
    }

    pub fn has_getter(&self, name: &str) -> bool {
        self.getters.iter().any(|g| g.name == name)
    }

    pub fn has_setter(&self, name: &str) -> bool {
        self.setters.iter().any(|s| s.name == name)
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interface {
    pub name: String,
    pub type_params: Vec<String>,
    pub super_types: Vec<NamedType>,
    /// Only ever filled by constructor inheritance.
    pub constructors: Vec<Constructor>,
    pub properties: Vec<Property>,
    pub methods: Vec<Method>,
    pub doc: String,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_params: Vec::new(),
            super_types: Vec::new(),
            constructors: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            doc: String::new(),
        }
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }
}
