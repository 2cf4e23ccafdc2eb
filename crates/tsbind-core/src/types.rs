//! The type union and the value-level pieces types are made of.

use serde::Serialize;

/// Name used for everything the generator cannot model precisely
/// (union types, missing annotations).
pub const DYNAMIC: &str = "dynamic";

/// Name of the self type; renders as the enclosing class.
pub const SELF_TYPE: &str = "this";

/// A type expression.
///
/// Closed on purpose: every consumer matches all three variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Type {
    /// A reference by name, possibly generic and possibly an array.
    Named(NamedType),
    /// A function signature.
    Function(FunctionType),
    /// An anonymous structural type. Its identity is where it occurs, not what it is.
    Literal(TypeLiteral),
}

impl Type {
    /// Plain named type without type arguments.
    pub fn named(name: impl Into<String>) -> Self {
        Type::Named(NamedType::new(name))
    }

    /// The sentinel for unmodelled types.
    pub fn dynamic() -> Self {
        Self::named(DYNAMIC)
    }

    pub fn as_named(&self) -> Option<&NamedType> {
        match self {
            Type::Named(named) => Some(named),
            Type::Function(_) | Type::Literal(_) => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Type::Literal(_))
    }
}

impl From<NamedType> for Type {
    fn from(named: NamedType) -> Self {
        Type::Named(named)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedType {
    pub name: String,
    pub type_args: Vec<Type>,
    pub is_array: bool,
}

impl NamedType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_args: Vec::new(),
            is_array: false,
        }
    }

    /// Builder: set generic arguments.
    pub fn with_args(mut self, args: impl IntoIterator<Item = Type>) -> Self {
        self.type_args = args.into_iter().collect();
        self
    }

    /// Builder: mark as array.
    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionType {
    pub return_type: Box<Type>,
    pub parameters: Vec<Parameter>,
}

impl FunctionType {
    pub fn new(return_type: Type, parameters: Vec<Parameter>) -> Self {
        Self {
            return_type: Box::new(return_type),
            parameters,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypeLiteral {
    pub properties: Vec<Property>,
    pub call_signatures: Vec<FunctionType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    pub is_static: bool,
    pub is_readonly: bool,
    pub doc: String,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            is_static: false,
            is_readonly: false,
            doc: String::new(),
        }
    }

    pub fn readonly(mut self) -> Self {
        self.is_readonly = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    pub optional: bool,
    pub doc: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            doc: String::new(),
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}
