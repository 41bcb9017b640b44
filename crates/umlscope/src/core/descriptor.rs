//! Type descriptors
//!
//! The metadata a [`TypeSource`](super::TypeSource) hands to the diagram
//! generator: the kind of a type, its supertypes and its declared members.
//! Descriptors deserialize from the catalog JSON format.

use serde::Deserialize;
use std::fmt;

/// Kind of a declared type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
    Enum,
}

impl TypeKind {
    /// PlantUML keyword opening a declaration of this kind
    pub fn keyword(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Access and storage modifiers attached to a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
}

/// A declared field
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            modifiers: Vec::new(),
        }
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }
}

/// A declared method
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default, rename = "parameters")]
    pub parameter_types: Vec<String>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameter_types: Vec::new(),
            modifiers: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, type_name: impl Into<String>) -> Self {
        self.parameter_types.push(type_name.into());
        self
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }
}

/// Everything the generator knows about one type
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default)]
    pub superclass: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            superclass: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Class)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Interface)
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Enum)
    }

    pub fn extends(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_keywords() {
        assert_eq!(TypeKind::Class.keyword(), "class");
        assert_eq!(TypeKind::Interface.keyword(), "interface");
        assert_eq!(TypeKind::Enum.to_string(), "enum");
    }

    #[test]
    fn test_builder() {
        let ty = TypeDescriptor::class("a.Dog")
            .extends("a.Animal")
            .implements("a.Pet")
            .with_field(FieldDescriptor::new("name", "java.lang.String").with_modifier(Modifier::Private))
            .with_method(MethodDescriptor::new("bark").with_parameter("int"));

        assert_eq!(ty.kind, TypeKind::Class);
        assert_eq!(ty.superclass.as_deref(), Some("a.Animal"));
        assert_eq!(ty.interfaces, vec!["a.Pet"]);
        assert_eq!(ty.fields[0].modifiers, vec![Modifier::Private]);
        assert_eq!(ty.methods[0].parameter_types, vec!["int"]);
    }

    #[test]
    fn test_deserialize_minimal() {
        let ty: TypeDescriptor = serde_json::from_str(r#"{ "name": "a.Empty" }"#).unwrap();
        assert_eq!(ty.kind, TypeKind::Class);
        assert!(ty.superclass.is_none());
        assert!(ty.fields.is_empty());
        assert!(ty.methods.is_empty());
    }

    #[test]
    fn test_deserialize_members() {
        let json = r#"{
            "name": "a.Color",
            "kind": "enum",
            "superclass": "java.lang.Enum",
            "fields": [ { "name": "RED", "type": "a.Color", "modifiers": ["public", "static", "final"] } ],
            "methods": [ { "name": "valueOf", "parameters": ["java.lang.String"], "modifiers": ["public", "static"] } ]
        }"#;
        let ty: TypeDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(ty.kind, TypeKind::Enum);
        assert_eq!(ty.fields[0].type_name, "a.Color");
        assert_eq!(
            ty.fields[0].modifiers,
            vec![Modifier::Public, Modifier::Static, Modifier::Final]
        );
        assert_eq!(ty.methods[0].parameter_types, vec!["java.lang.String"]);
    }

    #[test]
    fn test_deserialize_unknown_modifier_fails() {
        let json = r#"{ "name": "a.B", "fields": [ { "name": "x", "type": "int", "modifiers": ["sealed"] } ] }"#;
        assert!(serde_json::from_str::<TypeDescriptor>(json).is_err());
    }
}
