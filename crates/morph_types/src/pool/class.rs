//! User class registration.

use super::{PoolData, TypePool};
use crate::{Idx, RegistrationError, Tag, TypeFlags};

/// Whether a registered class can be instantiated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Concrete,
    Interface,
}

/// Declaration of a user type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassDef {
    pub name: String,
    pub kind: ClassKind,
    /// Element type when the class is a collection.
    pub element: Option<Idx>,
    /// Marks an associative collection even when the element is not a pair.
    pub key_value: bool,
    /// Constructor parameter lists, in declaration order.
    pub constructors: Vec<Vec<Idx>>,
}

impl ClassDef {
    /// Declare a concrete class with no constructors yet.
    pub fn concrete(name: impl Into<String>) -> Self {
        ClassDef {
            name: name.into(),
            kind: ClassKind::Concrete,
            element: None,
            key_value: false,
            constructors: Vec::new(),
        }
    }

    /// Declare an interface.
    pub fn interface(name: impl Into<String>) -> Self {
        ClassDef {
            kind: ClassKind::Interface,
            ..Self::concrete(name)
        }
    }

    /// Make the class a collection of `elem`.
    #[must_use]
    pub fn with_element(mut self, elem: Idx) -> Self {
        self.element = Some(elem);
        self
    }

    /// Mark the class as an associative collection.
    #[must_use]
    pub fn with_key_value(mut self) -> Self {
        self.key_value = true;
        self
    }

    /// Add a constructor taking `params`.
    #[must_use]
    pub fn with_constructor(mut self, params: &[Idx]) -> Self {
        self.constructors.push(params.to_vec());
        self
    }

    /// Add a parameterless constructor.
    #[must_use]
    pub fn with_default_constructor(self) -> Self {
        self.with_constructor(&[])
    }

    fn referenced_types(&self) -> impl Iterator<Item = Idx> + '_ {
        self.element
            .into_iter()
            .chain(self.constructors.iter().flatten().copied())
    }

    fn flags(&self, data: &PoolData) -> TypeFlags {
        let mut flags = TypeFlags::IS_CLASS;
        if self.kind == ClassKind::Interface {
            flags |= TypeFlags::IS_INTERFACE;
        }
        if let Some(elem) = self.element {
            flags |= TypeFlags::collection_of(data.flags_of(elem));
        }
        if self.key_value {
            flags |= TypeFlags::IS_COLLECTION | TypeFlags::IS_KEY_VALUE;
        }
        flags
    }
}

impl TypePool {
    /// Register a user class and return its type.
    #[tracing::instrument(level = "debug", skip(self, def), fields(name = %def.name))]
    #[allow(clippy::cast_possible_truncation)]
    pub fn register_class(&self, def: ClassDef) -> Result<Idx, RegistrationError> {
        let mut data = self.data.write();

        if data.class_names.contains_key(&def.name) {
            return Err(RegistrationError::DuplicateClass { name: def.name });
        }
        if def.kind == ClassKind::Interface && !def.constructors.is_empty() {
            return Err(RegistrationError::InterfaceConstructor { name: def.name });
        }
        let unknown = def.referenced_types().find(|&idx| !data.contains(idx));
        if let Some(idx) = unknown {
            return Err(RegistrationError::UnknownType {
                name: def.name,
                idx,
            });
        }

        let flags = def.flags(&data);
        let class_index = data.classes.len() as u32;
        let idx = data.push(Tag::Class, class_index, flags);
        data.class_names.insert(def.name.clone(), idx);
        data.classes.push(def);
        tracing::debug!(?idx, ?flags, "class registered");
        Ok(idx)
    }

    /// Look up a registered class by name.
    pub fn class_by_name(&self, name: &str) -> Option<Idx> {
        self.data.read().class_names.get(name).copied()
    }

    /// Declaration of a registered class.
    pub fn class_def(&self, idx: Idx) -> Option<ClassDef> {
        self.data.read().class(idx).cloned()
    }
}
