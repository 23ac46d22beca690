// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type wrapper the scalar descriptor plugs into.
//!
//! Only the variants needed to exercise scalar resolution are modelled here:
//! enums (backed by a scalar), typedefs (aliasing any type) and strings (the
//! non-scalar case).

use crate::error::TypeError;
use crate::scalar::{ScalarKind, ScalarType};
use std::collections::BTreeSet;
use std::fmt;

/// A type reference as seen by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Scalar(ScalarType),
    Enum(EnumType),
    Typedef(TypeDef),
    String,
}

impl Type {
    pub const fn scalar(kind: ScalarKind) -> Self {
        Type::Scalar(ScalarType::new(kind))
    }

    /// The scalar this type is represented as, if any.
    ///
    /// Enums resolve to their storage type, typedefs to their target.
    pub fn resolve_to_scalar(&self) -> Option<ScalarType> {
        match self {
            Type::Scalar(scalar) => Some(*scalar.resolve_to_scalar()),
            Type::Enum(e) => Some(e.storage),
            Type::Typedef(def) => def.target.resolve_to_scalar(),
            Type::String => None,
        }
    }

    pub fn is_valid_enum_storage_type(&self) -> bool {
        self.resolve_to_scalar()
            .is_some_and(|s| s.is_valid_enum_backing_type())
    }

    /// ABI `(alignment, size)` for scalar-resolvable types.
    pub fn alignment_and_size(&self) -> Option<(usize, usize)> {
        self.resolve_to_scalar().map(|s| s.alignment_and_size())
    }

    /// Collect the fully-qualified names this type references.
    pub fn add_named_types_to_set(&self, set: &mut BTreeSet<String>) {
        match self {
            Type::Scalar(scalar) => scalar.add_named_types_to_set(set),
            Type::Enum(e) => {
                set.insert(e.name.clone());
            }
            Type::Typedef(def) => {
                set.insert(def.name.clone());
            }
            Type::String => {}
        }
    }
}

impl From<ScalarKind> for Type {
    fn from(kind: ScalarKind) -> Self {
        Type::scalar(kind)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Scalar(scalar) => fmt::Display::fmt(scalar, f),
            Type::Enum(e) => f.pad(&e.name),
            Type::Typedef(def) => f.pad(&def.name),
            Type::String => f.pad("string"),
        }
    }
}

/// Enum declaration reduced to what layout needs: its name and storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    name: String,
    storage: ScalarType,
}

impl EnumType {
    /// Declare an enum over `storage`, which must resolve to an integer scalar.
    pub fn new(name: impl Into<String>, storage: &Type) -> Result<Self, TypeError> {
        let name = name.into();
        match storage.resolve_to_scalar() {
            Some(scalar) if scalar.is_valid_enum_backing_type() => {
                log::debug!("[types] enum {} stored as {}", name, scalar);
                Ok(Self {
                    name,
                    storage: scalar,
                })
            }
            _ => Err(TypeError::InvalidEnumStorage {
                enum_name: name,
                storage: storage.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn storage(&self) -> ScalarType {
        self.storage
    }
}

/// Named alias for another type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    name: String,
    target: Box<Type>,
}

impl TypeDef {
    pub fn new(name: impl Into<String>, target: Type) -> Self {
        Self {
            name: name.into(),
            target: Box::new(target),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> &Type {
        &self.target
    }
}
