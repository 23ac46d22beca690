// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Scalar (primitive) types and their per-backend representations.
//!
//! Every backend question about a primitive is answered from one record,
//! [`ScalarInfo`], selected by an exhaustive `match` on [`ScalarKind`].
//! Adding a kind therefore fails to compile until its record exists.
//!
//! # Backends
//!
//! | Concern | Example (`UINT8`) |
//! |---------|-------------------|
//! | C++ storage type | `uint8_t` |
//! | Java primitive / wrapper | `byte` / `Byte` |
//! | HwParcel call | `readUint8` / `writeUint8` |
//! | HwBlob accessor | `getInt8` / `putInt8` |
//! | VTS declaration | `scalar_type: "uint8_t"` |
//!
//! Java has no unsigned 8/16-bit primitives, so unsigned narrow kinds map
//! onto the signed primitive of the same width. The parcel suffix keeps the
//! signedness; the blob accessor suffix does not.

use crate::config::EmitConfig;
use crate::error::EmitError;
use crate::error_mode::{handle_error, ErrorMode};
use crate::formatter::Formatter;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// The twelve primitive kinds, in their dense-index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ScalarKind {
    #[serde(rename = "bool")]
    Bool = 0,
    #[serde(rename = "pointer")]
    OpaquePointer = 1,
    #[serde(rename = "int8_t")]
    Int8 = 2,
    #[serde(rename = "uint8_t")]
    Uint8 = 3,
    #[serde(rename = "int16_t")]
    Int16 = 4,
    #[serde(rename = "uint16_t")]
    Uint16 = 5,
    #[serde(rename = "int32_t")]
    Int32 = 6,
    #[serde(rename = "uint32_t")]
    Uint32 = 7,
    #[serde(rename = "int64_t")]
    Int64 = 8,
    #[serde(rename = "uint64_t")]
    Uint64 = 9,
    #[serde(rename = "float")]
    Float = 10,
    #[serde(rename = "double")]
    Double = 11,
}

/// Everything the backends need to know about one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarInfo {
    /// IDL keyword.
    pub keyword: &'static str,
    /// C++ storage type.
    pub native: &'static str,
    /// Java primitive.
    pub managed: &'static str,
    /// Java boxed form.
    pub managed_boxed: &'static str,
    /// HwBlob `get`/`put` suffix (signedness collapsed).
    pub accessor_suffix: &'static str,
    /// HwParcel `read`/`write` suffix (signedness preserved).
    pub serialization_suffix: &'static str,
    /// VTS `scalar_type` tag.
    pub test_spec_name: &'static str,
    /// ABI alignment, equal to the size for every scalar.
    pub align_and_size: usize,
}

impl ScalarKind {
    /// All kinds in declaration order; `ALL[k.index()] == k`.
    pub const ALL: [ScalarKind; 12] = [
        ScalarKind::Bool,
        ScalarKind::OpaquePointer,
        ScalarKind::Int8,
        ScalarKind::Uint8,
        ScalarKind::Int16,
        ScalarKind::Uint16,
        ScalarKind::Int32,
        ScalarKind::Uint32,
        ScalarKind::Int64,
        ScalarKind::Uint64,
        ScalarKind::Float,
        ScalarKind::Double,
    ];

    /// Dense position of this kind.
    pub const fn index(self) -> usize {
        self as usize
    }

    // @audit-ok: Simple pattern matching (cyclo 12, cogni 1) - kind to record mapping
    pub const fn info(self) -> &'static ScalarInfo {
        match self {
            ScalarKind::Bool => &ScalarInfo {
                keyword: "bool",
                native: "bool",
                managed: "boolean",
                managed_boxed: "Boolean",
                accessor_suffix: "Bool",
                serialization_suffix: "Bool",
                test_spec_name: "bool_t",
                // NOT standardized by the C++ ABI; this compiler's convention.
                align_and_size: 1,
            },
            ScalarKind::OpaquePointer => &ScalarInfo {
                keyword: "pointer",
                native: "void *",
                managed: "long",
                managed_boxed: "Long",
                accessor_suffix: "Pointer",
                serialization_suffix: "Pointer",
                test_spec_name: "opaque",
                // 64-bit mode
                align_and_size: 8,
            },
            ScalarKind::Int8 => &ScalarInfo {
                keyword: "int8_t",
                native: "int8_t",
                managed: "byte",
                managed_boxed: "Byte",
                accessor_suffix: "Int8",
                serialization_suffix: "Int8",
                test_spec_name: "int8_t",
                align_and_size: 1,
            },
            ScalarKind::Uint8 => &ScalarInfo {
                keyword: "uint8_t",
                native: "uint8_t",
                managed: "byte",
                managed_boxed: "Byte",
                accessor_suffix: "Int8",
                serialization_suffix: "Uint8",
                test_spec_name: "uint8_t",
                align_and_size: 1,
            },
            ScalarKind::Int16 => &ScalarInfo {
                keyword: "int16_t",
                native: "int16_t",
                managed: "short",
                managed_boxed: "Short",
                accessor_suffix: "Int16",
                serialization_suffix: "Int16",
                test_spec_name: "int16_t",
                align_and_size: 2,
            },
            ScalarKind::Uint16 => &ScalarInfo {
                keyword: "uint16_t",
                native: "uint16_t",
                managed: "short",
                managed_boxed: "Short",
                accessor_suffix: "Int16",
                serialization_suffix: "Uint16",
                test_spec_name: "uint16_t",
                align_and_size: 2,
            },
            ScalarKind::Int32 => &ScalarInfo {
                keyword: "int32_t",
                native: "int32_t",
                managed: "int",
                managed_boxed: "Int",
                accessor_suffix: "Int32",
                serialization_suffix: "Int32",
                test_spec_name: "int32_t",
                align_and_size: 4,
            },
            ScalarKind::Uint32 => &ScalarInfo {
                keyword: "uint32_t",
                native: "uint32_t",
                managed: "int",
                managed_boxed: "Int",
                accessor_suffix: "Int32",
                serialization_suffix: "Uint32",
                test_spec_name: "uint32_t",
                align_and_size: 4,
            },
            ScalarKind::Int64 => &ScalarInfo {
                keyword: "int64_t",
                native: "int64_t",
                managed: "long",
                managed_boxed: "Long",
                accessor_suffix: "Int64",
                serialization_suffix: "Int64",
                test_spec_name: "int64_t",
                align_and_size: 8,
            },
            ScalarKind::Uint64 => &ScalarInfo {
                keyword: "uint64_t",
                native: "uint64_t",
                managed: "long",
                managed_boxed: "Long",
                accessor_suffix: "Int64",
                serialization_suffix: "Uint64",
                test_spec_name: "uint64_t",
                align_and_size: 8,
            },
            ScalarKind::Float => &ScalarInfo {
                keyword: "float",
                native: "float",
                managed: "float",
                managed_boxed: "Float",
                accessor_suffix: "Float",
                serialization_suffix: "Float",
                test_spec_name: "float_t",
                align_and_size: 4,
            },
            ScalarKind::Double => &ScalarInfo {
                keyword: "double",
                native: "double",
                managed: "double",
                managed_boxed: "Double",
                accessor_suffix: "Double",
                serialization_suffix: "Double",
                test_spec_name: "double_t",
                align_and_size: 8,
            },
        }
    }

    /// Returns true for the eight integer kinds (`INT8..=UINT64`).
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            ScalarKind::Int8
                | ScalarKind::Uint8
                | ScalarKind::Int16
                | ScalarKind::Uint16
                | ScalarKind::Int32
                | ScalarKind::Uint32
                | ScalarKind::Int64
                | ScalarKind::Uint64
        )
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.info().keyword)
    }
}

impl FromStr for ScalarKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.info().keyword == s)
            .ok_or_else(|| format!("unknown scalar type `{s}`"))
    }
}

/// How a value is held at the use site. Scalars are spelled the same in all modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageMode {
    #[default]
    Stack,
    Argument,
    Result,
}

/// Native type spelling: `name` plus a trailing declarator (`extra`), e.g. `[4]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeType {
    pub name: String,
    pub extra: String,
}

/// Shape of one HwParcel read/write statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializationCall<'a> {
    /// Variable read into or written from.
    pub name: &'a str,
    /// Parcel expression.
    pub parcel_obj: &'a str,
    /// Use `->` instead of `.` on `parcel_obj`.
    pub parcel_obj_is_pointer: bool,
    pub is_reader: bool,
    pub mode: ErrorMode,
    /// Coerce the value argument to the native type.
    pub needs_cast: bool,
}

impl<'a> SerializationCall<'a> {
    /// Reader against a by-value parcel, no cast.
    pub fn read(name: &'a str, parcel_obj: &'a str, mode: ErrorMode) -> Self {
        Self {
            name,
            parcel_obj,
            parcel_obj_is_pointer: false,
            is_reader: true,
            mode,
            needs_cast: false,
        }
    }

    /// Writer against a by-value parcel, no cast.
    pub fn write(name: &'a str, parcel_obj: &'a str, mode: ErrorMode) -> Self {
        Self {
            is_reader: false,
            ..Self::read(name, parcel_obj, mode)
        }
    }

    #[must_use]
    pub fn through_pointer(mut self) -> Self {
        self.parcel_obj_is_pointer = true;
        self
    }

    #[must_use]
    pub fn with_cast(mut self) -> Self {
        self.needs_cast = true;
        self
    }
}

/// Descriptor for one primitive type.
///
/// Immutable and `Copy`; every operation is a pure function of the kind,
/// except emitters, which only append to the caller's sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScalarType {
    kind: ScalarKind,
}

impl ScalarType {
    pub const fn new(kind: ScalarKind) -> Self {
        Self { kind }
    }

    pub const fn kind(&self) -> ScalarKind {
        self.kind
    }

    pub const fn info(&self) -> &'static ScalarInfo {
        self.kind.info()
    }

    /// Identity: a scalar resolves to itself.
    pub const fn resolve_to_scalar(&self) -> &ScalarType {
        self
    }

    /// Whether an enum may use this type as its underlying storage.
    pub const fn is_valid_enum_backing_type(&self) -> bool {
        self.kind.is_integer()
    }

    /// Scalars reference no named types.
    pub fn add_named_types_to_set(&self, _set: &mut BTreeSet<String>) {}

    pub const fn native_type(&self) -> &'static str {
        self.info().native
    }

    /// Native spelling for a given storage mode; `extra` is always empty.
    pub fn native_type_for(&self, _mode: StorageMode) -> NativeType {
        NativeType {
            name: self.native_type().to_string(),
            extra: String::new(),
        }
    }

    pub const fn managed_type(&self) -> &'static str {
        self.info().managed
    }

    pub const fn managed_boxed_type(&self) -> &'static str {
        self.info().managed_boxed
    }

    pub const fn accessor_suffix(&self) -> &'static str {
        self.info().accessor_suffix
    }

    pub const fn serialization_suffix(&self) -> &'static str {
        self.info().serialization_suffix
    }

    pub const fn test_spec_name(&self) -> &'static str {
        self.info().test_spec_name
    }

    /// ABI `(alignment, size)` in bytes.
    ///
    /// `bool` reports `(1, 1)`. That is a convention of this compiler, not a
    /// platform guarantee; generated layouts rely on it.
    pub const fn alignment_and_size(&self) -> (usize, usize) {
        let n = self.info().align_and_size;
        (n, n)
    }

    /// Emit one HwParcel read/write statement followed by its status check.
    ///
    /// ```text
    /// _hidl_err = parcel.readInt32(&x);
    /// if (_hidl_err != ::android::OK) { return _hidl_err; }
    /// ```
    pub fn emit_serialization_call<W: Write>(
        &self,
        out: &mut Formatter<W>,
        call: &SerializationCall<'_>,
        config: &EmitConfig,
    ) -> Result<(), EmitError> {
        log::trace!(
            "[scalar] {} {} via {}",
            if call.is_reader { "read" } else { "write" },
            self.kind,
            call.parcel_obj
        );

        let deref = if call.parcel_obj_is_pointer { "->" } else { "." };
        let op = if call.is_reader { "read" } else { "write" };
        write!(
            out,
            "{} = {}{}{}{}(",
            config.status_var,
            call.parcel_obj,
            deref,
            op,
            self.serialization_suffix()
        )?;

        if call.needs_cast {
            let ptr = if call.is_reader { " *" } else { "" };
            write!(out, "({}{})", self.native_type(), ptr)?;
        }

        if call.is_reader {
            out.write_str("&")?;
        }

        writeln!(out, "{});", call.name)?;

        handle_error(out, call.mode, config)
    }

    /// Emit a HwParcel call without a cast.
    #[allow(clippy::too_many_arguments)]
    pub fn emit_reader_writer<W: Write>(
        &self,
        out: &mut Formatter<W>,
        name: &str,
        parcel_obj: &str,
        parcel_obj_is_pointer: bool,
        is_reader: bool,
        mode: ErrorMode,
        config: &EmitConfig,
    ) -> Result<(), EmitError> {
        let call = SerializationCall {
            name,
            parcel_obj,
            parcel_obj_is_pointer,
            is_reader,
            mode,
            needs_cast: false,
        };
        self.emit_serialization_call(out, &call, config)
    }

    /// Emit a typed HwBlob accessor at `offset`.
    ///
    /// No bounds checking; the layout pass owns offset correctness.
    pub fn emit_managed_field_access<W: Write>(
        &self,
        out: &mut Formatter<W>,
        blob_name: &str,
        field_name: &str,
        offset: &str,
        is_reader: bool,
    ) -> Result<(), EmitError> {
        let suffix = self.accessor_suffix();
        if is_reader {
            writeln!(out, "{field_name} = {blob_name}.get{suffix}({offset});")?;
        } else {
            writeln!(out, "{blob_name}.put{suffix}({offset}, {field_name});")?;
        }
        Ok(())
    }

    /// Emit a Java HwParcel read/write of a top-level argument.
    pub fn emit_managed_reader_writer<W: Write>(
        &self,
        out: &mut Formatter<W>,
        parcel_obj: &str,
        arg_name: &str,
        is_reader: bool,
    ) -> Result<(), EmitError> {
        let suffix = self.accessor_suffix();
        if is_reader {
            writeln!(out, "{arg_name} = {parcel_obj}.read{suffix}();")?;
        } else {
            writeln!(out, "{parcel_obj}.write{suffix}({arg_name});")?;
        }
        Ok(())
    }

    /// Emit the VTS declaration for this scalar.
    pub fn emit_test_spec_declaration<W: Write>(
        &self,
        out: &mut Formatter<W>,
    ) -> Result<(), EmitError> {
        out.write_str("type: TYPE_SCALAR\n")?;
        writeln!(out, "scalar_type: \"{}\"", self.test_spec_name())?;
        Ok(())
    }
}

impl From<ScalarKind> for ScalarType {
    fn from(kind: ScalarKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}
