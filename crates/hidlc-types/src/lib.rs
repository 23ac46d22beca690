// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # hidlc-types
//!
//! Scalar type model for the hidlc interface compiler.
//!
//! Each of the twelve primitive kinds knows how it is spelled and moved in
//! every backend the compiler targets:
//!
//! | Backend | Query / emitter |
//! |---------|-----------------|
//! | C++ | [`ScalarType::native_type`] |
//! | Java | [`ScalarType::managed_type`], [`ScalarType::managed_boxed_type`] |
//! | HwParcel (wire) | [`ScalarType::emit_serialization_call`] |
//! | HwBlob (flattened buffer) | [`ScalarType::emit_managed_field_access`] |
//! | VTS | [`ScalarType::emit_test_spec_declaration`] |
//! | ABI | [`ScalarType::alignment_and_size`] |
//!
//! ## Quick Start
//!
//! ```rust
//! use hidlc_types::{EmitConfig, ErrorMode, Formatter, ScalarKind, ScalarType, SerializationCall};
//!
//! let int32 = ScalarType::new(ScalarKind::Int32);
//! let mut out = Formatter::buffer();
//! int32
//!     .emit_serialization_call(
//!         &mut out,
//!         &SerializationCall::read("count", "parcel", ErrorMode::Return),
//!         &EmitConfig::default(),
//!     )
//!     .unwrap();
//!
//! assert_eq!(
//!     out.as_str(),
//!     "_hidl_err = parcel.readInt32(&count);\n\
//!      if (_hidl_err != ::android::OK) { return _hidl_err; }\n\n"
//! );
//! ```

pub mod config;
pub mod error;
pub mod error_mode;
pub mod formatter;
pub mod layout;
pub mod scalar;
pub mod types;

pub use config::EmitConfig;
pub use error::{ConfigError, EmitError, TypeError};
pub use error_mode::{handle_error, ErrorMode};
pub use formatter::Formatter;
pub use layout::{align_to, FieldLayout, StructLayout};
pub use scalar::{NativeType, ScalarInfo, ScalarKind, ScalarType, SerializationCall, StorageMode};
pub use types::{EnumType, Type, TypeDef};
