// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Struct field layout over scalar-resolvable members.
//!
//! Offsets follow natural alignment: every field starts at the next multiple
//! of its alignment, and the struct size is rounded up to the largest field
//! alignment.

use crate::error::{EmitError, TypeError};
use crate::formatter::Formatter;
use crate::types::Type;
use std::io::Write;

/// Align offset up to `alignment`.
///
/// # Panics
///
/// In debug builds, if `alignment` is not a power of two (this includes 0).
pub const fn align_to(offset: usize, alignment: usize) -> usize {
    debug_assert!(alignment.is_power_of_two(), "alignment must be a power of two");
    (offset + alignment - 1) & !(alignment - 1)
}

/// Placement of a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    pub name: String,
    pub ty: Type,
    pub offset: usize,
    pub size: usize,
    pub alignment: usize,
}

/// Computed layout of a struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructLayout {
    pub fields: Vec<FieldLayout>,
    pub size: usize,
    pub alignment: usize,
}

impl StructLayout {
    /// Lay out `fields` in declaration order.
    pub fn compute<S: AsRef<str>>(fields: &[(S, Type)]) -> Result<Self, TypeError> {
        let mut laid_out = Vec::with_capacity(fields.len());
        let mut offset = 0usize;
        let mut max_alignment = 1usize;

        for (name, ty) in fields {
            let name: &str = name.as_ref();
            let Some((alignment, size)) = ty.alignment_and_size() else {
                return Err(TypeError::UnsizedField {
                    field: name.to_string(),
                    ty: ty.to_string(),
                });
            };

            offset = align_to(offset, alignment);
            max_alignment = max_alignment.max(alignment);

            laid_out.push(FieldLayout {
                name: name.to_string(),
                ty: ty.clone(),
                offset,
                size,
                alignment,
            });
            offset += size;
        }

        let size = align_to(offset, max_alignment);
        log::debug!(
            "[layout] {} fields, size={} align={}",
            laid_out.len(),
            size,
            max_alignment
        );

        Ok(Self {
            fields: laid_out,
            size,
            alignment: max_alignment,
        })
    }

    /// Emit a HwBlob accessor for every field.
    ///
    /// Offsets are written as `<base_offset> + <field offset>`; members are
    /// addressed as `<owner>.<field>` (or bare when `owner` is empty).
    pub fn emit_managed_fields<W: Write>(
        &self,
        out: &mut Formatter<W>,
        blob_name: &str,
        owner: &str,
        base_offset: &str,
        is_reader: bool,
    ) -> Result<(), EmitError> {
        for field in &self.fields {
            // compute() only admits scalar-resolvable fields
            let Some(scalar) = field.ty.resolve_to_scalar() else {
                continue;
            };
            let member = if owner.is_empty() {
                field.name.clone()
            } else {
                format!("{owner}.{}", field.name)
            };
            let offset = format!("{base_offset} + {}", field.offset);
            scalar.emit_managed_field_access(out, blob_name, &member, &offset, is_reader)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::ScalarKind;

    #[test]
    fn test_align_to() {
        assert_eq!(align_to(0, 8), 0);
        assert_eq!(align_to(1, 4), 4);
        assert_eq!(align_to(5, 2), 6);
        assert_eq!(align_to(8, 8), 8);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "alignment must be a power of two")]
    fn test_align_to_rejects_zero_alignment() {
        let _ = align_to(3, 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "alignment must be a power of two")]
    fn test_align_to_rejects_non_power_of_two() {
        let _ = align_to(5, 3);
    }

    #[test]
    fn test_padding_between_fields() {
        let layout = StructLayout::compute(&[
            ("flag", Type::scalar(ScalarKind::Bool)),
            ("value", Type::scalar(ScalarKind::Int64)),
            ("small", Type::scalar(ScalarKind::Uint16)),
        ])
        .unwrap();

        let offsets: Vec<_> = layout.fields.iter().map(|f| f.offset).collect();
        assert_eq!(offsets, vec![0, 8, 16]);
        assert_eq!(layout.alignment, 8);
        assert_eq!(layout.size, 24);
    }

    #[test]
    fn test_empty_struct() {
        let layout = StructLayout::compute::<&str>(&[]).unwrap();
        assert_eq!(layout.size, 0);
        assert_eq!(layout.alignment, 1);
    }

    #[test]
    fn test_string_field_rejected() {
        let err = StructLayout::compute(&[("name", Type::String)]).unwrap_err();
        assert_eq!(
            err,
            TypeError::UnsizedField {
                field: "name".into(),
                ty: "string".into(),
            }
        );
    }

    #[test]
    fn test_emit_fields_with_owner() {
        let layout = StructLayout::compute(&[
            ("x", Type::scalar(ScalarKind::Float)),
            ("id", Type::scalar(ScalarKind::Uint8)),
        ])
        .unwrap();
        let mut out = Formatter::buffer();
        layout
            .emit_managed_fields(&mut out, "blob", "point", "_hidl_offset", false)
            .unwrap();
        assert_eq!(
            out.as_str(),
            "blob.putFloat(_hidl_offset + 0, point.x);\nblob.putInt8(_hidl_offset + 4, point.id);\n"
        );
    }
}
