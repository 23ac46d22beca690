// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Per-kind summary table (`hidlc-gen kinds`).

use hidlc_types::{ScalarKind, ScalarType};
use serde::Serialize;
use std::fmt::Write as _;

/// One row of the kind table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindRow {
    pub kind: ScalarKind,
    pub native: &'static str,
    pub managed: &'static str,
    pub managed_boxed: &'static str,
    pub accessor_suffix: &'static str,
    pub serialization_suffix: &'static str,
    pub test_spec_name: &'static str,
    pub alignment: usize,
    pub size: usize,
    pub enum_storage: bool,
}

impl KindRow {
    pub fn new(kind: ScalarKind) -> Self {
        let ty = ScalarType::new(kind);
        let (alignment, size) = ty.alignment_and_size();
        Self {
            kind,
            native: ty.native_type(),
            managed: ty.managed_type(),
            managed_boxed: ty.managed_boxed_type(),
            accessor_suffix: ty.accessor_suffix(),
            serialization_suffix: ty.serialization_suffix(),
            test_spec_name: ty.test_spec_name(),
            alignment,
            size,
            enum_storage: ty.is_valid_enum_backing_type(),
        }
    }
}

/// Rows for every kind, in declaration order.
pub fn kind_table() -> Vec<KindRow> {
    ScalarKind::ALL.into_iter().map(KindRow::new).collect()
}

/// Render the table as aligned plain text.
pub fn render_text(rows: &[KindRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:<10} {:<8} {:<8} {:<8} {:<8} {:<9} {:>5} {:>4}  {}",
        "KIND", "NATIVE", "JAVA", "BOXED", "BLOB", "PARCEL", "VTS", "ALIGN", "SIZE", "ENUM"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<10} {:<10} {:<8} {:<8} {:<8} {:<8} {:<9} {:>5} {:>4}  {}",
            row.kind.to_string(),
            row.native,
            row.managed,
            row.managed_boxed,
            row.accessor_suffix,
            row.serialization_suffix,
            row.test_spec_name,
            row.alignment,
            row.size,
            if row.enum_storage { "yes" } else { "no" }
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_one_row_per_kind() {
        let rows = kind_table();
        assert_eq!(rows.len(), ScalarKind::ALL.len());
        assert_eq!(rows[3].kind, ScalarKind::Uint8);
        assert_eq!(rows[3].serialization_suffix, "Uint8");
        assert_eq!(rows[3].accessor_suffix, "Int8");
    }

    #[test]
    fn test_text_has_header_and_rows() {
        let text = render_text(&kind_table());
        assert_eq!(text.lines().count(), 13);
        assert!(text.lines().next().unwrap().starts_with("KIND"));
        assert!(text.contains("void *"));
    }
}
