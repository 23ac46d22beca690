// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fragment rendering for `hidlc-gen emit` and `hidlc-gen layout`.

use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use hidlc_types::{
    EmitConfig, ErrorMode, Formatter, ScalarKind, ScalarType, SerializationCall, StructLayout,
    Type,
};
use std::path::Path;

/// Which backend fragment to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// C++ HwParcel read/write statement
    Parcel,
    /// Java HwBlob field accessor
    JavaField,
    /// Java HwParcel argument read/write
    JavaParcel,
    /// VTS scalar declaration
    Vts,
}

/// Call-site parameters for a single fragment.
#[derive(Debug, Clone)]
pub struct EmitRequest {
    pub name: String,
    pub container: String,
    pub container_is_pointer: bool,
    pub is_reader: bool,
    pub needs_cast: bool,
    pub mode: ErrorMode,
    pub offset: String,
    /// Nesting depth the fragment is emitted at.
    pub depth: usize,
}

impl Default for EmitRequest {
    fn default() -> Self {
        Self {
            name: "value".to_string(),
            container: "parcel".to_string(),
            container_is_pointer: false,
            is_reader: true,
            needs_cast: false,
            mode: ErrorMode::Goto,
            offset: "0".to_string(),
            depth: 0,
        }
    }
}

/// Load `path` if given, otherwise the default configuration.
pub fn load_config(path: Option<&Path>) -> Result<EmitConfig> {
    match path {
        Some(path) => {
            tracing::info!("Loading config from: {:?}", path);
            EmitConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))
        }
        None => Ok(EmitConfig::default()),
    }
}

fn sink(config: &EmitConfig, depth: usize) -> Formatter<Vec<u8>> {
    let mut out = Formatter::with_indent(Vec::new(), config.indent.clone());
    for _ in 0..depth {
        out.indent();
    }
    out
}

/// Render one backend fragment for `kind`.
pub fn render_fragment(
    kind: ScalarKind,
    backend: Backend,
    request: &EmitRequest,
    config: &EmitConfig,
) -> Result<String> {
    let ty = ScalarType::new(kind);
    let mut out = sink(config, request.depth);

    tracing::debug!(?kind, ?backend, "rendering fragment");
    match backend {
        Backend::Parcel => {
            let call = SerializationCall {
                name: &request.name,
                parcel_obj: &request.container,
                parcel_obj_is_pointer: request.container_is_pointer,
                is_reader: request.is_reader,
                mode: request.mode,
                needs_cast: request.needs_cast,
            };
            ty.emit_serialization_call(&mut out, &call, config)?;
        }
        Backend::JavaField => ty.emit_managed_field_access(
            &mut out,
            &request.container,
            &request.name,
            &request.offset,
            request.is_reader,
        )?,
        Backend::JavaParcel => ty.emit_managed_reader_writer(
            &mut out,
            &request.container,
            &request.name,
            request.is_reader,
        )?,
        Backend::Vts => ty.emit_test_spec_declaration(&mut out)?,
    }

    String::from_utf8(out.into_inner()).context("emitted fragment is not UTF-8")
}

/// Parse a `name:kind` field spec.
pub fn parse_field(spec: &str) -> Result<(String, Type)> {
    let (name, kind) = spec
        .split_once(':')
        .ok_or_else(|| anyhow!("field `{spec}` must be written as name:kind"))?;
    if name.is_empty() {
        return Err(anyhow!("field `{spec}` has an empty name"));
    }
    let kind: ScalarKind = kind.parse().map_err(|e: String| anyhow!(e))?;
    Ok((name.to_string(), Type::scalar(kind)))
}

/// Where and how `render_layout` emits its accessors.
#[derive(Debug, Clone)]
pub struct LayoutRequest {
    pub blob: String,
    pub owner: String,
    pub is_reader: bool,
    pub depth: usize,
}

impl Default for LayoutRequest {
    fn default() -> Self {
        Self {
            blob: "_hidl_blob".to_string(),
            owner: String::new(),
            is_reader: true,
            depth: 0,
        }
    }
}

/// Lay out `specs` and render the offset table followed by HwBlob accessors.
pub fn render_layout(
    specs: &[String],
    request: &LayoutRequest,
    config: &EmitConfig,
) -> Result<String> {
    let fields = specs
        .iter()
        .map(|s| parse_field(s))
        .collect::<Result<Vec<_>>>()?;
    let layout = StructLayout::compute(&fields)?;

    let mut out = sink(config, request.depth);
    for field in &layout.fields {
        out.write_str(&format!(
            "// {:<16} {:<10} offset {:>3} size {}\n",
            field.name, field.ty, field.offset, field.size
        ))?;
    }
    out.write_str(&format!(
        "// size {} align {}\n",
        layout.size, layout.alignment
    ))?;
    layout.emit_managed_fields(
        &mut out,
        &request.blob,
        &request.owner,
        "_hidl_offset",
        request.is_reader,
    )?;

    String::from_utf8(out.into_inner()).context("emitted layout is not UTF-8")
}
