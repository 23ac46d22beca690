// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Library half of the `hidlc-gen` tool, split out so the renderers can be
//! tested without spawning the binary.

pub mod render;
pub mod report;

pub use render::{
    load_config, parse_field, render_fragment, render_layout, Backend, EmitRequest, LayoutRequest,
};
pub use report::{kind_table, render_text, KindRow};
