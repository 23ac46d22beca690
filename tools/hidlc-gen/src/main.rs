// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! hidlc-gen CLI
//!
//! Prints scalar type tables and emits single backend fragments.
//!
//! # Usage
//!
//! ```bash
//! # Per-kind table (text or JSON)
//! hidlc-gen kinds
//! hidlc-gen kinds --json
//!
//! # One C++ parcel statement
//! hidlc-gen emit uint16_t parcel --name count --container _hidl_reply --pointer --mode return
//!
//! # Struct offsets plus HwBlob accessors
//! hidlc-gen layout flag:bool value:int64_t --owner obj
//!
//! # Custom symbols
//! hidlc-gen gen-config --output hidlc.toml
//! hidlc-gen --config hidlc.toml emit int8_t parcel --write --depth 1
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hidlc_gen::{
    kind_table, load_config, render_fragment, render_layout, render_text, Backend, EmitRequest,
    LayoutRequest,
};
use hidlc_types::{EmitConfig, ErrorMode, ScalarKind};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// hidlc scalar code emitter
#[derive(Parser, Debug)]
#[command(name = "hidlc-gen")]
#[command(about = "Scalar type tables and backend fragments for the hidlc interface compiler")]
#[command(version)]
struct Args {
    /// Emission configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the per-kind representation table
    Kinds {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Emit one backend fragment for a scalar kind
    Emit {
        /// Scalar kind (bool, pointer, int8_t ... uint64_t, float, double)
        kind: ScalarKind,

        /// Backend to emit for
        #[arg(value_enum)]
        backend: Backend,

        /// Value, argument or field expression
        #[arg(long, default_value = "value")]
        name: String,

        /// Parcel or blob expression
        #[arg(long, default_value = "parcel")]
        container: String,

        /// Container is a pointer (use `->`)
        #[arg(long)]
        pointer: bool,

        /// Emit a write instead of a read
        #[arg(long)]
        write: bool,

        /// Cast the value argument to the native type
        #[arg(long)]
        cast: bool,

        /// Error policy (ignore, goto, break, return)
        #[arg(long, default_value = "goto")]
        mode: ErrorMode,

        /// Byte offset expression for blob accessors
        #[arg(long, default_value = "0")]
        offset: String,

        /// Indentation depth (units come from the config's `indent`)
        #[arg(long, default_value = "0")]
        depth: usize,
    },

    /// Lay out a struct of scalar fields and emit its HwBlob accessors
    Layout {
        /// Fields as name:kind
        #[arg(required = true)]
        fields: Vec<String>,

        /// Blob expression
        #[arg(long, default_value = "_hidl_blob")]
        blob: String,

        /// Owning object expression for members
        #[arg(long, default_value = "")]
        owner: String,

        /// Emit puts instead of gets
        #[arg(long)]
        write: bool,

        /// Indentation depth (units come from the config's `indent`)
        #[arg(long, default_value = "0")]
        depth: usize,
    },

    /// Write a default configuration file
    GenConfig {
        /// Output file path
        #[arg(short, long, default_value = "hidlc.toml")]
        output: PathBuf,
    },
}

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("[ERROR] {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Commands::Kinds { json } => cmd_kinds(json),
        Commands::Emit {
            kind,
            backend,
            name,
            container,
            pointer,
            write,
            cast,
            mode,
            offset,
            depth,
        } => {
            let request = EmitRequest {
                name,
                container,
                container_is_pointer: pointer,
                is_reader: !write,
                needs_cast: cast,
                mode,
                offset,
                depth,
            };
            print!("{}", render_fragment(kind, backend, &request, &config)?);
            Ok(())
        }
        Commands::Layout {
            fields,
            blob,
            owner,
            write,
            depth,
        } => {
            let request = LayoutRequest {
                blob,
                owner,
                is_reader: !write,
                depth,
            };
            print!("{}", render_layout(&fields, &request, &config)?);
            Ok(())
        }
        Commands::GenConfig { output } => cmd_gen_config(&output),
    }
}

fn cmd_kinds(json: bool) -> Result<()> {
    let rows = kind_table();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).context("Failed to serialize kind table")?
        );
    } else {
        print!("{}", render_text(&rows));
    }
    Ok(())
}

fn cmd_gen_config(output: &Path) -> Result<()> {
    EmitConfig::default()
        .to_file(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::info!("Wrote default configuration to {:?}", output);
    println!("Generated configuration: {}", output.display());
    Ok(())
}
