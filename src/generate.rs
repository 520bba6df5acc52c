// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! End-to-end generation: resolve inputs, build, compile, write.
//!
//! Status and warnings go to stderr. Stdout carries nothing but the feature
//! text, so `pseudocalt > calt.fea` stays clean.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::catalogue::Catalogue;
use crate::compile::compile_program;
use crate::config::{ConfigOverrides, GeneratorConfig, Manifest};
use crate::program::Program;

/// Where the inputs come from and where the text goes.
#[derive(Clone, Debug, Default)]
pub struct GenerateRequest {
    /// JSON manifest; the built-in catalogue when absent.
    pub manifest: Option<PathBuf>,
    /// Output file; stdout when absent.
    pub output: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

/// Figures describing one generated feature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateSummary {
    pub classes: usize,
    pub partitions: usize,
    pub partitioned_glyphs: usize,
    pub dropped_glyphs: usize,
    pub rules: usize,
    pub bytes: usize,
    pub crc32: u32,
}

impl GenerateSummary {
    pub fn new(program: &Program, text: &str) -> Self {
        Self {
            classes: program.states.len(),
            partitions: program.partitions.len(),
            partitioned_glyphs: program.partitioned_count(),
            dropped_glyphs: program.dropped_count(),
            rules: program.rule_count(),
            bytes: text.len(),
            crc32: crc32fast::hash(text.as_bytes()),
        }
    }
}

/// Load the manifest (or the built-in catalogue) and apply overrides.
pub fn resolve_inputs(
    manifest: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<(Catalogue, GeneratorConfig), String> {
    let (catalogue, mut config) = match manifest {
        Some(path) => Manifest::load(path)?
            .into_parts()
            .map_err(|e| format!("Invalid manifest {}: {}", path.display(), e))?,
        None => (Catalogue::builtin(), GeneratorConfig::default()),
    };
    overrides.apply(&mut config);
    Ok((catalogue, config))
}

/// Build and compile without touching the filesystem.
pub fn generate_text(
    catalogue: &Catalogue,
    config: &GeneratorConfig,
) -> Result<(Program, String), String> {
    let program = Program::build(catalogue, config).map_err(|e| e.to_string())?;
    let text = compile_program(&program, config);
    Ok((program, text))
}

pub fn run_generate(request: &GenerateRequest) -> Result<GenerateSummary, String> {
    // 1. Resolve catalogue and parameters
    let (catalogue, config) = resolve_inputs(request.manifest.as_deref(), &request.overrides)?;

    // 2. Build and compile
    let (program, text) = generate_text(&catalogue, &config)?;
    warn_partition_shape(&program);

    // 3. Write
    match &request.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create output dir: {}", e))?;
            }
            fs::write(path, &text)
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            eprintln!("  ✓ {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(text.as_bytes())
                .and_then(|()| handle.flush())
                .map_err(|e| format!("Failed to write to stdout: {}", e))?;
        }
    }

    Ok(GenerateSummary::new(&program, &text))
}

fn warn_partition_shape(program: &Program) {
    if program.partitioned_count() == 0 && program.universe_len > 0 {
        eprintln!(
            "⚠️  {} partitions for {} glyphs; every partition is empty",
            program.partitions.len(),
            program.universe_len
        );
    } else if program.dropped_count() > 0 {
        eprintln!(
            "⚠️  {} glyphs left out of every partition",
            program.dropped_count()
        );
    }
}
