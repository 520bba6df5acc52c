// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Box-drawn reports for `inspect` and `verify`.

use pseudocalt::{GenerateSummary, GeneratorConfig, Program, VerificationReport};

use super::display::{
    dropped_label, format_size, glyph_preview, pad_right, row, section_bot, section_mid,
    section_top, size_bar, status_mark, themed, title, BOLD, GRAY, YELLOW,
};

const NAME_WIDTH: usize = 20;
const PREVIEW_LEN: usize = 38;
const BAR_WIDTH: usize = 12;

pub fn print_inspection(program: &Program, config: &GeneratorConfig, summary: &GenerateSummary) {
    title(&format!("PSEUDOCALT · feature {}", config.feature));

    section_top("PARAMETERS");
    row(&format!(
        " seed {}   depth {}   partitions {}   header {}",
        config.seed,
        config.depth,
        config.partitions,
        if config.header { "on" } else { "off" }
    ));

    section_mid("STATE CLASSES");
    for class in &program.states {
        row(&format!(
            " {}{:>4} glyphs  {}",
            pad_right(&class.name(), NAME_WIDTH),
            class.glyphs.len(),
            themed(GRAY, &[], &glyph_preview(&class.glyphs, PREVIEW_LEN))
        ));
    }

    section_mid("PARTITIONS");
    let largest = program.partitions.iter().map(|p| p.len()).max().unwrap_or(0);
    for partition in &program.partitions {
        row(&format!(
            " {}{:>4}  {}  {}",
            pad_right(&partition.name(), NAME_WIDTH),
            partition.len(),
            size_bar(partition.len(), largest, BAR_WIDTH),
            themed(GRAY, &[], &glyph_preview(&partition.glyphs, PREVIEW_LEN - BAR_WIDTH))
        ));
    }
    row(&format!(
        " {} of {} glyphs partitioned, {}",
        summary.partitioned_glyphs,
        program.universe_len,
        dropped_label(summary.dropped_glyphs)
    ));

    section_mid("LOOKUPS");
    row(&format!(
        " {} layers × {} transitions = {} rules",
        program.layers.len(),
        program.rotations.len(),
        summary.rules
    ));
    if let Some(rule) = program.layers.last().and_then(|layer| layer.rules.first()) {
        row(&format!(" first emitted: {}", rule.name()));
    }

    section_mid("OUTPUT");
    row(&format!(
        " {}   crc32 {}",
        format_size(summary.bytes),
        themed(YELLOW, &[BOLD], &format!("{:08x}", summary.crc32))
    ));
    section_bot();
}

pub fn print_verification(report: &VerificationReport) {
    section_top("VERIFY");
    for (label, result) in &report.checks {
        match result {
            Ok(()) => row(&format!(" {} {}", status_mark(true), label)),
            Err(e) => row(&format!(" {} {}: {}", status_mark(false), label, e)),
        }
    }
    section_bot();
}
