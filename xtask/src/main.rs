//! Custom cargo commands for the pseudocalt crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask golden    - Regenerate golden feature files
//!   cargo xtask check     - Quick check (test + clippy)

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const LCG_CONSTANTS: &[&str] = &["MULTIPLIER", "INCREMENT", "MODULUS"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("golden") => golden()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + clippy + CLI verify + constant alignment)
  test      Run all Rust tests
  golden    Regenerate data/golden/*.fea from their file names
  check     Quick check (cargo test + clippy)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Pseudocalt Verification Suite");
    println!("==========================================\n");

    // Step 1: Golden fixtures
    println!("[1/5] Checking golden fixtures...");
    let count = golden_files()?.len();
    if count == 0 {
        bail!("No golden feature files found in data/golden");
    }
    println!("✓ {} golden files present\n", count);

    // Step 2: Run tests
    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    // Step 3: Clippy
    println!("[3/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    // Step 4: CLI invariant checks
    println!("[4/5] Running pseudocalt verify...");
    run_cargo(&["run", "--quiet", "--", "verify"])?;
    run_cargo(&[
        "run",
        "--quiet",
        "--",
        "verify",
        "--manifest",
        "data/manifests/smallcaps.json",
    ])?;
    println!("✓ Built-in and manifest catalogues verified\n");

    // Step 5: Kani constants
    println!("[5/5] Verifying Rust/Kani constant alignment...");
    verify_constants()?;
    println!("✓ Constants aligned\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Regenerate every golden file from the parameters in its name.
///
/// `smallcaps.fea` comes from its manifest instead.
fn golden() -> Result<()> {
    let root = project_root()?;
    for (path, params) in golden_files()? {
        let mut args: Vec<String> = ["run", "--quiet", "--", "generate", "--no-header", "-o"]
            .iter()
            .map(|arg| (*arg).to_string())
            .collect();
        args.push(path.to_string_lossy().into_owned());

        match params {
            Some((seed, depth, partitions)) => {
                args.extend([
                    "--seed".to_string(),
                    seed.to_string(),
                    "--depth".to_string(),
                    depth.to_string(),
                    "--partitions".to_string(),
                    partitions.to_string(),
                ]);
            }
            None => {
                let manifest = root
                    .join("data/manifests")
                    .join(format!("{}.json", file_stem(&path)?));
                args.push("--manifest".to_string());
                args.push(manifest.to_string_lossy().into_owned());
            }
        }

        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run_cargo(&args)?;
    }
    println!("\n✓ Golden files regenerated");
    Ok(())
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn file_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .with_context(|| format!("No file name in {}", path.display()))
}

/// Golden files with the `(seed, depth, partitions)` encoded in their name.
///
/// Names that don't follow `seed{S}_depth{D}_partitions{P}.fea` map to `None`.
fn golden_files() -> Result<Vec<(PathBuf, Option<(u32, usize, usize)>)>> {
    let dir = project_root()?.join("data/golden");
    let mut files = Vec::new();
    for entry in fs::read_dir(&dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("fea") {
            continue;
        }
        let params = parse_golden_name(&file_stem(&path)?);
        files.push((path, params));
    }
    files.sort();
    Ok(files)
}

fn parse_golden_name(stem: &str) -> Option<(u32, usize, usize)> {
    let mut parts = stem.split('_');
    let seed = parts.next()?.strip_prefix("seed")?.parse().ok()?;
    let depth = parts.next()?.strip_prefix("depth")?.parse().ok()?;
    let partitions = parts.next()?.strip_prefix("partitions")?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((seed, depth, partitions))
}

fn verify_constants() -> Result<()> {
    let root = project_root()?;

    let rng_rs = fs::read_to_string(root.join("src/rng.rs")).context("Failed to read rng.rs")?;

    let kani_path = root.join("kani-proofs/src/lib.rs");
    if !kani_path.exists() {
        println!("  (no kani-proofs crate, skipping constant check)");
        return Ok(());
    }
    let kani_rs = fs::read_to_string(&kani_path).context("Failed to read kani-proofs lib.rs")?;

    for name in LCG_CONSTANTS {
        let rust = extract_const(&rng_rs, name);
        let kani = extract_const(&kani_rs, name);
        match (rust, kani) {
            (Some(rust), Some(kani)) if rust == kani => {}
            (rust, kani) => bail!("{}: src/rng.rs={:?} != kani-proofs {:?}", name, rust, kani),
        }
    }

    Ok(())
}

fn extract_const(content: &str, name: &str) -> Option<u64> {
    // Look for "pub const MODULUS: u64 = 233_280;"
    let prefix = format!("pub const {}:", name);
    content.lines().find_map(|line| {
        let value = line.trim().strip_prefix(&prefix)?.split('=').nth(1)?;
        value.trim().trim_end_matches(';').replace('_', "").parse().ok()
    })
}
