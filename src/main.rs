use clap::Parser;

use pseudocalt::{
    generate_text, resolve_inputs, run_generate, GenerateRequest, GenerateSummary,
    VerificationReport,
};

mod cli;
use cli::report::{print_inspection, print_verification};
use cli::{Cli, Commands, InputArgs};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or_default() {
        Commands::Generate {
            input,
            output,
            no_header,
        } => run_generate(&GenerateRequest {
            manifest: input.manifest.clone(),
            output,
            overrides: input.overrides(no_header),
        })
        .map(|_| ()),
        Commands::Inspect { input } => run_inspect(&input),
        Commands::Verify { input } => run_verify(&input),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run_inspect(input: &InputArgs) -> Result<(), String> {
    let (catalogue, config) = resolve_inputs(input.manifest.as_deref(), &input.overrides(false))?;
    let (program, text) = generate_text(&catalogue, &config)?;
    let summary = GenerateSummary::new(&program, &text);
    print_inspection(&program, &config, &summary);
    Ok(())
}

fn run_verify(input: &InputArgs) -> Result<(), String> {
    let (catalogue, config) = resolve_inputs(input.manifest.as_deref(), &input.overrides(false))?;
    let report = VerificationReport::generate(&catalogue, &config).map_err(|e| e.to_string())?;
    print_verification(&report);

    if report.passed() {
        eprintln!("✅ All {} checks passed", report.checks.len());
        Ok(())
    } else {
        let failed = report.failures().count();
        Err(format!("{} of {} checks failed", failed, report.checks.len()))
    }
}
