use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};

use desclint_core::{Config, Report, Severity};
use desclint_engine::{FixError, FixRun, LintRun};
use desclint_rules::{all_rules, rule_by_name, Rule, RULE_NAMES};
use desclint_schema::{discover_schema_files, filter_schema_files};

/// desclint - description linting for dbt schema files
#[derive(Parser)]
#[command(name = "desclint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file (default: desclint.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check descriptions against a rule
    Check {
        /// Rule to apply
        #[arg(short, long, value_parser = PossibleValuesParser::new(RULE_NAMES.iter().copied()))]
        rule: String,

        /// Output file for report.json
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Candidate files from the hook runner (filtered to schema files);
        /// discovers schema files recursively when empty
        files: Vec<PathBuf>,
    },

    /// Rewrite non-conforming descriptions in place
    Fix {
        /// Rule to apply (must support fixing)
        #[arg(short, long, value_parser = PossibleValuesParser::new(RULE_NAMES.iter().copied()))]
        rule: String,

        /// Candidate files from the hook runner; discovers when empty
        files: Vec<PathBuf>,
    },

    /// List the available rules
    Rules,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config if specified
    let config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else if Path::new("desclint.toml").exists() {
        Config::from_file(Path::new("desclint.toml"))?
    } else {
        if cli.verbose {
            eprintln!("{}", "No config file found, using defaults".yellow());
        }
        Config::default()
    };

    match cli.command {
        Commands::Check { rule, output, files } => {
            check_command(&config, &rule, output.as_deref(), &files, cli.verbose)
        }
        Commands::Fix { rule, files } => fix_command(&config, &rule, &files, cli.verbose),
        Commands::Rules => rules_command(&config),
    }
}

/// Resolve the schema files to process from the hook-supplied list
fn resolve_files(files: &[PathBuf], verbose: bool) -> Vec<PathBuf> {
    if files.is_empty() {
        if verbose {
            eprintln!("{}", "No files supplied, discovering schema files...".cyan());
        }
        discover_schema_files(Path::new("."))
    } else {
        filter_schema_files(files)
    }
}

/// Check command - report violations without touching files
fn check_command(
    config: &Config,
    rule_name: &str,
    output: Option<&Path>,
    files: &[PathBuf],
    verbose: bool,
) -> Result<()> {
    let rule = rule_by_name(rule_name, config)
        .ok_or_else(|| anyhow::anyhow!("Unknown rule '{}'", rule_name))?;

    let schema_files = resolve_files(files, verbose);

    if verbose {
        eprintln!(
            "{} {} schema files with rule '{}'...",
            "Checking".cyan(),
            schema_files.len(),
            rule.name()
        );
    }

    let run = LintRun::check(rule.as_ref(), &schema_files, config);
    let failed = run.has_errors();

    if verbose {
        eprintln!(
            "Checked {} descriptions in {} files",
            run.descriptions_checked, run.files_checked
        );
    }

    let report = run.into_report();

    if let Some(output_path) = output {
        report.save_to_file(output_path)?;
        if verbose {
            eprintln!("{} {}", "Report saved to:".green(), output_path.display());
        }
    }

    print_report_summary(&report);

    // Exit with error code if there are errors
    if failed {
        std::process::exit(1);
    }

    Ok(())
}

/// Fix command - rewrite non-conforming descriptions in place
fn fix_command(config: &Config, rule_name: &str, files: &[PathBuf], verbose: bool) -> Result<()> {
    let rule = rule_by_name(rule_name, config)
        .ok_or_else(|| anyhow::anyhow!("Unknown rule '{}'", rule_name))?;

    let schema_files = resolve_files(files, verbose);

    if verbose {
        eprintln!(
            "{} {} schema files with rule '{}'...",
            "Fixing".cyan(),
            schema_files.len(),
            rule.name()
        );
    }

    let run = match FixRun::apply(rule.as_ref(), &schema_files) {
        Ok(run) => run,
        Err(FixError::NotFixable(name)) => {
            eprintln!("{} Rule '{}' does not support fixing", "error:".red().bold(), name);
            std::process::exit(2);
        }
        Err(err) => return Err(err.into()),
    };

    for path in &run.modified {
        println!("{} {}", "fixed:".green(), path.display());
    }

    println!(
        "{} files checked, {} rewritten",
        run.files_checked,
        run.modified.len()
    );

    // Pre-commit convention: a rewritten file means the hook must re-run
    if run.modified_any() {
        std::process::exit(1);
    }

    Ok(())
}

/// Rules command - list the registered rules
fn rules_command(config: &Config) -> Result<()> {
    println!("{}", "Available rules:".bold());
    println!();

    for rule in all_rules(config) {
        let mode = if rule.is_fixable() {
            "fixable".green()
        } else {
            "report-only".yellow()
        };

        println!(
            "  {:<10} [{}] {} ({})",
            rule.name().bold(),
            rule.code(),
            rule.summary(),
            mode
        );
    }

    Ok(())
}

/// Print report summary to stdout
fn print_report_summary(report: &Report) {
    println!("\n{}", "=".repeat(60).bright_blue());
    println!("{}", "Description Lint Report".bold().bright_blue());
    println!("{}", "=".repeat(60).bright_blue());
    println!();

    println!("Rule: {}", report.rule);
    println!("Files checked: {}", report.summary.files_checked);
    println!("Descriptions checked: {}", report.summary.descriptions_checked);
    println!();

    println!("{}", "Summary:".bold());
    println!("  Total diagnostics: {}", report.summary.total);

    if report.summary.errors > 0 {
        println!("  Errors:   {}", format!("{}", report.summary.errors).red().bold());
    } else {
        println!("  Errors:   {}", format!("{}", report.summary.errors).green());
    }

    if report.summary.warnings > 0 {
        println!("  Warnings: {}", format!("{}", report.summary.warnings).yellow());
    } else {
        println!("  Warnings: {}", format!("{}", report.summary.warnings).green());
    }

    println!("  Info:     {}", report.summary.info);
    println!();

    if report.diagnostics.is_empty() {
        println!("{}", "✓ All descriptions conform!".green().bold());
    } else {
        println!("{}", "Diagnostics:".bold());
        for diag in &report.diagnostics {
            let severity_str = match diag.severity {
                Severity::Error => "ERROR".red().bold(),
                Severity::Warn => "WARN".yellow().bold(),
                Severity::Info => "INFO".cyan(),
            };

            println!("  [{}] {}: {}", severity_str, diag.code, diag.message);

            if let Some(loc) = &diag.location {
                print!("    at {}", loc.file);
                if let Some(line) = loc.line {
                    print!(":{}", line);
                }
                println!();
            }

            if let Some(act) = &diag.actual {
                println!("    Found: {}", act);
            }
            if let Some(exp) = &diag.expected {
                println!("    Fixed: {}", exp);
            }
        }
    }

    println!();
    println!("{}", "=".repeat(60).bright_blue());
}
