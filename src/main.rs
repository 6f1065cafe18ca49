use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use labrisk::cli::{Cli, Commands, ReferenceCommand, ReferenceShowArgs, RunArgs, ValidateArgs};
use labrisk::ctx::Ctx;
use labrisk::io;
use labrisk::model;
use labrisk::pipeline::{Pipeline, run_batch};
use labrisk::reference::ReferenceTables;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => handle_run(args)?,
        Commands::Reference(args) => match args.command {
            ReferenceCommand::Show(show) => handle_reference_show(show)?,
        },
        Commands::Validate(args) => handle_validate(args)?,
    }

    Ok(())
}

fn handle_run(args: RunArgs) -> Result<()> {
    let tables = Arc::new(ReferenceTables::load(
        args.ranges.as_deref(),
        args.abbreviations.as_deref(),
    )?);
    // Loaded once; every report shares this instance.
    let classifier = model::load_classifier(args.model.as_deref())?;
    tracing::info!(model = classifier.name(), "classifier loaded");

    let pipeline = Pipeline::standard(classifier, tables);
    let ctxs = args
        .input
        .into_iter()
        .map(|input| Ctx::new(input, args.out.clone(), args.json, args.txt))
        .collect::<Vec<_>>();
    let ctxs = run_batch(&pipeline, ctxs, args.threads)?;

    for ctx in &ctxs {
        print_summary(ctx)?;
    }
    Ok(())
}

fn handle_validate(args: ValidateArgs) -> Result<()> {
    let mut ctx = Ctx::new(args.input, PathBuf::from("."), false, false);
    Pipeline::extraction().run(&mut ctx)?;
    print!("{}", io::summary::format_record_summary(&ctx)?);
    print_warnings(&ctx);
    Ok(())
}

fn handle_reference_show(args: ReferenceShowArgs) -> Result<()> {
    let tables = ReferenceTables::load(args.ranges.as_deref(), args.abbreviations.as_deref())?;
    println!("reference ranges (version {}):", tables.ranges.version);
    for def in &tables.ranges.defs {
        println!("{}\t{}\t{}", def.marker, def.lower, def.upper);
    }
    println!(
        "abbreviations (version {}):",
        tables.abbreviations.version
    );
    for entry in &tables.abbreviations.entries {
        println!("{}\t{}", entry.token, entry.explanation);
    }
    Ok(())
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    print_warnings(ctx);
    Ok(())
}

fn print_warnings(ctx: &Ctx) {
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}
