//! Subcommand implementations.

use crate::cli::{DiffArgs, LinksArgs, OutputFormat, TimeArgs};
use anyhow::{Context, Result};
use diffmark_config::AppConfig;
use diffmark_core::{
    CodeRenderer, DiffAnnotator, DiffOperation, Differ, Granularity, SimilarDiffer,
    UnifiedRenderer,
};
use diffmark_utils::{copy_text, export_file, format_time, render_links, short_time};
use std::io::{self, Read, Write};
use std::path::Path;

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Parse a JSON array of operations.
pub fn parse_operations(json: &str) -> Result<Vec<DiffOperation>> {
    serde_json::from_str(json).context("Invalid diff operations JSON")
}

/// Produce the `diff` command's output text.
pub fn render_diff(
    operations: &[DiffOperation],
    config: &AppConfig,
    language: &str,
    format: OutputFormat,
) -> String {
    let annotator = DiffAnnotator::new(config.markers());
    let (annotated, stats) = annotator.annotate_with_stats(operations);

    log::info!(
        "Annotated {} operations ({} insertions, {} deletions)",
        operations.len(),
        stats.insertions,
        stats.deletions
    );

    match format {
        OutputFormat::Annotated => annotated,
        OutputFormat::Unified => UnifiedRenderer::new(config.markers()).render(&annotated, language),
    }
}

pub fn diff(args: DiffArgs, config: &AppConfig) -> Result<()> {
    let operations = if args.ops_json {
        parse_operations(&read_file(&args.old)?)?
    } else {
        let new_path = args
            .new
            .as_deref()
            .context("A NEW file is required unless --ops-json is given")?;
        let old = read_file(&args.old)?;
        let new = read_file(new_path)?;
        let granularity: Granularity = args.granularity.map(Into::into).unwrap_or_default();
        SimilarDiffer::new(granularity).diff(&old, &new)
    };

    let language = args.lang.as_deref().unwrap_or(&config.language);
    let output = render_diff(&operations, config, language, args.format);

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    if args.copy {
        copy_text(&output);
    }

    if let Some(file_name) = args.export {
        let path = export_file(&output, &file_name, &config.export_dir)?;
        eprintln!("Exported to {}", path.display());
    }

    Ok(())
}

pub fn time(args: TimeArgs) -> Result<()> {
    let text = if args.relative {
        short_time(&args.stamp)?
    } else {
        format_time(&args.stamp)?
    };
    println!("{}", text);
    Ok(())
}

pub fn links(args: LinksArgs) -> Result<()> {
    let markup = if args.input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read markup from stdin")?;
        buf
    } else {
        read_file(&args.input)?
    };

    print!("{}", render_links(&markup));
    Ok(())
}
