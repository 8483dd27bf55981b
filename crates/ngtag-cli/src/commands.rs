//! Command handlers.
//!
//! Each handler returns the text to print, so the binary only has to write
//! it out and map errors to an exit code.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ngtag::{
    is_valid_identifier, AttributeSet, FixedId, IdGenerator, RawValue, SequentialIds, Source,
    TreeTable, UuidIds,
};
use serde::Serialize;

use crate::output::OutputFormat;

/// Render Angular component tag markup from declared attributes.
#[derive(Debug, Parser)]
#[command(name = "ngtag", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a p-tree-table element
    Render(RenderArgs),
    /// List the tree table's rule table in emission order
    Keys(KeysArgs),
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Declare an attribute (repeatable); overrides values from --file
    #[arg(short, long = "attr", value_name = "KEY=VALUE", value_parser = parse_attr)]
    pub attrs: Vec<(String, String)>,

    /// Read attributes from a YAML file (JSON when the extension is .json)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Content placed between the opening and closing tag
    #[arg(long)]
    pub content: Option<String>,

    /// Use this identifier whenever none is declared
    #[arg(
        long,
        value_name = "ID",
        conflicts_with = "id_prefix",
        value_parser = parse_identifier
    )]
    pub seed_id: Option<String>,

    /// Generate sequential identifiers with this prefix instead of UUIDs
    #[arg(long, value_name = "PREFIX", value_parser = parse_identifier)]
    pub id_prefix: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub output: OutputFormat,
}

#[derive(Debug, Args)]
pub struct KeysArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub output: OutputFormat,
}

/// Splits `KEY=VALUE` at the first `=`.
fn parse_attr(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}

fn parse_identifier(s: &str) -> std::result::Result<String, String> {
    if is_valid_identifier(s) {
        Ok(s.to_string())
    } else {
        Err(format!(
            "'{}' is not a valid identifier (no whitespace, quotes, '=', '<', '>' or '/')",
            s
        ))
    }
}

/// Dispatches a parsed command line.
pub fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Command::Render(args) => render(&args),
        Command::Keys(args) => keys(&args),
    }
}

#[derive(Debug, Serialize)]
struct Rendered {
    id: String,
    markup: String,
}

fn render(args: &RenderArgs) -> Result<String> {
    let mut attrs = match &args.file {
        Some(path) => load_attributes(path)?,
        None => AttributeSet::new(),
    };
    attrs.merge(AttributeSet::from_named(
        args.attrs
            .iter()
            .map(|(key, value)| (key.as_str(), RawValue::from(value.as_str()))),
    ));

    let table = TreeTable::with_ids(id_generator(args));
    let mut markup = table.markup(&attrs).context("failed to render p-tree-table")?;
    if let Some(content) = &args.content {
        markup = markup.with_content(content.as_str());
    }

    if args.output.is_structured() {
        args.output.serialize(&Rendered {
            id: markup.id().to_string(),
            markup: markup.to_string(),
        })
    } else {
        Ok(format!("{}\n", markup))
    }
}

fn id_generator(args: &RenderArgs) -> Box<dyn IdGenerator> {
    match (&args.seed_id, &args.id_prefix) {
        (Some(id), _) => Box::new(FixedId::new(id.as_str())),
        (None, Some(prefix)) => Box::new(SequentialIds::with_prefix(prefix.as_str())),
        (None, None) => Box::new(UuidIds),
    }
}

/// Loads an attribute document, choosing the parser by file extension.
pub fn load_attributes(path: &Path) -> Result<AttributeSet> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let attrs = if is_json {
        AttributeSet::from_json(&source)
    } else {
        AttributeSet::from_yaml(&source)
    };
    attrs.with_context(|| format!("invalid attribute file {}", path.display()))
}

#[derive(Debug, Serialize)]
struct RuleRow {
    position: usize,
    source: String,
    name: &'static str,
    shape: &'static str,
    pattern: String,
}

fn keys(args: &KeysArgs) -> Result<String> {
    let widget = TreeTable::new().widget();
    let rows: Vec<RuleRow> = widget
        .rules
        .iter()
        .enumerate()
        .map(|(i, rule)| RuleRow {
            position: i + 1,
            source: match rule.source {
                Source::Id => "id (always)".to_string(),
                Source::Key(key) => key.to_string(),
            },
            name: rule.name,
            shape: rule.shape.as_str(),
            pattern: rule.pattern(),
        })
        .collect();

    if args.output.is_structured() {
        return args.output.serialize(&rows);
    }

    let width = rows.iter().map(|r| r.source.len()).max().unwrap_or(0);
    let mut out = format!("{}\n", widget.tag);
    for row in &rows {
        out.push_str(&format!(
            "{:>2}  {:<width$}  {}\n",
            row.position,
            row.source,
            row.pattern,
            width = width
        ));
    }
    Ok(out)
}
