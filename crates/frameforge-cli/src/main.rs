//! frameforge command line.
//!
//! Reads a saved document response (the JSON body of the file or nodes
//! endpoint) and prints generated code, the IR, or the flat style maps.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use frameforge_codegen::{generate_document, CodegenOptions, Generation, Target, ERROR_MARKER};
use frameforge_core::{DocumentLocator, DocumentResponse, RawNode};
use frameforge_ir::IrBuilder;
use frameforge_style::{extract_all_styles, StyleMap};
use frameforge_telemetry::{SessionRecorder, TracingSink};

#[derive(Parser, Debug)]
#[command(name = "frameforge")]
#[command(about = "Turn design documents into React code")]
#[command(version)]
struct Cli {
    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate code from a document JSON file
    Generate(GenerateArgs),

    /// Print the intermediate representation as JSON
    Ir {
        /// Document JSON file
        input: PathBuf,
    },

    /// Print the CSS map of every visible node
    Styles {
        /// Document JSON file
        input: PathBuf,
    },

    /// Show the file id, node id and API path of a document URL
    Locate { url: String },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Document JSON file
    input: PathBuf,

    /// Which emitter output to produce
    #[arg(long, value_enum)]
    target: Option<TargetArg>,

    /// Name of the generated component
    #[arg(long, value_name = "NAME")]
    component_name: Option<String>,

    /// Also export a memoized alias
    #[arg(long)]
    memo: bool,

    /// JSON options file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the output here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Save the session log of the run
    #[arg(long, value_name = "FILE")]
    session_log: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum TargetArg {
    Expression,
    Component,
    Both,
}

impl From<TargetArg> for Target {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Expression => Target::Expression,
            TargetArg::Component => Target::Component,
            TargetArg::Both => Target::Both,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Generate(args) => cmd_generate(&args),
        Command::Ir { input } => cmd_ir(&input),
        Command::Styles { input } => cmd_styles(&input),
        Command::Locate { url } => cmd_locate(&url),
    }
}

/// `RUST_LOG` when set, `warn` otherwise; `-v` forces `debug`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_document(path: &Path) -> Result<DocumentResponse> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read document {}", path.display()))?;
    DocumentResponse::from_json(&json)
        .with_context(|| format!("{} is not a valid document response", path.display()))
}

fn load_options(args: &GenerateArgs) -> Result<CodegenOptions> {
    let mut options = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("invalid options in {}", path.display()))?
        }
        None => CodegenOptions::default(),
    };
    if let Some(target) = args.target {
        options.target = target.into();
    }
    if let Some(name) = &args.component_name {
        options.component_name = name.clone();
    }
    if args.memo {
        options.memo = true;
    }
    Ok(options)
}

/// Requested outputs, expression first, separated by a blank line.
fn render_outputs(run: &Generation) -> String {
    [run.expression.as_deref(), run.component.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn write_output(out: Option<&Path>, output: &str) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = output.len(), "wrote generated code");
        }
        None => println!("{}", output),
    }
    Ok(())
}

fn cmd_generate(args: &GenerateArgs) -> Result<()> {
    let response = read_document(&args.input)?;
    let options = load_options(args)?;
    let mut recorder = SessionRecorder::new();

    let output = match generate_document(&response, &options, &TracingSink)? {
        Some(run) => {
            recorder.record(run.session_log());
            info!(
                nodes = run.ir.stats.node_count,
                warnings = run.ir.diagnostics.len(),
                elapsed_ms = run.elapsed.as_secs_f64() * 1000.0,
                "generated code"
            );
            render_outputs(&run)
        }
        None => {
            recorder.push_warning("document response holds no root node");
            ERROR_MARKER.to_string()
        }
    };

    write_output(args.out.as_deref(), &output)?;

    if let Some(path) = &args.session_log {
        recorder
            .save(path)
            .with_context(|| format!("failed to save session log {}", path.display()))?;
        info!(path = %path.display(), "saved session log");
    }
    Ok(())
}

fn cmd_ir(input: &Path) -> Result<()> {
    let response = read_document(input)?;
    let Some(raw) = response.root() else {
        bail!("{} holds no root node", input.display());
    };
    let output = IrBuilder::new().build(raw, None);
    println!("{}", serde_json::to_string_pretty(&output.root)?);
    Ok(())
}

#[derive(Serialize)]
struct NodeStyles<'a> {
    id: &'a str,
    name: &'a str,
    styles: StyleMap,
}

/// Style maps of `node` and its visible descendants, in pre-order.
fn collect_styles<'a>(node: &'a RawNode, out: &mut Vec<NodeStyles<'a>>) {
    if node.is_hidden() {
        return;
    }
    out.push(NodeStyles {
        id: &node.id,
        name: &node.name,
        styles: extract_all_styles(node),
    });
    for child in &node.children {
        collect_styles(child, out);
    }
}

fn cmd_styles(input: &Path) -> Result<()> {
    let response = read_document(input)?;
    let Some(raw) = response.root() else {
        bail!("{} holds no root node", input.display());
    };
    let mut styles = Vec::new();
    collect_styles(raw, &mut styles);
    println!("{}", serde_json::to_string_pretty(&styles)?);
    Ok(())
}

fn cmd_locate(url: &str) -> Result<()> {
    let locator = DocumentLocator::parse(url).with_context(|| format!("cannot locate {}", url))?;
    println!("file id:  {}", locator.file_id);
    println!("node id:  {}", locator.node_id.as_deref().unwrap_or("-"));
    println!("api path: {}", locator.api_path());
    Ok(())
}
