use clap::{Parser, Subcommand};
use nlpflow::config::NlpflowConfig;
use nlpflow::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Validate, compile and run NLP pipeline graphs exported from the editor
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, default_value = nlpflow::config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a pipeline JSON file into a Python script
    Compile {
        /// Path to the pipeline JSON file
        graph_path: PathBuf,
        /// Write the script here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Replay every edge of a pipeline through the connection validator
    Validate {
        /// Path to the pipeline JSON file
        graph_path: PathBuf,
    },
    /// List the known operation kinds
    Kinds,
    /// Compile a pipeline and submit it to the execution service
    Run {
        /// Path to the pipeline JSON file
        graph_path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = NlpflowConfig::load_from(&cli.config)
        .unwrap_or_else(|e| exit_with_error(&format!("{}", e)));
    if let Err(e) = nlpflow::logging::init(&config.logging) {
        eprintln!("Warning: {}", e);
    }

    match cli.command {
        Command::Compile { graph_path, output } => run_compile(&config, &graph_path, output),
        Command::Validate { graph_path } => run_validate(&graph_path),
        Command::Kinds => run_kinds(),
        Command::Run { graph_path } => run_execute(&config, &graph_path),
    }
}

fn load_graph(path: &Path) -> PipelineGraph {
    PipelineGraph::from_file(path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load pipeline '{}': {}",
            path.display(),
            e
        ))
    })
}

fn build_compiler(config: &NlpflowConfig) -> Compiler {
    Compiler::builder()
        .with_default_sample_text(config.compiler.default_sample_text.clone())
        .build()
}

fn run_compile(config: &NlpflowConfig, graph_path: &Path, output: Option<PathBuf>) {
    let start = Instant::now();
    let graph = load_graph(graph_path);
    let script = build_compiler(config).compile(&graph);

    match output {
        Some(path) => {
            fs::write(&path, script.as_str()).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", path.display(), e))
            });
            eprintln!(
                "Compiled {} nodes ({} visited) into '{}' in {:?}",
                graph.nodes().len(),
                script.execution_order.len(),
                path.display(),
                start.elapsed()
            );
        }
        None => print!("{}", script),
    }
}

fn run_validate(graph_path: &Path) {
    let json = fs::read_to_string(graph_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read pipeline '{}': {}",
            graph_path.display(),
            e
        ))
    });
    let document = PipelineDocument::from_json(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("{}", e)));

    // Unlike loading, keep going after a rejection so every problem is reported.
    let mut graph = PipelineGraph::new();
    let mut problems = 0usize;
    for node in document.nodes {
        if let Err(e) = graph.add_node(node) {
            println!("  x {}", e);
            problems += 1;
        }
    }
    for edge in &document.edges {
        match graph.connect(&edge.source, &edge.target) {
            Ok(_) => println!("  ok edge {}: {} -> {}", edge.id, edge.source, edge.target),
            Err(e) => {
                problems += 1;
                match e.rejection() {
                    Some(reason) => {
                        let notice = reason.notice();
                        println!(
                            "  x edge {}: {} -> {}: {} ({})",
                            edge.id, edge.source, edge.target, notice.title, notice.description
                        );
                    }
                    None => println!("  x edge {}: {}", edge.id, e),
                }
            }
        }
    }

    if problems > 0 {
        exit_with_error(&format!("{} problem(s) found", problems));
    }
    println!(
        "Pipeline is valid: {} nodes, {} edges",
        graph.nodes().len(),
        graph.edges().len()
    );
}

fn run_kinds() {
    for kind in OperationKind::ALL {
        let marker = if kind.is_input() { " (input)" } else { "" };
        println!("{:<24} {}{}", kind.as_str(), kind.display_name(), marker);
    }
}

fn run_execute(config: &NlpflowConfig, graph_path: &Path) {
    let graph = load_graph(graph_path);
    let script = build_compiler(config).compile(&graph);

    let executor = HttpExecutor::new(&config.execution)
        .unwrap_or_else(|e| exit_with_error(&format!("{}", e)));

    let runtime = tokio::runtime::Runtime::new()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to start runtime: {}", e)));

    println!("Submitting script to {}...", executor.execute_url());
    match runtime.block_on(executor.execute(script.as_str())) {
        Ok(result) => {
            println!("\nOutput:");
            println!("{}", result.output);
        }
        Err(e) => {
            tracing::error!(error = %e, "execution failed");
            exit_with_error(e.user_message());
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
