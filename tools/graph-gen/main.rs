use clap::Parser;
use nlpflow::prelude::*;
use rand::Rng;
use rand::rngs::ThreadRng;

/// A CLI tool to generate random pipeline graphs for the nlpflow compiler
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_pipeline.json")]
    output: String,

    /// Number of operation nodes to add after the text input
    #[arg(long, default_value_t = 12)]
    nodes: usize,

    /// Number of connections to attempt; rejected ones are skipped
    #[arg(long, default_value_t = 30)]
    attempts: usize,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    println!(
        "Generating pipeline with {} operation nodes and {} connection attempts...",
        cli.nodes, cli.attempts
    );

    let mut graph = PipelineGraph::with_default_input();
    let operations: Vec<OperationKind> = OperationKind::ALL
        .into_iter()
        .filter(|k| !k.is_input())
        .collect();

    for _ in 0..cli.nodes {
        let kind = operations[rng.random_range(0..operations.len())];
        graph.add_operation(kind, random_position(&mut rng));
    }

    let ids: Vec<String> = graph.nodes().iter().map(|n| n.id.clone()).collect();
    let mut rejected = [0usize; 3];
    for _ in 0..cli.attempts {
        let source = &ids[rng.random_range(0..ids.len())];
        let target = &ids[rng.random_range(0..ids.len())];
        if let Err(e) = graph.connect(source, target) {
            match e.rejection() {
                Some(EdgeRejection::SelfLoop) => rejected[0] += 1,
                Some(EdgeRejection::Duplicate) => rejected[1] += 1,
                Some(EdgeRejection::Cycle) => rejected[2] += 1,
                None => {}
            }
        }
    }

    graph.save(&cli.output)?;

    println!(
        "Saved '{}': {} nodes, {} edges (rejected: {} self-loops, {} duplicates, {} cycles)",
        cli.output,
        graph.nodes().len(),
        graph.edges().len(),
        rejected[0],
        rejected[1],
        rejected[2]
    );

    Ok(())
}

fn random_position(rng: &mut ThreadRng) -> Position {
    Position::new(rng.random_range(0.0..400.0), rng.random_range(0.0..400.0))
}
