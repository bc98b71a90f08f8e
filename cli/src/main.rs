//! Weft Command-Line Interface
//!
//! Loads a schema document, generates the data model, and prints the
//! rendered text to standard output.

use clap::Parser;
use std::path::PathBuf;
use weft_generator::{Generator, GeneratorConfig};

/// Generate a typed data model from a schema document
#[derive(Parser, Debug)]
#[command(name = "weft")]
#[command(version, about = "Generate a typed data model from a schema document")]
struct Args {
    /// Path to the schema document (YAML)
    schema: PathBuf,

    /// Namespace prefix for predicate constants
    #[arg(long, default_value = "biolink")]
    predicate_prefix: String,

    /// Skip the fixed support prelude
    #[arg(long)]
    no_prelude: bool,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("weft_loader=info".parse().unwrap())
                .add_directive("weft_generator=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let graph = weft_loader::load_path(&args.schema)?;

    let generator = Generator::with_config(GeneratorConfig {
        predicate_prefix: args.predicate_prefix,
    });
    let artifact = generator.generate(&graph)?;

    let text = if args.no_prelude {
        weft_model::render_body(&artifact)
    } else {
        weft_model::render(&artifact)
    };
    print!("{}", text);
    Ok(())
}
