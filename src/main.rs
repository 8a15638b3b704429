mod error;
mod model;
mod output;
mod parser;
mod source;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use output::Format;

#[derive(Parser)]
#[command(name = "jesters_codegen", about = "Convert the awesome-balatro mod list into jesters.yaml")]
struct Cli {
    /// README to download
    #[arg(long, env = "JESTERS_SOURCE", default_value = source::DEFAULT_SOURCE_URL)]
    source: String,
    /// Parse a local markdown file instead of downloading (takes precedence over --source)
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Where to write the record
    #[arg(short, long, env = "JESTERS_OUTPUT", default_value = output::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
    /// Output encoding
    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    format: Format,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let document = match &cli.input {
        Some(path) => source::read_document(path)?,
        None => source::fetch_document(&cli.source).await?,
    };

    let metadata = parser::parse(&document);
    output::write_metadata(&cli.output, &metadata, cli.format)?;

    println!(
        "Wrote {} categories ({} mods) to {}",
        metadata.mods.len(),
        metadata.item_count(),
        cli.output.display()
    );

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("Done in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}
