use clap::Parser;
use serp_yield::sources::file::FileSource;
use serp_yield::{Extraction, Result, ScraperConfig, Search, format};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    if let Err(e) = run(args).await {
        ::log::error!("{}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => ScraperConfig::from_file(path)?,
        None => ScraperConfig::default(),
    };
    let mut search = Search::new(args.query.clone()).with_config(config);

    let start_time = std::time::Instant::now();
    let extraction = match &args.input {
        Some(path) => {
            let mut source = FileSource::new(path);
            search.run_with(&mut source).await?
        }
        None => {
            if let Some(url) = &args.webdriver_url {
                search = search.with_webdriver_url(url.clone());
            } else {
                eprintln!("Note: Searching requires a WebDriver server (e.g., ChromeDriver).");
                eprintln!(
                    "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
                );
            }
            search.run().await?
        }
    };

    ::log::info!(
        "Extraction complete - {} results in {:.2} seconds",
        extraction.collection.len(),
        start_time.elapsed().as_secs_f64()
    );

    write_outputs(&args, &extraction)
}

fn write_outputs(args: &Args, extraction: &Extraction) -> Result<()> {
    match &args.output {
        Some(path) => extraction.collection.save(path)?,
        None => println!("{}", extraction.collection.to_json_pretty()?),
    }

    if let Some(path) = &args.preview {
        std::fs::write(path, format::render_preview(extraction)?)?;
        ::log::info!("Wrote preview to {}", path.display());
    }
    Ok(())
}
