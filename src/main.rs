use anyhow::Context;
use charmerge::{load_catalog, MergeConfig, PipelineConfig, RestApi, UnmatchedPolicy};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Enrich a detailed character catalog with images from a second catalog
#[derive(Parser, Debug)]
#[command(name = "charmerge")]
#[command(about = "Merge character catalogs by normalized name", long_about = None)]
struct Cli {
    /// Log level
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Merge two catalogs into one enriched catalog
    Merge(MergeArgs),
    /// Serve a merged catalog over HTTP
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
struct MergeArgs {
    /// Image-bearing catalog (Jikan format or flat {name, images} records)
    #[arg(long, default_value = "personagens_one_piece.json")]
    images: PathBuf,

    /// Detailed catalog to enrich
    #[arg(long, default_value = "personagens_detalhados.json")]
    details: PathBuf,

    /// Output path for the merged catalog
    #[arg(short, long, default_value = "personagens_completos.json")]
    output: PathBuf,

    /// Also write the merge report as JSON
    #[arg(long)]
    report: Option<PathBuf>,

    /// Write `images: null` on unmatched records instead of omitting the field
    #[arg(long)]
    null_unmatched: bool,

    /// Name field in both catalogs
    #[arg(long, default_value = charmerge_core::config::DEFAULT_NAME_FIELD)]
    name_field: String,

    /// Image field in the image catalog
    #[arg(long, default_value = charmerge_core::config::DEFAULT_IMAGE_FIELD)]
    image_field: String,

    /// Field added to enriched records
    #[arg(long, default_value = charmerge_core::config::DEFAULT_OUTPUT_FIELD)]
    output_field: String,
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Merged catalog to serve
    #[arg(long, default_value = "personagens_completos.json")]
    catalog: PathBuf,

    /// HTTP port
    #[arg(long, default_value_t = 3000)]
    port: u16,
}

impl MergeArgs {
    fn into_config(self) -> PipelineConfig {
        let unmatched = if self.null_unmatched {
            UnmatchedPolicy::Null
        } else {
            UnmatchedPolicy::Omit
        };
        PipelineConfig {
            images_path: self.images,
            details_path: self.details,
            output_path: self.output,
            report_path: self.report,
            merge: MergeConfig {
                name_field: self.name_field,
                image_field: self.image_field,
                output_field: self.output_field,
                unmatched,
                ..MergeConfig::default()
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Command::Merge(args) => {
            let config = args.into_config();
            let report = charmerge::run(&config)?;
            info!("Done: {}/{} characters matched", report.matched, report.total);
            Ok(())
        }
        Command::Serve(args) => serve(args).await,
    }
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(&args.catalog)
        .with_context(|| format!("Loading merged catalog {:?}", args.catalog))?;
    let catalog = Arc::new(catalog);
    info!("Loaded {} characters from {:?}", catalog.len(), args.catalog);

    let port = args.port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(catalog, port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("Catalog: http://localhost:{}/api/characters", port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
