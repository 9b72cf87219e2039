mod http;


use std::path::{Path, PathBuf};

use canvas::engine::EngineCore;
use canvas::script::{ScriptError, StrokeScript};
use clap::error::ErrorKind;
use clap::{ArgGroup, Args, CommandFactory, Parser, Subcommand};
use predict::{ImageUpload, PredictError, Prediction};
use tracing_subscriber::EnvFilter;

use crate::http::ReqwestTransport;

const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/predict";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: std::io::Error },
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error(transparent)]
    Export(#[from] canvas::export::ExportError),
    #[error("recognition failed")]
    Recognition,
}

#[derive(Parser, Debug)]
#[command(name = "digitpad", about = "Render digit sketches and query the prediction service")]
struct Cli {
    #[arg(long, env = "DIGITPAD_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a stroke script onto a blank pad and write the PNG.
    Render(RenderArgs),
    /// Submit a drawing once and print the prediction.
    Recognize(RecognizeArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Stroke script (JSON).
    #[arg(long)]
    strokes: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["image", "strokes"])))]
struct RecognizeArgs {
    /// PNG file to upload as-is.
    #[arg(long)]
    image: Option<PathBuf>,

    /// Stroke script to render and upload.
    #[arg(long)]
    strokes: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Render(args) => run_render(args).await,
        Command::Recognize(args) => run_recognize(&cli.api_url, args).await,
    }
}

async fn run_render(args: RenderArgs) -> Result<(), CliError> {
    let core = load_strokes(&args.strokes).await?;
    let png = core.export_png()?;
    tokio::fs::write(&args.out, &png)
        .await
        .map_err(|source| CliError::Write { path: args.out.clone(), source })?;
    tracing::info!(path = %args.out.display(), bytes = png.len(), "wrote png");
    Ok(())
}

async fn run_recognize(api_url: &str, args: RecognizeArgs) -> Result<(), CliError> {
    let upload: Result<ImageUpload, PredictError> = match (args.image, args.strokes) {
        (Some(path), None) => Ok(ImageUpload::png(read_file(&path).await?)),
        (None, Some(path)) => {
            let core = load_strokes(&path).await?;
            if core.is_blank() {
                tracing::warn!(path = %path.display(), "stroke script draws nothing; submitting a blank pad");
            }
            ImageUpload::from_surface(&core.surface)
        }
        // The `source` group already rejects these while parsing.
        _ => Cli::command()
            .error(ErrorKind::ArgumentConflict, "pass exactly one of --image or --strokes")
            .exit(),
    };

    tracing::info!(%api_url, "submitting drawing");
    let outcome = match upload {
        Ok(upload) => predict::submit(&ReqwestTransport::new(), api_url, upload).await,
        Err(e) => Err(e),
    };
    let prediction = Prediction::from_outcome(outcome);
    println!("{}", prediction.result_text());
    if prediction.is_error() {
        return Err(CliError::Recognition);
    }
    Ok(())
}

async fn read_file(path: &Path) -> Result<Vec<u8>, CliError> {
    tokio::fs::read(path)
        .await
        .map_err(|source| CliError::Read { path: path.to_path_buf(), source })
}

async fn load_strokes(path: &Path) -> Result<EngineCore, CliError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CliError::Read { path: path.to_path_buf(), source })?;
    let script = StrokeScript::from_json(&text)?;
    tracing::debug!(strokes = script.strokes.len(), points = script.point_count(), "loaded stroke script");
    let mut core = EngineCore::new();
    core.replay(&script);
    Ok(core)
}
