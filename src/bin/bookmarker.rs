use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tempfile::NamedTempFile;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bookmarker", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a low-DPI layout preview as a PNG.
    Preview(PreviewArgs),
    /// Render the print-ready bookmark as PNG and PDF.
    Final(FinalArgs),
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Mood tag (e.g. `warm`, `fresh`, `elegant`).
    #[arg(long)]
    mood: String,

    /// Complexity score from 1 to 10; truncated and clamped to a tier from 1 to 5.
    #[arg(long, default_value_t = 3.0)]
    complexity: f64,

    /// Palette color as `#RRGGBB`; repeat for up to four colors.
    #[arg(long = "color", required = true)]
    colors: Vec<String>,

    /// Layout archetype (e.g. `left-right`, `mosaic-grid`).
    #[arg(long)]
    layout: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Render settings JSON.
    #[arg(long)]
    settings: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FinalArgs {
    /// Design request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Optional user photo covering the content area.
    #[arg(long)]
    photo: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    png: PathBuf,

    /// Output PDF path.
    #[arg(long)]
    pdf: PathBuf,

    /// Render settings JSON.
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Preview(args) => cmd_preview(args),
        Command::Final(args) => cmd_final(args),
    }
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<bookmarker::RenderSettings> {
    match path {
        Some(p) => Ok(bookmarker::RenderSettings::from_json_path(p)?),
        None => Ok(bookmarker::RenderSettings::default()),
    }
}

fn parse_tag<T: serde::de::DeserializeOwned>(what: &str, raw: &str) -> anyhow::Result<T> {
    serde_json::from_value(serde_json::Value::String(raw.to_owned()))
        .with_context(|| format!("unknown {what} '{raw}'"))
}

fn read_request_json(path: &Path) -> anyhow::Result<bookmarker::DesignRequest> {
    let f = File::open(path).with_context(|| format!("open design request '{}'", path.display()))?;
    let request: bookmarker::DesignRequest =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse design request JSON")?;
    request.validate()?;
    Ok(request)
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let mood: bookmarker::Mood = parse_tag("mood", &args.mood)?;
    let layout: bookmarker::LayoutArchetype = parse_tag("layout", &args.layout)?;
    let complexity = bookmarker::Complexity::from_score(args.complexity);
    let palette = bookmarker::Palette::from_hex(&args.colors)?;
    let settings = load_settings(args.settings.as_deref())?;

    let preview = bookmarker::render_preview(mood, complexity, &palette, layout, &settings)?;
    stage(&args.out, &preview.encode_png()?)?
        .persist(&args.out)
        .map_err(|e| anyhow::Error::new(e.error))
        .with_context(|| format!("write '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({}x{}, tier {})",
        args.out.display(),
        preview.width,
        preview.height,
        complexity.tier()
    );
    Ok(())
}

fn cmd_final(args: FinalArgs) -> anyhow::Result<()> {
    let request = read_request_json(&args.in_path)?;
    let settings = load_settings(args.settings.as_deref())?;

    let output = bookmarker::render_final(&request, args.photo.as_deref(), &settings)?;
    write_pair(&args.png, &output.png, &args.pdf, &output.pdf)?;

    eprintln!(
        "wrote {} and {} ({}x{} @ {} dpi)",
        args.png.display(),
        args.pdf.display(),
        output.width,
        output.height,
        output.dpi
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&output.report).context("serialize render report")?
    );
    Ok(())
}

/// Write `bytes` to a temp file next to `path`. Dropping the result deletes it.
fn stage(path: &Path, bytes: &[u8]) -> anyhow::Result<NamedTempFile> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)
        .with_context(|| format!("create output dir '{}'", parent.display()))?;

    let mut tmp = NamedTempFile::new_in(parent)
        .with_context(|| format!("create temp file in '{}'", parent.display()))?;
    tmp.write_all(bytes)
        .and_then(|()| tmp.as_file().sync_all())
        .with_context(|| format!("write temp file for '{}'", path.display()))?;
    Ok(tmp)
}

/// Publish both outputs or neither.
///
/// Both temp files are staged before either is renamed. If the second rename fails, the first
/// output is removed again.
fn write_pair(
    first: &Path,
    first_bytes: &[u8],
    second: &Path,
    second_bytes: &[u8],
) -> anyhow::Result<()> {
    let first_tmp = stage(first, first_bytes)?;
    let second_tmp = stage(second, second_bytes)?;

    first_tmp
        .persist(first)
        .map_err(|e| anyhow::Error::new(e.error))
        .with_context(|| format!("write '{}'", first.display()))?;

    if let Err(e) = second_tmp.persist(second) {
        if let Err(cleanup) = std::fs::remove_file(first) {
            tracing::warn!(path = %first.display(), error = %cleanup, "could not roll back output");
        }
        return Err(anyhow::Error::new(e.error).context(format!("write '{}'", second.display())));
    }
    Ok(())
}
