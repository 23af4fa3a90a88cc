use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use thumbcraft::{EditorSession, RasterOpts, Rasterizer as _, ThumbnailSettings};

#[derive(Parser, Debug)]
#[command(name = "thumbcraft", version)]
struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the default settings document.
    Defaults(DefaultsArgs),
    /// Check that a settings document imports cleanly.
    Validate(ValidateArgs),
    /// Render a settings document to PNG.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct DefaultsArgs {
    /// Output JSON path (defaults to `thumbnail-settings-<date>.json`).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input settings JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input settings JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path (defaults to `thumbnail-<date>.png`).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Device pixels per logical pixel.
    #[arg(long, default_value_t = 2.0)]
    scale: f64,

    /// Logical output width.
    #[arg(long, default_value_t = 2560)]
    width: u32,

    /// Logical output height.
    #[arg(long, default_value_t = 1440)]
    height: u32,

    /// Directory for local images and fonts (defaults to the input's directory).
    #[arg(long)]
    assets_root: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Defaults(args) => cmd_defaults(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_session(path: &Path) -> anyhow::Result<EditorSession> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read settings '{}'", path.display()))?;
    let mut session = EditorSession::new();
    session
        .import_settings(&text)
        .with_context(|| format!("import settings '{}'", path.display()))?;
    Ok(session)
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_defaults(args: DefaultsArgs) -> anyhow::Result<()> {
    let json = thumbcraft::settings::serialize(&ThumbnailSettings::seeded())?;
    let out = args.out.unwrap_or_else(|| {
        PathBuf::from(thumbcraft::settings::settings_file_name(
            thumbcraft::settings::today(),
        ))
    });
    write_output(&out, json.as_bytes())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let session = read_session(&args.in_path)?;
    let comp = session.compose();
    eprintln!(
        "ok: {} ({} layers composed)",
        args.in_path.display(),
        comp.len()
    );
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let session = read_session(&args.in_path)?;

    let assets_root = args.assets_root.clone().or_else(|| {
        args.in_path
            .parent()
            .map(|p| if p.as_os_str().is_empty() { Path::new(".") } else { p })
            .map(Path::to_path_buf)
    });
    let rasterizer = make_rasterizer(assets_root)?;

    let opts = RasterOpts {
        width: args.width,
        height: args.height,
        pixel_ratio: args.scale,
        ..Default::default()
    };
    let png = rasterizer
        .rasterize(&session.compose(), &opts)
        .with_context(|| "rasterize thumbnail")?;

    let out = args.out.unwrap_or_else(|| {
        PathBuf::from(thumbcraft::settings::thumbnail_file_name(
            thumbcraft::settings::today(),
        ))
    });
    write_output(&out, &png)
}

#[cfg(not(feature = "http"))]
fn make_rasterizer(assets_root: Option<PathBuf>) -> anyhow::Result<Box<dyn thumbcraft::Rasterizer>> {
    Ok(Box::new(thumbcraft::SvgRasterizer::new(assets_root)))
}

#[cfg(feature = "http")]
fn make_rasterizer(assets_root: Option<PathBuf>) -> anyhow::Result<Box<dyn thumbcraft::Rasterizer>> {
    use thumbcraft::export::image_loader::{HttpFetcher, LocalFetcher};

    let fetcher = HttpFetcher::new(LocalFetcher::new(assets_root.clone()))?;
    let loader = thumbcraft::ImageLoader::new(fetcher, thumbcraft::ImageLoaderOpts::default());
    Ok(Box::new(thumbcraft::SvgRasterizer::with_loader(
        loader,
        assets_root.as_deref(),
    )))
}
