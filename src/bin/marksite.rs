use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(name = "marksite", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the site over HTTP.
    Serve(ServeArgs),
    /// Write the seeded artwork as SVG or PNG.
    Image(ImageArgs),
    /// Print a generated (or canned) snippet as JSON.
    Snippet(SnippetArgs),
    /// Resolve a scene the way `/scenes` would.
    Pick(PickArgs),
    /// List the scene catalog.
    Scenes,
    /// Print a share link for a message.
    Link(LinkArgs),
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// TCP address to bind.
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[derive(Parser, Debug)]
struct ImageArgs {
    /// Variation seed; the current time is used without one.
    #[arg(long)]
    seed: Option<String>,

    /// Output path; `.png` rasterizes, anything else writes SVG.
    #[arg(long)]
    out: PathBuf,

    /// Raster scale for PNG output.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,
}

#[derive(Parser, Debug)]
struct SnippetArgs {
    /// Variation seed.
    #[arg(long)]
    seed: Option<String>,

    /// Message woven into the snippet.
    #[arg(long)]
    message: Option<String>,
}

#[derive(Parser, Debug)]
struct PickArgs {
    /// Explicit scene id.
    #[arg(long)]
    scene: Option<String>,

    /// Variation seed.
    #[arg(long)]
    seed: Option<String>,

    /// Message shown by the scene.
    #[arg(long)]
    message: Option<String>,

    /// Write the rendered HTML document here.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Skip the snippet service; AI scenes use a built-in default snippet.
    #[arg(long)]
    offline: bool,
}

#[derive(Parser, Debug)]
struct LinkArgs {
    /// Canned message option id.
    #[arg(long, conflicts_with = "message", required_unless_present = "message")]
    option: Option<String>,

    /// Custom message text.
    #[arg(long)]
    message: Option<String>,

    /// Site origin.
    #[arg(long, default_value = "http://localhost:3000")]
    base: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marksite=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Image(args) => cmd_image(args),
        Command::Snippet(args) => cmd_snippet(args).await,
        Command::Pick(args) => cmd_pick(args).await,
        Command::Scenes => cmd_scenes(),
        Command::Link(args) => cmd_link(args),
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let state = marksite::AppState::from_env().context("build app state")?;
    marksite::serve(args.bind, state)
        .await
        .with_context(|| format!("serve on {}", args.bind))?;
    Ok(())
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

fn cmd_image(args: ImageArgs) -> anyhow::Result<()> {
    let svg = marksite::mark_svg(args.seed.as_deref());
    let is_png = args
        .out
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("png"));
    if is_png {
        let png = marksite::render_png(&svg, args.scale).context("rasterize artwork")?;
        write_output(&args.out, &png)
    } else {
        write_output(&args.out, svg.as_bytes())
    }
}

async fn cmd_snippet(args: SnippetArgs) -> anyhow::Result<()> {
    let service = marksite::SnippetService::chat_completions(marksite::ConfigSource::Env)?;
    let mut rng = marksite::ThreadSceneRng::new();
    let resp = service
        .snippet(args.seed.as_deref(), args.message.as_deref(), &mut rng)
        .await;
    println!("{}", serde_json::to_string_pretty(&resp)?);
    Ok(())
}

async fn cmd_pick(args: PickArgs) -> anyhow::Result<()> {
    let state = marksite::AppState::from_env().context("build app state")?;
    let req = marksite::SceneRequest {
        scene: args.scene,
        seed: args.seed,
        message: args.message,
        debug: None,
    };
    let orchestrator = if args.offline {
        state.orchestrator.clone().without_snippet_fetch()
    } else {
        state.orchestrator.clone()
    };
    let mut rng = marksite::ThreadSceneRng::new();
    let resolved = orchestrator.resolve(&req, &mut rng).await;
    match &resolved.scene {
        Some(scene) => println!("{}\t{}", scene.id, scene.name),
        None => println!("loading"),
    }
    if let Some(err) = &resolved.error {
        eprintln!("fallback: {err}");
    }
    if let Some(out) = &args.out {
        write_output(out, resolved.document.as_bytes())?;
    }
    Ok(())
}

fn cmd_scenes() -> anyhow::Result<()> {
    let registry = marksite::SceneRegistry::with_default_scenes();
    for scene in registry.get_all() {
        println!(
            "{}\t{}\t{}{}",
            scene.id,
            scene.name,
            scene.effective_weight(),
            if scene.requires_api { "\tapi" } else { "" }
        );
    }
    Ok(())
}

fn cmd_link(args: LinkArgs) -> anyhow::Result<()> {
    let message = match (&args.option, &args.message) {
        (Some(option), _) => marksite::resolve_message(option, None)
            .with_context(|| format!("unknown or custom-only option '{option}'"))?,
        (None, Some(message)) => message.clone(),
        (None, None) => anyhow::bail!("pass --option or --message"),
    };
    let url = marksite::share_url(&args.base, &message)?;
    println!("{url}");
    Ok(())
}
