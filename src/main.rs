use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use log::info;

use vectorgl::diagnostics::{Diagnostic, Subject};
use vectorgl::lang::error::underline;
use vectorgl::lang::{classify, Classified};
use vectorgl::persistence::config::{load_config, Config};
use vectorgl::persistence::scene::{load_scene, save_scene};
use vectorgl::pipeline::{recompute, sample_all};
use vectorgl::plot::render::render_preview;
use vectorgl::scene::Scene;

#[derive(Parser)]
#[command(name = "vectorgl", version, about = "Generate FreeGLUT programs from vector scenes")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Write the FreeGLUT program for a scene
    Generate {
        /// Scene JSON file
        scene: PathBuf,
        /// Output file (defaults to `output_file` from the config)
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,
        /// Print the program instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// Parse one equation and point at the first problem
    Check {
        /// e.g. "y = sin(x) / x" or "x = 3"
        expression: String,
    },
    /// Print the sampled function points of a scene as JSON
    Sample { scene: PathBuf },
    /// Render the scene's functions to a PNG
    Preview {
        scene: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        /// Image width in pixels (defaults to the config)
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        height: Option<u32>,
    },
    /// Write a starter scene
    Init {
        scene: PathBuf,
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config();

    match cli.command {
        Cmd::Generate {
            scene,
            output,
            stdout,
        } => cmd_generate(&config, &scene, output, stdout),
        Cmd::Check { expression } => cmd_check(&expression),
        Cmd::Sample { scene } => cmd_sample(&scene),
        Cmd::Preview {
            scene,
            output,
            width,
            height,
        } => cmd_preview(
            &scene,
            &output,
            width.unwrap_or(config.preview_width),
            height.unwrap_or(config.preview_height),
        ),
        Cmd::Init { scene, force } => cmd_init(&config, &scene, force),
    }
}

fn cmd_generate(
    config: &Config,
    scene_path: &Path,
    output: Option<PathBuf>,
    stdout: bool,
) -> anyhow::Result<()> {
    let scene = load_scene(scene_path)?;
    let synthesis = recompute(&scene);
    report(&scene, &synthesis.diagnostics);

    if stdout {
        let mut out = std::io::stdout().lock();
        out.write_all(synthesis.program.as_bytes())
            .context("writing program to stdout")?;
        return Ok(());
    }

    let path = output.unwrap_or_else(|| PathBuf::from(&config.output_file));
    std::fs::write(&path, synthesis.program.as_bytes())
        .with_context(|| format!("writing program to {}", path.display()))?;
    info!("wrote {} bytes to {}", synthesis.program.len(), path.display());
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_check(expression: &str) -> anyhow::Result<()> {
    match classify(expression) {
        Ok(Classified::Vertical(x)) => println!("vertical line at x = {}", x),
        Ok(Classified::Function(f)) => println!("function of x, f(0) = {}", f.eval(0.0)),
        Err(err) => {
            eprintln!("{}", err.render(expression));
            std::process::exit(1);
        }
    }
    Ok(())
}

fn cmd_sample(scene_path: &Path) -> anyhow::Result<()> {
    let scene = load_scene(scene_path)?;
    let (sampled, diagnostics) = sample_all(&scene);
    report(&scene, &diagnostics);
    let json = serde_json::to_string_pretty(&sampled).context("serializing samples")?;
    println!("{}", json);
    Ok(())
}

fn cmd_preview(scene_path: &Path, output: &Path, width: u32, height: u32) -> anyhow::Result<()> {
    let scene = load_scene(scene_path)?;
    let (sampled, diagnostics) = sample_all(&scene);
    report(&scene, &diagnostics);
    let plot = render_preview(&sampled, &scene.viewport, width, height)
        .map_err(anyhow::Error::msg)
        .context("rendering preview")?;
    std::fs::write(output, &plot.png_bytes)
        .with_context(|| format!("writing preview to {}", output.display()))?;
    eprintln!("wrote {}x{} preview to {}", plot.width, plot.height, output.display());
    Ok(())
}

fn cmd_init(config: &Config, scene_path: &Path, force: bool) -> anyhow::Result<()> {
    if scene_path.exists() && !force {
        bail!("{} already exists (use --force to replace it)", scene_path.display());
    }
    save_scene(scene_path, &Scene::starter(config.viewport))?;
    eprintln!("wrote starter scene to {}", scene_path.display());
    Ok(())
}

/// Print diagnostics to stderr, with a caret line under function errors.
fn report(scene: &Scene, diagnostics: &[Diagnostic]) {
    for d in diagnostics {
        eprintln!("warning: {}", d);
        if let (Subject::Function { id }, Some(span)) = (d.subject, d.span) {
            if let Some(f) = scene.function(id) {
                eprintln!("{}", underline(&f.expression, span));
            }
        }
    }
}
