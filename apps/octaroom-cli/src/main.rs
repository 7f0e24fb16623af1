use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use octaroom_picking::{PickRay, resolve};
use octaroom_render::{DebugTextRenderer, FirstPersonCamera, Renderer};
use octaroom_scene::{SceneConfig, Selection, build_scene, step};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "octaroom-cli", about = "Headless octaroom operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Seed for the wall and cube colors
    #[arg(long, default_value = "42")]
    seed: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate inventory and scene summary
    Info,
    /// Cast a pick ray at the given viewport coordinates and print the result
    Pick {
        /// Pixel x coordinate
        #[arg(short, long, default_value = "640")]
        x: f32,
        /// Pixel y coordinate
        #[arg(short, long, default_value = "360")]
        y: f32,
        /// Viewport width in pixels
        #[arg(long, default_value = "1280")]
        width: f32,
        /// Viewport height in pixels
        #[arg(long, default_value = "720")]
        height: f32,
        /// Aim the camera at this object before picking
        #[arg(long)]
        aim: Option<String>,
    },
    /// Select a cube and run the spin animation for N frames
    Spin {
        /// Number of frames to step
        #[arg(short, long, default_value = "100")]
        frames: u32,
        /// Name of the cube to spin
        #[arg(long, default_value = "cube_0")]
        name: String,
    },
    /// Print the scene registry
    Dump {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = SceneConfig {
        color_seed: cli.seed,
        ..SceneConfig::default()
    };

    match cli.command {
        Commands::Info => {
            println!("octaroom-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("scene: {}", octaroom_scene::crate_info());
            println!("picking: {}", octaroom_picking::crate_info());
            println!("input: {}", octaroom_input::crate_info());
            println!("render: {}", octaroom_render::crate_info());
            let registry = build_scene(&config);
            println!("objects: {}", registry.len());
        }
        Commands::Pick {
            x,
            y,
            width,
            height,
            aim,
        } => {
            let registry = build_scene(&config);
            let mut camera = FirstPersonCamera::default();
            camera.aspect = width / height;
            if let Some(name) = aim {
                let target = registry
                    .find_by_name(&name)
                    .and_then(|id| registry.get(id))
                    .with_context(|| format!("no object named \"{name}\""))?;
                camera.look_at(target.transform.position);
            }

            let ray = PickRay::from_screen(x, y, width, height, &camera);
            let hit = resolve(&registry, ray);

            let mut selection = Selection::new();
            selection.set_from_pick(&registry, hit.map(|h| h.id));

            match (hit, selection.last_pick()) {
                (Some(hit), Some(outcome)) => {
                    println!("{outcome} (distance {:.2})", hit.distance);
                }
                _ => println!("picked nothing"),
            }
            println!(
                "selection: {}",
                if selection.is_empty() { "empty" } else { "set" }
            );
        }
        Commands::Spin { frames, name } => {
            let mut registry = build_scene(&config);
            let id = registry
                .find_by_name(&name)
                .with_context(|| format!("no object named \"{name}\""))?;

            let mut selection = Selection::new();
            selection.set_from_pick(&registry, Some(id));
            anyhow::ensure!(!selection.is_empty(), "\"{name}\" is not rotatable");

            for _ in 0..frames {
                step(&mut registry, &selection);
            }

            let rot = registry
                .get(id)
                .context("selected object vanished from the registry")?
                .transform
                .rotation;
            println!(
                "{name} after {frames} frames: rot=({:.4}, {:.4}, {:.4})",
                rot.x, rot.y, rot.z
            );
        }
        Commands::Dump { json } => {
            let registry = build_scene(&config);
            if json {
                println!("{}", serde_json::to_string_pretty(registry.objects())?);
            } else {
                let camera = FirstPersonCamera::default();
                print!("{}", DebugTextRenderer::new().render(&registry, &camera));
            }
        }
    }

    Ok(())
}
