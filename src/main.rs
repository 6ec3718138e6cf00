use clap::{ArgAction, Parser};

use snapline::{Config, backend};

#[derive(Parser, Debug)]
#[command(name = "snapline")]
#[command(version, about = "Snapping segment and polyline drawing overlay for Wayland")]
struct Cli {
    /// Open the drawing overlay
    #[arg(long, short = 'a', action = ArgAction::SetTrue)]
    active: bool,

    /// Write a documented config.toml to the config directory and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,

    /// Snap distance in pixels (overrides [snap] threshold)
    #[arg(long, value_name = "PX")]
    snap_threshold: Option<f64>,

    /// Start with snapping disabled
    #[arg(long, action = ArgAction::SetTrue)]
    no_snap: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    if cli.active {
        if std::env::var("WAYLAND_DISPLAY").is_err() {
            log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
            log::error!("Please run on a wlr-layer-shell compositor (Hyprland, Sway, etc.).");
            return Err(anyhow::anyhow!("Wayland environment required"));
        }

        log::info!("Starting drawing overlay...");
        log::info!("Controls:");
        log::info!("  - Left click: place anchor, click again to commit the segment");
        log::info!("  - Right click: drop the pending anchor");
        log::info!("  - Escape: finish the current polyline");
        log::info!("  - S: toggle snapping");
        log::info!("  - F10: help, F12: status bar");
        log::info!("  - Exit: Ctrl+Q");

        backend::run_wayland(backend::Overrides {
            snap_threshold: cli.snap_threshold,
            no_snap: cli.no_snap,
        })?;

        log::info!("Drawing overlay closed.");
    } else {
        println!("snapline: Snapping segment and polyline drawing overlay for Wayland");
        println!();
        println!("Usage:");
        println!("  snapline --active                Open the drawing overlay");
        println!("  snapline --active --no-snap      Open with snapping disabled");
        println!("  snapline --snap-threshold <PX>   Override the snap distance");
        println!("  snapline --init-config           Write a default config.toml");
        println!("  snapline --help                  Show help");
        println!();
        println!("Drawing:");
        println!("  Click twice to draw a segment; the pointer snaps onto nearby");
        println!("  segments. Press Escape to finish the polyline.");
        println!();
        println!("Requirements:");
        println!("  - Wayland compositor (Hyprland, Sway, etc.)");
        println!("  - wlr-layer-shell protocol support");
    }

    Ok(())
}
