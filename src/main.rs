// Hide console window on Windows for release builds (GUI app).
// In debug builds, keep the console so panics/backtraces are visible.
// CLI mode will re-attach to parent console if available.
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use bevy::prelude::*;
use bevy::winit::WinitWindows;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use tumbledie::die3d::{
    advance_die, handle_lighting_keys, handle_roll_input, push_lighting, setup,
    sync_face_textures, update_light_from_cursor, update_score_display, DieFaceMaterial,
    LightingState, RollPlan, RollRng, RollSettings, RotationState, Score, ScoreTiming,
};

/// Tumble Die - CLI and 3D visualization
#[derive(Parser)]
#[command(name = "tumbledie")]
#[command(
    author,
    version,
    about = "Tumbling 3D die roller with CLI and 3D visualization"
)]
struct Cli {
    /// Run in CLI mode (no GUI): roll in the terminal and exit
    #[arg(long)]
    cli: bool,

    /// Number of dice to roll in CLI mode
    #[arg(short, long, default_value_t = 1)]
    rolls: u32,

    /// Seed for the roll RNG; omit for a fresh sequence every run
    #[arg(long)]
    seed: Option<u64>,

    /// Path to the settings JSON file
    #[arg(short = 'f', long = "file", default_value = "roll_settings.json")]
    settings_file: PathBuf,

    /// Override the score timing from the settings file
    #[arg(long, value_enum)]
    score_timing: Option<ScoreTiming>,
}

fn main() {
    let cli = Cli::parse();

    if cli.cli {
        // Attach to parent console for CLI output (Windows only)
        #[cfg(windows)]
        attach_parent_console();

        run_cli_mode(&cli);
    } else {
        // GUI mode - no console needed (windows_subsystem = "windows" handles this)
        run_3d_mode(cli);
    }
}

/// Attach to the parent process's console on Windows.
/// Needed because windows_subsystem = "windows" hides the console, but CLI
/// mode must print to the terminal it was launched from.
#[cfg(windows)]
fn attach_parent_console() {
    use std::io::{self, Write};

    #[link(name = "kernel32")]
    extern "system" {
        fn AttachConsole(dwProcessId: u32) -> i32;
    }

    const ATTACH_PARENT_PROCESS: u32 = 0xFFFFFFFF;

    unsafe {
        AttachConsole(ATTACH_PARENT_PROCESS);
    }

    let _ = io::stdout().flush();
    let _ = io::stderr().flush();
}

// ============================================================================
// 3D Mode
// ============================================================================

fn run_3d_mode(cli: Cli) {
    let mut settings = RollSettings::load_from_file(&cli.settings_file);
    if let Some(timing) = cli.score_timing {
        settings.score_timing = timing;
    }

    // System to set the window icon, best effort - a missing icon file just
    // leaves the platform default.
    fn set_window_icon(
        windows: Option<NonSend<WinitWindows>>,
        primary_query: Query<Entity, With<bevy::window::PrimaryWindow>>,
    ) {
        let Some(windows) = windows else {
            return;
        };
        let Ok(primary_entity) = primary_query.single() else {
            return;
        };
        let Some(primary) = windows.get_window(primary_entity) else {
            return;
        };

        for path in ["assets/icon.png", "icon.png"] {
            let Ok(icon_data) = std::fs::read(path) else {
                continue;
            };
            let Ok(img) = image::load_from_memory(&icon_data) else {
                continue;
            };
            let rgba = img.to_rgba8();
            let (width, height) = rgba.dimensions();
            if let Ok(icon) = winit::window::Icon::from_rgba(rgba.into_raw(), width, height) {
                primary.set_window_icon(Some(icon));
                return;
            }
        }
    }

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Tumble Die".to_string(),
                        resolution: (1280u32, 720u32).into(),
                        ..default()
                    }),
                    ..default()
                })
                // Keep app logs at info, but silence wgpu validation spam.
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "info,wgpu=error".to_string(),
                    ..default()
                }),
        )
        .add_plugins(bevy::pbr::MaterialPlugin::<DieFaceMaterial>::default())
        .insert_resource(ClearColor(Color::srgb(0.1, 0.1, 0.1)))
        .insert_resource(settings)
        .insert_resource(RollRng::new(cli.seed))
        .insert_resource(RotationState::default())
        .insert_resource(LightingState::default())
        .insert_resource(Score::default())
        .add_systems(Startup, (set_window_icon, setup).chain())
        .add_systems(
            Update,
            (
                handle_roll_input,
                handle_lighting_keys,
                update_light_from_cursor,
                advance_die,
                push_lighting,
                sync_face_textures,
                update_score_display,
            ),
        )
        .run();
}

// ============================================================================
// CLI Mode
// ============================================================================

fn effective_roll_count(rolls: u32) -> u32 {
    rolls.max(1)
}

fn run_cli_mode(cli: &Cli) {
    let mut rng = RollRng::new(cli.seed);
    let count = effective_roll_count(cli.rolls);

    println!("\n{}", "═══════════════════════════".cyan());
    println!(
        "{} {}",
        "Rolling:".bold().white(),
        format!("{} d6", count).yellow().bold()
    );

    let mut total: u64 = 0;
    let mut values = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let plan = RollPlan::generate(&mut rng.0);
        total += u64::from(plan.outcome);
        let value = match plan.outcome {
            6 => format!("[{}]", plan.outcome).bright_green().bold(),
            1 => format!("[{}]", plan.outcome).bright_red().bold(),
            _ => format!("[{}]", plan.outcome).bright_white().bold(),
        };
        values.push(value.to_string());
    }

    println!("{} {}", "Dice:".bold().white(), values.join(" "));
    println!(
        "{} {}",
        "Total:".bold().white(),
        total.to_string().yellow().bold()
    );
    println!("{}", "═══════════════════════════".cyan());
}
