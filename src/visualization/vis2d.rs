//! Bevy 2D viewer and input layer
//!
//! Draws the population as gizmo circles, shows live counts/parameters
//! as HUD text, and translates key presses into [`Command`]s. All physics
//! state is reached through the [`Scenario`] resource; this module never
//! mutates the simulation except via commands and the fixed-step clock.
//!
//! Keys:
//! - `Space` run/pause, `H` help (pauses)
//! - `X`/`Shift+X`, `Y`/`Shift+Y` lower/raise target atom counts (rebuilds)
//! - `Z`/`Shift+Z` lower/raise the decay constant
//! - `-`/`+` lower/raise the tick rate
//! - `Q`/`A` grow/shrink the X radius, `W`/`S` the Y radius (rebuilds)
//! - `G` toggle gravity

use bevy::log::info;
use bevy::prelude::*;

use crate::simulation::engine::Command;
use crate::simulation::params::HUD_STRIP;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::Species;

const HELP_TEXT: &str = "X/x  raise or lower the number of X atoms
Y/y  raise or lower the number of Y atoms
Z/z  raise or lower the complex decay constant
+/-  raise or lower the simulation speed (as far as the hardware allows)
Q/A and W/S  grow or shrink the radius of atom X and atom Y
G    toggle gravity on or off
Space  run / pause";

const PAUSE_TEXT: &str = "PAUSED - press \"H\" for help";

#[derive(Component)]
struct HudText;

#[derive(Component)]
struct OverlayText;

/// Presentation-only state; the core knows nothing about it.
#[derive(Resource, Default)]
struct ViewerState {
    show_help: bool,
}

pub fn run_2d(scenario: Scenario) {
    println!(
        "run_2d: starting Bevy 2D viewer with {} particles",
        scenario.sim.population.len()
    );

    let width = scenario.sim.params.arena_width as f32;
    let height = scenario.sim.params.arena_height as f32;

    App::new()
        .insert_resource(scenario)
        .insert_resource(ViewerState::default())
        .insert_resource(ClearColor(Color::WHITE))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "steadystate".into(),
                resolution: (width, height).into(),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_view_system)
        .add_systems(
            Update,
            (keyboard_system, physics_step_system, draw_particles_system, hud_text_system),
        )
        .run();
}

fn setup_view_system(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());

    // Counts/parameters readout, top-left inside the HUD strip
    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: 18.0,
                color: Color::BLACK,
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(10.0),
            ..default()
        }),
        HudText,
    ));

    // Pause banner / help text, below the readout
    commands.spawn((
        TextBundle::from_section(
            PAUSE_TEXT,
            TextStyle {
                font_size: 22.0,
                color: Color::BLACK,
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(80.0),
            left: Val::Px(10.0),
            ..default()
        }),
        OverlayText,
    ));
}

/// Feed the render delta into the fixed-step clock.
fn physics_step_system(time: Res<Time>, mut scenario: ResMut<Scenario>) {
    let Scenario { sim, detector } = &mut *scenario;
    sim.advance(time.delta_seconds() as f64, detector);
}

/// Map sim coordinates (origin bottom-left, y up) to bevy world
/// coordinates (origin center, y up).
fn to_world(x: f64, y: f64, width: f32, height: f32) -> Vec2 {
    Vec2::new(x as f32 - width / 2.0, y as f32 - height / 2.0)
}

fn draw_particles_system(mut gizmos: Gizmos, scenario: Res<Scenario>) {
    let params = &scenario.sim.params;
    let width = params.arena_width as f32;
    let height = params.arena_height as f32;

    for p in scenario.sim.population.iter() {
        let color = match p.species {
            Species::X => Color::BLUE,
            Species::Y => Color::RED,
            Species::Complex => Color::GREEN,
        };
        gizmos.circle_2d(to_world(p.x.x, p.x.y, width, height), p.radius as f32, color);
    }

    // Ceiling under the HUD strip, only meaningful without gravity
    if !params.gravity_on {
        let y = params.arena_height - HUD_STRIP;
        gizmos.line_2d(
            to_world(0.0, y, width, height),
            to_world(params.arena_width, y, width, height),
            Color::BLACK,
        );
    }
}

fn hud_text_system(
    scenario: Res<Scenario>,
    state: Res<ViewerState>,
    mut hud: Query<&mut Text, (With<HudText>, Without<OverlayText>)>,
    mut overlay: Query<&mut Text, (With<OverlayText>, Without<HudText>)>,
) {
    let sim = &scenario.sim;
    let counts = sim.counts();
    let params = &sim.params;

    let mut readout = format!(
        "X atoms: {}, Y atoms: {}, complexes: {}, tick rate (Hz): {}\n\
         decay constant: {:.2}, mass X: {:.1}, mass Y: {:.1}",
        counts.x, counts.y, counts.complexes, params.hertz, params.decay_constant,
        params.mass_x(), params.mass_y(),
    );
    if params.gravity_on {
        readout.push_str("\ngravity is on");
    }
    for mut text in &mut hud {
        text.sections[0].value = readout.clone();
    }

    let banner = if sim.is_running() {
        ""
    } else if state.show_help {
        HELP_TEXT
    } else {
        PAUSE_TEXT
    };
    for mut text in &mut overlay {
        text.sections[0].value = banner.to_string();
    }
}

fn keyboard_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut scenario: ResMut<Scenario>,
    mut state: ResMut<ViewerState>,
) {
    let shift = keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight);

    let mut command = None;
    if keys.just_pressed(KeyCode::Space) {
        command = Some(Command::ToggleRun);
        state.show_help = false;
    } else if keys.just_pressed(KeyCode::KeyG) {
        command = Some(Command::ToggleGravity);
    } else if keys.just_pressed(KeyCode::Equal) || keys.just_pressed(KeyCode::NumpadAdd) {
        command = Some(Command::RaiseHertz);
    } else if keys.just_pressed(KeyCode::Minus) || keys.just_pressed(KeyCode::NumpadSubtract) {
        command = Some(Command::LowerHertz);
    } else if keys.just_pressed(KeyCode::KeyX) {
        command = Some(if shift { Command::RaiseTargetX } else { Command::LowerTargetX });
    } else if keys.just_pressed(KeyCode::KeyY) {
        command = Some(if shift { Command::RaiseTargetY } else { Command::LowerTargetY });
    } else if keys.just_pressed(KeyCode::KeyZ) {
        command = Some(if shift { Command::RaiseDecay } else { Command::LowerDecay });
    } else if keys.just_pressed(KeyCode::KeyQ) {
        command = Some(Command::GrowRadiusX);
    } else if keys.just_pressed(KeyCode::KeyA) {
        command = Some(Command::ShrinkRadiusX);
    } else if keys.just_pressed(KeyCode::KeyW) {
        command = Some(Command::GrowRadiusY);
    } else if keys.just_pressed(KeyCode::KeyS) {
        command = Some(Command::ShrinkRadiusY);
    } else if keys.just_pressed(KeyCode::KeyH) {
        state.show_help = true;
        scenario.sim.set_running(false);
    }

    if let Some(command) = command {
        info!(?command, "applying input command");
        scenario.sim.apply(command);
    }
}
