//! Headless globe viewer: builds the full scene, then runs the animation
//! loop with a scripted pointer interaction so the freeze / cooldown /
//! resume behavior can be watched in the logs.

mod config;

use anyhow::Result;
use config::ViewerConfig;
use engine_core::Time;
use glam::Vec2;
use globe::{default_locations, glow_edges, standard_edges, RotationMode};
use input::{ElementState, PointerState};
use renderer::{GlobeScene, SceneParams};

/// Scripted drag: press partway through the run, release half a second
/// later, then watch auto-rotation resume after the cooldown.
const PRESS_AT: f64 = 2.0;
const RELEASE_AT: f64 = 2.5;

fn main() -> Result<()> {
    env_logger::init();

    let config = ViewerConfig::load();
    let catalog = default_locations();
    let standard = standard_edges();
    let glow = glow_edges();

    let params = SceneParams {
        star_count: config.star_count,
        star_inner_radius: config.star_inner_radius,
        star_outer_radius: config.star_outer_radius,
        star_seed: config.star_seed,
        texture_path: config.texture_path.clone(),
        rotation_increment: config.rotation_increment,
        cooldown_seconds: config.cooldown_seconds,
    };
    let mut scene = GlobeScene::build(&catalog, &standard, &glow, &params);

    log::info!(
        "scene built: {} locations, {} draw nodes, {} buffered points, textured: {}",
        catalog.len(),
        scene.draw_list().len(),
        scene.point_count(),
        scene.body.material.is_textured()
    );

    let mut time = Time::new();
    time.set_fixed_rate(60.0);
    let mut pointer = PointerState::new();
    let mut press_sent = false;
    let mut release_sent = false;
    let mut last_mode = scene.rotation_mode();

    while time.elapsed_seconds() < config.simulation_seconds {
        time.update();
        while time.should_fixed_update() {
            let now = time.elapsed_seconds();
            pointer.begin_frame();

            if !press_sent && now >= PRESS_AT {
                pointer.process_button(ElementState::Pressed);
                press_sent = true;
            }
            if pointer.is_held() {
                // Drift the pointer a little so the orbit camera moves.
                pointer.process_motion(pointer.position() + Vec2::new(3.0, -1.0));
            }
            if !release_sent && now >= RELEASE_AT {
                pointer.process_button(ElementState::Released);
                release_sent = true;
            }

            if pointer.pressed() {
                scene.pointer_down();
            }
            if pointer.is_held() {
                scene.camera.orbit(pointer.delta());
            }
            if pointer.interaction_ended() {
                scene.pointer_released(now);
            }

            scene.tick(now);

            let mode = scene.rotation_mode();
            if mode != last_mode {
                log::info!("rotation: {:?} -> {:?} at {:.2}s", last_mode, mode, now);
                last_mode = mode;
            }
        }
        std::thread::sleep(std::time::Duration::from_millis(1));
    }

    log::info!(
        "done after {} frames ({:.0} fps): body yaw {:.4} rad, glow yaw {:.4} rad, camera distance {:.2}",
        time.frame_count(),
        time.fps(),
        scene.body.yaw,
        scene.outer_glow.yaw,
        scene.camera.distance()
    );
    if scene.rotation_mode() != RotationMode::AutoRotating {
        log::warn!(
            "ended in {:?}; expected auto-rotation to have resumed",
            scene.rotation_mode()
        );
    }
    Ok(())
}
