/*
 * Ocean Scene
 *
 * A night-time ocean: a textured backdrop, a boat bobbing on the swell and a
 * fish swimming past in the foreground, lit by a dim moon-like light.
 *
 * Controls:
 * - L / R: steer the boat left or right
 * - Space: reset the animations
 * - Hold X, Y or Z: view the scene along that axis (Up / Down to zoom)
 * - Escape: quit
 *
 * Logging is controlled with RUST_LOG and defaults to info.
 */

use ocean_scene::app::{model, update};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("Starting ocean scene");

    nannou::app(model).update(update).run();
}
