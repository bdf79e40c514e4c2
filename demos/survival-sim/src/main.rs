//! Headless demo session.
//!
//! Builds a small arena, scripts a few seconds of input (walk toward the
//! horde, grab the rifle, open fire), and reports what happened. Run with
//! `RUST_LOG=debug` for the per-event trace.

use deadfall_math::Vec2;
use deadfall_world::{FrameInput, GameConfig, Session, SimEvent, World};

const FRAME_DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let grid = [
        "111111111111111111",
        "1P......1......E.1",
        "1..R....1........1",
        "1.......1....E...1",
        "1...1111111......1",
        "1................1",
        "1...A....E.....H.1",
        "111111111111111111",
    ];

    let mut world = World::build(&grid, GameConfig::default(), 0xDEAD)
        .expect("demo grid is well-formed");

    let mut frames = 0u32;
    while world.session() == Session::Playing && frames < 1800 {
        world.step(&script(frames), FRAME_DT);

        for event in world.events().drain() {
            log::debug!("t={:>6.0}ms {:?}", world.time_ms(), event);
            if let SimEvent::PlayerDied = event {
                log::info!("session over after {} frames", frames);
            }
        }
        frames += 1;
    }

    let p = &world.player;
    log::info!(
        "after {} frames: player at ({:.0}, {:.0}), {} hp, {} enemies left, {} items left",
        frames,
        p.body.position.x,
        p.body.position.y,
        p.health.current,
        world.enemies.len(),
        world.pickups.len()
    );
}

/// Scripted input: walk down-right toward the rifle, then hold the line
/// and shoot at whatever comes through the gap.
fn script(frame: u32) -> FrameInput {
    match frame {
        // Head for the rifle pickup.
        0..=150 => FrameInput {
            move_axis: Vec2::new(0.6, 0.8),
            aim: Vec2::new(1.0, 0.0),
            ..FrameInput::default()
        },
        // Sprint back to the corner.
        151..=260 => FrameInput {
            move_axis: Vec2::new(-1.0, -0.5),
            sprint: true,
            aim: Vec2::new(1.0, 0.3),
            ..FrameInput::default()
        },
        // Hold the trigger; reload whenever the clip runs dry.
        _ => FrameInput {
            aim: Vec2::new(1.0, 0.4),
            fire: frame % 3 != 0,
            reload: frame % 90 == 0,
            melee: frame % 240 == 0,
            ..FrameInput::default()
        },
    }
}
