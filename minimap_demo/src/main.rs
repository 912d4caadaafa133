//! Headless minimap demo
//!
//! Drives the minimap against a simulated client for a fixed number of frames:
//! agents wander, the camera turns, and halfway through the player travels to
//! another map behind a short loading screen. Pass a `.toml` or `.ron` path to
//! override the default configuration.

mod sim_host;

use minimap::prelude::*;
use sim_host::{CountingDrawList, SimHost};
use thiserror::Error;

const FRAMES: u64 = 600;
const FRAME_TIME: f32 = 1.0 / 60.0;
const AGENT_COUNT: usize = 250;
const FIRST_MAP: MapId = 248;
const SECOND_MAP: MapId = 249;

#[derive(Error, Debug)]
enum DemoError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
}

fn main() -> Result<(), DemoError> {
    minimap::foundation::logging::init();

    log::info!("Starting minimap demo");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading configuration from {}", path);
            MinimapConfig::load_from_file(&path)?
        }
        None => MinimapConfig::default().with_rotation_mode(RotationMode::Smooth),
    };

    let mut minimap = Minimap::new(config)?;
    let mut host = SimHost::new(FIRST_MAP, AGENT_COUNT, 7);
    let canvas = Canvas::from_content_region(Point2::new(0.0, 0.0), Vec2::new(416.0, 416.0));
    let mut timer = Timer::new();

    let mut drawn = 0u64;
    let mut skipped = 0u64;
    let mut not_ready = 0u64;
    let mut totals = CountingDrawList::default();

    for frame in 0..FRAMES {
        match frame {
            280 => host.set_loading(true),
            300 => {
                host.travel(SECOND_MAP);
                host.set_loading(false);
            }
            _ => {}
        }

        host.tick(FRAME_TIME);
        let now = f64::from(FRAME_TIME) * frame as f64;

        let mut draw = CountingDrawList::default();
        match minimap.draw_frame(&host, &mut draw, &canvas, now) {
            FrameOutcome::Drawn(stats) => {
                drawn += 1;
                if stats.rebuilt {
                    log::info!("Frame {}: pathing rebuilt ({} quads cached)", frame, minimap.quad_count());
                }
                if frame % 120 == 0 {
                    log::info!(
                        "Frame {}: {} quads drawn / {} culled, {} agents drawn / {} culled",
                        frame,
                        stats.quads_drawn,
                        stats.quads_culled,
                        stats.agents_drawn,
                        stats.agents_culled
                    );
                }
            }
            FrameOutcome::NotReady => not_ready += 1,
            FrameOutcome::Skipped => skipped += 1,
            FrameOutcome::Disabled => {}
        }

        totals.quads += draw.quads;
        totals.filled_circles += draw.filled_circles;
        totals.outlines += draw.outlines;
        timer.update();
    }

    log::info!(
        "Done: {} of {} frames drawn, {} not ready, {} skipped ({:.0} fps)",
        drawn,
        timer.frame_count(),
        not_ready,
        skipped,
        timer.average_fps()
    );
    log::info!(
        "Primitives: {} quads, {} filled circles, {} outlines",
        totals.quads,
        totals.filled_circles,
        totals.outlines
    );

    Ok(())
}
