//! Distance culling demo
//!
//! Fills a grid with objects of both requester kinds, orbits the viewpoint
//! around it, and reports visible counts, FPS and per-phase tick timings.
//!
//! Run with: RUST_LOG=info cargo run -p distance_culling_demo

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use distance_culling::culling::{Engine, ManagerConfig, Result};
use distance_culling::culling::batch::{DistanceManager, FrameContext};
use distance_culling::culling::log::{Logger, LogEntry, LogSeverity};
use distance_culling::culling::position::{SharedReferencePoint, TransformStore};
use distance_culling::culling::stats::{FpsCounter, TickPhase};
use distance_culling::culling::visibility::{
    ActiveDistanceObject, ActiveFlag, DistanceGate, RendererDistanceObject, RendererSwitch,
};
use glam::Vec3;

const GRID_SIDE: usize = 100;
const GRID_SPACING: f32 = 2.0;
const RENDERERS_PER_OBJECT: usize = 3;
const ORBIT_RADIUS: f32 = 60.0;
/// Radians per frame
const ORBIT_SPEED: f32 = 0.01;
const FRAMES: u32 = 1200;

type ActiveObject = Arc<Mutex<ActiveDistanceObject<ActiveFlag>>>;
type RendererObject = Arc<Mutex<RendererDistanceObject<RendererSwitch>>>;

// ============================================================================
// LOG BRIDGE
// ============================================================================

/// Forwards culling log entries to the `log` crate
struct LogBridge;

impl Logger for LogBridge {
    fn log(&self, entry: &LogEntry) {
        let level = match entry.severity {
            LogSeverity::Trace => log::Level::Trace,
            LogSeverity::Debug => log::Level::Debug,
            LogSeverity::Info => log::Level::Info,
            LogSeverity::Warn => log::Level::Warn,
            LogSeverity::Error => log::Level::Error,
        };
        match (entry.file, entry.line) {
            (Some(file), Some(line)) => {
                log::log!(level, "[{}] {} ({}:{})", entry.source, entry.message, file, line)
            }
            _ => log::log!(level, "[{}] {}", entry.source, entry.message),
        }
    }
}

/// Culling severity matching the `log` crate's active filter
fn min_severity(filter: log::LevelFilter) -> LogSeverity {
    match filter {
        log::LevelFilter::Trace => LogSeverity::Trace,
        log::LevelFilter::Debug => LogSeverity::Debug,
        log::LevelFilter::Info => LogSeverity::Info,
        log::LevelFilter::Warn => LogSeverity::Warn,
        log::LevelFilter::Error | log::LevelFilter::Off => LogSeverity::Error,
    }
}

// ============================================================================
// SCENE
// ============================================================================

struct Scene {
    transforms: TransformStore,
    active_objects: Vec<ActiveObject>,
    renderer_objects: Vec<RendererObject>,
    center: Vec3,
}

impl Scene {
    /// Checkerboard of both kinds: even cells toggle their active flag,
    /// odd cells live in the transform store and toggle their renderers.
    fn build(manager: &mut DistanceManager) -> Self {
        let mut transforms = TransformStore::new();
        let mut active_objects = Vec::new();
        let mut renderer_objects = Vec::new();

        for i in 0..GRID_SIDE * GRID_SIDE {
            let position = Vec3::new(
                (i % GRID_SIDE) as f32 * GRID_SPACING,
                0.0,
                (i / GRID_SIDE) as f32 * GRID_SPACING,
            );
            if i % 2 == 0 {
                let object = Arc::new(Mutex::new(ActiveDistanceObject::with_gate(
                    position,
                    DistanceGate::default(),
                    ActiveFlag::new(true),
                )));
                manager.register(&object);
                active_objects.push(object);
            } else {
                let handle = transforms.insert(position);
                let renderers = vec![Some(RendererSwitch::new(true)); RENDERERS_PER_OBJECT];
                let object = Arc::new(Mutex::new(RendererDistanceObject::with_gate(
                    handle,
                    DistanceGate::default(),
                    renderers,
                )));
                manager.register(&object);
                renderer_objects.push(object);
            }
        }

        let extent = (GRID_SIDE - 1) as f32 * GRID_SPACING;
        Self {
            transforms,
            active_objects,
            renderer_objects,
            center: Vec3::new(extent * 0.5, 0.0, extent * 0.5),
        }
    }

    fn visible_active(&self) -> usize {
        self.active_objects
            .iter()
            .filter(|o| o.lock().map(|o| o.is_visible()).unwrap_or(false))
            .count()
    }

    fn visible_renderers(&self) -> usize {
        self.renderer_objects
            .iter()
            .filter(|o| o.lock().map(|o| o.is_visible() == Some(true)).unwrap_or(false))
            .count()
    }
}

// ============================================================================
// MAIN
// ============================================================================

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    Engine::set_logger(LogBridge);
    Engine::set_min_severity(min_severity(log::max_level()));

    if let Err(e) = run() {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut manager = DistanceManager::with_config(ManagerConfig::default())?;
    let scene = Scene::build(&mut manager);
    let camera = SharedReferencePoint::new(scene.center);

    log::info!(
        "Scene ready: {} active objects, {} renderer objects, {} transforms",
        scene.active_objects.len(),
        scene.renderer_objects.len(),
        scene.transforms.len()
    );

    let mut fps = FpsCounter::new();
    let mut phase_totals = [Duration::ZERO; 4];
    let mut last_frame = Instant::now();

    for frame in 0..FRAMES {
        let angle = frame as f32 * ORBIT_SPEED;
        camera.set(scene.center + Vec3::new(angle.cos(), 0.0, angle.sin()) * ORBIT_RADIUS);

        let stats = manager.tick(&FrameContext::new(&camera, &scene.transforms))?;
        for (total, phase) in phase_totals.iter_mut().zip(TickPhase::WORKING) {
            *total += stats.phase_duration(phase);
        }

        let now = Instant::now();
        if fps.update((now - last_frame).as_secs_f32()) {
            log::info!(
                "Frame {:4}: {:7.1} fps | visible {} active, {} renderer | tick {:?}{}",
                frame,
                fps.fps(),
                scene.visible_active(),
                scene.visible_renderers(),
                stats.total_duration(),
                if stats.parallel { " (parallel)" } else { "" }
            );
        }
        last_frame = now;
    }

    for (total, phase) in phase_totals.iter().zip(TickPhase::WORKING) {
        log::info!("Average {:?}: {:?}", phase, *total / FRAMES);
    }
    log::info!(
        "Final: {} of {} active objects visible, {} of {} renderer objects visible",
        scene.visible_active(),
        scene.active_objects.len(),
        scene.visible_renderers(),
        scene.renderer_objects.len()
    );

    Ok(())
}
