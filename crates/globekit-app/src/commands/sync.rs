//! `globekit sync`: two simulated views driven through a scripted pan.

use std::rc::Rc;

use globekit_common::{BoundingRectangle, Cartesian2, GlobeError, GroundRectangle};
use globekit_config::schema::{GlobekitConfig, SyncMode};
use globekit_sync::{FlatView, SceneView, Side, ViewportSynchronizer};
use serde::Serialize;
use tracing::{debug, info};

/// Degrees panned per step.
const PAN_STEP_DEG: f64 = 0.5;

#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: u32,
    pub driver: String,
    /// Secondary camera center, degrees.
    pub secondary_center: (f64, f64),
    pub overlay: Option<BoundingRectangle>,
    pub look_at_locked: bool,
}

pub fn run(
    config: &GlobekitConfig,
    mode: Option<SyncMode>,
    steps: u32,
) -> Result<Vec<StepReport>, GlobeError> {
    let mut sync_config = config.sync.clone();
    if let Some(mode) = mode {
        sync_config.mode = mode;
    }

    let primary = Rc::new(FlatView::new(
        "primary",
        800.0,
        400.0,
        GroundRectangle::from_degrees(-10.0, 40.0, 10.0, 50.0),
    ));
    let secondary = Rc::new(FlatView::new(
        "secondary",
        400.0,
        200.0,
        GroundRectangle::from_degrees(-40.0, 20.0, 40.0, 70.0),
    ));

    let sync = ViewportSynchronizer::builder()
        .primary(primary.clone())
        .secondary(secondary.clone())
        .config(sync_config)
        .overlay_config(&config.overlay)?
        .build()?;
    sync.start()?;
    info!(mode = ?sync.mode(), steps, "sync session started");

    let step_rad = PAN_STEP_DEG.to_radians();
    let mut reports = Vec::with_capacity(steps as usize);
    for step in 1..=steps {
        // Mirror sessions hand control to the secondary every third step.
        let driver = if sync.mode() == SyncMode::Mirror && step % 3 == 0 {
            secondary.as_ref()
        } else {
            primary.as_ref()
        };
        let (w, h) = driver.canvas_size();
        driver.move_pointer(Cartesian2::new(w / 2.0, h / 2.0));
        if !driver.pan(step_rad, step_rad / 2.0) {
            debug!(view = driver.name(), "pan rejected");
        }
        if let Some(e) = sync.take_last_error() {
            return Err(e.into());
        }

        let center = secondary.rectangle().center();
        reports.push(StepReport {
            step,
            driver: driver.name().to_string(),
            secondary_center: (center.longitude.to_degrees(), center.latitude.to_degrees()),
            overlay: sync.last_overlay(),
            look_at_locked: match sync.active_side() {
                Side::Primary => secondary.look_at_lock().is_some(),
                Side::Secondary => primary.look_at_lock().is_some(),
            },
        });
    }

    sync.destroy()?;
    debug!(
        primary_sensitivity = primary.percentage_changed(),
        "sync session finished"
    );
    Ok(reports)
}

pub fn print(reports: &[StepReport]) {
    for r in reports {
        let overlay = match r.overlay {
            Some(o) => format!(
                "overlay {:.1},{:.1} {:.1}x{:.1}",
                o.x, o.y, o.width, o.height
            ),
            None => "no overlay".to_string(),
        };
        println!(
            "step {:>3}  driver {:<9}  secondary center {:>8.3},{:>7.3}  {}{}",
            r.step,
            r.driver,
            r.secondary_center.0,
            r.secondary_center.1,
            overlay,
            if r.look_at_locked { "  [locked]" } else { "" }
        );
    }
}
