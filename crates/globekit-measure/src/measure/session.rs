use globekit_common::{Cartesian3, MeasureError};
use globekit_config::schema::MeasureConfig;
use tracing::{debug, warn};

use crate::drawer::{DrawStyle, Drawer};
use crate::locale::MeasureLocale;

use super::{labels, Label, MeasureKind, MeasureResult};

/// A drawer bound to a measurement kind. Labels follow every point
/// change, preview included.
#[derive(Debug, Clone)]
pub struct Measure {
    kind: MeasureKind,
    locale: MeasureLocale,
    drawer: Drawer,
    labels: Vec<Label>,
}

impl Measure {
    pub fn new(kind: MeasureKind, locale: MeasureLocale, style: DrawStyle) -> Self {
        Self {
            kind,
            locale,
            drawer: Drawer::new(kind.shape_kind(), style),
            labels: Vec::new(),
        }
    }

    pub fn from_config(kind: MeasureKind, config: &MeasureConfig) -> Self {
        Self::new(
            kind,
            MeasureLocale::from_config(config),
            DrawStyle::from_config(config),
        )
    }

    pub fn kind(&self) -> MeasureKind {
        self.kind
    }

    pub fn locale(&self) -> &MeasureLocale {
        &self.locale
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn positions(&self) -> &[Cartesian3] {
        self.drawer.positions()
    }

    pub fn is_complete(&self) -> bool {
        self.drawer.is_complete()
    }

    pub fn drop_point(&mut self, position: Cartesian3) -> Result<bool, MeasureError> {
        let accepted = self.drawer.drop_point(position)?;
        if accepted {
            self.refresh();
        }
        Ok(accepted)
    }

    pub fn moving(&mut self, position: Cartesian3) -> Result<bool, MeasureError> {
        let moved = self.drawer.moving(position)?;
        if moved {
            self.refresh();
        }
        Ok(moved)
    }

    pub fn cancel(&mut self) -> bool {
        let cancelled = self.drawer.cancel();
        if cancelled {
            self.refresh();
        }
        cancelled
    }

    /// Finish the shape and return it with its final labels. A failed
    /// finish keeps the drawing so the user can fix it.
    pub fn finish(&mut self) -> Result<MeasureResult, MeasureError> {
        let shape = self.drawer.shape()?;
        let labels = labels(self.kind, &shape.positions, &self.locale)?;
        self.drawer.reset();
        self.labels.clear();
        debug!(kind = %self.kind, labels = labels.len(), "measurement finished");
        Ok(MeasureResult {
            kind: self.kind,
            shape,
            labels,
        })
    }

    fn refresh(&mut self) {
        self.labels = match labels(self.kind, self.drawer.positions(), &self.locale) {
            Ok(labels) => labels,
            Err(MeasureError::NotEnoughPoints { .. }) => Vec::new(),
            Err(e) => {
                warn!(kind = %self.kind, "labels unavailable: {e}");
                Vec::new()
            }
        };
    }
}
