use super::resolver::Position;

/// Axis-aligned bounds of a set of positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl Bounds {
    pub fn of(positions: &[Position]) -> Option<Self> {
        let first = positions.first()?;
        let mut bounds = Self {
            min: first.point(),
            max: first.point(),
        };
        for p in &positions[1..] {
            bounds.min = [bounds.min[0].min(p.x), bounds.min[1].min(p.y)];
            bounds.max = [bounds.max[0].max(p.x), bounds.max[1].max(p.y)];
        }
        Some(bounds)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max[0] - self.min[0]
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max[1] - self.min[1]
    }

    #[inline]
    pub fn center(&self) -> [f64; 2] {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
        ]
    }
}

/// Fits `positions` into a `width` x `height` surface, in place.
///
/// A single uniform scale (the smaller of the per-axis factors) keeps every
/// ratio between distances intact, and the bounding-box center lands on the
/// surface center. A zero extent on either axis counts as 1 so coincident
/// atoms never divide by zero. On a surface too small for the requested
/// `padding`, the padding shrinks to a quarter of the shorter side so the scale
/// stays positive. Returns the scale used, or `None` when there is nothing
/// to fit.
pub fn normalize_positions(
    positions: &mut [Position],
    width: f64,
    height: f64,
    padding: f64,
) -> Option<f64> {
    let bounds = Bounds::of(positions)?;

    let max_padding = width.min(height).max(0.0) / 4.0;
    let padding = if padding > max_padding {
        log::warn!(
            "surface {width}x{height} is too small for padding {padding}, using {max_padding}"
        );
        max_padding
    } else {
        padding.max(0.0)
    };

    let range_x = if bounds.width() == 0.0 { 1.0 } else { bounds.width() };
    let range_y = if bounds.height() == 0.0 { 1.0 } else { bounds.height() };
    let scale_x = (width - 2.0 * padding) / range_x;
    let scale_y = (height - 2.0 * padding) / range_y;
    let scale = scale_x.min(scale_y);

    let [cx, cy] = bounds.center();
    let (half_w, half_h) = (width / 2.0, height / 2.0);
    for p in positions.iter_mut() {
        p.x = (p.x - cx) * scale + half_w;
        p.y = (p.y - cy) * scale + half_h;
    }

    log::debug!(
        "normalized {} positions with scale {:.3}",
        positions.len(),
        scale
    );
    Some(scale)
}
