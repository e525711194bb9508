use std::f64::consts::{FRAC_PI_2, TAU};

/// Percentage levels at which concentric grid rings are drawn.
pub const GRID_LEVELS: [u8; 5] = [20, 40, 60, 80, 100];

#[derive(Debug, Clone, PartialEq)]
pub struct SkillPoint {
    pub label: String,
    pub percentage: f64,
}

impl SkillPoint {
    pub fn new(label: impl Into<String>, percentage: f64) -> Self {
        Self {
            label: label.into(),
            percentage: clamp_percentage(percentage),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarVertex {
    pub x: f64,
    pub y: f64,
    pub label_x: f64,
    pub label_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridRing {
    pub level: u8,
    pub points: Vec<(f64, f64)>,
}

/// Fixed chart frame the geometry is laid out in (SVG user units).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarLayout {
    pub center: f64,
    pub radius: f64,
    pub label_offset: f64,
}

impl Default for RadarLayout {
    fn default() -> Self {
        Self {
            center: 150.0,
            radius: 100.0,
            label_offset: 30.0,
        }
    }
}

fn clamp_percentage(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 100.0)
    }
}

/// Angle of axis `index` out of `count`, starting at 12 o'clock and moving clockwise
/// in screen coordinates. Callers must guarantee `count > 0`.
fn axis_angle(index: usize, count: usize) -> f64 {
    index as f64 * (TAU / count as f64) - FRAC_PI_2
}

impl RadarLayout {
    /// Size of the square SVG viewport the layout fits in.
    pub fn size(&self) -> f64 {
        self.center * 2.0
    }

    fn polar(&self, angle: f64, distance: f64) -> (f64, f64) {
        (
            self.center + angle.cos() * distance,
            self.center + angle.sin() * distance,
        )
    }

    pub fn vertices(&self, points: &[SkillPoint]) -> Vec<RadarVertex> {
        let count = points.len();
        points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let angle = axis_angle(i, count);
                let (x, y) = self.polar(angle, clamp_percentage(p.percentage) / 100.0 * self.radius);
                let (label_x, label_y) = self.polar(angle, self.radius + self.label_offset);
                RadarVertex {
                    x,
                    y,
                    label_x,
                    label_y,
                }
            })
            .collect()
    }

    /// One ring per entry of [`GRID_LEVELS`]; rings are empty when there are no axes.
    pub fn grid(&self, count: usize) -> Vec<GridRing> {
        GRID_LEVELS
            .iter()
            .map(|&level| GridRing {
                level,
                points: (0..count)
                    .map(|i| self.polar(axis_angle(i, count), f64::from(level) / 100.0 * self.radius))
                    .collect(),
            })
            .collect()
    }

    /// Outer endpoints of the spokes drawn from the center to each axis.
    pub fn spokes(&self, count: usize) -> Vec<(f64, f64)> {
        (0..count)
            .map(|i| self.polar(axis_angle(i, count), self.radius))
            .collect()
    }
}

/// Formats points as an SVG `points` attribute value.
pub fn svg_points<I>(points: I) -> String
where
    I: IntoIterator<Item = (f64, f64)>,
{
    points
        .into_iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_empty_input_has_no_vertices() {
        let layout = RadarLayout::default();
        assert!(layout.vertices(&[]).is_empty());
        assert!(layout.spokes(0).is_empty());

        let grid = layout.grid(0);
        assert_eq!(grid.len(), GRID_LEVELS.len());
        assert!(grid.iter().all(|ring| ring.points.is_empty()));
    }

    #[test]
    fn test_first_point_is_at_top() {
        let layout = RadarLayout::default();
        let v = layout.vertices(&[SkillPoint::new("Rust", 100.0)]);
        assert_eq!(v.len(), 1);
        assert!(close(v[0].x, 150.0));
        assert!(close(v[0].y, 50.0));
        assert!(close(v[0].label_x, 150.0));
        assert!(close(v[0].label_y, 20.0));
    }

    #[test]
    fn test_points_go_clockwise() {
        let layout = RadarLayout::default();
        let points = ["a", "b", "c", "d"]
            .iter()
            .map(|l| SkillPoint::new(*l, 50.0))
            .collect::<Vec<_>>();
        let v = layout.vertices(&points);

        // top, right, bottom, left at half radius
        assert!(close(v[0].x, 150.0) && close(v[0].y, 100.0));
        assert!(close(v[1].x, 200.0) && close(v[1].y, 150.0));
        assert!(close(v[2].x, 150.0) && close(v[2].y, 200.0));
        assert!(close(v[3].x, 100.0) && close(v[3].y, 150.0));
    }

    #[test]
    fn test_zero_percentage_sits_on_center() {
        let layout = RadarLayout::default();
        let v = layout.vertices(&[SkillPoint::new("a", 0.0), SkillPoint::new("b", 0.0)]);
        for vertex in v {
            assert!(close(vertex.x, 150.0));
            assert!(close(vertex.y, 150.0));
        }
    }

    #[test]
    fn test_percentages_are_clamped() {
        assert_eq!(SkillPoint::new("x", 140.0).percentage, 100.0);
        assert_eq!(SkillPoint::new("x", -3.0).percentage, 0.0);
        assert_eq!(SkillPoint::new("x", f64::NAN).percentage, 0.0);

        // fields are public, so the engine clamps again
        let layout = RadarLayout::default();
        let raw = SkillPoint {
            label: "x".to_string(),
            percentage: 250.0,
        };
        let v = layout.vertices(&[raw]);
        assert!(close(v[0].y, 50.0));
    }

    #[test]
    fn test_grid_rings_share_axes() {
        let layout = RadarLayout::default();
        let grid = layout.grid(3);
        let spokes = layout.spokes(3);

        let outer = grid.last().expect("there should be an outer ring");
        assert_eq!(outer.level, 100);
        assert_eq!(outer.points.len(), 3);
        for (ring_point, spoke) in outer.points.iter().zip(spokes.iter()) {
            assert!(close(ring_point.0, spoke.0));
            assert!(close(ring_point.1, spoke.1));
        }

        let inner = &grid[0];
        assert_eq!(inner.level, 20);
        assert!(close(inner.points[0].1, 130.0));
    }

    #[test]
    fn test_label_distance() {
        let layout = RadarLayout {
            center: 0.0,
            radius: 10.0,
            label_offset: 5.0,
        };
        let points = (0..7)
            .map(|i| SkillPoint::new(i.to_string(), 30.0))
            .collect::<Vec<_>>();
        for v in layout.vertices(&points) {
            let dist = (v.label_x * v.label_x + v.label_y * v.label_y).sqrt();
            assert!(close(dist, 15.0));
            let dist = (v.x * v.x + v.y * v.y).sqrt();
            assert!(close(dist, 3.0));
        }
    }

    #[test]
    fn test_svg_points_format() {
        assert_eq!(svg_points(Vec::new()), "");
        assert_eq!(
            svg_points(vec![(1.0, 2.5), (150.0, 50.0)]),
            "1.00,2.50 150.00,50.00"
        );
    }
}
