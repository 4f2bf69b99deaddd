use serde::{Deserialize, Serialize};

/// One drawing instruction of a pixel-space path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CubicTo {
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    },
}

impl PathCommand {
    /// End point of the command.
    #[must_use]
    pub fn end(self) -> (f64, f64) {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } | Self::CubicTo { x, y, .. } => (x, y),
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => x.is_finite() && y.is_finite(),
            Self::CubicTo {
                c1x,
                c1y,
                c2x,
                c2y,
                x,
                y,
            } => [c1x, c1y, c2x, c2y, x, y].iter().all(|v| v.is_finite()),
        }
    }
}

/// Smooth path through `points` (ascending x) using monotone cubic
/// interpolation in x (Steffen/Fritsch-Carlson tangents).
///
/// The curve never overshoots between two consecutive points: every segment
/// stays within the y-range of its end points. Two points yield a straight
/// line, a single point only a `MoveTo`. Consecutive coincident points are
/// skipped.
#[must_use]
pub fn monotone_x_path(points: &[(f64, f64)]) -> Vec<PathCommand> {
    let mut unique: Vec<(f64, f64)> = Vec::with_capacity(points.len());
    for &point in points {
        if unique.last() != Some(&point) {
            unique.push(point);
        }
    }

    let Some(&(x0, y0)) = unique.first() else {
        return Vec::new();
    };
    let mut commands = Vec::with_capacity(unique.len());
    commands.push(PathCommand::MoveTo { x: x0, y: y0 });

    match unique.len() {
        1 => return commands,
        2 => {
            let (x, y) = unique[1];
            commands.push(PathCommand::LineTo { x, y });
            return commands;
        }
        _ => {}
    }

    let n = unique.len();
    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        tangents[i] = interior_tangent(unique[i - 1], unique[i], unique[i + 1]);
    }
    tangents[0] = endpoint_tangent(unique[0], unique[1], tangents[1]);
    tangents[n - 1] = endpoint_tangent(unique[n - 2], unique[n - 1], tangents[n - 2]);

    for i in 0..n - 1 {
        commands.push(hermite_segment(
            unique[i],
            unique[i + 1],
            tangents[i],
            tangents[i + 1],
        ));
    }
    commands
}

fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

fn interior_tangent(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    if h0 == 0.0 || h1 == 0.0 || h0 + h1 == 0.0 {
        return 0.0;
    }
    let s0 = (p1.1 - p0.1) / h0;
    let s1 = (p2.1 - p1.1) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let tangent = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if tangent.is_finite() { tangent } else { 0.0 }
}

/// One-sided tangent at a path end from the neighbouring interior tangent.
fn endpoint_tangent(a: (f64, f64), b: (f64, f64), neighbour: f64) -> f64 {
    let h = b.0 - a.0;
    if h == 0.0 {
        return neighbour;
    }
    (3.0 * (b.1 - a.1) / h - neighbour) / 2.0
}

fn hermite_segment(a: (f64, f64), b: (f64, f64), t0: f64, t1: f64) -> PathCommand {
    let dx = (b.0 - a.0) / 3.0;
    PathCommand::CubicTo {
        c1x: a.0 + dx,
        c1y: a.1 + dx * t0,
        c2x: b.0 - dx,
        c2y: b.1 - dx * t1,
        x: b.0,
        y: b.1,
    }
}
