//! Synthetic closed sample loops for the fit demo.

use std::f64::consts::TAU;

/// All available shape names.
pub const SHAPES: &[&str] = &["cardioid", "square", "star", "scribble"];

type Samples = (Vec<f64>, Vec<f64>);

/// Generates the named shape's samples. Returns `None` for unknown names.
pub fn generate(name: &str) -> Option<Samples> {
    match name {
        "cardioid" => Some(cardioid()),
        "square" => Some(square()),
        "star" => Some(star(5, 10.0, 4.0)),
        "scribble" => Some(scribble()),
        _ => None,
    }
}

/// Shifted cardioid-like loop sampled every 0.001 rad.
fn cardioid() -> Samples {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut i = 0.0_f64;
    while i < TAU {
        let c = (i / 2.0).cos().powi(2);
        xs.push(20.0 * i.cos() * c + 20.0 + i.sin());
        ys.push(20.0 * i.sin() * c + 20.0);
        i += 0.001;
    }
    (xs, ys)
}

/// Axis-aligned square with unevenly spaced samples along each side.
fn square() -> Samples {
    let corners = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (k, &(x0, y0)) in corners.iter().enumerate() {
        let (x1, y1) = corners[(k + 1) % corners.len()];
        // Denser near the corners.
        for j in 0..20 {
            let s = (1.0 - (std::f64::consts::PI * f64::from(j) / 20.0).cos()) / 2.0;
            xs.push(x0 + (x1 - x0) * s);
            ys.push(y0 + (y1 - y0) * s);
        }
    }
    (xs, ys)
}

/// Star polygon with alternating outer and inner vertices.
fn star(spikes: u32, outer: f64, inner: f64) -> Samples {
    let count = 2 * spikes;
    (0..count)
        .map(|k| {
            let angle = TAU * f64::from(k) / f64::from(count);
            let r = if k % 2 == 0 { outer } else { inner };
            (r * angle.cos(), r * angle.sin())
        })
        .unzip()
}

/// Hand-drawn looking loop with bunched and sparse points.
fn scribble() -> Samples {
    let xs = vec![
        0.0, 0.4, 0.9, 1.1, 1.2, 3.5, 6.0, 6.2, 6.1, 5.0, 3.0, 2.9, 1.0, -0.5, -0.6,
    ];
    let ys = vec![
        0.0, -0.2, -0.3, -0.3, -0.2, -1.0, 0.5, 2.0, 3.5, 4.2, 4.0, 3.9, 3.0, 1.5, 0.6,
    ];
    (xs, ys)
}
