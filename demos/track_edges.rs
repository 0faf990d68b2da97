//! Builds a filleted track centerline and derives its two edges.
//!
//! Usage:
//! ```text
//! cargo run --example track_edges              # default half width 4.0
//! cargo run --example track_edges -- 6.5       # custom half width
//! RUST_LOG=centerline=trace cargo run --example track_edges
//! ```

use centerline::{CenterLine, PathCurve, Point2};

fn main() -> centerline::Result<()> {
    // Default: WARN for everything, DEBUG for centerline.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("centerline=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let half_width = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<f64>().ok())
        .unwrap_or(4.0);

    let points = [
        Point2::new(0.0, 0.0),
        Point2::new(120.0, 0.0),
        Point2::new(160.0, 60.0),
        Point2::new(80.0, 110.0),
        Point2::new(-20.0, 70.0),
    ];
    let center = CenterLine::from_points(&points, 20.0)?;
    let outer = center.offset(half_width)?;
    let inner = center.offset(-half_width)?;

    for (name, path) in [("center", &center), ("outer", &outer), ("inner", &inner)] {
        println!(
            "{name:>6}: {} segments, length {:.3}, {} tessellated points",
            path.segment_count(),
            path.length(),
            path.tessellate().len()
        );
    }

    let step = center.length() / 8.0;
    for i in 0..=8 {
        let (p, t) = center.sample_at((f64::from(i) * step).min(center.length()))?;
        println!("  s = {:8.3}  p = ({:8.3}, {:8.3})  t = ({:6.3}, {:6.3})", f64::from(i) * step, p.x, p.y, t.x, t.y);
    }
    Ok(())
}
