//! Lay out a cluster of labels on a headless map and print where they land.
//!
//!     RUST_LOG=tooltip_layout=debug cargo run --example cluster --features tracing
//!
//! An optional argument sets how many markers share the cluster centre.

use tooltip_layout::headless::{HeadlessMap, MarkerId};
use tooltip_layout::{LatLng, LayoutConfig, LayoutEngine, MapEvent};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let count = std::env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(8usize);

    let mut map = HeadlessMap::new(800.0, 600.0).with_center(LatLng::new(48.85, 2.35), 6.0);
    let mut markers: Vec<MarkerId> = (0..count)
        .map(|i| map.add_marker(48.85, 2.35, format!("Stop #{i}")))
        .collect();
    markers.push(map.add_marker(49.4, 3.1, "Outlier"));

    let mut engine = LayoutEngine::initialize(map, LayoutConfig::default())?;
    for &m in &markers {
        engine.register_pair(m);
    }

    let report = engine.run_layout_pass()?;
    let built = engine.run_deferred();
    tracing::info!(?report, built, "first pass");
    print_labels(&engine, &markers);

    engine.handle_event(MapEvent::ZoomStart)?;
    engine.host_mut().set_zoom(7.0);
    if let Some(report) = engine.handle_event(MapEvent::ZoomEnd)? {
        let built = engine.run_deferred();
        tracing::info!(?report, built, "after zoom");
    }
    print_labels(&engine, &markers);

    Ok(())
}

fn print_labels(engine: &LayoutEngine<HeadlessMap>, markers: &[MarkerId]) {
    for m in markers {
        let Some((origin, size)) = engine.host().label_box(*m) else {
            continue;
        };
        let text = engine.host().label(*m).map(|l| l.text.as_str()).unwrap_or("?");
        let line = engine.connector_for(m).and_then(|c| engine.host().line(*c));
        match line {
            Some(line) => println!(
                "{text:>10}  at ({}, {})  {}x{}  line ({}, {}) -> ({}, {})",
                origin.x, origin.y, size.w, size.h, line.from.x, line.from.y, line.to.x, line.to.y
            ),
            None => println!("{text:>10}  at ({}, {})  {}x{}  no line", origin.x, origin.y, size.w, size.h),
        }
    }
}
