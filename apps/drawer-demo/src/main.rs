mod console;
mod script;

use anyhow::{ensure, Context, Result};
use prismatia_drawer::attributes::try_parse_snap_points;
use prismatia_drawer::{DrawerHost, DrawerOptions, PanelMetrics};
use prismatia_foundation::KeyCode;

use console::ConsoleSurface;
use script::{Script, Step};

const DEFAULT_SNAP_POINTS: &str = "1, 0.5, 0.25";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let declared = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SNAP_POINTS.to_string());
    let snap_points = try_parse_snap_points(&declared)
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("invalid snap-points {:?}", declared))?;

    println!("=== Prismatia Drawer Demo ===");
    println!("snap points: {}", declared);
    println!("panel 800px in an 800px viewport");
    println!();

    let options = DrawerOptions::new().with_snap_points(snap_points).modal(true);
    let mut host = DrawerHost::new(
        options,
        PanelMetrics::new(800.0, 800.0),
        ConsoleSurface::new(),
    );
    host.attach();
    let last_snap = host.drawer().resolved_snap_points().len().saturating_sub(1);

    let mut script = Script::new(host);
    script.run("show", Step::Show);
    script.run("short slow drag", Step::swipe(40.0, 400.0));
    script.run("jump to last snap", Step::SnapTo(last_snap));
    script.run("upward flick", Step::swipe(-160.0, 80.0));
    script.run(
        "drag and pause",
        Step::Swipe {
            dy: 60.0,
            duration_ms: 60.0,
            hold_ms: 120.0,
        },
    );
    script.run("downward flick", Step::swipe(80.0, 64.0));
    script.run("show again", Step::Show);
    script.run("escape", Step::Key(KeyCode::Escape));

    let applied = script.host().surface().applied();
    ensure!(applied > 0, "no effects reached the surface");
    println!();
    println!("{} effects applied", applied);
    Ok(())
}
