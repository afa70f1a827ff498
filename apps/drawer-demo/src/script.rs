//! Timestamped input scripts.

use prismatia_animation::SettleAnimation;
use prismatia_drawer::{DrawerHost, DrawerPhase};
use prismatia_foundation::{KeyCode, KeyEvent, PointerEvent, PointerEventKind};
use prismatia_ui_graphics::Point;

use crate::console::ConsoleSurface;

const MOVE_INTERVAL_MS: f64 = 16.0;
const ANCHOR: Point = Point { x: 180.0, y: 320.0 };

/// One scripted interaction.
#[derive(Clone, Copy, Debug)]
pub enum Step {
    Show,
    SnapTo(usize),
    /// Drag by `dy` over `duration_ms`, wait `hold_ms`, then lift.
    Swipe {
        dy: f32,
        duration_ms: f64,
        hold_ms: f64,
    },
    Key(KeyCode),
}

impl Step {
    pub fn swipe(dy: f32, duration_ms: f64) -> Self {
        Step::Swipe {
            dy,
            duration_ms,
            hold_ms: 0.0,
        }
    }
}

/// Drives a host with a virtual clock.
pub struct Script {
    host: DrawerHost<ConsoleSurface>,
    now_ms: f64,
}

impl Script {
    pub fn new(host: DrawerHost<ConsoleSurface>) -> Self {
        Self { host, now_ms: 0.0 }
    }

    pub fn host(&self) -> &DrawerHost<ConsoleSurface> {
        &self.host
    }

    pub fn run(&mut self, label: &str, step: Step) {
        println!("-- {} --", label);
        match step {
            Step::Show => self.host.show(),
            Step::SnapTo(index) => self.host.snap_to(index),
            Step::Key(key) => {
                self.host.handle_key(&KeyEvent::key_down(key));
            }
            Step::Swipe {
                dy,
                duration_ms,
                hold_ms,
            } => self.swipe(dy, duration_ms, hold_ms),
        }
        self.now_ms += 500.0;
        self.report();
    }

    fn swipe(&mut self, dy: f32, duration_ms: f64, hold_ms: f64) {
        self.pointer(PointerEventKind::Down, ANCHOR);
        let steps = (duration_ms / MOVE_INTERVAL_MS).ceil().max(1.0) as usize;
        for step in 1..=steps {
            self.now_ms += duration_ms / steps as f64;
            let fraction = step as f32 / steps as f32;
            self.pointer(
                PointerEventKind::Move,
                Point::new(ANCHOR.x, ANCHOR.y + dy * fraction),
            );
        }
        self.now_ms += hold_ms;

        let released_at = self.host.drawer().style().live_offset();
        self.pointer(
            PointerEventKind::Up,
            Point::new(ANCHOR.x, ANCHOR.y + dy),
        );
        self.print_settle(released_at);
    }

    fn pointer(&mut self, kind: PointerEventKind, position: Point) {
        let event = PointerEvent::new(kind, position, self.now_ms).with_id(1);
        self.host.handle_pointer(&event, None);
    }

    /// Samples the settle transition a CSS-less renderer would draw.
    fn print_settle(&self, from: f32) {
        let style = *self.host.drawer().style();
        let target = if self.host.drawer().is_open() {
            style.offset_y
        } else {
            self.host.drawer().panel_height()
        };
        let animation =
            SettleAnimation::with_strength(from, target, style.swipe_strength, self.now_ms);
        let duration = animation.spec().total_millis() as f64;
        let frames: Vec<String> = (0..=4)
            .map(|i| {
                let t = self.now_ms + duration * i as f64 / 4.0;
                format!("{:.0}", animation.sample(t))
            })
            .collect();
        println!(
            "   settle {:.0}px -> {:.0}px over {}ms: [{}]",
            from,
            target,
            duration,
            frames.join(", ")
        );
    }

    fn report(&self) {
        let drawer = self.host.drawer();
        let style = drawer.style();
        match drawer.phase() {
            DrawerPhase::Closed => println!("   closed"),
            DrawerPhase::Dragging => println!("   dragging at {:.0}px", style.live_offset()),
            DrawerPhase::Settled(index) => println!(
                "   settled at #{} offset {:.0}px, backdrop {:.2}",
                index, style.offset_y, style.backdrop_opacity
            ),
        }
    }
}
