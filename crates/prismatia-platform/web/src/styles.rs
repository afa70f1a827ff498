//! Stylesheet that positions the drawer from its custom properties.

use prismatia_animation::{AnimationSpec, Easing, SETTLE_BASE_DURATION_MS};
use prismatia_drawer::constants::DEFAULT_SWIPE_STRENGTH;
use prismatia_drawer::StyleProperty;

/// Class on the `<dialog>` that scopes every rule.
pub const DIALOG_CLASS: &str = "drawer-dialog";

/// Class set on the panel while a drag is in progress.
pub const SWIPING_CLASS: &str = "swiping";

/// CSS for the markup [`WebDrawer`](crate::WebDrawer) builds.
///
/// The panel translates by `offset-y + swipe-y` while the dialog is open and
/// sits a full panel height lower while it is closed. Offsets are registered
/// as non-inherited so drag updates do not restyle the panel content; the
/// backdrop opacity has to inherit into `::backdrop`.
pub fn drawer_stylesheet() -> String {
    let offset = StyleProperty::OffsetY.css_name();
    let swipe = StyleProperty::SwipeY.css_name();
    let strength = StyleProperty::SwipeStrength.css_name();
    let backdrop = StyleProperty::BackdropOpacity.css_name();
    let dialog = DIALOG_CLASS;
    let swiping = SWIPING_CLASS;
    let translate = format!("var({offset}, 0px) + var({swipe}, 0px)");
    let settle_curve = Easing::DRAWER.to_css();
    let backdrop_fade = AnimationSpec::backdrop_fade().to_css_transition("opacity");

    format!(
        r#"@property {offset} {{ syntax: "<length>"; inherits: false; initial-value: 0px; }}
@property {swipe} {{ syntax: "<length>"; inherits: false; initial-value: 0px; }}
@property {backdrop} {{ syntax: "<number>"; inherits: true; initial-value: 0; }}

.{dialog} {{
  margin: 0;
  padding: 0;
  border: none;
  background: transparent;
  overflow: visible;
}}

.{dialog}::backdrop {{
  background: rgb(0 0 0 / var({backdrop}, 0));
  opacity: 0;
  transition: {backdrop_fade};
}}

.{dialog}[open]::backdrop {{
  opacity: 1;
}}

@starting-style {{
  .{dialog}[open]::backdrop {{
    opacity: 0;
  }}
}}

.{dialog} .popup {{
  position: fixed;
  inset-block-end: 0;
  inset-inline: 0;
  z-index: 1000;
  display: flex;
  flex-direction: column;
  max-block-size: var(--drawer-max-height, 95vb);
  background: var(--drawer-bg, #fff);
  border-radius: var(--drawer-radius, 12px 12px 0 0);
  box-shadow: var(--drawer-shadow, 0 -4px 24px rgb(0 0 0 / 12%));
  transform: translateY(calc(100% + {translate}));
  transition: transform calc(var({strength}, {default_strength}) * {base_ms}ms) {settle_curve};
  will-change: transform;
}}

.{dialog}[open] .popup {{
  transform: translateY(calc({translate}));
}}

.{dialog} .popup.{swiping} {{
  transition: none !important;
}}

.{dialog} .handle-area {{
  display: flex;
  justify-content: center;
  padding: 12px 0 4px;
  touch-action: none;
  cursor: grab;
  user-select: none;
}}

.{dialog} .handle-area:active {{
  cursor: grabbing;
}}

.{dialog} .handle-bar {{
  inline-size: 36px;
  block-size: 4px;
  background: var(--drawer-handle-color, #d1d5db);
  border-radius: 2px;
}}

.{dialog} .content {{
  flex: 1;
  overflow-y: auto;
  overscroll-behavior-y: contain;
  touch-action: pan-y;
}}
"#,
        default_strength = DEFAULT_SWIPE_STRENGTH,
        base_ms = SETTLE_BASE_DURATION_MS,
    )
}
