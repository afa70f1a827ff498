//! Presentation values the drawer drives.

use prismatia_animation::AnimationSpec;

use crate::constants::DEFAULT_SWIPE_STRENGTH;

/// A numeric style value written to the presentation surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    /// Translation of the settled panel, px.
    OffsetY,
    /// Live drag translation added on top of `OffsetY`, px.
    SwipeY,
    /// Scales the settle transition duration.
    SwipeStrength,
    BackdropOpacity,
}

impl StyleProperty {
    pub const ALL: [StyleProperty; 4] = [
        StyleProperty::OffsetY,
        StyleProperty::SwipeY,
        StyleProperty::SwipeStrength,
        StyleProperty::BackdropOpacity,
    ];

    /// CSS custom property name.
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProperty::OffsetY => "--drawer-offset-y",
            StyleProperty::SwipeY => "--drawer-swipe-y",
            StyleProperty::SwipeStrength => "--drawer-swipe-strength",
            StyleProperty::BackdropOpacity => "--drawer-backdrop-opacity",
        }
    }

    /// Whether the value is a length.
    pub fn is_length(self) -> bool {
        matches!(self, StyleProperty::OffsetY | StyleProperty::SwipeY)
    }

    /// CSS text for `value`.
    pub fn format_value(self, value: f32) -> String {
        if self.is_length() {
            format!("{}px", value)
        } else {
            format!("{}", value)
        }
    }
}

/// Current style values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerStyle {
    pub offset_y: f32,
    pub swipe_y: f32,
    pub swipe_strength: f32,
    pub backdrop_opacity: f32,
    /// A drag is in progress; the host disables transitions.
    pub swiping: bool,
}

impl DrawerStyle {
    /// Where the panel is drawn right now.
    pub fn live_offset(&self) -> f32 {
        self.offset_y + self.swipe_y
    }

    /// Transition the panel settles with, or `None` while it follows a drag.
    pub fn panel_transition(&self) -> Option<AnimationSpec> {
        (!self.swiping).then(|| AnimationSpec::settle(self.swipe_strength))
    }

    pub fn get(&self, property: StyleProperty) -> f32 {
        match property {
            StyleProperty::OffsetY => self.offset_y,
            StyleProperty::SwipeY => self.swipe_y,
            StyleProperty::SwipeStrength => self.swipe_strength,
            StyleProperty::BackdropOpacity => self.backdrop_opacity,
        }
    }

    pub(crate) fn set(&mut self, property: StyleProperty, value: f32) {
        match property {
            StyleProperty::OffsetY => self.offset_y = value,
            StyleProperty::SwipeY => self.swipe_y = value,
            StyleProperty::SwipeStrength => self.swipe_strength = value,
            StyleProperty::BackdropOpacity => self.backdrop_opacity = value,
        }
    }
}

impl Default for DrawerStyle {
    fn default() -> Self {
        Self {
            offset_y: 0.0,
            swipe_y: 0.0,
            swipe_strength: DEFAULT_SWIPE_STRENGTH,
            backdrop_opacity: 0.0,
            swiping: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_values() {
        assert_eq!(StyleProperty::OffsetY.format_value(400.0), "400px");
        assert_eq!(StyleProperty::SwipeY.format_value(-12.5), "-12.5px");
        assert_eq!(StyleProperty::SwipeStrength.format_value(0.6), "0.6");
        assert_eq!(StyleProperty::BackdropOpacity.css_name(), "--drawer-backdrop-opacity");
    }

    #[test]
    fn live_offset_adds_swipe() {
        let mut style = DrawerStyle::default();
        style.set(StyleProperty::OffsetY, 400.0);
        style.set(StyleProperty::SwipeY, -30.0);
        assert_eq!(style.live_offset(), 370.0);
        assert_eq!(style.get(StyleProperty::SwipeStrength), 0.6);
    }

    #[test]
    fn panel_transition_follows_strength() {
        let mut style = DrawerStyle::default();
        assert_eq!(
            style.panel_transition().map(|spec| spec.duration_millis),
            Some(210)
        );
        style.set(StyleProperty::SwipeStrength, 0.1);
        assert_eq!(
            style
                .panel_transition()
                .map(|spec| spec.to_css_transition("transform")),
            Some("transform 35ms cubic-bezier(0.32, 0.72, 0, 1)".to_string())
        );
        style.swiping = true;
        assert_eq!(style.panel_transition(), None);
    }
}
