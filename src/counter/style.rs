// src/counter/style.rs
// =============================================================================
// The visual knobs of the counter and the style declarations they produce.
//
// We don't render anything ourselves. The host UI asks for resolved style
// maps (CSS property -> value) for each part of the counter:
//
//   container        outer box
//   counter          the row of digit slots
//   digit            one rolling strip (and the decimal point slot)
//   top/bottom       the fade-out gradients over the strips
//
// Raw overrides for container/counter/digit are merged over our defaults.
// A gradient override replaces the default gradient completely.
// =============================================================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// CSS property name -> value
pub type StyleMap = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CounterStyle {
    pub font_size: f64,
    /// Extra height added to each digit row
    pub padding: f64,
    /// Space between slots, in pixels
    pub gap: f64,
    pub border_radius: f64,
    pub horizontal_padding: f64,
    pub text_color: String,
    pub font_weight: String,
    pub gradient_height: f64,
    pub gradient_from: String,
    pub gradient_to: String,
    pub container_style: Option<StyleMap>,
    pub counter_style: Option<StyleMap>,
    pub digit_style: Option<StyleMap>,
    pub top_gradient_style: Option<StyleMap>,
    pub bottom_gradient_style: Option<StyleMap>,
}

impl Default for CounterStyle {
    fn default() -> Self {
        Self {
            font_size: 100.0,
            padding: 0.0,
            gap: 8.0,
            border_radius: 4.0,
            horizontal_padding: 8.0,
            text_color: "white".to_string(),
            font_weight: "bold".to_string(),
            gradient_height: 16.0,
            gradient_from: "black".to_string(),
            gradient_to: "transparent".to_string(),
            container_style: None,
            counter_style: None,
            digit_style: None,
            top_gradient_style: None,
            bottom_gradient_style: None,
        }
    }
}

/// Every resolved style map of a counter, ready to hand to the host UI
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    pub container: StyleMap,
    pub counter: StyleMap,
    pub digit: StyleMap,
    pub decimal: StyleMap,
    pub top_gradient: StyleMap,
    pub bottom_gradient: StyleMap,
}

fn px(value: f64) -> String {
    format!("{}px", value)
}

// Builds a map from pairs, then lays the override on top
fn merged(defaults: &[(&str, String)], overrides: Option<&StyleMap>) -> StyleMap {
    let mut map: StyleMap = defaults
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();

    if let Some(overrides) = overrides {
        map.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    map
}

impl CounterStyle {
    /// Height of one digit row: font size plus padding
    pub fn row_height(&self) -> f64 {
        self.font_size + self.padding
    }

    pub fn resolve(&self) -> ResolvedStyle {
        ResolvedStyle {
            container: self.container(),
            counter: self.counter(),
            digit: self.digit(),
            decimal: self.decimal(),
            top_gradient: self.top_gradient(),
            bottom_gradient: self.bottom_gradient(),
        }
    }

    pub fn container(&self) -> StyleMap {
        merged(
            &[
                ("position", "relative".to_string()),
                ("display", "inline-block".to_string()),
            ],
            self.container_style.as_ref(),
        )
    }

    pub fn counter(&self) -> StyleMap {
        merged(
            &[
                ("font-size", px(self.font_size)),
                ("display", "flex".to_string()),
                ("gap", px(self.gap)),
                ("overflow", "hidden".to_string()),
                ("border-radius", px(self.border_radius)),
                ("padding-left", px(self.horizontal_padding)),
                ("padding-right", px(self.horizontal_padding)),
                ("line-height", "1".to_string()),
                ("color", self.text_color.clone()),
                ("font-weight", self.font_weight.clone()),
            ],
            self.counter_style.as_ref(),
        )
    }

    pub fn digit(&self) -> StyleMap {
        merged(
            &[
                ("height", px(self.row_height())),
                ("position", "relative".to_string()),
                ("width", "1ch".to_string()),
                ("font-variant-numeric", "tabular-nums".to_string()),
            ],
            self.digit_style.as_ref(),
        )
    }

    /// The decimal point slot shares the digit override
    pub fn decimal(&self) -> StyleMap {
        merged(
            &[
                ("height", px(self.row_height())),
                ("width", "fit-content".to_string()),
            ],
            self.digit_style.as_ref(),
        )
    }

    pub fn top_gradient(&self) -> StyleMap {
        match &self.top_gradient_style {
            Some(style) => style.clone(),
            None => self.gradient("to bottom"),
        }
    }

    pub fn bottom_gradient(&self) -> StyleMap {
        match &self.bottom_gradient_style {
            Some(style) => style.clone(),
            None => self.gradient("to top"),
        }
    }

    fn gradient(&self, direction: &str) -> StyleMap {
        merged(
            &[
                ("height", px(self.gradient_height)),
                (
                    "background",
                    format!(
                        "linear-gradient({}, {}, {})",
                        direction, self.gradient_from, self.gradient_to
                    ),
                ),
            ],
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> StyleMap {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_row_height() {
        let style = CounterStyle { font_size: 80.0, padding: 6.0, ..Default::default() };
        assert_eq!(style.row_height(), 86.0);
        assert_eq!(style.digit()["height"], "86px");
    }

    #[test]
    fn test_counter_defaults() {
        let counter = CounterStyle::default().counter();
        assert_eq!(counter["font-size"], "100px");
        assert_eq!(counter["gap"], "8px");
        assert_eq!(counter["color"], "white");
        assert_eq!(counter["font-weight"], "bold");
    }

    #[test]
    fn test_overrides_merge_over_defaults() {
        let style = CounterStyle {
            counter_style: Some(map(&[("color", "red"), ("letter-spacing", "2px")])),
            ..Default::default()
        };
        let counter = style.counter();
        assert_eq!(counter["color"], "red");
        assert_eq!(counter["letter-spacing"], "2px");
        assert_eq!(counter["display"], "flex");
    }

    #[test]
    fn test_gradient_override_replaces_default() {
        let style = CounterStyle {
            top_gradient_style: Some(map(&[("opacity", "0")])),
            ..Default::default()
        };
        assert_eq!(style.top_gradient(), map(&[("opacity", "0")]));
        assert_eq!(
            style.bottom_gradient()["background"],
            "linear-gradient(to top, black, transparent)"
        );
    }

    #[test]
    fn test_resolve_collects_every_part() {
        let style = CounterStyle {
            digit_style: Some(map(&[("color", "gold")])),
            ..Default::default()
        };
        let resolved = style.resolve();
        assert_eq!(resolved.container["display"], "inline-block");
        assert_eq!(resolved.digit["color"], "gold");
        // The decimal slot shares the digit override
        assert_eq!(resolved.decimal["color"], "gold");
        assert_eq!(resolved.decimal["width"], "fit-content");
        assert_eq!(
            resolved.top_gradient["background"],
            "linear-gradient(to bottom, black, transparent)"
        );

        let json = serde_json::to_value(&resolved).unwrap();
        assert_eq!(json["bottomGradient"]["height"], "16px");
    }

    #[test]
    fn test_deserialize_partial_json() {
        let style: CounterStyle = serde_json::from_str(r#"{ "fontSize": 80, "gap": 10 }"#).unwrap();
        assert_eq!(style.font_size, 80.0);
        assert_eq!(style.gap, 10.0);
        assert_eq!(style.border_radius, 4.0);
    }
}
