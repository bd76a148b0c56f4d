use serde_json::{json, Value};

/// Minor-third modular scale on a 16px base.
pub fn minor_third() -> Value {
    json!({ "scaleRatio": "minor-third" })
}

/// Linear sizes and weights with serif headings.
pub fn editorial() -> Value {
    json!({
        "baseSize": "18px",
        "scaleMethod": "linear",
        "linearMin": 18,
        "linearMax": "3rem",
        "weightMethod": "linear",
        "weightMin": "regular",
        "weightMax": "black",
        "fonts": {
            "heading": "'Playfair Display', Georgia, serif",
            "body": { "family": "Source Serif 4", "fallback": "Georgia, serif" }
        },
        "spacing": { "headingLetterSpacing": 0 }
    })
}

/// Hand-picked sizes and weights with the breakpoints switched off.
pub fn custom_static() -> Value {
    json!({
        "scaleMethod": "custom",
        "customSizes": [48, "36px", "1.75rem", 22, 18, 16],
        "weightMethod": "custom",
        "customWeights": ["black", 800, 700, 600, 500, "medium"],
        "responsive": { "enabled": false }
    })
}

/// A document whose every range check fails at least once.
pub fn out_of_range() -> Value {
    json!({
        "baseSize": 0,
        "scaleRatio": 0.75,
        "baseLineHeight": -1,
        "fonts": { "body": { "family": "" } },
        "responsive": {
            "tablet": { "maxWidth": 600, "scale": 0.9 },
            "mobile": { "maxWidth": 800, "scale": 1.4 }
        }
    })
}
