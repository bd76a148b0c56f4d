//! Design-token JSON output.
//!
//! Every leaf is a `{"$value", "$type"}` pair, grouped under a single
//! `typography` root. Keys keep insertion order.

use crate::error::ExportError;
use crate::format::ExportFormat;
use crate::traits::{ExportOptions, Exporter};
use crate::utils::{describe, em, fmt_num, px};
use serde_json::{json, Map, Number, Value};
use typeramp_ramp::ComputedRamps;
use typeramp_style::{FontStack, TypographySettings};
use typeramp_types::Ramp;

#[derive(Debug, Clone, Default)]
pub struct TokensExporter {
    options: ExportOptions,
}

fn token(value: Value, kind: &str) -> Value {
    json!({ "$value": value, "$type": kind })
}

/// A JSON number carrying the same digits the text exporters print.
fn number(value: f32) -> Value {
    fmt_num(value)
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

fn dimension(text: String) -> Value {
    token(Value::String(text), "dimension")
}

fn font_family(stack: &FontStack) -> Value {
    let mut names = vec![Value::String(stack.family.clone())];
    names.extend(stack.fallbacks().into_iter().map(|f| Value::String(f.to_string())));
    token(Value::Array(names), "fontFamily")
}

fn size_group(base_size: f32, sizes: &Ramp<f32>) -> Value {
    let mut group = Map::new();
    group.insert("base".to_string(), dimension(px(base_size)));
    for (level, size) in sizes.iter() {
        group.insert(level.tag().to_string(), dimension(px(*size)));
    }
    Value::Object(group)
}

impl TokensExporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Builds the token tree without serializing it.
    pub fn tokens(&self, settings: &TypographySettings, ramps: &ComputedRamps) -> Value {
        let spacing = &settings.spacing;

        let mut weights = Map::new();
        weights.insert(
            "body".to_string(),
            token(json!(settings.body_weight.numeric_value()), "fontWeight"),
        );
        for (level, weight) in ramps.weights.iter() {
            weights.insert(level.tag().to_string(), token(json!(weight), "fontWeight"));
        }

        let mut typography = Map::new();
        typography.insert(
            "fontFamily".to_string(),
            json!({
                "heading": font_family(&settings.fonts.heading),
                "body": font_family(&settings.fonts.body),
                "code": font_family(&settings.fonts.code),
            }),
        );
        typography.insert("fontSize".to_string(), size_group(ramps.base_size, &ramps.sizes));
        typography.insert("fontWeight".to_string(), Value::Object(weights));
        typography.insert(
            "lineHeight".to_string(),
            json!({
                "base": token(number(settings.base_line_height), "number"),
                "heading": token(number(settings.heading_line_height), "number"),
            }),
        );
        typography.insert(
            "letterSpacing".to_string(),
            json!({
                "body": dimension(em(spacing.letter_spacing)),
                "heading": dimension(em(spacing.heading_letter_spacing)),
            }),
        );
        typography.insert(
            "spacing".to_string(),
            json!({
                "paragraph": dimension(em(spacing.paragraph)),
                "headingTop": dimension(em(spacing.heading_top)),
                "headingBottom": dimension(em(spacing.heading_bottom)),
            }),
        );

        if !ramps.responsive.is_empty() {
            let mut breakpoints = Map::new();
            let mut responsive = Map::new();
            for bp in &ramps.responsive {
                breakpoints.insert(bp.name.to_string(), dimension(px(bp.max_width)));
                responsive.insert(
                    bp.name.to_string(),
                    json!({
                        "scale": token(number(bp.scale), "number"),
                        "fontSize": size_group(bp.base_size, &bp.sizes),
                    }),
                );
            }
            typography.insert("breakpoints".to_string(), Value::Object(breakpoints));
            typography.insert("responsive".to_string(), Value::Object(responsive));
        }

        let mut root = Map::new();
        if self.options.header {
            root.insert("$description".to_string(), Value::String(describe(settings)));
        }
        root.insert("typography".to_string(), Value::Object(typography));
        Value::Object(root)
    }
}

impl Exporter for TokensExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn export(
        &self,
        settings: &TypographySettings,
        ramps: &ComputedRamps,
    ) -> Result<String, ExportError> {
        let mut out = serde_json::to_string_pretty(&self.tokens(settings, ramps))?;
        out.push('\n');
        log::debug!("Generated {} bytes of token JSON", out.len());
        Ok(out)
    }
}
