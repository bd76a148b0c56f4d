//! SCSS output: variables, `$font-sizes`/`$font-weights`/`$breakpoints`
//! maps, a `respond-to` mixin, and heading rules generated with `@each`.

use crate::error::ExportError;
use crate::format::ExportFormat;
use crate::traits::{ExportOptions, Exporter};
use crate::utils::{describe, em, fmt_num, px};
use itertools::Itertools;
use std::fmt::Write;
use typeramp_ramp::ComputedRamps;
use typeramp_style::TypographySettings;

#[derive(Debug, Clone, Default)]
pub struct ScssExporter {
    options: ExportOptions,
}

impl ScssExporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    fn var(&self, name: &str) -> String {
        format!("${}", self.options.qualified(name))
    }

    fn mixin(&self) -> String {
        self.options.qualified("respond-to")
    }

    fn write_map<'a>(
        &self,
        out: &mut String,
        name: &str,
        entries: impl Iterator<Item = (&'a str, String)>,
    ) -> Result<(), ExportError> {
        let body = entries
            .map(|(key, value)| format!("  {}: {}", key, value))
            .join(",\n");
        writeln!(out)?;
        writeln!(out, "{}: (\n{}\n);", self.var(name), body)?;
        Ok(())
    }
}

impl Exporter for ScssExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Scss
    }

    fn export(
        &self,
        settings: &TypographySettings,
        ramps: &ComputedRamps,
    ) -> Result<String, ExportError> {
        let spacing = &settings.spacing;
        let mut out = String::new();
        if self.options.header {
            writeln!(out, "// Typography: {}", describe(settings))?;
        }

        let variables = [
            ("font-heading", settings.fonts.heading.to_string()),
            ("font-body", settings.fonts.body.to_string()),
            ("font-code", settings.fonts.code.to_string()),
            ("font-size-base", px(ramps.base_size)),
            ("line-height-base", fmt_num(settings.base_line_height)),
            ("line-height-heading", fmt_num(settings.heading_line_height)),
            ("font-weight-body", settings.body_weight.to_string()),
            ("letter-spacing-body", em(spacing.letter_spacing)),
            ("letter-spacing-heading", em(spacing.heading_letter_spacing)),
            ("space-paragraph", em(spacing.paragraph)),
            ("space-heading-top", em(spacing.heading_top)),
            ("space-heading-bottom", em(spacing.heading_bottom)),
        ];
        for (name, value) in variables {
            writeln!(out, "{}: {};", self.var(name), value)?;
        }

        self.write_map(
            &mut out,
            "font-sizes",
            ramps.sizes.iter().map(|(level, size)| (level.tag(), px(*size))),
        )?;
        self.write_map(
            &mut out,
            "font-weights",
            ramps.weights.iter().map(|(level, weight)| (level.tag(), weight.to_string())),
        )?;

        let responsive = !ramps.responsive.is_empty();
        if responsive {
            self.write_map(
                &mut out,
                "breakpoints",
                ramps.responsive.iter().map(|bp| (bp.name, px(bp.max_width))),
            )?;
            writeln!(out)?;
            writeln!(out, "@mixin {}($name) {{", self.mixin())?;
            writeln!(out, "  @media (max-width: map-get({}, $name)) {{", self.var("breakpoints"))?;
            writeln!(out, "    @content;")?;
            writeln!(out, "  }}")?;
            writeln!(out, "}}")?;
        }

        writeln!(out)?;
        writeln!(out, "body {{")?;
        writeln!(out, "  font-family: {};", self.var("font-body"))?;
        writeln!(out, "  font-size: {};", self.var("font-size-base"))?;
        writeln!(out, "  font-weight: {};", self.var("font-weight-body"))?;
        writeln!(out, "  line-height: {};", self.var("line-height-base"))?;
        writeln!(out, "  letter-spacing: {};", self.var("letter-spacing-body"))?;
        writeln!(out, "}}")?;

        writeln!(out)?;
        writeln!(out, "@each $level, $size in {} {{", self.var("font-sizes"))?;
        writeln!(out, "  #{{$level}} {{")?;
        writeln!(out, "    font-family: {};", self.var("font-heading"))?;
        writeln!(out, "    font-size: $size;")?;
        writeln!(out, "    font-weight: map-get({}, $level);", self.var("font-weights"))?;
        writeln!(out, "    line-height: {};", self.var("line-height-heading"))?;
        writeln!(out, "    letter-spacing: {};", self.var("letter-spacing-heading"))?;
        writeln!(
            out,
            "    margin: {} 0 {};",
            self.var("space-heading-top"),
            self.var("space-heading-bottom")
        )?;
        writeln!(out, "  }}")?;
        writeln!(out, "}}")?;

        writeln!(out)?;
        writeln!(out, "p {{")?;
        writeln!(out, "  margin: 0 0 {};", self.var("space-paragraph"))?;
        writeln!(out, "}}")?;
        writeln!(out)?;
        writeln!(out, "code, pre, kbd, samp {{")?;
        writeln!(out, "  font-family: {};", self.var("font-code"))?;
        writeln!(out, "}}")?;

        for bp in &ramps.responsive {
            writeln!(out)?;
            writeln!(out, "@include {}({}) {{", self.mixin(), bp.name)?;
            writeln!(out, "  body {{ font-size: {}; }}", px(bp.base_size))?;
            for (level, size) in bp.sizes.iter() {
                writeln!(out, "  {} {{ font-size: {}; }}", level, px(*size))?;
            }
            writeln!(out, "}}")?;
        }

        log::debug!("Generated {} bytes of SCSS", out.len());
        Ok(out)
    }
}
