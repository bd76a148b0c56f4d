//! Plain CSS output: custom properties on `:root`, element rules that read
//! them, and one media query per breakpoint overriding the sizes.

use crate::error::ExportError;
use crate::format::ExportFormat;
use crate::traits::{ExportOptions, Exporter};
use crate::utils::{describe, em, fmt_num, px};
use std::fmt::Write;
use typeramp_ramp::ComputedRamps;
use typeramp_style::TypographySettings;
use typeramp_types::HeadingLevel;

#[derive(Debug, Clone, Default)]
pub struct CssExporter {
    options: ExportOptions,
}

impl CssExporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    fn var(&self, name: &str) -> String {
        format!("--{}", self.options.qualified(name))
    }

    fn var_ref(&self, name: &str) -> String {
        format!("var({})", self.var(name))
    }

    fn write_root(
        &self,
        out: &mut String,
        settings: &TypographySettings,
        ramps: &ComputedRamps,
    ) -> Result<(), ExportError> {
        let spacing = &settings.spacing;
        let declarations = [
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

        writeln!(out, ":root {{")?;
        for (name, value) in declarations {
            writeln!(out, "  {}: {};", self.var(name), value)?;
        }
        for (level, size) in ramps.sizes.iter() {
            writeln!(out, "  {}: {};", self.var(&format!("font-size-{}", level)), px(*size))?;
        }
        for (level, weight) in ramps.weights.iter() {
            writeln!(out, "  {}: {};", self.var(&format!("font-weight-{}", level)), weight)?;
        }
        writeln!(out, "}}")?;
        Ok(())
    }

    fn write_rule(
        &self,
        out: &mut String,
        selector: &str,
        declarations: &[(&str, String)],
    ) -> Result<(), ExportError> {
        writeln!(out)?;
        writeln!(out, "{} {{", selector)?;
        for (property, value) in declarations {
            writeln!(out, "  {}: {};", property, value)?;
        }
        writeln!(out, "}}")?;
        Ok(())
    }

    fn write_heading(&self, out: &mut String, level: HeadingLevel) -> Result<(), ExportError> {
        self.write_rule(
            out,
            level.tag(),
            &[
                ("font-family", self.var_ref("font-heading")),
                ("font-size", self.var_ref(&format!("font-size-{}", level))),
                ("font-weight", self.var_ref(&format!("font-weight-{}", level))),
                ("line-height", self.var_ref("line-height-heading")),
                ("letter-spacing", self.var_ref("letter-spacing-heading")),
                (
                    "margin",
                    format!(
                        "{} 0 {}",
                        self.var_ref("space-heading-top"),
                        self.var_ref("space-heading-bottom")
                    ),
                ),
            ],
        )
    }

    fn write_breakpoints(&self, out: &mut String, ramps: &ComputedRamps) -> Result<(), ExportError> {
        for bp in &ramps.responsive {
            writeln!(out)?;
            writeln!(out, "/* {}: {} and below */", bp.name, px(bp.max_width))?;
            writeln!(out, "@media (max-width: {}) {{", px(bp.max_width))?;
            writeln!(out, "  :root {{")?;
            writeln!(out, "    {}: {};", self.var("font-size-base"), px(bp.base_size))?;
            for (level, size) in bp.sizes.iter() {
                writeln!(
                    out,
                    "    {}: {};",
                    self.var(&format!("font-size-{}", level)),
                    px(*size)
                )?;
            }
            writeln!(out, "  }}")?;
            writeln!(out, "}}")?;
        }
        Ok(())
    }
}

impl Exporter for CssExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Css
    }

    fn export(
        &self,
        settings: &TypographySettings,
        ramps: &ComputedRamps,
    ) -> Result<String, ExportError> {
        let mut out = String::new();
        if self.options.header {
            writeln!(out, "/* Typography: {} */", describe(settings))?;
        }
        self.write_root(&mut out, settings, ramps)?;

        self.write_rule(
            &mut out,
            "body",
            &[
                ("font-family", self.var_ref("font-body")),
                ("font-size", self.var_ref("font-size-base")),
                ("font-weight", self.var_ref("font-weight-body")),
                ("line-height", self.var_ref("line-height-base")),
                ("letter-spacing", self.var_ref("letter-spacing-body")),
            ],
        )?;
        for level in HeadingLevel::ALL {
            self.write_heading(&mut out, level)?;
        }
        self.write_rule(
            &mut out,
            "p",
            &[("margin", format!("0 0 {}", self.var_ref("space-paragraph")))],
        )?;
        self.write_rule(
            &mut out,
            "code, pre, kbd, samp",
            &[("font-family", self.var_ref("font-code"))],
        )?;
        self.write_breakpoints(&mut out, ramps)?;

        log::debug!("Generated {} bytes of CSS", out.len());
        Ok(out)
    }
}
