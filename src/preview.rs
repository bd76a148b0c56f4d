// src/preview.rs
//! Standalone HTML preview pages.
//!
//! The page embeds the CSS export in a `<style>` block and renders either
//! caller-supplied HTML or a built-in specimen of every heading level.

use crate::error::PlaygroundError;
use std::fmt::Write;
use std::fs;
use std::path::Path;
use typeramp_export::utils::{fmt_num, px};
use typeramp_export::{CssExporter, ExportOptions, Exporter};
use typeramp_ramp::ComputedRamps;
use typeramp_style::TypographySettings;
use typeramp_types::HeadingLevel;

const SAMPLE_PARAGRAPH: &str = "Typography is the craft of endowing human language with a durable \
visual form. A well-tuned scale gives every heading a clear rank while the body text stays \
comfortable to read at length.";

/// HTML body content for a preview page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewContent {
    html: String,
}

impl PreviewContent {
    pub fn from_html(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Reads an `.html`/`.htm` file. Markdown and other formats are rejected.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PlaygroundError> {
        let path_ref = path.as_ref();
        let extension = path_ref
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();
        match extension.as_str() {
            "html" | "htm" => {
                let html = fs::read_to_string(path_ref)?;
                log::info!("Loaded preview content from {}", path_ref.display());
                Ok(Self { html })
            }
            _ => Err(PlaygroundError::UnsupportedContent(path_ref.display().to_string())),
        }
    }

    pub fn as_html(&self) -> &str {
        &self.html
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// One heading per level annotated with its computed values, followed by
/// body-text samples.
pub fn specimen(settings: &TypographySettings, ramps: &ComputedRamps) -> Result<String, PlaygroundError> {
    let mut html = String::new();
    for level in HeadingLevel::ALL {
        writeln!(
            html,
            "<{tag}>Heading {n} <small>{size} / {weight}</small></{tag}>",
            tag = level.tag(),
            n = level.number(),
            size = px(ramps.size(level)),
            weight = ramps.weight(level),
        )?;
    }
    writeln!(html, "<p>{}</p>", SAMPLE_PARAGRAPH)?;
    writeln!(
        html,
        "<p>Body text is set in {} at {} with a line height of {}.</p>",
        escape_html(&settings.fonts.body.family),
        px(ramps.base_size),
        fmt_num(settings.base_line_height)
    )?;
    writeln!(html, "<ul>")?;
    writeln!(html, "<li>Modular, linear, table and custom size ramps</li>")?;
    writeln!(html, "<li>Uniform, linear and custom weight ramps</li>")?;
    writeln!(html, "</ul>")?;
    writeln!(
        html,
        "<blockquote><p>Whitespace is to be regarded as an active element, not a passive background.</p></blockquote>"
    )?;
    writeln!(
        html,
        "<pre><code>font-family: {};</code></pre>",
        escape_html(&settings.fonts.code.to_string())
    )?;
    Ok(html)
}

/// Renders a complete HTML document previewing `settings`.
///
/// `content` is inserted verbatim; `None` uses [`specimen`].
pub fn render_preview(
    settings: &TypographySettings,
    ramps: &ComputedRamps,
    content: Option<&PreviewContent>,
) -> Result<String, PlaygroundError> {
    let css = CssExporter::new(ExportOptions::default()).export(settings, ramps)?;
    let body = match content {
        Some(content) => content.as_html().to_string(),
        None => specimen(settings, ramps)?,
    };

    let mut page = String::new();
    writeln!(page, "<!DOCTYPE html>")?;
    writeln!(page, "<html lang=\"en\">")?;
    writeln!(page, "<head>")?;
    writeln!(page, "<meta charset=\"utf-8\">")?;
    writeln!(page, "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">")?;
    writeln!(page, "<title>Typography preview</title>")?;
    writeln!(page, "<style>\n{}</style>", css)?;
    writeln!(page, "</head>")?;
    writeln!(page, "<body>\n<main>\n{}</main>\n</body>", body)?;
    writeln!(page, "</html>")?;
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use typeramp_ramp::calculate;

    #[test]
    fn test_specimen_lists_every_level() {
        let settings = TypographySettings::default();
        let ramps = calculate(&settings);
        let html = specimen(&settings, &ramps).unwrap();
        assert!(html.contains("<h1>Heading 1 <small>39px / 700</small></h1>"));
        assert!(html.contains("<h6>Heading 6 <small>13px / 700</small></h6>"));
        assert!(html.contains("font-family: &quot;JetBrains Mono&quot;, monospace;"));
    }

    #[test]
    fn test_render_preview_embeds_css_and_content() {
        let settings = TypographySettings::default();
        let ramps = calculate(&settings);
        let content = PreviewContent::from_html("<h2>Release notes</h2>\n");
        let page = render_preview(&settings, &ramps, Some(&content)).unwrap();

        assert!(page.starts_with("<!DOCTYPE html>\n"));
        assert!(page.contains("<style>\n/* Typography: "));
        assert!(page.contains("--font-size-h2: 31px;"));
        assert!(page.contains("<main>\n<h2>Release notes</h2>\n</main>"));
        assert!(!page.contains("Heading 1"));
    }

    #[test]
    fn test_markdown_content_is_rejected() {
        let file = tempfile::Builder::new().suffix(".md").tempfile().unwrap();
        let err = PreviewContent::from_path(file.path()).unwrap_err();
        assert!(matches!(err, PlaygroundError::UnsupportedContent(_)));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
    }
}
