mod common;

use common::fixtures::{custom_static, editorial, minor_third};
use common::{TestResult, init_logger, playground_from_json};
use serde_json::Value;
use typeramp::{ExportFormat, ExportOptions, HeadingLevel, PlaygroundBuilder};

#[test]
fn test_css_export_minor_third() -> TestResult {
    init_logger();
    let playground = playground_from_json(&minor_third())?;
    let css = playground.export(ExportFormat::Css)?;

    for (level, size) in HeadingLevel::ALL.into_iter().zip([33, 28, 23, 19, 16, 13]) {
        assert!(css.contains(&format!("--font-size-{}: {}px;", level, size)));
    }
    assert!(css.contains("@media (max-width: 1024px) {"));
    assert!(css.contains("@media (max-width: 640px) {"));
    Ok(())
}

#[test]
fn test_json_export_parses_back() -> TestResult {
    init_logger();
    let playground = playground_from_json(&minor_third())?;
    let tokens: Value = serde_json::from_str(&playground.export(ExportFormat::Json)?)?;

    assert_eq!(tokens["typography"]["fontSize"]["h4"]["$value"], "19px");
    assert_eq!(tokens["typography"]["fontWeight"]["h6"]["$value"], 700);
    assert!(
        tokens["$description"]
            .as_str()
            .is_some_and(|d| d.contains("ratio 1.2 (minor-third)"))
    );
    Ok(())
}

#[test]
fn test_linear_scale_and_weights() -> TestResult {
    init_logger();
    let playground = playground_from_json(&editorial())?;
    let ramps = playground.computed();
    assert_eq!(ramps.sizes.values(), &[48.0, 42.0, 36.0, 30.0, 24.0, 18.0]);
    assert_eq!(ramps.weights.values(), &[900, 800, 700, 600, 500, 400]);

    let scss = playground.export(ExportFormat::Scss)?;
    assert!(scss.starts_with("// Typography: linear scale from 48px to 18px"));
    assert!(scss.contains("$font-heading: \"Playfair Display\", Georgia, serif;"));
    assert!(scss.contains("$font-body: \"Source Serif 4\", Georgia, serif;"));
    assert!(scss.contains("$letter-spacing-heading: 0;"));
    assert!(scss.contains("  h1: 48px,\n"));
    assert!(scss.contains("  h6: 400\n"));
    assert!(scss.contains("@include respond-to(tablet) {\n  body { font-size: 16px; }\n  h1 { font-size: 43px; }"));
    assert!(scss.contains("@include respond-to(mobile) {\n  body { font-size: 14px; }\n  h1 { font-size: 38px; }"));
    Ok(())
}

#[test]
fn test_custom_ramps_without_breakpoints() -> TestResult {
    init_logger();
    let playground = playground_from_json(&custom_static())?;
    assert_eq!(playground.computed().sizes.values(), &[48.0, 36.0, 28.0, 22.0, 18.0, 16.0]);
    assert_eq!(playground.computed().weights.values(), &[900, 800, 700, 600, 500, 500]);
    assert!(playground.computed().responsive.is_empty());

    let css = playground.export(ExportFormat::Css)?;
    assert!(!css.contains("@media"));
    let scss = playground.export(ExportFormat::Scss)?;
    assert!(!scss.contains("@mixin"));
    assert!(!scss.contains("$breakpoints"));
    let tokens: Value = serde_json::from_str(&playground.export(ExportFormat::Json)?)?;
    assert!(tokens["typography"].get("responsive").is_none());
    Ok(())
}

#[test]
fn test_every_format_carries_every_size() -> TestResult {
    init_logger();
    for fixture in [minor_third(), editorial(), custom_static()] {
        let playground = playground_from_json(&fixture)?;
        for format in ExportFormat::ALL {
            let out = playground.export(format)?;
            for level in HeadingLevel::ALL {
                let size = format!("{}px", playground.computed().size(level));
                assert!(out.contains(&size), "{} export lacks {} for {}", format, size, level);
            }
        }
    }
    Ok(())
}

#[test]
fn test_prefix_and_header_options() -> TestResult {
    init_logger();
    let playground = PlaygroundBuilder::new()
        .with_export_options(ExportOptions::default().with_prefix("Acme Docs").without_header())
        .build()?;

    let css = playground.export(ExportFormat::Css)?;
    assert!(css.starts_with(":root {\n"));
    assert!(css.contains("  --acme-docs-font-size-h1: 39px;\n"));
    assert!(css.contains("font-size: var(--acme-docs-font-size-h1);"));

    let scss = playground.export(ExportFormat::Scss)?;
    assert!(scss.starts_with("$acme-docs-font-heading: Inter, sans-serif;\n"));
    assert!(scss.contains("@mixin acme-docs-respond-to($name) {"));

    let tokens: Value = serde_json::from_str(&playground.export(ExportFormat::Json)?)?;
    assert!(tokens.get("$description").is_none());
    Ok(())
}

#[test]
fn test_code_font_without_fallback_stays_monospace() -> TestResult {
    init_logger();
    let playground = playground_from_json(&serde_json::json!({
        "fonts": { "code": { "family": "Fira Code" }, "heading": "Fraunces" }
    }))?;
    let css = playground.export(ExportFormat::Css)?;
    assert!(css.contains("  --font-code: \"Fira Code\", monospace;\n"));
    assert!(css.contains("  --font-heading: Fraunces, sans-serif;\n"));
    Ok(())
}
