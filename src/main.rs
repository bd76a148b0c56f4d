use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use typeramp::{
    ExportFormat, ExportOptions, FontStack, Length, PlaygroundBuilder, PlaygroundError, PreviewContent,
    ScaleMethod, ScaleRatio, SettingsOverrides, WeightMethod, default_settings_json,
};

/// Compute heading ramps and export them as CSS, SCSS or design tokens.
#[derive(Parser, Debug)]
#[command(name = "typeramp", version, about)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the stylesheet or token document
    Export {
        /// Output format; inferred from --output when omitted
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// Prefix for generated custom properties and variables
        #[arg(long)]
        prefix: Option<String>,

        /// Omit the descriptive header
        #[arg(long)]
        no_header: bool,

        #[command(flatten)]
        input: InputArgs,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the computed size and weight of every level
    Ramp {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Render an HTML page previewing the settings
    Preview {
        /// HTML body to preview instead of the built-in specimen
        #[arg(short, long)]
        content: Option<PathBuf>,

        #[command(flatten)]
        input: InputArgs,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the default settings document
    Defaults,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// JSON settings document
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Body font size, e.g. 16px or 1.125rem
    #[arg(long)]
    base_size: Option<Length>,

    /// Scale ratio as a number, preset name or interval such as 16:20
    #[arg(long)]
    ratio: Option<ScaleRatio>,

    #[arg(long)]
    scale_method: Option<ScaleMethod>,

    #[arg(long)]
    weight_method: Option<WeightMethod>,

    /// Heading font stack, e.g. "'Playfair Display', serif"
    #[arg(long)]
    heading_font: Option<FontStack>,

    /// Body font stack
    #[arg(long)]
    body_font: Option<FontStack>,

    /// Drop the breakpoint overrides
    #[arg(long)]
    no_responsive: bool,
}

impl InputArgs {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            base_size: self.base_size,
            scale_ratio: self.ratio,
            scale_method: self.scale_method,
            weight_method: self.weight_method,
            heading_font: self.heading_font.clone(),
            body_font: self.body_font.clone(),
            disable_responsive: self.no_responsive,
        }
    }

    fn builder(&self) -> Result<PlaygroundBuilder, PlaygroundError> {
        let mut builder = PlaygroundBuilder::new();
        if let Some(path) = &self.settings {
            builder = builder.with_settings_file(path)?;
        }
        Ok(builder.with_overrides(self.overrides()))
    }
}

/// An explicit `--format` wins; otherwise the output extension decides, then CSS.
fn resolve_format(format: Option<ExportFormat>, output: Option<&Path>) -> ExportFormat {
    format
        .or_else(|| {
            output
                .and_then(Path::extension)
                .and_then(|ext| ext.to_str())
                .and_then(ExportFormat::from_extension)
        })
        .unwrap_or_default()
}

fn export_options(prefix: Option<String>, no_header: bool) -> ExportOptions {
    let mut options = ExportOptions::default();
    if let Some(prefix) = prefix {
        options = options.with_prefix(prefix);
    }
    if no_header {
        options = options.without_header();
    }
    options
}

fn write_output(output: Option<&Path>, text: &str) -> Result<(), PlaygroundError> {
    match output {
        Some(path) => {
            fs::write(path, text)?;
            log::info!("Wrote {} bytes to {}", text.len(), path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn main() -> Result<(), PlaygroundError> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Command::Export {
            format,
            prefix,
            no_header,
            input,
            output,
        } => {
            let format = resolve_format(format, output.as_deref());
            let options = export_options(prefix, no_header);
            let playground = input.builder()?.with_export_options(options).build()?;
            log::debug!("Exporting {}", format);
            write_output(output.as_deref(), &playground.export(format)?)
        }
        Command::Ramp { input } => {
            let playground = input.builder()?.build()?;
            write_output(None, &playground.summary()?)
        }
        Command::Preview {
            content,
            input,
            output,
        } => {
            let content = content.map(PreviewContent::from_path).transpose()?;
            let playground = input.builder()?.build()?;
            write_output(output.as_deref(), &playground.preview(content.as_ref())?)
        }
        Command::Defaults => write_output(None, &format!("{}\n", default_settings_json()?)),
    }
}
