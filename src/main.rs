use std::path::PathBuf;

use anyhow::{Context as _, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::{Builder, Env, WriteStyle};
use log::info;
use owo_colors::{OwoColorize, Stream};
use zerostyle::{
    Config, Style, StyleError, cleanup_style_conflicts, detect_existing_style, suggest_style,
    validate_no_style_conflicts,
};

#[derive(Parser)]
#[command(
    name = "zerostyle",
    version,
    about = "Resolve go_zero / gozero file naming conflicts"
)]
struct Cli {
    #[arg(long, default_value_t = ColorOutput::Auto)]
    color: ColorOutput,

    #[arg(long)]
    quiet: bool,

    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Root of the generated project.
    #[arg(short, long, default_value = ".")]
    project: PathBuf,

    #[command(subcommand)]
    command: SubCommand,
}

#[derive(Subcommand)]
enum SubCommand {
    /// Delete the file of each conflicting pair that doesn't match the style.
    Cleanup(CleanupArgs),
    /// Print the style the project already uses.
    Detect,
    /// Print the detected style, or the default if it can't be detected.
    Suggest(SuggestArgs),
    /// Fail if any directory still contains both files of a pair.
    Validate,
    /// Print a sample config file.
    SampleConfig,
    /// Validate the supplied config.
    ValidateConfig,
}

#[derive(Parser)]
struct CleanupArgs {
    /// Style to keep. Defaults to the suggested style.
    #[arg(long)]
    style: Option<Style>,
}

#[derive(Parser)]
struct SuggestArgs {
    /// Fallback style. Defaults to `default_style` from the config.
    #[arg(long)]
    default: Option<Style>,
}

#[derive(ValueEnum, Clone, Copy)]
enum ColorOutput {
    Auto,
    Always,
    Never,
}

impl std::fmt::Display for ColorOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorOutput::Auto => write!(f, "auto"),
            ColorOutput::Always => write!(f, "always"),
            ColorOutput::Never => write!(f, "never"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    let env = Env::new()
        .filter_or("ZEROSTYLE_LOG", default_level)
        .write_style("ZEROSTYLE_LOG_STYLE");
    let mut builder = Builder::from_env(env);
    builder.format_timestamp(None).format_target(false);

    // Auto leaves colour to the terminal check (and ZEROSTYLE_LOG_STYLE).
    match cli.color {
        ColorOutput::Auto => {}
        ColorOutput::Always => {
            owo_colors::set_override(true);
            builder.write_style(WriteStyle::Always);
        }
        ColorOutput::Never => {
            owo_colors::set_override(false);
            builder.write_style(WriteStyle::Never);
        }
    }
    builder.init();

    match &cli.command {
        SubCommand::Cleanup(args) => subcommand_cleanup(&cli, args),
        SubCommand::Detect => subcommand_detect(&cli),
        SubCommand::Suggest(args) => subcommand_suggest(&cli, args),
        SubCommand::Validate => subcommand_validate(&cli),
        SubCommand::SampleConfig => subcommand_sample_config(&cli),
        SubCommand::ValidateConfig => subcommand_validate_config(&cli),
    }
}

fn read_config(cli: &Cli) -> Result<Config> {
    Ok(Config::find(&cli.project, cli.config.as_deref())?)
}

fn subcommand_cleanup(cli: &Cli, args: &CleanupArgs) -> Result<()> {
    let config = read_config(cli)?;
    let style = args.style.unwrap_or_else(|| {
        suggest_style(
            &cli.project,
            &config.conflicts,
            &config.convention_dirs,
            config.default_style,
        )
    });
    info!(
        "Keeping {} style files",
        style.if_supports_color(Stream::Stderr, |s| s.blue())
    );

    let removed = cleanup_style_conflicts(&cli.project, style, &config.conflicts)
        .with_context(|| format!("cleaning up {}", cli.project.display()))?;
    info!("Removed {} conflicting file(s)", removed.len());

    check_conflicts(cli, &config)
}

fn subcommand_detect(cli: &Cli) -> Result<()> {
    let config = read_config(cli)?;
    match detect_existing_style(&cli.project, &config.conflicts, &config.convention_dirs) {
        Some(style) => println!("{style}"),
        None => println!("unknown"),
    }
    Ok(())
}

fn subcommand_suggest(cli: &Cli, args: &SuggestArgs) -> Result<()> {
    let config = read_config(cli)?;
    let style = suggest_style(
        &cli.project,
        &config.conflicts,
        &config.convention_dirs,
        args.default.unwrap_or(config.default_style),
    );
    println!("{style}");
    Ok(())
}

fn subcommand_validate(cli: &Cli) -> Result<()> {
    let config = read_config(cli)?;
    check_conflicts(cli, &config)
}

fn check_conflicts(cli: &Cli, config: &Config) -> Result<()> {
    match validate_no_style_conflicts(&cli.project, &config.conflicts) {
        Ok(()) => {
            eprintln!(
                "Style conflicts {}",
                "none".if_supports_color(Stream::Stderr, |s| s.green())
            );
            Ok(())
        }
        Err(StyleError::Conflicts(conflicts)) => {
            for conflict in &conflicts {
                eprintln!(
                    "{} {conflict}",
                    "Conflict:".if_supports_color(Stream::Stderr, |s| s.red())
                );
            }
            bail!("{} style conflict(s) found", conflicts.len());
        }
        Err(err) => Err(err.into()),
    }
}

fn subcommand_sample_config(_cli: &Cli) -> Result<()> {
    let sample_config = include_str!("../sample_config.json5");
    println!("{}", sample_config);
    Ok(())
}

fn subcommand_validate_config(cli: &Cli) -> Result<()> {
    let _config = read_config(cli)?;
    info!("Config validated");
    Ok(())
}
