use anyhow::Result;
use chrono::Datelike;
use clap::{Parser, Subcommand};
use resume_forge::exporter::{self, ExportFormat, ExportOutput};
use resume_forge::{composer, store, templates, validate, BlocksBundle, ForgeConfig};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-forge")]
#[command(about = "Compose targeted resumes from reusable data blocks and export them to Markdown or PDF")]
struct Cli {
    /// Override the configs directory (blocks.json + templates/)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List or inspect templates
    Templates {
        #[command(subcommand)]
        command: TemplatesCommand,
    },

    /// Compose a resume and export it to a file
    Build {
        /// Template key
        template: String,
        /// Export format
        #[arg(long, default_value = "pdf")]
        export: ExportFormat,
        /// Output directory
        #[arg(long, default_value = "builds")]
        out: PathBuf,
        /// Optional output filename
        #[arg(long)]
        filename: Option<String>,
    },

    /// Build every template, reporting failures without stopping
    BuildAll {
        /// Export format
        #[arg(long, default_value = "pdf")]
        export: ExportFormat,
        /// Output directory
        #[arg(long, default_value = "builds")]
        out: PathBuf,
    },

    /// Render a resume to stdout
    Preview {
        /// Template key
        template: String,
        /// Export format
        #[arg(long, default_value = "markdown")]
        export: ExportFormat,
    },

    /// Validate data blocks and templates
    Validate,
}

#[derive(Subcommand)]
enum TemplatesCommand {
    /// List available template keys
    List,
    /// Show template details as JSON
    Show {
        /// Template key
        template: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match cli.config_dir {
        Some(dir) => ForgeConfig { configs_dir: dir },
        None => ForgeConfig::default(),
    };

    match cli.command {
        Command::Templates { command } => match command {
            TemplatesCommand::List => cmd_templates_list(&config),
            TemplatesCommand::Show { template } => cmd_templates_show(&config, &template),
        },
        Command::Build {
            template,
            export,
            out,
            filename,
        } => cmd_build(&config, &template, export, &out, filename.as_deref()),
        Command::BuildAll { export, out } => cmd_build_all(&config, export, &out),
        Command::Preview { template, export } => cmd_preview(&config, &template, export),
        Command::Validate => cmd_validate(&config),
    }
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn cmd_templates_list(config: &ForgeConfig) -> Result<()> {
    let names = templates::list_templates(&config.templates_dir())?;
    for name in names {
        println!("{}", name);
    }
    Ok(())
}

fn cmd_templates_show(config: &ForgeConfig, template: &str) -> Result<()> {
    let template = templates::load_template(&config.templates_dir(), template)?;
    println!("{}", serde_json::to_string_pretty(&template)?);
    Ok(())
}

/// Compose one template against an already-loaded bundle and write the
/// export. Shared by `build` and `build-all`.
fn build_one(
    bundle: &BlocksBundle,
    config: &ForgeConfig,
    template_key: &str,
    format: ExportFormat,
    out_dir: &Path,
    filename: Option<&str>,
) -> Result<PathBuf> {
    let template = templates::load_template(&config.templates_dir(), template_key)?;
    let resume = composer::compose(bundle, &template, current_year())?;

    std::fs::create_dir_all(out_dir)?;
    let filename = exporter::output_filename(&template, format, filename);
    let destination = out_dir.join(filename);

    match exporter::export(format, &resume, Some(&destination))? {
        ExportOutput::Written(path) => Ok(path),
        ExportOutput::Inline(_) => Ok(destination),
    }
}

fn cmd_build(
    config: &ForgeConfig,
    template: &str,
    format: ExportFormat,
    out_dir: &Path,
    filename: Option<&str>,
) -> Result<()> {
    let bundle = store::load_bundle(&config.blocks_path())?;
    let path = build_one(&bundle, config, template, format, out_dir, filename)?;
    println!("Created {} at {}", format, path.display());
    Ok(())
}

fn cmd_build_all(config: &ForgeConfig, format: ExportFormat, out_dir: &Path) -> Result<()> {
    let bundle = store::load_bundle(&config.blocks_path())?;
    let keys = templates::list_templates(&config.templates_dir())?;

    eprintln!("Building {} templates...", keys.len());

    let mut built = 0usize;
    for key in &keys {
        match build_one(&bundle, config, key, format, out_dir, None) {
            Ok(path) => {
                built += 1;
                println!("[ok] {} -> {}", key, path.display());
            }
            Err(e) => eprintln!("[failed] {}: {}", key, e),
        }
    }

    eprintln!("\nBuilt {} of {} templates in {}", built, keys.len(), out_dir.display());
    Ok(())
}

fn cmd_preview(config: &ForgeConfig, template: &str, format: ExportFormat) -> Result<()> {
    let bundle = store::load_bundle(&config.blocks_path())?;
    let template = templates::load_template(&config.templates_dir(), template)?;
    let resume = composer::compose(&bundle, &template, current_year())?;

    match exporter::export(format, &resume, None)? {
        ExportOutput::Inline(text) => println!("{}", text),
        ExportOutput::Written(path) => println!("{}", path.display()),
    }
    Ok(())
}

fn cmd_validate(config: &ForgeConfig) -> Result<()> {
    let issues = validate::collect_issues(&config.blocks_path(), &config.templates_dir());

    if issues.is_empty() {
        println!("All blocks and templates look good.");
    } else {
        println!("Validation issues detected:");
        for issue in &issues {
            println!("- {}", issue);
        }
    }
    Ok(())
}
