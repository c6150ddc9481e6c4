use clap::Parser;
use clap::error::ErrorKind;
use generate_icons::{config, generate, manifest, output};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "generate-icons")]
#[command(about = "Generate iOS app icons from one source image")]
#[command(long_about = "\
Generate iOS app icons from one source image

Resizes the source to every size an AppIcon.appiconset needs and writes the
matching Contents.json:

  AppIcon.appiconset/
  ├── icon-20x20@2x.png      40x40
  ├── icon-20x20@3x.png      60x60
  ├── icon-29x29@2x.png      58x58
  ├── icon-29x29@3x.png      87x87
  ├── icon-40x40@2x.png      80x80
  ├── icon-40x40@3x.png      120x120
  ├── icon-60x60@2x.png      120x120
  ├── icon-60x60@3x.png      180x180
  ├── icon-1024.png          1024x1024 (App Store)
  └── Contents.json

Contents.json is only written when all nine icons were generated.")]
#[command(after_help = output::usage_tips())]
#[command(version)]
struct Cli {
    /// Source image (ideally a 1024x1024 PNG with transparency)
    #[arg(value_name = "SOURCE", required_unless_present = "print_config")]
    source: Option<PathBuf>,

    /// Asset catalog directory (overrides the config file)
    #[arg(long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print a stock config file with all options documented
    #[arg(long)]
    print_config: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not errors
            if !e.use_stderr() {
                let _ = e.print();
                return ExitCode::SUCCESS;
            }
            let _ = e.print();
            if e.kind() == ErrorKind::MissingRequiredArgument {
                eprintln!("\n{}", output::usage_tips());
            }
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when at least one icon failed.
fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    if cli.print_config {
        print!("{}", config::stock_config_toml());
        return Ok(true);
    }

    let source = cli.source.ok_or("missing source image")?;
    let icon_config =
        config::load_config(cli.config.as_deref())?.with_output_dir(cli.output.as_deref());
    icon_config.validate()?;
    let options = icon_config.generate_options();

    output::print_header(&source, &options.output_dir);
    let report = generate::generate(&source, &options, output::print_generate_event)?;
    output::print_report(&report);

    if !report.is_complete() {
        eprintln!("\nSome icons could not be generated. Check the errors above and re-run.");
        return Ok(false);
    }

    manifest::write_manifest(&options.output_dir)?;
    output::print_manifest_written();
    output::print_success();
    Ok(true)
}
