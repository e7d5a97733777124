use clap::{Parser, Subcommand};
use serde::Serialize;
use srcset_sizes::{config, output, plan, sizing};
use std::path::PathBuf;

/// Shared flags for commands that read `sizes.toml`.
#[derive(clap::Args, Clone)]
struct ConfigArgs {
    /// Config file (default: ./sizes.toml, stock defaults if missing)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ConfigArgs {
    fn load(&self) -> Result<config::SizingConfig, config::ConfigError> {
        match &self.config {
            Some(path) => config::load_config_file(path),
            None => config::load_config(std::path::Path::new(".")),
        }
    }
}

#[derive(Parser)]
#[command(name = "srcset-sizes")]
#[command(about = "Responsive image sizes and srcset widths from breakpoints")]
#[command(long_about = "\
Responsive image sizes and srcset widths from breakpoints

Describe an image slot in sizes.toml:

  [breakpoints]        # smallest first
  s = 640
  m = 1024
  l = 1280

  [sizes]              # \"<int>vw\" or \"<int>px\"; missing breakpoints inherit
  s = \"100vw\"
  l = \"50vw\"

  [widths]
  max = 4              # keep at most 4 widths
  interval = 100       # at least 100px apart
  densities = [2.0]    # add 2x variants

then run 'srcset-sizes plan' to get the sizes attribute and the widths to
generate. Run 'srcset-sizes gen-config' for a documented config file.")]
#[command(version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sizes attribute and final widths for a config
    Plan(ConfigArgs),
    /// Sizes attribute strings, largest breakpoint first
    Sizes(ConfigArgs),
    /// Srcset widths before post-processing
    Srcset(ConfigArgs),
    /// Keep N widths evenly spread by rank
    Sample {
        /// Number of widths to keep
        #[arg(long)]
        max: usize,
        #[arg(required = true)]
        widths: Vec<u32>,
    },
    /// Drop widths closer than a minimum gap
    Interval {
        /// Minimum gap in pixels (at least 1)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        min: u32,
        #[arg(required = true)]
        widths: Vec<u32>,
    },
    /// Add pixel-density variants
    Retina {
        /// Density multiplier, repeatable (--density 2 --density 3)
        #[arg(long = "density", required = true, value_parser = parse_density)]
        densities: Vec<f64>,
        #[arg(required = true)]
        widths: Vec<u32>,
    },
    /// Print a stock sizes.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Plan(args) => {
            let config = args.load()?;
            let plan = plan::plan(&config)?;
            if cli.json {
                print_json(&plan)?;
            } else {
                output::print_plan(&config, &plan);
            }
        }
        Command::Sizes(args) => {
            let config = args.load()?;
            let sizes = sizing::img_size_strings(&config.sizes, &config.breakpoints)?;
            if cli.json {
                print_json(&sizes)?;
            } else {
                output::print_sizes(&sizes);
            }
        }
        Command::Srcset(args) => {
            let config = args.load()?;
            let widths = sizing::srcset_widths(&config.sizes, &config.breakpoints)?;
            emit_widths(&widths, cli.json)?;
        }
        Command::Sample { max, widths } => {
            let widths = sizing::sample_widths(&widths, max)?;
            emit_widths(&widths, cli.json)?;
        }
        Command::Interval { min, widths } => {
            let widths = sizing::widths_with_interval(&widths, min);
            emit_widths(&widths, cli.json)?;
        }
        Command::Retina { densities, widths } => {
            let widths = sizing::retina_widths(&widths, &densities);
            emit_widths(&widths, cli.json)?;
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn emit_widths(widths: &[u32], json: bool) -> Result<(), serde_json::Error> {
    if json {
        print_json(&widths)
    } else {
        output::print_widths(widths);
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Densities must be positive, finite numbers.
fn parse_density(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("'{s}' must be greater than 0"))
    }
}
