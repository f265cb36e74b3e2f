use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colorkit::{
    ColorSampler, ColorSet, ColorValue, ConversionCoordinator, Encoding, Field, ImagePixelSampler,
    Language, Preferences, Theme,
};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "colorkit",
    about = "Convert colors between RGB, HEX, HSL and CMYK",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one color to all four encodings
    Convert {
        /// Source encoding (rgb, hex, hsl, cmyk)
        encoding: Encoding,

        /// Color value, e.g. "255,0,0", "ff0000", "120,100,50", "0,100,100,0"
        value: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Generate a random color
    Random {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Replay field edits (e.g. "r=25" "hex=0f0") against a color
    Edit {
        /// Encoding of the starting value
        #[arg(long, requires = "value")]
        from: Option<Encoding>,

        /// Starting value (defaults to red)
        #[arg(long, requires = "from")]
        value: Option<String>,

        /// Edits as FIELD=TEXT, applied in order
        #[arg(required = true)]
        edits: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Sample one pixel of an image
    Sample {
        /// Input PNG or JPEG file
        input: PathBuf,

        /// Pixel column
        #[arg(short, long, default_value = "0")]
        x: u32,

        /// Pixel row
        #[arg(short, long, default_value = "0")]
        y: u32,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show or update stored preferences
    Prefs {
        /// Preferences file
        #[arg(short, long, default_value = "colorkit-prefs.json")]
        file: PathBuf,

        /// Set the theme (light, dark, system)
        #[arg(long, conflicts_with = "toggle_theme")]
        theme: Option<Theme>,

        /// Flip between light and dark
        #[arg(long)]
        toggle_theme: bool,

        /// Set the language (en, es)
        #[arg(long)]
        language: Option<Language>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorkit=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            encoding,
            value,
            json,
        } => {
            let value = ColorValue::parse(encoding, &value)
                .with_context(|| format!("Invalid {encoding} color '{value}'"))?;
            let colors = colorkit::convert(value)?;
            print_colors(&colors, json)?;
        }

        Commands::Random { json } => {
            print_colors(&colorkit::randomize(), json)?;
        }

        Commands::Edit {
            from,
            value,
            edits,
            json,
        } => {
            let mut coordinator = match (from, value) {
                (Some(encoding), Some(value)) => {
                    let value = ColorValue::parse(encoding, &value)
                        .with_context(|| format!("Invalid {encoding} color '{value}'"))?;
                    ConversionCoordinator::from_value(value)?
                }
                _ => ConversionCoordinator::new(),
            };

            for edit in &edits {
                let (field, raw) = edit
                    .split_once('=')
                    .with_context(|| format!("Edit '{edit}' must look like FIELD=TEXT"))?;
                let field: Field = field.parse()?;
                debug!(%field, raw, "applying edit");

                match coordinator.set_field(field, raw) {
                    Ok(_) => eprintln!("✓ {field}={raw:?} accepted"),
                    Err(e) => eprintln!("✗ {field}={raw:?} rejected: {e}"),
                }
            }

            if !json {
                println!("Authoritative: {}", coordinator.authoritative());
            }
            print_colors(coordinator.colors(), json)?;
        }

        Commands::Sample { input, x, y, json } => {
            let mut sampler = ImagePixelSampler::open(&input)
                .with_context(|| format!("Failed to load image {}", input.display()))?
                .at(x, y);
            let sampled = sampler.sample()?;

            let mut coordinator = ConversionCoordinator::new();
            let colors = coordinator.apply_sample(&sampled)?;
            print_colors(colors, json)?;
        }

        Commands::Prefs {
            file,
            theme,
            toggle_theme,
            language,
        } => {
            let mut prefs = Preferences::load(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let changed = theme.is_some() || toggle_theme || language.is_some();

            if let Some(theme) = theme {
                prefs.theme = theme;
            }
            if toggle_theme {
                prefs.toggle_theme();
            }
            if let Some(language) = language {
                prefs.language = language;
            }

            if changed {
                prefs
                    .save(&file)
                    .with_context(|| format!("Failed to write {}", file.display()))?;
            }

            println!("Theme: {}", prefs.theme);
            println!("Language: {}", prefs.language);
        }
    }

    Ok(())
}

fn print_colors(colors: &ColorSet, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(colors)?);
        return Ok(());
    }

    for encoding in Encoding::ALL {
        let label = encoding.as_str().to_uppercase();
        println!("{label:<5}{}", colors.value(encoding));
    }
    Ok(())
}
