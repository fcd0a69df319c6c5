use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use logoforge::{
    Canvas, GeminiSynthesizer, LogoDocument, Studio, Variant, VariationSynthesizer as _,
    write_png, write_svg,
};

#[derive(Parser, Debug)]
#[command(name = "logoforge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export the logo as SVG and/or PNG files.
    Render(RenderArgs),
    /// Ask the AI synthesizer to rewrite the current config.
    Modify(ModifyArgs),
    /// Ask the AI synthesizer for variation proposals and export each one.
    Variations(VariationsArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input logo document JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Display width in pixels (PNG exports are written at 4x this).
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Display height in pixels.
    #[arg(long, default_value_t = 400)]
    height: u32,

    #[arg(long, value_enum, default_value_t = FormatChoice::Both)]
    format: FormatChoice,

    #[arg(long, value_enum, default_value_t = VariantChoice::Both)]
    variant: VariantChoice,
}

#[derive(Parser, Debug)]
struct ModifyArgs {
    /// Free-text instruction for the synthesizer.
    #[arg(long)]
    prompt: String,

    /// Input logo document JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the updated document (defaults to the input path).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct VariationsArgs {
    /// Free-text instruction for the synthesizer.
    #[arg(long)]
    prompt: String,

    /// How many proposals to request.
    #[arg(long, default_value_t = 4)]
    count: usize,

    /// Input logo document JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory for the proposal SVGs.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Svg,
    Png,
    Both,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantChoice {
    Dark,
    Light,
    Both,
}

impl VariantChoice {
    fn variants(self) -> &'static [Variant] {
        match self {
            Self::Dark => &[Variant::Dark],
            Self::Light => &[Variant::Light],
            Self::Both => &[Variant::Dark, Variant::Light],
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Modify(args) => cmd_modify(args),
        Command::Variations(args) => cmd_variations(args),
    }
}

fn load_document(path: Option<&PathBuf>) -> anyhow::Result<LogoDocument> {
    match path {
        Some(p) => Ok(LogoDocument::load(p)?),
        None => Ok(LogoDocument::default()),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let doc = load_document(args.config.as_ref())?;
    let display = Canvas::new(args.width, args.height)?;

    for &variant in args.variant.variants() {
        let config = match variant {
            Variant::Dark => doc.dark.clone(),
            Variant::Light => doc.light_config(),
        };

        if matches!(args.format, FormatChoice::Svg | FormatChoice::Both) {
            let path = write_svg(&config, variant, display, &args.out_dir)?;
            eprintln!("wrote {}", path.display());
        }
        if matches!(args.format, FormatChoice::Png | FormatChoice::Both) {
            let path = write_png(&config, variant, display, &args.out_dir)?;
            eprintln!("wrote {}", path.display());
        }
    }
    Ok(())
}

fn cmd_modify(args: ModifyArgs) -> anyhow::Result<()> {
    let doc = load_document(args.config.as_ref())?;
    let synth = GeminiSynthesizer::from_env()?;

    let mut studio = Studio::new(doc.dark, doc.light.clone());
    studio.apply_modification(&synth, &args.prompt)?;

    let out = args
        .out
        .or(args.config)
        .context("pass --out when --config is omitted")?;
    let updated = LogoDocument {
        dark: studio.config,
        light: doc.light,
    };
    updated.save(&out)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_variations(args: VariationsArgs) -> anyhow::Result<()> {
    let doc = load_document(args.config.as_ref())?;
    let synth = GeminiSynthesizer::from_env()?;

    let proposals = synth.propose_variations(&doc.dark, &args.prompt, args.count)?;
    if proposals.is_empty() {
        eprintln!("synthesizer returned no usable variations");
        return Ok(());
    }

    let display = Canvas::new(800, 400)?;
    for (index, config) in proposals.iter().enumerate() {
        let dir = args.out_dir.join(format!("variation_{index}"));
        let path = write_svg(config, Variant::Dark, display, &dir)?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}
