use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "wrapgen", version, about = "Generate vehicle wrap skins from a panel template")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate built-in skins.
    Presets(PresetArgs),
    /// Generate the skins described by a batch JSON file.
    Batch(BatchArgs),
    /// List built-in skins and palette colors.
    List,
}

#[derive(Args, Debug, Default)]
struct PathArgs {
    /// Template PNG whose size and luminance define every output.
    #[arg(long)]
    template: Option<PathBuf>,

    /// Directory holding logo sheets.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Output directory (created if missing).
    #[arg(long)]
    out: Option<PathBuf>,
}

impl PathArgs {
    fn apply(&self, config: &mut wrapgen::WrapConfig) {
        if let Some(p) = &self.template {
            config.template_path = p.clone();
        }
        if let Some(p) = &self.assets {
            config.assets_dir = p.clone();
        }
        if let Some(p) = &self.out {
            config.output_dir = p.clone();
        }
    }
}

#[derive(Parser, Debug)]
struct PresetArgs {
    /// Which built-in set to generate.
    #[arg(long, value_enum, default_value_t = SetChoice::Samples)]
    set: SetChoice,

    /// Only generate the named skins from the chosen set.
    #[arg(long)]
    only: Vec<String>,

    #[command(flatten)]
    paths: PathArgs,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Input batch JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    paths: PathArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SetChoice {
    Samples,
    Ferrari,
    FerrariSponsors,
    All,
}

impl SetChoice {
    fn sets(self) -> Vec<wrapgen::PresetSet> {
        match self {
            Self::Samples => vec![wrapgen::PresetSet::Samples],
            Self::Ferrari => vec![wrapgen::PresetSet::Ferrari],
            Self::FerrariSponsors => vec![wrapgen::PresetSet::FerrariSponsors],
            Self::All => wrapgen::PresetSet::ALL.to_vec(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Presets(args) => cmd_presets(args),
        Command::Batch(args) => cmd_batch(args),
        Command::List => cmd_list(),
    }
}

fn cmd_presets(args: PresetArgs) -> anyhow::Result<()> {
    let mut config = wrapgen::WrapConfig::default();
    args.paths.apply(&mut config);
    let palette = wrapgen::Palette::standard();

    let mut skins: Vec<wrapgen::SkinSpec> = args
        .set
        .sets()
        .into_iter()
        .flat_map(wrapgen::PresetSet::skins)
        .collect();
    if !args.only.is_empty() {
        if let Some(missing) = args.only.iter().find(|n| !skins.iter().any(|s| &s.name == *n)) {
            anyhow::bail!("no built-in skin named \"{missing}\" in the selected set");
        }
        skins.retain(|s| args.only.contains(&s.name));
    }

    let written = wrapgen::generate_all(&config, &palette, &skins)?;
    eprintln!("wrote {} skin(s) to {}", written.len(), config.output_dir.display());
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let batch = wrapgen::Batch::from_path(&args.in_path)?;
    let base = args.in_path.parent().unwrap_or_else(|| Path::new("."));

    let mut config = wrapgen::WrapConfig::default();
    batch.paths.apply(&mut config, base);
    args.paths.apply(&mut config);

    let palette = wrapgen::Palette::standard().extended(&batch.palette);
    batch.validate(&palette)?;

    let written = wrapgen::generate_all(&config, &palette, &batch.skins)?;
    eprintln!("wrote {} skin(s) to {}", written.len(), config.output_dir.display());
    Ok(())
}

fn cmd_list() -> anyhow::Result<()> {
    for set in wrapgen::PresetSet::ALL {
        println!("{}:", set.name());
        for skin in set.skins() {
            println!("  {}", skin.name);
        }
    }
    let palette = wrapgen::Palette::standard();
    println!("palette ({} colors):", palette.len());
    for (name, color) in palette.iter() {
        println!("  {name:<16} {}", color.to_hex());
    }
    Ok(())
}
