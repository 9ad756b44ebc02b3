use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use avatarfy::{
    AgeInput, AvatarConfig, AvatarGenerator, AvatarKind, BackgroundStyle, BatchOpts, Color,
    FileSink, Gender, IdenticonStyle, Overrides, TransformSpec,
};

#[derive(Parser, Debug)]
#[command(name = "avatarfy", version)]
struct Cli {
    /// JSON configuration file; omitted fields keep their built-in defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cartoon face for an identity key.
    Face(FaceArgs),
    /// Cartoon face with an explicit transform.
    Custom(CustomArgs),
    /// Initials badge for an email address.
    Initials(InitialsArgs),
    /// Geometric identicon for a seed.
    Identicon(IdenticonArgs),
    /// Faces for many keys, written to a directory.
    Batch(BatchArgs),
    /// Print the resolved attributes for a key as JSON.
    Resolve(ResolveArgs),
}

#[derive(Args, Debug, Default)]
struct OverrideArgs {
    /// Age in years, or one of child/teen/adult/senior.
    #[arg(long)]
    age: Option<String>,
    /// male, female, or neutral.
    #[arg(long)]
    gender: Option<String>,
    #[arg(long)]
    country: Option<String>,
    #[arg(long)]
    personality: Option<String>,
    #[arg(long)]
    expression: Option<String>,
    /// Skin-tone table key (light, medium_light, medium, medium_dark, dark).
    #[arg(long)]
    skin_tone: Option<String>,
    #[arg(long)]
    eye_color: Option<String>,
    #[arg(long)]
    glasses: Option<bool>,
    /// solid, gradient, gradient_radial, or transparent.
    #[arg(long)]
    background: Option<String>,
}

impl OverrideArgs {
    fn to_overrides(&self) -> anyhow::Result<Overrides> {
        Ok(Overrides {
            age: self
                .age
                .as_deref()
                .map(str::parse::<AgeInput>)
                .transpose()?,
            gender: self
                .gender
                .as_deref()
                .map(str::parse::<Gender>)
                .transpose()?,
            country: self.country.clone(),
            personality: self.personality.clone(),
            expression: self.expression.clone(),
            skin_tone: self.skin_tone.clone(),
            eye_color: self.eye_color.as_deref().map(Color::new),
            has_glasses: self.glasses,
            background: self
                .background
                .as_deref()
                .map(str::parse::<BackgroundStyle>)
                .transpose()?,
        })
    }
}

#[derive(Args, Debug)]
struct TransformArgs {
    #[arg(long)]
    flip: bool,
    /// Clockwise rotation in degrees.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    rotate: f64,
    /// Scale in percent.
    #[arg(long, default_value_t = 100.0)]
    scale: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    translate_x: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    translate_y: f64,
    /// Corner radius for the background rectangle.
    #[arg(long, default_value_t = 0.0)]
    radius: f64,
    /// Clip to a centered circle.
    #[arg(long)]
    clip: bool,
}

impl TransformArgs {
    fn to_spec(&self) -> TransformSpec {
        TransformSpec {
            flip: self.flip,
            rotate_degrees: self.rotate,
            scale_percent: self.scale,
            translate_x: self.translate_x,
            translate_y: self.translate_y,
            corner_radius: self.radius,
            clip_to_circle: self.clip,
        }
    }
}

#[derive(Parser, Debug)]
struct FaceArgs {
    #[arg(long)]
    key: String,
    #[command(flatten)]
    overrides: OverrideArgs,
    /// Output SVG path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CustomArgs {
    #[arg(long)]
    key: String,
    #[command(flatten)]
    overrides: OverrideArgs,
    #[command(flatten)]
    transform: TransformArgs,
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct InitialsArgs {
    #[arg(long)]
    email: String,
    #[command(flatten)]
    overrides: OverrideArgs,
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct IdenticonArgs {
    #[arg(long)]
    seed: String,
    /// grid, layered, radial, tribal, or crystal; unknown names use grid.
    #[arg(long)]
    style: Option<String>,
    /// Square output size in pixels.
    #[arg(long)]
    size: Option<u32>,
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Identity keys, comma separated or repeated.
    #[arg(long, value_delimiter = ',', required = true)]
    keys: Vec<String>,
    #[command(flatten)]
    overrides: OverrideArgs,
    /// Directory receiving `avatar_<key>.svg` files.
    #[arg(long)]
    out_dir: PathBuf,
    /// Worker threads; rayon's default when omitted.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    #[arg(long)]
    key: String,
    #[command(flatten)]
    overrides: OverrideArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let generator = load_generator(cli.config.as_deref())?;
    match cli.cmd {
        Command::Face(args) => cmd_face(&generator, args),
        Command::Custom(args) => cmd_custom(&generator, args),
        Command::Initials(args) => cmd_initials(&generator, args),
        Command::Identicon(args) => cmd_identicon(&generator, args),
        Command::Batch(args) => cmd_batch(&generator, args),
        Command::Resolve(args) => cmd_resolve(&generator, args),
    }
}

fn load_generator(config: Option<&Path>) -> anyhow::Result<AvatarGenerator> {
    let cfg = match config {
        Some(path) => AvatarConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => AvatarConfig::default(),
    };
    Ok(AvatarGenerator::new(cfg)?)
}

fn cmd_face(generator: &AvatarGenerator, args: FaceArgs) -> anyhow::Result<()> {
    let svg = generator
        .generate(&args.key, &args.overrides.to_overrides()?)
        .with_context(|| format!("generate face for '{}'", args.key))?;
    write_output(&svg, args.out.as_deref())
}

fn cmd_custom(generator: &AvatarGenerator, args: CustomArgs) -> anyhow::Result<()> {
    let svg = generator
        .generate_custom(
            &args.key,
            &args.overrides.to_overrides()?,
            &args.transform.to_spec(),
        )
        .with_context(|| format!("generate custom face for '{}'", args.key))?;
    write_output(&svg, args.out.as_deref())
}

fn cmd_initials(generator: &AvatarGenerator, args: InitialsArgs) -> anyhow::Result<()> {
    let svg = generator
        .generate_initials(&args.email, &args.overrides.to_overrides()?)
        .with_context(|| format!("generate initials for '{}'", args.email))?;
    write_output(&svg, args.out.as_deref())
}

fn cmd_identicon(generator: &AvatarGenerator, args: IdenticonArgs) -> anyhow::Result<()> {
    let style = args.style.as_deref().map(IdenticonStyle::from_key);
    let svg = generator
        .generate_identicon(&args.seed, style, args.size)
        .with_context(|| format!("generate identicon for '{}'", args.seed))?;
    write_output(&svg, args.out.as_deref())
}

fn cmd_batch(generator: &AvatarGenerator, args: BatchArgs) -> anyhow::Result<()> {
    let overrides = args.overrides.to_overrides()?;
    let opts = BatchOpts {
        threads: args.threads,
    };
    let results = generator.generate_batch_with(&args.keys, &overrides, &opts)?;
    let sink = FileSink::new(&args.out_dir);

    let mut failed = 0usize;
    for (key, result) in &results {
        let stored = result.as_ref().map_err(|e| e.to_string()).and_then(|svg| {
            generator
                .store(&sink, AvatarKind::Face, key, svg)
                .map_err(|e| e.to_string())
        });
        match stored {
            Ok(path) => eprintln!("wrote {path}"),
            Err(msg) => {
                failed += 1;
                eprintln!("failed {key}: {msg}");
            }
        }
    }
    eprintln!(
        "{} of {} avatars written to '{}'",
        results.len() - failed,
        results.len(),
        sink.root().display()
    );
    if failed > 0 {
        anyhow::bail!("{failed} of {} batch keys failed", results.len());
    }
    Ok(())
}

fn cmd_resolve(generator: &AvatarGenerator, args: ResolveArgs) -> anyhow::Result<()> {
    let record = generator.resolve(&args.key, &args.overrides.to_overrides()?)?;
    let json = serde_json::to_string_pretty(&record).context("serialize attributes")?;
    println!("{json}");
    Ok(())
}

fn write_output(svg: &str, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, svg)
                .with_context(|| format!("write svg '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(svg.as_bytes())
                .context("write svg to stdout")?;
        }
    }
    Ok(())
}
