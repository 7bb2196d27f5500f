use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use easeflow::{
    CubicBezierCurve, CurveSource, Ease, EaseParameters, EaseflowConfig, JsonFileStore,
    MemoryHost, MemoryProperty, NamedCurveLibrary, PresetCategory,
};

const DEFAULT_STORE: &str = "easeflow-curves.json";

#[derive(Parser, Debug)]
#[command(name = "easeflow", version)]
struct Cli {
    /// JSON config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// User curve store, overriding the config.
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print eased progress for each input progress value.
    Eval(EvalArgs),
    /// Print evenly spaced `[x, y]` samples of a curve as JSON.
    Sample(SampleArgs),
    /// Evaluate a closed-form easing function.
    Ease(EaseArgs),
    /// Print the keyframe ease parameters for a curve.
    Convert(CurveArg),
    /// Recover a curve from keyframe ease parameters.
    Detect(DetectArgs),
    /// Apply a curve to a JSON document of animated properties.
    Apply(ApplyArgs),
    /// List built-in presets.
    Presets(PresetsArgs),
    /// Manage saved curves.
    #[command(subcommand)]
    Library(LibraryCommand),
    /// Print a curve in copy/export form.
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
struct CurveArg {
    /// Curve text (`[x1, y1, x2, y2]` or `cubic-bezier(...)`), preset name or saved curve name.
    #[arg(long)]
    curve: String,
}

#[derive(Parser, Debug)]
struct EvalArgs {
    #[command(flatten)]
    curve: CurveArg,

    /// Input progress values in `[0, 1]`.
    #[arg(required = true, allow_negative_numbers = true)]
    x: Vec<f64>,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    #[command(flatten)]
    curve: CurveArg,

    #[arg(long, default_value_t = 10)]
    steps: usize,
}

#[derive(Parser, Debug)]
struct EaseArgs {
    /// Easing function name, e.g. `in-out-quad`.
    name: Ease,

    #[arg(required = true, allow_negative_numbers = true)]
    t: Vec<f64>,
}

#[derive(Parser, Debug)]
struct DetectArgs {
    #[arg(long)]
    out_influence: f64,
    #[arg(long)]
    out_speed: f64,
    #[arg(long)]
    in_influence: f64,
    #[arg(long)]
    in_speed: f64,
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    #[command(flatten)]
    curve: CurveArg,

    /// Input JSON array of properties.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PresetsArgs {
    #[arg(long, value_enum)]
    category: Option<CategoryChoice>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CategoryChoice {
    Basic,
    Advanced,
}

#[derive(Subcommand, Debug)]
enum LibraryCommand {
    /// List default and saved curves.
    List,
    /// Save a curve under a new name.
    Add {
        name: String,
        #[command(flatten)]
        curve: CurveArg,
    },
    /// Delete a saved curve.
    Remove { name: String },
}

#[derive(Parser, Debug)]
struct ExportArgs {
    #[command(flatten)]
    curve: CurveArg,

    /// Emit `cubic-bezier(...)` instead of the bracketed form.
    #[arg(long)]
    css: bool,

    /// Decimal places, overriding the config.
    #[arg(long)]
    decimals: Option<usize>,
}

struct Session {
    config: EaseflowConfig,
    store: JsonFileStore,
}

impl Session {
    fn open(config_path: Option<&Path>, store: Option<PathBuf>) -> anyhow::Result<Self> {
        let config = match config_path {
            Some(p) => EaseflowConfig::load(p)?,
            None => EaseflowConfig::default(),
        };
        let store_path = store
            .or_else(|| config.store_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE));
        Ok(Self {
            config,
            store: JsonFileStore::new(store_path),
        })
    }

    fn library(&self) -> anyhow::Result<NamedCurveLibrary> {
        Ok(NamedCurveLibrary::load(&self.store)?)
    }

    /// Curve text first, then presets, then the library.
    fn resolve(&self, arg: &CurveArg) -> anyhow::Result<(String, CubicBezierCurve)> {
        let text = arg.curve.trim();
        let parsed = easeflow::parse_curve(text, self.config.import_range);
        if let Ok(curve) = parsed {
            return Ok((easeflow::format_css(&curve), curve));
        }
        if let Some(p) = easeflow::find_preset(text) {
            return Ok((p.name.to_string(), p.curve));
        }
        if let Some((_, curve)) = self.library()?.resolve(text) {
            return Ok((text.to_string(), curve));
        }
        // Report the parse error when the text looked like a curve.
        match parsed {
            Err(e) if text.starts_with('[') || text.starts_with("cubic-bezier") => Err(e.into()),
            _ => anyhow::bail!("unknown curve '{text}': not curve text, a preset or a saved curve"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let session = Session::open(cli.config.as_deref(), cli.store)?;
    match cli.cmd {
        Command::Eval(args) => cmd_eval(&session, args),
        Command::Sample(args) => cmd_sample(&session, args),
        Command::Ease(args) => cmd_ease(args),
        Command::Convert(args) => cmd_convert(&session, args),
        Command::Detect(args) => cmd_detect(&session, args),
        Command::Apply(args) => cmd_apply(&session, args),
        Command::Presets(args) => cmd_presets(args),
        Command::Library(cmd) => cmd_library(&session, cmd),
        Command::Export(args) => cmd_export(&session, args),
    }
}

fn cmd_eval(session: &Session, args: EvalArgs) -> anyhow::Result<()> {
    let (_, curve) = session.resolve(&args.curve)?;
    for x in args.x {
        println!("{x}\t{}", curve.evaluate(x));
    }
    Ok(())
}

fn cmd_sample(session: &Session, args: SampleArgs) -> anyhow::Result<()> {
    let (_, curve) = session.resolve(&args.curve)?;
    let points: Vec<[f64; 2]> = curve.sample(args.steps).iter().map(|p| [p.x, p.y]).collect();
    println!("{}", serde_json::to_string(&points)?);
    Ok(())
}

fn cmd_ease(args: EaseArgs) -> anyhow::Result<()> {
    for t in args.t {
        println!("{t}\t{}", args.name.apply(t));
    }
    Ok(())
}

fn cmd_convert(session: &Session, args: CurveArg) -> anyhow::Result<()> {
    let (_, curve) = session.resolve(&args)?;
    let params = EaseParameters::from_curve(&curve);
    println!("{}", serde_json::to_string_pretty(&params)?);
    Ok(())
}

fn cmd_detect(session: &Session, args: DetectArgs) -> anyhow::Result<()> {
    let params = EaseParameters {
        out_influence: args.out_influence,
        in_influence: args.in_influence,
        out_speed: args.out_speed,
        in_speed: args.in_speed,
    };
    let curve = params.to_curve();
    let decimals = session.config.export_decimals;
    println!("{}", easeflow::format_curve(&curve, decimals));
    Ok(())
}

fn read_properties_json(path: &Path) -> anyhow::Result<Vec<MemoryProperty>> {
    let f = File::open(path).with_context(|| format!("open properties '{}'", path.display()))?;
    let r = BufReader::new(f);
    let props: Vec<MemoryProperty> =
        serde_json::from_reader(r).with_context(|| "parse properties JSON")?;
    Ok(props)
}

fn cmd_apply(session: &Session, args: ApplyArgs) -> anyhow::Result<()> {
    let (name, curve) = session.resolve(&args.curve)?;
    let props = read_properties_json(&args.in_path)?;

    let mut host = MemoryHost::new(props);
    let reply = easeflow::apply_via_host(&mut host, &name, &curve)?;
    eprintln!("{reply}");

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(&host.into_selection())?;
    std::fs::write(&args.out, json)
        .with_context(|| format!("write properties '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_presets(args: PresetsArgs) -> anyhow::Result<()> {
    let wanted = args.category.map(|c| match c {
        CategoryChoice::Basic => PresetCategory::Basic,
        CategoryChoice::Advanced => PresetCategory::Advanced,
    });
    for p in easeflow::PRESETS
        .iter()
        .filter(|p| wanted.is_none_or(|c| p.category == c))
    {
        println!("{}\t{}", p.name, easeflow::format_css(&p.curve));
    }
    Ok(())
}

fn cmd_library(session: &Session, cmd: LibraryCommand) -> anyhow::Result<()> {
    let mut library = session.library()?;
    match cmd {
        LibraryCommand::List => {
            let decimals = session.config.export_decimals;
            let defaults = library
                .default_curves()
                .map(|(name, curve)| (name.to_string(), curve, CurveSource::Default));
            let users = library
                .user_curves()
                .iter()
                .map(|(name, curve)| (name.clone(), *curve, CurveSource::User));
            for (name, curve, source) in defaults.chain(users) {
                println!(
                    "{name}\t{}\t{}",
                    easeflow::format_curve(&curve, decimals),
                    source_label(source)
                );
            }
        }
        LibraryCommand::Add { name, curve } => {
            let (_, curve) = session.resolve(&curve)?;
            library.add_user_curve(&name, curve)?;
            library.persist(&session.store)?;
            eprintln!("saved '{}' to {}", name.trim(), session.store.path().display());
        }
        LibraryCommand::Remove { name } => {
            if library.delete_user_curve(&name).is_none() {
                anyhow::bail!("no saved curve named '{name}'");
            }
            library.persist(&session.store)?;
            eprintln!("removed '{name}' from {}", session.store.path().display());
        }
    }
    Ok(())
}

fn source_label(source: CurveSource) -> &'static str {
    match source {
        CurveSource::Default => "default",
        CurveSource::User => "user",
    }
}

fn cmd_export(session: &Session, args: ExportArgs) -> anyhow::Result<()> {
    let (_, curve) = session.resolve(&args.curve)?;
    if args.css {
        println!("{}", easeflow::format_css(&curve));
    } else {
        let decimals = args.decimals.unwrap_or(session.config.export_decimals);
        println!("{}", easeflow::format_curve(&curve, decimals));
    }
    Ok(())
}
