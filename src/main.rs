use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use lng_cooldown_toolbox::config::{self, Config, DEFAULT_CONFIG_PATH};
use lng_cooldown_toolbox::conversion;
use lng_cooldown_toolbox::cooldown::{
    self, ContingencyTarget, CooldownForm, LatentHeatModel, PhaseLayout,
};
use lng_cooldown_toolbox::i18n::{self, Translator};
use lng_cooldown_toolbox::quantity::QuantityKind;
use lng_cooldown_toolbox::{app, report, ui_cli};

#[derive(Parser, Debug)]
#[command(author, version, about = "LNG tank cool-down estimator")]
struct Cli {
    /// Configuration file (created with defaults when missing).
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Output language (ko, en, auto).
    #[arg(long)]
    lang: Option<String>,

    /// Directory holding `<lang>.toml` message overrides.
    #[arg(long)]
    locales: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate cryogen volumes and durations for one tank.
    Calc(CalcArgs),
    /// List the material catalog.
    Materials,
    /// Convert a value between units.
    Convert {
        /// temperature, temperature-diff, length, volume, mass, energy
        kind: String,
        #[arg(allow_hyphen_values = true)]
        value: f64,
        from: String,
        to: String,
    },
    /// Run the interactive menu (default).
    Interactive,
}

#[derive(Args, Debug)]
struct CalcArgs {
    /// Tank height [m].
    #[arg(long)]
    height: Option<String>,
    /// Tank outer diameter [mm].
    #[arg(long)]
    diameter: Option<String>,
    /// Tank wall thickness [mm].
    #[arg(long)]
    wall: Option<String>,
    /// Tank metal volume [m³]; replaces height/diameter/wall.
    #[arg(long, conflicts_with_all = ["height", "diameter", "wall"])]
    tank_volume: Option<String>,
    /// Tank material (cs, ss, 9ni, al, cu or full name).
    #[arg(long)]
    material: Option<String>,
    /// Pipeline length [m].
    #[arg(long)]
    pipe_length: Option<String>,
    /// Pipeline diameter [mm].
    #[arg(long)]
    pipe_diameter: Option<String>,
    /// Pipeline material (defaults to the tank material).
    #[arg(long)]
    pipe_material: Option<String>,
    /// Initial temperature.
    #[arg(long, allow_hyphen_values = true)]
    initial: Option<String>,
    /// Target temperature.
    #[arg(long, allow_hyphen_values = true)]
    target: Option<String>,
    /// Unit of --initial/--target (C, K, F).
    #[arg(long, default_value = "C")]
    temp_unit: String,
    /// LIN supply flow [m³/h].
    #[arg(long)]
    lin_flow: Option<String>,
    /// LNG supply flow [m³/h].
    #[arg(long)]
    lng_flow: Option<String>,
    /// Cooling rate [°C/h].
    #[arg(long)]
    cooling_rate: Option<String>,
    /// Contingency factor [%].
    #[arg(long)]
    contingency: Option<String>,
    /// Override the configured phase layout.
    #[arg(long, value_enum)]
    layout: Option<LayoutArg>,
    /// Override the configured latent-heat formula.
    #[arg(long, value_enum)]
    latent: Option<LatentArg>,
    /// Override which cryogen receives the contingency.
    #[arg(long, value_enum)]
    contingency_target: Option<TargetArg>,
    /// Print the result as JSON (SI units).
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayoutArg {
    ThreePhase,
    TwoPhase,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LatentArg {
    Latent,
    LatentPlusSensible,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TargetArg {
    Lin,
    Lng,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut cfg = config::load_or_default(&cli.config)
        .with_context(|| format!("failed to load config from {}", cli.config.display()))?;
    let lang = i18n::resolve_language(cli.lang.as_deref(), cfg.language.as_deref());
    let tr = Translator::new_with_pack(&lang, cli.locales.as_deref());

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Calc(args) => handle_calc(&cfg, &tr, args),
        Command::Materials => {
            ui_cli::handle_materials(&tr);
            Ok(())
        }
        Command::Convert {
            kind,
            value,
            from,
            to,
        } => {
            let kind: QuantityKind = kind.parse()?;
            let result = conversion::convert(kind, value, &from, &to)?;
            println!("{result} {to}");
            Ok(())
        }
        Command::Interactive => {
            app::run(&mut cfg, &cli.config, &tr).context("interactive session failed")
        }
    }
}

fn handle_calc(cfg: &Config, tr: &Translator, args: CalcArgs) -> Result<()> {
    let mut model = cfg.model;
    if let Some(layout) = args.layout {
        model.phase_layout = match layout {
            LayoutArg::ThreePhase => PhaseLayout::VaporLinLinLng,
            LayoutArg::TwoPhase => PhaseLayout::LinLng,
        };
    }
    if let Some(latent) = args.latent {
        model.latent_heat = match latent {
            LatentArg::Latent => LatentHeatModel::Latent,
            LatentArg::LatentPlusSensible => LatentHeatModel::LatentPlusSensible,
        };
    }
    if let Some(target) = args.contingency_target {
        model.contingency_target = match target {
            TargetArg::Lin => ContingencyTarget::Lin,
            TargetArg::Lng => ContingencyTarget::Lng,
        };
    }

    let form = CooldownForm {
        tank_height: args.height,
        tank_diameter: args.diameter,
        tank_wall_thickness: args.wall,
        tank_volume: args.tank_volume,
        tank_material: args.material,
        pipeline_length: args.pipe_length,
        pipeline_diameter: args.pipe_diameter,
        pipeline_material: args.pipe_material,
        initial_temperature: args.initial,
        target_temperature: args.target,
        temperature_unit: Some(conversion::parse_temperature_unit(&args.temp_unit)?),
        lin_flow_rate: args.lin_flow,
        lng_flow_rate: args.lng_flow,
        cooling_rate: args.cooling_rate,
        contingency_factor: args.contingency,
    };
    let input = form.parse().context("invalid cool-down input")?;
    let result = cooldown::calculate(&input, &model).context("cool-down calculation failed")?;

    if args.json {
        println!("{}", report::render_json(&result)?);
    } else {
        print!("{}", report::render_text(&result, &cfg.display_units, tr));
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
