use anyhow::Context;
use clap::Parser;
use jyotish::{chart_summary, BirthData, ChartEngine, EphemerisBackend};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute a sidereal (Lahiri) birth chart")]
struct Args {
    #[arg(long, help = "Birth date, YYYY-MM-DD")]
    date: Option<String>,

    #[arg(long, help = "Birth time, HH:MM (24-hour)")]
    time: Option<String>,

    #[arg(long, allow_hyphen_values = true, help = "Latitude, north positive")]
    lat: Option<f64>,

    #[arg(long, allow_hyphen_values = true, help = "Longitude, east positive")]
    lon: Option<f64>,

    #[arg(long, help = "IANA timezone, e.g. Asia/Kolkata")]
    tz: Option<String>,

    #[arg(
        long,
        conflicts_with_all = ["date", "time", "lat", "lon", "tz"],
        help = "Birth data JSON file"
    )]
    input: Option<PathBuf>,

    #[arg(long, help = "Config file (default: configs/jyotish.toml if present)")]
    config: Option<PathBuf>,

    #[arg(long, help = "Override the configured ephemeris: builtin or swiss")]
    backend: Option<EphemerisBackend>,

    #[arg(long, help = "Round floats to this many decimals")]
    round: Option<u32>,

    #[arg(long, help = "Print the plain-text summary instead of JSON")]
    summary: bool,
}

fn birth_data(args: &Args) -> anyhow::Result<BirthData> {
    if let Some(path) = &args.input {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return serde_json::from_str(&text)
            .with_context(|| format!("Invalid birth data in {}", path.display()));
    }

    let (Some(date), Some(time), Some(latitude), Some(longitude), Some(timezone)) = (
        args.date.clone(),
        args.time.clone(),
        args.lat,
        args.lon,
        args.tz.clone(),
    ) else {
        anyhow::bail!("Pass --input FILE or all of --date, --time, --lat, --lon and --tz");
    };

    Ok(BirthData {
        date,
        time,
        latitude,
        longitude,
        timezone,
        name: None,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut settings = jyotish_config::load_engine_settings(args.config.as_deref())?;
    if let Some(backend) = args.backend {
        settings.backend = backend;
    }
    let engine = ChartEngine::new(settings).context("Failed to start chart engine")?;

    let birth = birth_data(&args)?;
    if let Some(name) = &birth.name {
        log::info!("Computing chart for {name}");
    }
    let mut chart = engine.compute_for(&birth).with_context(|| {
        format!(
            "Chart computation failed for {} {} {}",
            birth.date, birth.time, birth.timezone
        )
    })?;
    if let Some(places) = args.round {
        chart = chart.rounded(places);
    }

    if args.summary {
        print!("{}", chart_summary(&chart));
    } else {
        println!("{}", serde_json::to_string_pretty(&chart)?);
    }
    Ok(())
}
