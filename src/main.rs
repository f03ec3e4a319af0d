use chrono::{DateTime, TimeZone, Utc};
use clap::Parser;
use log::{info, warn};
use neverland_compass::{
    DeviceOrientation, LocatorConfig, ObserverLocation, SkyFix, StarCatalog,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Where is Sirius (or any other star) in your sky right now?
#[derive(Debug, Parser)]
#[command(name = "neverland_compass", version)]
struct Args {
    /// observer latitude in degrees, north-positive
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// observer longitude in degrees, east-positive
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,

    /// UTC time as RFC 3339 or unix seconds; defaults to now
    #[arg(long, value_parser = parse_time)]
    time: Option<DateTime<Utc>>,

    /// device compass heading in degrees
    #[arg(long, allow_hyphen_values = true)]
    heading: Option<f64>,

    /// device front-to-back tilt (beta) in degrees
    #[arg(long, allow_hyphen_values = true)]
    tilt: Option<f64>,

    #[arg(long, default_value = "Sirius")]
    star: String,

    /// json file with an array of star entries
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// json locator config
    #[arg(long)]
    config: Option<PathBuf>,

    /// print the fix as json
    #[arg(long)]
    json: bool,
}

fn parse_time(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(seconds) = value.parse::<i64>() {
        return Utc
            .timestamp_opt(seconds, 0)
            .single()
            .ok_or_else(|| format!("unix time {} is out of range", seconds));
    }
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("invalid time '{}': {}", value, e))
}

fn run(args: Args) -> neverland_compass::Result<()> {
    let config = match &args.config {
        Some(path) => LocatorConfig::load(path)?,
        None => LocatorConfig::default(),
    };
    let catalog = match &args.catalog {
        Some(path) => StarCatalog::load(path)?,
        None => StarCatalog::default(),
    };
    let star = catalog.find(&args.star)?;

    let location = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => ObserverLocation::new(lat, lon)?,
        _ => {
            warn!(
                "no location given, falling back to {:.4}, {:.4}",
                config.fallback_location.latitude, config.fallback_location.longitude
            );
            config.fallback_location
        }
    };
    let time = args.time.unwrap_or_else(Utc::now);
    info!("computing {} for {:?} at {}", star.name, location, time);

    let fix = SkyFix::compute(star, &location, &time, &config);
    let orientation = DeviceOrientation {
        alpha: args.heading,
        beta: args.tilt,
        absolute: args.heading.is_some(),
        ..Default::default()
    };
    let comparison = if args.heading.is_some() || args.tilt.is_some() {
        Some(fix.assess(&orientation, &config))
    } else {
        None
    };

    if args.json {
        let out = serde_json::json!({
            "fix": fix,
            "pointing": comparison,
        });
        let text = serde_json::to_string_pretty(&out).map_err(|source| neverland_compass::Error::Json {
            path: String::from("<stdout>"),
            source,
        })?;
        println!("{}", text);
        return Ok(());
    }

    let p = &fix.position;
    println!(
        "{} seen from lat={:.4}, lon={:.4} at {}",
        fix.star,
        location.latitude,
        location.longitude,
        time.to_rfc3339()
    );
    println!(
        "Altitude {:.2}°, azimuth {:.2}° ({}), {}",
        p.altitude,
        p.azimuth,
        fix.compass,
        if p.is_visible { "visible now" } else { "below horizon" }
    );
    match (&p.rise_time, &p.set_time) {
        (Some(rise), Some(set)) => println!("Rises ~{}, sets ~{}", rise, set),
        _ => println!("Never crosses the horizon at this latitude"),
    }
    if let Some(km) = star.distance_trillion_km() {
        println!("{:.1} trillion km away", km);
    }
    println!("World axes: +X east, +Y up, +Z north.");
    let v = &fix.scene_position;
    println!("Scene position (x, y, z): [{:.4}, {:.4}, {:.4}]", v.x, v.y, v.z);
    if let Some(c) = &comparison {
        println!("Pointing error: {:.1}°", c.angular_distance_degrees);
    }
    println!("{}", fix.guidance(comparison.as_ref(), &config));
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
