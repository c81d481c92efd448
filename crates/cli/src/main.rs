use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::fmt::Write as _;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ohaeng_core::catalog::recommendations_for_label;
use ohaeng_core::config::Settings;
use ohaeng_core::domain::profile::{parse_birth_date, parse_birth_time};
use ohaeng_core::domain::{BirthProfile, Element, Gender, StockPick};
use ohaeng_core::reading::{Reading, SharePayload};

#[derive(Debug, Parser)]
#[command(name = "ohaeng_cli")]
struct Args {
    /// Birth date (YYYY-MM-DD).
    #[arg(long, required_unless_present = "element")]
    birth_date: Option<String>,

    /// Birth time (HH:MM). Omit when unknown.
    #[arg(long)]
    birth_time: Option<String>,

    #[arg(long, value_enum, default_value_t = GenderArg::Male)]
    gender: GenderArg,

    /// Show the picks for an element label (木, 목, wood, ...) instead of a reading.
    #[arg(long, conflicts_with = "birth_date")]
    element: Option<String>,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(g: GenderArg) -> Self {
        match g {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[derive(Debug, Serialize)]
struct CliReading<'a> {
    reading: &'a Reading,
    summary: String,
    share: SharePayload,
}

#[derive(Debug, Serialize)]
struct CliPicks {
    element: Element,
    picks: &'static [StockPick; 3],
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    match run(&args, &settings) {
        Ok(out) => {
            println!("{out}");
            Ok(())
        }
        Err(err) => {
            sentry_anyhow::capture_anyhow(&err);
            tracing::error!(error = %err, "ohaeng_cli failed");
            Err(err)
        }
    }
}

fn run(args: &Args, settings: &Settings) -> anyhow::Result<String> {
    if let Some(label) = args.element.as_deref() {
        let (element, picks) = recommendations_for_label(label);
        return if args.json {
            serde_json::to_string_pretty(&CliPicks { element, picks })
                .context("serialize picks failed")
        } else {
            Ok(render_picks(element, picks))
        };
    }

    let profile = profile_from_args(args)?;
    let reading = Reading::for_profile(profile);
    let share = reading.share_payload(settings.public_url.as_deref());

    tracing::info!(
        birth_date = %reading.profile.birth_date,
        element = %reading.element,
        "reading computed"
    );

    if args.json {
        serde_json::to_string_pretty(&CliReading {
            reading: &reading,
            summary: reading.summary(),
            share,
        })
        .context("serialize reading failed")
    } else {
        Ok(render_reading(&reading, &share))
    }
}

fn profile_from_args(args: &Args) -> anyhow::Result<BirthProfile> {
    let birth_date = args
        .birth_date
        .as_deref()
        .context("--birth-date is required")?;

    let mut profile = BirthProfile::new(parse_birth_date(birth_date)?);
    profile.birth_time = args
        .birth_time
        .as_deref()
        .map(parse_birth_time)
        .transpose()?;
    profile.gender = args.gender.into();
    Ok(profile)
}

fn render_picks(element: Element, picks: &[StockPick; 3]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", element.theme().title);
    for (i, pick) in picks.iter().enumerate() {
        let marker = if i == 0 { '★' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {}. {} ({})  {}  {}",
            i + 1,
            pick.name,
            pick.ticker,
            pick.price_label,
            pick.change_label
        );
        let _ = writeln!(out, "     {}", pick.rationale);
    }
    out
}

fn render_reading(reading: &Reading, share: &SharePayload) -> String {
    let mut out = format!("나의 오행 기운: {}\n\n", reading.theme.title);
    out.push_str(&render_picks(reading.element, reading.picks));
    let _ = write!(out, "\n상세 분석\n{}\n", reading.summary());
    let _ = write!(out, "\n공유: {}", share.text);
    if let Some(url) = &share.url {
        let _ = write!(out, "\n      {url}");
    }
    out
}

fn init_sentry(settings: &Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
