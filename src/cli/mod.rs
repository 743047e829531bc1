//! Command-line interface definitions.

pub mod output;
pub mod place;
pub mod slip;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use crate::app::{App, BetSlipSession, Config};
use crate::domain::{Bookmaker, BookmakerKey, Market, MarketKey, Outcome, SportEvent};
use crate::error::{Error, Result};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "betslip.toml";

/// Betslip - build accumulator bets and place them.
#[derive(Parser, Debug)]
#[command(name = "betslip")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the current slip with combined odds and payout
    Show,

    /// Add an outcome to the slip, replacing any pick on the same event
    Add(SelectionArgs),

    /// Add the outcome, or remove it if it is already on the slip
    Toggle(SelectionArgs),

    /// Remove a selection by ID
    Remove(RemoveArgs),

    /// Set the stake
    Stake(StakeArgs),

    /// Remove every selection
    Clear,

    /// Confirm and place the bet
    Place(PlaceArgs),
}

/// Describes one outcome of one event.
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Event ID from the odds provider
    #[arg(long = "event")]
    pub event_id: String,

    /// Home team
    #[arg(long)]
    pub home: String,

    /// Away team
    #[arg(long)]
    pub away: String,

    /// Sport key
    #[arg(long, default_value = "soccer_epl")]
    pub sport: String,

    /// Human-readable sport title
    #[arg(long)]
    pub sport_title: Option<String>,

    /// Kick-off time (RFC 3339), defaults to now
    #[arg(long)]
    pub commence: Option<DateTime<Utc>>,

    /// Market key
    #[arg(long, default_value = "h2h")]
    pub market: String,

    /// Outcome name
    #[arg(long)]
    pub outcome: String,

    /// Decimal odds
    #[arg(long)]
    pub price: Decimal,

    /// Handicap or total line
    #[arg(long, allow_negative_numbers = true)]
    pub point: Option<Decimal>,

    /// Bookmaker key
    #[arg(long, default_value = "unibet")]
    pub bookmaker: String,

    /// Other outcomes quoted in the same market, as NAME=PRICE
    #[arg(long = "also", value_parser = parse_quote)]
    pub others: Vec<(String, Decimal)>,
}

fn parse_quote(raw: &str) -> std::result::Result<(String, Decimal), String> {
    let (name, price) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=PRICE, got {raw:?}"))?;
    let price = price
        .trim()
        .parse::<Decimal>()
        .map_err(|e| format!("bad price in {raw:?}: {e}"))?;
    Ok((name.trim().to_string(), price))
}

impl SelectionArgs {
    /// Split into the parts a selection is built from.
    ///
    /// The picked outcome and any `--also` quotes form the bookmaker's market,
    /// so bad prices and duplicate outcome names are rejected here.
    #[allow(clippy::result_large_err)]
    pub fn into_parts(self) -> Result<(SportEvent, MarketKey, Outcome, BookmakerKey)> {
        let mut picked = Outcome::try_new(self.outcome, self.price)?;
        if let Some(point) = self.point {
            picked = picked.with_point(point);
        }
        let name = picked.name.clone();

        let mut outcomes = vec![picked];
        for (other, price) in self.others {
            outcomes.push(Outcome::try_new(other, price)?);
        }
        let key = MarketKey::new(self.market);
        let bookmaker = Bookmaker {
            key: BookmakerKey::new(self.bookmaker.as_str()),
            title: self.bookmaker,
            markets: vec![Market::try_new(key.clone(), outcomes)?],
        };
        let outcome = bookmaker
            .quote(&key, &name)
            .cloned()
            .ok_or_else(|| Error::Input(format!("{name} is not offered in {key}")))?;

        let mut event = SportEvent::new(
            self.event_id,
            self.sport,
            self.commence.unwrap_or_else(Utc::now),
            self.home,
            self.away,
        );
        if let Some(title) = self.sport_title {
            event = event.with_sport_title(title);
        }

        Ok((event, key, outcome, bookmaker.key))
    }
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Selection ID as shown by `betslip show`
    pub id: String,
}

#[derive(Args, Debug)]
pub struct StakeArgs {
    /// Stake amount; empty resets it to zero
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Show the payout for this stake without changing the slip
    #[arg(long)]
    pub preview: bool,
}

#[derive(Args, Debug)]
pub struct PlaceArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Load config, open the session, run the command and close the session.
#[allow(clippy::result_large_err)]
pub async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    config.init_logging();

    let mut session = App::session(&config)?;
    let result = dispatch(&mut session, cli.command).await;
    session.close();
    result
}

async fn dispatch(session: &mut BetSlipSession, command: Commands) -> Result<()> {
    match command {
        Commands::Show => {
            slip::show(session);
            Ok(())
        }
        Commands::Add(args) => slip::add(session, args),
        Commands::Toggle(args) => slip::toggle(session, args),
        Commands::Remove(args) => slip::remove(session, &args.id),
        Commands::Stake(args) if args.preview => {
            slip::preview_stake(session, &args.amount);
            Ok(())
        }
        Commands::Stake(args) => slip::stake(session, &args.amount),
        Commands::Clear => {
            slip::clear(session);
            Ok(())
        }
        Commands::Place(args) => place::execute(session, args.yes).await,
    }
}

#[allow(clippy::result_large_err)]
fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Config::load(path);
    }
    let local = Path::new(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return Config::load(local);
    }
    let mut config = Config::default();
    config.apply_env();
    config.validate()?;
    Ok(config)
}
