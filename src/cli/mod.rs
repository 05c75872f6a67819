pub mod render;

use std::time::Duration;

use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use tracing::{error, info};

use crate::{
    config::TourGuideConfig,
    core::{DayCountPolicy, Session, TourPlanner},
    schemas,
    types::UserIdentity,
};

fn command() -> Command {
    Command::new("tour-guide")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Plan a multi-day city trip, with an offline placeholder when the service is down")
        .arg(
            Arg::new("city")
                .help("Destination city")
                .required_unless_present("print-schema")
                .index(1),
        )
        .arg(
            Arg::new("days")
                .short('d')
                .long("days")
                .value_name("DAYS")
                .help("Trip length in days (defaults to 3 when blank or not a number)"),
        )
        .arg(
            Arg::new("name")
                .short('n')
                .long("name")
                .value_name("NAME")
                .help("Display name to log in with")
                .default_value("Traveler"),
        )
        .arg(
            Arg::new("email")
                .short('e')
                .long("email")
                .value_name("EMAIL")
                .help("Email to log in with, sent as the requester id")
                .default_value("traveler@localhost"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("Itinerary service base URL (or set TOUR_GUIDE_API_URL)"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Request timeout in seconds (or set TOUR_GUIDE_TIMEOUT_SECS)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the result as JSON"),
        )
        .arg(
            Arg::new("delivered-days")
                .long("delivered-days")
                .action(ArgAction::SetTrue)
                .help("Report the delivered day count on placeholder plans"),
        )
        .arg(
            Arg::new("print-schema")
                .long("print-schema")
                .action(ArgAction::SetTrue)
                .help("Print the JSON Schemas of the request and response bodies and exit"),
        )
}

/// CLI entry point for the tour-guide tool
pub async fn run() -> anyhow::Result<()> {
    // stdout carries the plan itself, so `--json` output stays parseable
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let matches = command().get_matches();

    if matches.get_flag("print-schema") {
        let documents = serde_json::json!({
            "request": schemas::request_schema()?,
            "response": schemas::plan_schema()?,
        });
        println!("{}", serde_json::to_string_pretty(&documents)?);
        return Ok(());
    }

    let mut config = TourGuideConfig::from_env()?;
    if let Some(base_url) = matches.get_one::<String>("base-url") {
        config = config.with_base_url(base_url.clone());
    }
    if let Some(raw) = matches.get_one::<String>("timeout") {
        let seconds: u64 = raw
            .parse()
            .with_context(|| format!("invalid --timeout value '{}'", raw))?;
        config = config.with_timeout(Some(Duration::from_secs(seconds)));
    }

    let policy = if matches.get_flag("delivered-days") {
        DayCountPolicy::Delivered
    } else {
        DayCountPolicy::Requested
    };
    let planner = TourPlanner::from_config(&config)?.with_day_count_policy(policy);

    let mut session = Session::new();
    session.login(UserIdentity::new(
        matches.get_one::<String>("name").cloned().unwrap_or_default(),
        matches.get_one::<String>("email").cloned().unwrap_or_default(),
    ));

    let city = matches
        .get_one::<String>("city")
        .context("a destination city is required")?;
    let days = matches.get_one::<String>("days").cloned();

    info!("Planning trip to {} via {}", city, config.tour_plan_url());

    let outcome = match planner.plan_for_session(&session, city, days).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Trip planning failed: {}", e);
            return Err(e.into());
        }
    };

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", render::render_outcome(&outcome, session.identity())?);
    }

    session.logout();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_definition() {
        command().debug_assert();
    }

    #[test]
    fn test_schema_flag_needs_no_city() {
        let matches = command()
            .try_get_matches_from(["tour-guide", "--print-schema"])
            .unwrap();
        assert!(matches.get_flag("print-schema"));
    }

    #[test]
    fn test_city_required_otherwise() {
        assert!(command().try_get_matches_from(["tour-guide"]).is_err());
        let matches = command()
            .try_get_matches_from(["tour-guide", "Paris", "-d", "5"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("days").map(String::as_str), Some("5"));
        assert_eq!(
            matches.get_one::<String>("email").map(String::as_str),
            Some("traveler@localhost")
        );
    }
}
