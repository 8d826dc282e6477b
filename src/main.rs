use anyhow::Context;
use std::env;
use tracing_subscriber::EnvFilter;

use minutes_tracker_client::config::ClientConfig;
use minutes_tracker_client::http::HttpBackend;
use minutes_tracker_client::models::SearchCriteria;
use minutes_tracker_client::tracker::Tracker;
use minutes_tracker_client::utils::{parse_date, parse_time};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // load environment variables
    dotenv::dotenv().ok();

    let config = ClientConfig::from_env().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    let backend = HttpBackend::new(&config).context("Failed to build HTTP client")?;
    let mut tracker = Tracker::new(backend, config);

    tracker.refresh_profile().await.ok();

    let criteria = criteria_from_env()?;
    let page = env::var("SEARCH_PAGE")
        .ok()
        .map(|page| page.parse::<u32>())
        .transpose()
        .context("SEARCH_PAGE must be a positive number")?;

    tracker.search(criteria, page).await.ok();

    print_state(&tracker);
    Ok(())
}

fn criteria_from_env() -> anyhow::Result<SearchCriteria> {
    let date = |key: &str| env::var(key).ok().map(|v| parse_date(&v)).transpose();
    let time = |key: &str| env::var(key).ok().map(|v| parse_time(&v)).transpose();

    Ok(SearchCriteria {
        from_date: date("SEARCH_FROM_DATE")?,
        from_time: time("SEARCH_FROM_TIME")?,
        to_date: date("SEARCH_TO_DATE")?,
        to_time: time("SEARCH_TO_TIME")?,
    })
}

fn print_state(tracker: &Tracker<HttpBackend>) {
    let state = tracker.state();
    let page = state.search.page();

    println!(
        "{} | max {} min/day | today {} | {}",
        state.profile.user_name,
        state.profile.max_minutes_per_day,
        state
            .profile
            .todays_minutes
            .map(|m| m.to_string())
            .unwrap_or_else(|| "None".to_string()),
        state.status.as_str()
    );

    if let Some(error) = state.notices.error() {
        println!("error: {}", error);
    }
    if let Some(info) = state.notices.info() {
        println!("{}", info);
    }

    for record in state.working_set.visible_records() {
        println!(
            "{:>6}  {:<17} {:>5}  {}",
            record.id.map(|id| id.to_string()).unwrap_or_default(),
            record.datetime.as_deref().unwrap_or(""),
            record.minutes.map(|m| m.to_string()).unwrap_or_default(),
            record.description.as_deref().unwrap_or("")
        );
    }

    println!("page {} of {}", page.current_page, page.total_pages);
}
