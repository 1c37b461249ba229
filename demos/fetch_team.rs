use liquipedia_scraper::LiquipediaClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> serde_json::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let team = args.next().unwrap_or_else(|| "Team_Liquid".to_string());
    let game = args.next().unwrap_or_else(|| "valorant".to_string());
    let date = args.next();

    let client = LiquipediaClient::new();

    let matches = client
        .get_upcoming_matches(&team, &game, date.as_deref())
        .await;
    println!("{}", serde_json::to_string_pretty(&matches)?);

    let players = client.get_players(&team, &game).await;
    println!("{}", serde_json::to_string_pretty(&players)?);

    let results = client
        .get_tournament_results(&team, &game, date.as_deref())
        .await;
    println!("{}", serde_json::to_string_pretty(&results)?);

    Ok(())
}
