use clap::ArgMatches;

use crate::client::ConsoleClient;
use crate::config::get_credentials;
use crate::formatting::print_team_tag_ids;
use crate::models::SaveTeamTags;

fn connect() -> Result<ConsoleClient, Box<dyn std::error::Error>> {
    let (base_url, token) = get_credentials()?;
    Ok(ConsoleClient::new(base_url, token)?)
}

fn team_id(matches: &ArgMatches) -> Result<u64, Box<dyn std::error::Error>> {
    Ok(matches
        .get_one::<String>("team-id")
        .ok_or("Team ID is required")?
        .parse()?)
}

pub async fn handle_team_tags_get(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let client = connect()?;
    let team_id = team_id(matches)?;

    let tag_ids = client.get_team_tag_ids(team_id).await?;
    print_team_tag_ids(&tag_ids);
    Ok(())
}

pub async fn handle_team_tags_set(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let client = connect()?;
    let team_id = team_id(matches)?;

    let tag_ids: Vec<u64> = matches
        .get_many::<String>("tag-id")
        .map(|ids| ids.map(|id| id.parse::<u64>()).collect())
        .transpose()?
        .unwrap_or_default();

    let count = tag_ids.len();
    client.save_team_tags(team_id, &SaveTeamTags { tag_ids }).await?;
    println!("✅ Assigned {} tags to team {}", count, team_id);
    Ok(())
}
