use clap::ArgMatches;

use crate::client::ConsoleClient;
use crate::config::get_credentials;
use crate::formatting::print_team_members;
use crate::models::SaveTeamMember;

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

pub async fn handle_members_list(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let client = connect()?;
    let team_id = team_id(matches)?;

    let limit = matches
        .get_one::<String>("limit")
        .map(|v| v.parse::<u64>())
        .transpose()?;

    let page = client.get_team_members(team_id, None, limit).await?;

    if page.list.is_empty() {
        println!("No members in team {}.", team_id);
    } else {
        println!("Team {} has {} members:", team_id, page.total);
        print_team_members(&page.list);
    }

    Ok(())
}

pub async fn handle_members_add(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let client = connect()?;
    let team_id = team_id(matches)?;

    let account_id: u64 = matches
        .get_one::<String>("account-id")
        .ok_or("Account ID is required")?
        .parse()?;

    client
        .save_team_member(team_id, &SaveTeamMember { account_id })
        .await?;
    println!("✅ Account {} added to team {}", account_id, team_id);
    Ok(())
}

pub async fn handle_members_remove(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let client = connect()?;
    let team_id = team_id(matches)?;

    let account_id: u64 = matches
        .get_one::<String>("account-id")
        .ok_or("Account ID is required")?
        .parse()?;

    client.del_team_member(team_id, account_id).await?;
    println!("✅ Account {} removed from team {}", account_id, team_id);
    Ok(())
}
