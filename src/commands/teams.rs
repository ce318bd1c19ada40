use clap::ArgMatches;

use crate::client::ConsoleClient;
use crate::config::get_credentials;
use crate::formatting::print_teams;
use crate::models::SaveTeam;

fn connect() -> Result<ConsoleClient, Box<dyn std::error::Error>> {
    let (base_url, token) = get_credentials()?;
    Ok(ConsoleClient::new(base_url, token)?)
}

pub async fn handle_teams(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let client = connect()?;
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("simple");

    let limit = matches
        .get_one::<String>("limit")
        .map(|v| v.parse::<u64>())
        .transpose()?;

    let page = client.get_teams(None, limit).await?;

    if page.list.is_empty() {
        println!("No teams found.");
    } else {
        println!("Found {} teams:", page.total);
        print_teams(&page.list, format);
    }

    Ok(())
}

pub async fn handle_team_save(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let client = connect()?;

    let team = SaveTeam {
        id: matches
            .get_one::<String>("id")
            .map(|v| v.parse::<u64>())
            .transpose()?,
        name: matches
            .get_one::<String>("name")
            .ok_or("Team name is required")?
            .clone(),
        remark: matches.get_one::<String>("remark").cloned(),
    };

    client.save_team(&team).await?;
    println!("✅ Team saved successfully!");
    Ok(())
}

pub async fn handle_team_delete(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let client = connect()?;

    let id: u64 = matches
        .get_one::<String>("id")
        .ok_or("Team ID is required")?
        .parse()?;

    client.del_team(id).await?;
    println!("✅ Team {} deleted", id);
    Ok(())
}
