use clap::ArgMatches;

use crate::client::ConsoleClient;
use crate::config::get_credentials;
use crate::formatting::{print_account_tags, print_tag_trees};
use crate::models::SaveTagTree;
use crate::query::parse_query_pairs;

fn connect() -> Result<ConsoleClient, Box<dyn std::error::Error>> {
    let (base_url, token) = get_credentials()?;
    Ok(ConsoleClient::new(base_url, token)?)
}

pub async fn handle_tags(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let client = connect()?;
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("simple");

    if matches.get_flag("account") {
        let paths = client.get_account_tags().await?;
        print_account_tags(&paths);
        return Ok(());
    }

    let tags = if let Some(pairs) = matches.get_many::<String>("query") {
        let query = parse_query_pairs(pairs.map(String::as_str))?;
        client.list_by_query(query).await?
    } else {
        client.get_tag_trees().await?
    };

    print_tag_trees(&tags, format);
    Ok(())
}

pub async fn handle_tag_save(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let client = connect()?;

    let tag = SaveTagTree {
        id: matches
            .get_one::<String>("id")
            .map(|v| v.parse::<u64>())
            .transpose()?,
        pid: matches
            .get_one::<String>("parent")
            .map(|v| v.parse::<u64>())
            .transpose()?
            .unwrap_or(0),
        code: matches
            .get_one::<String>("code")
            .ok_or("Tag code is required")?
            .clone(),
        name: matches
            .get_one::<String>("name")
            .ok_or("Tag name is required")?
            .clone(),
        remark: matches.get_one::<String>("remark").cloned(),
    };

    client.save_tag_tree(&tag).await?;
    println!("✅ Tag tree saved successfully!");
    Ok(())
}

pub async fn handle_tag_delete(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let client = connect()?;

    let id: u64 = matches
        .get_one::<String>("id")
        .ok_or("Tag tree ID is required")?
        .parse()?;

    client.del_tag_tree(id).await?;
    println!("✅ Tag tree {} deleted", id);
    Ok(())
}
