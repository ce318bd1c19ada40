use crate::client::ConsoleClient;
use crate::config::{load_config, save_config};
use crate::constants::DEFAULT_BASE_URL;
use clap::ArgMatches;

pub async fn handle_auth(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let url = matches.get_one::<String>("url");
    let token = matches.get_one::<String>("token");

    if url.is_some() || token.is_some() {
        let mut config = load_config();
        if let Some(url) = url {
            config.base_url = Some(url.trim_end_matches('/').to_string());
        }
        if let Some(token) = token {
            config.token = Some(token.clone());
        }
        save_config(&config)?;
        println!("Configuration saved successfully!");

        // Test the credentials against the console
        if let Some(token) = config.token {
            let base_url = config
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
            let client = ConsoleClient::new(base_url, token)?;
            match client.get_account_tags().await {
                Ok(tags) => println!("✅ Connected, account sees {} tags", tags.len()),
                Err(e) => println!("❌ Failed to authenticate: {}", e),
            }
        }
    } else if matches.get_flag("show") {
        let config = load_config();
        match config.base_url {
            Some(url) => println!("Console URL: {}", url),
            None => println!("No console URL configured"),
        }
        match config.token {
            Some(token) if token.len() > 12 => {
                println!("Token: {}...{}", &token[..8], &token[token.len() - 4..])
            }
            Some(_) => println!("Token: (configured)"),
            None => println!("No token configured"),
        }
    } else {
        println!("Usage: tagops auth --url <URL> --token <TOKEN> or tagops auth --show");
    }
    Ok(())
}
