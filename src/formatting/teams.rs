use colored::*;

use super::utils::{format_relative_time, truncate};
use crate::models::{Team, TeamMember};

pub fn print_teams(teams: &[Team], format: &str) {
    if teams.is_empty() {
        println!("{}", "No teams found.".dimmed());
        return;
    }

    match format {
        "json" => match serde_json::to_string_pretty(&teams) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("{}", format!("Failed to render JSON: {}", e).red()),
        },
        "table" => {
            println!("{}", "─".repeat(100).dimmed());
            println!(
                "{:<8} {:<25} {:<35} {:<15} {:<15}",
                "ID".bold(),
                "Name".bold(),
                "Remark".bold(),
                "Creator".bold(),
                "Created".bold()
            );
            println!("{}", "─".repeat(100).dimmed());

            for team in teams {
                println!(
                    "{:<8} {:<25} {:<35} {:<15} {:<15}",
                    team.id.to_string().blue(),
                    truncate(&team.name, 25),
                    team.remark.as_deref().unwrap_or("").dimmed(),
                    team.creator.as_deref().unwrap_or("-"),
                    team.create_time
                        .as_deref()
                        .map(format_relative_time)
                        .unwrap_or_else(|| "-".to_string())
                );
            }
            println!("{}", "─".repeat(100).dimmed());
        }
        _ => {
            for team in teams {
                println!(
                    "{} {} {}",
                    team.id.to_string().blue(),
                    team.name.bold(),
                    team.remark.as_deref().unwrap_or("").dimmed()
                );
            }
        }
    }
}

pub fn print_team_members(members: &[TeamMember]) {
    if members.is_empty() {
        println!("{}", "No members found.".dimmed());
        return;
    }

    for member in members {
        println!(
            "{} {} {}",
            member.account_id.to_string().blue(),
            member.username.as_deref().unwrap_or("(unknown)").green(),
            member
                .create_time
                .as_deref()
                .map(format_relative_time)
                .unwrap_or_default()
                .dimmed()
        );
    }
}

pub fn print_team_tag_ids(tag_ids: &[u64]) {
    if tag_ids.is_empty() {
        println!("{}", "No tags assigned to this team.".dimmed());
        return;
    }

    let rendered: Vec<String> = tag_ids.iter().map(|id| id.to_string()).collect();
    println!("Assigned tag trees: {}", rendered.join(", ").cyan());
}
