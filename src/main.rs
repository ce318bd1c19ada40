use std::process;

use clap::{Arg, Command};

use tagops_cli::commands::auth::handle_auth;
use tagops_cli::commands::members::{handle_members_add, handle_members_list, handle_members_remove};
use tagops_cli::commands::tags::{handle_tag_delete, handle_tag_save, handle_tags};
use tagops_cli::commands::team_tags::{handle_team_tags_get, handle_team_tags_set};
use tagops_cli::commands::teams::{handle_team_delete, handle_team_save, handle_teams};
use tagops_cli::logging::{init_logging, log_error, log_panic_info};

fn team_id_arg() -> Arg {
    Arg::new("team-id")
        .value_name("TEAM_ID")
        .help("Team ID")
        .required(true)
        .index(1)
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }
    std::panic::set_hook(Box::new(|info| log_panic_info(info)));

    let app = Command::new("tagops")
        .about("tagops - Manage tag trees and teams on the ops console")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("auth")
                .about("Configure console credentials")
                .arg(
                    Arg::new("url")
                        .long("url")
                        .value_name("URL")
                        .help("Console API base URL")
                        .required(false),
                )
                .arg(
                    Arg::new("token")
                        .long("token")
                        .value_name("TOKEN")
                        .help("Set your console API token")
                        .required(false),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show current configuration")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("tags")
                .about("List and manage tag trees")
                .arg(
                    Arg::new("account")
                        .long("account")
                        .help("Show tags associated with the calling account")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("query")
                        .long("query")
                        .short('q')
                        .value_name("KEY=VALUE")
                        .help("Filter tag trees by query parameters")
                        .action(clap::ArgAction::Append),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Output format: simple, table, json")
                        .default_value("simple"),
                )
                .subcommand(
                    Command::new("save")
                        .about("Create or update a tag tree")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .value_name("ID")
                                .help("Existing tag tree ID (update)"),
                        )
                        .arg(
                            Arg::new("parent")
                                .long("parent")
                                .short('p')
                                .value_name("PID")
                                .help("Parent tag tree ID (0 for root)"),
                        )
                        .arg(
                            Arg::new("code")
                                .long("code")
                                .short('c')
                                .value_name("CODE")
                                .help("Tag code"),
                        )
                        .arg(
                            Arg::new("name")
                                .long("name")
                                .short('n')
                                .value_name("NAME")
                                .help("Tag name"),
                        )
                        .arg(
                            Arg::new("remark")
                                .long("remark")
                                .value_name("REMARK")
                                .help("Free-form remark"),
                        ),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete a tag tree")
                        .arg(
                            Arg::new("id")
                                .value_name("ID")
                                .help("Tag tree ID to delete")
                                .required(true)
                                .index(1),
                        ),
                ),
        )
        .subcommand(
            Command::new("teams")
                .about("List and manage teams")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Output format: simple, table, json")
                        .default_value("simple"),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .short('l')
                        .value_name("NUMBER")
                        .help("Limit number of results")
                        .default_value("50"),
                )
                .subcommand(
                    Command::new("save")
                        .about("Create or update a team")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .value_name("ID")
                                .help("Existing team ID (update)"),
                        )
                        .arg(
                            Arg::new("name")
                                .long("name")
                                .short('n')
                                .value_name("NAME")
                                .help("Team name"),
                        )
                        .arg(
                            Arg::new("remark")
                                .long("remark")
                                .value_name("REMARK")
                                .help("Free-form remark"),
                        ),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete a team")
                        .arg(
                            Arg::new("id")
                                .value_name("ID")
                                .help("Team ID to delete")
                                .required(true)
                                .index(1),
                        ),
                ),
        )
        .subcommand(
            Command::new("members")
                .about("Manage team members")
                .subcommand_required(true)
                .subcommand(
                    Command::new("list")
                        .about("List members of a team")
                        .arg(team_id_arg())
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .short('l')
                                .value_name("NUMBER")
                                .help("Limit number of results")
                                .default_value("50"),
                        ),
                )
                .subcommand(
                    Command::new("add")
                        .about("Add an account to a team")
                        .arg(team_id_arg())
                        .arg(
                            Arg::new("account-id")
                                .value_name("ACCOUNT_ID")
                                .help("Account ID to add")
                                .required(true)
                                .index(2),
                        ),
                )
                .subcommand(
                    Command::new("remove")
                        .about("Remove an account from a team")
                        .arg(team_id_arg())
                        .arg(
                            Arg::new("account-id")
                                .value_name("ACCOUNT_ID")
                                .help("Account ID to remove")
                                .required(true)
                                .index(2),
                        ),
                ),
        )
        .subcommand(
            Command::new("team-tags")
                .about("Manage a team's tag-tree assignments")
                .subcommand_required(true)
                .subcommand(
                    Command::new("get")
                        .about("Show tag trees assigned to a team")
                        .arg(team_id_arg()),
                )
                .subcommand(
                    Command::new("set")
                        .about("Replace a team's tag-tree assignments")
                        .arg(team_id_arg())
                        .arg(
                            Arg::new("tag-id")
                                .long("tag-id")
                                .short('t')
                                .value_name("TAG_ID")
                                .help("Tag tree IDs to assign")
                                .action(clap::ArgAction::Append),
                        ),
                ),
        );

    let matches = app.get_matches();

    let result = match matches.subcommand() {
        Some(("auth", sub_matches)) => handle_auth(sub_matches).await,
        Some(("tags", sub_matches)) => match sub_matches.subcommand() {
            Some(("save", save_matches)) => handle_tag_save(save_matches).await,
            Some(("delete", delete_matches)) => handle_tag_delete(delete_matches).await,
            None => handle_tags(sub_matches).await,
            _ => {
                eprintln!("Unknown tags subcommand. Use 'tagops tags --help' for available options.");
                process::exit(1);
            }
        },
        Some(("teams", sub_matches)) => match sub_matches.subcommand() {
            Some(("save", save_matches)) => handle_team_save(save_matches).await,
            Some(("delete", delete_matches)) => handle_team_delete(delete_matches).await,
            None => handle_teams(sub_matches).await,
            _ => {
                eprintln!("Unknown teams subcommand. Use 'tagops teams --help' for available options.");
                process::exit(1);
            }
        },
        Some(("members", sub_matches)) => match sub_matches.subcommand() {
            Some(("list", list_matches)) => handle_members_list(list_matches).await,
            Some(("add", add_matches)) => handle_members_add(add_matches).await,
            Some(("remove", remove_matches)) => handle_members_remove(remove_matches).await,
            _ => {
                eprintln!("Unknown members subcommand. Use 'tagops members --help' for available options.");
                process::exit(1);
            }
        },
        Some(("team-tags", sub_matches)) => match sub_matches.subcommand() {
            Some(("get", get_matches)) => handle_team_tags_get(get_matches).await,
            Some(("set", set_matches)) => handle_team_tags_set(set_matches).await,
            _ => {
                eprintln!("Unknown team-tags subcommand. Use 'tagops team-tags --help' for available options.");
                process::exit(1);
            }
        },
        _ => {
            eprintln!("Unknown command. Use 'tagops --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        log_error(&format!("Command failed: {}", e));
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
