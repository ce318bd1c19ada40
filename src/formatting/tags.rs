use colored::*;

use super::utils::truncate;
use crate::models::TagTree;

pub fn print_tag_trees(tags: &[TagTree], format: &str) {
    if tags.is_empty() {
        println!("{}", "No tag trees found.".dimmed());
        return;
    }

    match format {
        "json" => match serde_json::to_string_pretty(&tags) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("{}", format!("Failed to render JSON: {}", e).red()),
        },
        "table" => {
            println!("{}", "─".repeat(90).dimmed());
            println!(
                "{:<8} {:<20} {:<30} {:<30}",
                "ID".bold(),
                "Code".bold(),
                "Name".bold(),
                "Remark".bold()
            );
            println!("{}", "─".repeat(90).dimmed());

            for tag in flatten(tags) {
                println!(
                    "{:<8} {:<20} {:<30} {:<30}",
                    tag.id.to_string().blue(),
                    tag.code.cyan(),
                    truncate(&tag.name, 30),
                    tag.remark.as_deref().unwrap_or("").dimmed()
                );
            }
            println!("{}", "─".repeat(90).dimmed());
        }
        _ => {
            for tag in tags {
                print_tree_node(tag, 0);
            }
        }
    }
}

fn print_tree_node(tag: &TagTree, depth: usize) {
    let indent = "  ".repeat(depth);
    println!(
        "{}{} {} {}",
        indent,
        tag.code.cyan(),
        tag.name,
        format!("#{}", tag.id).dimmed()
    );
    for child in &tag.children {
        print_tree_node(child, depth + 1);
    }
}

fn flatten(tags: &[TagTree]) -> Vec<&TagTree> {
    let mut out = Vec::new();
    let mut stack: Vec<&TagTree> = tags.iter().rev().collect();
    while let Some(tag) = stack.pop() {
        out.push(tag);
        for child in tag.children.iter().rev() {
            stack.push(child);
        }
    }
    out
}

pub fn print_account_tags(paths: &[String]) {
    if paths.is_empty() {
        println!("{}", "No tags associated with this account.".dimmed());
        return;
    }

    println!("Account has access to {} tags:", paths.len());
    for path in paths {
        println!("  {}", path.cyan());
    }
}
