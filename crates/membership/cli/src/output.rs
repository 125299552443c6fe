//! Output formatting utilities

use crate::error::CliResult;
use colored::*;
use membership_runtime::MemberListing;
use membership_types::Member;
use serde::Serialize;
use tabled::builder::Builder;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Column headers for a listing; `name` and `added` only when some row uses them
fn member_headers(listing: &MemberListing) -> Vec<&'static str> {
    let mut headers = vec!["login"];
    if listing.show_names {
        headers.push("name");
    }
    headers.extend(["role", "id"]);
    if has_added_dates(listing) {
        headers.push("added");
    }
    headers
}

fn has_added_dates(listing: &MemberListing) -> bool {
    listing.members.iter().any(|m| m.added_at.is_some())
}

/// One table row per member, matching [`member_headers`]
fn member_row(member: &Member, show_names: bool, show_added: bool) -> Vec<String> {
    let mut row = vec![member.login.clone().unwrap_or_else(|| "-".to_string())];
    if show_names {
        row.push(member.name.clone().unwrap_or_default());
    }
    let role = if member.is_owner {
        "owner".to_string()
    } else {
        member.role.to_string()
    };
    row.push(role);
    row.push(member.id.to_string());
    if show_added {
        row.push(
            member
                .added_at
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        );
    }
    row
}

/// Render a listing as a table
pub fn members_table(listing: &MemberListing) -> String {
    let show_added = has_added_dates(listing);
    let mut builder = Builder::default();
    builder.push_record(member_headers(listing));
    for member in &listing.members {
        builder.push_record(member_row(member, listing.show_names, show_added));
    }
    builder.build().to_string()
}

/// Print a member listing in the specified format
pub fn print_members(listing: &MemberListing, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            if listing.members.is_empty() {
                println!("{}", "No members".dimmed());
            } else {
                println!("{}", members_table(listing));
            }
            Ok(())
        }
        _ => print_single(listing, format),
    }
}

/// Print a single item in the specified format
pub fn print_single<T: Serialize>(data: &T, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table | OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(data)?);
        }
    }
    Ok(())
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}
