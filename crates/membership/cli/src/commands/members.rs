//! Member commands

use crate::client::MembersClient;
use crate::error::{CliError, CliResult};
use crate::output::{self, print_error, print_success, OutputFormat};
use clap::Subcommand;
use indicatif::{ProgressBar, ProgressStyle};
use membership_runtime::MembershipService;
use membership_types::{AppliedChange, ApplyReport, ChangeOutcome, DomainId, IdentifierKind, Role};
use std::time::Duration;

/// Member subcommands
#[derive(Subcommand)]
pub enum MembersCommands {
    /// List the members of a domain
    #[command(alias = "ls")]
    List,

    /// Add members, or change the role of existing members
    Add {
        /// Logins to add (member ids with --ids)
        members: Vec<String>,

        /// Role to grant (view, edit, admin)
        #[arg(short, long)]
        role: Option<String>,

        /// Treat MEMBERS as member ids instead of logins
        #[arg(long)]
        ids: bool,
    },

    /// Remove members
    #[command(alias = "rm")]
    Remove {
        /// Logins to remove (member ids with --ids)
        members: Vec<String>,

        /// Treat MEMBERS as member ids instead of logins
        #[arg(long)]
        ids: bool,

        /// Remove every member except the owner
        #[arg(short, long, conflicts_with = "members")]
        all: bool,

        /// Skip confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

fn identifier_kind(ids: bool) -> IdentifierKind {
    if ids {
        IdentifierKind::Id
    } else {
        IdentifierKind::Login
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

fn describe(change: &AppliedChange) -> String {
    let who = &change.entry.value;
    match change.outcome {
        ChangeOutcome::Inserted { role } => format!("Added {} as {}", who, role),
        ChangeOutcome::RoleUpdated { from, to } => {
            format!("Changed {} from {} to {}", who, from, to)
        }
        ChangeOutcome::Unchanged { role } => format!("{} is already {}", who, role),
        ChangeOutcome::Removed => format!("Removed {}", who),
        ChangeOutcome::Absent => format!("{} is not a member", who),
    }
}

/// One-line summary of a successful `add`, counted per outcome
fn add_summary(report: &ApplyReport, domain: &DomainId, role: Role) -> String {
    let mut added = 0;
    let mut updated = 0;
    let mut unchanged = 0;
    for change in &report.succeeded {
        match change.outcome {
            ChangeOutcome::Inserted { .. } => added += 1,
            ChangeOutcome::RoleUpdated { .. } => updated += 1,
            _ => unchanged += 1,
        }
    }

    let counts: Vec<String> = [(added, "added"), (updated, "updated"), (unchanged, "unchanged")]
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, label)| format!("{} {}", count, label))
        .collect();

    format!(
        "Set role {} for {} on {} ({})",
        role,
        report.succeeded_identifiers().join(", "),
        domain,
        counts.join(", ")
    )
}

/// One-line summary of a successful `remove`, naming identifiers that were
/// not members
fn remove_summary(report: &ApplyReport, domain: &DomainId) -> String {
    let summary = format!(
        "Removed {} from {}",
        plural(report.changed_count(), "member"),
        domain
    );

    let absent: Vec<&str> = report
        .succeeded
        .iter()
        .filter(|c| c.outcome == ChangeOutcome::Absent)
        .map(|c| c.entry.value.as_str())
        .collect();
    if absent.is_empty() {
        summary
    } else {
        format!("{} (not members: {})", summary, absent.join(", "))
    }
}

/// Print the outcome of a mutating command.
///
/// A fully successful request prints a single confirmation line. Otherwise
/// every entry is listed and the command fails.
fn report_changes(report: &ApplyReport, summary: &str, format: OutputFormat) -> CliResult<()> {
    if format != OutputFormat::Table {
        output::print_single(report, format)?;
    } else if report.is_success() {
        print_success(summary);
    } else {
        for change in &report.succeeded {
            print_success(&describe(change));
        }
        for failure in &report.failed {
            print_error(&format!("{}: {}", failure.entry.value, failure.error));
        }
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(CliError::ChangesRejected {
            failed: report.failed.len(),
            total: report.succeeded.len() + report.failed.len(),
        })
    }
}

fn spinner(format: OutputFormat, message: &str) -> Option<ProgressBar> {
    if format != OutputFormat::Table {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}

/// Execute a member command
pub async fn execute(
    command: MembersCommands,
    service: &MembershipService<MembersClient>,
    domain: &DomainId,
    format: OutputFormat,
) -> CliResult<()> {
    match command {
        MembersCommands::List => {
            let listing = service.list(domain).await?;
            output::print_members(&listing, format)
        }

        MembersCommands::Add {
            members,
            role,
            ids,
        } => {
            let role = role.as_deref().map(Role::parse).transpose()?;
            let role_name = role.unwrap_or(service.reconciler().default_role());

            let pb = spinner(format, &format!("Updating members of {}...", domain));
            let result = service.add(domain, &members, identifier_kind(ids), role).await;
            if let Some(pb) = pb {
                pb.finish_and_clear();
            }
            let report = result?;

            report_changes(&report, &add_summary(&report, domain, role_name), format)
        }

        MembersCommands::Remove {
            members,
            ids,
            all,
            yes,
        } => {
            if all && !yes {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!(
                        "Remove every member except the owner from {}?",
                        domain
                    ))
                    .default(false)
                    .interact()?;

                if !confirm {
                    return Err(CliError::Aborted);
                }
            }

            let pb = spinner(format, &format!("Updating members of {}...", domain));
            let result = service
                .remove(domain, &members, identifier_kind(ids), all)
                .await;
            if let Some(pb) = pb {
                pb.finish_and_clear();
            }
            let report = result?;
            report_changes(&report, &remove_summary(&report, domain), format)
        }
    }
}
