//! Browse command implementation.
//!
//! An interactive loop over a [`BrowseSession`]. Input lines and finished
//! Wikipedia lookups are handled one at a time on the same task; lookups run
//! in the background and report back through a channel, where the session
//! drops any result whose selection has changed in the meantime.

use super::{spinner, summary_resolver};
use crate::cli::render;
use crate::core::detail::SummaryTicket;
use crate::core::navigation::Mode;
use crate::core::session::BrowseSession;
use crate::models::config::Config;
use crate::models::summary::SummaryResult;
use crate::services::catalog::{CatalogClient, CatalogService};
use crate::services::http::HttpFetch;
use crate::services::wikipedia::SummaryResolver;
use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

type SummaryMessage = (SummaryTicket, Option<SummaryResult>);

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Search(String),
    /// Zero-based index into the active list.
    Select(usize),
    Related,
    Back,
    Show,
    Help,
    Quit,
}

/// Parse an input line.
///
/// Numbers select from the list, a few keywords navigate, anything else is a
/// search. A leading `/` forces a search, e.g. `/related`.
pub fn parse_command(line: &str) -> BrowseCommand {
    let line = line.trim();

    if let Some(term) = line.strip_prefix('/') {
        return BrowseCommand::Search(term.trim().to_string());
    }
    if let Some(term) = line.strip_prefix("search ") {
        return BrowseCommand::Search(term.trim().to_string());
    }
    if let Ok(n) = line.parse::<usize>() {
        if n > 0 {
            return BrowseCommand::Select(n - 1);
        }
    }

    match line.to_lowercase().as_str() {
        "" | "list" | "l" => BrowseCommand::Show,
        "related" | "r" => BrowseCommand::Related,
        "back" | "b" => BrowseCommand::Back,
        "help" | "h" | "?" => BrowseCommand::Help,
        "quit" | "q" | "exit" => BrowseCommand::Quit,
        _ => BrowseCommand::Search(line.to_string()),
    }
}

/// Run the interactive browser.
pub async fn browse(config: &Config) -> Result<()> {
    let client = CatalogClient::new(config.catalog.clone())?;
    let resolver = Arc::new(summary_resolver(&config.wikipedia)?);
    let mut session = BrowseSession::new(client, &config.catalog);

    let (tx, mut rx) = mpsc::unbounded_channel::<SummaryMessage>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", "Movie Finder".bold().cyan());
    print_help();
    prompt();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let command = parse_command(&line);
                if command == BrowseCommand::Quit {
                    break;
                }
                if let Some(ticket) = apply(&mut session, command).await {
                    spawn_lookup(&resolver, ticket, tx.clone());
                }
                prompt();
            }
            Some((ticket, result)) = rx.recv() => {
                if session.commit_summary(&ticket, result) {
                    println!();
                    render::print_summary(session.summary());
                    prompt();
                }
            }
        }
    }

    Ok(())
}

/// Apply one command to the session and print the resulting view.
async fn apply<C: CatalogService>(
    session: &mut BrowseSession<C>,
    command: BrowseCommand,
) -> Option<SummaryTicket> {
    match command {
        BrowseCommand::Search(term) => {
            let pb = spinner("Searching...");
            let accepted = session.submit_search(&term).await;
            pb.finish_and_clear();
            if accepted {
                print_list(session);
            }
            None
        }
        BrowseCommand::Select(index) => {
            if index >= session.active_list().len() {
                println!("{}", format!("No movie #{} in the list.", index + 1).yellow());
                return None;
            }
            let pb = spinner("Loading...");
            let ticket = session.select_index(index).await;
            pb.finish_and_clear();
            if session.mode() == Mode::Related {
                print_list(session);
            }
            print_detail(session);
            ticket
        }
        BrowseCommand::Related => {
            if !session.can_show_related() {
                println!("{}", "Select a movie from the search results first.".yellow());
                return None;
            }
            let pb = spinner("Loading related movies...");
            session.show_related().await;
            pb.finish_and_clear();
            print_list(session);
            print_detail(session);
            None
        }
        BrowseCommand::Back => {
            if session.back_to_search().await {
                print_list(session);
            } else {
                println!("{}", "Already showing search results.".yellow());
            }
            None
        }
        BrowseCommand::Show => {
            print_list(session);
            print_detail(session);
            None
        }
        BrowseCommand::Help => {
            print_help();
            None
        }
        BrowseCommand::Quit => None,
    }
}

fn spawn_lookup<F>(
    resolver: &Arc<SummaryResolver<F>>,
    ticket: SummaryTicket,
    tx: mpsc::UnboundedSender<SummaryMessage>,
) where
    F: HttpFetch + 'static,
{
    let resolver = Arc::clone(resolver);
    tokio::spawn(async move {
        let result = resolver.resolve(&ticket.name).await;
        // The loop may have exited already
        let _ = tx.send((ticket, result));
    });
}

fn print_list<C: CatalogService>(session: &BrowseSession<C>) {
    println!();
    if session.is_loading() {
        println!("{}", "Loading...".dimmed());
    } else if session.load_failed().is_some() {
        println!("{}", session.header_label().bold().cyan());
        println!("{}", "Failed to load results.".red());
    } else {
        render::print_table(&session.header_label(), session.active_list());
    }
}

fn print_detail<C: CatalogService>(session: &BrowseSession<C>) {
    let Some(item) = session.displayed_item() else {
        println!();
        println!("{}", "Select a movie to see details.".dimmed());
        return;
    };

    println!();
    render::print_detail(item);
    render::print_summary(session.summary());

    println!();
    if session.can_show_related() {
        println!("{}", "[r] Related".green());
    }
    if session.mode() == Mode::Related {
        println!("{}", "[b] Back to Results".green());
    }
}

fn print_help() {
    println!("  <title> or /<title>   search the catalog");
    println!("  <number>              select a movie from the list");
    println!("  r, related            show movies related to the selection");
    println!("  b, back               back to the search results");
    println!("  l, list               show the current view again");
    println!("  q, quit               exit");
}

fn prompt() {
    print!("{} ", ">".bold());
    let _ = std::io::stdout().flush();
}
