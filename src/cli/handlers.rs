// src/cli/handlers.rs
//! Command handlers: run the pipeline and print human or JSON output.

use anyhow::Result;
use colored::Colorize;

use crate::cli::args::InputArgs;
use crate::cli::input;
use crate::exit::TitleGraphExit;
use crate::pipeline::{rank_communities, CommunityReport, Pipeline};
use crate::render::{RenderOutcome, RenderRequest};
use crate::summary::{self, WordCount};

/// Edges listed in human output before truncating.
const MAX_EDGES_SHOWN: usize = 15;

/// Handles `cooccurrence`.
///
/// # Errors
/// Returns error if the input cannot be read or the community is not found.
pub fn handle_cooccurrence(pipeline: &Pipeline, args: &InputArgs) -> Result<TitleGraphExit> {
    let batches = input::load_batches(&args.input)?;
    let (community, documents) = input::select(&batches, args.community.as_deref())?;
    let outcome = pipeline.cooccurrence(community, documents);
    emit_outcome(&outcome, args.json)
}

/// Handles `keywords`.
///
/// # Errors
/// Returns error if the input cannot be read or the community is not found.
pub fn handle_keywords(pipeline: &Pipeline, args: &InputArgs) -> Result<TitleGraphExit> {
    let batches = input::load_batches(&args.input)?;
    let (community, documents) = input::select(&batches, args.community.as_deref())?;
    let outcome = pipeline.similarity(community, documents);
    emit_outcome(&outcome, args.json)
}

/// Handles `top-words`.
///
/// # Errors
/// Returns error if the input cannot be read or the community is not found.
pub fn handle_top_words(pipeline: &Pipeline, args: &InputArgs) -> Result<TitleGraphExit> {
    let batches = input::load_batches(&args.input)?;
    let (community, documents) = input::select(&batches, args.community.as_deref())?;
    let words = summary::top_words(documents, pipeline.stopwords(), pipeline.config().top_words);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&words)?);
    } else {
        header(&format!("Top Words in {community}"));
        print_words(&words);
    }
    Ok(TitleGraphExit::Success)
}

/// Handles `report`: every community in the file, analyzed in parallel and
/// listed by karma.
///
/// # Errors
/// Returns error if the input cannot be read or serialization fails.
pub fn handle_report(
    pipeline: &Pipeline,
    path: &std::path::Path,
    json: bool,
) -> Result<TitleGraphExit> {
    let batches = input::load_batches(path)?;
    let mut reports = pipeline.analyze_all(&batches);
    rank_communities(&mut reports);

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print_ranking(&reports);
        for report in &reports {
            print_report(report);
        }
    }
    Ok(TitleGraphExit::Success)
}

fn emit_outcome(outcome: &RenderOutcome, json: bool) -> Result<TitleGraphExit> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    } else {
        print_outcome(outcome);
    }
    Ok(if outcome.is_empty() {
        TitleGraphExit::EmptyGraph
    } else {
        TitleGraphExit::Success
    })
}

fn header(title: &str) {
    println!();
    println!("{}", "─".repeat(60).dimmed());
    println!(" {}", title.bold());
    println!("{}", "─".repeat(60).dimmed());
}

fn print_outcome(outcome: &RenderOutcome) {
    header(outcome.title());
    match outcome {
        RenderOutcome::Empty { reason, .. } => {
            println!("  {} {reason}", "No graph:".yellow());
        }
        RenderOutcome::Ready(request) => print_request(request),
    }
}

fn print_request(request: &RenderRequest) {
    println!("  {} {}", "Nodes:".white(), request.nodes.len());
    println!("  {} {}", "Edges:".white(), request.edges.len());
    if request.community_count > 0 {
        println!("  {} {}", "Communities:".white(), request.community_count);
    }
    println!();

    let mut edges: Vec<_> = request.edges.iter().collect();
    edges.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    for edge in edges.iter().take(MAX_EDGES_SHOWN) {
        println!(
            "  {:>8.3}  {} {} {}",
            edge.weight,
            edge.source.cyan(),
            "<->".dimmed(),
            edge.target.cyan()
        );
    }
    if edges.len() > MAX_EDGES_SHOWN {
        println!("  {}", format!("... {} more", edges.len() - MAX_EDGES_SHOWN).dimmed());
    }
}

fn print_words(words: &[WordCount]) {
    if words.is_empty() {
        println!("  {}", "No words left after stop-word removal.".yellow());
    }
    for (rank, entry) in words.iter().enumerate() {
        println!("  {:>2}. {:<20} {}", rank + 1, entry.word.cyan(), entry.count);
    }
}

fn print_ranking(reports: &[CommunityReport]) {
    header("Communities by Total Karma");
    for (rank, report) in reports.iter().enumerate() {
        println!(
            "  {:>2}. {:<20} {:>8} karma  {:>5} posts",
            rank + 1,
            report.community.cyan(),
            report.stats.karma,
            report.stats.posts
        );
    }
}

fn print_report(report: &CommunityReport) {
    header(&format!("Report for {}", report.community));
    let stats = &report.stats;
    println!("  {} {}", "Posts:".white(), stats.posts);
    println!("  {} {}", "Karma:".white(), stats.karma);
    println!("  {} {}", "Comments:".white(), stats.comments);
    println!(
        "  {} {} ({:.1}%) / {} ({:.1}%)",
        "SFW / NSFW:".white(),
        stats.sfw_posts,
        stats.sfw_percentage(),
        stats.nsfw_posts.to_string().red(),
        stats.nsfw_percentage()
    );

    println!();
    println!("  {}", "Top words".bold());
    print_words(&report.top_words);

    println!();
    println!("  {}", "Top authors".bold());
    for (rank, entry) in report.top_authors.iter().enumerate() {
        println!("  {:>2}. {:<20} {}", rank + 1, entry.author.cyan(), entry.karma);
    }

    print_outcome(&report.cooccurrence);
    print_outcome(&report.similarity);
}
