use clap::Parser;
use std::io;
use std::path::Path;

use huli::catalog::{catalog_stats, load_entries, load_tag_categories};
use huli::{apply_filters, highlight, FilterState, TagCategoryMap, PAGE_SIZE};

mod cli;
use cli::display::{color, field_badge, highlight_marker, score_value, BOLD, DIM, GRAY};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            catalog,
            query,
            tag_map,
            category,
            tag,
            letter,
            index_letter,
            number,
            page,
            facets,
        } => {
            let state = FilterState {
                letters: letter,
                index_letters: index_letter,
                categories: category,
                tags: tag,
                id_query: number.unwrap_or_default(),
                query,
                page,
            };
            run_search(&catalog, tag_map.as_deref(), state, facets)
        }
        Commands::Inspect { catalog } => run_inspect(&catalog),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run_search(
    catalog_path: &str,
    tag_map_path: Option<&str>,
    mut state: FilterState,
    show_facets: bool,
) -> io::Result<()> {
    let entries = load_entries(Path::new(catalog_path))?;
    let tag_categories: TagCategoryMap = match tag_map_path {
        Some(path) => load_tag_categories(Path::new(path))?,
        None => TagCategoryMap::new(),
    };

    // The engine returns an empty page for an out-of-range page number;
    // clamping to the last page is friendlier at the command line.
    state.page = state.page.max(1);
    let mut outcome = apply_filters(&entries, &state, &tag_categories);
    if outcome.total_pages > 0 && state.page > outcome.total_pages {
        state.page = outcome.total_pages;
        outcome = apply_filters(&entries, &state, &tag_categories);
    }

    if outcome.total_filtered == 0 {
        println!("no matching entries");
        return Ok(());
    }

    let marker = highlight_marker();
    let want_highlight = state.query.chars().count() >= 2;

    for result in &outcome.page {
        let entry = &result.entry;
        let primary = if want_highlight {
            highlight(&entry.primary_text, &state.query, &marker)
        } else {
            entry.primary_text.clone()
        };

        let badges: String = result
            .matched_fields
            .iter()
            .map(|&f| field_badge(f))
            .collect::<Vec<_>>()
            .join(" ");

        println!(
            "{} {} {}  {}",
            score_value(result.relevance_score),
            color(DIM, &format!("#{:<4}", entry.id)),
            color(BOLD, &primary),
            badges
        );
        if let Some(translation) = &entry.translation {
            let line = if want_highlight {
                highlight(translation, &state.query, &marker)
            } else {
                translation.clone()
            };
            println!("         {}", line);
        }
        if let Some(gloss) = &entry.gloss {
            println!("         {}", color(GRAY, gloss));
        }
        if !entry.tags.is_empty() {
            println!("         {}", color(DIM, &entry.tags.join(", ")));
        }
    }

    println!();
    println!(
        "{}",
        color(
            DIM,
            &format!(
                "page {}/{} — {} entries ({} per page)",
                state.page.min(outcome.total_pages.max(1)),
                outcome.total_pages,
                outcome.total_filtered,
                PAGE_SIZE
            )
        )
    );

    if show_facets {
        println!();
        print_facet_row("categories", &outcome.facets.categories);
        print_facet_row("tags", &outcome.facets.tags);
        print_facet_row("letters", &outcome.facets.letters);
        print_facet_row("index letters", &outcome.facets.index_letters);
    }

    Ok(())
}

fn print_facet_row(label: &str, values: &[String]) {
    if values.is_empty() {
        return;
    }
    println!("{} {}", color(BOLD, &format!("{:>13}:", label)), values.join(", "));
}

fn run_inspect(catalog_path: &str) -> io::Result<()> {
    let entries = load_entries(Path::new(catalog_path))?;
    let stats = catalog_stats(&entries);

    println!("{}", color(BOLD, catalog_path));
    println!("  entries:           {}", stats.entries);
    println!("  with translation:  {}", stats.with_translation);
    println!("  with gloss:        {}", stats.with_gloss);
    println!("  tagged:            {}", stats.tagged);
    println!("  distinct tags:     {}", stats.distinct_tags);

    Ok(())
}
