use std::env;

use anyhow::{bail, Context};
use cinefinder_lib::modules::catalog::domain::ImageSize;
use cinefinder_lib::modules::catalog::RequestState;
use cinefinder_lib::shared::utils::init_logger;
use cinefinder_lib::CineFinder;

const USAGE: &str = "usage: cinefinder search <title> [page] | details <id> | favorite <id> | favorites";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let app = CineFinder::from_env().context("Failed to start CineFinder")?;
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("search") => {
            let query = args.get(1).map(String::as_str).unwrap_or_default();
            app.adapter.submit_search(query).await;
            if let Some(page) = args.get(2) {
                let page: i64 = page.parse().context("page must be a number")?;
                app.adapter.go_to_page(page).await;
            }
            print_search(&app).await;
        }
        Some("details") => {
            let id = parse_id(args.get(1))?;
            app.adapter.open_details(id).await;
            print_details(&app);
        }
        Some("favorite") => {
            let id = parse_id(args.get(1))?;
            app.adapter.open_details(id).await;
            match app.adapter.toggle_details_favorite().await {
                Some(true) => println!("Added {} to favorites", id),
                Some(false) => println!("Removed {} from favorites", id),
                None => print_details(&app),
            }
        }
        Some("favorites") => {
            let favorites = app.favorites.read().await.list();
            if favorites.is_empty() {
                println!("No favorites yet.");
            }
            for entry in favorites {
                let movie = entry.to_summary();
                println!(
                    "{:>8}  {} ({})  * {}",
                    movie.id,
                    movie.title,
                    movie.release_year().unwrap_or("-"),
                    movie.rating_label()
                );
            }
        }
        _ => bail!(USAGE),
    }

    app.adapter.shutdown().await;
    Ok(())
}

fn parse_id(raw: Option<&String>) -> anyhow::Result<u64> {
    raw.context(USAGE)?
        .parse()
        .context("movie id must be a positive number")
}

async fn print_search(app: &CineFinder) {
    match app.adapter.search_state() {
        RequestState::Idle => println!("Type a title to start searching."),
        RequestState::Loading => println!("Loading..."),
        RequestState::Failure(err) => println!("Error: {}", err),
        RequestState::Success(result) => {
            println!("Results for \"{}\": {} items", result.query, result.total_results);
            if result.is_empty() {
                println!("No results.");
            }
            for movie in &result.items {
                let marker = if app.adapter.is_favorite(movie.id).await { "*" } else { " " };
                println!(
                    "{} {:>8}  {} ({})  * {}",
                    marker,
                    movie.id,
                    movie.title,
                    movie.release_year().unwrap_or("-"),
                    movie.rating_label()
                );
            }
            let nav = result.navigation();
            if nav.is_paginated() {
                println!("Page {} of {}", nav.page, nav.total_pages);
            }
        }
    }
}

fn print_details(app: &CineFinder) {
    match app.adapter.details_state() {
        RequestState::Success(detail) => {
            println!("{} ({})", detail.title, detail.release_year().unwrap_or("-"));
            println!("Rating:    {}", detail.rating_label());
            println!(
                "Runtime:   {}",
                detail.runtime_label().unwrap_or_else(|| "unknown".to_string())
            );
            let genres: Vec<&str> = detail.genres.iter().map(|g| g.name.as_str()).collect();
            println!("Genres:    {}", genres.join(", "));
            println!("Director:  {}", detail.director().unwrap_or("-"));
            println!("Cast:      {}", detail.cast_line().unwrap_or_else(|| "-".to_string()));
            println!(
                "Language:  {}",
                detail.original_language_label().unwrap_or_else(|| "-".to_string())
            );
            if let Some(poster) = app
                .client
                .image_url(detail.poster_path.as_deref(), ImageSize::W342)
            {
                println!("Poster:    {}", poster);
            }
            println!();
            println!("{}", detail.overview.as_deref().unwrap_or("No overview."));
        }
        RequestState::Failure(err) => println!("Error: {}", err),
        RequestState::Idle | RequestState::Loading => println!("No details loaded."),
    }
}
