//! # CLI Layer
//!
//! One possible client of the catalog, not the catalog itself. This is the
//! only place that knows about terminal I/O, exit codes and argument
//! parsing; everything it shows comes from a `CmdResult`.
//!
//! - `run()`: parse, set up logging and context, dispatch
//! - `handle_*()`: call the API, print the result
//! - `print.rs`: turns results into terminal text
//! - `styles.rs`: shared console styles, including the tag palette

mod args;
mod print;
mod styles;

use args::{Cli, Commands, ListingArgs};
use clap::Parser;
use print::{
    print_messages, render_config, render_full_items, render_item_list, render_tags,
    render_tree,
};
use snipcat::api::ConfigAction;
use snipcat::clipboard::copy_to_clipboard;
use snipcat::error::{CatalogError, Result};
use snipcat::init::{initialize, CatalogContext};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = initialize(cli.catalog.clone())?;

    match cli.command {
        Some(Commands::List { listing, json }) => handle_list(&ctx, listing, json),
        Some(Commands::Tree) => handle_tree(&ctx),
        Some(Commands::Tags) => handle_tags(&ctx),
        Some(Commands::View { listing, selectors }) => handle_view(&ctx, listing, selectors),
        Some(Commands::Copy {
            listing,
            selector,
            with_title,
            print,
        }) => handle_copy(&ctx, listing, selector, with_title, print),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, ListingArgs::default(), false),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    // RUST_LOG, when set, overrides -v
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn handle_list(ctx: &CatalogContext, listing: ListingArgs, json: bool) -> Result<()> {
    let query = listing.into_query(&ctx.config);
    let result = ctx.api.list_items(&query)?;

    if json {
        let out = serde_json::to_string_pretty(&result.listed_items)
            .map_err(CatalogError::Serialization)?;
        println!("{}", out);
    } else {
        print!(
            "{}",
            render_item_list(&result.listed_items, ctx.config.preview_width)
        );
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_tree(ctx: &CatalogContext) -> Result<()> {
    let result = ctx.api.category_tree()?;
    print!(
        "{}",
        render_tree(&result.category_tree, &result.category_counts)
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_tags(ctx: &CatalogContext) -> Result<()> {
    let result = ctx.api.tags()?;
    print!("{}", render_tags(&result.tags));
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &CatalogContext, listing: ListingArgs, selectors: Vec<String>) -> Result<()> {
    let query = listing.into_query(&ctx.config);
    let result = ctx.api.view_items(&query, &selectors)?;
    print!("{}", render_full_items(&result.listed_items));
    print_messages(&result.messages);
    Ok(())
}

fn handle_copy(
    ctx: &CatalogContext,
    listing: ListingArgs,
    selector: String,
    with_title: bool,
    print: bool,
) -> Result<()> {
    let query = listing.into_query(&ctx.config);
    let result = ctx.api.copy_item(&query, &selector, with_title)?;

    let Some(text) = result.clipboard_text.as_deref() else {
        print_messages(&result.messages);
        return Ok(());
    };

    if print {
        print!("{}", text);
        if !text.ends_with('\n') {
            println!();
        }
        return Ok(());
    }

    copy_to_clipboard(text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &CatalogContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action.clone())?;
    if let (ConfigAction::ShowAll, Some(config)) = (&action, &result.config) {
        print!("{}", render_config(config));
    }
    print_messages(&result.messages);
    Ok(())
}
