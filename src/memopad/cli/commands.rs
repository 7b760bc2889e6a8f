use super::render::{print_full_memos, print_memo_list, print_messages};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use memopad::api::{CmdResult, ConfigAction, MemoApi};
use memopad::commands;
use memopad::config::{ListOrder, MemopadConfig};
use memopad::error::{MemoError, Result};
use memopad::logging;
use memopad::model::MemoId;
use memopad::store::fs_backend::FsBackend;
use memopad::store::MemoStore;
use std::path::PathBuf;
use tracing::debug;

const HOME_ENV: &str = "MEMOPAD_HOME";

struct AppContext {
    api: MemoApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // config must work even when the configured namespace cannot be opened
    if let Some(Commands::Config { key, value }) = cli.command {
        return handle_config(key, value);
    }

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Create { title, content }) => handle_create(&mut ctx, title, content),
        Some(Commands::List { stored }) => handle_list(&ctx, stored),
        Some(Commands::View { ids }) => handle_view(&ctx, &ids),
        Some(Commands::Edit { id, title, content }) => handle_edit(&mut ctx, id, title, content),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, &ids),
        Some(Commands::Search { keyword }) => handle_search(&ctx, &keyword),
        Some(Commands::Count) => handle_count(&ctx),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Seed) => handle_seed(&mut ctx),
        Some(Commands::Config { .. }) | None => handle_list(&ctx, false),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "memopad", "memopad")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| MemoError::Api("Could not determine data directory".into()))
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = MemopadConfig::load(&data_dir)?;
    debug!(data_dir = %data_dir.display(), namespace = %config.namespace, "resolved context");

    let store = MemoStore::open(FsBackend::new(data_dir.clone()), config.namespace.clone())?;
    let api = MemoApi::new(store, data_dir, config.list_order);
    Ok(AppContext { api })
}

fn handle_create(ctx: &mut AppContext, title: String, content: String) -> Result<()> {
    let result = ctx.api.create_memo(title, content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, stored: bool) -> Result<()> {
    let order = stored.then_some(ListOrder::Stored);
    let result = ctx.api.list_memos(order)?;
    print_listing(&result);
    Ok(())
}

fn handle_view(ctx: &AppContext, ids: &[MemoId]) -> Result<()> {
    let result = ctx.api.view_memos(ids)?;
    print_full_memos(&result.listed_memos);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: MemoId,
    title: Option<String>,
    content: Option<String>,
) -> Result<()> {
    if title.is_none() && content.is_none() {
        return Err(MemoError::Api(
            "Nothing to change: pass --title and/or --content".into(),
        ));
    }
    let result = ctx.api.update_memo(id, title, content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: &[MemoId]) -> Result<()> {
    let result = ctx.api.delete_memos(ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, keyword: &str) -> Result<()> {
    let result = ctx.api.search_memos(keyword)?;
    print_listing(&result);
    Ok(())
}

fn handle_count(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.count_memos()?;
    println!("{}", result.count.unwrap_or_default());
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let result = ctx.api.clear_memos(yes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_seed(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.seed_memos()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let result = commands::config::run(&data_dir()?, action)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_listing(result: &CmdResult) {
    if result.listed_memos.is_empty() && !result.messages.is_empty() {
        print_messages(&result.messages);
        return;
    }
    print_memo_list(&result.listed_memos);
    print_messages(&result.messages);
}
