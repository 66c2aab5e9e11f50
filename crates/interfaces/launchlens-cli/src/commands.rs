use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use launchlens_app_core::{
    favorites_vm, launch_detail_vm, launch_list_vm, DetailCommand, FavoritesCommand,
    FavoritesKernel, FetchTarget, LaunchCardVm, LaunchDetailKernel, LaunchDetailVm,
    LaunchListKernel, ListCommand, ListConfig, RequestSeq,
};
use launchlens_core::{LaunchPage, StatusTone};
use launchlens_infra::LaunchSource;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::CliEnv;

fn spinner(msg: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(msg.to_string());
    Ok(pb)
}

fn tone_marker(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Positive => "+",
        StatusTone::Pending => "?",
        StatusTone::Neutral => " ",
    }
}

pub fn render_card(card: &LaunchCardVm) -> String {
    format!(
        "[{}] {:<14} {}\n      {} | {} | {}\n      id: {}",
        tone_marker(card.status_tone),
        card.countdown,
        card.title,
        card.status_label,
        card.provider,
        card.rocket,
        card.id
    )
}

pub fn render_detail(vm: &LaunchDetailVm, favorited: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}{}\n",
        vm.title,
        if favorited { "  [favorite]" } else { "" }
    ));
    out.push_str(&format!("   Status:    {}\n", vm.status_label));
    out.push_str(&format!("   Scheduled: {}\n", vm.scheduled));
    if let Some(mission) = &vm.mission {
        out.push_str("\n:: Mission\n");
        out.push_str(&format!("   {}\n", mission.description));
        if let Some(kind) = &mission.mission_type {
            out.push_str(&format!("   Type:  {}\n", kind));
        }
        if let Some(orbit) = &mission.orbit {
            out.push_str(&format!("   Orbit: {}\n", orbit));
        }
    }
    out.push_str(&format!("\n:: Rocket\n   {}\n", vm.rocket));
    if let Some(desc) = &vm.rocket_description {
        out.push_str(&format!("   {}\n", desc));
    }
    out.push_str(&format!("\n:: Provider\n   {}\n", vm.provider));
    if let Some(desc) = &vm.provider_description {
        out.push_str(&format!("   {}\n", desc));
    }
    out.push_str(&format!("\n:: Pad\n   {}\n   {}\n", vm.pad, vm.pad_location));
    if !vm.links.is_empty() {
        out.push_str("\n:: Links\n");
        for link in &vm.links {
            out.push_str(&format!("   {}: {}\n", link.label, link.url));
        }
    }
    out
}

fn print_cards(cards: &[LaunchCardVm]) {
    if cards.is_empty() {
        println!("   (no launches)");
        return;
    }
    for card in cards {
        println!("{}", render_card(card));
    }
}

fn cards_of(page: &LaunchPage) -> Vec<LaunchCardVm> {
    let now = Utc::now();
    page.results
        .iter()
        .map(|l| LaunchCardVm::from_launch(l, now))
        .collect()
}

pub async fn cmd_upcoming(env: &CliEnv, limit: u32, offset: u32) -> Result<Vec<LaunchCardVm>> {
    let limit = launchlens_config::clamp_page_limit(limit);
    let source = env.source()?;

    let pb = spinner("Fetching upcoming launches...")?;
    let res = source.list_upcoming(limit, offset).await;
    pb.finish_and_clear();
    let page = res.context(launchlens_config::LIST_LOAD_FAILED)?;

    println!(":: Upcoming launches ({} total)", page.count);
    let cards = cards_of(&page);
    print_cards(&cards);
    Ok(cards)
}

/// A blank query lists upcoming launches instead.
pub async fn cmd_search(env: &CliEnv, query: &str, limit: u32) -> Result<Vec<LaunchCardVm>> {
    let query = match FetchTarget::for_query(query) {
        FetchTarget::Upcoming => {
            return cmd_upcoming(env, limit, launchlens_config::DEFAULT_PAGE_OFFSET).await
        }
        FetchTarget::Search(q) => q,
    };
    let limit = launchlens_config::clamp_page_limit(limit);
    let source = env.source()?;

    let pb = spinner(&format!("Searching for \"{}\"...", query))?;
    let res = source.search(&query, limit).await;
    pb.finish_and_clear();
    let page = res.context(launchlens_config::LIST_LOAD_FAILED)?;

    println!(":: Results for \"{}\" ({} total)", query, page.count);
    let cards = cards_of(&page);
    print_cards(&cards);
    Ok(cards)
}

/// Returns whether the launch is a favorite when the command ends.
pub async fn cmd_show(env: &CliEnv, id: &str, toggle_favorite: bool) -> Result<bool> {
    let mut kernel = LaunchDetailKernel::new(env.source()?, env.favorites()?);

    let pb = spinner("Loading launch...")?;
    kernel.dispatch(DetailCommand::Activate(id.to_string()));
    kernel.settle().await;
    pb.finish_and_clear();

    let vm = launch_detail_vm(&kernel.state());
    if let Some(err) = &vm.error {
        bail!("{} ({})", err, id);
    }
    if vm.detail.is_none() {
        bail!("{} ({})", launchlens_config::DETAIL_LOAD_FAILED, id);
    }

    let vm = if toggle_favorite && vm.can_toggle_favorite {
        kernel.dispatch(DetailCommand::ToggleFavorite);
        kernel.settle().await;
        launch_detail_vm(&kernel.state())
    } else {
        vm
    };

    if let Some(detail) = &vm.detail {
        print!("{}", render_detail(detail, vm.favorited));
    }
    Ok(vm.favorited)
}

pub async fn cmd_favorites_list(env: &CliEnv) -> Result<Vec<LaunchCardVm>> {
    let mut kernel = FavoritesKernel::new(env.favorites()?);
    kernel.dispatch(FavoritesCommand::Focus);
    kernel.settle().await;

    let vm = favorites_vm(&kernel.state(), Utc::now());
    println!(":: Favorites ({})", vm.cards.len());
    if vm.show_empty {
        println!("   No favorites yet. Use `favorites add <id>` or `show <id> --toggle-favorite`.");
    } else {
        print_cards(&vm.cards);
    }
    Ok(vm.cards)
}

/// Fetches the launch first so the stored snapshot is complete.
pub async fn cmd_favorites_add(env: &CliEnv, id: &str) -> Result<bool> {
    let source = env.source()?;
    let favorites = env.favorites()?;

    let pb = spinner("Loading launch...")?;
    let res = source.get_by_id(id).await;
    pb.finish_and_clear();
    let launch = res.with_context(|| format!("{} ({})", launchlens_config::DETAIL_LOAD_FAILED, id))?;

    let added = favorites.add(&launch).await?;
    if added {
        println!(":: Added {} to favorites", launch.display_title());
    } else {
        println!(":: {} is already a favorite", launch.display_title());
    }
    Ok(added)
}

pub async fn cmd_favorites_remove(env: &CliEnv, id: &str) -> Result<bool> {
    let removed = env.favorites()?.remove(id).await?;
    if removed {
        println!(":: Removed {} from favorites", id);
    } else {
        println!(":: {} was not a favorite", id);
    }
    Ok(removed)
}

/// Interactive list: each stdin line is a search edit, `:r` refreshes,
/// `:retry` retries and `:q` quits.
pub async fn cmd_browse(env: &CliEnv, page_limit: u32) -> Result<()> {
    let config = ListConfig {
        page_limit: launchlens_config::clamp_page_limit(page_limit),
        ..ListConfig::default()
    };
    let mut kernel = LaunchListKernel::new(env.source()?, config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut rendered: Option<RequestSeq> = None;

    println!(":: Type to search, `:r` to refresh, `:retry` to retry, `:q` to quit");
    kernel.dispatch(ListCommand::Activate);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match line.trim() {
                    ":q" => break,
                    ":r" => kernel.dispatch(ListCommand::Refresh),
                    ":retry" => kernel.dispatch(ListCommand::Retry),
                    _ => kernel.dispatch(ListCommand::QueryChanged(line)),
                }
            }
            _ = kernel.next_event(), if kernel.is_busy() => {}
        }

        let state = kernel.state();
        if state.loading || state.latest_request == rendered {
            continue;
        }
        rendered = state.latest_request;
        debug!("rendering list for request {:?}", rendered);

        let vm = launch_list_vm(&state, Utc::now());
        if vm.search_query.trim().is_empty() {
            println!("\n:: Upcoming launches");
        } else {
            println!("\n:: Results for \"{}\"", vm.search_query.trim());
        }
        if let Some(err) = vm.blocking_error {
            println!("   {} (`:retry`)", err);
            continue;
        }
        if let Some(err) = vm.banner_error {
            println!("   ! {}", err);
        }
        print_cards(&vm.cards);
    }

    Ok(())
}
