use chrono::{DateTime, Utc};
use launchlens_core::{Launch, StatusTone};

use crate::domain::{DetailState, FavoritesState, ListState};

/// Time left until `net`, floored to whole minutes.
pub fn format_countdown(net: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if net <= now {
        return "Launched".into();
    }

    let total_minutes = (net - now).num_minutes();
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes / 60) % 24;
    let minutes = total_minutes % 60;

    if days > 0 {
        format!("T-{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("T-{hours}h {minutes}m")
    } else {
        format!("T-{minutes}m")
    }
}

fn format_scheduled(net: DateTime<Utc>) -> String {
    net.format("%A, %B %-d, %Y %H:%M UTC").to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaunchCardVm {
    pub id: String,
    pub title: String,
    pub status_label: String,
    pub status_tone: StatusTone,
    pub countdown: String,
    pub image: Option<String>,
    pub provider: String,
    pub rocket: String,
}

impl LaunchCardVm {
    pub fn from_launch(launch: &Launch, now: DateTime<Utc>) -> Self {
        Self {
            id: launch.id.to_string(),
            title: launch.display_title().to_string(),
            status_label: launch.status.name.clone(),
            status_tone: launch.status.tone(),
            countdown: format_countdown(launch.net, now),
            image: launch.image.clone(),
            provider: launch.launch_service_provider.name.clone(),
            rocket: launch.rocket.configuration.full_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MissionVm {
    pub description: String,
    pub mission_type: Option<String>,
    pub orbit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind {
    RocketWiki,
    PadWiki,
    Webcast,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkVm {
    pub kind: LinkKind,
    pub label: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaunchDetailVm {
    pub title: String,
    pub status_label: String,
    pub status_tone: StatusTone,
    pub scheduled: String,
    pub image: Option<String>,
    pub mission: Option<MissionVm>,
    pub rocket: String,
    pub rocket_description: Option<String>,
    pub provider: String,
    pub provider_description: Option<String>,
    pub pad: String,
    pub pad_location: String,
    pub links: Vec<LinkVm>,
}

impl LaunchDetailVm {
    pub fn from_launch(launch: &Launch) -> Self {
        // The section needs a description; type and orbit alone are not shown.
        let mission = launch.mission.as_ref().and_then(|m| {
            m.description.as_ref().map(|description| MissionVm {
                description: description.clone(),
                mission_type: m.mission_type.clone(),
                orbit: m.orbit.as_ref().map(|o| o.name.clone()),
            })
        });

        let config = &launch.rocket.configuration;
        let mut links = Vec::new();
        if let Some(url) = &config.wiki_url {
            links.push(LinkVm {
                kind: LinkKind::RocketWiki,
                label: "Rocket Wiki",
                url: url.clone(),
            });
        }
        if let Some(url) = &launch.pad.wiki_url {
            links.push(LinkVm {
                kind: LinkKind::PadWiki,
                label: "Launch Pad Wiki",
                url: url.clone(),
            });
        }
        if let Some(url) = launch.first_webcast() {
            links.push(LinkVm {
                kind: LinkKind::Webcast,
                label: "Watch Webcast",
                url: url.to_string(),
            });
        }

        Self {
            title: launch.display_title().to_string(),
            status_label: launch.status.name.clone(),
            status_tone: launch.status.tone(),
            scheduled: format_scheduled(launch.net),
            image: launch.image.clone(),
            mission,
            rocket: config.full_name.clone(),
            rocket_description: config.description.clone(),
            provider: launch.launch_service_provider.name.clone(),
            provider_description: launch.launch_service_provider.description.clone(),
            pad: launch.pad.name.clone(),
            pad_location: launch.pad.location.name.clone(),
            links,
        }
    }
}

// --- Screen VMs ---

#[derive(Debug, Clone)]
pub struct LaunchListVm {
    pub cards: Vec<LaunchCardVm>,
    pub search_query: String,
    pub show_spinner: bool,
    pub show_refreshing: bool,
    /// Full-screen error with a retry button; only when there is nothing else to show.
    pub blocking_error: Option<String>,
    pub banner_error: Option<String>,
    pub show_empty: bool,
}

pub fn launch_list_vm(state: &ListState, now: DateTime<Utc>) -> LaunchListVm {
    let blocking = state.shows_blocking_error();
    LaunchListVm {
        cards: state
            .launches
            .iter()
            .map(|l| LaunchCardVm::from_launch(l, now))
            .collect(),
        search_query: state.search_query.clone(),
        show_spinner: state.shows_spinner(),
        show_refreshing: state.refreshing,
        blocking_error: state.error.clone().filter(|_| blocking),
        banner_error: state.error.clone().filter(|_| !blocking),
        show_empty: !state.loading && state.error.is_none() && state.launches.is_empty(),
    }
}

#[derive(Debug, Clone)]
pub struct LaunchDetailScreenVm {
    pub detail: Option<LaunchDetailVm>,
    pub show_spinner: bool,
    pub error: Option<String>,
    pub favorited: bool,
    pub can_toggle_favorite: bool,
}

pub fn launch_detail_vm(state: &DetailState) -> LaunchDetailScreenVm {
    LaunchDetailScreenVm {
        detail: state.launch.as_ref().map(LaunchDetailVm::from_launch),
        show_spinner: state.loading && state.launch.is_none(),
        error: state.error.clone(),
        favorited: state.favorited,
        can_toggle_favorite: state.can_toggle_favorite(),
    }
}

#[derive(Debug, Clone)]
pub struct FavoritesVm {
    pub cards: Vec<LaunchCardVm>,
    pub show_empty: bool,
}

pub fn favorites_vm(state: &FavoritesState, now: DateTime<Utc>) -> FavoritesVm {
    FavoritesVm {
        cards: state
            .favorites
            .iter()
            .map(|l| LaunchCardVm::from_launch(l, now))
            .collect(),
        show_empty: state.loaded && state.favorites.is_empty(),
    }
}
