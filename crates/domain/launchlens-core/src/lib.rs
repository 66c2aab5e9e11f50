use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod id;
pub mod status;

pub use id::{InvalidLaunchId, LaunchId};
pub use status::{LaunchStatus, StatusTone};

/// A single scheduled or attempted flight as returned by the launch API.
///
/// Records are snapshots: once fetched they are never patched in place, and a
/// favorited copy keeps whatever shape it had when it was stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Launch {
    pub id: LaunchId,
    pub name: String,
    pub status: LaunchStatus,
    pub net: DateTime<Utc>,
    #[serde(default)]
    pub window_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub window_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image: Option<String>,
    pub launch_service_provider: Agency,
    pub rocket: Rocket,
    #[serde(default)]
    pub mission: Option<Mission>,
    pub pad: Pad,
    #[serde(rename = "vidURLs", default, skip_serializing_if = "Vec::is_empty")]
    pub vid_urls: Vec<VideoLink>,
    #[serde(default)]
    pub webcast_live: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub program: Vec<Program>,
}

impl Launch {
    /// Mission name when the launch carries one, otherwise the launch name.
    pub fn display_title(&self) -> &str {
        self.mission
            .as_ref()
            .map(|m| m.name.as_str())
            .unwrap_or(&self.name)
    }

    pub fn first_webcast(&self) -> Option<&str> {
        self.vid_urls.first().map(|v| v.url.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Agency {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub agency_type: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub abbrev: Option<String>,
    #[serde(default)]
    pub wiki_url: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rocket {
    #[serde(default)]
    pub id: Option<u64>,
    pub configuration: RocketConfiguration,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RocketConfiguration {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub variant: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub info_url: Option<String>,
    #[serde(default)]
    pub wiki_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mission {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub mission_type: Option<String>,
    #[serde(default)]
    pub orbit: Option<Orbit>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Orbit {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub abbrev: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pad {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    pub location: PadLocation,
    #[serde(default)]
    pub wiki_url: Option<String>,
    #[serde(default)]
    pub map_url: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PadLocation {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoLink {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Program {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub wiki_url: Option<String>,
}

/// One page of a paginated launch listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LaunchPage {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<Launch>,
}

impl LaunchPage {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
