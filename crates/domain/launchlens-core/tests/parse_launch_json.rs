use launchlens_core::{Launch, LaunchPage, StatusTone};

fn detailed_launch_json() -> &'static str {
    r#"{
        "id": "e3df2ecd-c239-472f-95e4-2b89b4f75800",
        "name": "Falcon 9 Block 5 | Starlink Group 6-14",
        "status": {"id": 1, "name": "Go for Launch", "abbrev": "Go", "description": "Current T-0 confirmed by official or reliable sources."},
        "net": "2024-09-12T04:20:00Z",
        "window_start": "2024-09-12T04:20:00Z",
        "window_end": "2024-09-12T08:20:00Z",
        "image": "https://example.test/f9.jpeg",
        "launch_service_provider": {
            "id": 121,
            "name": "SpaceX",
            "type": "Commercial",
            "country_code": "USA",
            "abbrev": "SpX",
            "description": "Space Exploration Technologies Corp.",
            "info_url": null,
            "wiki_url": "https://en.wikipedia.org/wiki/SpaceX",
            "logo_url": null,
            "image_url": null
        },
        "rocket": {
            "id": 8004,
            "configuration": {
                "id": 164,
                "name": "Falcon 9",
                "full_name": "Falcon 9 Block 5",
                "description": "Falcon 9 is a two-stage rocket.",
                "family": "Falcon",
                "variant": "Block 5",
                "image_url": null,
                "info_url": null,
                "wiki_url": "https://en.wikipedia.org/wiki/Falcon_9"
            }
        },
        "mission": {
            "id": 6721,
            "name": "Starlink Group 6-14",
            "description": "A batch of satellites for the Starlink mega-constellation.",
            "type": "Communications",
            "orbit": {"id": 8, "name": "Low Earth Orbit", "abbrev": "LEO"}
        },
        "pad": {
            "id": 80,
            "name": "Space Launch Complex 40",
            "location": {"id": 12, "name": "Cape Canaveral, FL, USA", "country_code": "USA"},
            "wiki_url": null,
            "map_url": "https://maps.example.test/slc40",
            "latitude": "28.56194122",
            "longitude": "-80.57735736"
        },
        "vidURLs": [{"url": "https://youtu.be/abc", "title": "Starlink Mission"}],
        "webcast_live": false,
        "program": []
    }"#
}

#[test]
fn detailed_record_parses_with_nested_entities() {
    let launch: Launch = serde_json::from_str(detailed_launch_json()).unwrap();

    assert_eq!(launch.id, "e3df2ecd-c239-472f-95e4-2b89b4f75800");
    assert_eq!(launch.display_title(), "Starlink Group 6-14");
    assert_eq!(launch.status.tone(), StatusTone::Positive);
    assert_eq!(launch.rocket.configuration.full_name, "Falcon 9 Block 5");
    assert_eq!(launch.pad.location.name, "Cape Canaveral, FL, USA");
    assert_eq!(
        launch.mission.as_ref().and_then(|m| m.mission_type.as_deref()),
        Some("Communications")
    );
    assert_eq!(launch.first_webcast(), Some("https://youtu.be/abc"));
    assert_eq!(launch.net.to_rfc3339(), "2024-09-12T04:20:00+00:00");
}

#[test]
fn missing_mission_and_webcasts_fall_back() {
    let mut value: serde_json::Value = serde_json::from_str(detailed_launch_json()).unwrap();
    value["mission"] = serde_json::Value::Null;
    value.as_object_mut().unwrap().remove("vidURLs");

    let launch: Launch = serde_json::from_value(value).unwrap();
    assert_eq!(launch.display_title(), "Falcon 9 Block 5 | Starlink Group 6-14");
    assert!(launch.vid_urls.is_empty());
    assert_eq!(launch.first_webcast(), None);
}

#[test]
fn page_with_blank_id_is_rejected() {
    let mut value: serde_json::Value = serde_json::from_str(detailed_launch_json()).unwrap();
    value["id"] = serde_json::Value::String(String::new());
    let page = serde_json::json!({"count": 1, "next": null, "previous": null, "results": [value]});

    assert!(serde_json::from_value::<LaunchPage>(page).is_err());
}

#[test]
fn stored_snapshot_survives_reserialization() {
    let launch: Launch = serde_json::from_str(detailed_launch_json()).unwrap();
    let stored = serde_json::to_vec(&vec![launch.clone()]).unwrap();
    let restored: Vec<Launch> = serde_json::from_slice(&stored).unwrap();
    assert_eq!(restored, vec![launch]);
}
