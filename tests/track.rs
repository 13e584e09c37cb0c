//! Tests for track geometry assembly

use groundtrack::{
    GeoPoint, MapConfig, Palette, RawHistoryPoint, SatelliteStatus, SatelliteTrack,
    StatusSummary, TRAIL_COLORS, TrackId, TrailError, build_map_geometry, build_track_geometry,
};

fn active_track(id: Option<TrackId>, lat: f64, lon: f64) -> SatelliteTrack {
    SatelliteTrack {
        id,
        satname: Some("TEST SAT".to_string()),
        status: SatelliteStatus::Active,
        location: Some(RawHistoryPoint::new(lat, lon)),
        history: vec![
            RawHistoryPoint::new(lat, lon),
            RawHistoryPoint::new(lat - 1.0, lon - 5.0),
        ],
    }
}

#[test]
fn test_deserialize_feed_record() {
    let json = r#"{
        "id": "25544",
        "satname": "SPACE STATION",
        "status": 1,
        "decayed": false,
        "failCount": 0,
        "lastChecked": 1700000000,
        "location": {"lat": 10.0, "lon": -170.0},
        "history": [
            {"lat": 10.0, "lon": -170.0, "t": 1700000060},
            {"lat": 8.0, "lon": 175.0, "t": 1700000000}
        ]
    }"#;
    let track: SatelliteTrack = serde_json::from_str(json).unwrap();

    assert_eq!(track.id, Some(TrackId::from("25544")));
    assert_eq!(track.status, SatelliteStatus::Active);
    assert_eq!(track.history.len(), 2);
    assert_eq!(track.history[0].t, Some(1_700_000_060.0));
    assert!(track.is_visible());
}

#[test]
fn test_status_codes() {
    assert_eq!(SatelliteStatus::from(1.0), SatelliteStatus::Active);
    assert_eq!(SatelliteStatus::from(0.0), SatelliteStatus::Decayed);
    assert_eq!(SatelliteStatus::from(7.0), SatelliteStatus::Unknown(7.0));
    assert_eq!(f64::from(SatelliteStatus::Unknown(7.0)), 7.0);
}

#[test]
fn test_odd_status_values_do_not_fail_batch() {
    let json = r#"[
        {"satname": "A", "status": 1.0},
        {"satname": "B", "status": -1},
        {"satname": "C", "status": 0.5},
        {"satname": "D", "status": 0}
    ]"#;
    let tracks: Vec<SatelliteTrack> = serde_json::from_str(json).unwrap();

    assert_eq!(tracks.len(), 4);
    assert_eq!(tracks[0].status, SatelliteStatus::Active);
    assert_eq!(tracks[1].status, SatelliteStatus::Unknown(-1.0));
    assert_eq!(tracks[2].status, SatelliteStatus::Unknown(0.5));
    assert_eq!(tracks[3].status, SatelliteStatus::Decayed);
}

#[test]
fn test_decayed_sentinel_not_visible() {
    let mut track = active_track(None, 0.0, 0.0);
    track.location = Some(RawHistoryPoint::new(999.0, 999.0));
    assert!(!track.is_visible());

    let mut track = active_track(None, 0.0, 0.0);
    track.status = SatelliteStatus::Decayed;
    assert!(!track.is_visible());

    let mut track = active_track(None, 0.0, 0.0);
    track.location = None;
    assert!(!track.is_visible());
}

#[test]
fn test_live_position_not_normalized() {
    let track = active_track(None, 0.0, 200.0);
    assert_eq!(track.live_position(), None);

    let track = active_track(None, 0.0, -180.0);
    assert_eq!(track.live_position(), Some(GeoPoint::new(0.0, -180.0)));
}

#[test]
fn test_track_geometry() {
    let mut track = active_track(Some(TrackId::from("a")), 5.0, -175.0);
    track.history = vec![
        RawHistoryPoint::new(5.0, -175.0),
        RawHistoryPoint::new(3.0, 535.0),
    ];
    let geometry = build_track_geometry(&track, 0, &Palette::default()).unwrap();

    assert_eq!(geometry.id, TrackId::from("a"));
    assert_eq!(geometry.color, TRAIL_COLORS[1]);
    assert_eq!(geometry.segments.len(), 2);
    assert_eq!(
        geometry.markers,
        vec![GeoPoint::new(5.0, -175.0), GeoPoint::new(3.0, 175.0)]
    );
    assert_eq!(geometry.position, Some(GeoPoint::new(5.0, -175.0)));
    assert_eq!(geometry.name, "TEST SAT");
}

#[test]
fn test_missing_coordinate_is_malformed() {
    let mut track = active_track(None, 0.0, 0.0);
    track.history.push(RawHistoryPoint {
        lat: Some(1.0),
        lon: None,
        t: None,
    });
    let result = build_track_geometry(&track, 0, &Palette::default());

    assert!(matches!(
        result,
        Err(TrailError::MalformedPoint { index: 2, .. })
    ));
}

#[test]
fn test_map_geometry_uses_visible_index() {
    let mut hidden = active_track(None, 0.0, 0.0);
    hidden.status = SatelliteStatus::Decayed;
    let tracks = vec![
        hidden,
        active_track(None, 0.0, 10.0),
        active_track(None, 0.0, 20.0),
    ];
    let geometry = build_map_geometry(&tracks, &Palette::default());

    assert_eq!(geometry.tracks.len(), 2);
    assert_eq!(geometry.tracks[0].id, TrackId::Index(0));
    assert_eq!(geometry.tracks[0].color, TRAIL_COLORS[0]);
    assert_eq!(geometry.tracks[1].id, TrackId::Index(1));
    assert_eq!(geometry.tracks[1].color, TRAIL_COLORS[1]);
}

#[test]
fn test_map_geometry_skips_bad_tracks() {
    let mut broken = active_track(Some(TrackId::from("broken")), 0.0, 0.0);
    broken.history[1].lat = Some(120.0);
    let tracks = vec![broken, active_track(Some(TrackId::from("ok")), 0.0, 10.0)];

    let geometry = build_map_geometry(&tracks, &MapConfig::global().palette);

    assert_eq!(geometry.tracks.len(), 1);
    assert_eq!(geometry.tracks[0].id, TrackId::from("ok"));
    assert_eq!(geometry.skipped.len(), 1);
    assert_eq!(geometry.skipped[0].id, TrackId::from("broken"));
    assert!(geometry.skipped[0].reason.contains("index 1"));
}

#[test]
fn test_status_summary() {
    let mut decayed = active_track(Some(TrackId::from("99999")), 0.0, 0.0);
    decayed.satname = None;
    decayed.status = SatelliteStatus::Decayed;
    let mut unknown = active_track(None, 0.0, 0.0);
    unknown.status = SatelliteStatus::Unknown(3.0);

    let tracks = vec![active_track(None, 0.0, 0.0), decayed, unknown];
    let summary = StatusSummary::from_tracks(&tracks);

    assert_eq!(summary.active, vec!["TEST SAT".to_string()]);
    assert_eq!(summary.decayed, vec!["99999".to_string()]);
}

#[test]
fn test_geometry_serializes() {
    let track = active_track(Some(TrackId::Index(3)), 0.0, 10.0);
    let geometry = build_track_geometry(&track, 0, &Palette::default()).unwrap();
    let json = serde_json::to_value(&geometry).unwrap();

    assert_eq!(json["id"], serde_json::json!(3));
    assert_eq!(json["color"], serde_json::json!("#d62728"));
    assert_eq!(json["segments"][0][0]["lon"], serde_json::json!(5.0));
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_map_geometry_matches() {
    let tracks: Vec<SatelliteTrack> = (0..20)
        .map(|i| active_track(None, 0.0, i as f64 * 17.0 - 170.0))
        .collect();
    let palette = Palette::default();

    let sequential = build_map_geometry(&tracks, &palette);
    let parallel = groundtrack::build_map_geometry_parallel(&tracks, &palette);
    assert_eq!(sequential, parallel);
}

#[cfg(feature = "synthetic")]
#[test]
fn test_synthetic_constellation_geometry() {
    use groundtrack::synthetic::GroundTrackScenario;

    let tracks = GroundTrackScenario::iss_like().constellation(8);
    let geometry = build_map_geometry(&tracks, &Palette::default());

    assert_eq!(geometry.tracks.len(), 8);
    assert!(geometry.skipped.is_empty());
    for track in &geometry.tracks {
        assert!(track.segments.iter().all(|s| s.len() >= 2));
    }
}
