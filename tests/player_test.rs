use reqwest::StatusCode;
use serde_json::json;
use sponow::spotify::{
    AuthError, Upstream,
    auth::{grant_from_json, token_from_json},
    player::{queue_from_response, snapshot_from_response},
};
use sponow::types::{
    AlbumObject, ArtistObject, CurrentlyPlayingResponse, ExternalUrls, ImageObject, QueueResponse,
    TrackObject,
};

// Helper function to create a test track
fn create_test_track(
    name: &str,
    artists: &[&str],
    image_urls: &[&str],
    duration_ms: u64,
    song_url: &str,
) -> TrackObject {
    TrackObject {
        name: name.to_string(),
        artists: artists
            .iter()
            .map(|name| ArtistObject {
                name: name.to_string(),
            })
            .collect(),
        album: AlbumObject {
            images: image_urls
                .iter()
                .map(|url| ImageObject {
                    url: url.to_string(),
                })
                .collect(),
        },
        duration_ms,
        external_urls: ExternalUrls {
            spotify: song_url.to_string(),
        },
    }
}

// Helper function to create a test currently-playing payload
fn create_playing_response(
    is_playing: bool,
    item: Option<TrackObject>,
    progress_ms: Option<u64>,
) -> CurrentlyPlayingResponse {
    CurrentlyPlayingResponse {
        is_playing,
        item,
        progress_ms,
    }
}

#[test]
fn test_status_classification_boundary() {
    // 204 carries no payload and means nothing is playing
    assert!(matches!(
        Upstream::<CurrentlyPlayingResponse>::from_status(StatusCode::NO_CONTENT),
        Some(Upstream::Empty)
    ));

    // anything at or above 400 is a failure classification, not an error
    for status in [
        StatusCode::BAD_REQUEST,
        StatusCode::NOT_FOUND,
        StatusCode::TOO_MANY_REQUESTS,
        StatusCode::INTERNAL_SERVER_ERROR,
        StatusCode::SERVICE_UNAVAILABLE,
    ] {
        assert!(matches!(
            Upstream::<CurrentlyPlayingResponse>::from_status(status),
            Some(Upstream::Failed(s)) if s == status
        ));
    }

    // success statuses are expected to carry a payload
    assert!(Upstream::<CurrentlyPlayingResponse>::from_status(StatusCode::OK).is_none());
    assert!(Upstream::<CurrentlyPlayingResponse>::from_status(StatusCode::CREATED).is_none());
}

#[test]
fn test_empty_upstream_maps_to_not_playing() {
    let snapshot = snapshot_from_response(Upstream::Empty);

    assert!(!snapshot.is_playing);

    // the empty state serializes to exactly {"isPlaying":false}
    assert_eq!(
        serde_json::to_value(&snapshot).unwrap(),
        json!({ "isPlaying": false })
    );
}

#[test]
fn test_failed_upstream_maps_to_not_playing() {
    for status in [
        StatusCode::BAD_REQUEST,
        StatusCode::UNAUTHORIZED,
        StatusCode::INTERNAL_SERVER_ERROR,
    ] {
        let snapshot = snapshot_from_response(Upstream::<CurrentlyPlayingResponse>::Failed(status));
        assert_eq!(
            serde_json::to_value(&snapshot).unwrap(),
            json!({ "isPlaying": false })
        );
    }
}

#[test]
fn test_payload_without_item_maps_to_not_playing() {
    let response = create_playing_response(true, None, Some(1000));
    let snapshot = snapshot_from_response(Upstream::Payload(response));

    assert_eq!(
        serde_json::to_value(&snapshot).unwrap(),
        json!({ "isPlaying": false })
    );
}

#[test]
fn test_well_formed_item_maps_to_full_snapshot() {
    let track = create_test_track("Song A", &["Artist X"], &["u1"], 200000, "s1");
    let response = create_playing_response(true, Some(track), Some(50000));

    let snapshot = snapshot_from_response(Upstream::Payload(response));

    assert_eq!(
        serde_json::to_value(&snapshot).unwrap(),
        json!({
            "isPlaying": true,
            "title": "Song A",
            "artist": "Artist X",
            "albumImageUrl": "u1",
            "songUrl": "s1",
            "durationMs": 200000,
            "progressMs": 50000
        })
    );
}

#[test]
fn test_artist_names_join_in_upstream_order() {
    let track = create_test_track(
        "Song",
        &["Artist X", "Artist Y", "Artist Z"],
        &["u1"],
        1000,
        "s1",
    );
    let response = create_playing_response(true, Some(track), None);

    let snapshot = snapshot_from_response(Upstream::Payload(response));

    assert_eq!(snapshot.artist.as_deref(), Some("Artist X, Artist Y, Artist Z"));
}

#[test]
fn test_snapshot_uses_first_image() {
    let track = create_test_track("Song", &["Artist"], &["large", "medium", "small"], 1000, "s1");
    let response = create_playing_response(true, Some(track), None);

    let snapshot = snapshot_from_response(Upstream::Payload(response));

    assert_eq!(snapshot.album_image_url.as_deref(), Some("large"));
}

#[test]
fn test_snapshot_without_images_omits_album_image() {
    let track = create_test_track("Song", &["Artist"], &[], 1000, "s1");
    let response = create_playing_response(true, Some(track), None);

    let snapshot = snapshot_from_response(Upstream::Payload(response));

    assert!(snapshot.album_image_url.is_none());

    // the serialized payload must not carry the key at all
    let value = serde_json::to_value(&snapshot).unwrap();
    assert!(value.get("albumImageUrl").is_none());
}

#[test]
fn test_paused_track_keeps_its_fields() {
    // a paused track is still the current item; is_playing is copied verbatim
    let track = create_test_track("Song A", &["Artist X"], &["u1"], 200000, "s1");
    let response = create_playing_response(false, Some(track), Some(120000));

    let snapshot = snapshot_from_response(Upstream::Payload(response));

    assert!(!snapshot.is_playing);
    assert_eq!(snapshot.title.as_deref(), Some("Song A"));
    assert_eq!(snapshot.progress_ms, Some(120000));
}

#[test]
fn test_queue_caps_at_one_entry() {
    let response = QueueResponse {
        queue: vec![
            create_test_track("First", &["A"], &["l", "m", "s"], 1000, "u1"),
            create_test_track("Second", &["B"], &["l", "m", "s"], 2000, "u2"),
            create_test_track("Third", &["C"], &["l", "m", "s"], 3000, "u3"),
        ],
    };

    let entries = queue_from_response(Upstream::Payload(response));

    // only the first upcoming track is surfaced
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "First");
    assert_eq!(entries[0].song_url, "u1");
}

#[test]
fn test_queue_empty_and_failed_map_to_no_entries() {
    assert!(queue_from_response(Upstream::<QueueResponse>::Empty).is_empty());
    assert!(
        queue_from_response(Upstream::<QueueResponse>::Failed(StatusCode::NOT_FOUND)).is_empty()
    );
    assert!(
        queue_from_response(Upstream::Payload(QueueResponse { queue: vec![] })).is_empty()
    );
}

#[test]
fn test_queue_entry_uses_third_image() {
    let response = QueueResponse {
        queue: vec![create_test_track(
            "Song",
            &["Artist"],
            &["large", "medium", "small"],
            1000,
            "u1",
        )],
    };

    let entries = queue_from_response(Upstream::Payload(response));

    // index 2 is the smallest available thumbnail
    assert_eq!(entries[0].album_image_url.as_deref(), Some("small"));
}

#[test]
fn test_queue_entry_tolerates_missing_third_image() {
    let response = QueueResponse {
        queue: vec![create_test_track("Song", &["Artist"], &["large", "medium"], 1000, "u1")],
    };

    let entries = queue_from_response(Upstream::Payload(response));

    assert!(entries[0].album_image_url.is_none());

    // the key is omitted on the wire
    let value = serde_json::to_value(&entries[0]).unwrap();
    assert!(value.get("albumImageUrl").is_none());
}

#[test]
fn test_queue_entry_serialization_shape() {
    let response = QueueResponse {
        queue: vec![create_test_track(
            "Song B",
            &["Artist X", "Artist Y"],
            &["l", "m", "s"],
            180000,
            "u1",
        )],
    };

    let entries = queue_from_response(Upstream::Payload(response));

    assert_eq!(
        serde_json::to_value(&entries).unwrap(),
        json!([{
            "title": "Song B",
            "artist": "Artist X, Artist Y",
            "albumImageUrl": "s",
            "durationMs": 180000,
            "songUrl": "u1"
        }])
    );
}

#[test]
fn test_token_from_json_parses_access_token() {
    let token = token_from_json(&json!({
        "access_token": "abc",
        "token_type": "Bearer",
        "expires_in": 1800
    }))
    .unwrap();

    assert_eq!(token.value, "abc");
    assert_eq!(token.expires_in, 1800);
}

#[test]
fn test_token_from_json_defaults_expiry() {
    let token = token_from_json(&json!({ "access_token": "abc" })).unwrap();

    assert_eq!(token.expires_in, 3600);
}

#[test]
fn test_token_from_json_rejects_missing_access_token() {
    let result = token_from_json(&json!({ "error": "invalid_grant" }));

    assert!(matches!(result, Err(AuthError::MissingAccessToken)));
}

#[test]
fn test_grant_from_json_parses_grant() {
    let grant = grant_from_json(&json!({
        "access_token": "abc",
        "refresh_token": "def",
        "scope": "user-read-currently-playing",
        "expires_in": 3600
    }))
    .unwrap();

    assert_eq!(grant.refresh_token, "def");
    assert_eq!(grant.access_token, "abc");
}

#[test]
fn test_grant_from_json_surfaces_rejection() {
    let result = grant_from_json(&json!({
        "error": "invalid_grant",
        "error_description": "Invalid authorization code"
    }));

    assert!(matches!(result, Err(AuthError::Rejected(_))));
}

#[test]
fn test_grant_from_json_rejects_missing_refresh_token() {
    let result = grant_from_json(&json!({ "access_token": "abc" }));

    assert!(matches!(result, Err(AuthError::MissingRefreshToken)));
}
