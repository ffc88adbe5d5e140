use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub value: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationGrant {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
}

// Upstream player payloads. Only the fields the proxy consumes are declared;
// serde ignores the rest.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentlyPlayingResponse {
    pub is_playing: bool,
    pub item: Option<TrackObject>,
    pub progress_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueResponse {
    pub queue: Vec<TrackObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub name: String,
    pub artists: Vec<ArtistObject>,
    pub album: AlbumObject,
    pub duration_ms: u64,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistObject {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumObject {
    pub images: Vec<ImageObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageObject {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

// Normalized wire types served to the polling frontend. Absent optionals are
// omitted from the JSON, so the empty state serializes to exactly
// {"isPlaying":false}.

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSnapshot {
    pub is_playing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub song_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_ms: Option<u64>,
}

impl PlaybackSnapshot {
    /// The snapshot served whenever nothing is playing or the upstream state
    /// could not be determined.
    pub fn not_playing() -> Self {
        PlaybackSnapshot {
            is_playing: false,
            title: None,
            artist: None,
            album_image_url: None,
            song_url: None,
            duration_ms: None,
            progress_ms: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueEntry {
    pub title: String,
    pub artist: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_image_url: Option<String>,
    pub duration_ms: u64,
    pub song_url: String,
}
