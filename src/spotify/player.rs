use crate::{
    spotify::{self, NOW_PLAYING_ENDPOINT, QUEUE_ENDPOINT, Upstream, UpstreamError},
    types::{
        AccessToken, ArtistObject, CurrentlyPlayingResponse, PlaybackSnapshot, QueueEntry,
        QueueResponse, TrackObject,
    },
};

/// Retrieves the currently playing track as a normalized snapshot.
///
/// This adapter fails open: upstream empty states, error statuses, transport
/// failures and malformed payloads all collapse into the not-playing
/// snapshot. The polling frontend never sees a technical error on this path.
///
/// # Arguments
///
/// * `token` - Access token freshly obtained from the broker
///
/// # Returns
///
/// A [`PlaybackSnapshot`] that is either the bare not-playing state or the
/// fully mapped current track. `is_playing` is copied verbatim from
/// upstream, so a paused track keeps its fields with `is_playing` false.
pub async fn get_snapshot(token: &AccessToken) -> PlaybackSnapshot {
    match spotify::get_player_endpoint::<CurrentlyPlayingResponse>(NOW_PLAYING_ENDPOINT, token)
        .await
    {
        Ok(upstream) => snapshot_from_response(upstream),
        Err(_) => PlaybackSnapshot::not_playing(),
    }
}

/// Maps a classified currently-playing response to the normalized snapshot.
///
/// Empty and failed responses, and payloads without a playable item, map to
/// the not-playing snapshot. Otherwise the artist names are joined with
/// `", "` in upstream order, the album image is the first (largest) image if
/// any, and duration/progress are copied verbatim.
pub fn snapshot_from_response(upstream: Upstream<CurrentlyPlayingResponse>) -> PlaybackSnapshot {
    let Upstream::Payload(playing) = upstream else {
        return PlaybackSnapshot::not_playing();
    };

    let Some(item) = playing.item else {
        return PlaybackSnapshot::not_playing();
    };

    PlaybackSnapshot {
        is_playing: playing.is_playing,
        title: Some(item.name),
        artist: Some(join_artist_names(&item.artists)),
        album_image_url: item.album.images.first().map(|image| image.url.clone()),
        song_url: Some(item.external_urls.spotify),
        duration_ms: Some(item.duration_ms),
        progress_ms: playing.progress_ms,
    }
}

/// Retrieves the upcoming queue, capped at one entry.
///
/// Unlike [`get_snapshot`], this adapter fails closed: transport and decode
/// failures propagate as [`UpstreamError`] and the endpoint turns them into
/// HTTP 500. Upstream empty and error statuses still map to an empty queue.
///
/// # Arguments
///
/// * `token` - Access token freshly obtained from the broker
///
/// # Returns
///
/// A list with zero or one [`QueueEntry`]. Only the first upcoming track is
/// surfaced; the rest of the upstream queue is discarded.
pub async fn get_queue(token: &AccessToken) -> Result<Vec<QueueEntry>, UpstreamError> {
    let upstream = spotify::get_player_endpoint::<QueueResponse>(QUEUE_ENDPOINT, token).await?;
    Ok(queue_from_response(upstream))
}

/// Maps a classified queue response to at most one normalized entry.
///
/// The album image is the third upstream image (smallest thumbnail) when
/// present; out-of-range indices yield no URL and the frontend tolerates the
/// absence.
pub fn queue_from_response(upstream: Upstream<QueueResponse>) -> Vec<QueueEntry> {
    let Upstream::Payload(data) = upstream else {
        return Vec::new();
    };

    data.queue
        .into_iter()
        .take(1)
        .map(queue_entry_from_track)
        .collect()
}

fn queue_entry_from_track(track: TrackObject) -> QueueEntry {
    QueueEntry {
        title: track.name,
        artist: join_artist_names(&track.artists),
        album_image_url: track.album.images.get(2).map(|image| image.url.clone()),
        duration_ms: track.duration_ms,
        song_url: track.external_urls.spotify,
    }
}

fn join_artist_names(artists: &[ArtistObject]) -> String {
    artists
        .iter()
        .map(|artist| artist.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
