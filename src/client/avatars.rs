//! Avatar Fetches
//!
//! Secondary per-record asset fetches. Issued concurrently with unbounded
//! fan-out, one future per person; each is isolated with its own error
//! handler so one failure never blocks or fails the others. A failed fetch
//! is logged and the avatar stays [`AvatarState::Unavailable`] for the rest
//! of the session: no timeout policy beyond the client default, no retry,
//! no cancellation.

use futures_util::future::join_all;
use std::collections::HashMap;

use crate::client::backend::BackendClient;
use crate::model::record::PersonRecord;

/// Built-in placeholder served when an avatar is unavailable
pub const AVATAR_PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><circle cx="32" cy="24" r="12" fill="#9ca3af"/><path d="M8 60c0-13 11-20 24-20s24 7 24 20" fill="#9ca3af"/></svg>"##;

/// Outcome of one avatar fetch
#[derive(Debug, Clone, PartialEq)]
pub enum AvatarState {
    /// Fetched successfully
    Ready { bytes: Vec<u8>, content_type: String },
    /// No URL, or the fetch failed; renders the placeholder
    Unavailable,
}

/// Fetch avatars for every person concurrently.
///
/// Returns a map keyed by person id with one entry per input record.
/// People without an avatar URL map straight to `Unavailable`.
pub async fn fetch_all_avatars(
    client: &BackendClient,
    people: &[PersonRecord],
) -> HashMap<String, AvatarState> {
    let fetches = people.iter().map(|person| async move {
        let state = match &person.avatar_url {
            Some(url) => match client.fetch_avatar(url).await {
                Ok((bytes, content_type)) => AvatarState::Ready {
                    bytes,
                    content_type,
                },
                Err(e) => {
                    tracing::warn!(
                        person_id = %person.id,
                        url = %url,
                        error = %e,
                        "Avatar fetch failed; using placeholder for this session"
                    );
                    AvatarState::Unavailable
                }
            },
            None => AvatarState::Unavailable,
        };
        (person.id.clone(), state)
    });

    join_all(fetches).await.into_iter().collect()
}
