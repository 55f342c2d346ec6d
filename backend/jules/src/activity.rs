//! Activity wire types and latest-media selection.

use serde::Deserialize;

/// One page-less activities listing.
#[derive(Deserialize, Debug, Default)]
pub struct ActivityList {
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// A timestamped event within a session, possibly carrying artifacts.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// RFC 3339 timestamp. Sorts correctly as a plain string.
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

/// A file-like output attached to an activity.
#[derive(Deserialize, Debug, Default)]
pub struct Artifact {
    #[serde(default)]
    pub media: Option<Media>,
}

/// Media payload: referenced by URL or embedded as base64 bytes.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    /// Inline content, assumed base64-encoded.
    #[serde(default)]
    pub data: Option<String>,
}

/// Pick the most recent media artifact from a session's activities.
///
/// Activities are ordered by `createTime` descending (missing timestamps
/// sort last); within an activity, artifacts keep their original order. The
/// scan stops at the first artifact carrying a `media` object.
pub fn latest_media(mut activities: Vec<Activity>) -> Option<Media> {
    activities.sort_by(|a, b| {
        let at = a.create_time.as_deref().unwrap_or("");
        let bt = b.create_time.as_deref().unwrap_or("");
        bt.cmp(at)
    });

    activities
        .into_iter()
        .flat_map(|activity| activity.artifacts)
        .find_map(|artifact| artifact.media)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn activities(value: serde_json::Value) -> Vec<Activity> {
        serde_json::from_value::<ActivityList>(value).unwrap().activities
    }

    #[test]
    fn newest_activity_wins_regardless_of_input_order() {
        let list = activities(json!({
            "activities": [
                { "createTime": "2024-01-01T00:00:00Z",
                  "artifacts": [{ "media": { "mimeType": "image/png", "uri": "http://x/old.png" } }] },
                { "createTime": "2024-03-01T00:00:00Z",
                  "artifacts": [{ "media": { "mimeType": "image/png", "uri": "http://x/new.png" } }] },
            ]
        }));
        let media = latest_media(list).unwrap();
        assert_eq!(media.uri.as_deref(), Some("http://x/new.png"));
    }

    #[test]
    fn skips_activities_without_artifacts() {
        let list = activities(json!({
            "activities": [
                { "createTime": "t2", "artifacts": [] },
                { "createTime": "t1",
                  "artifacts": [{ "media": { "mimeType": "image/png", "uri": "http://x/y.png" } }] },
            ]
        }));
        let media = latest_media(list).unwrap();
        assert_eq!(media.uri.as_deref(), Some("http://x/y.png"));
    }

    #[test]
    fn artifacts_within_an_activity_keep_original_order() {
        let list = activities(json!({
            "activities": [
                { "createTime": "t1",
                  "artifacts": [
                      { },
                      { "media": { "mimeType": "application/pdf", "uri": "http://x/first.pdf" } },
                      { "media": { "mimeType": "image/png", "uri": "http://x/second.png" } },
                  ] },
            ]
        }));
        let media = latest_media(list).unwrap();
        assert_eq!(media.uri.as_deref(), Some("http://x/first.pdf"));
    }

    #[test]
    fn no_media_anywhere_yields_none() {
        let list = activities(json!({
            "activities": [
                { "createTime": "t1", "artifacts": [{}] },
                { "artifacts": [] },
            ]
        }));
        assert!(latest_media(list).is_none());
    }

    #[test]
    fn empty_and_missing_fields_deserialize() {
        let list = activities(json!({}));
        assert!(list.is_empty());
        let list = activities(json!({ "activities": [{}] }));
        assert_eq!(list.len(), 1);
    }
}
