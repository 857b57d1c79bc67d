use serde::{Deserialize, Serialize};

const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// A tutorial video suggested for the target job title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub video_id: String,
    pub title: String,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl VideoRecord {
    /// The link sent by the backend, or the standard watch URL for the video.
    pub fn watch_url(&self) -> String {
        match &self.link {
            Some(link) if !link.trim().is_empty() => link.clone(),
            _ => format!("{YOUTUBE_WATCH_URL}{}", self.video_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url_derived_from_video_id() {
        let json = r#"{"video_id": "abc123", "title": "Rust in 100 seconds",
                       "channel": "Fireship", "thumbnail": "https://i.ytimg.com/x.jpg"}"#;
        let video: VideoRecord = serde_json::from_str(json).unwrap();
        assert_eq!(video.watch_url(), "https://www.youtube.com/watch?v=abc123");
    }

    #[test]
    fn test_watch_url_prefers_backend_link() {
        let video = VideoRecord {
            video_id: "abc123".to_string(),
            title: "Rust".to_string(),
            channel: String::new(),
            thumbnail: String::new(),
            link: Some("https://youtu.be/abc123".to_string()),
        };
        assert_eq!(video.watch_url(), "https://youtu.be/abc123");
    }
}
