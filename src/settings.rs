use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Response to a settings fetch. `dict` is the user's full custom word list.
#[derive(Debug, Deserialize)]
pub struct SettingsResponse {
    pub resp: bool,
    #[serde(default)]
    pub dict: Vec<String>,
}

/// Settings update payload. The server stores the full list; there is no
/// append endpoint, so every change re-sends the whole dictionary.
#[derive(Debug, Serialize)]
pub struct SettingsUpdate {
    pub dictionary: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateResponse {
    pub resp: bool,
}

/// Typed client for the user-settings service.
pub struct SettingsClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl SettingsClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build settings HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// The user's custom word list, failing open: any transport, decode, or
    /// server-side error yields an empty list so spell checking proceeds
    /// without augmentation.
    pub fn fetch_custom_words(&self) -> Vec<String> {
        match self.try_fetch_custom_words() {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Warning: could not fetch custom dictionary: {e:#}");
                Vec::new()
            }
        }
    }

    fn try_fetch_custom_words(&self) -> Result<Vec<String>> {
        let url = format!("{}/settings", self.base_url);
        let response: SettingsResponse = self
            .http
            .get(&url)
            .send()
            .context("Settings fetch failed")?
            .error_for_status()
            .context("Settings fetch was rejected")?
            .json()
            .context("Settings response was not valid JSON")?;

        if !response.resp {
            anyhow::bail!("Settings service declined the request");
        }

        Ok(response.dict)
    }

    /// Append one word to the custom dictionary: read the current list,
    /// add the word if absent, and write the whole list back.
    pub fn add_word(&self, word: &str) -> Result<()> {
        let mut words = self.try_fetch_custom_words()?;
        if !words.iter().any(|w| w == word) {
            words.push(word.to_string());
        }
        self.save_words(words)
    }

    fn save_words(&self, dictionary: Vec<String>) -> Result<()> {
        let url = format!("{}/settings", self.base_url);
        let response: UpdateResponse = self
            .http
            .post(&url)
            .json(&SettingsUpdate { dictionary })
            .send()
            .context("Settings update failed")?
            .error_for_status()
            .context("Settings update was rejected")?
            .json()
            .context("Settings update response was not valid JSON")?;

        if !response.resp {
            anyhow::bail!("Settings service did not accept the update");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_fails_open_when_unreachable() {
        // Reserved TEST-NET-1 address; nothing listens there.
        let client = SettingsClient::new("http://192.0.2.1:1/api").unwrap();
        assert!(client.fetch_custom_words().is_empty());
    }

    #[test]
    fn test_settings_response_decodes() {
        let response: SettingsResponse =
            serde_json::from_str(r#"{"resp": true, "dict": ["Ayaka", "wiki"]}"#).unwrap();
        assert!(response.resp);
        assert_eq!(response.dict, vec!["Ayaka", "wiki"]);
    }

    #[test]
    fn test_missing_dict_defaults_to_empty() {
        let response: SettingsResponse = serde_json::from_str(r#"{"resp": false}"#).unwrap();
        assert!(response.dict.is_empty());
    }

    #[test]
    fn test_update_payload_shape() {
        let update = SettingsUpdate {
            dictionary: vec!["one".to_string()],
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"dictionary":["one"]}"#
        );
    }
}
