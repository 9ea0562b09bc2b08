//! Multi-part build submission.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use super::{ServiceClient, UploadContent};
use crate::config::BuildConfig;
use crate::error::{ExoportError, Result};

/// Shape of the upload endpoint's JSON response.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    /// Relative path where the built artifact can be fetched
    url: String,
}

impl ServiceClient {
    /// Submits a build request and returns the relative artifact URL.
    ///
    /// Assembles the multi-part form from the configuration and content:
    /// `appname`/`packagename`/`buildtype` always, then `app.url` or
    /// `app.zip` depending on the content source, then the mpk assets
    /// (`model.zip`, `portal.zip`, `app.cert`, `app.privkey`).
    pub async fn submit(&self, config: &BuildConfig, content: UploadContent) -> Result<String> {
        let mut form = Form::new()
            .text("appname", config.app_name.clone().unwrap_or_default())
            .text("packagename", config.package_name.clone().unwrap_or_default())
            .text("buildtype", config.build_type.to_string());

        match content {
            UploadContent::Url(url) => {
                // The service fetches the content server-side
                form = form.text("app.url", url);
            }
            UploadContent::Archive(payload) => {
                log::debug!("attaching app.zip ({} bytes)", payload.len());
                form = form.part("app.zip", Part::bytes(payload.bytes).file_name("app.zip"));
            }
        }

        if config.is_mpk() {
            if let Some(model_path) = &config.model_path {
                let model = tokio::fs::read(model_path).await?;
                form = form.part("model.zip", Part::bytes(model).file_name("model.zip"));
            }
            if let Some(portal_path) = &config.portal_path {
                let portal = tokio::fs::read(portal_path).await?;
                form = form.part("portal.zip", Part::bytes(portal).file_name("portal.zip"));
            }
            if let Some(cert_path) = &config.cert_path {
                let cert = tokio::fs::read(cert_path).await?;
                form = form.part("app.cert", Part::bytes(cert));
            }
            if let Some(privkey_path) = &config.privkey_path {
                let privkey = tokio::fs::read(privkey_path).await?;
                form = form.part("app.privkey", Part::bytes(privkey));
            }
        }

        log::info!("submitting build request to {}", self.upload);
        let response = self
            .http
            .post(self.upload.clone())
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let parsed: UploadResponse =
            serde_json::from_str(&body).map_err(|e| ExoportError::Service {
                reason: format!("unexpected upload response: {}", e),
            })?;

        log::debug!("service reports artifact at {}", parsed.url);
        Ok(parsed.url)
    }
}
