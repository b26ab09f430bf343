//! Social/cloud chart sharing.
//!
//! Every share renders the chart through the same export document builder,
//! then dispatches through a transport chosen once per call from platform
//! capabilities: the OS share sheet when available, a platform web intent
//! otherwise, or a local download with an instructional note for targets
//! with no sharing surface at all. Cloud targets are delivery stubs — the
//! artifact is produced locally and the user finishes the upload.

pub mod message;
pub mod presets;

mod transport;

use std::fmt;

use crate::charts::ChartHandle;
use crate::export::{
    self, Background, ExportFormat, ExportOptions, Watermark, SOCIAL_HEIGHT, SOCIAL_WIDTH,
};

pub use presets::Audience;
pub use transport::ShareTransport;

/// Landing URL carried by intents that share a link rather than text.
const PRODUCT_URL: &str = "https://sentimentx.dev";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SharePlatform {
    Twitter,
    LinkedIn,
    Facebook,
    Instagram,
    Reddit,
}

impl SharePlatform {
    pub fn all() -> [SharePlatform; 5] {
        [
            SharePlatform::Twitter,
            SharePlatform::LinkedIn,
            SharePlatform::Facebook,
            SharePlatform::Instagram,
            SharePlatform::Reddit,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            SharePlatform::Twitter => "twitter",
            SharePlatform::LinkedIn => "linkedin",
            SharePlatform::Facebook => "facebook",
            SharePlatform::Instagram => "instagram",
            SharePlatform::Reddit => "reddit",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SharePlatform::Twitter => "Twitter",
            SharePlatform::LinkedIn => "LinkedIn",
            SharePlatform::Facebook => "Facebook",
            SharePlatform::Instagram => "Instagram",
            SharePlatform::Reddit => "Reddit",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SharePlatform::Twitter => "🐦",
            SharePlatform::LinkedIn => "💼",
            SharePlatform::Facebook => "📘",
            SharePlatform::Instagram => "📸",
            SharePlatform::Reddit => "🤖",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SharePlatform::Twitter => "Share to Twitter feed",
            SharePlatform::LinkedIn => "Share to LinkedIn network",
            SharePlatform::Facebook => "Share to Facebook timeline",
            SharePlatform::Instagram => "Download for Instagram",
            SharePlatform::Reddit => "Share to Reddit community",
        }
    }

    /// Platform caption limit, for the character counter.
    pub fn max_length(&self) -> usize {
        match self {
            SharePlatform::Twitter => 280,
            SharePlatform::LinkedIn => 3_000,
            SharePlatform::Facebook => 63_206,
            SharePlatform::Instagram => 2_200,
            SharePlatform::Reddit => 40_000,
        }
    }

    pub fn parse(raw: &str) -> Result<Self, ShareError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "twitter" => Ok(SharePlatform::Twitter),
            "linkedin" => Ok(SharePlatform::LinkedIn),
            "facebook" => Ok(SharePlatform::Facebook),
            "instagram" => Ok(SharePlatform::Instagram),
            "reddit" => Ok(SharePlatform::Reddit),
            _ => Err(ShareError::UnsupportedTarget(raw.to_string())),
        }
    }

    /// Web-intent URL carrying the message; photo-only platforms have none.
    pub(crate) fn intent_url(&self, text: &str) -> Option<String> {
        match self {
            SharePlatform::Twitter => Some(format!(
                "https://twitter.com/intent/tweet?text={}",
                urlencoding::encode(text)
            )),
            SharePlatform::LinkedIn => Some(format!(
                "https://www.linkedin.com/sharing/share-offsite/?url={}",
                urlencoding::encode(PRODUCT_URL)
            )),
            SharePlatform::Facebook => Some(format!(
                "https://www.facebook.com/sharer/sharer.php?u={}",
                urlencoding::encode(PRODUCT_URL)
            )),
            SharePlatform::Reddit => Some(format!(
                "https://www.reddit.com/submit?title={}",
                urlencoding::encode(text)
            )),
            SharePlatform::Instagram => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloudService {
    GoogleDrive,
    Dropbox,
    OneDrive,
    ICloud,
}

impl CloudService {
    pub fn all() -> [CloudService; 4] {
        [
            CloudService::GoogleDrive,
            CloudService::Dropbox,
            CloudService::OneDrive,
            CloudService::ICloud,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            CloudService::GoogleDrive => "googledrive",
            CloudService::Dropbox => "dropbox",
            CloudService::OneDrive => "onedrive",
            CloudService::ICloud => "icloud",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CloudService::GoogleDrive => "Google Drive",
            CloudService::Dropbox => "Dropbox",
            CloudService::OneDrive => "OneDrive",
            CloudService::ICloud => "iCloud",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CloudService::GoogleDrive => "📁",
            CloudService::Dropbox => "📦",
            CloudService::OneDrive => "☁️",
            CloudService::ICloud => "☁️",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CloudService::GoogleDrive => "Save to Google Drive",
            CloudService::Dropbox => "Save to Dropbox",
            CloudService::OneDrive => "Save to OneDrive",
            CloudService::ICloud => "Save to iCloud Drive",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, ShareError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "googledrive" => Ok(CloudService::GoogleDrive),
            "dropbox" => Ok(CloudService::Dropbox),
            "onedrive" => Ok(CloudService::OneDrive),
            "icloud" => Ok(CloudService::ICloud),
            _ => Err(ShareError::UnsupportedTarget(raw.to_string())),
        }
    }

    fn instruction(&self) -> &'static str {
        match self {
            CloudService::GoogleDrive => {
                "🔗 File ready for Google Drive! Upload the downloaded file to your Google Drive."
            }
            CloudService::Dropbox => {
                "📦 File ready for Dropbox! Upload the downloaded file to your Dropbox."
            }
            CloudService::OneDrive => {
                "☁️ File ready for OneDrive! Upload the downloaded file to your OneDrive."
            }
            CloudService::ICloud => {
                "☁️ File downloaded! Use AirDrop or iCloud Drive to save it to iCloud."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLength {
    Short,
    Medium,
    Long,
}

impl MessageLength {
    pub fn all() -> [MessageLength; 3] {
        [
            MessageLength::Short,
            MessageLength::Medium,
            MessageLength::Long,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            MessageLength::Short => "Concise",
            MessageLength::Medium => "Balanced",
            MessageLength::Long => "Comprehensive",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MessageLength::Short => "Brief and impactful",
            MessageLength::Medium => "Detailed with context",
            MessageLength::Long => "Full story with insights",
        }
    }
}

#[derive(Debug)]
pub enum ShareError {
    /// An unrecognised platform/service identifier, named for the user.
    UnsupportedTarget(String),
    /// The shareable artifact could not be produced.
    Artifact(String),
    /// The artifact existed but the hand-off failed.
    Dispatch(String),
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareError::UnsupportedTarget(id) => write!(f, "Unsupported share target: {id}"),
            ShareError::Artifact(err) => write!(f, "Could not prepare share image: {err}"),
            ShareError::Dispatch(err) => write!(f, "Sharing failed: {err}"),
        }
    }
}

impl std::error::Error for ShareError {}

#[derive(Debug, Clone, PartialEq)]
pub struct ShareOptions {
    pub message: String,
    pub format: ExportFormat,
    pub quality: f64,
    pub include_watermark: bool,
}

impl Default for ShareOptions {
    fn default() -> Self {
        Self {
            message: String::new(),
            format: ExportFormat::Png,
            quality: export::DEFAULT_QUALITY,
            include_watermark: true,
        }
    }
}

/// What actually happened, for the status line.
#[derive(Debug, Clone, PartialEq)]
pub enum ShareOutcome {
    NativeShared,
    IntentOpened,
    Downloaded { path: Option<String>, note: String },
}

impl ShareOutcome {
    pub fn describe(&self) -> String {
        match self {
            ShareOutcome::NativeShared => "Handed to the system share sheet".to_string(),
            ShareOutcome::IntentOpened => "Share window opened".to_string(),
            ShareOutcome::Downloaded { path: Some(path), note } => {
                format!("{note} (saved to {path})")
            }
            ShareOutcome::Downloaded { path: None, note } => note.clone(),
        }
    }
}

/// Share a chart to a social platform: fixed 1200×630 social card with the
/// gradient backdrop, dispatched per the selected transport.
pub async fn share_to_social(
    handle: &ChartHandle,
    platform: SharePlatform,
    options: &ShareOptions,
) -> Result<ShareOutcome, ShareError> {
    let export_options = ExportOptions {
        format: ExportFormat::Png,
        width: SOCIAL_WIDTH,
        height: SOCIAL_HEIGHT,
        background: Background::Gradient,
        quality: options.quality,
        watermark: if options.include_watermark {
            Watermark::Accent
        } else {
            Watermark::None
        },
    };
    let bytes = export::artifact_bytes(handle, &export_options)
        .await
        .map_err(|err| ShareError::Artifact(err.to_string()))?;

    let transport = ShareTransport::select(platform);
    transport
        .dispatch_social(platform, &handle.title, &options.message, bytes)
        .await
}

/// Hand a chart to a cloud target in the user-selected format. iCloud
/// prefers the native share sheet; everything else delivers locally with an
/// instructional note.
pub async fn share_to_cloud(
    handle: &ChartHandle,
    service: CloudService,
    options: &ShareOptions,
) -> Result<ShareOutcome, ShareError> {
    let export_options = ExportOptions {
        format: options.format,
        quality: options.quality,
        watermark: if options.include_watermark {
            Watermark::Subtle
        } else {
            Watermark::None
        },
        ..Default::default()
    };
    let bytes = export::artifact_bytes(handle, &export_options)
        .await
        .map_err(|err| ShareError::Artifact(err.to_string()))?;

    let filename = export::stamped_filename(&handle.title, options.format.extension());

    if service == CloudService::ICloud && crate::core::platform::supports_native_share() {
        return transport::native_share(&handle.title, "", &filename, options.format.mime(), bytes)
            .await
            .map(|_| ShareOutcome::NativeShared);
    }

    let path = export::deliver(&filename, options.format.mime(), bytes)
        .await
        .map_err(ShareError::Dispatch)?;
    Ok(ShareOutcome::Downloaded {
        path,
        note: service.instruction().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_identifiers_name_themselves_in_the_error() {
        let err = SharePlatform::parse("myspace").expect_err("unknown platform");
        assert_eq!(err.to_string(), "Unsupported share target: myspace");

        let err = CloudService::parse("megaupload").expect_err("unknown service");
        assert!(err.to_string().contains("megaupload"));
    }

    #[test]
    fn known_identifiers_round_trip() {
        for platform in SharePlatform::all() {
            assert_eq!(
                SharePlatform::parse(platform.id()).expect("round trip"),
                platform
            );
        }
        for service in CloudService::all() {
            assert_eq!(CloudService::parse(service.id()).expect("round trip"), service);
        }
    }

    #[test]
    fn intent_urls_carry_the_encoded_message() {
        let url = SharePlatform::Twitter
            .intent_url("Check out this chart & more")
            .expect("twitter intent");
        assert!(url.starts_with("https://twitter.com/intent/tweet?text="));
        assert!(url.contains("Check%20out%20this%20chart%20%26%20more"));

        // Photo-only platform has no intent at all.
        assert!(SharePlatform::Instagram.intent_url("hi").is_none());
    }

    #[test]
    fn sharing_an_empty_chart_fails_before_dispatch() {
        let handle = ChartHandle::new("Sentiment Distribution", None);
        let result = futures::executor::block_on(share_to_social(
            &handle,
            SharePlatform::Twitter,
            &ShareOptions::default(),
        ));
        assert!(matches!(result, Err(ShareError::Artifact(_))));
    }
}
