//! # Photo Download Module
//!
//! Resolves an inbound photo reference to raw bytes: picks the best
//! size variant offered by Telegram and fetches it from the bot file
//! endpoint. No retry happens here; a single failure is surfaced to the
//! caller immediately.

use log::debug;
use teloxide::prelude::*;
use teloxide::types::{FileId, PhotoSize};

use crate::errors::DownloadError;

/// Select the photo variant with the largest pixel area
///
/// Ties are broken by byte size, then by listing order (last wins, the
/// same variant `photos.last()` would pick on Telegram's
/// smallest-to-largest ordering).
pub fn select_largest_photo(photos: &[PhotoSize]) -> Option<&PhotoSize> {
    photos
        .iter()
        .max_by_key(|photo| (u64::from(photo.width) * u64::from(photo.height), photo.file.size))
}

/// Download a photo's raw bytes via the Telegram file endpoint
pub async fn download_photo(bot: &Bot, file_id: FileId) -> Result<Vec<u8>, DownloadError> {
    let file = bot
        .get_file(file_id)
        .await
        .map_err(|e| DownloadError::Request(e.to_string()))?;
    let url = format!(
        "https://api.telegram.org/file/bot{}/{}",
        bot.token(),
        file.path
    );

    let response = reqwest::get(&url)
        .await
        .map_err(|e| DownloadError::Request(e.to_string()))?;
    if !response.status().is_success() {
        return Err(DownloadError::Status(response.status().as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| DownloadError::Request(e.to_string()))?;
    if bytes.is_empty() {
        return Err(DownloadError::EmptyBody);
    }

    debug!("Downloaded {} photo bytes", bytes.len());
    Ok(bytes.to_vec())
}
