use crate::error::AppError;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub fn patch_notes_url(base_url: &str, year: i32, month: u32) -> String {
    format!("{}/{}/{:02}/", base_url.trim_end_matches('/'), year, month)
}

/// Fetches the monthly patch-notes page. A 404 means the page for that
/// month hasn't been published yet and reads as "no data this period",
/// not as a failure; anything else non-2xx aborts the run.
pub fn fetch_patch_notes_page(
    base_url: &str,
    year: i32,
    month: u32,
) -> Result<Option<String>, AppError> {
    let url = patch_notes_url(base_url, year, month);

    let response = ureq::get(&url)
        .set("User-Agent", USER_AGENT)
        .set(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        )
        .set("Accept-Language", "zh-CN,zh;q=0.9,en-US;q=0.8,en;q=0.7")
        .set("Referer", "https://ow.blizzard.cn/")
        .call();

    match response {
        Ok(resp) => {
            let body = resp
                .into_string()
                .map_err(|e| AppError::HttpError(e.to_string()))?;
            Ok(Some(body))
        }
        Err(ureq::Error::Status(404, _)) => Ok(None),
        Err(e) => Err(AppError::HttpError(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_year_slash_zero_padded_month() {
        assert_eq!(
            patch_notes_url("https://example.com/patch-notes/live", 2025, 5),
            "https://example.com/patch-notes/live/2025/05/"
        );
        assert_eq!(
            patch_notes_url("https://example.com/patch-notes/live/", 2025, 12),
            "https://example.com/patch-notes/live/2025/12/"
        );
    }
}
