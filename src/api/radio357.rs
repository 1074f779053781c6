//! [Radio 357](https://radio357.pl/ramowka) schedule page client.

use std::time::Duration;

use itertools::Itertools;
use regex::Regex;
use reqwest::{Client, Url};

use crate::prelude::*;

pub struct Api {
    client: Client,
    schedule_url: Url,
}

impl Api {
    pub fn try_new(schedule_url: Url) -> Result<Self> {
        let client =
            Client::builder().user_agent("onair").timeout(Duration::from_secs(10)).build()?;
        Ok(Self { client, schedule_url })
    }

    /// Fetch the page and extract the announced `(start time text, program
    /// name)` pairs of the «today» section, in page order.
    #[instrument(skip_all)]
    pub async fn get_today(&self) -> Result<Vec<(String, String)>> {
        info!(url = %self.schedule_url, "fetching…");
        let html = self
            .client
            .get(self.schedule_url.clone())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
            .context("failed to read the schedule page")?;
        extract_today(&html)
    }
}

const TODAY_MARKER: &str = r#"class="schedule-day schedule-day--today""#;

/// Cut today's section out of the page: it runs from the today marker up to
/// the next day section, or to the end of the document.
fn today_section(html: &str) -> Result<&str> {
    let start = html.find(TODAY_MARKER).context("the page has no today section")?;
    let section = &html[start + TODAY_MARKER.len()..];
    let end = section.find(r#"class="schedule-day"#).unwrap_or(section.len());
    Ok(&section[..end])
}

fn extract_today(html: &str) -> Result<Vec<(String, String)>> {
    let section = today_section(html)?;
    let time_pattern = Regex::new(r#"(?s)<span class="schedule-item__time"[^>]*>(.*?)</span>"#)?;
    let name_pattern = Regex::new(r#"(?s)<div class="schedule-item__name"[^>]*>(.*?)</div>"#)?;
    let tag_pattern = Regex::new(r"<[^>]*>")?;

    let inner_text = |markup: &str| -> String {
        let text = tag_pattern.replace_all(markup, " ");
        let text = text
            .replace("&amp;", "&")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&nbsp;", " ");
        text.split_whitespace().join(" ")
    };

    let times: Vec<String> =
        time_pattern.captures_iter(section).map(|captures| inner_text(&captures[1])).collect();
    let names: Vec<String> =
        name_pattern.captures_iter(section).map(|captures| inner_text(&captures[1])).collect();
    ensure!(
        times.len() == names.len(),
        "mismatching counts of start times ({}) and program names ({})",
        times.len(),
        names.len(),
    );
    Ok(times.into_iter().zip(names).collect())
}
