//! HTTP client and CSV parsing for the analytics consumer.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{AnalyticsError, Result};

/// Fetch the raw CSV body from a feed endpoint.
///
/// Any non-200 response is an error; the feed defines no other success
/// status.
pub async fn fetch_threat_csv(client: &reqwest::Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await.map_err(AnalyticsError::from)?;

    let status = response.status();
    if !status.is_success() {
        return Err(AnalyticsError::BadStatus {
            status: status.as_u16(),
        }
        .into());
    }

    Ok(response.text().await.map_err(AnalyticsError::from)?)
}

/// Parse the score column out of CSV text.
///
/// The first line is the header and is skipped; every following line must
/// carry a score in its second field. Line numbers in errors are 1-based
/// positions in the body.
pub fn parse_scores(csv: &str) -> Result<Vec<Decimal>> {
    let mut scores = Vec::new();

    for (i, line) in csv.lines().enumerate().skip(1) {
        let line_no = i + 1;
        let score_field = line
            .split(',')
            .nth(1)
            .ok_or(AnalyticsError::MissingScore { line: line_no })?;

        let score =
            Decimal::from_str(score_field).map_err(|_| AnalyticsError::ParseScore {
                line: line_no,
                value: score_field.to_string(),
            })?;

        scores.push(score);
    }

    Ok(scores)
}
