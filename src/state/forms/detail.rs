//! Read-only detail pages for posted listings

use chrono::NaiveDate;

/// Label and rendered value of one line on a detail tab
pub type DetailRow = (&'static str, String);

/// A posted form shown as a tabbed detail page
pub trait ListingDetail {
    /// Tab labels in display order
    const TABS: &'static [&'static str];

    /// Page title
    fn heading(&self) -> String;

    /// One-line context shown under the title
    fn byline(&self) -> String;

    /// Rows of one tab. Out-of-range tabs are empty.
    fn tab_rows(&self, tab: usize) -> Vec<DetailRow>;
}

pub(crate) fn or_unspecified(value: &str) -> String {
    if value.trim().is_empty() {
        "Not specified".to_string()
    } else {
        value.to_string()
    }
}

pub(crate) fn yes_no(flag: bool) -> String {
    let answer = if flag { "Yes" } else { "No" };
    answer.to_string()
}

pub(crate) fn date_or_unspecified(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "Not specified".to_string())
}
