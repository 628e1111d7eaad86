//! The two fetch procedures behind the MCP tools.
//!
//! They deliberately report failures differently:
//! - [`fetch_conference_papers`] turns API failures into a returned message and
//!   only errors on local filesystem failures;
//! - [`fetch_papers_from_url`] propagates every failure to the caller.

use std::path::Path;

use super::{write_bundle, PaperRecord};
use crate::dblp::{DblpClient, DblpError};

/// Series whose proceedings keys carry a `c` after the year (`sigmod2020c`).
const YEAR_C_SERIES: &str = "sigmod";

/// Bundle name used when none can be derived from a URL.
pub const FALLBACK_BUNDLE_NAME: &str = "dblp_papers";

/// Table-of-contents key probe for one conference edition.
///
/// Large proceedings are split into `{key}-1`, `{key}-2`, ... The probe starts
/// with the bare key and only moves to numbered parts once the bare key
/// comes back empty.
///
/// Entering the numbered parts sets the suffix to `-1` without consuming
/// `index`, so the first populated part is requested twice (`-1`, `-1`, `-2`,
/// ...) and its papers appear twice in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocProbe {
    series: String,
    year: String,
    suffix: String,
    index: u32,
}

impl TocProbe {
    pub fn new(conference_series: &str, year: &str) -> Self {
        let series = conference_series.to_lowercase();
        // Applied once per call; the key never gains more than one `c`.
        let year = if series == YEAR_C_SERIES {
            format!("{year}c")
        } else {
            year.to_string()
        };
        Self {
            series,
            year,
            suffix: String::new(),
            index: 1,
        }
    }

    /// Working year, including any venue-specific marker.
    pub fn year(&self) -> &str {
        &self.year
    }

    /// `""` for the bare key, `"-N"` for part N.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn is_bare(&self) -> bool {
        self.suffix.is_empty()
    }

    pub fn is_first_part(&self) -> bool {
        self.suffix == "-1"
    }

    /// DBLP query for the current key, e.g. `toc:db/conf/icde/icde2024-1.bht:`.
    pub fn query(&self) -> String {
        format!(
            "toc:db/conf/{series}/{series}{year}{suffix}.bht:",
            series = self.series,
            year = self.year,
            suffix = self.suffix
        )
    }

    /// Switch from the bare key to part `-1`; `index` is left untouched.
    pub fn enter_parts(&mut self) {
        self.suffix = "-1".to_string();
    }

    /// After a populated part: move to `-{index}`, then bump `index`.
    pub fn advance(&mut self) {
        self.suffix = format!("-{}", self.index);
        self.index += 1;
    }
}

/// Fetch every paper of `conference_series` `year` and save the bundle under
/// `{save_path}/{series}_{year}`.
///
/// Returns a status message. API failures become an
/// `"Error while accessing DBLP API: ..."` message and nothing is written.
pub async fn fetch_conference_papers(
    client: &DblpClient,
    conference_series: &str,
    year: &str,
    save_path: &Path,
) -> Result<String, DblpError> {
    let mut probe = TocProbe::new(conference_series, year);
    let mut papers: Vec<PaperRecord> = Vec::new();

    loop {
        let query = probe.query();
        let page = match client.search(&query).await {
            Ok(page) => page,
            Err(e) => {
                log::error!("DBLP query '{query}' failed: {e}");
                return Ok(format!("Error while accessing DBLP API: {e}"));
            }
        };
        log::debug!("'{query}': {} total hits", page.total);

        if page.total == 0 {
            if probe.is_bare() {
                probe.enter_parts();
                continue;
            }
            if probe.is_first_part() {
                log::info!(
                    "No papers found for {} {}",
                    conference_series.to_uppercase(),
                    probe.year()
                );
                return Ok(format!(
                    "No papers found for {} {}.",
                    conference_series.to_uppercase(),
                    probe.year()
                ));
            }
            break;
        }

        papers.extend(page.hits.iter().map(PaperRecord::from_hit));

        if probe.is_bare() {
            break;
        }
        probe.advance();
    }

    let bundle_name = format!("{conference_series}_{}", probe.year());
    let save_dir = save_path.join(&bundle_name);
    write_bundle(&papers, &save_dir, &bundle_name).await?;

    Ok(format!("Save completed. Save directory: {}", save_dir.display()))
}

/// Fetch the results of a ready-made search URL and save the bundle under
/// `{save_path}/{name}`, where the name comes from [`bundle_name_from_url`].
pub async fn fetch_papers_from_url(
    client: &DblpClient,
    json_url: &str,
    save_path: &Path,
) -> Result<String, DblpError> {
    let bundle_name = bundle_name_from_url(json_url);
    let page = client.fetch_url(json_url).await?;
    log::debug!("'{json_url}': {} total hits", page.total);

    let papers: Vec<PaperRecord> = page.hits.iter().map(PaperRecord::from_hit).collect();
    let save_dir = save_path.join(&bundle_name);
    write_bundle(&papers, &save_dir, &bundle_name).await?;

    Ok(format!("Save completed. Save directory: {}", save_dir.display()))
}

/// Derive a bundle name from a search URL.
///
/// Takes the text after the last `/` of the percent-decoded URL, then cuts it
/// at the first `.` and the first `?`:
/// `.../api?q=toc:db/journals/pvldb/pvldb17.bht:&format=json` gives `pvldb17`.
pub fn bundle_name_from_url(json_url: &str) -> String {
    let decoded = urlencoding::decode(json_url)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| json_url.to_string());

    let last_segment = decoded.rsplit('/').next().unwrap_or_default();
    let name = last_segment
        .split('.')
        .next()
        .unwrap_or_default()
        .split('?')
        .next()
        .unwrap_or_default();

    if name.is_empty() {
        FALLBACK_BUNDLE_NAME.to_string()
    } else {
        name.to_string()
    }
}
