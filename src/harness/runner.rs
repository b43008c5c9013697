use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use reqwest::{header::HeaderMap, Client};

use crate::inspect::ImageInspector;

use super::{
    models::{CaseRecord, FetchRecord},
    printer::{print_case_record, print_case_start},
    writer,
};

pub struct RunOptions<'a> {
    pub base_url_1: &'a str,
    pub base_url_2: &'a str,
    pub output_dir: &'a Path,
    pub inspector: &'a dyn ImageInspector,
}

/// Probes every path against both endpoints, strictly in list order, and
/// persists one comparison record per case. Within a case endpoint 1 is
/// always fetched before endpoint 2, so shared server-side state sees a
/// deterministic probe order. Any transport or persistence failure aborts
/// the whole run; earlier cases' outputs stay on disk.
pub async fn run_comparison(paths: &[String], options: &RunOptions<'_>) -> Result<()> {
    let client = Client::new();

    for (case_no, path) in paths.iter().enumerate() {
        print_case_start(case_no, path);

        let url_1 = format!("{}{}", options.base_url_1, path);
        let url_2 = format!("{}{}", options.base_url_2, path);

        let result1 = fetch_endpoint(
            &client,
            &url_1,
            &writer::artifact_path(options.output_dir, case_no, 1),
            options.inspector,
        )
        .await?;
        let result2 = fetch_endpoint(
            &client,
            &url_2,
            &writer::artifact_path(options.output_dir, case_no, 2),
            options.inspector,
        )
        .await?;

        let record = CaseRecord {
            case_no,
            result1,
            result2,
        };
        writer::write_case_record(options.output_dir, &record)?;
        print_case_record(&record);
    }

    Ok(())
}

/// One timed GET. The clock covers the transport round trip only: it stops
/// once the full body is in memory, before the artifact write. Non-2xx
/// statuses are recorded, not treated as failures; whatever body came back
/// is persisted and inspected.
pub async fn fetch_endpoint(
    client: &Client,
    url: &str,
    artifact: &Path,
    inspector: &dyn ImageInspector,
) -> Result<FetchRecord> {
    let start = Instant::now();
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("requesting {url}"))?;
    let status_code = response.status().as_u16();
    let header_map = response.headers().clone();
    let bytes = response
        .bytes()
        .await
        .with_context(|| format!("reading response body from {url}"))?;
    let elapsed_millis = start.elapsed().as_millis() as i64;

    writer::write_artifact(artifact, &bytes)?;

    let metadata = inspector.inspect(&bytes);

    Ok(FetchRecord {
        elapsed_millis,
        status_code,
        response_headers: collect_headers(&header_map),
        image_type: metadata.kind.as_str().to_string(),
        height: metadata.height,
        width: metadata.width,
    })
}

fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, Vec<String>> {
    let mut collected: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in headers {
        collected
            .entry(name.as_str().to_string())
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    collected
}
