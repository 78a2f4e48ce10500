//! `velox current-path` – print the current request path or parts of it.

use velox_core::url::{CurrentPath, SiteConfiguration, UrlGenerator};

pub fn run_current_path(site: &SiteConfiguration, index: Option<usize>, segments: bool) {
    match UrlGenerator::new(site).current_path(index, segments) {
        Some(CurrentPath::Joined(path)) => println!("{path}"),
        Some(CurrentPath::Segments(segments)) => {
            for segment in segments {
                println!("{segment}");
            }
        }
        Some(CurrentPath::Segment(segment)) => println!("{segment}"),
        None => tracing::info!(?index, "no such path segment"),
    }
}
