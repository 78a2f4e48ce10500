//! `velox url` – print the url for an application path.

use velox_core::url::{GenerationOptions, SiteConfiguration, UrlGenerator};

pub fn run_url(site: &SiteConfiguration, path: Option<&str>, options: &GenerationOptions) {
    println!("{}", UrlGenerator::new(site).generate(path, options));
}
