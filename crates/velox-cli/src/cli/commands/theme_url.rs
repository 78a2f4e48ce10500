//! `velox theme-url` – print the url for a path inside the active theme.

use velox_core::url::{GenerationOptions, SiteConfiguration, UrlGenerator};

pub fn run_theme_url(site: &SiteConfiguration, path: Option<&str>, options: &GenerationOptions) {
    println!("{}", UrlGenerator::new(site).generate_for_theme(path, options));
}
