//! `velox current` – print the url of the current request path.

use velox_core::url::{GenerationOptions, SiteConfiguration, UrlGenerator};

pub fn run_current(site: &SiteConfiguration, options: &GenerationOptions) {
    println!("{}", UrlGenerator::new(site).current_with(options));
}
