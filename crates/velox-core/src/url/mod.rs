//! Link generation.
//!
//! Produces absolute or root-relative links for either scheme from a
//! [`SiteConfiguration`] snapshot, with or without clean urls. Generation is a
//! pure function of the path, the options and the snapshot.

mod base;
mod generate;
mod options;
mod scheme;
mod site;

pub use base::{BasePaths, FRONT_CONTROLLER, ROOT};
pub use generate::{CurrentPath, UrlGenerator};
pub use options::GenerationOptions;
pub use scheme::{Scheme, UnknownScheme};
pub use site::{FrameworkSettings, RequestInfo, SiteConfiguration, SiteError};
