use super::{GenerationOptions, Scheme, SiteConfiguration};

/// Result of [`UrlGenerator::current_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentPath<'a> {
    /// Segments joined with `/`.
    Joined(String),
    Segments(&'a [String]),
    Segment(&'a str),
}

/// Builds links against one request's [`SiteConfiguration`].
#[derive(Debug, Clone, Copy)]
pub struct UrlGenerator<'a> {
    site: &'a SiteConfiguration,
}

impl<'a> UrlGenerator<'a> {
    pub fn new(site: &'a SiteConfiguration) -> Self {
        Self { site }
    }

    pub fn site(&self) -> &'a SiteConfiguration {
        self.site
    }

    pub fn is_secure_connection(&self) -> bool {
        self.site.is_secure_connection()
    }

    /// Generates a link to `path`, or to the front page when `path` is `None`.
    ///
    /// The path is appended verbatim. `"/"` is treated like `None`; the empty
    /// string is not, and with clean urls off it yields `<base>index.php/`.
    ///
    /// # Examples
    ///
    /// With base `/veloxphp/` and clean urls on:
    /// - `generate(None, ..)` → `/veloxphp/`
    /// - `generate(Some("veloxphp/front"), ..)` → `/veloxphp/veloxphp/front`
    ///
    /// With clean urls off, `generate(Some("veloxphp/front"), ..)` →
    /// `/veloxphp/index.php/veloxphp/front`.
    pub fn generate(&self, path: Option<&str>, options: &GenerationOptions) -> String {
        let scheme = options
            .scheme
            .unwrap_or_else(|| Scheme::for_connection(self.is_secure_connection()));

        let mut url = match path.filter(|p| *p != "/") {
            Some(path) => {
                let base = self.site.link_base(scheme, options.absolute);
                let mut url = String::with_capacity(base.len() + path.len());
                url.push_str(base);
                url.push_str(path);
                url
            }
            None => self.site.root(scheme, options.absolute).to_string(),
        };

        if let Some(fragment) = &options.fragment {
            url.push('#');
            url.push_str(fragment);
        }
        url
    }

    /// Generates a link to the active theme, or to `path` inside it.
    ///
    /// Without a theme path, `path` is resolved from the site root.
    pub fn generate_for_theme(&self, path: Option<&str>, options: &GenerationOptions) -> String {
        let mut theme_path = self.site.theme_path().to_string();
        if let Some(path) = path {
            if !theme_path.is_empty() {
                theme_path.push('/');
            }
            theme_path.push_str(path);
        }
        if theme_path.is_empty() {
            return self.generate(None, options);
        }
        self.generate(Some(&theme_path), options)
    }

    /// Absolute link to the current request path.
    pub fn current(&self) -> String {
        self.current_with(&GenerationOptions::new().absolute(true))
    }

    /// Link to the current request path with explicit options.
    pub fn current_with(&self, options: &GenerationOptions) -> String {
        let joined = self.current_path_joined();
        let path = if joined.is_empty() {
            None
        } else {
            Some(joined.as_str())
        };
        self.generate(path, options)
    }

    /// Queries the current request path.
    ///
    /// With an `index`, returns that segment, or `None` when out of range.
    /// Without one, returns every segment (`as_array`) or the joined path.
    pub fn current_path(&self, index: Option<usize>, as_array: bool) -> Option<CurrentPath<'a>> {
        match index {
            Some(i) => self.current_path_segment(i).map(CurrentPath::Segment),
            None if as_array => Some(CurrentPath::Segments(self.current_path_segments())),
            None => Some(CurrentPath::Joined(self.current_path_joined())),
        }
    }

    pub fn current_path_segments(&self) -> &'a [String] {
        self.site.current_path_segments()
    }

    pub fn current_path_segment(&self, index: usize) -> Option<&'a str> {
        self.site
            .current_path_segments()
            .get(index)
            .map(String::as_str)
    }

    pub fn current_path_joined(&self) -> String {
        self.site.current_path_segments().join("/")
    }
}
