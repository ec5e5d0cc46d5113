//! Installed plugin listing.

/// Plugin names parsed from one `_cat/plugins?h=c` response.
///
/// Built fresh for every verification; nothing is cached between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginList {
    names: Vec<String>,
}

impl PluginList {
    /// Parse a plain-text listing with one plugin name per line.
    ///
    /// Lines are split on `\n` (a preceding `\r` is dropped), trimmed of the
    /// column padding the `_cat` API adds, and empty lines are skipped. A
    /// trailing newline therefore never produces an empty entry.
    pub fn parse(body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body);
        let names = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { names }
    }

    /// Plugin names in the order the cluster listed them.
    ///
    /// A name appears once per node that has it installed.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of entries, counting per-node duplicates.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if the cluster reported no plugins.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Exact-match membership check.
    pub fn contains(&self, plugin: &str) -> bool {
        self.names.iter().any(|name| name == plugin)
    }

    /// True if every required plugin is listed.
    ///
    /// Stops at the first missing name. An empty requirement is always met.
    pub fn contains_all<S: AsRef<str>>(&self, required: &[S]) -> bool {
        required.iter().all(|plugin| self.contains(plugin.as_ref()))
    }

    /// The first required plugin that is not listed, if any.
    pub fn first_missing<'a, S: AsRef<str>>(&self, required: &'a [S]) -> Option<&'a str> {
        required
            .iter()
            .map(AsRef::as_ref)
            .find(|plugin| !self.contains(plugin))
    }
}
