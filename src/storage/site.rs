use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use super::{InputSource, OutputSink};
use crate::core::TallyError;

/// A site directory holding `public/files` and `private/files`.
///
/// File URLs map onto it the way the web server exposes them:
/// `/files/x` is `public/files/x`, `/private/files/x` is
/// `private/files/x`. Output always lands in `public/files`.
#[derive(Debug, Clone)]
pub struct SiteFiles {
    root: PathBuf,
}

impl SiteFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory written by [`OutputSink::persist`].
    pub fn public_dir(&self) -> PathBuf {
        self.root.join("public").join("files")
    }

    /// Filesystem path of a file URL, or `None` if the URL is not a site
    /// file or tries to leave its directory.
    pub fn resolve(&self, reference: &str) -> Option<PathBuf> {
        let (dir, name) = if let Some(name) = reference.strip_prefix("/private/files/") {
            (self.root.join("private").join("files"), name)
        } else if let Some(name) = reference.strip_prefix("/files/") {
            (self.public_dir(), name)
        } else {
            return None;
        };
        let relative = Path::new(name);
        let contained = !name.is_empty()
            && !name.contains('\\')
            && relative
                .components()
                .all(|part| matches!(part, Component::Normal(_)));
        contained.then(|| dir.join(relative))
    }
}

impl InputSource for SiteFiles {
    fn fetch(&self, reference: &str) -> Result<Vec<u8>, TallyError> {
        let not_found = || TallyError::InputNotFound {
            reference: reference.to_string(),
        };
        let path = self.resolve(reference).ok_or_else(not_found)?;
        tracing::debug!(reference, path = %path.display(), "reading input table");
        std::fs::read(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => not_found(),
            _ => TallyError::InputRead {
                reference: reference.to_string(),
                source,
            },
        })
    }
}

impl OutputSink for SiteFiles {
    fn persist(&self, bytes: &[u8], name: &str) -> Result<String, TallyError> {
        let write_failed = |source| TallyError::OutputWrite {
            file_name: name.to_string(),
            source,
        };
        let dir = self.public_dir();
        std::fs::create_dir_all(&dir).map_err(write_failed)?;
        std::fs::write(dir.join(name), bytes).map_err(write_failed)?;
        Ok(format!("/files/{name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_public_and_private_urls() {
        let site = SiteFiles::new("/srv/site");
        assert_eq!(
            site.resolve("/files/coa.csv"),
            Some(PathBuf::from("/srv/site/public/files/coa.csv"))
        );
        assert_eq!(
            site.resolve("/private/files/coa.csv"),
            Some(PathBuf::from("/srv/site/private/files/coa.csv"))
        );
    }

    #[test]
    fn rejects_foreign_and_escaping_urls() {
        let site = SiteFiles::new("/srv/site");
        assert_eq!(site.resolve("coa.csv"), None);
        assert_eq!(site.resolve("/files/"), None);
        assert_eq!(site.resolve("/files/../secret"), None);
        assert_eq!(site.resolve("/files//etc/passwd"), None);
        assert_eq!(site.resolve("/private/files/./coa.csv"), None);
        assert_eq!(site.resolve("/files/a/../../b"), None);
        assert_eq!(site.resolve("/files/..\\secret"), None);
        assert_eq!(
            site.resolve("/files/2024/coa.csv"),
            Some(PathBuf::from("/srv/site/public/files/2024/coa.csv"))
        );
    }
}
