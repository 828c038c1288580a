//! Filesystem infrastructure: implements `ExecutableProbe`.

use std::path::Path;

use crate::application::ports::ExecutableProbe;

/// Checks executables against the local filesystem. Symlinks are followed.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalExecutableProbe;

impl ExecutableProbe for LocalExecutableProbe {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}
