//! Test utilities and fixtures for the Lanai Trie.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use tempfile::TempDir;

/// Maximum key length, in chars, for generated keys.
const MAX_KEY_CHARS: usize = 12;

/// Maximum number of keys in a generated batch.
const MAX_KEYS: usize = 40;

/// Keys over a small alphabet, so generated batches share prefixes often.
///
/// A few non-ASCII chars are mixed in to cover both lookup paths of the
/// ASCII child map.
pub fn key_strategy() -> BoxedStrategy<String> {
    let alphabet = prop::sample::select(vec!['a', 'b', 'c', 'd', 'é', 'ß', '日']);
    proptest::collection::vec(alphabet, 0..MAX_KEY_CHARS)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .boxed()
}

/// A batch of keys drawn from [`key_strategy`].
pub fn keys_strategy() -> BoxedStrategy<Vec<String>> {
    proptest::collection::vec(key_strategy(), 0..MAX_KEYS).boxed()
}

/// Test fixture owning a temporary directory and any environment variables
/// set through it.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable, removed again when the fixture drops.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(
        &self,
        name: &str,
        contents: C,
    ) -> std::io::Result<std::path::PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
