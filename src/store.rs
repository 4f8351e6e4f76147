//! File-backed persistence for the credential bundle.
//!
//! [`TokenStore`] is pure I/O: it never talks to the network and never decides whether a bundle is
//! still usable. Reads degrade to "nothing cached" on any failure; writes surface a
//! [`StoreError`] so the broker can report a cache warning.

// std
use std::{
	env,
	fs::{self, File, OpenOptions},
	io::{ErrorKind, Write},
};
// self
use crate::{
	_prelude::*,
	auth::{CachedBundle, CredentialBundle},
	obs::{self, Operation, OperationSpan, Outcome},
};

/// Default cache location, relative to the user's home directory.
pub const DEFAULT_CACHE_PATH: &str = "~/pax8_token.json";

/// Error type produced by [`TokenStore`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum StoreError {
	/// Cache content could not be encoded or decoded.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Filesystem failure while reading or writing the cache.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}

/// Reads and writes the cached credential bundle at a fixed path.
#[derive(Clone, Debug)]
pub struct TokenStore {
	path: PathBuf,
}
impl TokenStore {
	/// Creates a store for `path`, expanding a leading `~` to the home directory.
	///
	/// Nothing is touched on disk until the first load or save.
	pub fn new(path: impl AsRef<Path>) -> Self {
		Self { path: expand_home(path.as_ref()) }
	}

	/// Returns the resolved cache path.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Loads the cached bundle, distinguishing read and decode failures.
	///
	/// A missing or empty file, or an object missing any of its three fields, is `Ok(None)`.
	pub fn try_load(&self) -> Result<Option<CredentialBundle>, StoreError> {
		let bytes = match fs::read(&self.path) {
			Ok(bytes) => bytes,
			Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
			Err(e) =>
				return Err(StoreError::Backend {
					message: format!("Failed to read {}: {e}", self.path.display()),
				}),
		};

		if bytes.iter().all(u8::is_ascii_whitespace) {
			return Ok(None);
		}

		let cached: CachedBundle =
			serde_json::from_slice(&bytes).map_err(|e| StoreError::Serialization {
				message: format!("Failed to parse {}: {e}", self.path.display()),
			})?;

		Ok(cached.into_bundle())
	}

	/// Loads the cached bundle, treating every failure as a cache miss.
	pub fn load(&self) -> Option<CredentialBundle> {
		let _span = OperationSpan::new(Operation::CacheLoad, "load").entered();

		match self.try_load() {
			Ok(bundle) => {
				obs::record_outcome(Operation::CacheLoad, Outcome::Success);

				bundle
			},
			Err(e) => {
				#[cfg(feature = "tracing")]
				tracing::warn!(path = %self.path.display(), error = %e, "ignoring unreadable token cache");
				#[cfg(not(feature = "tracing"))]
				let _ = e;

				obs::record_outcome(Operation::CacheLoad, Outcome::Failure);

				None
			},
		}
	}

	/// Persists `bundle`, creating parent directories on demand.
	///
	/// The file is replaced atomically via a sibling temp file.
	pub fn save(&self, bundle: &CredentialBundle) -> Result<(), StoreError> {
		let _span = OperationSpan::new(Operation::CacheSave, "save").entered();
		let result = self.persist(bundle);

		match &result {
			Ok(()) => obs::record_outcome(Operation::CacheSave, Outcome::Success),
			Err(_) => obs::record_outcome(Operation::CacheSave, Outcome::Failure),
		}

		result
	}

	fn persist(&self, bundle: &CredentialBundle) -> Result<(), StoreError> {
		Self::ensure_parent_exists(&self.path)?;

		let serialized = serde_json::to_vec(&CachedBundle::from(bundle)).map_err(|e| {
			StoreError::Serialization { message: format!("Failed to serialize token cache: {e}") }
		})?;
		let tmp_path = self.tmp_path();
		let result = Self::write_then_replace(&tmp_path, &self.path, &serialized);

		if result.is_err() {
			let _ = fs::remove_file(&tmp_path);
		}

		result
	}

	fn tmp_path(&self) -> PathBuf {
		let mut tmp_path = self.path.clone();

		tmp_path.set_extension("tmp");

		tmp_path
	}

	fn write_then_replace(tmp_path: &Path, path: &Path, serialized: &[u8]) -> Result<(), StoreError> {
		{
			let mut file = Self::create_private(tmp_path).map_err(|e| StoreError::Backend {
				message: format!("Failed to create {}: {e}", tmp_path.display()),
			})?;

			file.write_all(serialized).map_err(|e| StoreError::Backend {
				message: format!("Failed to write {}: {e}", tmp_path.display()),
			})?;
			file.sync_all().map_err(|e| StoreError::Backend {
				message: format!("Failed to sync {}: {e}", tmp_path.display()),
			})?;
		}

		fs::rename(tmp_path, path).map_err(|e| StoreError::Backend {
			message: format!("Failed to replace {}: {e}", path.display()),
		})
	}

	fn ensure_parent_exists(path: &Path) -> Result<(), StoreError> {
		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			fs::create_dir_all(parent).map_err(|e| StoreError::Backend {
				message: format!("Failed to create cache directory {}: {e}", parent.display()),
			})?;
		}

		Ok(())
	}

	fn create_private(path: &Path) -> std::io::Result<File> {
		let mut options = OpenOptions::new();

		options.create(true).truncate(true).write(true);

		#[cfg(unix)]
		{
			use std::os::unix::fs::OpenOptionsExt;

			options.mode(0o600);
		}

		options.open(path)
	}
}
impl Default for TokenStore {
	fn default() -> Self {
		Self::new(DEFAULT_CACHE_PATH)
	}
}

/// Expands a leading `~` (alone or followed by a separator) to the user's home directory.
///
/// Paths are returned unchanged when no home directory can be determined.
pub fn expand_home(path: &Path) -> PathBuf {
	let Some(raw) = path.to_str() else {
		return path.to_path_buf();
	};
	let rest = match raw.strip_prefix('~') {
		Some(rest) if rest.is_empty() || rest.starts_with(['/', '\\']) => rest,
		_ => return path.to_path_buf(),
	};
	let Some(home) = home_dir() else {
		return path.to_path_buf();
	};

	home.join(rest.trim_start_matches(['/', '\\']))
}

fn home_dir() -> Option<PathBuf> {
	env::var_os("HOME")
		.or_else(|| env::var_os("USERPROFILE"))
		.filter(|home| !home.is_empty())
		.map(PathBuf::from)
}
