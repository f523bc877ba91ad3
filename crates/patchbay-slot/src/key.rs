//! Registration keys.
//!
//! A key names a registration so it can be replaced or removed without
//! value equality — the removal identity for closures and other
//! callables that have none. Connecting under an existing key replaces
//! the earlier registration.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Internal storage for keys, covering static and owned names.
#[derive(Debug, Clone)]
enum SlotKeyInner {
	/// Compile-time constant string (zero allocation)
	Static(&'static str),
	/// Dynamically created name (reference-counted)
	Owned(Arc<str>),
}

/// Identity of a keyed registration.
///
/// # Examples
///
/// ```
/// use patchbay_slot::SlotKey;
///
/// const AUDIT: SlotKey = SlotKey::new("audit_log");
///
/// let checked = SlotKey::validated("audit_log").unwrap();
/// assert_eq!(AUDIT, checked);
/// ```
#[derive(Debug, Clone)]
pub struct SlotKey(SlotKeyInner);

impl SlotKey {
	/// Key over a static name, without validation.
	pub const fn new(name: &'static str) -> Self {
		Self(SlotKeyInner::Static(name))
	}

	/// Key over an owned name, without validation.
	pub fn from_string(name: impl Into<Arc<str>>) -> Self {
		Self(SlotKeyInner::Owned(name.into()))
	}

	/// Key over a validated snake_case name.
	///
	/// The name must be nonempty, start with a lowercase letter or
	/// underscore, use only lowercase letters, digits and underscores,
	/// and carry no consecutive or trailing underscores.
	///
	/// # Errors
	///
	/// Returns a [`KeyError`] naming the violated rule.
	pub fn validated(name: impl Into<Arc<str>>) -> Result<Self, KeyError> {
		let name = name.into();
		validate_key(&name)?;
		Ok(Self(SlotKeyInner::Owned(name)))
	}

	/// The key's name.
	pub fn as_str(&self) -> &str {
		match &self.0 {
			SlotKeyInner::Static(name) => name,
			SlotKeyInner::Owned(name) => name,
		}
	}
}

impl PartialEq for SlotKey {
	fn eq(&self, other: &Self) -> bool {
		self.as_str() == other.as_str()
	}
}

impl Eq for SlotKey {}

impl std::hash::Hash for SlotKey {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		self.as_str().hash(state);
	}
}

impl fmt::Display for SlotKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl From<&'static str> for SlotKey {
	fn from(name: &'static str) -> Self {
		Self::new(name)
	}
}

impl From<SlotKey> for String {
	fn from(key: SlotKey) -> Self {
		key.as_str().to_string()
	}
}

impl AsRef<str> for SlotKey {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}

/// Violation found while validating a key name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum KeyError {
	/// Key names cannot be empty.
	#[error("slot key cannot be empty")]
	Empty,
	/// Keys use snake_case characters only.
	#[error("slot key `{0}` must use snake_case (lowercase letters, digits and underscores)")]
	NotSnakeCase(String),
	/// Keys start with a lowercase letter or underscore.
	#[error("slot key `{0}` must start with a lowercase letter or underscore")]
	InvalidStart(String),
	/// No consecutive underscores.
	#[error("slot key `{0}` cannot contain consecutive underscores")]
	ConsecutiveUnderscores(String),
	/// No trailing underscore.
	#[error("slot key `{0}` cannot end with an underscore")]
	TrailingUnderscore(String),
}

fn validate_key(name: &str) -> Result<(), KeyError> {
	if name.is_empty() {
		return Err(KeyError::Empty);
	}

	if !name
		.chars()
		.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
	{
		return Err(KeyError::NotSnakeCase(name.to_string()));
	}

	if let Some(first) = name.chars().next()
		&& !first.is_ascii_lowercase()
		&& first != '_'
	{
		return Err(KeyError::InvalidStart(name.to_string()));
	}

	if name.contains("__") {
		return Err(KeyError::ConsecutiveUnderscores(name.to_string()));
	}

	if name.ends_with('_') {
		return Err(KeyError::TrailingUnderscore(name.to_string()));
	}

	Ok(())
}
