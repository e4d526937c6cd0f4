//! Service key types for the service locator.

use std::any::TypeId;
use std::fmt;

/// Key for service storage and lookup.
///
/// A key is the pair of a type identity and an optional contract string.
/// The contract distinguishes several registrations of the same type, so
/// `(Database, None)`, `(Database, Some("primary"))` and
/// `(Database, Some("replica"))` are three independent slots.
///
/// Equality and hashing use the `TypeId` and the contract. The type name is
/// carried for diagnostics only.
///
/// # Examples
///
/// ```rust
/// use service_locator::Key;
///
/// let plain = Key::of::<u32>();
/// let named = Key::named::<u32>("port");
///
/// assert_ne!(plain, named);
/// assert_eq!(named, Key::named::<u32>("port"));
/// assert_eq!(plain.contract(), None);
/// assert_eq!(named.contract(), Some("port"));
/// ```
///
/// Trait objects have their own identity:
///
/// ```rust
/// use service_locator::Key;
///
/// trait Clock: Send + Sync {}
///
/// let key = Key::of::<dyn Clock>();
/// assert!(key.display_name().contains("Clock"));
/// ```
#[derive(Debug, Clone)]
pub struct Key {
    type_id: TypeId,
    type_name: &'static str,
    contract: Option<String>,
}

impl Key {
    /// Key for `T` without a contract.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::from_parts(TypeId::of::<T>(), std::any::type_name::<T>(), None)
    }

    /// Key for `T` qualified by `contract`.
    #[inline]
    pub fn named<T: ?Sized + 'static>(contract: impl Into<String>) -> Self {
        Self::from_parts(
            TypeId::of::<T>(),
            std::any::type_name::<T>(),
            Some(contract.into()),
        )
    }

    /// Builds a key from an already erased type identity.
    ///
    /// `type_name` should describe the same type as `type_id`; it is used
    /// only in messages.
    pub fn from_parts(type_id: TypeId, type_name: &'static str, contract: Option<String>) -> Self {
        Self {
            type_id,
            type_name,
            contract,
        }
    }

    /// Returns a copy of this key with the contract replaced.
    pub fn with_contract(&self, contract: Option<&str>) -> Self {
        Self {
            type_id: self.type_id,
            type_name: self.type_name,
            contract: contract.map(str::to_owned),
        }
    }

    /// The `TypeId` part of the key.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Get the type name for display
    ///
    /// Returns the `std::any::type_name` of the keyed type.
    pub fn display_name(&self) -> &'static str {
        self.type_name
    }

    /// The contract, or `None` for the unqualified registration.
    pub fn contract(&self) -> Option<&str> {
        self.contract.as_deref()
    }
}

impl PartialEq for Key {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        // The type name is ignored; TypeId is authoritative.
        self.type_id == other.type_id && self.contract == other.contract
    }
}

impl Eq for Key {}

impl std::hash::Hash for Key {
    #[inline(always)]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
        // Option hashes its discriminant, so None never collides with Some("").
        self.contract.hash(state);
    }
}

impl PartialOrd for Key {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.type_id
            .cmp(&other.type_id)
            .then_with(|| self.contract.cmp(&other.contract))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.contract {
            Some(contract) => write!(f, "{} [contract: {}]", self.type_name, contract),
            None => write!(f, "{}", self.type_name),
        }
    }
}

// Helper function for creating type keys
#[inline(always)]
pub fn key_of_type<T: ?Sized + 'static>() -> Key {
    Key::of::<T>()
}
