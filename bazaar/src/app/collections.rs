//! # Collection Registry
//!
//! Fixed mapping from collection name to contract address. Defined at compile
//! time; there is no way to add, rename, or remove entries at runtime.

use crate::core::error::{AppError, Result};

/// A named group of NFTs sharing one contract address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection {
    pub name: &'static str,
    pub contract_address: &'static str,
    /// Offered in the collection dropdown.
    pub selectable: bool,
}

/// Every known collection. The first entry is the default selection.
pub const COLLECTIONS: &[Collection] = &[
    Collection {
        name: "CryptoPunks",
        contract_address: "0xb47e3cd837ddf8e4c57f05d70ab865de6e193bbb",
        selectable: true,
    },
    Collection {
        name: "Bored Ape Yacht Club",
        contract_address: "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d",
        selectable: true,
    },
    Collection {
        name: "Azuki",
        contract_address: "0xed5af388653567af2f388e6224dc7c4b3241c544",
        selectable: true,
    },
    Collection {
        name: "Mutant Ape Yacht Club",
        contract_address: "0x60e4d786628fea6478f785a6d7e704777c86a7c6",
        selectable: false,
    },
];

/// Collection selected when the view mounts.
pub fn default_collection() -> &'static Collection {
    &COLLECTIONS[0]
}

/// Collections offered in the dropdown, in display order.
pub fn selectable() -> impl Iterator<Item = &'static Collection> {
    COLLECTIONS.iter().filter(|c| c.selectable)
}

/// Resolve a collection name to its contract address.
pub fn lookup(name: &str) -> Result<&'static str> {
    COLLECTIONS
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.contract_address)
        .ok_or_else(|| AppError::UnknownCollection(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::validate_address;

    #[test]
    fn test_lookup_every_registered_collection() {
        for collection in COLLECTIONS {
            assert_eq!(lookup(collection.name).unwrap(), collection.contract_address);
        }
    }

    #[test]
    fn test_lookup_unknown_collection() {
        match lookup("NotARealCollection") {
            Err(AppError::UnknownCollection(name)) => assert_eq!(name, "NotARealCollection"),
            other => panic!("expected UnknownCollection, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(lookup("azuki").is_err());
    }

    #[test]
    fn test_registry_addresses_are_well_formed() {
        for collection in COLLECTIONS {
            assert!(
                validate_address(collection.contract_address).is_valid,
                "{} has a malformed address",
                collection.name
            );
        }
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in COLLECTIONS.iter().enumerate() {
            for b in &COLLECTIONS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_default_and_dropdown_order() {
        assert_eq!(default_collection().name, "CryptoPunks");

        let names: Vec<_> = selectable().map(|c| c.name).collect();
        assert_eq!(names, ["CryptoPunks", "Bored Ape Yacht Club", "Azuki"]);
    }
}
