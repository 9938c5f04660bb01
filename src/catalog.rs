//! Fixed reference data known at development time

use uuid::{uuid, Uuid};

/// A tradable unit seeded into the `asset` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRecord {
    pub id: Uuid,
    pub name: String,
    pub symbol: String,
    /// Number of fractional digits used to render a raw volume
    pub decimals: u32,
}

/// A user seeded into the `user` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl AssetRecord {
    pub fn new(id: Uuid, name: &str, symbol: &str, decimals: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals,
        }
    }
}

impl UserRecord {
    pub fn new(id: Uuid, first_name: &str, last_name: &str) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}

/// Immutable set of users and assets passed to every seeding step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub users: Vec<UserRecord>,
    pub assets: Vec<AssetRecord>,
}

impl Catalog {
    /// The users and assets every developer database starts with
    pub fn builtin() -> Self {
        Self {
            users: vec![
                UserRecord::new(uuid!("3728E292-F556-4E71-9203-C8969EC1090B"), "Lucas", "Santoni"),
                UserRecord::new(uuid!("84511A0E-6B97-49CC-98FB-065D5879B133"), "Antoine", "Scalia"),
            ],
            assets: vec![
                AssetRecord::new(uuid!("0D4C8043-5C33-4289-BD89-A53190D19044"), "Bitcoin", "BTC", 8),
                AssetRecord::new(uuid!("5621E725-EC39-4428-A6C8-8BC465347D1A"), "Ethereum", "ETH", 18),
                AssetRecord::new(uuid!("EEFCBA25-6020-4350-87A4-3FDD3ADE9A5C"), "Solana", "SOL", 18),
            ],
        }
    }

    pub fn user(&self, id: Uuid) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn asset(&self, id: Uuid) -> Option<&AssetRecord> {
        self.assets.iter().find(|asset| asset.id == id)
    }
}
