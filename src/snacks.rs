//! # Snacks
//!
//! The backend's snack records and the in-memory store the CRUD routes run
//! against. Records stay ordered by id; ids are never reused within a
//! process lifetime.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Snack {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub emoji: String,
    pub description: String,
    pub in_stock: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnackInput {
    pub name: String,
    pub price: f64,
    pub emoji: String,
    pub description: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

struct Records {
    snacks: Vec<Snack>,
    next_id: u32,
}

pub struct SnackStore {
    records: RwLock<Records>,
}

impl SnackStore {
    pub fn seeded() -> Self {
        let snacks = seed_snacks();
        let next_id = snacks.len() as u32 + 1;

        Self {
            records: RwLock::new(Records { snacks, next_id }),
        }
    }

    pub async fn list(&self) -> Vec<Snack> {
        self.records.read().await.snacks.clone()
    }

    pub async fn get(&self, id: u32) -> Option<Snack> {
        self.records
            .read()
            .await
            .snacks
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    pub async fn create(&self, input: SnackInput) -> Snack {
        let mut records = self.records.write().await;

        let snack = Snack {
            id: records.next_id,
            name: input.name,
            price: input.price,
            emoji: input.emoji,
            description: input.description,
            in_stock: input.in_stock,
        };
        records.next_id += 1;
        records.snacks.push(snack.clone());

        snack
    }

    pub async fn update(&self, id: u32, input: SnackInput) -> Option<Snack> {
        let mut records = self.records.write().await;
        let record = records.snacks.iter_mut().find(|s| s.id == id)?;

        record.name = input.name;
        record.price = input.price;
        record.emoji = input.emoji;
        record.description = input.description;
        record.in_stock = input.in_stock;

        Some(record.clone())
    }

    pub async fn delete(&self, id: u32) -> bool {
        let mut records = self.records.write().await;
        let before = records.snacks.len();
        records.snacks.retain(|s| s.id != id);

        records.snacks.len() != before
    }
}

fn seed_snacks() -> Vec<Snack> {
    let catalog = [
        ("Cheese Puffs", 3.99, "🧀", "Crunchy, cheesy clouds of joy"),
        ("Spicy Chips", 2.49, "🌶️", "Hot and crispy potato goodness"),
        ("Gummy Bears", 1.99, "🐻", "Squishy fruity friends"),
        ("Popcorn", 4.49, "🍿", "Buttery movie night essential"),
        ("Pretzels", 2.99, "🥨", "Salty twisted perfection"),
        ("Chocolate Bar", 1.49, "🍫", "Rich and creamy delight"),
        ("Cookie Pack", 3.49, "🍪", "Fresh-baked happiness"),
        ("Donut Box", 5.99, "🍩", "Glazed rings of heaven"),
    ];

    catalog
        .into_iter()
        .enumerate()
        .map(|(i, (name, price, emoji, description))| Snack {
            id: i as u32 + 1,
            name: name.to_string(),
            price,
            emoji: emoji.to_string(),
            description: description.to_string(),
            in_stock: true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> SnackInput {
        SnackInput {
            name: name.to_string(),
            price: 1.0,
            emoji: "🍬".to_string(),
            description: "test".to_string(),
            in_stock: true,
        }
    }

    #[tokio::test]
    async fn seed_is_ordered_by_id() {
        let store = SnackStore::seeded();
        let snacks = store.list().await;

        assert_eq!(snacks.len(), 8);
        for (i, snack) in snacks.iter().enumerate() {
            assert_eq!(snack.id, i as u32 + 1);
        }
    }

    #[tokio::test]
    async fn create_assigns_fresh_ids_after_delete() {
        let store = SnackStore::seeded();

        let a = store.create(input("Wasabi Peas")).await;
        assert_eq!(a.id, 9);

        assert!(store.delete(a.id).await);
        assert!(!store.delete(a.id).await);

        let b = store.create(input("Rice Crackers")).await;
        assert_eq!(b.id, 10);
    }

    #[tokio::test]
    async fn update_misses_unknown_ids() {
        let store = SnackStore::seeded();

        assert!(store.update(999, input("Ghost Snack")).await.is_none());

        let updated = store.update(1, input("Extra Cheese Puffs")).await.unwrap();
        assert_eq!(updated.name, "Extra Cheese Puffs");
        assert_eq!(store.get(1).await.unwrap().name, "Extra Cheese Puffs");
    }
}
