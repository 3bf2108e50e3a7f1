//! # Cart
//!
//! Session-only line items, at most one line per snack, kept in
//! first-insertion order.

use crate::catalog::CatalogItem;

#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub item_id: u32,
    pub unit_price: f64,
    pub quantity: u32,
}

#[derive(Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn add_item(&mut self, item: &CatalogItem) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item.id) {
            line.quantity += 1;
            return;
        }

        self.lines.push(CartLine {
            item_id: item.id,
            unit_price: item.price,
            quantity: 1,
        });
    }

    /// Decrements the line for `item_id` by one unit, dropping the line
    /// when it reaches zero. Unknown ids are ignored.
    pub fn remove_one(&mut self, item_id: u32) {
        if let Some(index) = self.lines.iter().position(|l| l.item_id == item_id) {
            let line = &mut self.lines[index];
            line.quantity -= 1;

            if line.quantity == 0 {
                self.lines.remove(index);
            }
        }
    }

    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .map(|l| l.unit_price * l.quantity as f64)
            .sum()
    }

    pub fn count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
