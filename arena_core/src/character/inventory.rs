//! Inventory - Ordered item storage owned by one character

use crate::item::{Item, ItemKind, Potion};
use std::rc::Rc;

/// Items in insertion order
///
/// Items are held behind `Rc` so a caller keeping the handle returned by
/// `add` can later remove exactly that item, even when an equal item is
/// stored elsewhere in the list.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<Rc<Item>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new item and return its handle
    pub fn add(&mut self, item: impl Into<Item>) -> Rc<Item> {
        let item = Rc::new(item.into());
        self.items.push(Rc::clone(&item));
        item
    }

    /// Store an item that may already be referenced elsewhere
    pub fn add_shared(&mut self, item: Rc<Item>) {
        self.items.push(item);
    }

    /// Remove the first entry that is this exact item (pointer identity)
    pub fn remove(&mut self, item: &Rc<Item>) -> bool {
        match self.items.iter().position(|held| Rc::ptr_eq(held, item)) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn list(&self) -> &[Rc<Item>] {
        &self.items
    }

    pub fn find_first(&self, kind: ItemKind) -> Option<&Rc<Item>> {
        self.items.iter().find(|item| item.kind() == kind)
    }

    pub fn find_first_potion(&self) -> Option<&Potion> {
        self.items.iter().find_map(|item| item.as_potion())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
