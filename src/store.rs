//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The plain
//! `DashboardState` methods mirror the store helpers so transitions can be
//! exercised without a reactive runtime. Helpers only ever write the one
//! field they change.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::FoodPlate;

/// Dashboard view state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Plates in load/append order
    pub items: Vec<FoodPlate>,
    /// Last plate picked for editing
    pub editing_item: Option<FoodPlate>,
    pub add_modal_open: bool,
    pub edit_modal_open: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection with a freshly loaded list
    pub fn set_items(&mut self, items: Vec<FoodPlate>) {
        self.items = items;
    }

    /// Append a plate the backend just created
    pub fn append_item(&mut self, food: FoodPlate) {
        self.items.push(food);
    }

    /// Replace the plate with the same id, all fields at once
    pub fn replace_item(&mut self, updated: FoodPlate) {
        replace_by_id(&mut self.items, updated);
    }

    /// Drop every plate with this id
    pub fn remove_item(&mut self, id: u32) {
        remove_by_id(&mut self.items, id);
    }

    pub fn toggle_add_modal(&mut self) {
        self.add_modal_open = !self.add_modal_open;
    }

    pub fn toggle_edit_modal(&mut self) {
        self.edit_modal_open = !self.edit_modal_open;
    }

    /// Open the edit modal on this plate
    pub fn select_for_edit(&mut self, food: FoodPlate) {
        self.edit_modal_open = true;
        self.editing_item = Some(food);
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

fn replace_by_id(items: &mut [FoodPlate], updated: FoodPlate) {
    if let Some(item) = items.iter_mut().find(|item| item.id == updated.id) {
        *item = updated;
    }
}

fn remove_by_id(items: &mut Vec<FoodPlate>, id: u32) {
    items.retain(|item| item.id != id);
}

// ========================
// Store Helper Functions
// ========================

/// Replace all plates with a freshly loaded list
pub fn store_set_items(store: &DashboardStore, items: Vec<FoodPlate>) {
    store.items().set(items);
}

/// Append a plate the backend just created
pub fn store_append_item(store: &DashboardStore, food: FoodPlate) {
    store.items().write().push(food);
}

/// Update a plate in the store by ID
pub fn store_replace_item(store: &DashboardStore, updated: FoodPlate) {
    replace_by_id(&mut store.items().write(), updated);
}

/// Remove a plate from the store by ID
pub fn store_remove_item(store: &DashboardStore, id: u32) {
    remove_by_id(&mut store.items().write(), id);
}

pub fn store_toggle_add_modal(store: &DashboardStore) {
    store.add_modal_open().update(|open| *open = !*open);
}

pub fn store_toggle_edit_modal(store: &DashboardStore) {
    store.edit_modal_open().update(|open| *open = !*open);
}

/// Open the edit modal on this plate
pub fn store_select_for_edit(store: &DashboardStore, food: FoodPlate) {
    store.edit_modal_open().set(true);
    store.editing_item().set(Some(food));
}
