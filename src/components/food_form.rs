//! Food Form Fields
//!
//! Input signals and inputs shared by the add and edit modals.

use leptos::prelude::*;

use crate::models::{FoodPlate, NewFoodPlate};

/// One signal per editable field
#[derive(Clone, Copy)]
pub struct FoodFields {
    pub image: RwSignal<String>,
    pub name: RwSignal<String>,
    pub price: RwSignal<String>,
    pub description: RwSignal<String>,
}

impl FoodFields {
    pub fn new() -> Self {
        Self {
            image: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
        }
    }

    /// Pre-fill from an existing plate
    pub fn fill(&self, food: &FoodPlate) {
        self.image.set(food.image.clone());
        self.name.set(food.name.clone());
        self.price.set(food.price.clone());
        self.description.set(food.description.clone());
    }

    pub fn clear(&self) {
        self.image.set(String::new());
        self.name.set(String::new());
        self.price.set(String::new());
        self.description.set(String::new());
    }

    /// Current values, trimmed
    pub fn draft(&self) -> NewFoodPlate {
        NewFoodPlate {
            image: self.image.get_untracked().trim().to_string(),
            name: self.name.get_untracked().trim().to_string(),
            price: self.price.get_untracked().trim().to_string(),
            description: self.description.get_untracked().trim().to_string(),
        }
    }
}

/// Image, name, price and description inputs
#[component]
pub fn FoodFormInputs(fields: FoodFields) -> impl IntoView {
    view! {
        <input
            type="text"
            name="image"
            placeholder="Cole o link aqui"
            prop:value=move || fields.image.get()
            on:input=move |ev| fields.image.set(event_target_value(&ev))
        />
        <input
            type="text"
            name="name"
            placeholder="Ex: Moda Italiana"
            prop:value=move || fields.name.get()
            on:input=move |ev| fields.name.set(event_target_value(&ev))
        />
        <input
            type="text"
            name="price"
            placeholder="Ex: 19.90"
            prop:value=move || fields.price.get()
            on:input=move |ev| fields.price.set(event_target_value(&ev))
        />
        <textarea
            name="description"
            placeholder="Descrição"
            prop:value=move || fields.description.get()
            on:input=move |ev| fields.description.set(event_target_value(&ev))
        />
    }
}
