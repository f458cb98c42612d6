//! Add Food Modal
//!
//! Collects a new plate and hands the draft to the dashboard.

use leptos::prelude::*;

use crate::components::food_form::{FoodFields, FoodFormInputs};
use crate::components::Modal;
use crate::models::NewFoodPlate;

#[component]
pub fn AddFoodModal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] set_is_open: Callback<()>,
    #[prop(into)] on_add: Callback<NewFoodPlate>,
) -> impl IntoView {
    let fields = FoodFields::new();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = fields.draft();
        if !draft.is_complete() {
            log::debug!("ignoring incomplete plate {:?}", draft);
            return;
        }

        on_add.run(draft);
        fields.clear();
        set_is_open.run(());
    };

    view! {
        <Modal is_open=is_open set_is_open=set_is_open>
            <form class="food-form" on:submit=submit>
                <h1>"Novo Prato"</h1>
                <FoodFormInputs fields=fields />
                <button type="submit" data-testid="add-food-button">
                    <p class="text">"Adicionar Prato"</p>
                    <div class="icon">"✓"</div>
                </button>
            </form>
        </Modal>
    }
}
