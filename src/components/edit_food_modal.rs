//! Edit Food Modal
//!
//! Edits the selected plate; id and availability pass through unchanged.

use leptos::prelude::*;

use crate::components::food_form::{FoodFields, FoodFormInputs};
use crate::components::Modal;
use crate::models::FoodPlate;

#[component]
pub fn EditFoodModal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] set_is_open: Callback<()>,
    #[prop(into)] editing_item: Signal<Option<FoodPlate>>,
    #[prop(into)] on_update: Callback<FoodPlate>,
) -> impl IntoView {
    let fields = FoodFields::new();

    // Re-fill whenever another plate is picked
    Effect::new(move |_| {
        if let Some(food) = editing_item.get() {
            fields.fill(&food);
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(original) = editing_item.get_untracked() else {
            return;
        };
        let draft = fields.draft();
        if !draft.is_complete() {
            log::debug!("ignoring incomplete edit of #{}", original.id);
            return;
        }

        on_update.run(original.with_draft(draft));
        set_is_open.run(());
    };

    view! {
        <Modal is_open=is_open set_is_open=set_is_open>
            <form class="food-form" on:submit=submit>
                <h1>"Editar Prato"</h1>
                <FoodFormInputs fields=fields />
                <button type="submit" data-testid="edit-food-button">
                    <p class="text">"Editar Prato"</p>
                    <div class="icon">"✓"</div>
                </button>
            </form>
        </Modal>
    }
}
