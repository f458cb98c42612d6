//! Food Card Component
//!
//! One plate in the dashboard grid with edit, delete and availability controls.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::FoodPlate;

/// Card for a single plate.
///
/// The dashboard keys cards on the whole plate, so any change to it
/// re-creates the card and the static values below stay current.
#[component]
pub fn FoodCard(
    food: FoodPlate,
    #[prop(into)] on_delete: Callback<u32>,
    #[prop(into)] on_edit: Callback<FoodPlate>,
    #[prop(into)] on_update: Callback<FoodPlate>,
) -> impl IntoView {
    let id = food.id;
    let available = food.available;
    let price = food.display_price();
    let toggled = food.with_availability_toggled();
    let FoodPlate { name, image, description, .. } = food.clone();

    view! {
        <div class=if available { "food" } else { "food unavailable" }>
            <header>
                <img src=image alt=name.clone() />
            </header>
            <section class="body">
                <h2>{name}</h2>
                <p>{description}</p>
                <p class="price">
                    <b>{price}</b>
                </p>
            </section>
            <section class="footer">
                <div class="icon-container">
                    <button
                        type="button"
                        class="icon"
                        title="Editar"
                        data-testid=format!("edit-food-{}", id)
                        on:click=move |_| on_edit.run(food.clone())
                    >
                        "✎"
                    </button>
                    <DeleteConfirmButton
                        button_class="icon"
                        test_id=format!("remove-food-{}", id)
                        on_confirm=move |_: ()| on_delete.run(id)
                    />
                </div>

                <div class="availability-container">
                    <p>{if available { "Disponível" } else { "Indisponível" }}</p>
                    <label class="switch">
                        <input
                            type="checkbox"
                            checked=available
                            data-testid=format!("change-status-food-{}", id)
                            on:change=move |_| on_update.run(toggled.clone())
                        />
                        <span class="slider" />
                    </label>
                </div>
            </section>
        </div>
    }
}
