//! Food Dashboard App
//!
//! The dashboard view: plate grid, header and the add/edit modals.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::api::FoodsClient;
use crate::components::{AddFoodModal, EditFoodModal, FoodCard, Header};
use crate::models::{FoodPlate, NewFoodPlate};
use crate::store::{
    store_append_item, store_remove_item, store_replace_item, store_select_for_edit,
    store_set_items, store_toggle_add_modal, store_toggle_edit_modal, DashboardState,
    DashboardStateStoreFields, DashboardStore,
};

#[component]
pub fn DashboardView(#[prop(into)] api_base_url: String) -> impl IntoView {
    // State
    let store: DashboardStore = Store::new(DashboardState::new());
    let client = StoredValue::new_local(FoodsClient::new(api_base_url));

    // Load plates on mount
    Effect::new(move |_| {
        let api = client.get_value();
        log::debug!("loading foods from {}", api.base_url());
        spawn_local(async move {
            actions::load_foods(&api, |foods| store_set_items(&store, foods)).await;
        });
    });

    let handle_add_food = Callback::new(move |draft: NewFoodPlate| {
        let api = client.get_value();
        spawn_local(async move {
            actions::add_food(&api, draft, |food| store_append_item(&store, food)).await;
        });
    });

    // Update and delete touch the store first and never await their request
    let handle_update_food = Callback::new(move |updated: FoodPlate| {
        spawn_local(actions::update_food(client.get_value(), updated, |food| {
            store_replace_item(&store, food)
        }));
    });

    let handle_delete_food = Callback::new(move |id: u32| {
        spawn_local(actions::delete_food(client.get_value(), id, |id| {
            store_remove_item(&store, id)
        }));
    });

    let toggle_modal = Callback::new(move |_: ()| {
        store_toggle_add_modal(&store)
    });

    let toggle_edit_modal = Callback::new(move |_: ()| {
        store_toggle_edit_modal(&store)
    });

    let handle_edit_food = Callback::new(move |food: FoodPlate| {
        store_select_for_edit(&store, food)
    });

    view! {
        <Header on_open_add_modal=toggle_modal />
        <AddFoodModal
            is_open=Signal::derive(move || store.add_modal_open().get())
            set_is_open=toggle_modal
            on_add=handle_add_food
        />
        <EditFoodModal
            is_open=Signal::derive(move || store.edit_modal_open().get())
            set_is_open=toggle_edit_modal
            editing_item=Signal::derive(move || store.editing_item().get())
            on_update=handle_update_food
        />

        <div class="foods-container" data-testid="foods-list">
            <For
                each=move || store.items().get()
                key=|food| food.clone()
                children=move |food| {
                    view! {
                        <FoodCard
                            food=food
                            on_delete=handle_delete_food
                            on_edit=handle_edit_food
                            on_update=handle_update_food
                        />
                    }
                }
            />
        </div>
    }
}
