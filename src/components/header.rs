//! Header Component
//!
//! Top bar with the "new plate" button.

use leptos::prelude::*;

#[component]
pub fn Header(#[prop(into)] on_open_add_modal: Callback<()>) -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-content">
                <span class="logo">"GoRestaurant"</span>
                <nav>
                    <button
                        type="button"
                        data-testid="new-food-button"
                        on:click=move |_| on_open_add_modal.run(())
                    >
                        <span class="text">"Novo Prato"</span>
                        <span class="icon">"+"</span>
                    </button>
                </nav>
            </div>
        </header>
    }
}
