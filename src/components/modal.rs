//! Modal Component
//!
//! Overlay shared by the add and edit forms.

use leptos::prelude::*;

/// Centered dialog over a dimmed backdrop.
///
/// Clicking the backdrop or the close button calls `set_is_open`; clicks
/// inside the dialog stay inside.
#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] set_is_open: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div class="modal-backdrop" on:click=move |_| set_is_open.run(())>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <button
                        type="button"
                        class="modal-close"
                        title="Fechar"
                        on:click=move |_| set_is_open.run(())
                    >
                        "×"
                    </button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
