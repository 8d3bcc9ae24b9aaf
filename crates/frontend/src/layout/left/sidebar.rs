//! Sidebar: one button per dashboard panel

use crate::domain::a001_invoice::ui::dashboard::ActivePanel;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar(active: RwSignal<ActivePanel>) -> impl IntoView {
    view! {
        <div class="app-sidebar__content">
            <h2 class="app-sidebar__title">"EXP Stock"</h2>
            {ActivePanel::all()
                .into_iter()
                .map(|panel| {
                    view! {
                        <button
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || active.get() == panel
                            on:click=move |_| active.set(panel)
                        >
                            <span class="app-sidebar__icon">{icon(panel.icon())}</span>
                            <span class="app-sidebar__label">{panel.label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
