//! Catalog filter controls.
//!
//! Every control change goes through the catalog store, which rewinds the
//! hidden page field to 1 and submits the query exactly once.

use dioxus::prelude::*;

use crate::stores::catalog_store::{self, FilterChange, CATALOG_QUERY, CATEGORIES, PRICE_CAPS};

#[component]
pub fn FilterBar() -> Element {
    let query = CATALOG_QUERY.read().clone();

    rsx! {
        form {
            id: "filter-form",
            class: "filter-bar d-flex flex-wrap gap-3 align-items-center mb-4",
            onsubmit: move |event| event.prevent_default(),

            div {
                label { class: "form-label me-2", r#for: "filter-category", "Category" }
                select {
                    id: "filter-category",
                    class: "form-select",
                    value: "{query.category}",
                    onchange: move |event| {
                        catalog_store::change_filter(FilterChange::Category(event.value()));
                    },
                    option { value: "", "All categories" }
                    for category in CATEGORIES.iter() {
                        option { value: "{category}", "{category}" }
                    }
                }
            }

            div {
                label { class: "form-label me-2", r#for: "filter-max-price", "Max price" }
                select {
                    id: "filter-max-price",
                    class: "form-select",
                    value: "{query.max_price}",
                    onchange: move |event| {
                        catalog_store::change_filter(FilterChange::MaxPrice(event.value()));
                    },
                    option { value: "", "Any price" }
                    for cap in PRICE_CAPS.iter() {
                        option { value: "{cap}", "up to {cap}" }
                    }
                }
            }

            label {
                class: "form-check-label d-flex align-items-center gap-1",
                input {
                    class: "form-check-input",
                    r#type: "checkbox",
                    checked: query.in_stock_only,
                    onchange: move |event| {
                        catalog_store::change_filter(FilterChange::InStockOnly(event.checked()));
                    },
                }
                "In stock only"
            }

            input {
                r#type: "hidden",
                name: "page",
                value: "{query.page}",
            }
        }
    }
}
