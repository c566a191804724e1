//! Catalog page: filterable, paginated product grid.

use dioxus::prelude::*;

use crate::components::FilterBar;
use crate::stores::catalog_store::{self, CATALOG_QUERY};

#[component]
pub fn Catalog() -> Element {
    let query = CATALOG_QUERY.read().clone();
    let page = catalog_store::filter_products(&query);

    rsx! {
        h1 { class: "h3 mb-4", "Catalog" }

        FilterBar {}

        div {
            class: "row g-3",
            for product in page.items.iter() {
                div {
                    class: "col-sm-6 col-lg-4",
                    div {
                        class: "card h-100 p-3",
                        h2 { class: "h6 mb-1", "{product.name}" }
                        p { class: "text-muted small mb-2", "{product.category}" }
                        div {
                            class: "d-flex justify-content-between align-items-center",
                            strong { "{product.price} \u{20bd}" }
                            if product.in_stock {
                                span { class: "badge text-bg-success", "In stock" }
                            } else {
                                span { class: "badge text-bg-secondary", "Out of stock" }
                            }
                        }
                    }
                }
            }
        }

        if page.items.is_empty() {
            p { class: "text-muted py-4", "Nothing matches these filters." }
        }

        nav {
            class: "d-flex gap-2 justify-content-center py-4",
            for number in 1..=page.total_pages {
                button {
                    class: if number == page.page {
                        "btn btn-primary btn-sm"
                    } else {
                        "btn btn-outline-primary btn-sm"
                    },
                    onclick: move |_| catalog_store::go_to_page(number),
                    "{number}"
                }
            }
        }
    }
}
