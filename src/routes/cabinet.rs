//! Partner cabinet: referral link, bonus code and recent purchases.

use dioxus::prelude::*;

use crate::components::CopyButton;
use crate::services::clipboard::CopySource;

const REFERRAL_INPUT_ID: &str = "referral-link";

const REFERRAL_CODE: &str = "7F3K9QX2AB41";

struct Purchase {
    order_number: &'static str,
    product_name: &'static str,
    amount: &'static str,
    bonus: &'static str,
    status: &'static str,
}

const PURCHASES: &[Purchase] = &[
    Purchase { order_number: "A-10293", product_name: "Robot vacuum", amount: "18 990", bonus: "949", status: "confirmed" },
    Purchase { order_number: "A-10281", product_name: "Yoga mat", amount: "1 190", bonus: "59", status: "confirmed" },
    Purchase { order_number: "A-10266", product_name: "Wireless earbuds", amount: "3 490", bonus: "174", status: "pending" },
];

#[component]
pub fn Cabinet() -> Element {
    let referral_link = format!("https://partnerhub.example/register/ref-{REFERRAL_CODE}");

    rsx! {
        h1 { class: "h3 mb-4", "Partner cabinet" }

        section {
            class: "card p-3 mb-4",
            label {
                class: "form-label",
                r#for: REFERRAL_INPUT_ID,
                "Your referral link"
            }
            div {
                class: "input-group mb-2",
                input {
                    id: REFERRAL_INPUT_ID,
                    class: "form-control",
                    readonly: true,
                    value: "{referral_link}",
                }
                CopyButton {
                    source: CopySource::Input(REFERRAL_INPUT_ID.to_string()),
                    label: "Copy link",
                }
            }
            div {
                class: "d-flex align-items-center gap-2",
                span {
                    class: "text-muted",
                    "data-bs-toggle": "tooltip",
                    title: "Share this code when a link will not do",
                    "Code: {REFERRAL_CODE}"
                }
                CopyButton {
                    source: CopySource::Text(REFERRAL_CODE.to_string()),
                    label: "Copy code",
                }
            }
        }

        section {
            class: "card p-3",
            h2 { class: "h5 mb-3", "Recent purchases" }
            table {
                class: "table table-sm mb-0",
                thead {
                    tr {
                        th { "Order" }
                        th { "Product" }
                        th { "Amount" }
                        th { "Bonus" }
                        th { "Status" }
                    }
                }
                tbody {
                    for purchase in PURCHASES.iter() {
                        tr {
                            td { "{purchase.order_number}" }
                            td { "{purchase.product_name}" }
                            td { "{purchase.amount} \u{20bd}" }
                            td { "+{purchase.bonus} \u{20bd}" }
                            td {
                                if purchase.status == "confirmed" {
                                    span { class: "badge text-bg-success", "{purchase.status}" }
                                } else {
                                    span { class: "badge text-bg-warning", "{purchase.status}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
