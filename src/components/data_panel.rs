//! Read-only data explorer: users, orders, and previously sent replies.
//!
//! LOAD ORDER
//! ==========
//! First activation loads users, then orders, then sent emails, awaited in
//! that order so the regions fill deterministically. The user filter and the
//! sent-email refresh re-fetch only their own region; request tokens drop
//! stale completions when the operator acts faster than the network.

use leptos::prelude::*;

use crate::net::types::{Order, SentEmail, User};
use crate::state::data::{DataState, filter_option_label};
use crate::util::format::{format_currency, humanize};
use crate::util::time::format_local;

/// Sequential first-time load for all three regions.
#[cfg(feature = "hydrate")]
pub(crate) async fn init_data(data: RwSignal<DataState>) {
    match crate::net::api::list_users().await {
        Ok(users) => data.update(|d| {
            d.users = users;
            d.users_failed = false;
        }),
        Err(e) => {
            log::error!("failed to load users: {e}");
            data.update(|d| d.users_failed = true);
        }
    }
    load_orders(data, None).await;
    load_sent_emails(data).await;
}

/// Re-issues the orders query for `user_id` and re-renders only that region.
#[cfg(feature = "hydrate")]
async fn load_orders(data: RwSignal<DataState>, user_id: Option<String>) {
    let Some(token) = data.try_update(|d| {
        d.user_filter = user_id.clone();
        d.next_orders_token()
    }) else {
        return;
    };
    let result =
        crate::net::api::list_orders(user_id.as_deref(), crate::net::api::DEFAULT_ORDER_WINDOW_DAYS)
            .await;
    if let Err(e) = &result {
        log::error!("failed to load orders: {e}");
    }
    data.update(|d| {
        d.apply_orders(token, result);
    });
}

/// Re-issues the sent-email query and re-renders only that region.
#[cfg(feature = "hydrate")]
async fn load_sent_emails(data: RwSignal<DataState>) {
    let Some(token) = data.try_update(DataState::next_sent_token) else {
        return;
    };
    let result = crate::net::api::list_sent_emails().await;
    if let Err(e) = &result {
        log::error!("failed to load sent emails: {e}");
    }
    data.update(|d| {
        d.apply_sent(token, result);
    });
}

/// Data explorer with three independently refreshed regions.
#[component]
pub fn DataPanel() -> impl IntoView {
    let data = expect_context::<RwSignal<DataState>>();

    let on_filter = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        let user_id = if value.is_empty() { None } else { Some(value) };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(load_orders(data, user_id));
        #[cfg(not(feature = "hydrate"))]
        let _ = (data, user_id);
    };

    let on_refresh_sent = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(load_sent_emails(data));
        #[cfg(not(feature = "hydrate"))]
        let _ = data;
    };

    view! {
        <div class="data-panel">
            <section class="data-panel__region">
                <h2>"Users"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Email"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let state = data.get();
                            if state.users_failed {
                                return view! {
                                    <tr><td colspan="3">"Failed to load users."</td></tr>
                                }
                                .into_any();
                            }
                            if state.users.is_empty() {
                                return view! {
                                    <tr><td colspan="3">"No users found"</td></tr>
                                }
                                .into_any();
                            }
                            state.users.into_iter().map(user_row).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </section>

            <section class="data-panel__region">
                <div class="data-panel__toolbar">
                    <h2>"Orders"</h2>
                    <label class="data-panel__filter">
                        "Filter by user"
                        <select on:change=on_filter>
                            <option value="">"All Users"</option>
                            {move || {
                                data.get()
                                    .users
                                    .into_iter()
                                    .map(|user| {
                                        let label = filter_option_label(&user);
                                        view! { <option value=user.user_id>{label}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                </div>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"User"</th>
                            <th>"Product"</th>
                            <th>"Status"</th>
                            <th>"Delivery"</th>
                            <th>"Total"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let state = data.get();
                            if state.orders_failed {
                                return view! {
                                    <tr><td colspan="6">"Failed to load orders."</td></tr>
                                }
                                .into_any();
                            }
                            if state.orders.is_empty() {
                                return view! {
                                    <tr><td colspan="6">"No orders found"</td></tr>
                                }
                                .into_any();
                            }
                            state.orders.into_iter().map(order_row).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </section>

            <section class="data-panel__region">
                <div class="data-panel__toolbar">
                    <h2>"Sent Emails"</h2>
                    <button class="btn" on:click=on_refresh_sent>
                        "Refresh"
                    </button>
                </div>
                {move || {
                    let state = data.get();
                    if state.sent_failed && state.sent_emails.is_empty() {
                        return view! {
                            <p class="placeholder">"Failed to load sent emails."</p>
                        }
                        .into_any();
                    }
                    if state.sent_emails.is_empty() {
                        return view! { <p class="placeholder">"No emails sent yet."</p> }
                            .into_any();
                    }
                    // Most recent first.
                    state
                        .sent_emails
                        .into_iter()
                        .rev()
                        .map(sent_email_card)
                        .collect_view()
                        .into_any()
                }}
            </section>
        </div>
    }
}

fn user_row(user: User) -> impl IntoView {
    view! {
        <tr>
            <td>{user.user_id}</td>
            <td>{user.name}</td>
            <td>{user.email}</td>
        </tr>
    }
}

fn order_row(order: Order) -> impl IntoView {
    view! {
        <tr>
            <td>{order.order_id}</td>
            <td>{order.user_id}</td>
            <td>{order.product_name}</td>
            <td>
                <span class=format!(
                    "status-badge status-badge--{}",
                    order.status,
                )>{humanize(&order.status)}</span>
            </td>
            <td>{order.estimated_delivery.unwrap_or_else(|| "-".to_owned())}</td>
            <td>{format_currency(order.total_amount)}</td>
        </tr>
    }
}

fn sent_email_card(email: SentEmail) -> impl IntoView {
    view! {
        <div class="sent-email">
            <p>
                <strong>"To: "</strong>
                {email.to_email}
            </p>
            <p>
                <strong>"Subject: "</strong>
                {email.subject}
            </p>
            <p class="sent-email__timestamp">{format_local(&email.timestamp)}</p>
            <p class="sent-email__body">{email.body}</p>
        </div>
    }
}
