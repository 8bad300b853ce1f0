//! Checkout: payment method choice, card entry, and the seat-conflict
//! reaction that invalidates the basket.

use skylane_booking::{
    CardInfo, PaymentMethod, PaymentRequest, SavedCard, miles_shortfall,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::app::{BasketHandle, SessionHandle};
use crate::router::Route;

const EMPTY_NOTICE: &str = "Your basket is empty. Please add a flight first.";
const SIGNED_OUT_NOTICE: &str = "Please sign in to complete your payment.";
const CONFLICT_NOTICE: &str = "Some seats are no longer available. Please select your seats again.";

/// Keep at most `max` digits of the typed value, like the original
/// card-number and CVV input masks.
fn digits(value: &str, max: usize) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(max)
        .collect()
}

/// "1227" -> "12/27" while typing.
fn format_expiry(value: &str) -> String {
    let d = digits(value, 4);
    if d.len() >= 2 {
        format!("{}/{}", &d[..2], &d[2..])
    } else {
        d
    }
}

/// Whether the pay button must stay disabled.
fn pay_blocked(
    busy: bool,
    method: PaymentMethod,
    card_info: Option<&CardInfo>,
    miles: f64,
    total: f64,
) -> bool {
    if busy {
        return true;
    }
    match method {
        PaymentMethod::Card => !card_info.is_some_and(CardInfo::is_complete),
        PaymentMethod::Cash => false,
        PaymentMethod::Mile => miles_shortfall(miles, total) > 0.0,
    }
}

#[function_component(PaymentPage)]
pub fn payment_page() -> Html {
    let basket = use_context::<BasketHandle>();
    let session = use_context::<SessionHandle>().and_then(|handle| handle.0);
    let navigator = use_navigator();

    let method = use_state(|| PaymentMethod::Card);
    let use_existing = use_state(|| false);
    let saved_cards = use_state(Vec::<SavedCard>::new);
    let selected_card = use_state(|| None::<i64>);
    let miles = use_state(|| 0.0_f64);
    let holder = use_state(String::new);
    let card_num = use_state(String::new);
    let expiry = use_state(String::new);
    let cvv = use_state(String::new);
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);

    {
        let saved_cards = saved_cards.clone();
        let miles = miles.clone();
        let session = session.clone();
        use_effect_with(session, move |session| {
            let Some(session) = session.clone() else {
                return;
            };
            let saved_cards = saved_cards.clone();
            spawn_local(async move {
                match api::saved_cards(session.user_id).await {
                    Ok(cards) => saved_cards.set(cards),
                    Err(e) => log::error!("failed to load saved cards: {e}"),
                }
            });
            if let Some(email) = session.email {
                spawn_local(async move {
                    match api::user_miles(&email).await {
                        Ok(balance) => miles.set(balance),
                        Err(e) => log::error!("failed to load miles balance: {e}"),
                    }
                });
            }
        });
    }

    let Some(basket) = basket else {
        return html! { <p class="muted">{ EMPTY_NOTICE }</p> };
    };
    if basket.basket().is_empty() {
        return html! { <p class="muted">{ EMPTY_NOTICE }</p> };
    }
    let Some(session) = session else {
        return html! { <p class="muted">{ SIGNED_OUT_NOTICE }</p> };
    };

    let total = basket.basket().total();

    let card_info: Option<CardInfo> = match *method {
        PaymentMethod::Card if *use_existing => {
            (*selected_card).map(|card_id| CardInfo::Saved { card_id })
        }
        PaymentMethod::Card => Some(CardInfo::New {
            card_num: (*card_num).clone(),
            holder_name: (*holder).clone(),
            expiry_time: (*expiry).clone(),
            cvv: (*cvv).clone(),
        }),
        _ => None,
    };
    let blocked = pay_blocked(*busy, *method, card_info.as_ref(), *miles, total);

    let pick_method = |value: PaymentMethod| {
        let method = method.clone();
        Callback::from(move |_: Event| method.set(value))
    };
    let masked_input = |state: UseStateHandle<String>, mask: fn(&str) -> String| {
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                state.set(mask(&input.value()));
            }
        })
    };
    let on_holder = {
        let holder = holder.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                holder.set(input.value());
            }
        })
    };
    let on_card_num = masked_input(card_num.clone(), |v| digits(v, 16));
    let on_expiry = masked_input(expiry.clone(), format_expiry);
    let on_cvv = masked_input(cvv.clone(), |v| digits(v, 3));
    let on_card_pick = {
        let selected_card = selected_card.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                selected_card.set(select.value().parse().ok());
            }
        })
    };
    let toggle_existing = |value: bool| {
        let use_existing = use_existing.clone();
        Callback::from(move |_: Event| use_existing.set(value))
    };

    let on_pay = {
        let basket = basket.clone();
        let navigator = navigator.clone();
        let method = *method;
        let card_info = card_info.clone();
        let busy = busy.clone();
        let error = error.clone();
        let user_id = session.user_id;
        Callback::from(move |_: MouseEvent| {
            if *busy || basket.basket().is_empty() {
                return;
            }
            busy.set(true);
            error.set(None);
            let request =
                PaymentRequest::from_basket(user_id, basket.basket().items(), method, card_info.clone());
            let basket = basket.clone();
            let navigator = navigator.clone();
            let busy = busy.clone();
            let error = error.clone();
            spawn_local(async move {
                match api::create_payment(&request).await {
                    Ok(_) => {
                        basket.clear();
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::MyFlights);
                        }
                    }
                    Err(e) if e.is_seat_conflict() => {
                        log::warn!("seat conflict at checkout: {e}");
                        basket.clear();
                        error.set(Some(CONFLICT_NOTICE.to_string()));
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(e) => {
                        log::error!("payment failed: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
                busy.set(false);
            });
        })
    };

    let currency = method.currency_label();

    html! {
        <section data-testid="payment-screen">
            <h1>{ "Payment" }</h1>

            <fieldset class="method-picker">
                <legend>{ "Payment Method" }</legend>
                { for [PaymentMethod::Card, PaymentMethod::Cash, PaymentMethod::Mile].map(|value| {
                    let label = if value == PaymentMethod::Mile {
                        format!("Miles (Available: {})", *miles)
                    } else {
                        value.label().to_string()
                    };
                    html! {
                        <label>
                            <input
                                type="radio"
                                name="method"
                                checked={*method == value}
                                onchange={pick_method(value)}
                            />
                            { label }
                        </label>
                    }
                }) }
            </fieldset>

            if *method == PaymentMethod::Card {
                <div class="card-form">
                    if !saved_cards.is_empty() {
                        <label>
                            <input
                                type="radio"
                                name="card-source"
                                checked={*use_existing}
                                onchange={toggle_existing(true)}
                            />
                            { "Use saved card" }
                        </label>
                        if *use_existing {
                            <select onchange={on_card_pick}>
                                <option value="" selected={selected_card.is_none()}>{ "Select Card" }</option>
                                { for saved_cards.iter().map(|card| html! {
                                    <option
                                        value={card.card_id.to_string()}
                                        selected={*selected_card == Some(card.card_id)}
                                    >
                                        { card.masked_label() }
                                    </option>
                                }) }
                            </select>
                        }
                        <label>
                            <input
                                type="radio"
                                name="card-source"
                                checked={!*use_existing}
                                onchange={toggle_existing(false)}
                            />
                            { "Use new card" }
                        </label>
                    }
                    if !*use_existing {
                        <input placeholder="Card holder" value={(*holder).clone()} oninput={on_holder} />
                        <input placeholder="Card number" value={(*card_num).clone()} oninput={on_card_num} />
                        <input placeholder="Expiry (MM/YY)" value={(*expiry).clone()} oninput={on_expiry} />
                        <input placeholder="CVV" value={(*cvv).clone()} oninput={on_cvv} />
                    }
                </div>
            }
            if *method == PaymentMethod::Cash {
                <p class="muted">
                    { "You have selected cash payment. Please pay at the airport counter before your flight." }
                </p>
            }
            if *method == PaymentMethod::Mile {
                <p class="muted">
                    { format!("Total miles required: {total}. ") }
                    {
                        if miles_shortfall(*miles, total) > 0.0 {
                            format!("You need {} more miles.", miles_shortfall(*miles, total))
                        } else {
                            "You have enough miles for this purchase.".to_string()
                        }
                    }
                </p>
            }

            { for error.as_ref().map(|message| html! { <p class="error">{ message }</p> }) }

            <div class="order-summary">
                <h2>{ "Order Summary" }</h2>
                <p>{ format!("{} seat(s) • Total: {total} {currency}", basket.basket().len()) }</p>
                <button onclick={on_pay} disabled={blocked}>
                    { if *busy {
                        "Processing...".to_string()
                    } else {
                        format!("Pay {total} {currency}")
                    } }
                </button>
            </div>
        </section>
    }
}
