//! Basket review: line items with add-ons, per-item totals, checkout
//! entry point.

use skylane_booking::BasketLineItem;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::BasketHandle;
use crate::router::Route;

const EMPTY_NOTICE: &str = "Your basket is empty. Add a flight from \u{201c}Book Flight\u{201d}.";

fn addon_chips(item: &BasketLineItem) -> Html {
    html! {
        <span class="chips">
            if item.has_extra_baggage {
                <span class="chip">{ "Extra Baggage" }</span>
            }
            if item.has_meal_service {
                <span class="chip">{ "Meal Service" }</span>
            }
        </span>
    }
}

#[function_component(BasketPage)]
pub fn basket_page() -> Html {
    let basket = use_context::<BasketHandle>();
    let navigator = use_navigator();

    let Some(basket) = basket else {
        return html! { <p class="muted">{ EMPTY_NOTICE }</p> };
    };

    let on_clear = {
        let basket = basket.clone();
        Callback::from(move |_: MouseEvent| basket.clear())
    };
    let on_checkout = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Payment);
        }
    });

    let line_row = |item: &BasketLineItem| {
        let on_remove = {
            let basket = basket.clone();
            let flight_id = item.flight_id;
            let seat_number = item.seat_number.clone();
            Callback::from(move |_: MouseEvent| basket.remove(flight_id, &seat_number))
        };
        html! {
            <li class="basket-item">
                <div>
                    <strong>{ format!("Flight {} • Seat {}", item.flight_id, item.seat_number) }</strong>
                    <div class="muted">{ format!("Type: {}", item.class.label()) }</div>
                    { addon_chips(item) }
                    <div>{ format!("{} TL", item.total()) }</div>
                </div>
                <button onclick={on_remove}>{ "Remove" }</button>
            </li>
        }
    };

    html! {
        <section data-testid="basket-screen">
            <h1>{ "Basket" }</h1>
            if basket.basket().is_empty() {
                <p class="muted">{ EMPTY_NOTICE }</p>
            } else {
                <>
                    <ul class="basket-list">
                        { for basket.basket().items().iter().map(line_row) }
                    </ul>
                    <div class="basket-summary">
                        <h2>{ "Summary" }</h2>
                        <p>{ "Total: " }<strong>{ format!("{} TL", basket.basket().total()) }</strong></p>
                        <button onclick={on_checkout}>{ "Go to payment" }</button>
                        <button class="danger" onclick={on_clear}>{ "Clear" }</button>
                    </div>
                </>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use skylane_booking::SeatClass;
    use yew::LocalServerRenderer;

    #[test]
    fn empty_basket_renders_the_notice() {
        let html = block_on(LocalServerRenderer::<BasketPage>::new().render());
        assert!(html.contains("Your basket is empty"));
    }

    #[test]
    fn addon_chips_render_only_selected_addons() {
        let item = BasketLineItem {
            flight_id: 7,
            seat_number: "12A".to_string(),
            price: 500.0,
            class: SeatClass::Economy,
            has_extra_baggage: true,
            has_meal_service: false,
        };

        #[derive(Properties, PartialEq)]
        struct ChipProps {
            item: BasketLineItem,
        }

        #[function_component(ChipHarness)]
        fn chip_harness(props: &ChipProps) -> Html {
            addon_chips(&props.item)
        }

        let html = block_on(
            LocalServerRenderer::<ChipHarness>::with_props(ChipProps { item }).render(),
        );
        assert!(html.contains("Extra Baggage"));
        assert!(!html.contains("Meal Service"));
    }
}
