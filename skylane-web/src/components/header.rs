use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::BasketHandle;
use crate::router::Route;

/// Top navigation bar with a live basket count.
#[function_component(Header)]
pub fn header() -> Html {
    let basket = use_context::<BasketHandle>();
    let count = basket.as_ref().map_or(0, |handle| handle.basket().len());

    html! {
        <header class="site-header" data-testid="site-header">
            <span class="brand">{ "Skylane" }</span>
            <nav>
                <Link<Route> to={Route::Home}>{ "Book Flight" }</Link<Route>>
                <Link<Route> to={Route::Basket}>{ basket_label(count) }</Link<Route>>
                <Link<Route> to={Route::MyFlights}>{ "My Flights" }</Link<Route>>
            </nav>
        </header>
    }
}

fn basket_label(count: usize) -> String {
    if count == 0 {
        "Basket".to_string()
    } else {
        format!("Basket ({count})")
    }
}
