//! Flight search: the entry point of the booking flow.

use skylane_booking::{FlightQuery, FlightSearchResult};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::router::Route;

const LOAD_ERROR: &str = "Flights could not be loaded. Please try again.";

fn input_value(e: &InputEvent) -> String {
    e.target_dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(SearchPage)]
pub fn search_page() -> Html {
    let query = use_state(FlightQuery::default);
    let results = use_state(Vec::<FlightSearchResult>::new);
    let searched = use_state(|| false);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let navigator = use_navigator();

    let edit = |apply: fn(&mut FlightQuery, String)| {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*query).clone();
            apply(&mut next, input_value(&e));
            query.set(next);
        })
    };
    let on_origin = edit(|q, v| q.origin = v);
    let on_destination = edit(|q, v| q.destination = v);
    let on_date = edit(|q, v| q.date = v);

    let on_search = {
        let query = query.clone();
        let results = results.clone();
        let searched = searched.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            if !query.is_complete() || *loading {
                return;
            }
            loading.set(true);
            error.set(None);
            let request = (*query).clone();
            let results = results.clone();
            let searched = searched.clone();
            let loading = loading.clone();
            let error = error.clone();
            spawn_local(async move {
                match api::search_flights(&request).await {
                    Ok(flights) => results.set(flights),
                    Err(e) => {
                        log::error!("flight search failed: {e}");
                        results.set(Vec::new());
                        error.set(Some(LOAD_ERROR.to_string()));
                    }
                }
                searched.set(true);
                loading.set(false);
            });
        })
    };

    let flight_row = |flight: &FlightSearchResult| {
        let (date, time) = flight.departure_parts();
        let onclick = {
            let navigator = navigator.clone();
            let flight_id = flight.flight_id;
            Callback::from(move |_: MouseEvent| {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::SeatSelection { flight_id });
                }
            })
        };
        html! {
            <li class="flight-row">
                <div>
                    <strong>{ flight.route_label() }</strong>
                    { for flight.plane_model.as_ref().map(|model| html! {
                        <span class="muted">{ format!(" • {model}") }</span>
                    }) }
                    <div class="muted">{ format!("{date} {time}") }</div>
                </div>
                { for flight.price.map(|price| html! { <span>{ format!("{price} TL") }</span> }) }
                <button {onclick}>{ "Select seats" }</button>
            </li>
        }
    };

    html! {
        <section data-testid="search-screen">
            <h1>{ "Book a flight" }</h1>
            <div class="search-form">
                <input placeholder="From (IST)" value={query.origin.clone()} oninput={on_origin} />
                <input placeholder="To (ESB)" value={query.destination.clone()} oninput={on_destination} />
                <input type="date" value={query.date.clone()} oninput={on_date} />
                <button onclick={on_search} disabled={!query.is_complete() || *loading}>
                    { if *loading { "Searching..." } else { "Search flights" } }
                </button>
            </div>
            { for error.as_ref().map(|message| html! { <p class="error">{ message }</p> }) }
            if *searched && results.is_empty() && error.is_none() {
                <p class="muted">{ "No flights found for this route and date." }</p>
            }
            <ul class="flight-list">
                { for results.iter().map(flight_row) }
            </ul>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn search_screen_renders_disabled_until_complete() {
        let html = block_on(LocalServerRenderer::<SearchPage>::new().render());
        assert!(html.contains("Book a flight"));
        assert!(html.contains("Search flights"));
        assert!(html.contains("disabled"));
    }
}
