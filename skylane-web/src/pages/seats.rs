//! Seat selection for one flight: live seat map, one selection, add-on
//! toggles, add-to-basket.

use std::rc::Rc;

use skylane_booking::{
    EXTRA_BAGGAGE_PRICE, LoadToken, MEAL_SERVICE_PRICE, SeatLoad, SeatOffer, SeatSelection,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::app::BasketHandle;
use crate::components::seat_grid::SeatGrid;
use crate::router::Route;

const DUPLICATE_NOTICE: &str = "This seat is already in your basket.";

/// Reducer wrapper so every action is applied to the latest machine
/// state; in particular a load response resolves against the current
/// generation, not the one captured when the request started.
#[derive(Clone, PartialEq)]
struct SelectionState {
    inner: SeatSelection,
    /// The last add attempt hit a seat already in the basket. Cleared
    /// by the next change to the selection so the warning never
    /// outlives the state it described.
    duplicate: bool,
}

enum SelectionAction {
    /// Snapshot taken after `reset` + `begin_load` for a (re)load.
    Started(SeatSelection),
    Resolved(LoadToken, Result<Vec<SeatOffer>, String>),
    Selected(SeatOffer),
    ExtraBaggage(bool),
    MealService(bool),
    Duplicate,
}

impl Reducible for SelectionState {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: SelectionAction) -> Rc<Self> {
        let mut inner = self.inner.clone();
        let mut duplicate = false;
        match action {
            SelectionAction::Started(machine) => inner = machine,
            SelectionAction::Resolved(token, result) => {
                duplicate = self.duplicate;
                inner.finish_load(token, result);
            }
            SelectionAction::Selected(seat) => inner.select(&seat),
            SelectionAction::ExtraBaggage(enabled) => inner.set_extra_baggage(enabled),
            SelectionAction::MealService(enabled) => inner.set_meal_service(enabled),
            SelectionAction::Duplicate => duplicate = true,
        }
        Rc::new(Self { inner, duplicate })
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct SeatSelectionPageProps {
    pub flight_id: i64,
}

#[function_component(SeatSelectionPage)]
pub fn seat_selection_page(props: &SeatSelectionPageProps) -> Html {
    let state = {
        let flight_id = props.flight_id;
        use_reducer(move || SelectionState {
            inner: SeatSelection::new(flight_id),
            duplicate: false,
        })
    };
    let basket = use_context::<BasketHandle>();
    let navigator = use_navigator();

    {
        let state = state.clone();
        use_effect_with(props.flight_id, move |flight_id| {
            let mut machine = state.inner.clone();
            machine.reset(*flight_id);
            let token = machine.begin_load();
            let flight_id = *flight_id;
            state.dispatch(SelectionAction::Started(machine));
            let state = state.clone();
            spawn_local(async move {
                let result = api::seats_for_flight(flight_id).await.map_err(|e| {
                    log::error!("seat load for flight {flight_id} failed: {e}");
                    e.to_string()
                });
                state.dispatch(SelectionAction::Resolved(token, result));
            });
        });
    }

    let on_select = {
        let state = state.clone();
        Callback::from(move |seat: SeatOffer| state.dispatch(SelectionAction::Selected(seat)))
    };
    let checkbox = |make: fn(bool) -> SelectionAction| {
        let state = state.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                state.dispatch(make(input.checked()));
            }
        })
    };
    let on_baggage = checkbox(SelectionAction::ExtraBaggage);
    let on_meal = checkbox(SelectionAction::MealService);

    let on_add = {
        let state = state.clone();
        let basket = basket.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(item) = state.inner.confirm() else {
                return;
            };
            let Some(basket) = &basket else {
                return;
            };
            if basket.add(item) {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Basket);
                }
            } else {
                state.dispatch(SelectionAction::Duplicate);
            }
        })
    };

    let selection = &state.inner;
    let selected_number: Option<AttrValue> = selection
        .selected()
        .map(|seat| AttrValue::from(seat.seat_number.clone()));

    html! {
        <section data-testid="seats-screen">
            <h1>{ "Select Your Seat" }</h1>
            {
                match selection.load() {
                    SeatLoad::Idle | SeatLoad::Loading => html! {
                        <p class="muted">{ "Loading seats..." }</p>
                    },
                    SeatLoad::Failed(_) => html! {
                        <p class="muted">{ "No seats available for this flight." }</p>
                    },
                    SeatLoad::Loaded(seats) if seats.is_empty() => html! {
                        <p class="muted">{ "No seats available for this flight." }</p>
                    },
                    SeatLoad::Loaded(_) => html! {
                        <>
                            <div class="seat-legend">
                                <span class="seat-available">{ "Available" }</span>
                                <span class="seat-reserved">{ "Reserved" }</span>
                                <span class="seat-sold">{ "Sold" }</span>
                                <span class="seat-selected">{ "Selected" }</span>
                            </div>
                            <SeatGrid
                                seats={selection.seats().to_vec()}
                                selected={selected_number}
                                on_select={on_select}
                            />
                        </>
                    },
                }
            }
            { for selection.selected().map(|seat| html! {
                <div class="selection-summary">
                    <h2>{ "Selected Seat" }</h2>
                    <p>
                        <strong>{ "Seat: " }</strong>{ &seat.seat_number }
                        { " • " }
                        <strong>{ "Type: " }</strong>{ seat.class.label() }
                    </p>
                    <p><strong>{ "Base Price: " }</strong>{ format!("{} TL", seat.price) }</p>
                    <h3>{ "Extra Services" }</h3>
                    <label>
                        <input
                            type="checkbox"
                            checked={selection.extra_baggage()}
                            onchange={on_baggage.clone()}
                        />
                        { format!("Extra Baggage (+{EXTRA_BAGGAGE_PRICE} TL)") }
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            checked={selection.meal_service()}
                            onchange={on_meal.clone()}
                        />
                        { format!("Meal Service (+{MEAL_SERVICE_PRICE} TL)") }
                    </label>
                    { for selection.pending_total().map(|total| html! {
                        <p><strong>{ "Total Price: " }</strong>{ format!("{total} TL") }</p>
                    }) }
                    if state.duplicate {
                        <p class="warning">{ DUPLICATE_NOTICE }</p>
                    }
                    <button onclick={on_add.clone()}>{ "Add to Basket" }</button>
                </div>
            }) }
        </section>
    }
}
