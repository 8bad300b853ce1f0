//! Ticket history with cancel and check-in actions.

use skylane_booking::Ticket;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::app::SessionHandle;

const SIGNED_OUT_NOTICE: &str = "Please sign in to see your flights.";
const EMPTY_NOTICE: &str = "You have no tickets yet.";

#[function_component(MyFlightsPage)]
pub fn my_flights_page() -> Html {
    let session = use_context::<SessionHandle>().and_then(|handle| handle.0);
    let tickets = use_state(Vec::<Ticket>::new);
    let error = use_state(|| None::<String>);
    // Bumped after a successful cancel/check-in to refetch the list.
    let refresh = use_state(|| 0_u32);

    {
        let tickets = tickets.clone();
        let error = error.clone();
        let user_id = session.as_ref().map(|s| s.user_id);
        use_effect_with((user_id, *refresh), move |(user_id, _)| {
            let Some(user_id) = *user_id else {
                return;
            };
            let tickets = tickets.clone();
            let error = error.clone();
            spawn_local(async move {
                match api::user_tickets(user_id).await {
                    Ok(list) => {
                        error.set(None);
                        tickets.set(list);
                    }
                    Err(e) => {
                        log::error!("failed to load tickets: {e}");
                        tickets.set(Vec::new());
                        error.set(Some("Tickets could not be loaded. Please try again.".to_string()));
                    }
                }
            });
        });
    }

    if session.is_none() {
        return html! { <p class="muted">{ SIGNED_OUT_NOTICE }</p> };
    }

    let ticket_row = |ticket: &Ticket| {
        let route = match (&ticket.origin, &ticket.destination) {
            (Some(origin), Some(destination)) => format!("{origin} → {destination}"),
            _ => format!("Flight {}", ticket.flight_id),
        };
        let cancel = {
            let refresh = refresh.clone();
            let error = error.clone();
            let ticket_id = ticket.ticket_id;
            Callback::from(move |_: MouseEvent| {
                let refresh = refresh.clone();
                let error = error.clone();
                spawn_local(async move {
                    match api::cancel_ticket(ticket_id).await {
                        Ok(()) => refresh.set(*refresh + 1),
                        Err(e) => {
                            log::error!("cancel failed for ticket {ticket_id}: {e}");
                            error.set(Some(e.to_string()));
                        }
                    }
                });
            })
        };
        let check_in = {
            let refresh = refresh.clone();
            let error = error.clone();
            let ticket_id = ticket.ticket_id;
            Callback::from(move |_: MouseEvent| {
                let refresh = refresh.clone();
                let error = error.clone();
                spawn_local(async move {
                    match api::check_in_ticket(ticket_id).await {
                        Ok(()) => refresh.set(*refresh + 1),
                        Err(e) => {
                            log::error!("check-in failed for ticket {ticket_id}: {e}");
                            error.set(Some(e.to_string()));
                        }
                    }
                });
            })
        };
        html! {
            <li class="ticket-row">
                <div>
                    <strong>{ route }</strong>
                    <div class="muted">
                        { format!("Seat {} • {}", ticket.seat_number, ticket.status.label()) }
                    </div>
                </div>
                if ticket.status.can_check_in() {
                    <button onclick={check_in}>{ "Check in" }</button>
                }
                if ticket.status.can_cancel() {
                    <button class="danger" onclick={cancel}>{ "Cancel" }</button>
                }
            </li>
        }
    };

    html! {
        <section data-testid="my-flights-screen">
            <h1>{ "My Flights" }</h1>
            { for error.as_ref().map(|message| html! { <p class="error">{ message }</p> }) }
            if tickets.is_empty() && error.is_none() {
                <p class="muted">{ EMPTY_NOTICE }</p>
            } else {
                <ul class="ticket-list">
                    { for tickets.iter().map(ticket_row) }
                </ul>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn signed_out_users_are_prompted() {
        let html = block_on(LocalServerRenderer::<MyFlightsPage>::new().render());
        assert!(html.contains("Please sign in"));
    }
}
