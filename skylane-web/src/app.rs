//! Root component: router plus the session-scoped basket.

use skylane_booking::{Basket, BasketLineItem};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::{Route, switch};
use crate::session::Session;

/// Shared handle to the single in-memory basket for this page session.
/// Cloning is cheap; every mutation replaces the underlying state so
/// all subscribed views re-render.
#[derive(Clone, PartialEq)]
pub struct BasketHandle {
    state: UseStateHandle<Basket>,
}

impl BasketHandle {
    #[must_use]
    pub fn basket(&self) -> &Basket {
        &self.state
    }

    /// Forwards to [`Basket::add`]; `false` means the seat is already
    /// in the basket and nothing changed.
    pub fn add(&self, item: BasketLineItem) -> bool {
        let mut next = (*self.state).clone();
        let added = next.add(item);
        if added {
            self.state.set(next);
        }
        added
    }

    pub fn remove(&self, flight_id: i64, seat_number: &str) {
        let mut next = (*self.state).clone();
        next.remove(flight_id, seat_number);
        self.state.set(next);
    }

    pub fn clear(&self) {
        let mut next = (*self.state).clone();
        next.clear();
        self.state.set(next);
    }
}

/// Identity context; `None` while signed out.
#[derive(Clone, PartialEq)]
pub struct SessionHandle(pub Option<Session>);

#[function_component(App)]
pub fn app() -> Html {
    let basket = BasketHandle {
        state: use_state(Basket::new),
    };
    let session = use_state(Session::load);

    html! {
        <BrowserRouter>
            <ContextProvider<BasketHandle> context={basket}>
                <ContextProvider<SessionHandle> context={SessionHandle((*session).clone())}>
                    <crate::components::header::Header />
                    <main class="page">
                        <Switch<Route> render={switch} />
                    </main>
                </ContextProvider<SessionHandle>>
            </ContextProvider<BasketHandle>>
        </BrowserRouter>
    }
}
