use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::basket::BasketPage;
use crate::pages::my_flights::MyFlightsPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::payment::PaymentPage;
use crate::pages::search::SearchPage;
use crate::pages::seats::SeatSelectionPage;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/flights/:flight_id/seats")]
    SeatSelection { flight_id: i64 },
    #[at("/basket")]
    Basket,
    #[at("/payment")]
    Payment,
    #[at("/my-flights")]
    MyFlights,
    #[at("/404")]
    #[not_found]
    NotFound,
}

#[must_use]
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <SearchPage /> },
        Route::SeatSelection { flight_id } => html! { <SeatSelectionPage {flight_id} /> },
        Route::Basket => html! { <BasketPage /> },
        Route::Payment => html! { <PaymentPage /> },
        Route::MyFlights => html! { <MyFlightsPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn seat_selection_route_carries_the_flight_id() {
        assert_eq!(
            Route::recognize("/flights/42/seats"),
            Some(Route::SeatSelection { flight_id: 42 })
        );
        assert_eq!(
            Route::SeatSelection { flight_id: 42 }.to_path(),
            "/flights/42/seats"
        );
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/basket"), Some(Route::Basket));
    }
}
