use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section data-testid="not-found-screen">
            <h1>{ "Page not found" }</h1>
            <Link<Route> to={Route::Home}>{ "Back to flight search" }</Link<Route>>
        </section>
    }
}
