use skylane_booking::{SeatAvailability, SeatOffer};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SeatGridProps {
    pub seats: Vec<SeatOffer>,
    /// Seat number of the current selection, if any.
    #[prop_or_default]
    pub selected: Option<AttrValue>,
    pub on_select: Callback<SeatOffer>,
}

fn seat_class(seat: &SeatOffer, selected: Option<&str>) -> &'static str {
    if selected == Some(seat.seat_number.as_str()) {
        return "seat seat-selected";
    }
    match seat.availability {
        SeatAvailability::Available => "seat seat-available",
        SeatAvailability::Reserved => "seat seat-reserved",
        SeatAvailability::Sold => "seat seat-sold",
    }
}

/// The seat map: one button per seat, unavailable seats disabled.
#[function_component(SeatGrid)]
pub fn seat_grid(props: &SeatGridProps) -> Html {
    let selected = props.selected.as_deref();
    html! {
        <div class="seat-grid" data-testid="seat-grid">
            { for props.seats.iter().map(|seat| {
                let onclick = {
                    let on_select = props.on_select.clone();
                    let seat = seat.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(seat.clone()))
                };
                html! {
                    <button
                        class={seat_class(seat, selected)}
                        title={seat.class.label()}
                        disabled={!seat.is_available()}
                        {onclick}
                    >
                        { &seat.seat_number }
                    </button>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use skylane_booking::SeatClass;
    use yew::LocalServerRenderer;

    fn seat(number: &str, availability: SeatAvailability) -> SeatOffer {
        SeatOffer {
            seat_number: number.to_string(),
            class: SeatClass::Economy,
            price: 900.0,
            availability,
        }
    }

    #[test]
    fn class_reflects_availability_and_selection() {
        let available = seat("1A", SeatAvailability::Available);
        assert_eq!(seat_class(&available, None), "seat seat-available");
        assert_eq!(seat_class(&available, Some("1A")), "seat seat-selected");
        assert_eq!(
            seat_class(&seat("1B", SeatAvailability::Sold), Some("1A")),
            "seat seat-sold"
        );
        assert_eq!(
            seat_class(&seat("1C", SeatAvailability::Reserved), None),
            "seat seat-reserved"
        );
    }

    #[test]
    fn grid_disables_unavailable_seats() {
        let props = SeatGridProps {
            seats: vec![
                seat("1A", SeatAvailability::Available),
                seat("1B", SeatAvailability::Sold),
            ],
            selected: None,
            on_select: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<SeatGrid>::with_props(props).render());
        assert!(html.contains("1A"));
        assert!(html.contains("seat-sold"));
        assert!(html.contains("disabled"));
    }
}
