//! DOM event to canvas input mapping.

#[cfg(feature = "csr")]
use canvas::geom::Point;
#[cfg(feature = "csr")]
use canvas::input::PointerInput;

#[cfg(feature = "csr")]
pub fn mouse_input(ev: &leptos::ev::MouseEvent) -> PointerInput {
    PointerInput::mouse(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Active touches in order. `touchend` reports the remaining touches, which
/// is usually none.
#[cfg(feature = "csr")]
pub fn touch_input(ev: &leptos::ev::TouchEvent) -> PointerInput {
    let list = ev.touches();
    let touches = (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())))
        .collect();
    PointerInput::Touch { touches }
}
