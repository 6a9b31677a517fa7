use web_sys as web;

#[inline]
pub fn mouse_client(ev: &web::MouseEvent) -> (f64, f64) {
    (ev.client_x() as f64, ev.client_y() as f64)
}

/// Client coordinates of every current touch contact, in order.
pub fn touch_points(ev: &web::TouchEvent) -> Vec<(f64, f64)> {
    let list = ev.touches();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| (t.client_x() as f64, t.client_y() as f64))
        .collect()
}
