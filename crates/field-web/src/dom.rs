use field_core::constants::{MAX_DEVICE_PIXEL_RATIO, MIN_DEVICE_PIXEL_RATIO};
use wasm_bindgen::JsCast;
use web_sys as web;

pub const CANVAS_ID: &str = "field-canvas";

const OVERLAY_STYLE: &str = "position:fixed;top:0;left:0;width:100%;height:100%;\
z-index:0;pointer-events:none;background:#000;display:block";

/// Scroll and viewport measurements in CSS pixels.
#[derive(Clone, Copy, Debug, Default)]
pub struct PageMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

/// Read the current scroll offset, document height and viewport size.
///
/// Values the browser cannot provide come back as 0; the trackers treat
/// degenerate sizes as "no input".
pub fn page_metrics(window: &web::Window) -> PageMetrics {
    let viewport_width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(viewport_height);
    PageMetrics {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        document_height,
        viewport_width,
        viewport_height,
    }
}

/// Create the full-viewport canvas and append it to `<body>`.
pub fn create_overlay_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no <body>"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_id(CANVAS_ID);
    canvas
        .set_attribute("style", OVERLAY_STYLE)
        .map_err(|e| anyhow::anyhow!("style canvas: {:?}", e))?;
    canvas
        .set_attribute("aria-hidden", "true")
        .map_err(|e| anyhow::anyhow!("aria canvas: {:?}", e))?;
    body.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
    Ok(canvas)
}

/// Match the canvas backing store to its CSS size times the device pixel
/// ratio, clamped to [1, 2].
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = clamp_pixel_ratio(w.device_pixel_ratio());
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn clamp_pixel_ratio(dpr: f64) -> f64 {
    if dpr.is_finite() {
        dpr.clamp(MIN_DEVICE_PIXEL_RATIO, MAX_DEVICE_PIXEL_RATIO)
    } else {
        MIN_DEVICE_PIXEL_RATIO
    }
}
