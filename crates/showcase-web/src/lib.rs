#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod hints;
mod loader;
mod page;
mod render;
mod viewer;

use config::ViewerConfig;
use constants::{DEMO_SCHEDULE_ATTR, MODEL_CONTAINER_ID, MODEL_LOADER_ID, MODEL_URL_ATTR};
use frame::FrameContext;
use hints::DomHints;
use page::PageState;
use viewer::Viewer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("showcase-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let page = Rc::new(RefCell::new(PageState::default()));
    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(page.clone())));
    events::wire_page_keydown(&document, page.clone());

    let Some(container) = dom::by_id(&document, MODEL_CONTAINER_ID) else {
        log::info!("[viewer] no #{}; page controls only", MODEL_CONTAINER_ID);
        page::wire_page(&document, &page, None);
        frame::start_loop(frame_ctx);
        return Ok(());
    };

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    dom::set_style(&canvas, "display", "none");
    dom::set_style(&canvas, "width", "100%");
    dom::set_style(&canvas, "height", "100%");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // Keep the canvas backing store at container size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas, &container);
    {
        let canvas = canvas.clone();
        let container = container.clone();
        dom::listen(&window, "resize", move || {
            dom::sync_canvas_backing_size(&canvas, &container)
        });
    }

    let config = ViewerConfig::from_attributes(
        container.get_attribute(MODEL_URL_ATTR),
        container.get_attribute(DEMO_SCHEDULE_ATTR),
    );
    log::info!(
        "[viewer] model={} schedule={:?} stepping={:?}",
        config.model_url,
        config.schedule,
        config.stepping
    );
    let aspect = container.client_width().max(1) as f32 / container.client_height().max(1) as f32;
    let viewer = Rc::new(RefCell::new(Viewer::new(
        &config,
        DomHints::from_document(&document),
        aspect,
    )));

    page::wire_page(&document, &page, Some(viewer.clone()));
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        viewer: viewer.clone(),
        drag_state: Rc::new(RefCell::new(events::DragState::default())),
    });
    frame::start_loop(frame_ctx.clone());

    let started = Instant::now();
    let mut gpu = frame::init_gpu(&canvas).await;
    let mesh = loader::load_or_substitute(&config.model_url).await;
    if let Some(g) = &mut gpu {
        g.set_mesh(&mesh);
    }

    if let Some(loader_el) = dom::by_id(&document, MODEL_LOADER_ID) {
        dom::set_style(&loader_el, "display", "none");
    }
    if gpu.is_some() {
        dom::set_style(&canvas, "display", "block");
    } else {
        log::warn!("[viewer] no renderer; the demo runs without a canvas");
    }
    viewer.borrow_mut().object_ready();
    log::info!(
        "[viewer] ready after {:.0} ms",
        started.elapsed().as_secs_f64() * 1000.0
    );

    let mut ctx = frame_ctx.borrow_mut();
    ctx.gpu = gpu;
    ctx.canvas = Some(canvas);
    ctx.viewer = Some(viewer);
    Ok(())
}
