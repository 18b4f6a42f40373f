use crate::page::PageState;
use crate::render;
use crate::viewer::Viewer;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the animation frame touches. The viewer parts stay `None`
/// on pages without a model container and until the model is on screen.
pub struct FrameContext {
    pub page: Rc<RefCell<PageState>>,
    pub viewer: Option<Rc<RefCell<Viewer>>>,
    pub gpu: Option<render::GpuState>,
    pub canvas: Option<web::HtmlCanvasElement>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(page: Rc<RefCell<PageState>>) -> Self {
        Self {
            page,
            viewer: None,
            gpu: None,
            canvas: None,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        self.page.borrow_mut().tick(dt);

        let Some(viewer) = &self.viewer else {
            return;
        };
        let mut viewer = viewer.borrow_mut();
        viewer.tick(dt);

        let (Some(g), Some(canvas)) = (&mut self.gpu, &self.canvas) else {
            return;
        };
        let w = canvas.width();
        let h = canvas.height();
        g.resize_if_needed(w, h);
        viewer.camera.set_viewport(w, h);
        match g.render(viewer.camera.view_proj(), viewer.model_matrix()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[viewer] surface lost; reconfiguring");
                g.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(callback: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(callback) = tick_clone.borrow().as_ref() {
            request_frame(callback);
        }
    }) as Box<dyn FnMut()>));
    if let Some(callback) = tick.borrow().as_ref() {
        request_frame(callback);
    }
}
