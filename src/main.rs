use anyhow::Context;
use mandelzoom::{
    ClickCounter, DragGesture, Explorer, ExplorerConfig, ExplorerError, PixelBuffer, PixelPoint,
    ScreenRect, Surface,
};
use pixels::{Pixels, SurfaceTexture};
use std::time::Duration;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

/// `pixels` framebuffer sized to the window's physical client area.
struct PixelsSurface {
    pixels: Pixels,
    width: u32,
    height: u32,
}

impl PixelsSurface {
    fn new(window: &Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));
        let surface_texture = SurfaceTexture::new(width, height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> mandelzoom::Result<()> {
        self.pixels
            .resize_surface(width, height)
            .map_err(|e| ExplorerError::Surface(format!("resize surface: {e}")))?;
        self.pixels
            .resize_buffer(width, height)
            .map_err(|e| ExplorerError::Surface(format!("resize buffer: {e}")))?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn screen(&self) -> ScreenRect {
        ScreenRect::sized(self.width, self.height)
    }
}

impl Surface for PixelsSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn blit(&mut self, frame: &PixelBuffer) -> mandelzoom::Result<()> {
        let target = self.pixels.frame_mut();
        if target.len() != frame.as_bytes().len() {
            return Err(ExplorerError::Surface(format!(
                "frame is {}x{} but surface is {}x{}",
                frame.width(),
                frame.height(),
                self.width,
                self.height
            )));
        }
        target.copy_from_slice(frame.as_bytes());
        self.pixels
            .render()
            .map_err(|e| ExplorerError::Surface(e.to_string()))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => ExplorerConfig::load(&path)
            .with_context(|| format!("Failed to load config from {path}"))?,
        None => ExplorerConfig::default(),
    };

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title(0))
        .with_inner_size(LogicalSize::new(
            config.window_width as f64,
            config.window_height as f64,
        ))
        .build(&event_loop)
        .context("Failed to create window")?;

    let mut surface = PixelsSurface::new(&window).context("Failed to create pixel surface")?;
    let mut explorer = Explorer::new(&config);
    let mut drag = DragGesture::default();
    let mut clicks = ClickCounter::new(Duration::from_millis(config.double_click_ms));
    let mut cursor = PixelPoint::new(0, 0);

    log::info!("Mandelbrot explorer started");
    println!("Controls: left drag = zoom, right click = back, double right click = reset");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => {
                let mut changed = false;
                match event {
                    WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                    WindowEvent::KeyboardInput {
                        input:
                            KeyboardInput {
                                virtual_keycode: Some(VirtualKeyCode::Escape),
                                state: ElementState::Pressed,
                                ..
                            },
                        ..
                    } => {
                        if drag.is_active() {
                            drag.cancel();
                        } else {
                            *control_flow = ControlFlow::Exit;
                        }
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        cursor = PixelPoint::new(position.x as i32, position.y as i32);
                    }
                    WindowEvent::MouseInput { state, button, .. } => match (button, state) {
                        (MouseButton::Left, ElementState::Pressed) => drag.press(cursor),
                        (MouseButton::Left, ElementState::Released) => {
                            if let Some((start, end)) = drag.release(cursor) {
                                changed = explorer.zoom(start, end, surface.screen());
                            }
                        }
                        (MouseButton::Right, ElementState::Pressed) => {
                            changed = explorer.zoom_out(clicks.click());
                        }
                        _ => {}
                    },
                    WindowEvent::Resized(size) => {
                        // Minimized windows report a zero size; keep the last frame.
                        if size.width > 0 && size.height > 0 {
                            match surface.resize(size.width, size.height) {
                                Ok(()) => window.request_redraw(),
                                Err(e) => log::error!("{e}"),
                            }
                        }
                    }
                    WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                        let (w, h) = (new_inner_size.width, new_inner_size.height);
                        if w > 0 && h > 0 {
                            if let Err(e) = surface.resize(w, h) {
                                log::error!("{e}");
                            }
                        }
                    }
                    _ => {}
                }
                if changed {
                    window.set_title(&title(explorer.viewports().depth()));
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = explorer.present(&mut surface) {
                    log::error!("present failed: {e}");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}

fn title(depth: usize) -> String {
    if depth == 0 {
        "Mandelbrot".to_string()
    } else {
        format!("Mandelbrot - zoom depth {depth}")
    }
}
