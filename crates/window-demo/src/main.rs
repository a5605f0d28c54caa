// File: crates/window-demo/src/main.rs
// Summary: Windowed host for the responsive scatter page. Window events are forwarded
// to the page queue; each redraw rasterizes the current surface and blits it via softbuffer.

use anyhow::{Context, Result};
use scatter_core::{ChartConfig, ChartRenderer, FileSource, Page, PageEvent, Point, Viewport};
use scatter_render_skia::{RasterOptions, SkiaSurface};
use std::num::NonZeroU32;
use tracing_subscriber::EnvFilter;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "data/data.csv".to_string());

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Poverty vs. Healthcare")
        .with_inner_size(winit::dpi::LogicalSize::new(960.0, 500.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    // Layout runs in logical pixels; the raster scales by the window's DPR.
    let scale = window.scale_factor();
    let logical = window.inner_size().to_logical::<f64>(scale);
    let renderer = ChartRenderer::new(FileSource::new(path), ChartConfig::responsive());
    let mut page = Page::new(renderer, Viewport::new(logical.width as i32, logical.height as i32));
    page.post(PageEvent::Load);

    let mut skia = SkiaSurface::new(RasterOptions { dpr: scale as f32, ..RasterOptions::default() });
    let mut size = window.inner_size();

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, window_id: _ } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    let l = new_size.to_logical::<f64>(window.scale_factor());
                    page.post(PageEvent::Resize(Viewport::new(l.width as i32, l.height as i32)));
                    window.request_redraw();
                }
                WindowEvent::ScaleFactorChanged { scale_factor, new_inner_size } => {
                    skia.opts.dpr = scale_factor as f32;
                    size = *new_inner_size;
                    let l = new_inner_size.to_logical::<f64>(scale_factor);
                    page.post(PageEvent::Resize(Viewport::new(l.width as i32, l.height as i32)));
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let p = position.to_logical::<f64>(window.scale_factor());
                    let before = page.hovered();
                    page.post(PageEvent::PointerMove(Point::new(p.x, p.y)));
                    page.run_pending();
                    if page.hovered() != before {
                        window.request_redraw();
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    page.post(PageEvent::PointerExit);
                    window.request_redraw();
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if page.run_pending() > 0 {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                page.run_pending();
                if let Err(e) = present(&page, &mut skia, &mut surface, size) {
                    tracing::error!(error = %e, "present failed");
                }
            }
            _ => {}
        }
    });
}

fn present<S: scatter_core::DataSource>(
    page: &Page<S>,
    skia: &mut SkiaSurface,
    surface: &mut softbuffer::Surface,
    size: winit::dpi::PhysicalSize<u32>,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow::anyhow!("resize: {e}"))?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("frame: {e}"))?;

    // Failed loads leave the container empty: show a blank page.
    let Some(scene) = page.container().surface() else {
        frame.fill(0x00FF_FFFF);
        return frame.present().map_err(|e| anyhow::anyhow!("present: {e}"));
    };

    let (rgba, rw, rh, stride) = skia.render_to_rgba8(scene)?;
    let (fw, fh) = (w.get() as usize, h.get() as usize);
    frame.fill(0x00FF_FFFF);
    // Raster size is rounded from logical pixels; copy the overlap only.
    for y in 0..fh.min(rh as usize) {
        for x in 0..fw.min(rw as usize) {
            let i = y * stride + x * 4;
            let (r, g, b) = (rgba[i] as u32, rgba[i + 1] as u32, rgba[i + 2] as u32);
            frame[y * fw + x] = (r << 16) | (g << 8) | b;
        }
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))
}
