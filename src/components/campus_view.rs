use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, EventTarget, HtmlCanvasElement};
use yew::prelude::*;

use super::camera_controls::CameraControls;
use crate::input::{InteractionController, MouseButton, element_point, point_within, scroll_amount};
use crate::model::{BUILDING_SIZE, BuildingType, CampusState};
use crate::state::{Camera, CameraView};

/// Spacing of the background grid, in world units.
const GRID_STEP: f64 = 64.0;

pub type CampusController = InteractionController<Camera>;

/// Shared controller passed down as a prop; equal when it is the same instance.
#[derive(Clone)]
pub struct ControllerHandle(pub Rc<RefCell<CampusController>>);

impl PartialEq for ControllerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CampusViewProps {
    pub controller: ControllerHandle,
    pub campus: UseReducerHandle<CampusState>,
    pub on_cancel: Callback<()>,
}

type DrawRef = Rc<RefCell<Option<Rc<dyn Fn()>>>>;

fn redraw(draw_ref: &DrawRef) {
    let draw = draw_ref.borrow().clone();
    if let Some(f) = draw {
        f();
    }
}

fn listen<T: ?Sized>(target: &EventTarget, name: &str, cb: &Closure<T>) {
    if let Err(e) = target.add_event_listener_with_callback(name, cb.as_ref().unchecked_ref()) {
        log::error!("could not listen for `{name}`: {e:?}");
    }
}

fn unlisten<T: ?Sized>(target: &EventTarget, name: &str, cb: &Closure<T>) {
    let _ = target.remove_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
}

/// Pointer position in canvas pixels; valid while the pointer is outside the canvas too.
fn canvas_point(canvas: &HtmlCanvasElement, e: &web_sys::MouseEvent) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    element_point(e.client_x() as f64, e.client_y() as f64, rect.left(), rect.top())
}

fn draw_grid(ctx: &CanvasRenderingContext2d, cam: &Camera) {
    let (min_x, min_y, max_x, max_y) = cam.visible_bounds();
    ctx.set_line_width(cam.zoom);
    ctx.set_stroke_style_str("#21262d");
    let mut x = (min_x / GRID_STEP).floor() * GRID_STEP;
    while x <= max_x {
        ctx.begin_path();
        ctx.move_to(x, min_y);
        ctx.line_to(x, max_y);
        ctx.stroke();
        x += GRID_STEP;
    }
    let mut y = (min_y / GRID_STEP).floor() * GRID_STEP;
    while y <= max_y {
        ctx.begin_path();
        ctx.move_to(min_x, y);
        ctx.line_to(max_x, y);
        ctx.stroke();
        y += GRID_STEP;
    }
    // world axes
    ctx.set_stroke_style_str("#30363d");
    ctx.begin_path();
    ctx.move_to(0.0, min_y);
    ctx.line_to(0.0, max_y);
    ctx.move_to(min_x, 0.0);
    ctx.line_to(max_x, 0.0);
    ctx.stroke();
}

fn draw_building(ctx: &CanvasRenderingContext2d, kind: BuildingType, x: f64, y: f64, zoom: f64, alpha: f64) {
    let half = BUILDING_SIZE * 0.5;
    ctx.set_global_alpha(alpha);
    ctx.set_fill_style_str(kind.color());
    ctx.fill_rect(x - half, y - half, BUILDING_SIZE, BUILDING_SIZE);
    ctx.set_stroke_style_str("#0d1117");
    ctx.set_line_width(2.0 * zoom);
    ctx.stroke_rect(x - half, y - half, BUILDING_SIZE, BUILDING_SIZE);
    ctx.set_global_alpha(1.0);
}

#[function_component(CampusView)]
pub fn campus_view(props: &CampusViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let draw_ref: DrawRef = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    let campus_ref = use_mut_ref(|| props.campus.clone());
    let hover = use_mut_ref(|| None::<(f64, f64)>);

    // Effect: refresh campus_ref to the latest handle and redraw when buildings or selection change
    {
        let campus_ref = campus_ref.clone();
        let handle = props.campus.clone();
        let draw_ref = draw_ref.clone();
        let deps = (
            props.campus.placed.len(),
            props.campus.selected.map(|b| b.kind),
        );
        use_effect_with(deps, move |_| {
            *campus_ref.borrow_mut() = handle;
            redraw(&draw_ref);
            || ()
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let controller = props.controller.0.clone();
        let draw_ref = draw_ref.clone();
        let campus_ref = campus_ref.clone();
        let hover = hover.clone();
        let on_cancel = props.on_cancel.clone();

        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let canvas: HtmlCanvasElement = canvas_ref
                .cast::<HtmlCanvasElement>()
                .expect("canvas_ref not attached to a canvas element");

            let resize_canvas = {
                let canvas = canvas.clone();
                let window = window.clone();
                let controller = controller.clone();
                move || {
                    let width = window
                        .inner_width()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(800.0);
                    let height = window
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(600.0);
                    canvas.set_width(width.max(0.0) as u32);
                    canvas.set_height(height.max(0.0) as u32);
                    controller.borrow_mut().camera_mut().set_viewport(width, height);
                }
            };
            resize_canvas();

            let draw: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                let controller = controller.clone();
                let campus_ref = campus_ref.clone();
                let hover = hover.clone();
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let Some(ctx) = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
                    else {
                        return;
                    };
                    // Skipped while an input handler holds the controller; it redraws afterwards.
                    let Ok(ctl) = controller.try_borrow() else {
                        return;
                    };
                    let cam = ctl.camera();
                    let campus = campus_ref.borrow();
                    let w = canvas.width() as f64;
                    let h = canvas.height() as f64;

                    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
                    ctx.set_fill_style_str("#0e1116");
                    ctx.fill_rect(0.0, 0.0, w, h);

                    // World space: y up, one pixel = `zoom` world units.
                    let s = 1.0 / cam.zoom;
                    ctx.set_transform(s, 0.0, 0.0, -s, w * 0.5 - cam.x * s, h * 0.5 + cam.y * s)
                        .ok();
                    draw_grid(&ctx, cam);
                    for b in &campus.placed {
                        draw_building(&ctx, b.kind, b.x, b.y, cam.zoom, 1.0);
                    }
                    if ctl.is_placing_building() {
                        if let (Some(sel), Some((hx, hy))) = (campus.selected, *hover.borrow()) {
                            let (wx, wy) = cam.unproject(hx, hy);
                            draw_building(&ctx, sel.kind, wx, wy, cam.zoom, 0.45);
                        }
                    }

                    // Initials in screen space so text is not mirrored.
                    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
                    ctx.set_fill_style_str("#e6edf3");
                    ctx.set_font("bold 13px sans-serif");
                    ctx.set_text_align("center");
                    ctx.set_text_baseline("middle");
                    for b in &campus.placed {
                        let (sx, sy) = cam.project(b.x, b.y);
                        ctx.fill_text(&b.kind.name()[..1], sx, sy).ok();
                    }
                })
            };
            *draw_ref.borrow_mut() = Some(draw);
            redraw(&draw_ref);

            let mousedown_cb = {
                let canvas = canvas.clone();
                let controller = controller.clone();
                let draw_ref = draw_ref.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let (x, y) = canvas_point(&canvas, &e);
                    let handled = controller
                        .borrow_mut()
                        .on_press(MouseButton::from_dom(e.button()), x, y);
                    if handled {
                        e.prevent_default();
                    }
                    redraw(&draw_ref);
                }) as Box<dyn FnMut(_)>)
            };
            // On the window so a drag keeps panning once the pointer leaves the canvas.
            let mousemove_cb = {
                let canvas = canvas.clone();
                let controller = controller.clone();
                let draw_ref = draw_ref.clone();
                let hover = hover.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let (x, y) = canvas_point(&canvas, &e);
                    let inside = point_within((x, y), canvas.width() as f64, canvas.height() as f64);
                    *hover.borrow_mut() = inside.then_some((x, y));
                    let (moved, placing) = {
                        let mut ctl = controller.borrow_mut();
                        (ctl.on_pointer_move(x, y), ctl.is_placing_building())
                    };
                    if moved || placing {
                        redraw(&draw_ref);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let mouseleave_cb = {
                let hover = hover.clone();
                let draw_ref = draw_ref.clone();
                Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
                    *hover.borrow_mut() = None;
                    redraw(&draw_ref);
                }) as Box<dyn FnMut(_)>)
            };
            let mouseup_cb = {
                let controller = controller.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    controller
                        .borrow_mut()
                        .on_release(MouseButton::from_dom(e.button()));
                }) as Box<dyn FnMut(_)>)
            };
            let wheel_cb = {
                let controller = controller.clone();
                let draw_ref = draw_ref.clone();
                Closure::wrap(Box::new(move |e: web_sys::WheelEvent| {
                    e.prevent_default();
                    let amount = scroll_amount(e.delta_y(), e.delta_mode());
                    controller.borrow_mut().on_scroll(amount);
                    redraw(&draw_ref);
                }) as Box<dyn FnMut(_)>)
            };
            let keydown_cb = {
                let draw_ref = draw_ref.clone();
                Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                    if e.key() == "Escape" {
                        e.prevent_default();
                        on_cancel.emit(());
                        redraw(&draw_ref);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let contextmenu_cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
                e.prevent_default();
            }) as Box<dyn FnMut(_)>);
            let resize_cb = {
                let draw_ref = draw_ref.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    resize_canvas();
                    redraw(&draw_ref);
                }) as Box<dyn FnMut(_)>)
            };

            listen(&canvas, "mousedown", &mousedown_cb);
            listen(&window, "mousemove", &mousemove_cb);
            listen(&canvas, "mouseleave", &mouseleave_cb);
            listen(&canvas, "wheel", &wheel_cb);
            listen(&canvas, "contextmenu", &contextmenu_cb);
            listen(&window, "mouseup", &mouseup_cb);
            listen(&window, "keydown", &keydown_cb);
            listen(&window, "resize", &resize_cb);

            // Cleanup
            move || {
                unlisten(&canvas, "mousedown", &mousedown_cb);
                unlisten(&window, "mousemove", &mousemove_cb);
                unlisten(&canvas, "mouseleave", &mouseleave_cb);
                unlisten(&canvas, "wheel", &wheel_cb);
                unlisten(&canvas, "contextmenu", &contextmenu_cb);
                unlisten(&window, "mouseup", &mouseup_cb);
                unlisten(&window, "keydown", &keydown_cb);
                unlisten(&window, "resize", &resize_cb);
                *draw_ref.borrow_mut() = None;
            }
        });
    }

    let zoom_cb = |amount: f64| {
        let controller = props.controller.0.clone();
        let draw_ref = draw_ref.clone();
        Callback::from(move |_| {
            controller.borrow_mut().on_scroll(amount);
            redraw(&draw_ref);
        })
    };
    let center_cb = {
        let controller = props.controller.0.clone();
        let draw_ref = draw_ref.clone();
        Callback::from(move |_| {
            controller.borrow_mut().camera_mut().center_on(0.0, 0.0);
            redraw(&draw_ref);
        })
    };

    let cursor = if props.campus.selected.is_some() { "crosshair" } else { "grab" };
    html! {
        <>
            <canvas ref={canvas_ref} style={format!("display:block; cursor:{};", cursor)}></canvas>
            <CameraControls on_zoom_in={zoom_cb(-1.0)} on_zoom_out={zoom_cb(1.0)} on_center={center_cb} />
        </>
    }
}
