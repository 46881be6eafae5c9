//! Window registry and surface transitions used by the desktop reducer.
//!
//! Geometry helpers are pure so they can be checked without a state container; the state-level
//! helpers keep the "free geometry exists only for free windows" rule intact.

use crate::{
    apps::AppDescriptor,
    config::WindowMetrics,
    model::{
        AppId, DesktopState, DragSession, InteractionState, LayoutMode, PointerPosition,
        ResizeSession, TileSide, Visibility, WindowRect, WindowState,
    },
    z_order,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new window was created.
    Created,
    /// The existing window for the id was shown and raised.
    Reused,
}

/// Cascaded placement and viewport-scaled size for the next new window.
pub fn initial_window_rect(
    metrics: &WindowMetrics,
    open_count: usize,
    viewport: WindowRect,
) -> WindowRect {
    let count = i32::try_from(open_count).unwrap_or(i32::MAX);
    let x = metrics.cascade_origin
        + count
            .saturating_mul(metrics.cascade_step_x)
            .rem_euclid(metrics.cascade_wrap_x.max(1));
    let y = metrics.cascade_origin
        + count
            .saturating_mul(metrics.cascade_step_y)
            .rem_euclid(metrics.cascade_wrap_y.max(1));

    WindowRect {
        x: viewport.x + x,
        y: viewport.y + y,
        w: scaled_dimension(
            viewport.w,
            metrics.viewport_fraction,
            metrics.min_width,
            metrics.max_width,
        ),
        h: scaled_dimension(
            viewport.h,
            metrics.viewport_fraction,
            metrics.min_height,
            metrics.max_height,
        ),
    }
}

fn scaled_dimension(available: i32, fraction: f64, min: i32, max: i32) -> i32 {
    let target = (f64::from(available) * fraction).round() as i32;
    target.max(min).min(max)
}

/// Region occupied by a tiled window; `None` for free windows.
pub fn tiled_rect(layout: LayoutMode, viewport: WindowRect, dock_reserve: i32) -> Option<WindowRect> {
    let usable_h = (viewport.h - dock_reserve).max(0);
    let half_w = viewport.w / 2;
    match layout {
        LayoutMode::Free => None,
        LayoutMode::TiledLeft => Some(WindowRect {
            x: viewport.x,
            y: viewport.y,
            w: half_w,
            h: usable_h,
        }),
        LayoutMode::TiledRight => Some(WindowRect {
            x: viewport.x + half_w,
            y: viewport.y,
            w: viewport.w - half_w,
            h: usable_h,
        }),
        LayoutMode::TiledFull => Some(viewport),
    }
}

/// Geometry a window currently occupies, whether free or tiled.
pub fn current_rect(window: &WindowState, viewport: WindowRect, dock_reserve: i32) -> WindowRect {
    window
        .rect
        .or_else(|| tiled_rect(window.layout, viewport, dock_reserve))
        .unwrap_or(viewport)
}

/// Window origin for a drag, kept inside the viewport and above the dock reserve.
pub fn clamp_drag_origin(
    pointer: PointerPosition,
    grab_offset: PointerPosition,
    width: i32,
    height: i32,
    viewport: WindowRect,
    dock_reserve: i32,
) -> (i32, i32) {
    let max_x = viewport.x + viewport.w - width;
    let max_y = viewport.y + viewport.h - height - dock_reserve;
    let x = (pointer.x - grab_offset.x).min(max_x).max(viewport.x);
    let y = (pointer.y - grab_offset.y).min(max_y).max(viewport.y);
    (x, y)
}

/// Start size plus pointer delta, never below the minimums.
pub fn resize_dimensions(
    start_w: i32,
    start_h: i32,
    dx: i32,
    dy: i32,
    min_w: i32,
    min_h: i32,
) -> (i32, i32) {
    (
        start_w.saturating_add(dx).max(min_w),
        start_h.saturating_add(dy).max(min_h),
    )
}

/// Opens the window for `descriptor`, or shows and raises the existing one.
pub fn open_window(
    state: &mut DesktopState,
    descriptor: &AppDescriptor,
    viewport: WindowRect,
) -> OpenOutcome {
    let outcome = match state.window_mut(&descriptor.id) {
        Some(window) => {
            window.visibility = Visibility::Shown;
            OpenOutcome::Reused
        }
        None => {
            let rect = initial_window_rect(&state.config.windows, state.windows.len(), viewport);
            let frame_url = descriptor.embedded_url(&state.config.shell.embed_query);
            state
                .windows
                .push(WindowState::new(descriptor, frame_url, rect));
            OpenOutcome::Created
        }
    };
    z_order::bring_to_front(state, &descriptor.id);
    outcome
}

pub fn close_window(state: &mut DesktopState, app_id: &AppId) -> bool {
    let before = state.windows.len();
    state.windows.retain(|window| &window.app_id != app_id);
    state.windows.len() != before
}

pub fn minimize_window(state: &mut DesktopState, app_id: &AppId) -> bool {
    let Some(window) = state.window_mut(app_id) else {
        return false;
    };
    window.visibility = Visibility::Hidden;
    true
}

/// Shows a window and raises it above the others.
pub fn restore_window(state: &mut DesktopState, app_id: &AppId) -> bool {
    let Some(window) = state.window_mut(app_id) else {
        return false;
    };
    window.visibility = Visibility::Shown;
    z_order::bring_to_front(state, app_id).is_some()
}

/// Shows every open window without touching the stacking order.
pub fn show_all_windows(state: &mut DesktopState) -> bool {
    let mut changed = false;
    for window in &mut state.windows {
        if window.visibility == Visibility::Hidden {
            window.visibility = Visibility::Shown;
            changed = true;
        }
    }
    changed
}

/// Snaps a window to a tile region, discarding its free geometry.
pub fn tile_window(state: &mut DesktopState, app_id: &AppId, side: TileSide) -> bool {
    let Some(window) = state.window_mut(app_id) else {
        return false;
    };
    window.layout = side.into();
    window.rect = None;
    true
}

/// The last one or two windows in open order; a single window fills the viewport.
pub fn arrange_recent_windows(state: &mut DesktopState) -> bool {
    let recent: Vec<AppId> = state
        .windows
        .iter()
        .rev()
        .take(2)
        .rev()
        .map(|window| window.app_id.clone())
        .collect();
    match recent.as_slice() {
        [only] => tile_window(state, only, TileSide::Full),
        [first, second] => {
            tile_window(state, first, TileSide::Left) && tile_window(state, second, TileSide::Right)
        }
        _ => false,
    }
}

/// Starts a drag. A tiled window is detiled in place first, keeping its on-screen geometry.
pub fn begin_move(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    app_id: &AppId,
    pointer: PointerPosition,
    viewport: WindowRect,
) -> bool {
    if interaction.is_active() {
        return false;
    }
    let reserve = state.config.dock.reserve_px;
    let Some(window) = state.window_mut(app_id) else {
        return false;
    };
    let rect = current_rect(window, viewport, reserve);
    window.layout = LayoutMode::Free;
    window.rect = Some(rect);

    interaction.dragging = Some(DragSession {
        app_id: app_id.clone(),
        grab_offset: PointerPosition {
            x: pointer.x - rect.x,
            y: pointer.y - rect.y,
        },
    });
    true
}

pub fn update_move(
    state: &mut DesktopState,
    interaction: &InteractionState,
    pointer: PointerPosition,
    viewport: WindowRect,
) -> bool {
    let Some(session) = interaction.dragging.as_ref() else {
        return false;
    };
    let reserve = state.config.dock.reserve_px;
    let Some(rect) = state
        .window_mut(&session.app_id)
        .and_then(|window| window.rect.as_mut())
    else {
        return false;
    };
    let (x, y) = clamp_drag_origin(pointer, session.grab_offset, rect.w, rect.h, viewport, reserve);
    if (rect.x, rect.y) == (x, y) {
        return false;
    }
    rect.x = x;
    rect.y = y;
    true
}

/// Starts a resize from the bottom-right handle, seeded from the geometry on screen.
pub fn begin_resize(
    state: &DesktopState,
    interaction: &mut InteractionState,
    app_id: &AppId,
    pointer: PointerPosition,
    viewport: WindowRect,
) -> bool {
    if interaction.is_active() {
        return false;
    }
    let Some(window) = state.window(app_id) else {
        return false;
    };
    interaction.resizing = Some(ResizeSession {
        app_id: app_id.clone(),
        pointer_start: pointer,
        start_rect: current_rect(window, viewport, state.config.dock.reserve_px),
    });
    true
}

/// Applies the pointer delta to the session's start size. A tiled window becomes free at the
/// first size change, keeping the origin it had on screen.
pub fn update_resize(
    state: &mut DesktopState,
    interaction: &InteractionState,
    pointer: PointerPosition,
) -> bool {
    let Some(session) = interaction.resizing.as_ref() else {
        return false;
    };
    let metrics = state.config.windows;
    let Some(window) = state.window_mut(&session.app_id) else {
        return false;
    };
    let (w, h) = resize_dimensions(
        session.start_rect.w,
        session.start_rect.h,
        pointer.x - session.pointer_start.x,
        pointer.y - session.pointer_start.y,
        metrics.resize_min_width,
        metrics.resize_min_height,
    );
    let current = window.rect.unwrap_or(session.start_rect);
    if (current.w, current.h) == (w, h) {
        return false;
    }
    window.layout = LayoutMode::Free;
    window.rect = Some(WindowRect { w, h, ..current });
    true
}
