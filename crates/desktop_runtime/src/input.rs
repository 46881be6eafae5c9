//! Input dispatch table mapping raw UI events to reducer actions.
//!
//! Components translate DOM events into [`InputEvent`] values and call [`route_input`]; every rule
//! in [`INPUT_RULES`] is evaluated in order and each matching rule contributes one action.

use crate::{
    model::{AppId, DockRegion, InteractionState, PointerButton, PointerPosition, WindowRect},
    reducer::DesktopAction,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Keyboard state captured from a `keydown` event.
pub struct KeyInput {
    /// `KeyboardEvent.key`.
    pub key: String,
    /// `KeyboardEvent.code`.
    pub code: String,
    /// Control modifier held.
    pub ctrl: bool,
    /// Meta (Command) modifier held.
    pub meta: bool,
}

impl KeyInput {
    fn is_space(&self) -> bool {
        self.key == " " || self.code == "Space"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// UI-level event fed into the dispatch table.
pub enum InputEvent {
    /// Global key press.
    KeyDown(KeyInput),
    /// Pointer pressed anywhere on a window.
    WindowPointerDown {
        /// Window pressed.
        app_id: AppId,
    },
    /// Pointer pressed on a window title bar.
    TitlebarPointerDown {
        /// Window whose title bar was pressed.
        app_id: AppId,
        /// Pointer position.
        pointer: PointerPosition,
        /// Button pressed.
        button: PointerButton,
    },
    /// Pointer pressed on a window's resize handle.
    ResizeHandlePointerDown {
        /// Window whose handle was pressed.
        app_id: AppId,
        /// Pointer position.
        pointer: PointerPosition,
        /// Button pressed.
        button: PointerButton,
    },
    /// Pointer moved while a window-level capture is installed.
    PointerMove {
        /// Pointer position.
        pointer: PointerPosition,
    },
    /// Pointer released while a window-level capture is installed.
    PointerUp,
    /// Pointer entered the dock or the hotzone.
    RegionEnter(DockRegion),
    /// Pointer left the dock or the hotzone.
    RegionLeave(DockRegion),
    /// The dock hide timer fired.
    HideTimerElapsed,
}

/// Read-only context the rules consult.
pub struct InputContext<'a> {
    /// Current pointer interaction sessions.
    pub interaction: &'a InteractionState,
    /// Current desktop viewport.
    pub viewport: WindowRect,
}

type RulePredicate = fn(&InputEvent, &InputContext<'_>) -> bool;
type RuleAction = fn(&InputEvent, &InputContext<'_>) -> Option<DesktopAction>;

#[derive(Clone, Copy)]
/// One `(name, predicate, action)` row of the dispatch table.
pub struct InputRule {
    /// Stable rule name for diagnostics.
    pub name: &'static str,
    /// Whether the rule applies to the event in the current context.
    pub applies: RulePredicate,
    /// Action produced when the rule applies.
    pub action: RuleAction,
}

impl std::fmt::Debug for InputRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Ordered dispatch table.
pub static INPUT_RULES: &[InputRule] = &[
    InputRule {
        name: "escape-hides-launchpad",
        applies: |event, _| matches!(event, InputEvent::KeyDown(key) if key.key == "Escape"),
        action: |_, _| Some(DesktopAction::SetLaunchpadVisible { visible: false }),
    },
    InputRule {
        name: "modifier-space-toggles-launchpad",
        applies: |event, _| {
            matches!(event, InputEvent::KeyDown(key) if (key.ctrl || key.meta) && key.is_space())
        },
        action: |_, _| Some(DesktopAction::ToggleLaunchpad),
    },
    InputRule {
        name: "window-press-focuses",
        applies: |event, _| matches!(event, InputEvent::WindowPointerDown { .. }),
        action: |event, _| match event {
            InputEvent::WindowPointerDown { app_id } => Some(DesktopAction::FocusWindow {
                app_id: app_id.clone(),
            }),
            _ => None,
        },
    },
    InputRule {
        name: "titlebar-press-begins-move",
        applies: |event, ctx| {
            matches!(
                event,
                InputEvent::TitlebarPointerDown {
                    button: PointerButton::Primary,
                    ..
                }
            ) && !ctx.interaction.is_active()
        },
        action: |event, ctx| match event {
            InputEvent::TitlebarPointerDown {
                app_id, pointer, ..
            } => Some(DesktopAction::BeginMove {
                app_id: app_id.clone(),
                pointer: *pointer,
                viewport: ctx.viewport,
            }),
            _ => None,
        },
    },
    InputRule {
        name: "handle-press-begins-resize",
        applies: |event, ctx| {
            matches!(
                event,
                InputEvent::ResizeHandlePointerDown {
                    button: PointerButton::Primary,
                    ..
                }
            ) && !ctx.interaction.is_active()
        },
        action: |event, ctx| match event {
            InputEvent::ResizeHandlePointerDown {
                app_id, pointer, ..
            } => Some(DesktopAction::BeginResize {
                app_id: app_id.clone(),
                pointer: *pointer,
                viewport: ctx.viewport,
            }),
            _ => None,
        },
    },
    InputRule {
        name: "pointer-move-drags",
        applies: |event, ctx| {
            matches!(event, InputEvent::PointerMove { .. }) && ctx.interaction.dragging.is_some()
        },
        action: |event, ctx| match event {
            InputEvent::PointerMove { pointer } => Some(DesktopAction::UpdateMove {
                pointer: *pointer,
                viewport: ctx.viewport,
            }),
            _ => None,
        },
    },
    InputRule {
        name: "pointer-move-resizes",
        applies: |event, ctx| {
            matches!(event, InputEvent::PointerMove { .. }) && ctx.interaction.resizing.is_some()
        },
        action: |event, _| match event {
            InputEvent::PointerMove { pointer } => {
                Some(DesktopAction::UpdateResize { pointer: *pointer })
            }
            _ => None,
        },
    },
    InputRule {
        name: "pointer-up-ends-move",
        applies: |event, ctx| {
            matches!(event, InputEvent::PointerUp) && ctx.interaction.dragging.is_some()
        },
        action: |_, _| Some(DesktopAction::EndMove),
    },
    InputRule {
        name: "pointer-up-ends-resize",
        applies: |event, ctx| {
            matches!(event, InputEvent::PointerUp) && ctx.interaction.resizing.is_some()
        },
        action: |_, _| Some(DesktopAction::EndResize),
    },
    InputRule {
        name: "region-enter-reveals-dock",
        applies: |event, _| matches!(event, InputEvent::RegionEnter(_)),
        action: |event, _| match event {
            InputEvent::RegionEnter(region) => {
                Some(DesktopAction::DockPointerEntered { region: *region })
            }
            _ => None,
        },
    },
    InputRule {
        name: "region-leave-schedules-hide",
        applies: |event, _| matches!(event, InputEvent::RegionLeave(_)),
        action: |event, _| match event {
            InputEvent::RegionLeave(region) => Some(DesktopAction::DockPointerLeft { region: *region }),
            _ => None,
        },
    },
    InputRule {
        name: "hide-timer-rechecks-dock",
        applies: |event, _| matches!(event, InputEvent::HideTimerElapsed),
        action: |_, _| Some(DesktopAction::DockHideTimerElapsed),
    },
];

/// Evaluates every rule against `event` and returns the produced actions in table order.
pub fn route_input(event: &InputEvent, ctx: &InputContext<'_>) -> Vec<DesktopAction> {
    INPUT_RULES
        .iter()
        .filter(|rule| (rule.applies)(event, ctx))
        .filter_map(|rule| (rule.action)(event, ctx))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{DragSession, ResizeSession};

    const VIEWPORT: WindowRect = WindowRect {
        x: 0,
        y: 0,
        w: 1280,
        h: 800,
    };

    fn route(event: InputEvent, interaction: &InteractionState) -> Vec<DesktopAction> {
        route_input(
            &event,
            &InputContext {
                interaction,
                viewport: VIEWPORT,
            },
        )
    }

    fn key(key: &str, code: &str, ctrl: bool, meta: bool) -> InputEvent {
        InputEvent::KeyDown(KeyInput {
            key: key.to_string(),
            code: code.to_string(),
            ctrl,
            meta,
        })
    }

    #[test]
    fn keyboard_shortcuts_map_to_launchpad_actions() {
        let idle = InteractionState::default();
        assert_eq!(
            route(key("Escape", "Escape", false, false), &idle),
            vec![DesktopAction::SetLaunchpadVisible { visible: false }]
        );
        assert_eq!(
            route(key(" ", "Space", true, false), &idle),
            vec![DesktopAction::ToggleLaunchpad]
        );
        assert_eq!(
            route(key("Unidentified", "Space", false, true), &idle),
            vec![DesktopAction::ToggleLaunchpad]
        );
        assert!(route(key(" ", "Space", false, false), &idle).is_empty());
        assert!(route(key("a", "KeyA", true, false), &idle).is_empty());
    }

    #[test]
    fn only_primary_button_starts_sessions() {
        let idle = InteractionState::default();
        let press = |button| InputEvent::TitlebarPointerDown {
            app_id: AppId::from("products"),
            pointer: PointerPosition { x: 5, y: 6 },
            button,
        };
        assert_eq!(
            route(press(PointerButton::Primary), &idle),
            vec![DesktopAction::BeginMove {
                app_id: AppId::from("products"),
                pointer: PointerPosition { x: 5, y: 6 },
                viewport: VIEWPORT,
            }]
        );
        assert!(route(press(PointerButton::Other), &idle).is_empty());

        let handle = InputEvent::ResizeHandlePointerDown {
            app_id: AppId::from("products"),
            pointer: PointerPosition::default(),
            button: PointerButton::Other,
        };
        assert!(route(handle, &idle).is_empty());
    }

    #[test]
    fn pointer_events_follow_the_active_session() {
        let dragging = InteractionState {
            dragging: Some(DragSession {
                app_id: AppId::from("products"),
                grab_offset: PointerPosition::default(),
            }),
            resizing: None,
        };
        let resizing = InteractionState {
            dragging: None,
            resizing: Some(ResizeSession {
                app_id: AppId::from("products"),
                pointer_start: PointerPosition::default(),
                start_rect: WindowRect {
                    x: 24,
                    y: 24,
                    w: 980,
                    h: 640,
                },
            }),
        };
        let moved = InputEvent::PointerMove {
            pointer: PointerPosition { x: 1, y: 2 },
        };

        assert!(matches!(
            route(moved.clone(), &dragging).as_slice(),
            [DesktopAction::UpdateMove { .. }]
        ));
        assert!(matches!(
            route(moved.clone(), &resizing).as_slice(),
            [DesktopAction::UpdateResize { .. }]
        ));
        assert!(route(moved, &InteractionState::default()).is_empty());
        assert_eq!(route(InputEvent::PointerUp, &dragging), vec![DesktopAction::EndMove]);
        assert_eq!(route(InputEvent::PointerUp, &resizing), vec![DesktopAction::EndResize]);
    }

    #[test]
    fn titlebar_press_is_ignored_during_a_session() {
        let dragging = InteractionState {
            dragging: Some(DragSession {
                app_id: AppId::from("clients"),
                grab_offset: PointerPosition::default(),
            }),
            resizing: None,
        };
        let press = InputEvent::TitlebarPointerDown {
            app_id: AppId::from("products"),
            pointer: PointerPosition::default(),
            button: PointerButton::Primary,
        };
        assert!(route(press, &dragging).is_empty());
    }

    #[test]
    fn dock_regions_and_timer_route_to_dock_actions() {
        let idle = InteractionState::default();
        assert_eq!(
            route(InputEvent::RegionEnter(DockRegion::Hotzone), &idle),
            vec![DesktopAction::DockPointerEntered {
                region: DockRegion::Hotzone
            }]
        );
        assert_eq!(
            route(InputEvent::RegionLeave(DockRegion::Dock), &idle),
            vec![DesktopAction::DockPointerLeft {
                region: DockRegion::Dock
            }]
        );
        assert_eq!(
            route(InputEvent::HideTimerElapsed, &idle),
            vec![DesktopAction::DockHideTimerElapsed]
        );
    }

    #[test]
    fn rule_names_are_unique() {
        let mut names: Vec<&str> = INPUT_RULES.iter().map(|rule| rule.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), INPUT_RULES.len());
    }
}
