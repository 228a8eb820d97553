//! Customizable keybindings resource.
//!
//! Provides a [`KeyBindings`] resource containing every configurable keyboard
//! shortcut. Systems read from this resource instead of hardcoding `KeyCode`
//! values; the help overlay renders it grouped by category.

use bevy::prelude::*;

// =============================================================================
// Bindable Action enum
// =============================================================================

/// Every action that can be bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindableAction {
    // Driving
    Throttle,
    Reverse,
    SteerLeft,
    SteerRight,

    // Views
    ViewDriverSeat,
    ViewRearView,
    ViewTopView,

    // Mirrors
    ToggleLeftMirror,
    ToggleRightMirror,
    ToggleReversingCamera,

    // System
    ToggleHelp,
    Screenshot,
    Escape,
}

impl BindableAction {
    /// Human-readable label for display in the help overlay.
    pub fn label(self) -> &'static str {
        match self {
            Self::Throttle => "Throttle",
            Self::Reverse => "Brake / Reverse",
            Self::SteerLeft => "Steer Left",
            Self::SteerRight => "Steer Right",
            Self::ViewDriverSeat => "View: Driver Seat",
            Self::ViewRearView => "View: Rear",
            Self::ViewTopView => "View: Top-Down",
            Self::ToggleLeftMirror => "Toggle Left Mirror",
            Self::ToggleRightMirror => "Toggle Right Mirror",
            Self::ToggleReversingCamera => "Toggle Reversing Camera",
            Self::ToggleHelp => "Toggle Help",
            Self::Screenshot => "Screenshot",
            Self::Escape => "Close / Cancel",
        }
    }

    /// Category for grouping in the help overlay.
    pub fn category(self) -> &'static str {
        match self {
            Self::Throttle | Self::Reverse | Self::SteerLeft | Self::SteerRight => "Driving",

            Self::ViewDriverSeat | Self::ViewRearView | Self::ViewTopView => "Views",

            Self::ToggleLeftMirror | Self::ToggleRightMirror | Self::ToggleReversingCamera => {
                "Mirrors"
            }

            Self::ToggleHelp | Self::Screenshot | Self::Escape => "System",
        }
    }

    /// All bindable actions in display order.
    pub const ALL: &'static [BindableAction] = &[
        Self::Throttle,
        Self::Reverse,
        Self::SteerLeft,
        Self::SteerRight,
        Self::ViewDriverSeat,
        Self::ViewRearView,
        Self::ViewTopView,
        Self::ToggleLeftMirror,
        Self::ToggleRightMirror,
        Self::ToggleReversingCamera,
        Self::ToggleHelp,
        Self::Screenshot,
        Self::Escape,
    ];
}

// =============================================================================
// Key binding definition
// =============================================================================

/// A single key binding: a key code plus optional modifier flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyBinding {
    /// Create a simple binding with no modifiers.
    pub const fn simple(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
        }
    }

    /// Create a binding that requires Ctrl.
    pub const fn ctrl(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: true,
            shift: false,
        }
    }

    /// Check if this binding fired this frame (just_pressed for the key,
    /// modifiers must match exactly).
    pub fn just_pressed(self, keys: &ButtonInput<KeyCode>) -> bool {
        if !keys.just_pressed(self.key) {
            return false;
        }
        let ctrl_held = keys.pressed(KeyCode::ControlLeft) || keys.pressed(KeyCode::ControlRight);
        let shift_held = keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight);
        ctrl_held == self.ctrl && shift_held == self.shift
    }

    /// Check if this binding's key is currently held (for continuous actions
    /// like throttle and steering). Modifier state is checked as well.
    pub fn pressed(self, keys: &ButtonInput<KeyCode>) -> bool {
        if !keys.pressed(self.key) {
            return false;
        }
        let ctrl_held = keys.pressed(KeyCode::ControlLeft) || keys.pressed(KeyCode::ControlRight);
        let shift_held = keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight);
        ctrl_held == self.ctrl && shift_held == self.shift
    }

    /// Human-readable label (e.g. "Ctrl+S", "F1", "4").
    pub fn display_label(self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(keycode_label(self.key));
        parts.join("+")
    }
}

// =============================================================================
// KeyBindings resource
// =============================================================================

/// All configurable keyboard shortcuts. The `_alt` fields are secondary
/// bindings (arrow keys for driving) that are held alongside the primary one
/// and are not independently rebindable.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    // Driving
    pub throttle: KeyBinding,
    pub throttle_alt: KeyBinding,
    pub reverse: KeyBinding,
    pub reverse_alt: KeyBinding,
    pub steer_left: KeyBinding,
    pub steer_left_alt: KeyBinding,
    pub steer_right: KeyBinding,
    pub steer_right_alt: KeyBinding,

    // Views
    pub view_driver_seat: KeyBinding,
    pub view_rear: KeyBinding,
    pub view_top: KeyBinding,

    // Mirrors
    pub toggle_left_mirror: KeyBinding,
    pub toggle_right_mirror: KeyBinding,
    pub toggle_reversing_camera: KeyBinding,

    // System
    pub toggle_help: KeyBinding,
    pub screenshot: KeyBinding,
    pub escape: KeyBinding,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            throttle: KeyBinding::simple(KeyCode::KeyW),
            throttle_alt: KeyBinding::simple(KeyCode::ArrowUp),
            reverse: KeyBinding::simple(KeyCode::KeyS),
            reverse_alt: KeyBinding::simple(KeyCode::ArrowDown),
            steer_left: KeyBinding::simple(KeyCode::KeyA),
            steer_left_alt: KeyBinding::simple(KeyCode::ArrowLeft),
            steer_right: KeyBinding::simple(KeyCode::KeyD),
            steer_right_alt: KeyBinding::simple(KeyCode::ArrowRight),
            view_driver_seat: KeyBinding::simple(KeyCode::Digit1),
            view_rear: KeyBinding::simple(KeyCode::Digit2),
            view_top: KeyBinding::simple(KeyCode::Digit3),
            toggle_left_mirror: KeyBinding::simple(KeyCode::Digit4),
            toggle_right_mirror: KeyBinding::simple(KeyCode::Digit5),
            toggle_reversing_camera: KeyBinding::simple(KeyCode::Digit6),
            toggle_help: KeyBinding::simple(KeyCode::F1),
            screenshot: KeyBinding::simple(KeyCode::F12),
            escape: KeyBinding::simple(KeyCode::Escape),
        }
    }
}

impl KeyBindings {
    /// Get the binding for a specific action.
    pub fn get(&self, action: BindableAction) -> KeyBinding {
        match action {
            BindableAction::Throttle => self.throttle,
            BindableAction::Reverse => self.reverse,
            BindableAction::SteerLeft => self.steer_left,
            BindableAction::SteerRight => self.steer_right,
            BindableAction::ViewDriverSeat => self.view_driver_seat,
            BindableAction::ViewRearView => self.view_rear,
            BindableAction::ViewTopView => self.view_top,
            BindableAction::ToggleLeftMirror => self.toggle_left_mirror,
            BindableAction::ToggleRightMirror => self.toggle_right_mirror,
            BindableAction::ToggleReversingCamera => self.toggle_reversing_camera,
            BindableAction::ToggleHelp => self.toggle_help,
            BindableAction::Screenshot => self.screenshot,
            BindableAction::Escape => self.escape,
        }
    }

    /// Set the binding for a specific action.
    pub fn set(&mut self, action: BindableAction, binding: KeyBinding) {
        match action {
            BindableAction::Throttle => self.throttle = binding,
            BindableAction::Reverse => self.reverse = binding,
            BindableAction::SteerLeft => self.steer_left = binding,
            BindableAction::SteerRight => self.steer_right = binding,
            BindableAction::ViewDriverSeat => self.view_driver_seat = binding,
            BindableAction::ViewRearView => self.view_rear = binding,
            BindableAction::ViewTopView => self.view_top = binding,
            BindableAction::ToggleLeftMirror => self.toggle_left_mirror = binding,
            BindableAction::ToggleRightMirror => self.toggle_right_mirror = binding,
            BindableAction::ToggleReversingCamera => self.toggle_reversing_camera = binding,
            BindableAction::ToggleHelp => self.toggle_help = binding,
            BindableAction::Screenshot => self.screenshot = binding,
            BindableAction::Escape => self.escape = binding,
        }
    }

    /// Detect conflicts: returns pairs of actions sharing the same binding
    /// within the same category.
    pub fn find_conflicts(&self) -> Vec<(BindableAction, BindableAction)> {
        let mut conflicts = Vec::new();
        let all = BindableAction::ALL;
        for (i, &a) in all.iter().enumerate() {
            for &b in &all[i + 1..] {
                if a.category() != b.category() {
                    continue;
                }
                if self.get(a) == self.get(b) {
                    conflicts.push((a, b));
                }
            }
        }
        conflicts
    }
}

/// Short display label for a key code.
pub fn keycode_label(key: KeyCode) -> &'static str {
    match key {
        KeyCode::KeyA => "A",
        KeyCode::KeyD => "D",
        KeyCode::KeyS => "S",
        KeyCode::KeyW => "W",
        KeyCode::Digit1 => "1",
        KeyCode::Digit2 => "2",
        KeyCode::Digit3 => "3",
        KeyCode::Digit4 => "4",
        KeyCode::Digit5 => "5",
        KeyCode::Digit6 => "6",
        KeyCode::F1 => "F1",
        KeyCode::F12 => "F12",
        KeyCode::Escape => "Esc",
        KeyCode::Space => "Space",
        KeyCode::ArrowUp => "Up",
        KeyCode::ArrowDown => "Down",
        KeyCode::ArrowLeft => "Left",
        KeyCode::ArrowRight => "Right",
        _ => "?",
    }
}

// =============================================================================
// Tests
// =============================================================================
