use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

/// Per-frame pointer input state.
///
/// The owning loop pushes translated window events as they arrive, the
/// controller samples the accessors once per frame, and `clear_frame`
/// resets the wheel accumulator and edge latches afterwards.
pub struct Input {
    bindings: InputBindings,
    pub wheel: f32,
    cursor_pos: Option<(f32, f32)>,
    drag_held: bool,
    place_held: bool,
    place_released: bool,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(path: impl AsRef<Path>) -> Self {
        let bindings = InputBindings::load_or_default(path);
        Self::with_bindings(bindings)
    }

    fn with_bindings(bindings: InputBindings) -> Self {
        Self {
            bindings,
            wheel: 0.0,
            cursor_pos: None,
            drag_held: false,
            place_held: false,
            place_released: false,
        }
    }

    pub fn push(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::Wheel { delta } => {
                self.wheel += delta;
            }
            InputEvent::CursorPos { x, y } => {
                self.cursor_pos = Some((x, y));
            }
            InputEvent::PointerButton { button, pressed } => {
                if let Some(binding) = PointerBinding::from_button(button) {
                    let actions: Vec<_> = self.bindings.actions_for_binding(binding).collect();
                    for action in actions {
                        self.update_action_state(action, pressed);
                    }
                }
            }
            InputEvent::Other => {}
        }
    }

    pub fn clear_frame(&mut self) {
        self.wheel = 0.0;
        self.place_released = false;
    }

    pub fn consume_wheel_delta(&mut self) -> Option<f32> {
        if self.wheel.abs() > 0.0 {
            let d = self.wheel;
            self.wheel = 0.0;
            Some(d)
        } else {
            None
        }
    }

    pub fn drag_held(&self) -> bool {
        self.drag_held
    }

    /// One-frame latch for the held-to-released edge of the place button.
    pub fn take_place_released(&mut self) -> bool {
        let was = self.place_released;
        self.place_released = false;
        was
    }

    pub fn cursor_position(&self) -> Option<(f32, f32)> {
        self.cursor_pos
    }

    fn update_action_state(&mut self, action: InputAction, pressed: bool) {
        match action {
            InputAction::DragCamera => self.drag_held = pressed,
            InputAction::PlaceTile => {
                if pressed {
                    self.place_held = true;
                } else {
                    if self.place_held {
                        self.place_released = true;
                    }
                    self.place_held = false;
                }
            }
        }
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::with_bindings(InputBindings::default())
    }
}

#[derive(Debug, Clone)]
struct InputBindings {
    binding_to_actions: HashMap<PointerBinding, Vec<InputAction>>,
}

impl InputBindings {
    fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<InputConfigFile>(&contents) {
                Ok(config) => Self::from_config(config, &path.display().to_string()),
                Err(err) => {
                    eprintln!(
                        "[input] Failed to parse {}: {err}. Falling back to default bindings.",
                        path.display()
                    );
                    Self::default()
                }
            },
            Err(err) => {
                eprintln!(
                    "[input] Failed to read {}: {err}. Falling back to default bindings.",
                    path.display()
                );
                Self::default()
            }
        }
    }

    fn from_config(config: InputConfigFile, origin: &str) -> Self {
        let overrides = config.into_overrides(origin);
        Self::with_overrides(overrides)
    }

    fn with_overrides(overrides: HashMap<InputAction, Vec<PointerBinding>>) -> Self {
        let mut action_map = Self::default_action_map();
        for (action, buttons) in overrides {
            if buttons.is_empty() {
                continue;
            }
            action_map.insert(action, buttons);
        }
        Self::from_action_map(action_map)
    }

    fn default_action_map() -> HashMap<InputAction, Vec<PointerBinding>> {
        use InputAction::*;
        let mut map = HashMap::new();
        map.insert(DragCamera, vec![PointerBinding::MouseRight]);
        map.insert(PlaceTile, vec![PointerBinding::MouseLeft]);
        map
    }

    fn from_action_map(action_map: HashMap<InputAction, Vec<PointerBinding>>) -> Self {
        let mut binding_to_actions: HashMap<PointerBinding, Vec<InputAction>> = HashMap::new();
        for (action, buttons) in action_map {
            for button in buttons {
                binding_to_actions.entry(button).or_default().push(action);
            }
        }
        Self { binding_to_actions }
    }

    fn actions_for_binding(&self, binding: PointerBinding) -> impl Iterator<Item = InputAction> + '_ {
        self.binding_to_actions.get(&binding).into_iter().flatten().copied()
    }
}

impl Default for InputBindings {
    fn default() -> Self {
        Self::from_action_map(Self::default_action_map())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum PointerBinding {
    MouseLeft,
    MouseRight,
    MouseMiddle,
}

impl PointerBinding {
    fn from_button(button: MouseButton) -> Option<Self> {
        match button {
            MouseButton::Left => Some(Self::MouseLeft),
            MouseButton::Right => Some(Self::MouseRight),
            MouseButton::Middle => Some(Self::MouseMiddle),
            _ => None,
        }
    }

    fn from_config_value(raw: &str) -> Result<Self, ()> {
        match raw.trim().to_lowercase().as_str() {
            "mouse_left" | "left" => Ok(Self::MouseLeft),
            "mouse_right" | "right" => Ok(Self::MouseRight),
            "mouse_middle" | "middle" => Ok(Self::MouseMiddle),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum InputAction {
    DragCamera,
    PlaceTile,
}

impl InputAction {
    fn from_str(value: &str) -> Option<Self> {
        match value {
            "drag_camera" => Some(Self::DragCamera),
            "place_tile" => Some(Self::PlaceTile),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct InputConfigFile {
    #[serde(default)]
    bindings: HashMap<String, Vec<String>>,
}

impl InputConfigFile {
    fn into_overrides(self, origin: &str) -> HashMap<InputAction, Vec<PointerBinding>> {
        let mut overrides = HashMap::new();
        for (action_name, buttons) in self.bindings {
            let action_key = action_name.trim().to_lowercase();
            match InputAction::from_str(&action_key) {
                Some(action) => {
                    let mut parsed = Vec::new();
                    for button in buttons {
                        match PointerBinding::from_config_value(&button) {
                            Ok(binding) => parsed.push(binding),
                            Err(_) => eprintln!(
                                "[input] {origin}: unknown button '{button}' for action '{action_name}', ignoring."
                            ),
                        }
                    }
                    if parsed.is_empty() {
                        eprintln!(
                            "[input] {origin}: action '{action_name}' has no valid buttons, keeping defaults."
                        );
                        continue;
                    }
                    overrides.insert(action, parsed);
                }
                None => eprintln!("[input] {origin}: unknown action '{action_name}', ignoring."),
            }
        }
        overrides
    }
}

pub enum InputEvent {
    Wheel { delta: f32 },
    PointerButton { button: MouseButton, pressed: bool },
    CursorPos { x: f32, y: f32 },
    Other,
}

impl InputEvent {
    pub fn from_window_event(ev: &WindowEvent) -> Self {
        match ev {
            WindowEvent::MouseWheel { delta, .. } => {
                let d = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32,
                };
                InputEvent::Wheel { delta: d }
            }
            WindowEvent::CursorMoved { position, .. } => {
                InputEvent::CursorPos { x: position.x as f32, y: position.y as f32 }
            }
            WindowEvent::MouseInput { state, button, .. } => InputEvent::PointerButton {
                button: *button,
                pressed: *state == ElementState::Pressed,
            },
            _ => InputEvent::Other,
        }
    }
}
