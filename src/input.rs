use glfw::{Action, Key, Window};

/// Polled keyboard state. The window implements it; tests use a fake.
pub trait KeyState {
    fn get_key(&self, key: Key) -> Action;

    fn is_held(&self, key: Key) -> bool {
        matches!(self.get_key(key), Action::Press | Action::Repeat)
    }
}

impl KeyState for Window {
    fn get_key(&self, key: Key) -> Action {
        Window::get_key(self, key)
    }
}
