mod loader;
mod model;
mod room_name;
mod validator;
mod writer;

pub use loader::{load_map_from_file, load_map_from_str};
pub use writer::{map_to_string, save_map_to_file};

// Re-export only what the sanitizer and the binary use.
pub use model::{MapDocument, ObjectEntry, RoomEntry};
pub use room_name::{Horizontal, RoomName, RoomNameError, Vertical, is_highway_room};
pub use validator::{ValidationError, validate_map};
