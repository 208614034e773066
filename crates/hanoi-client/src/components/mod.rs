mod board;
mod disk_count_select;
mod victory_modal;

pub use board::Board;
pub use disk_count_select::{DiskCountSelect, MAX_DISK_CHOICE};
pub use victory_modal::VictoryModal;
