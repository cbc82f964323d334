mod bookings;
mod dashboard;
mod layout;
mod room_form;
mod rooms;

pub use bookings::AdminBookings;
pub use dashboard::AdminDashboard;
pub use layout::AdminLayout;
pub use room_form::{CreateRoom, EditRoom};
pub use rooms::RoomManagement;
