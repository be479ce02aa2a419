pub mod grid;
pub mod initialization;
pub mod io;
